use std::future::{ready, Ready};

use actix_web::{
    body::MessageBody,
    dev::{Payload, ServiceRequest, ServiceResponse},
    middleware::Next,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};

use crate::{error::AppError, state::AppState};

pub const LANGUAGE_COOKIE: &str = "hm_lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ur,
}

impl Language {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "ur" => Some(Self::Ur),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ur => "ur",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::En => Self::Ur,
            Self::Ur => Self::En,
        }
    }
}

/// Key, English, Urdu.
const TABLE: &[(&str, &str, &str)] = &[
    ("app.name", "Hunarmand", "ہنرمند"),
    ("lang.other", "اردو", "English"),
    ("nav.home", "Home", "ہوم"),
    ("nav.bookings", "My bookings", "میری بکنگز"),
    ("nav.profile", "Profile", "پروفائل"),
    ("nav.dashboard", "Dashboard", "ڈیش بورڈ"),
    ("nav.jobs", "Jobs", "کام"),
    ("nav.login", "Sign in", "سائن ان"),
    ("nav.logout", "Sign out", "سائن آؤٹ"),
    ("nav.menu", "Menu", "مینو"),
    ("nav.close", "Close", "بند کریں"),
    ("home.title", "Skilled help, booked in minutes", "ماہر مدد، منٹوں میں بک کریں"),
    (
        "home.subtitle",
        "Verified plumbers, electricians, carpenters and more, near you.",
        "تصدیق شدہ پلمبر، الیکٹریشن، بڑھئی اور بہت کچھ، آپ کے قریب۔",
    ),
    ("home.categories", "Browse categories", "زمرے دیکھیں"),
    ("home.featured", "Top rated workers", "بہترین کاریگر"),
    ("category.subcategories", "Choose a service type", "سروس کی قسم منتخب کریں"),
    ("services.search", "Search services", "سروسز تلاش کریں"),
    ("services.search_button", "Search", "تلاش"),
    ("services.empty", "No services match your search.", "آپ کی تلاش سے کوئی سروس نہیں ملی۔"),
    ("services.book", "Book now", "ابھی بک کریں"),
    ("services.details", "Details", "تفصیلات"),
    ("services.workers", "Available workers", "دستیاب کاریگر"),
    ("services.no_workers", "No workers available right now.", "ابھی کوئی کاریگر دستیاب نہیں۔"),
    ("price.fixed", "Fixed price", "مقررہ قیمت"),
    ("price.estimated", "Estimated", "تخمینہ"),
    ("worker.verified", "Verified", "تصدیق شدہ"),
    ("worker.online", "Online", "آن لائن"),
    ("worker.offline", "Offline", "آف لائن"),
    ("worker.about", "About", "تعارف"),
    ("worker.experience", "Years of experience", "سال کا تجربہ"),
    ("worker.map", "View on map", "نقشے پر دیکھیں"),
    ("worker.specializations", "Specializations", "مہارتیں"),
    ("worker.services", "Services", "سروسز"),
    ("worker.reviews", "Reviews", "تبصرے"),
    ("worker.no_reviews", "No reviews yet.", "ابھی کوئی تبصرہ نہیں۔"),
    ("worker.km_away", "km away", "کلومیٹر دور"),
    ("worker.visit_fee", "Visit fee", "وزٹ فیس"),
    ("worker.chat", "Chat", "چیٹ"),
    ("worker.book", "Book this worker", "اس کاریگر کو بک کریں"),
    ("worker.view", "View profile", "پروفائل دیکھیں"),
    ("not_found.worker", "Worker not found", "کاریگر نہیں ملا"),
    ("not_found.service", "Service not found", "سروس نہیں ملی"),
    ("not_found.category", "Category not found", "زمرہ نہیں ملا"),
    ("not_found.customer", "Profile not found", "پروفائل نہیں ملا"),
    ("not_found.back", "Back to home", "ہوم پر واپس جائیں"),
    ("booking.title", "Book a service", "سروس بک کریں"),
    ("booking.worker", "Worker", "کاریگر"),
    ("booking.any_worker", "Any available worker", "کوئی بھی دستیاب کاریگر"),
    ("booking.date", "Date", "تاریخ"),
    ("booking.time", "Time", "وقت"),
    ("booking.address", "Address", "پتہ"),
    ("booking.description", "Describe the job", "کام کی تفصیل"),
    ("booking.submit", "Confirm booking", "بکنگ کی تصدیق کریں"),
    ("booking.success", "Booking request sent", "بکنگ کی درخواست بھیج دی گئی"),
    ("booking.reference", "Reference", "حوالہ"),
    ("booking.estimated", "Estimated cost", "تخمینی لاگت"),
    ("booking.view_all", "View my bookings", "میری بکنگز دیکھیں"),
    ("booking.error.date", "Please pick a date.", "براہ کرم تاریخ منتخب کریں۔"),
    ("booking.error.time", "Please pick a time.", "براہ کرم وقت منتخب کریں۔"),
    ("booking.error.address", "Service address is required.", "سروس کا پتہ ضروری ہے۔"),
    ("booking.error.description", "Please describe the job.", "براہ کرم کام کی تفصیل لکھیں۔"),
    ("booking.error.worker", "The selected worker is not available.", "منتخب کاریگر دستیاب نہیں۔"),
    ("bookings.title", "My bookings", "میری بکنگز"),
    ("bookings.empty", "No bookings yet.", "ابھی کوئی بکنگ نہیں۔"),
    ("status.pending", "Pending", "زیر التوا"),
    ("status.confirmed", "Confirmed", "تصدیق شدہ"),
    ("status.accepted", "Accepted", "قبول شدہ"),
    ("status.rejected", "Rejected", "مسترد"),
    ("status.in_progress", "In progress", "جاری"),
    ("status.completed", "Completed", "مکمل"),
    ("status.cancelled", "Cancelled", "منسوخ"),
    ("profile.title", "My profile", "میرا پروفائل"),
    ("profile.email", "Email", "ای میل"),
    ("profile.phone", "Phone", "فون"),
    ("stats.total", "Total bookings", "کل بکنگز"),
    ("stats.completed", "Completed", "مکمل"),
    ("stats.active", "Active", "فعال"),
    ("stats.spent", "Total spent", "کل خرچ"),
    ("dashboard.title", "Welcome back", "خوش آمدید"),
    ("dashboard.incoming", "Incoming jobs", "آنے والے کام"),
    ("dashboard.rating", "Rating", "ریٹنگ"),
    ("dashboard.earnings", "Earnings", "آمدنی"),
    ("dashboard.jobs_done", "Jobs completed", "مکمل کام"),
    ("dashboard.no_jobs", "No jobs yet.", "ابھی کوئی کام نہیں۔"),
    ("chat.title", "Messages", "پیغامات"),
    ("chat.placeholder", "Type a message", "پیغام لکھیں"),
    ("chat.send", "Send", "بھیجیں"),
    ("chat.greeting", "Hello! How can I help you today?", "السلام علیکم! میں آپ کی کیا مدد کر سکتا ہوں؟"),
    (
        "chat.reply",
        "Thanks for your message. I will get back to you shortly.",
        "پیغام کا شکریہ۔ میں جلد آپ سے رابطہ کروں گا۔",
    ),
    ("chat.typing", "typing…", "لکھ رہا ہے…"),
    ("login.title", "Sign in to your account", "اپنے اکاؤنٹ میں سائن ان کریں"),
    ("login.email", "Email", "ای میل"),
    ("login.password", "Password", "پاس ورڈ"),
    ("login.show_password", "Show", "دکھائیں"),
    ("login.hide_password", "Hide", "چھپائیں"),
    ("login.submit", "Sign in", "سائن ان"),
    ("login.error", "Something went wrong. Please try again.", "کچھ غلط ہو گیا۔ دوبارہ کوشش کریں۔"),
    ("reviews.count", "reviews", "تبصرے"),
];

/// Locale attached to a request by [`language_provider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageContext {
    language: Language,
}

impl LanguageContext {
    pub fn translator(&self) -> Translator {
        Translator {
            language: self.language,
        }
    }
}

/// Translation lookup for one locale. Only obtainable from a [`LanguageContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn code(&self) -> &'static str {
        self.language.code()
    }

    pub fn other_code(&self) -> &'static str {
        self.language.other().code()
    }

    pub fn dir(&self) -> &'static str {
        match self.language {
            Language::En => "ltr",
            Language::Ur => "rtl",
        }
    }

    /// Unknown keys come back unchanged.
    pub fn get<'a>(&self, key: &'a str) -> &'a str {
        match TABLE.iter().find(|(k, _, _)| *k == key) {
            Some((_, en, ur)) => match self.language {
                Language::En => *en,
                Language::Ur => *ur,
            },
            None => {
                log::warn!("Missing translation key: {key}");
                key
            }
        }
    }

    /// Picks between a record's primary and Urdu name.
    pub fn pick<'a>(&self, en: &'a str, ur: &'a str) -> &'a str {
        match self.language {
            Language::Ur if !ur.trim().is_empty() => ur,
            _ => en,
        }
    }
}

impl FromRequest for Translator {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<LanguageContext>()
                .map(LanguageContext::translator)
                .ok_or(AppError::MissingLanguageProvider),
        )
    }
}

pub async fn language_provider<B>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<B>, Error>
where
    B: MessageBody + 'static,
{
    let fallback = req
        .app_data::<web::Data<AppState>>()
        .map(|state| state.config.default_language)
        .unwrap_or_default();
    let language = req
        .cookie(LANGUAGE_COOKIE)
        .and_then(|cookie| Language::from_code(cookie.value()))
        .unwrap_or(fallback);

    req.extensions_mut().insert(LanguageContext { language });
    next.call(req).await
}

#[cfg(test)]
pub fn translator(language: Language) -> Translator {
    LanguageContext { language }.translator()
}
