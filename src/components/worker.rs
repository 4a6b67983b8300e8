use askama::Template;

use crate::{
    components::{
        service::price_label,
        ui::{stars, Avatar, AvatarSize, Badge, Button, ButtonVariant, Tone},
    },
    i18n::Translator,
    icons::Icon,
    models::{format_price, Location, WorkerDetail},
};

fn rating_text(rating: f32) -> String {
    format!("{rating:.1}")
}

fn status_badge(t: Translator, online: bool) -> Badge {
    if online {
        Badge::new(t.get("worker.online"), Tone::Success)
    } else {
        Badge::new(t.get("worker.offline"), Tone::Neutral)
    }
}

pub fn chat_href(worker: &WorkerDetail) -> String {
    format!("/workers/{}?chat=open", worker.id)
}

/// Booking link for the worker's first listed service, if any.
pub fn book_href(worker: &WorkerDetail) -> Option<String> {
    worker
        .services
        .first()
        .map(|service| format!("/book/{}?worker={}", service.service_id, worker.id))
}

/// Compact worker tile used on listings.
#[derive(Template)]
#[template(path = "components/worker_card.html")]
pub struct WorkerCard {
    t: Translator,
    avatar: Avatar,
    name: String,
    category: String,
    rating: String,
    distance: String,
    status: Badge,
    href: String,
}

impl WorkerCard {
    pub fn new(t: Translator, worker: &WorkerDetail) -> Self {
        Self {
            t,
            avatar: Avatar::new(&worker.name, worker.image.as_deref(), AvatarSize::Small),
            name: worker.name.clone(),
            category: worker.category.clone(),
            rating: rating_text(worker.rating),
            distance: format!("{:.1}", worker.distance_km),
            status: status_badge(t, worker.online),
            href: format!("/workers/{}", worker.id),
        }
    }
}

#[derive(Template)]
#[template(path = "components/worker_header.html")]
pub struct WorkerHeader {
    t: Translator,
    avatar: Avatar,
    name: String,
    category: String,
    rating: String,
    review_count: u32,
    distance: String,
    pin: String,
    verified: Option<Badge>,
    status: Badge,
}

impl WorkerHeader {
    pub fn new(t: Translator, worker: &WorkerDetail) -> Self {
        Self {
            t,
            avatar: Avatar::new(&worker.name, worker.image.as_deref(), AvatarSize::Large),
            name: worker.name.clone(),
            category: worker.category.clone(),
            rating: rating_text(worker.rating),
            review_count: worker.review_count,
            distance: format!("{:.1}", worker.distance_km),
            pin: Icon::MapPin.svg(),
            verified: worker
                .verified
                .then(|| Badge::new(t.get("worker.verified"), Tone::Info)),
            status: status_badge(t, worker.online),
        }
    }
}

#[derive(Template)]
#[template(path = "components/worker_about.html")]
pub struct WorkerAbout {
    t: Translator,
    bio: String,
    experience_years: u32,
    specializations: Vec<String>,
    map_href: String,
}

impl WorkerAbout {
    pub fn new(t: Translator, worker: &WorkerDetail) -> Self {
        Self {
            t,
            bio: worker.bio.clone(),
            experience_years: worker.experience_years,
            specializations: worker.specializations.clone(),
            map_href: map_href(worker.location),
        }
    }
}

fn map_href(location: Location) -> String {
    format!(
        "https://www.google.com/maps?q={:.4},{:.4}",
        location.lat, location.lng
    )
}

#[derive(Clone, Debug)]
struct ServiceRow {
    name: String,
    price: String,
    price_label: String,
    book_href: String,
}

#[derive(Template)]
#[template(path = "components/worker_services.html")]
pub struct WorkerServices {
    t: Translator,
    rows: Vec<ServiceRow>,
}

impl WorkerServices {
    pub fn new(t: Translator, worker: &WorkerDetail) -> Self {
        let rows = worker
            .services
            .iter()
            .map(|service| ServiceRow {
                name: service.name.clone(),
                price: format_price(service.price),
                price_label: price_label(t, service.price_type),
                book_href: format!("/book/{}?worker={}", service.service_id, worker.id),
            })
            .collect();
        Self { t, rows }
    }
}

#[derive(Clone, Debug)]
struct ReviewRow {
    avatar: Avatar,
    customer_name: String,
    stars: String,
    date: String,
    comment: String,
}

#[derive(Template)]
#[template(path = "components/worker_reviews.html")]
pub struct WorkerReviews {
    t: Translator,
    rows: Vec<ReviewRow>,
}

impl WorkerReviews {
    pub fn new(t: Translator, worker: &WorkerDetail) -> Self {
        let rows = worker
            .reviews
            .iter()
            .map(|review| ReviewRow {
                avatar: Avatar::new(
                    &review.customer_name,
                    review.avatar.as_deref(),
                    AvatarSize::Small,
                ),
                customer_name: review.customer_name.clone(),
                stars: stars(review.rating),
                date: review.date.clone(),
                comment: review.comment.clone(),
            })
            .collect();
        Self { t, rows }
    }
}

/// Side panel with the visit fee and the book / chat actions.
#[derive(Template)]
#[template(path = "components/booking_panel.html")]
pub struct BookingPanel {
    t: Translator,
    fee: String,
    book: Option<Button>,
    chat: Button,
}

impl BookingPanel {
    pub fn new(t: Translator, worker: &WorkerDetail) -> Self {
        Self {
            t,
            fee: format_price(worker.fee),
            book: book_href(worker)
                .map(|href| Button::link(t.get("worker.book"), href, ButtonVariant::Primary)),
            chat: Button::link(t.get("worker.chat"), chat_href(worker), ButtonVariant::Outline),
        }
    }
}
