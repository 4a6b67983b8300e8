use chrono::{DateTime, TimeZone, Utc};

use crate::{
    icons::Icon,
    models::{
        Booking, BookingStatus, CustomerProfile, CustomerStats, Location, PriceType, Review,
        ServiceCategory, ServiceItem, SubCategory, WorkerDetail, WorkerService, WorkerSummary,
    },
};

pub const CURRENT_CUSTOMER_ID: &str = "c-1";
pub const CURRENT_WORKER_ID: &str = "w-1";

fn category(id: &str, name: &str, name_ur: &str, description: &str, icon: Icon) -> ServiceCategory {
    ServiceCategory {
        id: id.to_string(),
        name: name.to_string(),
        name_ur: name_ur.to_string(),
        description: description.to_string(),
        icon,
    }
}

pub fn categories() -> Vec<ServiceCategory> {
    vec![
        category("plumbing", "Plumbing", "پلمبنگ", "Leaks, taps, pipes and water tanks.", Icon::Wrench),
        category("electrical", "Electrical", "الیکٹریکل", "Wiring, fans, lights and breakers.", Icon::Bolt),
        category("carpentry", "Carpentry", "بڑھئی کا کام", "Furniture, doors and fittings.", Icon::Hammer),
        category("cleaning", "Cleaning", "صفائی", "Home and office deep cleaning.", Icon::Sparkles),
        category("painting", "Painting", "رنگ و روغن", "Interior and exterior painting.", Icon::Brush),
        category("ac-repair", "AC Repair", "اے سی مرمت", "Servicing, gas refill and installation.", Icon::Snowflake),
    ]
}

fn sub(id: &str, category_id: &str, name: &str, name_ur: &str, description: &str) -> SubCategory {
    SubCategory {
        id: id.to_string(),
        category_id: category_id.to_string(),
        name: name.to_string(),
        name_ur: name_ur.to_string(),
        description: description.to_string(),
    }
}

pub fn sub_categories() -> Vec<SubCategory> {
    vec![
        sub("plumbing-repairs", "plumbing", "Repairs", "مرمت", "Fix leaks and broken fittings."),
        sub("plumbing-install", "plumbing", "Installation", "تنصیب", "New taps, geysers and pumps."),
        sub("electrical-repairs", "electrical", "Repairs", "مرمت", "Faults, short circuits and trips."),
        sub("electrical-install", "electrical", "Installation", "تنصیب", "Fans, lights and sockets."),
        sub("carpentry-furniture", "carpentry", "Furniture", "فرنیچر", "Assembly and repair."),
        sub("carpentry-doors", "carpentry", "Doors & Windows", "دروازے اور کھڑکیاں", "Hinges, locks and frames."),
        sub("cleaning-home", "cleaning", "Home", "گھر", "Room by room deep clean."),
        sub("cleaning-tanks", "cleaning", "Water Tanks", "پانی کی ٹینکی", "Tank washing and disinfection."),
        sub("painting-interior", "painting", "Interior", "اندرونی", "Walls, ceilings and trims."),
        sub("painting-exterior", "painting", "Exterior", "بیرونی", "Weatherproof outdoor coats."),
        sub("ac-service", "ac-repair", "Servicing", "سروس", "Cleaning and performance check."),
        sub("ac-install", "ac-repair", "Installation", "تنصیب", "Split and window units."),
    ]
}

fn service(
    id: &str,
    sub_category_id: &str,
    name: &str,
    name_ur: &str,
    price: u32,
    price_type: PriceType,
    description: &str,
) -> ServiceItem {
    ServiceItem {
        id: id.to_string(),
        sub_category_id: sub_category_id.to_string(),
        name: name.to_string(),
        name_ur: name_ur.to_string(),
        price,
        price_type,
        description: description.to_string(),
    }
}

pub fn services() -> Vec<ServiceItem> {
    use PriceType::{Estimated, Fixed};
    vec![
        service("s-tap-repair", "plumbing-repairs", "Tap Repair", "نل کی مرمت", 800, Fixed, "Fix a dripping or broken tap."),
        service("s-leak-fix", "plumbing-repairs", "Pipe Leak Fix", "پائپ لیکیج", 1500, Estimated, "Locate and seal leaking pipes."),
        service("s-drain-unblock", "plumbing-repairs", "Drain Unblocking", "نالی کھولنا", 1200, Fixed, "Clear blocked sinks and drains."),
        service("s-geyser-install", "plumbing-install", "Geyser Installation", "گیزر کی تنصیب", 3500, Fixed, "Install a gas or electric geyser."),
        service("s-pump-install", "plumbing-install", "Water Pump Installation", "پانی کی موٹر", 2500, Estimated, "Fit and connect a water pump."),
        service("s-fault-finding", "electrical-repairs", "Fault Finding", "خرابی کی تلاش", 1000, Estimated, "Trace and fix electrical faults."),
        service("s-breaker-replace", "electrical-repairs", "Breaker Replacement", "بریکر کی تبدیلی", 900, Fixed, "Replace a tripping breaker."),
        service("s-fan-install", "electrical-install", "Ceiling Fan Installation", "پنکھا لگانا", 700, Fixed, "Mount and wire a ceiling fan."),
        service("s-light-install", "electrical-install", "Light Fitting", "لائٹ لگانا", 500, Fixed, "Install lights and fixtures."),
        service("s-furniture-assembly", "carpentry-furniture", "Furniture Assembly", "فرنیچر جوڑنا", 1500, Estimated, "Assemble flat-pack furniture."),
        service("s-furniture-polish", "carpentry-furniture", "Furniture Polish", "فرنیچر پالش", 4000, Estimated, "Sand and polish wooden furniture."),
        service("s-door-lock", "carpentry-doors", "Door Lock Fitting", "دروازے کا تالا", 800, Fixed, "Fit or replace a door lock."),
        service("s-deep-clean", "cleaning-home", "Deep Cleaning", "گہری صفائی", 6000, Estimated, "Full home deep cleaning."),
        service("s-sofa-clean", "cleaning-home", "Sofa Cleaning", "صوفے کی صفائی", 2500, Fixed, "Shampoo and dry a sofa set."),
        service("s-tank-clean", "cleaning-tanks", "Tank Cleaning", "ٹینکی کی صفائی", 3000, Fixed, "Wash and disinfect a water tank."),
        service("s-room-paint", "painting-interior", "Room Painting", "کمرے کا رنگ", 12000, Estimated, "Paint one room, two coats."),
        service("s-exterior-paint", "painting-exterior", "Exterior Painting", "بیرونی رنگ", 30000, Estimated, "Weather-shield exterior walls."),
        service("s-ac-service", "ac-service", "AC General Service", "اے سی سروس", 2500, Fixed, "Clean filters, coils and drain."),
        service("s-ac-gas", "ac-service", "AC Gas Refill", "اے سی گیس", 5500, Estimated, "Leak check and gas top-up."),
        service("s-ac-install", "ac-install", "AC Installation", "اے سی کی تنصیب", 4500, Fixed, "Install a split AC unit."),
    ]
}

fn offered(service_id: &str, name: &str, price: u32, price_type: PriceType) -> WorkerService {
    WorkerService {
        service_id: service_id.to_string(),
        name: name.to_string(),
        price,
        price_type,
    }
}

fn review(id: &str, customer_name: &str, rating: u8, date: &str, comment: &str) -> Review {
    Review {
        id: id.to_string(),
        customer_name: customer_name.to_string(),
        rating,
        date: date.to_string(),
        comment: comment.to_string(),
        avatar: None,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn workers() -> Vec<WorkerDetail> {
    use PriceType::{Estimated, Fixed};
    vec![
        WorkerDetail {
            id: "w-1".to_string(),
            name: "Ahmed Raza".to_string(),
            category_id: "plumbing".to_string(),
            category: "Plumber".to_string(),
            rating: 4.8,
            review_count: 124,
            distance_km: 1.2,
            fee: 500,
            online: true,
            verified: true,
            bio: "Licensed plumber working across Lahore for over a decade. Quick diagnosis, clean work, fair prices.".to_string(),
            experience_years: 12,
            specializations: strings(&["Leak detection", "Geyser installation", "Bathroom fittings"]),
            services: vec![
                offered("s-tap-repair", "Tap Repair", 800, Fixed),
                offered("s-leak-fix", "Pipe Leak Fix", 1500, Estimated),
                offered("s-geyser-install", "Geyser Installation", 3500, Fixed),
            ],
            reviews: vec![
                review("r-1", "Sara Khan", 5, "2024-05-12", "Fixed our kitchen leak in under an hour."),
                review("r-2", "Bilal Ahmed", 4, "2024-04-28", "Good work, arrived a little late."),
            ],
            location: Location { lat: 31.5204, lng: 74.3587 },
            image: None,
        },
        WorkerDetail {
            id: "w-2".to_string(),
            name: "Usman Tariq".to_string(),
            category_id: "plumbing".to_string(),
            category: "Plumber".to_string(),
            rating: 4.5,
            review_count: 58,
            distance_km: 3.4,
            fee: 400,
            online: false,
            verified: true,
            bio: "Drain and pipe specialist. Available evenings and weekends.".to_string(),
            experience_years: 6,
            specializations: strings(&["Drain unblocking", "Water pumps"]),
            services: vec![
                offered("s-tap-repair", "Tap Repair", 700, Fixed),
                offered("s-drain-unblock", "Drain Unblocking", 1200, Fixed),
                offered("s-pump-install", "Water Pump Installation", 2500, Estimated),
            ],
            reviews: vec![review("r-3", "Hina Malik", 5, "2024-05-02", "Very polite and tidy.")],
            location: Location { lat: 31.5497, lng: 74.3436 },
            image: None,
        },
        WorkerDetail {
            id: "w-3".to_string(),
            name: "Kamran Ali".to_string(),
            category_id: "electrical".to_string(),
            category: "Electrician".to_string(),
            rating: 4.9,
            review_count: 210,
            distance_km: 2.1,
            fee: 500,
            online: true,
            verified: true,
            bio: "Certified electrician for homes and small offices. Safety first, always.".to_string(),
            experience_years: 15,
            specializations: strings(&["Fault finding", "Distribution boards", "Solar wiring"]),
            services: vec![
                offered("s-fault-finding", "Fault Finding", 1000, Estimated),
                offered("s-breaker-replace", "Breaker Replacement", 900, Fixed),
                offered("s-fan-install", "Ceiling Fan Installation", 700, Fixed),
                offered("s-light-install", "Light Fitting", 500, Fixed),
            ],
            reviews: vec![
                review("r-4", "Ayesha Noor", 5, "2024-05-20", "Found a fault two others missed."),
                review("r-5", "Faisal Iqbal", 5, "2024-05-01", "Professional and on time."),
            ],
            location: Location { lat: 31.5102, lng: 74.3441 },
            image: None,
        },
        WorkerDetail {
            id: "w-4".to_string(),
            name: "Imran Sheikh".to_string(),
            category_id: "carpentry".to_string(),
            category: "Carpenter".to_string(),
            rating: 4.6,
            review_count: 87,
            distance_km: 4.8,
            fee: 600,
            online: true,
            verified: false,
            bio: "Furniture maker and repairer. Custom shelves and polish work.".to_string(),
            experience_years: 9,
            specializations: strings(&["Polish", "Custom shelving"]),
            services: vec![
                offered("s-furniture-assembly", "Furniture Assembly", 1500, Estimated),
                offered("s-furniture-polish", "Furniture Polish", 4000, Estimated),
                offered("s-door-lock", "Door Lock Fitting", 800, Fixed),
            ],
            reviews: vec![],
            location: Location { lat: 31.4697, lng: 74.2728 },
            image: None,
        },
        WorkerDetail {
            id: "w-5".to_string(),
            name: "Nadia Perveen".to_string(),
            category_id: "cleaning".to_string(),
            category: "Cleaner".to_string(),
            rating: 4.7,
            review_count: 64,
            distance_km: 2.9,
            fee: 300,
            online: false,
            verified: true,
            bio: "Leads a three-person cleaning crew. Eco-friendly products on request.".to_string(),
            experience_years: 5,
            specializations: strings(&["Deep cleaning", "Sofa shampoo", "Tank disinfection"]),
            services: vec![
                offered("s-deep-clean", "Deep Cleaning", 6000, Estimated),
                offered("s-sofa-clean", "Sofa Cleaning", 2500, Fixed),
                offered("s-tank-clean", "Tank Cleaning", 3000, Fixed),
            ],
            reviews: vec![review("r-6", "Zainab Hussain", 4, "2024-03-18", "Spotless kitchen afterwards.")],
            location: Location { lat: 31.5820, lng: 74.3294 },
            image: None,
        },
        WorkerDetail {
            id: "w-6".to_string(),
            name: "Shahid Mehmood".to_string(),
            category_id: "ac-repair".to_string(),
            category: "AC Technician".to_string(),
            rating: 4.4,
            review_count: 39,
            distance_km: 5.5,
            fee: 500,
            online: true,
            verified: true,
            bio: "Split and inverter AC specialist. Summer bookings fill fast.".to_string(),
            experience_years: 8,
            specializations: strings(&["Inverter ACs", "Gas refill"]),
            services: vec![
                offered("s-ac-service", "AC General Service", 2500, Fixed),
                offered("s-ac-gas", "AC Gas Refill", 5500, Estimated),
                offered("s-ac-install", "AC Installation", 4500, Fixed),
            ],
            reviews: vec![review("r-7", "Omar Farooq", 4, "2024-06-02", "Cooling like new.")],
            location: Location { lat: 31.4504, lng: 74.3080 },
            image: None,
        },
    ]
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn booking(
    id: &str,
    worker: &WorkerDetail,
    service: &ServiceItem,
    status: BookingStatus,
    scheduled_date: &str,
    scheduled_time: &str,
    created_at: DateTime<Utc>,
    job_description: &str,
) -> Booking {
    let finished = status == BookingStatus::Completed;
    Booking {
        id: id.to_string(),
        customer_id: CURRENT_CUSTOMER_ID.to_string(),
        worker_id: worker.id.clone(),
        worker: WorkerSummary {
            name: worker.name.clone(),
            category: worker.category.clone(),
            image: worker.image.clone(),
        },
        service_id: service.id.clone(),
        service_name: service.name.clone(),
        status,
        scheduled_date: scheduled_date.to_string(),
        scheduled_time: scheduled_time.to_string(),
        location: "House 12, Street 4, Gulberg III, Lahore".to_string(),
        job_description: job_description.to_string(),
        estimated_cost: service.price + worker.fee,
        final_cost: finished.then_some(service.price + worker.fee),
        created_at,
        updated_at: created_at,
        rating: finished.then_some(5),
        review: finished.then(|| "Great job, would book again.".to_string()),
    }
}

pub fn bookings() -> Vec<Booking> {
    let workers = workers();
    let services = services();

    let plan = [
        ("b-1", "w-1", "s-leak-fix", BookingStatus::Pending, "2024-06-15", "10:00", at(2024, 6, 10, 9), "Kitchen sink pipe is leaking."),
        ("b-2", "w-3", "s-fan-install", BookingStatus::Confirmed, "2024-06-14", "16:30", at(2024, 6, 9, 12), "Two ceiling fans in the lounge."),
        ("b-3", "w-1", "s-geyser-install", BookingStatus::InProgress, "2024-06-12", "11:00", at(2024, 6, 8, 18), "Replace old gas geyser."),
        ("b-4", "w-5", "s-deep-clean", BookingStatus::Completed, "2024-05-30", "09:00", at(2024, 5, 25, 10), "Three bedroom house before guests arrive."),
        ("b-5", "w-6", "s-ac-service", BookingStatus::Cancelled, "2024-05-20", "14:00", at(2024, 5, 18, 8), "Bedroom AC not cooling."),
    ];

    plan.iter()
        .filter_map(|(id, worker_id, service_id, status, date, time, created, description)| {
            let worker = workers.iter().find(|w| w.id == *worker_id)?;
            let service = services.iter().find(|s| s.id == *service_id)?;
            Some(booking(
                id,
                worker,
                service,
                *status,
                date,
                time,
                *created,
                description,
            ))
        })
        .collect()
}

pub fn customers() -> Vec<CustomerProfile> {
    let bookings = bookings();
    let completed: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Completed)
        .collect();
    let stats = CustomerStats {
        total_bookings: bookings.len() as u32,
        completed_bookings: completed.len() as u32,
        active_bookings: bookings.iter().filter(|b| b.status.is_active()).count() as u32,
        total_spent: completed.iter().filter_map(|b| b.final_cost).sum(),
    };

    vec![CustomerProfile {
        id: CURRENT_CUSTOMER_ID.to_string(),
        name: "Ali Hassan".to_string(),
        email: "ali.hassan@example.com".to_string(),
        phone: "+92 300 1234567".to_string(),
        image: None,
        stats,
    }]
}
