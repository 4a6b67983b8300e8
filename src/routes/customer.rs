use actix_web::{http::header, web, HttpRequest, HttpResponse};
use askama::Template;

use crate::{
    components::{
        booking::BookingRow,
        ui::{Avatar, AvatarSize},
    },
    error::AppError,
    i18n::Translator,
    layouts::{Layout, LayoutKind},
    models::format_price,
    state::AppState,
    templates::{not_found, render_page},
};

#[derive(Template)]
#[template(path = "pages/customer_bookings.html")]
struct BookingsTemplate {
    t: Translator,
    rows: Vec<BookingRow>,
}

struct Stat {
    label: String,
    value: String,
}

#[derive(Template)]
#[template(path = "pages/customer_profile.html")]
struct ProfileTemplate {
    t: Translator,
    avatar: Avatar,
    name: String,
    email: String,
    phone: String,
    stats: Vec<Stat>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/customer").route(web::get().to(customer_home)))
        .service(web::resource("/customer/bookings").route(web::get().to(bookings)))
        .service(web::resource("/customer/profile").route(web::get().to(profile)));
}

async fn customer_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .append_header((header::LOCATION, "/customer/bookings"))
        .finish()
}

async fn bookings(
    state: web::Data<AppState>,
    t: Translator,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let layout = Layout::from_request(LayoutKind::Customer, t, &req);
    let Some(customer) = state.catalog.current_customer() else {
        return not_found(&layout, t, "not_found.customer");
    };

    let mut bookings = state.catalog.bookings.list_by_parent(&customer.id);
    bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let rows = bookings
        .into_iter()
        .map(|booking| BookingRow::for_customer(t, booking))
        .collect();

    render_page(&layout, t.get("bookings.title"), BookingsTemplate { t, rows })
}

async fn profile(
    state: web::Data<AppState>,
    t: Translator,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let layout = Layout::from_request(LayoutKind::Customer, t, &req);
    let Some(customer) = state.catalog.current_customer() else {
        return not_found(&layout, t, "not_found.customer");
    };

    let stats = &customer.stats;
    let stats = vec![
        Stat {
            label: t.get("stats.total").to_string(),
            value: stats.total_bookings.to_string(),
        },
        Stat {
            label: t.get("stats.completed").to_string(),
            value: stats.completed_bookings.to_string(),
        },
        Stat {
            label: t.get("stats.active").to_string(),
            value: stats.active_bookings.to_string(),
        },
        Stat {
            label: t.get("stats.spent").to_string(),
            value: format_price(stats.total_spent),
        },
    ];

    render_page(
        &layout,
        t.get("profile.title"),
        ProfileTemplate {
            t,
            avatar: Avatar::new(&customer.name, customer.image.as_deref(), AvatarSize::Large),
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            stats,
        },
    )
}
