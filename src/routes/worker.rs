use actix_web::{http::header, web, HttpRequest, HttpResponse};
use askama::Template;

use crate::{
    catalog::Catalog,
    components::booking::BookingRow,
    error::AppError,
    i18n::Translator,
    layouts::{Layout, LayoutKind},
    models::{format_price, Booking, BookingStatus},
    state::AppState,
    templates::{not_found, render_page},
};

struct Stat {
    label: String,
    value: String,
}

#[derive(Template)]
#[template(path = "pages/worker_dashboard.html")]
struct DashboardTemplate {
    t: Translator,
    name: String,
    stats: Vec<Stat>,
    rows: Vec<BookingRow>,
}

#[derive(Template)]
#[template(path = "pages/worker_bookings.html")]
struct JobsTemplate {
    t: Translator,
    rows: Vec<BookingRow>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/worker").route(web::get().to(worker_home)))
        .service(web::resource("/worker/dashboard").route(web::get().to(dashboard)))
        .service(web::resource("/worker/bookings").route(web::get().to(jobs)));
}

async fn worker_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .append_header((header::LOCATION, "/worker/dashboard"))
        .finish()
}

fn job_rows<'a>(
    t: Translator,
    catalog: &Catalog,
    bookings: impl IntoIterator<Item = &'a Booking>,
) -> Vec<BookingRow> {
    bookings
        .into_iter()
        .map(|booking| {
            let customer = catalog
                .customers
                .find_by_id(&booking.customer_id)
                .map_or(booking.customer_id.as_str(), |customer| customer.name.as_str());
            BookingRow::for_worker(t, booking, customer)
        })
        .collect()
}

async fn dashboard(
    state: web::Data<AppState>,
    t: Translator,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let layout = Layout::from_request(LayoutKind::Worker, t, &req);
    let Some(worker) = state.catalog.current_worker() else {
        return not_found(&layout, t, "not_found.worker");
    };

    let bookings = state.catalog.bookings_for_worker(&worker.id);
    let completed: Vec<&Booking> = bookings
        .iter()
        .copied()
        .filter(|booking| booking.status == BookingStatus::Completed)
        .collect();
    let earnings: u32 = completed
        .iter()
        .map(|booking| booking.final_cost.unwrap_or(booking.estimated_cost))
        .sum();
    let incoming: Vec<&Booking> = bookings
        .iter()
        .copied()
        .filter(|booking| booking.status.is_active())
        .collect();

    let stats = vec![
        Stat {
            label: t.get("dashboard.rating").to_string(),
            value: format!("{:.1}", worker.rating),
        },
        Stat {
            label: t.get("dashboard.jobs_done").to_string(),
            value: completed.len().to_string(),
        },
        Stat {
            label: t.get("dashboard.earnings").to_string(),
            value: format_price(earnings),
        },
        Stat {
            label: t.get("stats.active").to_string(),
            value: incoming.len().to_string(),
        },
    ];

    render_page(
        &layout,
        t.get("nav.dashboard"),
        DashboardTemplate {
            t,
            name: worker.name.clone(),
            stats,
            rows: job_rows(t, &state.catalog, incoming),
        },
    )
}

async fn jobs(
    state: web::Data<AppState>,
    t: Translator,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let layout = Layout::from_request(LayoutKind::Worker, t, &req);
    let Some(worker) = state.catalog.current_worker() else {
        return not_found(&layout, t, "not_found.worker");
    };

    let mut bookings = state.catalog.bookings_for_worker(&worker.id);
    bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    render_page(
        &layout,
        t.get("nav.jobs"),
        JobsTemplate {
            t,
            rows: job_rows(t, &state.catalog, bookings),
        },
    )
}

#[cfg(test)]
mod tests {
    use actix_web::test::{self, TestRequest};

    use crate::routes::testing::{self, app, body_text};

    #[actix_web::test]
    async fn dashboard_lists_active_jobs_in_worker_layout() {
        let app = app!(testing::state()).await;
        let body = body_text(
            test::call_service(&app, TestRequest::get().uri("/worker/dashboard").to_request())
                .await,
        )
        .await;
        assert!(body.contains("layout-worker"));
        assert!(body.contains("Ahmed Raza"));
        assert!(body.contains("4.8"));
        assert_eq!(body.matches(r#"class="booking-row""#).count(), 2);
        assert!(body.contains("Ali Hassan"));
    }

    #[actix_web::test]
    async fn jobs_page_lists_every_booking_for_the_worker() {
        let app = app!(testing::state()).await;
        let body = body_text(
            test::call_service(&app, TestRequest::get().uri("/worker/bookings").to_request())
                .await,
        )
        .await;
        assert_eq!(body.matches(r#"class="booking-row""#).count(), 2);
        assert!(!body.contains("Deep Cleaning"));
    }
}
