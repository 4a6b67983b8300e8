use actix_web::{web, HttpRequest, HttpResponse};
use askama::Template;
use chrono::Utc;
use serde::Deserialize;

use crate::{
    auth::new_id,
    components::{
        booking::status_badge,
        service::price_label,
        ui::{Badge, Button, ButtonVariant},
    },
    error::AppError,
    i18n::Translator,
    layouts::{Layout, LayoutKind},
    models::{format_price, Booking, BookingStatus, ServiceItem, WorkerDetail, WorkerSummary},
    state::AppState,
    templates::{not_found, render_page},
};

#[derive(Clone, Debug)]
struct WorkerOption {
    id: String,
    label: String,
    selected: bool,
}

#[derive(Clone, Debug, Default)]
struct BookingView {
    scheduled_date: String,
    scheduled_time: String,
    location: String,
    job_description: String,
}

#[derive(Template)]
#[template(path = "pages/booking_form.html")]
struct BookingTemplate {
    t: Translator,
    service_name: String,
    price: String,
    price_label: String,
    action: String,
    any_selected: bool,
    workers: Vec<WorkerOption>,
    form: BookingView,
    errors: Vec<String>,
    submit: Button,
}

#[derive(Template)]
#[template(path = "pages/booking_success.html")]
struct BookingSuccessTemplate {
    t: Translator,
    reference: String,
    service_name: String,
    worker_name: String,
    schedule: String,
    location: String,
    estimated: String,
    status: Badge,
    view_all: Button,
}

#[derive(Deserialize)]
struct BookingQuery {
    worker: Option<String>,
}

#[derive(Deserialize)]
struct BookingForm {
    worker_id: Option<String>,
    scheduled_date: String,
    scheduled_time: String,
    location: String,
    job_description: String,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/book/{service_id}")
            .route(web::get().to(show_booking))
            .route(web::post().to(create_booking)),
    );
}

fn worker_options(workers: &[&WorkerDetail], selected: Option<&str>) -> Vec<WorkerOption> {
    workers
        .iter()
        .map(|worker| WorkerOption {
            id: worker.id.clone(),
            label: format!("{} · {}", worker.name, worker.category),
            selected: selected == Some(worker.id.as_str()),
        })
        .collect()
}

fn booking_page(
    t: Translator,
    service: &ServiceItem,
    workers: Vec<WorkerOption>,
    form: BookingView,
    errors: Vec<String>,
) -> BookingTemplate {
    BookingTemplate {
        t,
        service_name: t.pick(&service.name, &service.name_ur).to_string(),
        price: format_price(service.price),
        price_label: price_label(t, service.price_type),
        action: format!("/book/{}", service.id),
        any_selected: !workers.iter().any(|worker| worker.selected),
        workers,
        form,
        errors,
        submit: Button::submit(t.get("booking.submit"), ButtonVariant::Primary),
    }
}

async fn show_booking(
    state: web::Data<AppState>,
    t: Translator,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<BookingQuery>,
) -> Result<HttpResponse, AppError> {
    let layout = Layout::from_request(LayoutKind::Customer, t, &req);
    let service_id = path.into_inner();
    let Some(service) = state.catalog.services.find_by_id(&service_id) else {
        return not_found(&layout, t, "not_found.service");
    };

    let workers = state.catalog.workers_for_service(&service.id);
    let options = worker_options(&workers, query.worker.as_deref());

    render_page(
        &layout,
        t.get("booking.title"),
        booking_page(t, service, options, BookingView::default(), Vec::new()),
    )
}

async fn create_booking(
    state: web::Data<AppState>,
    t: Translator,
    req: HttpRequest,
    path: web::Path<String>,
    form: web::Form<BookingForm>,
) -> Result<HttpResponse, AppError> {
    let layout = Layout::from_request(LayoutKind::Customer, t, &req);
    let service_id = path.into_inner();
    let Some(service) = state.catalog.services.find_by_id(&service_id) else {
        return not_found(&layout, t, "not_found.service");
    };

    let form = form.into_inner();
    let workers = state.catalog.workers_for_service(&service.id);
    let requested = form
        .worker_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty());
    let worker = match requested {
        Some(id) => workers.iter().find(|worker| worker.id == id).copied(),
        None => workers.first().copied(),
    };

    let mut errors = Vec::new();
    if form.scheduled_date.trim().is_empty() {
        errors.push(t.get("booking.error.date").to_string());
    }
    if form.scheduled_time.trim().is_empty() {
        errors.push(t.get("booking.error.time").to_string());
    }
    if form.location.trim().is_empty() {
        errors.push(t.get("booking.error.address").to_string());
    }
    if form.job_description.trim().is_empty() {
        errors.push(t.get("booking.error.description").to_string());
    }
    if worker.is_none() {
        errors.push(t.get("booking.error.worker").to_string());
    }

    let Some(worker) = worker.filter(|_| errors.is_empty()) else {
        let options = worker_options(&workers, requested);
        let view = BookingView {
            scheduled_date: form.scheduled_date,
            scheduled_time: form.scheduled_time,
            location: form.location,
            job_description: form.job_description,
        };
        return render_page(
            &layout,
            t.get("booking.title"),
            booking_page(t, service, options, view, errors),
        );
    };

    let booking = new_booking(state.catalog.current_customer_id(), service, worker, form);
    log::info!(
        "Booking {} requested for {} with worker {}",
        booking.id,
        booking.service_id,
        booking.worker_id
    );

    render_page(
        &layout,
        t.get("booking.success"),
        BookingSuccessTemplate {
            t,
            reference: booking.id.clone(),
            service_name: t.pick(&service.name, &service.name_ur).to_string(),
            worker_name: booking.worker.name.clone(),
            schedule: format!("{} {}", booking.scheduled_date, booking.scheduled_time),
            location: booking.location.clone(),
            estimated: format_price(booking.estimated_cost),
            status: status_badge(t, booking.status),
            view_all: Button::link(
                t.get("booking.view_all"),
                "/customer/bookings",
                ButtonVariant::Outline,
            ),
        },
    )
}

/// A pending booking for the confirmation page. Nothing is persisted.
fn new_booking(
    customer_id: &str,
    service: &ServiceItem,
    worker: &WorkerDetail,
    form: BookingForm,
) -> Booking {
    let now = Utc::now();
    let price = worker
        .services
        .iter()
        .find(|offered| offered.service_id == service.id)
        .map_or(service.price, |offered| offered.price);

    Booking {
        id: new_id(),
        customer_id: customer_id.to_string(),
        worker_id: worker.id.clone(),
        worker: WorkerSummary {
            name: worker.name.clone(),
            category: worker.category.clone(),
            image: worker.image.clone(),
        },
        service_id: service.id.clone(),
        service_name: service.name.clone(),
        status: BookingStatus::Pending,
        scheduled_date: form.scheduled_date.trim().to_string(),
        scheduled_time: form.scheduled_time.trim().to_string(),
        location: form.location.trim().to_string(),
        job_description: form.job_description.trim().to_string(),
        estimated_cost: price + worker.fee,
        final_cost: None,
        created_at: now,
        updated_at: now,
        rating: None,
        review: None,
    }
}
