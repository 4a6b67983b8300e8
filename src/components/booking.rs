use askama::Template;

use crate::{
    components::ui::{stars, Avatar, AvatarSize, Badge, Tone},
    i18n::Translator,
    models::{format_price, Booking, BookingStatus},
};

pub fn status_badge(t: Translator, status: BookingStatus) -> Badge {
    let tone = match status {
        BookingStatus::Pending => Tone::Warning,
        BookingStatus::Confirmed | BookingStatus::Accepted | BookingStatus::InProgress => {
            Tone::Info
        }
        BookingStatus::Completed => Tone::Success,
        BookingStatus::Rejected | BookingStatus::Cancelled => Tone::Danger,
    };
    Badge::new(t.get(status.key()), tone)
}

struct Feedback {
    stars: String,
    review: Option<String>,
}

fn feedback(booking: &Booking) -> Option<Feedback> {
    booking.rating.map(|rating| Feedback {
        stars: stars(rating),
        review: booking.review.clone(),
    })
}

#[derive(Template)]
#[template(path = "components/booking_row.html")]
pub struct BookingRow {
    avatar: Avatar,
    service_name: String,
    counterpart: String,
    schedule: String,
    location: String,
    job_description: String,
    feedback: Option<Feedback>,
    cost: String,
    status: Badge,
    href: Option<String>,
}

impl BookingRow {
    /// Row as the customer sees it, naming the worker.
    pub fn for_customer(t: Translator, booking: &Booking) -> Self {
        Self {
            avatar: Avatar::new(
                &booking.worker.name,
                booking.worker.image.as_deref(),
                AvatarSize::Small,
            ),
            service_name: booking.service_name.clone(),
            counterpart: format!("{} · {}", booking.worker.name, booking.worker.category),
            schedule: format!("{} {}", booking.scheduled_date, booking.scheduled_time),
            location: booking.location.clone(),
            job_description: booking.job_description.clone(),
            feedback: feedback(booking),
            cost: format_price(booking.final_cost.unwrap_or(booking.estimated_cost)),
            status: status_badge(t, booking.status),
            href: Some(format!("/workers/{}", booking.worker_id)),
        }
    }

    /// Row as the worker sees it, naming the customer.
    pub fn for_worker(t: Translator, booking: &Booking, customer_name: &str) -> Self {
        Self {
            avatar: Avatar::new(customer_name, None, AvatarSize::Small),
            service_name: booking.service_name.clone(),
            counterpart: customer_name.to_string(),
            schedule: format!("{} {}", booking.scheduled_date, booking.scheduled_time),
            location: booking.location.clone(),
            job_description: booking.job_description.clone(),
            feedback: feedback(booking),
            cost: format_price(booking.final_cost.unwrap_or(booking.estimated_cost)),
            status: status_badge(t, booking.status),
            href: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        i18n::{translator, Language},
        seed,
    };

    #[test]
    fn completed_booking_shows_final_cost() {
        let booking = seed::bookings()
            .into_iter()
            .find(|b| b.status == BookingStatus::Completed)
            .unwrap();
        let html = BookingRow::for_customer(translator(Language::En), &booking)
            .render()
            .unwrap();
        assert!(html.contains("badge-success"));
        assert!(html.contains("Completed"));
        assert!(html.contains(&format_price(booking.final_cost.unwrap())));
        assert!(html.contains("Three bedroom house before guests arrive."));
        assert!(html.contains("★★★★★"));
        assert!(html.contains("Great job, would book again."));
    }

    #[test]
    fn open_booking_has_no_feedback() {
        let booking = seed::bookings()
            .into_iter()
            .find(|b| b.status == BookingStatus::Pending)
            .unwrap();
        let html = BookingRow::for_worker(translator(Language::En), &booking, "Ali Hassan")
            .render()
            .unwrap();
        assert!(html.contains(&booking.job_description));
        assert!(!html.contains("booking-feedback"));
    }

    #[test]
    fn status_label_follows_language() {
        let badge = status_badge(translator(Language::Ur), BookingStatus::Pending)
            .render()
            .unwrap();
        assert!(badge.contains("زیر التوا"));
        assert!(badge.contains("badge-warning"));
    }
}
