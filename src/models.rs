use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::icons::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    Fixed,
    Estimated,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceItem {
    pub id: String,
    pub sub_category_id: String,
    pub name: String,
    pub name_ur: String,
    pub price: u32,
    pub price_type: PriceType,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct ServiceCategory {
    pub id: String,
    pub name: String,
    pub name_ur: String,
    pub description: String,
    pub icon: Icon,
}

#[derive(Debug, Clone)]
pub struct SubCategory {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub name_ur: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// A priced line on a worker's profile.
#[derive(Debug, Clone)]
pub struct WorkerService {
    pub service_id: String,
    pub name: String,
    pub price: u32,
    pub price_type: PriceType,
}

#[derive(Debug, Clone)]
pub struct Review {
    pub id: String,
    pub customer_name: String,
    /// Whole stars, 0 to 5.
    pub rating: u8,
    pub date: String,
    pub comment: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone)]
pub struct WorkerDetail {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub category: String,
    pub rating: f32,
    pub review_count: u32,
    pub distance_km: f32,
    pub fee: u32,
    pub online: bool,
    pub verified: bool,
    pub bio: String,
    pub experience_years: u32,
    pub specializations: Vec<String>,
    pub services: Vec<WorkerService>,
    pub reviews: Vec<Review>,
    pub location: Location,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Accepted,
    Rejected,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn key(self) -> &'static str {
        match self {
            Self::Pending => "status.pending",
            Self::Confirmed => "status.confirmed",
            Self::Accepted => "status.accepted",
            Self::Rejected => "status.rejected",
            Self::InProgress => "status.in_progress",
            Self::Completed => "status.completed",
            Self::Cancelled => "status.cancelled",
        }
    }

    pub fn is_active(self) -> bool {
        matches!(
            self,
            Self::Pending | Self::Confirmed | Self::Accepted | Self::InProgress
        )
    }
}

#[derive(Debug, Clone)]
pub struct WorkerSummary {
    pub name: String,
    pub category: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Booking {
    pub id: String,
    pub customer_id: String,
    pub worker_id: String,
    pub worker: WorkerSummary,
    pub service_id: String,
    pub service_name: String,
    pub status: BookingStatus,
    pub scheduled_date: String,
    pub scheduled_time: String,
    pub location: String,
    pub job_description: String,
    pub estimated_cost: u32,
    pub final_cost: Option<u32>,
    pub created_at: DateTime<Utc>,
    #[allow(dead_code)]
    pub updated_at: DateTime<Utc>,
    pub rating: Option<u8>,
    pub review: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderType {
    Customer,
    Worker,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender_id: String,
    pub sender_type: SenderType,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatConversation {
    pub worker_id: String,
    pub customer_id: String,
    pub messages: Vec<ChatMessage>,
    pub unread_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerStats {
    pub total_bookings: u32,
    pub completed_bookings: u32,
    pub active_bookings: u32,
    pub total_spent: u32,
}

#[derive(Debug, Clone)]
pub struct CustomerProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub image: Option<String>,
    pub stats: CustomerStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Worker,
    Customer,
    Admin,
}

/// Rupee amount with thousands separators, e.g. `Rs. 1,500`.
pub fn format_price(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("Rs. {grouped}")
}
