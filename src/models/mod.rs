use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Portal a signed-in account belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    PropertyManager,
    Admin,
    CleaningBusiness,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::PropertyManager => "property_manager",
            UserRole::Admin => "admin",
            UserRole::CleaningBusiness => "cleaning_business",
        }
    }
}

/// A signed-in user as returned by the auth endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A service offering chosen on the first wizard step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSelection {
    pub id: String,
    pub name: String,
    pub image: String,
    pub price: i64,
}

/// Minimal property reference carried through the booking wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRef {
    pub id: String,
    pub name: String,
    pub image: String,
}

/// When the cleaning should happen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Schedule {
    /// A single visit on one date
    Single { date: NaiveDate },
    /// Every day within an inclusive date range
    Range { start: NaiveDate, end: NaiveDate },
    /// A recurring routine on fixed weekdays
    Routine { days: Vec<Weekday> },
}

/// Payload for `POST /bookings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub property_id: String,
    pub service_type_ids: Vec<String>,
    pub schedule: Schedule,
    pub time_slots: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

/// A booking as the backend reports it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub property_id: String,
    pub property_name: String,
    pub services: Vec<String>,
    pub status: BookingStatus,
    pub schedule: Schedule,
    #[serde(default)]
    pub time_slots: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub total_price: i64,
    pub created_at: DateTime<Utc>,
}

/// Display info for one chat participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantInfo {
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Local delivery state of a chat message.
///
/// Server-fetched messages are always `Sent`; `Pending` and `Failed` exist
/// only for optimistic local entries, whose id is the client-generated ref
/// until the backend confirms them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delivery {
    #[default]
    Sent,
    Pending,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub thread_id: String,
    pub sender_id: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub delivery: Delivery,
}

/// A support or direct chat thread. Two participants expected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatThread {
    pub id: String,
    pub participants: Vec<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub unread_count: u32,
    #[serde(default)]
    pub participant_info: HashMap<String, ParticipantInfo>,
    #[serde(default)]
    pub escalated: bool,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default)]
    pub last_message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    Resolved,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::Resolved => "resolved",
        }
    }
}

/// A support ticket raised from a portal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub user_id: String,
    #[serde(default)]
    pub user_avatar: Option<String>,
}

/// Cleaning-business registration form, filled across wizard steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub business_name: String,
    pub operator_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub services_offered: Vec<String>,
    pub team_size: u32,
}

/// Lifecycle of a registration submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RegistrationStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

/// Unit counts entered while drafting a property
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCounts {
    pub floors: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub kitchens: u32,
    pub living_rooms: u32,
    pub offices: u32,
    pub meeting_rooms: u32,
    pub balconies: u32,
    pub parking_spots: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub address: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyImage {
    pub url: String,
    pub is_cover: bool,
}

/// A cleaning business as listed in the admin directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningBusiness {
    pub id: String,
    pub name: String,
    pub email: String,
    pub verified: bool,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub team_size: u32,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletSummary {
    pub owner_id: String,
    pub balance: i64,
    pub pending: i64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundRequest {
    pub id: String,
    pub booking_id: String,
    pub amount: i64,
    pub reason: String,
    pub requested_at: DateTime<Utc>,
}

/// Aggregate numbers behind the analytics dashboards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub total_bookings: u32,
    pub completed_bookings: u32,
    pub cancelled_bookings: u32,
    pub active_properties: u32,
    pub total_spend: i64,
}

/// Response of `POST /auth/login`: the handle for the verification step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub pending_id: String,
}

/// A confirmed session: what verify-login and registration return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPayload {
    pub token: String,
    pub user: Account,
}
