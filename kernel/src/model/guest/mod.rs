pub mod event;

use chrono::{DateTime, Utc};

use crate::model::id::{GuestId, ReservationId};

/// Classifier used when a create request does not name one.
pub const DEFAULT_IDENTIFICATION_TYPE: &str = "national_id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    pub guest_id: GuestId,
    pub name: String,
    pub lastname: String,
    pub identification_type: String,
    pub identification_number: String,
    pub phone: String,
    pub emergency_phone: String,
    pub email: Option<String>,
    pub reservation_id: Option<ReservationId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
