use chrono::{DateTime, Utc};
use kernel::model::guest::Guest;
use kernel::model::id::{GuestId, ReservationId};

#[derive(Debug, sqlx::FromRow)]
pub struct GuestRow {
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

impl From<GuestRow> for Guest {
    fn from(value: GuestRow) -> Self {
        let GuestRow {
            guest_id,
            name,
            lastname,
            identification_type,
            identification_number,
            phone,
            emergency_phone,
            email,
            reservation_id,
            created_at,
            updated_at,
        } = value;
        Guest {
            guest_id,
            name,
            lastname,
            identification_type,
            identification_number,
            phone,
            emergency_phone,
            email,
            reservation_id,
            created_at,
            updated_at,
        }
    }
}
