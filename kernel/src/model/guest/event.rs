use crate::model::id::{GuestId, ReservationId};

#[derive(Debug)]
pub struct CreateGuest {
    pub name: String,
    pub lastname: String,
    pub identification_type: String,
    pub identification_number: String,
    pub phone: String,
    pub emergency_phone: String,
    pub email: Option<String>,
    pub reservation_id: Option<ReservationId>,
}

/// Partial update: only `Some` fields are written to the store.
#[derive(Debug)]
pub struct UpdateGuest {
    pub guest_id: GuestId,
    pub name: Option<String>,
    pub lastname: Option<String>,
    pub identification_type: Option<String>,
    pub identification_number: Option<String>,
    pub phone: Option<String>,
    pub emergency_phone: Option<String>,
}

#[derive(Debug)]
pub struct DeleteGuest {
    pub guest_id: GuestId,
}
