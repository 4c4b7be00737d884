use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::guest::event::{CreateGuest, UpdateGuest};
use kernel::model::guest::{Guest, DEFAULT_IDENTIFICATION_TYPE};
use kernel::model::id::{GuestId, ReservationId};
use serde::{Deserialize, Serialize};

/// Every field is optional at the serde layer so one validation pass can
/// report all missing required fields at once instead of failing on the
/// first absent key.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuestRequest {
    #[garde(required, inner(length(min = 1)))]
    pub name: Option<String>,
    #[garde(required, inner(length(min = 1)))]
    pub lastname: Option<String>,
    #[garde(skip)]
    pub identification_type: Option<String>,
    #[garde(required, inner(length(min = 1)))]
    pub identification_number: Option<String>,
    #[garde(required, inner(length(min = 1)))]
    pub phone: Option<String>,
    #[garde(required, inner(length(min = 1)))]
    pub emergency_phone: Option<String>,
    #[garde(skip)]
    pub email: Option<String>,
    #[garde(skip)]
    pub reservation_id: Option<ReservationId>,
}

impl From<CreateGuestRequest> for CreateGuest {
    fn from(value: CreateGuestRequest) -> Self {
        let CreateGuestRequest {
            name,
            lastname,
            identification_type,
            identification_number,
            phone,
            emergency_phone,
            email,
            reservation_id,
        } = value;
        CreateGuest {
            name: name.unwrap_or_default(),
            lastname: lastname.unwrap_or_default(),
            identification_type: identification_type
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_IDENTIFICATION_TYPE.to_string()),
            identification_number: identification_number.unwrap_or_default(),
            phone: phone.unwrap_or_default(),
            emergency_phone: emergency_phone.unwrap_or_default(),
            email: email.filter(|v| !v.is_empty()),
            reservation_id,
        }
    }
}

/// Allow-list of mutable fields. Unknown body keys are dropped by serde and
/// never reach the update statement.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuestRequest {
    #[garde(inner(length(min = 1)))]
    pub name: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub lastname: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub identification_type: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub identification_number: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub phone: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub emergency_phone: Option<String>,
}

impl UpdateGuestRequest {
    pub fn has_changes(&self) -> bool {
        self.name.is_some()
            || self.lastname.is_some()
            || self.identification_type.is_some()
            || self.identification_number.is_some()
            || self.phone.is_some()
            || self.emergency_phone.is_some()
    }
}

#[derive(new)]
pub struct UpdateGuestRequestWithId {
    guest_id: GuestId,
    req: UpdateGuestRequest,
}

impl From<UpdateGuestRequestWithId> for UpdateGuest {
    fn from(value: UpdateGuestRequestWithId) -> Self {
        let UpdateGuestRequestWithId { guest_id, req } = value;
        UpdateGuest {
            guest_id,
            name: req.name,
            lastname: req.lastname,
            identification_type: req.identification_type,
            identification_number: req.identification_number,
            phone: req.phone,
            emergency_phone: req.emergency_phone,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestResponse {
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

impl From<Guest> for GuestResponse {
    fn from(value: Guest) -> Self {
        let Guest {
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
        Self {
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

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedGuestResponse {
    pub guest_id: GuestId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_create_request() -> CreateGuestRequest {
        serde_json::from_value(serde_json::json!({
            "name": "Ana",
            "lastname": "Diaz",
            "identificationType": "ID",
            "identificationNumber": "123",
            "phone": "555",
            "emergencyPhone": "556"
        }))
        .unwrap()
    }

    #[test]
    fn create_accepts_a_full_payload() {
        assert!(full_create_request().validate(&()).is_ok());
    }

    #[test]
    fn create_reports_every_missing_required_field() {
        let req: CreateGuestRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        let report = req.validate(&()).unwrap_err();
        let fields: Vec<String> = report.iter().map(|(path, _)| path.to_string()).collect();
        assert_eq!(fields.len(), 5);
        for field in [
            "name",
            "lastname",
            "identification_number",
            "phone",
            "emergency_phone",
        ] {
            assert!(fields.contains(&field.to_string()), "missing {field}");
        }
    }

    #[test]
    fn create_rejects_empty_required_values() {
        let req: CreateGuestRequest = serde_json::from_value(serde_json::json!({
            "name": "",
            "lastname": "Diaz",
            "identificationNumber": "123",
            "phone": "555",
            "emergencyPhone": "556"
        }))
        .unwrap();
        let report = req.validate(&()).unwrap_err();
        assert_eq!(report.iter().count(), 1);
    }

    #[test]
    fn identification_type_defaults_when_absent_or_empty() {
        let event: CreateGuest = full_create_request().into();
        assert_eq!(event.identification_type, "ID");

        let mut req = full_create_request();
        req.identification_type = None;
        let event: CreateGuest = req.into();
        assert_eq!(event.identification_type, DEFAULT_IDENTIFICATION_TYPE);

        let mut req = full_create_request();
        req.identification_type = Some(String::new());
        let event: CreateGuest = req.into();
        assert_eq!(event.identification_type, DEFAULT_IDENTIFICATION_TYPE);
    }

    #[test]
    fn empty_email_normalizes_to_absent() {
        let mut req = full_create_request();
        req.email = Some(String::new());
        let event: CreateGuest = req.into();
        assert_eq!(event.email, None);
    }

    #[test]
    fn update_with_no_recognized_field_has_no_changes() {
        let req: UpdateGuestRequest =
            serde_json::from_value(serde_json::json!({ "unknownKey": "x" })).unwrap();
        assert!(!req.has_changes());
    }

    #[test]
    fn update_with_one_field_has_changes() {
        let req: UpdateGuestRequest =
            serde_json::from_value(serde_json::json!({ "phone": "2" })).unwrap();
        assert!(req.has_changes());
        assert!(req.validate(&()).is_ok());
    }

    #[test]
    fn update_rejects_empty_values() {
        let req: UpdateGuestRequest =
            serde_json::from_value(serde_json::json!({ "phone": "" })).unwrap();
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn update_event_carries_only_supplied_fields() {
        let req: UpdateGuestRequest =
            serde_json::from_value(serde_json::json!({ "phone": "2" })).unwrap();
        let event: UpdateGuest = UpdateGuestRequestWithId::new(GuestId::new(), req).into();
        assert_eq!(event.phone.as_deref(), Some("2"));
        assert_eq!(event.name, None);
        assert_eq!(event.lastname, None);
    }
}
