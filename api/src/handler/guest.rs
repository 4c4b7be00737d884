use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use garde::Validate;

use kernel::model::guest::event::DeleteGuest;
use kernel::model::id::GuestId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::guest::{
    CreateGuestRequest, DeletedGuestResponse, GuestResponse, UpdateGuestRequest,
    UpdateGuestRequestWithId,
};

pub async fn register_guest(
    State(registry): State<AppRegistry>,
    payload: Result<Json<CreateGuestRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(req) = payload.map_err(|e| AppError::InvalidRequestBody(e.body_text()))?;
    req.validate(&())?;

    registry
        .guest_repository()
        .create(req.into())
        .await
        .map(|guest| (StatusCode::CREATED, Json(GuestResponse::from(guest))))
}

pub async fn show_guest_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<GuestResponse>>> {
    registry
        .guest_repository()
        .find_all()
        .await
        .map(|guests| guests.into_iter().map(GuestResponse::from).collect())
        .map(Json)
}

pub async fn show_guest(
    Path(guest_id): Path<GuestId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<GuestResponse>> {
    registry
        .guest_repository()
        .find_by_id(guest_id)
        .await
        .and_then(|guest| match guest {
            Some(guest) => Ok(Json(guest.into())),
            None => Err(AppError::EntityNotFound("guest not found".into())),
        })
}

pub async fn update_guest(
    Path(guest_id): Path<GuestId>,
    State(registry): State<AppRegistry>,
    payload: Result<Json<UpdateGuestRequest>, JsonRejection>,
) -> AppResult<Json<GuestResponse>> {
    let Json(req) = payload.map_err(|e| AppError::InvalidRequestBody(e.body_text()))?;
    req.validate(&())?;
    if !req.has_changes() {
        return Err(AppError::InvalidRequest(
            "at least one field must be provided for update".into(),
        ));
    }

    let update = UpdateGuestRequestWithId::new(guest_id, req);
    registry
        .guest_repository()
        .update(update.into())
        .await
        .map(GuestResponse::from)
        .map(Json)
}

pub async fn delete_guest(
    Path(guest_id): Path<GuestId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<DeletedGuestResponse>> {
    registry
        .guest_repository()
        .delete(DeleteGuest { guest_id })
        .await
        .map(|_| Json(DeletedGuestResponse { guest_id }))
}
