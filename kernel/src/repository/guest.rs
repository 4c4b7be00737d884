use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::guest::event::{CreateGuest, DeleteGuest, UpdateGuest};
use crate::model::guest::Guest;
use crate::model::id::GuestId;

#[async_trait]
pub trait GuestRepository: Send + Sync {
    /// Generates the identifier, inserts the record and echoes it back.
    async fn create(&self, event: CreateGuest) -> AppResult<Guest>;
    async fn find_all(&self) -> AppResult<Vec<Guest>>;
    async fn find_by_id(&self, guest_id: GuestId) -> AppResult<Option<Guest>>;
    /// Writes only the supplied fields and returns the post-update record.
    async fn update(&self, event: UpdateGuest) -> AppResult<Guest>;
    async fn delete(&self, event: DeleteGuest) -> AppResult<()>;
}
