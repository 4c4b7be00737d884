use async_trait::async_trait;
use derive_new::new;
use sqlx::{Postgres, QueryBuilder};

use kernel::model::guest::event::{CreateGuest, DeleteGuest, UpdateGuest};
use kernel::model::guest::Guest;
use kernel::model::id::GuestId;
use kernel::repository::guest::GuestRepository;
use shared::error::{AppError, AppResult};

use crate::database::model::guest::GuestRow;
use crate::database::ConnectionPool;

#[derive(new)]
pub struct GuestRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl GuestRepository for GuestRepositoryImpl {
    async fn create(&self, event: CreateGuest) -> AppResult<Guest> {
        let guest_id = GuestId::new();
        let row: GuestRow = sqlx::query_as(
            r#"
                INSERT INTO guests (
                    guest_id, name, lastname,
                    identification_type, identification_number,
                    phone, emergency_phone, email, reservation_id
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING
                    guest_id, name, lastname,
                    identification_type, identification_number,
                    phone, emergency_phone, email, reservation_id,
                    created_at, updated_at
            "#,
        )
        .bind(guest_id)
        .bind(&event.name)
        .bind(&event.lastname)
        .bind(&event.identification_type)
        .bind(&event.identification_number)
        .bind(&event.phone)
        .bind(&event.emergency_phone)
        .bind(&event.email)
        .bind(event.reservation_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn find_all(&self) -> AppResult<Vec<Guest>> {
        let rows: Vec<GuestRow> = sqlx::query_as(
            r#"
                SELECT
                    guest_id, name, lastname,
                    identification_type, identification_number,
                    phone, emergency_phone, email, reservation_id,
                    created_at, updated_at
                FROM guests
                ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Guest::from).collect())
    }

    async fn find_by_id(&self, guest_id: GuestId) -> AppResult<Option<Guest>> {
        let row: Option<GuestRow> = sqlx::query_as(
            r#"
                SELECT
                    guest_id, name, lastname,
                    identification_type, identification_number,
                    phone, emergency_phone, email, reservation_id,
                    created_at, updated_at
                FROM guests
                WHERE guest_id = $1
            "#,
        )
        .bind(guest_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Guest::from))
    }

    async fn update(&self, event: UpdateGuest) -> AppResult<Guest> {
        let res = build_update_query(&event)
            .build()
            .execute(self.db.inner_ref())
            .await
            .map_err(map_sqlx_error)?;

        if res.rows_affected() == 0 {
            return Err(AppError::EntityNotFound("guest not found".into()));
        }

        self.find_by_id(event.guest_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("guest not found".into()))
    }

    async fn delete(&self, event: DeleteGuest) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM guests WHERE guest_id = $1")
            .bind(event.guest_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(map_sqlx_error)?;

        if res.rows_affected() == 0 {
            return Err(AppError::EntityNotFound("guest not found".into()));
        }
        Ok(())
    }
}

/// Builds the partial `UPDATE` from the supplied fields only. Column names
/// come from a fixed allow-list, never from request keys; values are binds.
fn build_update_query(event: &UpdateGuest) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new("UPDATE guests SET ");
    {
        let mut fields = builder.separated(", ");
        if let Some(name) = &event.name {
            fields.push("name = ").push_bind_unseparated(name);
        }
        if let Some(lastname) = &event.lastname {
            fields.push("lastname = ").push_bind_unseparated(lastname);
        }
        if let Some(identification_type) = &event.identification_type {
            fields
                .push("identification_type = ")
                .push_bind_unseparated(identification_type);
        }
        if let Some(identification_number) = &event.identification_number {
            fields
                .push("identification_number = ")
                .push_bind_unseparated(identification_number);
        }
        if let Some(phone) = &event.phone {
            fields.push("phone = ").push_bind_unseparated(phone);
        }
        if let Some(emergency_phone) = &event.emergency_phone {
            fields
                .push("emergency_phone = ")
                .push_bind_unseparated(emergency_phone);
        }
    }
    builder.push(" WHERE guest_id = ");
    builder.push_bind(event.guest_id);
    builder
}

/// SQLSTATE classes the store reports for rejected values.
const VALUE_ERROR_CODES: &[&str] = &["22001", "22P02", "22003"];

fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::RowNotFound => AppError::EntityNotFound("guest not found".into()),
        sqlx::Error::Database(e)
            if e.is_unique_violation() || e.is_foreign_key_violation() =>
        {
            AppError::ConstraintViolation(sqlx::Error::Database(e))
        }
        sqlx::Error::Database(e)
            if e.code()
                .map(|c| VALUE_ERROR_CODES.contains(&c.as_ref()))
                .unwrap_or(false) =>
        {
            AppError::InvalidValue(sqlx::Error::Database(e))
        }
        err @ (sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed) => AppError::DatabaseUnavailable(err),
        err => AppError::DbQueryError(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update_event(guest_id: GuestId) -> UpdateGuest {
        UpdateGuest {
            guest_id,
            name: None,
            lastname: None,
            identification_type: None,
            identification_number: None,
            phone: None,
            emergency_phone: None,
        }
    }

    #[test]
    fn update_query_touches_only_supplied_fields() {
        let event = UpdateGuest {
            name: Some("Ana".into()),
            phone: Some("555".into()),
            ..update_event(GuestId::new())
        };
        let builder = build_update_query(&event);
        assert_eq!(
            builder.sql(),
            "UPDATE guests SET name = $1, phone = $2 WHERE guest_id = $3"
        );
    }

    #[test]
    fn update_query_covers_the_full_allow_list() {
        let event = UpdateGuest {
            name: Some("Ana".into()),
            lastname: Some("Diaz".into()),
            identification_type: Some("passport".into()),
            identification_number: Some("123".into()),
            phone: Some("555".into()),
            emergency_phone: Some("556".into()),
            ..update_event(GuestId::new())
        };
        let builder = build_update_query(&event);
        assert_eq!(
            builder.sql(),
            "UPDATE guests SET name = $1, lastname = $2, identification_type = $3, \
             identification_number = $4, phone = $5, emergency_phone = $6 \
             WHERE guest_id = $7"
        );
    }

    #[test]
    fn connectivity_failures_are_reported_as_unavailable() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            AppError::DatabaseUnavailable(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolClosed),
            AppError::DatabaseUnavailable(_)
        ));
    }

    #[test]
    fn missing_row_is_reported_as_not_found() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            AppError::EntityNotFound(_)
        ));
    }

    #[test]
    fn other_failures_are_reported_as_query_errors() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::WorkerCrashed),
            AppError::DbQueryError(_)
        ));
    }
}
