//! Repository for the `notes` table.

use copyforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::note::{CreateNote, Note};

const COLUMNS: &str = "id, client_id, campaign_id, content, created_at";

/// Provides create/list/delete for client notes. Notes are immutable.
pub struct NoteRepo;

impl NoteRepo {
    pub async fn create(
        pool: &PgPool,
        client_id: DbId,
        input: &CreateNote,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (client_id, campaign_id, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(client_id)
            .bind(input.campaign_id)
            .bind(input.content.trim())
            .fetch_one(pool)
            .await
    }

    /// List a client's notes, newest first.
    pub async fn list_by_client(pool: &PgPool, client_id: DbId) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes WHERE client_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
