//! Repository for the `campaigns` table.

use copyforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::campaign::{Campaign, CreateCampaign, UpdateCampaign};

const COLUMNS: &str = "id, client_id, name, campaign_type, status, send_date, offer, details, \
                       airtable_record_id, created_at, updated_at";

/// Provides CRUD operations for campaigns.
pub struct CampaignRepo;

impl CampaignRepo {
    /// Insert a new campaign for a client.
    ///
    /// If `status` is `None` in the input, defaults to `draft`.
    pub async fn create(
        pool: &PgPool,
        client_id: DbId,
        input: &CreateCampaign,
    ) -> Result<Campaign, sqlx::Error> {
        let query = format!(
            "INSERT INTO campaigns
                (client_id, name, campaign_type, status, send_date, offer, details, airtable_record_id)
             VALUES ($1, $2, $3, COALESCE($4, 'draft'), $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(client_id)
            .bind(input.name.trim())
            .bind(&input.campaign_type)
            .bind(&input.status)
            .bind(input.send_date)
            .bind(&input.offer)
            .bind(&input.details)
            .bind(&input.airtable_record_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns WHERE id = $1");
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a client's campaigns, soonest send date first, undated last.
    pub async fn list_by_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<Campaign>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM campaigns
             WHERE client_id = $1
             ORDER BY send_date ASC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Update a campaign. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCampaign,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "UPDATE campaigns SET
                name = COALESCE($2, name),
                campaign_type = COALESCE($3, campaign_type),
                status = COALESCE($4, status),
                send_date = COALESCE($5, send_date),
                offer = COALESCE($6, offer),
                details = COALESCE($7, details),
                airtable_record_id = COALESCE($8, airtable_record_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.campaign_type)
            .bind(&input.status)
            .bind(input.send_date)
            .bind(&input.offer)
            .bind(&input.details)
            .bind(&input.airtable_record_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a campaign. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM campaigns WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
