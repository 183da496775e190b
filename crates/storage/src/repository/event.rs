use chrono::NaiveDate;
use sqlx::{PgPool, QueryBuilder};

use crate::dto::event::{CreateEventRequest, EventListFilter, EventStandingRow, UpdateEventRequest};
use crate::error::{Result, StorageError};
use crate::models::{Event, Session};

const EVENT_COLUMNS: &str =
    "id, organization_id, parent_event_id, code, name, event_type, start_date, \
     end_date, status, created_at";

pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List events, newest first, with optional filtering.
    pub async fn list(&self, filter: &EventListFilter) -> Result<Vec<Event>> {
        let mut query = QueryBuilder::new(format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE 1=1"
        ));

        if let Some(ref status) = filter.status {
            query.push(" AND status = ");
            query.push_bind(status);
        }

        if let Some(ref event_type) = filter.event_type {
            query.push(" AND event_type = ");
            query.push_bind(event_type);
        }

        if let Some(org_id) = filter.organization_id {
            query.push(" AND organization_id = ");
            query.push_bind(org_id);
        }

        if let Some(from_date) = filter.from_date {
            query.push(" AND start_date >= ");
            query.push_bind(from_date);
        }

        if let Some(to_date) = filter.to_date {
            query.push(" AND start_date <= ");
            query.push_bind(to_date);
        }

        query.push(" ORDER BY start_date DESC LIMIT ");
        query.push_bind(filter.pagination.limit() as i64);
        query.push(" OFFSET ");
        query.push_bind(filter.pagination.offset() as i64);

        let events: Vec<Event> = query.build_query_as().fetch_all(self.pool).await?;

        Ok(events)
    }

    /// Events starting on or after `cutoff`, newest first, capped at 50.
    pub async fn recent(&self, cutoff: NaiveDate) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events \
             WHERE start_date >= $1 \
             ORDER BY start_date DESC \
             LIMIT 50"
        ))
        .bind(cutoff)
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// Final standings: result rows joined with player identity, in
    /// position order. Pair events yield one row per partner.
    pub async fn standings(&self, event_id: i32) -> Result<Vec<EventStandingRow>> {
        let rows = sqlx::query_as::<_, EventStandingRow>(
            "SELECT r.position, \
                    p.id AS player_id, \
                    p.firstname || ' ' || p.lastname AS player_name, \
                    p.number AS player_number, \
                    COALESCE(r.score, 0) AS score, \
                    COALESCE(r.percentage, 0) AS percentage, \
                    COALESCE(r.masterpoints_awarded, 0) AS masterpoints \
             FROM results r \
             INNER JOIN players p ON r.player_id = p.id \
             WHERE r.event_id = $1 \
             ORDER BY r.position ASC NULLS LAST, r.id",
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn sessions(&self, event_id: i32) -> Result<Vec<Session>> {
        let sessions = sqlx::query_as::<_, Session>(
            "SELECT id, event_id, session_number, date, status, boards_played, \
                    movement_type, created_at \
             FROM sessions \
             WHERE event_id = $1 \
             ORDER BY session_number",
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(sessions)
    }

    pub async fn create(&self, req: &CreateEventRequest) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "INSERT INTO events \
             (organization_id, parent_event_id, code, name, event_type, start_date, end_date, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(req.organization_id)
        .bind(req.parent_event_id)
        .bind(&req.code)
        .bind(&req.name)
        .bind(&req.event_type)
        .bind(req.start_date)
        .bind(req.end_date)
        .bind(&req.status)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_foreign_key_violation() {
                StorageError::ConstraintViolation(
                    "Organization or parent event does not exist".to_string(),
                )
            } else {
                err
            }
        })?;

        Ok(event)
    }

    pub async fn update(&self, id: i32, existing: &Event, req: &UpdateEventRequest) -> Result<Event> {
        let code = req.code.as_ref().or(existing.code.as_ref());
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let event_type = req.event_type.as_ref().unwrap_or(&existing.event_type);
        let start_date = req.start_date.unwrap_or(existing.start_date);
        let end_date = req.end_date.or(existing.end_date);
        let status = req.status.as_ref().unwrap_or(&existing.status);

        let event = sqlx::query_as::<_, Event>(&format!(
            "UPDATE events \
             SET code = $2, name = $3, event_type = $4, start_date = $5, \
                 end_date = $6, status = $7 \
             WHERE id = $1 \
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(id)
        .bind(code)
        .bind(name)
        .bind(event_type)
        .bind(start_date)
        .bind(end_date)
        .bind(status)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }
}
