use sqlx::{PgPool, QueryBuilder};

use crate::dto::player::{CreatePlayerRequest, PlayerListFilter, UpdatePlayerRequest};
use crate::error::{Result, StorageError};
use crate::models::Player;

const PLAYER_COLUMNS: &str =
    "id, number, firstname, lastname, email, organization_id, status, gender, \
     birthdate, joindate, created_at";

pub struct PlayerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List players with optional status/organization filtering.
    pub async fn list(&self, filter: &PlayerListFilter) -> Result<Vec<Player>> {
        let mut query = QueryBuilder::new(format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE 1=1"
        ));

        if let Some(ref status) = filter.status {
            query.push(" AND status = ");
            query.push_bind(status);
        }

        if let Some(org_id) = filter.organization_id {
            query.push(" AND organization_id = ");
            query.push_bind(org_id);
        }

        query.push(" ORDER BY lastname, firstname LIMIT ");
        query.push_bind(filter.pagination.limit() as i64);
        query.push(" OFFSET ");
        query.push_bind(filter.pagination.offset() as i64);

        let players: Vec<Player> = query.build_query_as().fetch_all(self.pool).await?;

        Ok(players)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Player> {
        let player = sqlx::query_as::<_, Player>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(player)
    }

    /// Create a player. The member number carries a unique constraint;
    /// a duplicate surfaces as a constraint violation, not a 500.
    pub async fn create(&self, req: &CreatePlayerRequest) -> Result<Player> {
        let player = sqlx::query_as::<_, Player>(&format!(
            "INSERT INTO players \
             (number, firstname, lastname, email, organization_id, status, gender, birthdate, joindate) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {PLAYER_COLUMNS}"
        ))
        .bind(req.number)
        .bind(&req.firstname)
        .bind(&req.lastname)
        .bind(&req.email)
        .bind(req.organization_id)
        .bind(&req.status)
        .bind(&req.gender)
        .bind(req.birthdate)
        .bind(req.joindate)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                StorageError::ConstraintViolation("Player number already exists".to_string())
            } else {
                err
            }
        })?;

        Ok(player)
    }

    /// Update profile fields; unset fields keep their current value.
    /// The member number is immutable.
    pub async fn update(
        &self,
        id: i32,
        existing: &Player,
        req: &UpdatePlayerRequest,
    ) -> Result<Player> {
        let firstname = req.firstname.as_ref().unwrap_or(&existing.firstname);
        let lastname = req.lastname.as_ref().unwrap_or(&existing.lastname);
        let email = req.email.as_ref().or(existing.email.as_ref());
        let organization_id = req.organization_id.or(existing.organization_id);
        let status = req.status.as_ref().unwrap_or(&existing.status);
        let gender = req.gender.as_ref().or(existing.gender.as_ref());
        let birthdate = req.birthdate.or(existing.birthdate);

        let player = sqlx::query_as::<_, Player>(&format!(
            "UPDATE players \
             SET firstname = $2, lastname = $3, email = $4, organization_id = $5, \
                 status = $6, gender = $7, birthdate = $8 \
             WHERE id = $1 \
             RETURNING {PLAYER_COLUMNS}"
        ))
        .bind(id)
        .bind(firstname)
        .bind(lastname)
        .bind(email)
        .bind(organization_id)
        .bind(status)
        .bind(gender)
        .bind(birthdate)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(player)
    }
}
