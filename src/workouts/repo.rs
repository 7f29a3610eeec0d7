use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Workout record owned by a user. `is_active` distinguishes active from
/// archived entries; deletion removes the row entirely.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub duration: String,
    pub status: String,
    pub is_active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub date_added: OffsetDateTime,
}

pub struct NewWorkout<'a> {
    pub user_id: Uuid,
    pub name: &'a str,
    pub duration: &'a str,
    pub status: &'a str,
    pub date_added: Option<OffsetDateTime>,
}

impl Workout {
    pub async fn create(db: &PgPool, new: &NewWorkout<'_>) -> anyhow::Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            INSERT INTO workouts (user_id, name, duration, status, date_added)
            VALUES ($1, $2, $3, $4, COALESCE($5, now()))
            RETURNING id, user_id, name, duration, status, is_active, date_added
            "#,
        )
        .bind(new.user_id)
        .bind(new.name)
        .bind(new.duration)
        .bind(new.status)
        .bind(new.date_added)
        .fetch_one(db)
        .await?;
        Ok(workout)
    }

    /// All workouts belonging to one user, newest first.
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Workout>> {
        let rows = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, user_id, name, duration, status, is_active, date_added
            FROM workouts
            WHERE user_id = $1
            ORDER BY date_added DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn list_active(db: &PgPool) -> anyhow::Result<Vec<Workout>> {
        let rows = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, user_id, name, duration, status, is_active, date_added
            FROM workouts
            WHERE is_active = TRUE
            ORDER BY date_added DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Workout>> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, user_id, name, duration, status, is_active, date_added
            FROM workouts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(workout)
    }

    /// Like `find_by_id` but scoped to the owner; another user's workout id
    /// behaves as absent.
    pub async fn find_owned(db: &PgPool, id: Uuid, user_id: Uuid) -> anyhow::Result<Option<Workout>> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, user_id, name, duration, status, is_active, date_added
            FROM workouts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(workout)
    }

    /// Case-insensitive substring match on the workout name.
    pub async fn search_by_name(db: &PgPool, name: &str) -> anyhow::Result<Vec<Workout>> {
        let rows = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, user_id, name, duration, status, is_active, date_added
            FROM workouts
            WHERE name ILIKE '%' || $1 || '%'
            ORDER BY date_added DESC
            "#,
        )
        .bind(name)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Update the mutable fields; absent fields keep their current value.
    pub async fn update_fields(
        db: &PgPool,
        id: Uuid,
        user_id: Uuid,
        name: Option<&str>,
        duration: Option<&str>,
        status: Option<&str>,
    ) -> anyhow::Result<Option<Workout>> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            UPDATE workouts
            SET name = COALESCE($3, name),
                duration = COALESCE($4, duration),
                status = COALESCE($5, status)
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, duration, status, is_active, date_added
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(name)
        .bind(duration)
        .bind(status)
        .fetch_optional(db)
        .await?;
        Ok(workout)
    }

    pub async fn set_active(
        db: &PgPool,
        id: Uuid,
        user_id: Uuid,
        active: bool,
    ) -> anyhow::Result<Option<Workout>> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            UPDATE workouts
            SET is_active = $3
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, duration, status, is_active, date_added
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(active)
        .fetch_optional(db)
        .await?;
        Ok(workout)
    }

    pub async fn set_status(
        db: &PgPool,
        id: Uuid,
        user_id: Uuid,
        status: &str,
    ) -> anyhow::Result<Option<Workout>> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            UPDATE workouts
            SET status = $3
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, duration, status, is_active, date_added
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(status)
        .fetch_optional(db)
        .await?;
        Ok(workout)
    }

    pub async fn delete(db: &PgPool, id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
