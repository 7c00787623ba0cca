//! Database layer: connection management and the four student operations.
//!
//! Every operation is one parameterized statement against a single Postgres
//! connection (a pool capped at one connection, so the process owns it
//! exclusively for its lifetime). Rows decode straight into
//! [`Student`](crate::model::Student); no stringly intermediate layer.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::model::{NewStudent, Student};

/// Open the connection and probe it with `SELECT 1`.
///
/// Failure here is fatal to the caller: there is no retry policy, the
/// process is expected to report the driver error and exit.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool> {
    let url = config.connection_url();
    debug!(host = %config.host, dbname = %config.dbname, "connecting to postgres");

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&url)
        .await?;

    // Health probe: a pool connects lazily, so force one round trip now
    sqlx::query("SELECT 1").execute(&pool).await?;

    info!("connected to {}", config.dbname);
    Ok(pool)
}

/// Create the `students` table when it is missing. Idempotent.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            age INTEGER NOT NULL,
            major TEXT NOT NULL
        );
    "#,
    )
    .execute(pool)
    .await?;

    debug!("students table ready");
    Ok(())
}

/// Insert a student, returning the stored row with its assigned id
pub async fn insert_student(pool: &PgPool, student: &NewStudent) -> Result<Student> {
    let row: Student = sqlx::query_as(
        r#"
        INSERT INTO students (name, age, major)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(&student.name)
    .bind(student.age)
    .bind(&student.major)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Delete every student with this exact name, returning the affected count
pub async fn delete_by_name(pool: &PgPool, name: &str) -> Result<u64> {
    let result = sqlx::query("DELETE FROM students WHERE name = $1")
        .bind(name)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Fetch every student with this exact name
pub async fn search_by_name(pool: &PgPool, name: &str) -> Result<Vec<Student>> {
    let rows: Vec<Student> = sqlx::query_as("SELECT * FROM students WHERE name = $1")
        .bind(name)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

/// Fetch the whole roster, oldest id first
pub async fn list_all(pool: &PgPool) -> Result<Vec<Student>> {
    let rows: Vec<Student> = sqlx::query_as("SELECT * FROM students ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows)
}
