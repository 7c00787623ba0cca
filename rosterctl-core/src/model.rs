//! Student record data model
//!
//! One entity, one table: the database is the sole source of truth and
//! nothing is cached between operations.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A student row as stored in the `students` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Student {
    /// Database-assigned primary key
    pub id: i32,
    pub name: String,
    /// Always positive; enforced at the input boundary
    pub age: i32,
    pub major: String,
}

/// Field values for a student about to be inserted (no id yet)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub age: i32,
    pub major: String,
}
