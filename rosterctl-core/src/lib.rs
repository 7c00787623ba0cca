pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod validate;

pub use config::{DatabaseConfig, RosterConfig};
pub use db::{connect, delete_by_name, ensure_schema, insert_student, list_all, search_by_name};
pub use error::{Result, RosterError};
pub use model::{NewStudent, Student};
