//! Domain rules for the project-tracking backend.
//!
//! Nothing in this crate touches the database: it holds the field coercion
//! rules applied to inbound JSON, the patch helpers used by update DTOs, and
//! the small derived-state rules (PDTI completion date, required text).

pub mod coercion;
pub mod error;
pub mod patch;
pub mod pdti;
pub mod projeto;
pub mod text;
pub mod types;
