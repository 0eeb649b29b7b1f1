//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO whose fields are absent-or-present patches

pub mod andamento;
pub mod chamado;
pub mod observacao;
pub mod pdti_acao;
pub mod projeto;
