//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Reads accept `&PgPool`; writes accept `&mut PgConnection` so the caller
//! owns the transaction.

pub mod andamento_repo;
pub mod chamado_repo;
pub mod observacao_repo;
pub mod pdti_acao_repo;
pub mod projeto_repo;

pub use andamento_repo::AndamentoRepo;
pub use chamado_repo::ChamadoRepo;
pub use observacao_repo::ObservacaoRepo;
pub use pdti_acao_repo::PdtiAcaoRepo;
pub use projeto_repo::ProjetoRepo;
