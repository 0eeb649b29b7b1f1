pub mod andamento;
pub mod observacao;
pub mod pdti;
pub mod projeto;
pub mod sustentacao;
