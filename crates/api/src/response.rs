//! Shared response payloads for API handlers.

use serde::Serialize;

/// `{"mensagem": ...}` body returned by delete endpoints that answer `200`.
#[derive(Debug, Serialize)]
pub struct MensagemResponse {
    pub mensagem: &'static str,
}

impl MensagemResponse {
    pub fn new(mensagem: &'static str) -> Self {
        Self { mensagem }
    }
}
