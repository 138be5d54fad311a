//! # Erros da Camada HTTP
//!
//! O conteúdo da página não falha: é estático. Erros só aparecem quando um
//! cliente manda um estado impossível na URL (ex: `/architectures/9/toggle`
//! com um catálogo de 4 cards). Slugs de aba inválidos nem chegam aqui: o
//! extrator do Axum responde `400` antes.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use maud::html;

/// Erro de entrada recebido pela página.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Índice de arquitetura fora do catálogo.
    #[error("architecture {index} not found (catalog has {len})")]
    ArchitectureNotFound { index: usize, len: usize },
}

impl PageError {
    pub fn status(&self) -> StatusCode {
        match self {
            PageError::ArchitectureNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

/// Responde com um fragmento HTML, já que quem chama é o HTMX.
impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "requisição rejeitada");
        let body = html! {
            div class="page-error" role="alert" { (self.to_string()) }
        };
        (self.status(), Html(body.into_string())).into_response()
    }
}
