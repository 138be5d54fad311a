//! # Estado da Aplicação Web
//!
//! Tudo o que os handlers compartilham é imutável: o catálogo `static` e o
//! resolver de ícones. O estado de UI (card expandido, aba ativa) pertence a
//! cada página aberta e viaja na URL, nunca aqui.

use std::sync::Arc;

use crate::content::{Catalog, CATALOG};
use crate::ui::{GlyphIcons, IconResolver};

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    /// Catálogo de conteúdo, vivo pelo processo inteiro.
    pub catalog: &'static Catalog,
    /// Colaborador que transforma symbol-ids em glifos.
    pub icons: Arc<dyn IconResolver>,
}

impl AppState {
    pub fn new(catalog: &'static Catalog, icons: Arc<dyn IconResolver>) -> Self {
        Self { catalog, icons }
    }

    /// Catálogo embutido + glifos Unicode.
    pub fn with_glyphs() -> Self {
        Self::new(&CATALOG, Arc::new(GlyphIcons))
    }
}
