//! # Handlers HTTP — Os Endpoints da Página
//!
//! Cada função pública é um handler Axum mapeado em
//! [`super::create_router()`].
//!
//! | Handler | Método | Retorno | Uso |
//! |---------|--------|---------|-----|
//! | `index` | GET | HTML completo | Página com estado da query |
//! | `toggle_architecture` | GET | HTMX fragment | `#architecture-list` |
//! | `select_tab` | GET | HTMX fragment | `#application-tabs` |
//! | `catalog_json` | GET | JSON | Catálogo completo |
//! | `health` | GET | JSON | Liveness |
//!
//! Nenhum handler toca estado mutável: o estado de UI chega na query,
//! passa pela transição pura e volta embutido no HTML.

use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::state::AppState;
use super::templates::{self, PageView};
use crate::content::Catalog;
use crate::error::PageError;
use crate::ui::{CardSelector, ExpandedCard, Tab};

/// Estado de UI recebido na query string (`?expanded=2&tab=nlp`).
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Índice do card expandido; ausente = todos recolhidos.
    pub expanded: Option<usize>,
    /// Aba ativa; ausente = `vision`.
    #[serde(default)]
    pub tab: Tab,
}

impl PageQuery {
    /// Valida o índice contra o catálogo e monta o [`PageView`].
    fn into_view(self, catalog: &Catalog) -> Result<(CardSelector, PageView), PageError> {
        let expanded = ExpandedCard::from_index(self.expanded);
        let selector = CardSelector::restore(catalog.architectures.len(), expanded)?;
        let view = PageView {
            expanded,
            tab: self.tab,
        };
        Ok((selector, view))
    }
}

/// Resposta do endpoint `/health`.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Converte Maud Markup em resposta Html<String> do Axum.
fn markup_to_html(m: maud::Markup) -> Html<String> {
    Html(m.into_string())
}

/// GET `/` — Página completa no estado pedido pela query.
///
/// Sem query: todos os cards recolhidos e a aba `vision` visível.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    let (_, view) = query.into_view(state.catalog)?;
    Ok(markup_to_html(templates::full_page(
        state.catalog,
        state.icons.as_ref(),
        view,
    )))
}

/// GET `/architectures/{index}/toggle` — Alterna um card e re-renderiza a lista.
///
/// A query traz o estado **antes** do clique. O fragment retornado
/// substitui `#architecture-list` inteiro.
pub async fn toggle_architecture(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    let (mut selector, view) = query.into_view(state.catalog)?;
    let expanded = selector.toggle_expand(index)?;
    let view = PageView { expanded, ..view };
    Ok(markup_to_html(templates::architecture_list(
        state.catalog,
        state.icons.as_ref(),
        view,
    )))
}

/// GET `/applications/{tab}` — Troca a aba visível.
///
/// Slugs desconhecidos são rejeitados pelo extrator `Path<Tab>` com `400`.
/// A `tab` da query, se vier, é ignorada: vale a do path.
pub async fn select_tab(
    State(state): State<AppState>,
    Path(tab): Path<Tab>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    let (_, view) = query.into_view(state.catalog)?;
    tracing::debug!(tab = tab.slug(), "aba selecionada");
    Ok(markup_to_html(templates::application_tabs(
        state.catalog,
        state.icons.as_ref(),
        PageView { tab, ..view },
    )))
}

/// GET `/api/catalog` — Todo o conteúdo estático como JSON.
pub async fn catalog_json(State(state): State<AppState>) -> Json<&'static Catalog> {
    Json(state.catalog)
}

/// GET `/health` — Sempre `{"status":"ok"}` enquanto o processo responde.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
