//! # Módulo Web — A Página Servida
//!
//! Camada web construída com **Axum** + **HTMX** + **Maud**.
//!
//! ## Arquitetura Web
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Browser (HTMX opcional)                                      │
//! ├──────────────────────────────────────────────────────────────┤
//! │ Axum Router (este módulo)                                    │
//! │  ├── GET /                             → página completa     │
//! │  ├── GET /architectures/{index}/toggle → HTMX fragment       │
//! │  ├── GET /applications/{tab}           → HTMX fragment       │
//! │  ├── GET /api/catalog                  → JSON                │
//! │  └── GET /health                       → JSON                │
//! ├──────────────────────────────────────────────────────────────┤
//! │ Static Assets (tower_http::ServeDir → /assets/)              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Submódulos
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado imutável (`AppState`) |
//! | [`handlers`] | Handlers Axum para cada rota |
//! | [`templates`] | Templates Maud (HTML server-side) |

pub mod handlers;
pub mod state;
pub mod templates;

use std::path::Path;

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
///
/// - **Página HTML**: `/`
/// - **HTMX fragments**: `/architectures/{index}/toggle`, `/applications/{tab}`
/// - **API JSON**: `/api/catalog`, `/health`
/// - **Estáticos**: `/assets/*` → `assets_dir`
pub fn create_router(state: AppState, assets_dir: &Path) -> Router {
    Router::new()
        // ── Página HTML ───────────────────────────────────────
        .route("/", get(handlers::index))
        // ── HTMX fragments ───────────────────────────────────
        .route(
            "/architectures/{index}/toggle",
            get(handlers::toggle_architecture),
        )
        .route("/applications/{tab}", get(handlers::select_tab))
        // ── API JSON ──────────────────────────────────────────
        .route("/api/catalog", get(handlers::catalog_json))
        .route("/health", get(handlers::health))
        // ── Arquivos estáticos ────────────────────────────────
        .nest_service("/assets", ServeDir::new(assets_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
