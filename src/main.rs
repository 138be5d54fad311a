#![allow(dead_code)]
//! # Искусственный интеллект — Página Informativa sobre IA
//!
//! **Ponto de entrada principal** do servidor da página.
//!
//! A página apresenta conteúdo educacional fixo (arquiteturas de redes
//! neurais, áreas de aplicação, pesquisas marcantes e direções futuras) com
//! duas interações: expandir um card de arquitetura e trocar de aba.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging
//!   ├── Lê ServerConfig do ambiente
//!   ├── Monta AppState (catálogo static + GlyphIcons) e Router
//!   ├── Faz bind do TCP listener
//!   └── Serve até Ctrl-C / SIGTERM
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Executar com logs padrão (info)
//! cargo run
//!
//! # Outra porta, logs detalhados
//! AI_PAGE_ADDR=127.0.0.1:8080 RUST_LOG=debug cargo run
//! ```

/// Módulo `config` — configuração via variáveis de ambiente.
mod config;

/// Módulo `content` — registros e catálogos estáticos da página.
mod content;

/// Módulo `error` — erros de entrada da camada HTTP.
mod error;

/// Módulo `ui` — seletor de card expandido, abas e resolver de ícones.
mod ui;

/// Módulo `web` — servidor axum, handlers HTTP e templates.
mod web;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::web::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Aceita RUST_LOG para configurar o nível (padrão: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🧠 AI concepts page — Starting...");

    let config = ServerConfig::from_env().context("Configuração inválida")?;
    let state = AppState::with_glyphs();
    tracing::info!(
        architectures = state.catalog.architectures.len(),
        research_areas = state.catalog.research_areas.len(),
        future_directions = state.catalog.future_directions.len(),
        assets = %config.assets_dir.display(),
        "Catálogo carregado"
    );

    let app = web::create_router(state, &config.assets_dir);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Falha ao fazer bind em {}", config.addr))?;
    tracing::info!("🚀 Server running at http://{}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Servidor encerrado");
    Ok(())
}

/// Resolve no primeiro Ctrl-C ou, em Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Falha ao escutar Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Falha ao escutar SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("Sinal de encerramento recebido");
}
