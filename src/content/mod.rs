//! # Módulo Content — O Conteúdo Estático da Página
//!
//! Todo texto, número e URL exibido pela página vive aqui, como dados
//! imutáveis carregados junto com o binário:
//!
//! - [`records`] — tipos dos registros ([`ArchitectureRecord`], [`Progress`], ...)
//! - [`catalog`] — o [`Catalog`] único ([`CATALOG`]) com todas as seções
//!
//! Nenhuma operação aqui falha ou muta estado. A única regra de validação,
//! `progress ∈ [0, 100]`, é verificada em tempo de compilação por
//! [`Progress::new`].

pub mod catalog;
pub mod records;

pub use catalog::{Catalog, CATALOG};
pub use records::{
    ApplicationPanel, ArchitectureRecord, FutureDirectionRecord, Progress, ResearchAreaRecord,
};
