//! # Módulo UI — Estado de Interação e Colaboradores Visuais
//!
//! A página tem só duas interações, ambas com uma única variável de estado:
//!
//! - [`ExpandedCard`] / [`CardSelector`] — qual card de arquitetura está aberto
//! - [`Tab`] — qual painel da seção de aplicações está visível
//!
//! Além delas, o [`IconResolver`] é o ponto de extensão para o kit visual:
//! recebe um symbol-id e devolve um glifo.

pub mod icons;
pub mod selector;
pub mod tabs;

pub use icons::{GlyphIcons, IconResolver};
pub use selector::{CardSelector, ExpandedCard};
pub use tabs::Tab;
