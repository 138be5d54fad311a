//! # Resolução de Ícones por Symbol-Id
//!
//! Os catálogos referenciam ícones por nome (`"Grid3x3"`, `"Brain"`, ...).
//! Quem transforma o nome em algo visível é um [`IconResolver`]. A página
//! nunca sabe se o glifo é um caractere Unicode, um SVG ou uma classe de
//! fonte; só insere o [`Markup`] retornado.
//!
//! [`GlyphIcons`] é a implementação embutida: uma tabela estática de
//! caracteres Unicode, sem arquivos externos.

use maud::{html, Markup};

/// Capacidade única: symbol-id → glifo renderizável.
///
/// Um symbol-id desconhecido nunca é erro para a página; o resolver decide
/// o que exibir.
pub trait IconResolver: Send + Sync {
    fn resolve(&self, symbol_id: &str) -> Markup;
}

/// Glifo usado quando o symbol-id não está na tabela.
const FALLBACK_GLYPH: &str = "◆";

/// Tabela symbol-id → caractere, cobrindo os ícones usados pelo catálogo.
const GLYPHS: &[(&str, &str)] = &[
    ("ArrowRight", "→"),
    ("Atom", "⚛"),
    ("Bot", "🤖"),
    ("Brain", "🧠"),
    ("Cpu", "🔲"),
    ("Eye", "👁"),
    ("FileSearch", "🔍"),
    ("FileText", "📄"),
    ("Gamepad2", "🎮"),
    ("GitBranch", "⑂"),
    ("Grid3x3", "▦"),
    ("Heart", "♥"),
    ("Layers", "☰"),
    ("MessageSquare", "💬"),
    ("Sparkles", "✨"),
    ("Users", "👥"),
];

/// Resolver baseado em caracteres Unicode.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlyphIcons;

impl GlyphIcons {
    /// Caractere para o symbol-id, se conhecido.
    pub fn glyph(symbol_id: &str) -> Option<&'static str> {
        GLYPHS
            .iter()
            .find(|(name, _)| *name == symbol_id)
            .map(|(_, glyph)| *glyph)
    }
}

impl IconResolver for GlyphIcons {
    fn resolve(&self, symbol_id: &str) -> Markup {
        let glyph = Self::glyph(symbol_id).unwrap_or_else(|| {
            tracing::warn!(symbol_id, "ícone desconhecido, usando glifo padrão");
            FALLBACK_GLYPH
        });
        html! {
            span class="icon" data-icon=(symbol_id) aria-hidden="true" { (glyph) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CATALOG;

    /// Todo symbol-id usado pelo catálogo tem glifo próprio
    #[test]
    fn test_catalog_icons_are_known() {
        let icons = CATALOG
            .architectures
            .iter()
            .map(|a| a.icon)
            .chain(CATALOG.research_areas.iter().map(|r| r.icon))
            .chain(CATALOG.future_directions.iter().map(|f| f.icon))
            .chain(CATALOG.application_panels.iter().map(|p| p.icon))
            .chain(["FileText", "ArrowRight"]);
        for icon in icons {
            assert!(GlyphIcons::glyph(icon).is_some(), "sem glifo: {icon}");
        }
    }

    /// O markup carrega o symbol-id e o glifo
    #[test]
    fn test_resolve_renders_span() {
        let html = GlyphIcons.resolve("Brain").into_string();
        assert!(html.contains(r#"data-icon="Brain""#));
        assert!(html.contains("🧠"));
    }

    /// Symbol-id desconhecido cai no glifo padrão, sem falhar
    #[test]
    fn test_unknown_symbol_uses_fallback() {
        let html = GlyphIcons.resolve("DoesNotExist").into_string();
        assert!(html.contains(FALLBACK_GLYPH));
        assert!(html.contains(r#"data-icon="DoesNotExist""#));
    }
}
