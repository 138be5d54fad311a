//! # Registros de Exibição — Os Tipos do Catálogo
//!
//! Cada seção da página é renderizada a partir de uma lista ordenada de
//! registros imutáveis. Todos os campos são `&'static`, então os catálogos
//! inteiros cabem em itens `static` e nunca são alocados em runtime.
//!
//! | Tipo | Seção da página |
//! |------|-----------------|
//! | [`ArchitectureRecord`] | `#tech` — cards expansíveis |
//! | [`ApplicationPanel`] | `#applications` — painéis das abas |
//! | [`ResearchAreaRecord`] | `#research` — listas de artigos |
//! | [`FutureDirectionRecord`] | `#future` — barras de progresso |

use serde::Serialize;

use crate::ui::Tab;

/// Percentual inteiro de progresso, sempre em `0..=100`.
///
/// O construtor é `const fn` e entra em pânico fora do intervalo. Como os
/// catálogos são `static`, um literal inválido quebra a **compilação**, não
/// o servidor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Progress(u8);

impl Progress {
    /// Cria um percentual. Pânico (em tempo de compilação, quando usado em
    /// contexto `const`) se `percent > 100`.
    pub const fn new(percent: u8) -> Self {
        assert!(percent <= 100, "progress must be within 0..=100");
        Self(percent)
    }

    /// Valor inteiro em pontos percentuais.
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Fração preenchida da barra (`progress / 100`).
    pub fn fraction(self) -> f32 {
        f32::from(self.0) / 100.0
    }

    /// Declaração CSS da largura do preenchimento, ex: `width: 40%`.
    pub fn css_width(self) -> String {
        format!("width: {}%", self.0)
    }
}

/// Arquitetura de rede neural exibida como card expansível.
#[derive(Debug, Serialize)]
pub struct ArchitectureRecord {
    pub title: &'static str,
    pub description: &'static str,
    /// Symbol-id resolvido pelo [`crate::ui::IconResolver`].
    pub icon: &'static str,
    /// Exibidas como badges quando o card está expandido.
    pub applications: &'static [&'static str],
    /// Exibidas como lista com marcadores quando o card está expandido.
    pub key_features: &'static [&'static str],
}

/// Área de pesquisa com seus artigos marcantes.
#[derive(Debug, Serialize)]
pub struct ResearchAreaRecord {
    pub title: &'static str,
    pub papers: &'static [&'static str],
    pub icon: &'static str,
}

/// Direção futura da IA com estágio de desenvolvimento estimado.
#[derive(Debug, Serialize)]
pub struct FutureDirectionRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub progress: Progress,
    pub icon: &'static str,
}

/// Célula da grade de fatos de um painel (título + texto curto).
#[derive(Debug, Serialize)]
pub struct FactCell {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Conteúdo fixo de uma aba da seção "Onde a IA é usada".
#[derive(Debug, Serialize)]
pub struct ApplicationPanel {
    pub tab: Tab,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Sempre exatamente duas células.
    pub facts: [FactCell; 2],
}

/// Imagem externa referenciada por URL absoluta.
#[derive(Debug, Serialize)]
pub struct ImageRef {
    pub src: &'static str,
    pub alt: &'static str,
}

/// Âncora da barra de navegação.
#[derive(Debug, Serialize)]
pub struct NavLink {
    /// Fragmento de destino, sem `#` (ex: `"tech"`).
    pub anchor: &'static str,
    pub label: &'static str,
}

/// Cabeçalho comum das seções: badge, título e parágrafos introdutórios.
#[derive(Debug, Serialize)]
pub struct SectionHeader {
    pub anchor: &'static str,
    pub badge: &'static str,
    pub heading: &'static str,
    /// Primeiro parágrafo em destaque, demais como nota menor.
    pub paragraphs: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A fração da barra é proporcional ao percentual
    #[test]
    fn test_progress_fraction() {
        assert!((Progress::new(40).fraction() - 0.40).abs() < f32::EPSILON);
        assert_eq!(Progress::new(0).fraction(), 0.0);
        assert_eq!(Progress::new(100).fraction(), 1.0);
    }

    /// A largura CSS usa o percentual inteiro
    #[test]
    fn test_progress_css_width() {
        assert_eq!(Progress::new(55).css_width(), "width: 55%");
    }

    /// Valores acima de 100 são rejeitados
    #[test]
    #[should_panic(expected = "progress must be within 0..=100")]
    fn test_progress_rejects_out_of_range() {
        let _ = Progress::new(std::hint::black_box(101));
    }

    /// Progress serializa como número puro
    #[test]
    fn test_progress_serializes_transparently() {
        let json = serde_json::to_string(&Progress::new(25)).unwrap();
        assert_eq!(json, "25");
    }
}
