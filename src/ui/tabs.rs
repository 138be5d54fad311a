//! # Abas da Seção de Aplicações
//!
//! Quatro painéis mutuamente exclusivos. A aba ativa chega do cliente como
//! slug minúsculo (`vision`, `nlp`, `robotics`, `healthcare`) e o serde
//! rejeita qualquer outro valor antes de chegar aos handlers.

use serde::{Deserialize, Serialize};

/// Aba da seção "Где используется ИИ".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Visão computacional (aba inicial).
    #[default]
    Vision,
    Nlp,
    Robotics,
    Healthcare,
}

impl Tab {
    /// Todas as abas, na ordem dos gatilhos.
    pub const ALL: [Tab; 4] = [Tab::Vision, Tab::Nlp, Tab::Robotics, Tab::Healthcare];

    /// Slug usado em URLs e ids HTML.
    pub fn slug(self) -> &'static str {
        match self {
            Tab::Vision => "vision",
            Tab::Nlp => "nlp",
            Tab::Robotics => "robotics",
            Tab::Healthcare => "healthcare",
        }
    }

    /// Rótulo exibido no gatilho da aba.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Vision => "Зрение",
            Tab::Nlp => "NLP",
            Tab::Robotics => "Роботика",
            Tab::Healthcare => "Медицина",
        }
    }

    /// Posição em [`Tab::ALL`].
    pub fn position(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_vision() {
        assert_eq!(Tab::default(), Tab::Vision);
    }

    /// Posição, slug e serde concordam entre si
    #[test]
    fn test_slug_matches_serde_and_position() {
        for (i, tab) in Tab::ALL.into_iter().enumerate() {
            assert_eq!(tab.position(), i);
            let json = serde_json::to_string(&tab).unwrap();
            assert_eq!(json, format!("\"{}\"", tab.slug()));
            let back: Tab = serde_json::from_str(&json).unwrap();
            assert_eq!(back, tab);
        }
    }

    /// Slugs desconhecidos não desserializam
    #[test]
    fn test_unknown_slug_rejected() {
        assert!(serde_json::from_str::<Tab>("\"finance\"").is_err());
        assert!(serde_json::from_str::<Tab>("\"Vision\"").is_err());
    }
}
