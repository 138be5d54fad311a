//! # Seletor de Card Expandido
//!
//! A única máquina de estados da página. No máximo um card de arquitetura
//! fica expandido por vez:
//!
//! ```text
//!              select(i)
//!  Collapsed ─────────────▶ Expanded(i)
//!      ▲                     │  │
//!      └──── select(i) ──────┘  │ select(j), j ≠ i
//!                               ▼
//!                          Expanded(j)
//! ```
//!
//! O estado não tem fim: vive enquanto a página estiver aberta. No servidor
//! ele nunca é guardado; chega na query string (`?expanded=2`) e volta
//! embutido nos links re-renderizados.

use crate::error::PageError;

/// Qual card de arquitetura está mostrando seus detalhes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExpandedCard {
    /// Nenhum card expandido (estado inicial).
    #[default]
    Collapsed,
    /// O card no índice dado está expandido.
    Expanded(usize),
}

impl ExpandedCard {
    /// Converte o valor opcional da query string.
    pub fn from_index(index: Option<usize>) -> Self {
        index.map_or(Self::Collapsed, Self::Expanded)
    }

    /// Índice expandido, se houver (forma usada na query string).
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Collapsed => None,
            Self::Expanded(i) => Some(i),
        }
    }

    /// `true` se o card `index` está expandido.
    pub fn is_expanded(self, index: usize) -> bool {
        self == Self::Expanded(index)
    }

    /// Transição pura: clicar no card `index`.
    ///
    /// Clicar no card já expandido o recolhe; clicar em qualquer outro o
    /// expande e recolhe implicitamente o anterior.
    pub fn toggle(self, index: usize) -> Self {
        match self {
            Self::Expanded(current) if current == index => Self::Collapsed,
            _ => Self::Expanded(index),
        }
    }
}

/// Seletor ligado a um catálogo de tamanho fixo.
///
/// Garante que o estado só aponta para índices existentes. Na página, os
/// índices são válidos por construção; a validação existe para entradas
/// vindas de URLs digitadas à mão.
#[derive(Clone, Copy, Debug)]
pub struct CardSelector {
    state: ExpandedCard,
    len: usize,
}

impl CardSelector {
    /// Seletor recolhido para um catálogo com `len` cards.
    pub fn new(len: usize) -> Self {
        Self {
            state: ExpandedCard::Collapsed,
            len,
        }
    }

    /// Restaura um estado recebido do cliente, validando o índice.
    pub fn restore(len: usize, state: ExpandedCard) -> Result<Self, PageError> {
        let selector = Self::new(len);
        if let ExpandedCard::Expanded(index) = state {
            selector.check(index)?;
        }
        Ok(Self { state, ..selector })
    }

    pub fn state(&self) -> ExpandedCard {
        self.state
    }

    /// Operação `toggleExpand(index)`. Retorna o novo estado.
    pub fn toggle_expand(&mut self, index: usize) -> Result<ExpandedCard, PageError> {
        self.check(index)?;
        self.state = self.state.toggle(index);
        tracing::debug!(index, state = ?self.state, "card de arquitetura alternado");
        Ok(self.state)
    }

    fn check(&self, index: usize) -> Result<(), PageError> {
        if index < self.len {
            Ok(())
        } else {
            Err(PageError::ArchitectureNotFound {
                index,
                len: self.len,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Clicar uma vez expande, clicar de novo recolhe
    #[test]
    fn test_toggle_same_card_round_trip() {
        for i in 0..4 {
            let expanded = ExpandedCard::Collapsed.toggle(i);
            assert_eq!(expanded, ExpandedCard::Expanded(i));
            assert_eq!(expanded.toggle(i), ExpandedCard::Collapsed);
        }
    }

    /// Clicar em outro card troca a seleção, nunca dois expandidos
    #[test]
    fn test_toggle_other_card_switches() {
        for i in 0..4 {
            for j in (0..4).filter(|&j| j != i) {
                let state = ExpandedCard::Expanded(i).toggle(j);
                assert_eq!(state, ExpandedCard::Expanded(j));
                assert!(!state.is_expanded(i));
            }
        }
    }

    /// O estado inicial é recolhido
    #[test]
    fn test_default_is_collapsed() {
        assert_eq!(ExpandedCard::default(), ExpandedCard::Collapsed);
        assert_eq!(CardSelector::new(4).state(), ExpandedCard::Collapsed);
    }

    /// Conversão de/para o parâmetro de query
    #[test]
    fn test_query_index_conversion() {
        assert_eq!(ExpandedCard::from_index(None), ExpandedCard::Collapsed);
        assert_eq!(ExpandedCard::from_index(Some(2)), ExpandedCard::Expanded(2));
        assert_eq!(ExpandedCard::Expanded(3).index(), Some(3));
        assert_eq!(ExpandedCard::Collapsed.index(), None);
    }

    /// O seletor percorre a máquina de estados completa
    #[test]
    fn test_selector_walks_state_machine() {
        let mut selector = CardSelector::new(4);
        assert_eq!(selector.toggle_expand(1).unwrap(), ExpandedCard::Expanded(1));
        assert_eq!(selector.toggle_expand(3).unwrap(), ExpandedCard::Expanded(3));
        assert_eq!(selector.toggle_expand(3).unwrap(), ExpandedCard::Collapsed);
    }

    /// Índices fora do catálogo são rejeitados sem alterar o estado
    #[test]
    fn test_selector_rejects_out_of_range() {
        let mut selector = CardSelector::new(4);
        selector.toggle_expand(0).unwrap();
        let err = selector.toggle_expand(4).unwrap_err();
        assert!(matches!(err, PageError::ArchitectureNotFound { index: 4, len: 4 }));
        assert_eq!(selector.state(), ExpandedCard::Expanded(0));
    }

    /// Estados restaurados da query também são validados
    #[test]
    fn test_restore_validates_index() {
        assert!(CardSelector::restore(4, ExpandedCard::Expanded(3)).is_ok());
        assert!(CardSelector::restore(4, ExpandedCard::Collapsed).is_ok());
        assert!(CardSelector::restore(4, ExpandedCard::Expanded(9)).is_err());
    }
}
