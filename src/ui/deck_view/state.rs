use crate::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeckViewState {
    #[default]
    Hidden,
    Visible {
        deck_name: String,
        /// Index of the first card shown.
        scroll: usize,
    },
}

impl UiState for DeckViewState {}

impl DeckViewState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn deck_name(&self) -> Option<&str> {
        match self {
            Self::Visible { deck_name, .. } => Some(deck_name),
            Self::Hidden => None,
        }
    }

    pub fn scroll(&self) -> usize {
        match self {
            Self::Visible { scroll, .. } => *scroll,
            Self::Hidden => 0,
        }
    }
}
