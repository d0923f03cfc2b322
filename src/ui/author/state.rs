use crate::catalog::DeckDraft;
use crate::mvi::UiState;

/// Fields per card row: word, definition, example.
const CARD_FIELDS: usize = 3;
/// Fields before the first card row: name, category, color.
const DECK_FIELDS: usize = 3;

/// One focusable field of the dialog. Card fields carry the row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorField {
    Name,
    Category,
    Color,
    Word(usize),
    Definition(usize),
    Example(usize),
}

impl AuthorField {
    /// Field at a flat focus index.
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => AuthorField::Name,
            1 => AuthorField::Category,
            2 => AuthorField::Color,
            n => {
                let offset = n - DECK_FIELDS;
                let row = offset / CARD_FIELDS;
                match offset % CARD_FIELDS {
                    0 => AuthorField::Word(row),
                    1 => AuthorField::Definition(row),
                    _ => AuthorField::Example(row),
                }
            }
        }
    }

    /// Flat focus index of this field.
    pub fn index(self) -> usize {
        match self {
            AuthorField::Name => 0,
            AuthorField::Category => 1,
            AuthorField::Color => 2,
            AuthorField::Word(row) => DECK_FIELDS + row * CARD_FIELDS,
            AuthorField::Definition(row) => DECK_FIELDS + row * CARD_FIELDS + 1,
            AuthorField::Example(row) => DECK_FIELDS + row * CARD_FIELDS + 2,
        }
    }

    /// Number of focusable fields for a draft with `rows` card rows.
    pub fn count(rows: usize) -> usize {
        DECK_FIELDS + rows * CARD_FIELDS
    }

    /// Mutable text behind this field, `None` for the color picker.
    pub fn text_mut(self, draft: &mut DeckDraft) -> Option<&mut String> {
        match self {
            AuthorField::Name => Some(&mut draft.name),
            AuthorField::Category => Some(&mut draft.category),
            AuthorField::Color => None,
            AuthorField::Word(row) => draft.cards.get_mut(row).map(|c| &mut c.word),
            AuthorField::Definition(row) => draft.cards.get_mut(row).map(|c| &mut c.definition),
            AuthorField::Example(row) => draft.cards.get_mut(row).map(|c| &mut c.example),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthorDialogState {
    #[default]
    Hidden,
    Visible {
        draft: DeckDraft,
        focused: usize,
        /// Message from the last rejected save. Cleared on the next edit.
        error: Option<String>,
    },
}

impl UiState for AuthorDialogState {}

impl AuthorDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn draft(&self) -> Option<&DeckDraft> {
        match self {
            Self::Visible { draft, .. } => Some(draft),
            Self::Hidden => None,
        }
    }

    pub fn focused_field(&self) -> Option<AuthorField> {
        match self {
            Self::Visible { focused, .. } => Some(AuthorField::from_index(*focused)),
            Self::Hidden => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_is_default() {
        assert_eq!(AuthorDialogState::default(), AuthorDialogState::Hidden);
        assert!(AuthorDialogState::default().focused_field().is_none());
    }

    #[test]
    fn field_index_round_trips_for_all_fields() {
        for index in 0..AuthorField::count(4) {
            assert_eq!(AuthorField::from_index(index).index(), index);
        }
        assert_eq!(AuthorField::from_index(3), AuthorField::Word(0));
        assert_eq!(AuthorField::from_index(8), AuthorField::Example(1));
    }
}
