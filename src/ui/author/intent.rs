use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AuthorIntent {
    /// Show the dialog with a fresh draft.
    Open,
    Close,
    FocusNext,
    FocusPrev,
    /// Append a character to the focused text field.
    Insert { ch: char },
    /// Delete the last character of the focused text field.
    Backspace,
    /// Change the color when the color field is focused.
    CycleColor { forward: bool },
    /// Append an empty card row and focus its word field.
    AddCard,
    /// Drop the last card row. At least one row always remains.
    RemoveCard,
    /// Saving failed; keep the dialog open and show why.
    Rejected { message: String },
}

impl Intent for AuthorIntent {}
