//! Deck catalog: built-in decks plus user-created custom decks.
//!
//! The catalog keeps two ordered partitions. Built-ins are fixed when the
//! catalog is constructed; custom decks come and go at runtime and shadow a
//! built-in of the same name on every read.

mod builtin;
mod card;
mod draft;
mod error;
mod store;

pub use builtin::default_decks;
pub use card::{Card, ColorTag, Deck, EXAMPLE_PLACEHOLDER};
pub use draft::{CardDraft, DeckDraft, MAX_DRAFT_CARDS};
pub use error::CatalogError;
pub use store::{Catalog, DeckMap};
