/// Something the user asked for: flip a card, grade it, type into the
/// new-deck form.
///
/// Intents carry every input their reducer needs. The study session, for
/// example, resolves and shuffles the deck before sending `Start`.
pub trait Intent: Send + 'static {}
