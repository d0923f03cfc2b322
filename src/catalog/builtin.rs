//! Decks that ship with the application.

use crate::catalog::card::{Card, ColorTag, Deck};
use crate::catalog::store::DeckMap;

/// The fixed built-in decks, in display order.
pub fn default_decks() -> DeckMap {
    let mut decks = DeckMap::new();
    decks.insert(
        "Advanced Vocabulary".to_string(),
        Deck::new(
            "Vocabulary",
            ColorTag::Blue,
            vec![
                Card::new(
                    "Eloquent",
                    "Fluent and persuasive in speaking or writing",
                    "Her eloquent speech moved the audience to tears.",
                ),
                Card::new(
                    "Meticulous",
                    "Showing great attention to detail; very careful",
                    "The scientist was meticulous in recording every observation.",
                ),
                Card::new(
                    "Ubiquitous",
                    "Present, appearing, or found everywhere",
                    "Mobile phones have become ubiquitous in modern society.",
                ),
                Card::new(
                    "Ephemeral",
                    "Lasting for a very short time",
                    "The beauty of cherry blossoms is ephemeral, lasting only weeks.",
                ),
                Card::new(
                    "Ambiguous",
                    "Open to more than one interpretation; unclear",
                    "The politician's ambiguous statement confused voters.",
                ),
            ],
        ),
    );
    decks.insert(
        "Literary Devices".to_string(),
        Deck::new(
            "English Literature",
            ColorTag::Purple,
            vec![
                Card::new(
                    "Metaphor",
                    "A figure of speech comparing two unlike things without using 'like' or 'as'",
                    "Time is a thief (time isn't literally a thief).",
                ),
                Card::new(
                    "Alliteration",
                    "Repetition of the same sound at the start of words",
                    "Peter Piper picked a peck of pickled peppers.",
                ),
                Card::new(
                    "Personification",
                    "Giving human qualities to non-human things",
                    "The wind whispered through the trees.",
                ),
                Card::new(
                    "Hyperbole",
                    "Exaggerated statements not meant to be taken literally",
                    "I've told you a million times!",
                ),
                Card::new(
                    "Simile",
                    "A comparison using 'like' or 'as'",
                    "She was as brave as a lion.",
                ),
            ],
        ),
    );
    decks.insert(
        "Grammar Terms".to_string(),
        Deck::new(
            "Grammar",
            ColorTag::Green,
            vec![
                Card::new(
                    "Subordinate Clause",
                    "A clause that cannot stand alone as a complete sentence",
                    "Although it was raining (subordinate), we went outside (main).",
                ),
                Card::new(
                    "Active Voice",
                    "When the subject performs the action",
                    "The cat chased the mouse (the cat does the action).",
                ),
                Card::new(
                    "Passive Voice",
                    "When the subject receives the action",
                    "The mouse was chased by the cat (mouse receives action).",
                ),
                Card::new(
                    "Conjunction",
                    "A word used to connect clauses or sentences",
                    "I wanted to go, but it was too late (but is the conjunction).",
                ),
                Card::new(
                    "Adverb",
                    "A word that modifies a verb, adjective, or other adverb",
                    "She ran quickly (quickly modifies the verb ran).",
                ),
            ],
        ),
    );
    decks
}
