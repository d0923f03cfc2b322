//! Command-line surface.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::catalog::{Card, Catalog, ColorTag};
use crate::session::{SessionError, StudyMode};

#[derive(Debug, Parser)]
#[command(name = "flashdeck", version, about = "Terminal flashcards for study and quizzing")]
pub struct Cli {
    /// Path to config file (default: <config dir>/flashdeck/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Open the interactive study screen (default)
    Tui {
        /// Mode used by Enter on the deck list, overriding `study.default_mode`
        #[arg(long, value_enum, value_name = "MODE")]
        mode: Option<StudyMode>,
    },
    /// List all decks
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print every card of one deck
    Show {
        /// Deck name, as shown by `list`
        deck: String,
    },
}

#[derive(Debug, Serialize)]
struct DeckSummary<'a> {
    name: &'a str,
    category: &'a str,
    color: ColorTag,
    cards: usize,
    custom: bool,
}

/// Render the catalog for `flashdeck list`.
pub fn render_list(catalog: &Catalog, json: bool) -> serde_json::Result<String> {
    let summaries: Vec<DeckSummary<'_>> = catalog
        .list_decks()
        .into_iter()
        .map(|(name, deck)| DeckSummary {
            name,
            category: &deck.category,
            color: deck.color,
            cards: deck.len(),
            custom: catalog.is_custom(name),
        })
        .collect();

    if json {
        let mut out = serde_json::to_string_pretty(&summaries)?;
        out.push('\n');
        return Ok(out);
    }

    let name_width = summaries
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);
    let category_width = summaries
        .iter()
        .map(|s| s.category.chars().count())
        .max()
        .unwrap_or(0)
        .max(8);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<name_width$}  {:<category_width$}  {:<6}  CARDS",
        "NAME", "CATEGORY", "COLOR"
    );
    for summary in &summaries {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:<category_width$}  {:<6}  {}",
            summary.name, summary.category, summary.color, summary.cards
        );
    }
    Ok(out)
}

/// Render one deck for `flashdeck show`.
pub fn render_deck(catalog: &Catalog, name: &str) -> Result<String, SessionError> {
    let deck = catalog.get(name).ok_or_else(|| SessionError::DeckNotFound {
        name: name.to_string(),
    })?;

    let mut out = String::new();
    let _ = writeln!(out, "{} ({}, {} cards)", name, deck.category, deck.len());
    for (index, card) in deck.cards.iter().enumerate() {
        let _ = writeln!(out);
        write_card(&mut out, index + 1, card);
    }
    Ok(out)
}

fn write_card(out: &mut String, number: usize, card: &Card) {
    let _ = writeln!(out, "{:>2}. {}", number, card.word());
    let _ = writeln!(out, "    {}", card.definition());
    let _ = writeln!(out, "    e.g. {}", card.example());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_json() {
        let cli = Cli::try_parse_from(["flashdeck", "list", "--json"]).unwrap();
        assert_eq!(cli.command, Some(Command::List { json: true }));
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["flashdeck"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn tui_mode_is_a_typed_value() {
        let cli = Cli::try_parse_from(["flashdeck", "tui", "--mode", "shuffle"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Tui {
                mode: Some(StudyMode::Shuffle)
            })
        );

        let cli = Cli::try_parse_from(["flashdeck", "tui"]).unwrap();
        assert_eq!(cli.command, Some(Command::Tui { mode: None }));

        assert!(Cli::try_parse_from(["flashdeck", "tui", "--mode", "cram"]).is_err());
    }

    #[test]
    fn global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["flashdeck", "show", "Grammar Terms", "--config", "x.toml"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert_eq!(
            cli.command,
            Some(Command::Show {
                deck: "Grammar Terms".to_string()
            })
        );
    }

    #[test]
    fn table_lists_builtins_in_order() {
        let out = render_list(&Catalog::with_builtin_decks(), false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("Advanced Vocabulary"));
        assert!(lines[3].starts_with("Grammar Terms"));
        assert!(lines[3].ends_with('5'));
    }

    #[test]
    fn json_marks_custom_decks() {
        let mut catalog = Catalog::with_builtin_decks();
        catalog
            .add_deck(
                "Science",
                "Biology",
                ColorTag::Green,
                vec![Card::without_example("Cell", "Basic unit of life")],
            )
            .unwrap();
        let out = render_list(&catalog, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let decks = value.as_array().unwrap();
        assert_eq!(decks.len(), 4);
        assert_eq!(decks[3]["name"], "Science");
        assert_eq!(decks[3]["color"], "green");
        assert_eq!(decks[3]["custom"], true);
        assert_eq!(decks[0]["custom"], false);
    }

    #[test]
    fn show_unknown_deck_fails() {
        let err = render_deck(&Catalog::with_builtin_decks(), "Missing").unwrap_err();
        assert_eq!(err.to_string(), "Deck 'Missing' not found");
    }
}
