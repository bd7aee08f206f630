//! Verbs and input tokenisation.

use strsim::jaro_winkler;

/// Minimum similarity for a did-you-mean suggestion (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.8;

/// The verbs the game understands. Anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Move through an exit.
    Go,
    /// Pick up an item.
    Take,
    /// Put down an item.
    Drop,
    /// List carried items.
    Inventory,
    /// Attack something, optionally with an item.
    Attack,
    /// Show the command summary.
    Help,
    /// End the session.
    Quit,
}

/// Verb words, canonical name first.
const VERB_WORDS: &[(Verb, &[&str])] = &[
    (Verb::Go, &["go", "walk"]),
    (Verb::Take, &["take", "get"]),
    (Verb::Drop, &["drop"]),
    (Verb::Inventory, &["inv", "inventory", "i"]),
    (Verb::Attack, &["attack", "hit"]),
    (Verb::Help, &["help", "?"]),
    (Verb::Quit, &["quit", "q"]),
];

impl Verb {
    /// Look up a verb word (case-insensitive).
    pub fn parse(word: &str) -> Option<Self> {
        let word = word.to_lowercase();
        VERB_WORDS
            .iter()
            .find(|(_, words)| words.contains(&word.as_str()))
            .map(|(verb, _)| *verb)
    }

    /// The canonical word for this verb.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Take => "take",
            Self::Drop => "drop",
            Self::Inventory => "inv",
            Self::Attack => "attack",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }
}

/// Suggest the canonical verb closest to a misspelt word.
pub fn suggest_verb(word: &str) -> Option<&'static str> {
    let lower = word.to_lowercase();
    let word = lower.as_str();
    VERB_WORDS
        .iter()
        .flat_map(|(verb, words)| words.iter().map(move |w| (verb.name(), jaro_winkler(word, w))))
        .filter(|(_, score)| *score >= SUGGEST_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(name, _)| name)
}

/// A line of input split on whitespace.
///
/// Arguments past the last word typed read as `None`, so a handler never sees
/// anything the player did not type on this line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    verb: String,
    args: Vec<String>,
}

impl Tokens {
    /// Split a line. Returns `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace().map(str::to_string);
        let verb = words.next()?;
        Some(Self {
            verb,
            args: words.collect(),
        })
    }

    /// The first word, as typed.
    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// The `n`th argument after the verb, or `None` if it was not typed.
    pub fn arg(&self, n: usize) -> Option<&str> {
        self.args.get(n).map(String::as_str)
    }

    /// Number of arguments typed after the verb.
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }
}
