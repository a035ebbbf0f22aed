//! The win/loss relation discovered by querying the battle service.

use std::collections::HashSet;

/// A single battle result: `winner` beat `loser`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    pub winner: String,
    pub loser: String,
}

impl Outcome {
    pub fn new(winner: impl Into<String>, loser: impl Into<String>) -> Self {
        Outcome {
            winner: winner.into(),
            loser: loser.into(),
        }
    }

    /// True if this outcome is about exactly the entities `first` and `second`,
    /// in either direction.
    pub fn matches(&self, first: &str, second: &str) -> bool {
        (self.winner == first && self.loser == second)
            || (self.winner == second && self.loser == first)
    }
}

/// Directed "beats" relation over entity names.
///
/// Presence of `(a, b)` asserts that `a` beat `b`. The table never holds both
/// directions for the same two names. No transitivity is implied: a cycle
/// such as A > B > C > A is stored as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankTable {
    beats: HashSet<(String, String)>,
}

impl RankTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome.
    ///
    /// If the reverse result was already recorded it is dropped and returned.
    /// This only happens when the same two names are queried twice, i.e. the
    /// input contained duplicates.
    pub fn record(&mut self, outcome: Outcome) -> Option<Outcome> {
        let Outcome { winner, loser } = outcome;
        let replaced = if winner == loser {
            None
        } else {
            self.beats.take(&(loser.clone(), winner.clone()))
        };
        self.beats.insert((winner, loser));
        replaced.map(|(w, l)| Outcome::new(w, l))
    }

    /// Whether `winner` is recorded as beating `loser`.
    pub fn beats(&self, winner: &str, loser: &str) -> bool {
        self.beats.contains(&(winner.to_string(), loser.to_string()))
    }

    pub fn len(&self) -> usize {
        self.beats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }

    /// All recorded outcomes, in no particular order.
    pub fn outcomes(&self) -> impl Iterator<Item = Outcome> + '_ {
        self.beats.iter().map(|(w, l)| Outcome::new(w.clone(), l.clone()))
    }
}

impl FromIterator<Outcome> for RankTable {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut table = RankTable::new();
        for outcome in iter {
            table.record(outcome);
        }
        table
    }
}
