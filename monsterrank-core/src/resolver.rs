//! The battle-outcome capability consumed by the table builder.
//!
//! Transport and encoding live with the implementor. The CLI ships an HTTP
//! resolver; [`StaticResolver`] answers from an in-memory list of outcomes.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;

use crate::table::Outcome;

/// Why a single battle query produced no usable outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request timed out after {after_secs}s")]
    Timeout { after_secs: u64 },
    #[error("battle service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed battle response: {0}")]
    Malformed(String),
    #[error("no recorded outcome for {first} vs {second}")]
    NoOutcome { first: String, second: String },
}

/// Answers "who wins between `first` and `second`?".
///
/// Callers await each query to completion before issuing the next one.
pub trait OutcomeResolver {
    fn resolve(
        &self,
        first: &str,
        second: &str,
    ) -> impl Future<Output = Result<Outcome, ResolveError>>;
}

/// Resolver backed by a fixed set of outcomes.
///
/// Each outcome answers the query for its two names in either order. Every
/// query is logged so callers can inspect what was asked.
#[derive(Debug, Default)]
pub struct StaticResolver {
    outcomes: HashMap<(String, String), Outcome>,
    queries: RefCell<Vec<(String, String)>>,
}

impl StaticResolver {
    pub fn new(outcomes: impl IntoIterator<Item = Outcome>) -> Self {
        let mut map = HashMap::new();
        for outcome in outcomes {
            map.insert((outcome.loser.clone(), outcome.winner.clone()), outcome.clone());
            map.insert((outcome.winner.clone(), outcome.loser.clone()), outcome);
        }
        StaticResolver {
            outcomes: map,
            queries: RefCell::new(Vec::new()),
        }
    }

    /// Queries received so far, in order.
    pub fn queries(&self) -> Vec<(String, String)> {
        self.queries.borrow().clone()
    }
}

impl OutcomeResolver for StaticResolver {
    async fn resolve(&self, first: &str, second: &str) -> Result<Outcome, ResolveError> {
        self.queries
            .borrow_mut()
            .push((first.to_string(), second.to_string()));

        self.outcomes
            .get(&(first.to_string(), second.to_string()))
            .cloned()
            .ok_or_else(|| ResolveError::NoOutcome {
                first: first.to_string(),
                second: second.to_string(),
            })
    }
}
