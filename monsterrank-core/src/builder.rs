//! Builds the [`RankTable`] by asking the resolver about every pair.
//!
//! Queries go out strictly one at a time, in [`enumerate_pairs`] order. Any
//! failed or nonsensical answer aborts the build: a table with a gap would
//! make the final order silently unreliable.

use std::io;

use crate::pairs::{enumerate_pairs, pair_count};
use crate::resolver::{OutcomeResolver, ResolveError};
use crate::table::{Outcome, RankTable};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("battle {first} vs {second} failed: {source}")]
    Resolver {
        first: String,
        second: String,
        #[source]
        source: ResolveError,
    },
    #[error("battle {first} vs {second} reported winner {winner:?} and loser {loser:?}")]
    UnexpectedOutcome {
        first: String,
        second: String,
        winner: String,
        loser: String,
    },
    #[error("failed to report battle {winner} vs {loser}: {message}")]
    Report {
        winner: String,
        loser: String,
        message: String,
    },
}

/// Query every pair of `items` and collect the results.
///
/// `on_outcome` is called once per successful comparison, before the next
/// query is issued. An error from it stops the build like a failed battle.
pub async fn build_rank_table<S, R, F>(
    items: &[S],
    resolver: &R,
    mut on_outcome: F,
) -> Result<RankTable, BuildError>
where
    S: AsRef<str>,
    R: OutcomeResolver,
    F: FnMut(&Outcome) -> io::Result<()>,
{
    let total = pair_count(items.len());
    let mut table = RankTable::new();

    for (done, (first, second)) in enumerate_pairs(items).into_iter().enumerate() {
        let (first, second) = (first.as_ref(), second.as_ref());
        tracing::debug!(first, second, "battle {}/{}", done + 1, total);

        let outcome = resolver
            .resolve(first, second)
            .await
            .map_err(|source| BuildError::Resolver {
                first: first.to_string(),
                second: second.to_string(),
                source,
            })?;

        if !outcome.matches(first, second) {
            return Err(BuildError::UnexpectedOutcome {
                first: first.to_string(),
                second: second.to_string(),
                winner: outcome.winner,
                loser: outcome.loser,
            });
        }

        on_outcome(&outcome).map_err(|e| BuildError::Report {
            winner: outcome.winner.clone(),
            loser: outcome.loser.clone(),
            message: e.to_string(),
        })?;
        if let Some(replaced) = table.record(outcome) {
            tracing::warn!(
                winner = %replaced.winner,
                loser = %replaced.loser,
                "earlier result overturned by a repeated battle (duplicate names?)"
            );
        }
    }

    Ok(table)
}
