//! One ranking run: check the arguments, battle every pair, sort.
use monsterrank_core::{BuildError, OutcomeResolver, build_rank_table, pair_count, rank};
use std::collections::HashSet;
use std::io::Write;

pub const USAGE: &str = "Usage: monsterrank [OPTIONS] <MONSTER> <MONSTER>...";

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("need at least 2 monsters to rank, got {got}")]
    Usage { got: usize },
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Final result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    pub monsters: Vec<String>,
    pub comparisons: usize,
}

pub fn check_usage(monsters: &[String]) -> Result<(), RunError> {
    if monsters.len() < 2 {
        return Err(RunError::Usage { got: monsters.len() });
    }
    Ok(())
}

/// Battle every pair of `monsters`, printing `Winner <w>, Loser <l>` to `out`
/// as each result arrives, then rank them.
///
/// Nothing is queried when there are fewer than two monsters. Any failed
/// battle, or a failed write to `out`, aborts the run without a ranking.
pub async fn run<R, W>(monsters: &[String], resolver: &R, out: &mut W) -> Result<Ranking, RunError>
where
    R: OutcomeResolver,
    W: Write,
{
    check_usage(monsters)?;

    let distinct: HashSet<&str> = monsters.iter().map(String::as_str).collect();
    if distinct.len() < monsters.len() {
        tracing::warn!("duplicate monster names given; their relative order is undefined");
    }

    let comparisons = pair_count(monsters.len());
    tracing::info!("ranking {} monsters ({} battles)", monsters.len(), comparisons);

    let table = build_rank_table(monsters, resolver, |o| {
        writeln!(out, "Winner {}, Loser {}", o.winner, o.loser)?;
        out.flush()
    })
    .await?;

    Ok(Ranking {
        monsters: rank(monsters, &table),
        comparisons,
    })
}
