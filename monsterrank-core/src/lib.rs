//! monsterrank-core: ranking by exhaustive pairwise battles.
//!
//! Every pair of entities is put to an [`OutcomeResolver`], the results go
//! into a [`RankTable`], and [`rank`] orders the entities with a comparator
//! derived from that table. No HTTP, no filesystem. Bring your own resolver.
//!
//! # Quick start
//!
//! ```rust
//! use monsterrank_core::{Outcome, StaticResolver, build_rank_table, rank};
//!
//! let monsters = ["Hydra", "Kraken", "Golem"];
//! let resolver = StaticResolver::new([
//!     Outcome::new("Kraken", "Hydra"),
//!     Outcome::new("Hydra", "Golem"),
//!     Outcome::new("Kraken", "Golem"),
//! ]);
//!
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! let table = rt
//!     .block_on(build_rank_table(&monsters, &resolver, |o| {
//!         println!("Winner {}, Loser {}", o.winner, o.loser);
//!         Ok(())
//!     }))
//!     .unwrap();
//!
//! assert_eq!(rank(&monsters, &table), vec!["Kraken", "Hydra", "Golem"]);
//! ```

pub mod builder;
pub mod pairs;
pub mod resolver;
pub mod sort;
pub mod table;

// Re-export primary public API at crate root.
pub use builder::{BuildError, build_rank_table};
pub use pairs::{enumerate_pairs, pair_count};
pub use resolver::{OutcomeResolver, ResolveError, StaticResolver};
pub use sort::{Preference, order, rank};
pub use table::{Outcome, RankTable};
