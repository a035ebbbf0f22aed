//! Ordering entities by the recorded battle results.
//!
//! The relation in a [`RankTable`] need not be transitive, so the comparator
//! derived from it is not a total order. `slice::sort_by` may panic on such
//! comparators; [`rank`] uses a binary insertion sort that tolerates them.

use std::cmp::Ordering;

use crate::table::RankTable;

/// Result of comparing two entities against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    /// The first entity beat the second.
    Before,
    /// The second entity beat the first.
    After,
    /// No recorded result between the two, or the same entity twice.
    Unordered,
}

impl From<Preference> for Ordering {
    fn from(p: Preference) -> Ordering {
        match p {
            Preference::Before => Ordering::Less,
            Preference::After => Ordering::Greater,
            Preference::Unordered => Ordering::Equal,
        }
    }
}

/// Compare `a` and `b` using only the directly recorded results.
pub fn order(a: &str, b: &str, table: &RankTable) -> Preference {
    if a == b {
        Preference::Unordered
    } else if table.beats(a, b) {
        Preference::Before
    } else if table.beats(b, a) {
        Preference::After
    } else {
        Preference::Unordered
    }
}

/// Return `items` ranked by `table`, winners first.
///
/// Stable: entities with no preference between them keep their input order.
/// Always returns a permutation of `items`, even for cyclic results.
pub fn rank<T>(items: &[T], table: &RankTable) -> Vec<T>
where
    T: AsRef<str> + Clone,
{
    let mut ranked: Vec<T> = Vec::with_capacity(items.len());

    for item in items {
        // Insert after everything `item` does not strictly precede.
        let (mut lo, mut hi) = (0, ranked.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match order(item.as_ref(), ranked[mid].as_ref(), table) {
                Preference::Before => hi = mid,
                Preference::After | Preference::Unordered => lo = mid + 1,
            }
        }
        ranked.insert(lo, item.clone());
    }

    ranked
}
