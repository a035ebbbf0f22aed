//! Output formatting: list line and JSON.
use serde::Serialize;
use std::io::{self, Write};

use crate::run::Ranking;

#[derive(Serialize)]
struct JsonRankedMonster<'a> {
    rank: usize,
    name: &'a str,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    ranking: Vec<JsonRankedMonster<'a>>,
    comparisons: usize,
}

/// Print the ranking as a single list line, e.g. `["Kraken", "Hydra"]`.
pub fn print_list(out: &mut impl Write, ranking: &Ranking) -> io::Result<()> {
    writeln!(out, "{:?}", ranking.monsters)
}

/// Print the ranking as JSON.
pub fn print_json(out: &mut impl Write, ranking: &Ranking) -> io::Result<()> {
    let output = JsonOutput {
        ranking: ranking
            .monsters
            .iter()
            .enumerate()
            .map(|(i, name)| JsonRankedMonster { rank: i + 1, name })
            .collect(),
        comparisons: ranking.comparisons,
    };

    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking() -> Ranking {
        Ranking {
            monsters: vec!["Kraken".to_string(), "Hydra".to_string()],
            comparisons: 1,
        }
    }

    #[test]
    fn test_print_list() {
        let mut out = Vec::new();
        print_list(&mut out, &ranking()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[\"Kraken\", \"Hydra\"]\n");
    }

    #[test]
    fn test_print_json() {
        let mut out = Vec::new();
        print_json(&mut out, &ranking()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["comparisons"], 1);
        assert_eq!(value["ranking"][0]["rank"], 1);
        assert_eq!(value["ranking"][0]["name"], "Kraken");
        assert_eq!(value["ranking"][1]["name"], "Hydra");
    }
}
