mod battle;
mod config;
mod output;
mod run;

use clap::Parser;
use monsterrank_core::{Outcome, StaticResolver};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::battle::HttpResolver;
use crate::run::{RunError, USAGE};

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "monsterrank",
    version,
    about = "Rank monsters by asking a battle service about every pair"
)]
struct Cli {
    /// Monster names to rank (at least two)
    monsters: Vec<String>,

    /// Battle service base URL. Requests go to <endpoint>/battle/<first>+<second>
    #[arg(long)]
    endpoint: Option<String>,

    /// Per-request timeout in seconds. Default: 10
    #[arg(long)]
    timeout: Option<u64>,

    /// Resolve battles from a JSON file of {"winner", "loser"} records instead of HTTP
    #[arg(long)]
    outcomes: Option<PathBuf>,

    /// Output JSON instead of a list line
    #[arg(long)]
    json: bool,

    /// Log each request on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (default: ~/.config/monsterrank/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Create a default config file and exit
    #[arg(long)]
    init_config: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Load recorded outcomes from a JSON array file.
fn load_outcomes(path: &Path) -> Vec<Outcome> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| bail(format!("Failed to read outcomes file {}: {e}", path.display())));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| bail(format!("Failed to parse outcomes file {}: {e}", path.display())))
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = || {
        cli.config
            .clone()
            .unwrap_or_else(|| config::config_path().unwrap_or_else(|e| bail(e)))
    };

    if cli.init_config {
        let path = config_path();
        config::create_default_config(&path).unwrap_or_else(|e| bail(e));
        println!("Created config at {}", path.display());
        return;
    }

    // Usage errors come before any config or network work.
    if let Err(e) = run::check_usage(&cli.monsters) {
        eprintln!("{USAGE}");
        bail(e);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.outcomes {
        Some(ref path) => {
            let resolver = StaticResolver::new(load_outcomes(path));
            run::run(&cli.monsters, &resolver, &mut out).await
        }
        None => {
            let cfg = config::load_config(&config_path()).unwrap_or_else(|e| bail(e));
            let battle_config = cfg.battle_config(cli.endpoint.clone(), cli.timeout);
            if battle_config.timeout.is_zero() {
                bail("--timeout must be at least 1 second");
            }
            let resolver = HttpResolver::new(&battle_config).unwrap_or_else(|e| bail(e));
            tracing::debug!(endpoint = %battle_config.endpoint, "using battle service");
            run::run(&cli.monsters, &resolver, &mut out).await
        }
    };

    let ranking = match result {
        Ok(ranking) => ranking,
        Err(e @ RunError::Usage { .. }) => {
            eprintln!("{USAGE}");
            bail(e);
        }
        Err(e) => bail(e),
    };

    let printed = if cli.json {
        output::print_json(&mut out, &ranking)
    } else {
        output::print_list(&mut out, &ranking)
    };
    if let Err(e) = printed.and_then(|()| out.flush()) {
        bail(format!("Failed to write ranking: {e}"));
    }
}
