use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use buildadeck::{Card, Shoe};
use buildadeck_drivers::parse_config_from_file;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "~/.buildadeck.yml";

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// The path of the config file
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIG_PATH))]
    config: String,

    /// How many shuffled cards to deal. Overrides the config file
    #[arg(short, long)]
    draws: Option<usize>,

    /// Log deck materialization and shuffles to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = CommandLineArgs::parse();
    init_tracing(args.verbose);

    let config_path = resolve_config_path(&args.config)?;
    let config = parse_config_from_file(&config_path)?;
    let shoe = Shoe::try_from(&config)
        .with_context(|| format!("building shoe from {}", config_path.display()))?;
    let total = shoe.len()?;

    println!("deck: {:?}", shoe.deck());
    println!("shoe: {:?}", shoe);
    println!("total: {}", total);
    println!();

    for (card, count) in count_cards(&shoe)? {
        println!("{}: {}", card, count);
    }
    println!();

    let draws = args.draws.or(config.shoe.draws).unwrap_or(total);
    for (position, card) in shoe.shuffled()?.take(draws).enumerate() {
        println!("{:>4}. {}", position + 1, card);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // Ignore the error if a global subscriber is already set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_config_path(config: &str) -> Result<PathBuf> {
    if config != DEFAULT_CONFIG_PATH {
        return Ok(PathBuf::from(config));
    }
    let Some(home_dir) = home::home_dir() else {
        bail!("Cannot find home directory");
    };
    let config_file_path = home_dir.join(".buildadeck.yml");
    if !config_file_path.exists() {
        bail!("Config file {} does not exist", config_file_path.display());
    }
    if config_file_path.is_dir() {
        bail!("This should be a path rather than a directory");
    }
    Ok(config_file_path)
}

/// Counts each distinct card in the shoe, wildcards first, then by suit and
/// rank.
fn count_cards(shoe: &Shoe<String>) -> Result<Vec<(&Card<String>, usize)>> {
    let mut counts: HashMap<&Card<String>, usize> = HashMap::new();
    for index in 0..shoe.len()? {
        *counts.entry(shoe.get(isize::try_from(index)?)?).or_insert(0) += 1;
    }
    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|(a, _), (b, _)| (&a.suit, a.rank).cmp(&(&b.suit, b.rank)));
    Ok(counts)
}
