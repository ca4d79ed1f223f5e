//! Command-line interface

use clap::{ArgAction, Parser};
use rand::rngs::StdRng;
use rand::SeedableRng;
use retro_key_gen::types::describe;
use retro_key_gen::KeyManager;
use tracing::info;

/// Largest batch accepted by `--count`
pub const MAX_COUNT: u32 = 1000;

#[derive(Parser, Debug)]
#[command(name = "retro_key_gen")]
#[command(author = "RetroKeyGen Contributors")]
#[command(version = "1.0.0")]
#[command(about = "Generate and validate retro product keys", long_about = "Generate and validate retro product keys\n\nUse --list to see the supported products.\nProvide --product to generate keys, add --validate to check one instead.")]
pub struct Cli {
    /// Product name (e.g., "Windows 95 OEM")
    #[arg(long)]
    pub product: Option<String>,

    /// Validate this key instead of generating one
    #[arg(long, value_name = "KEY")]
    pub validate: Option<String>,

    /// Number of keys to generate (1-1000)
    #[arg(long, default_value_t = 1, conflicts_with = "validate")]
    pub count: u32,

    /// Seed for reproducible generation
    #[arg(long, conflicts_with = "validate")]
    pub seed: Option<u64>,

    /// List all supported products
    #[arg(long)]
    pub list: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Run the CLI.
///
/// Returns `Ok(false)` when a key was checked and found invalid.
pub fn run_cli(cli: Cli) -> anyhow::Result<bool> {
    let manager = KeyManager::with_default_schemes();

    // Handle --list flag
    if cli.list {
        list_products(&manager);
        return Ok(true);
    }

    let product = cli.product.as_ref().ok_or_else(|| {
        anyhow::anyhow!("--product is required. Use --list to see supported products.")
    })?;

    if let Some(key) = &cli.validate {
        let valid = manager.validate(product, key)?;
        info!(product = %product, valid, "key checked");
        println!("{}", if valid { "VALID" } else { "INVALID" });
        return Ok(valid);
    }

    if !(1..=MAX_COUNT).contains(&cli.count) {
        anyhow::bail!("Key count must be between 1 and {}", MAX_COUNT);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(product = %product, count = cli.count, seeded = cli.seed.is_some(), "generating keys");
    for _ in 0..cli.count {
        println!("{}", manager.generate_with(product, &mut rng)?);
    }

    Ok(true)
}

fn list_products(manager: &KeyManager) {
    println!("\nSupported Products:\n");
    for name in manager.scheme_names() {
        println!("  {:20} - {}", name, describe(name).unwrap_or("custom format"));
    }
    println!();
}
