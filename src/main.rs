//! Binary entrypoint for the packforge CLI.
//!
//! Commands:
//! - `init` - create a starter `config.toml` and editable seed files under `data/seeds/`
//! - `open-packs [--pack <name>] [--count <n>]` - simulate pack purchases against a fresh profile
//! - `odds [--floor <rarity>] [--samples <n>]` - empirically sample the rarity roller
//! - `catalog` - load, validate, and summarize the catalogs
//! - `profile --xp <n> --points <n>` - show mastery and rank readouts for given totals
//!
//! See the library crate docs for module-level details: `packforge::`.
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};

use packforge::config::Config;
use packforge::economy::{
    achievement, catalog::Catalog, collection, mastery, packs, rank, rarity, types::Rarity,
};

#[derive(Parser)]
#[command(name = "packforge")]
#[command(about = "Progression and reward economy engine for a collectible card game")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new configuration and seed files
    Init,
    /// Simulate opening packs against a fresh profile
    OpenPacks {
        /// Pack product name (defaults to the first configured pack)
        #[arg(short, long)]
        pack: Option<String>,

        /// Number of packs to open
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,
    },
    /// Empirically sample the rarity roller
    Odds {
        /// Guaranteed floor rarity (legendary/epic/rare/uncommon/common)
        #[arg(short, long)]
        floor: Option<String>,

        /// Number of samples to draw
        #[arg(short, long, default_value_t = 100_000)]
        samples: u64,
    },
    /// Load, validate, and summarize the catalogs
    Catalog,
    /// Show mastery and rank readouts for given usage XP and rank points
    Profile {
        /// Per-card usage XP
        #[arg(long, default_value_t = 0)]
        xp: u64,

        /// Account rank points
        #[arg(long, default_value_t = 0)]
        points: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config early to configure logging (except for Init which writes it)
    let pre_config = match cli.command {
        Commands::Init => None,
        _ => Config::load(&cli.config).await.ok(),
    };
    if !matches!(cli.command, Commands::Init) {
        init_logging(&pre_config, cli.verbose);
    }

    match cli.command {
        Commands::Init => {
            init_logging(&None, cli.verbose);
            Config::create_default(&cli.config).await?;
            let config = Config::load(&cli.config).await?;
            packforge::economy::write_default_seeds(&config.catalogs.seed_dir)?;
            info!(
                "Initialized {} and seed files under {}",
                cli.config, config.catalogs.seed_dir
            );
            println!("Created {} and seed files in {}", cli.config, config.catalogs.seed_dir);
        }
        Commands::OpenPacks { pack, count } => {
            let config = loaded_config(pre_config, &cli.config)?;
            let catalog = Catalog::load_from_dir(&config.catalogs.seed_dir)?;
            open_packs(&config, &catalog, pack.as_deref(), count)?;
        }
        Commands::Odds { floor, samples } => {
            let floor = floor
                .map(|s| s.parse::<Rarity>().map_err(|e| anyhow!(e)))
                .transpose()?;
            print_odds(floor, samples);
        }
        Commands::Catalog => {
            let config = loaded_config(pre_config, &cli.config)?;
            let catalog = Catalog::load_from_dir(&config.catalogs.seed_dir)?;
            print_catalog_summary(&catalog);
        }
        Commands::Profile { xp, points } => {
            let config = loaded_config(pre_config, &cli.config)?;
            let catalog = Catalog::load_from_dir(&config.catalogs.seed_dir)?;
            print_profile(&catalog, xp, points);
        }
    }

    Ok(())
}

fn loaded_config(pre_config: Option<Config>, path: &str) -> Result<Config> {
    pre_config.ok_or_else(|| {
        anyhow!(
            "no configuration at {} (run `packforge init` first)",
            path
        )
    })
}

/// Simulate `count` purchases of one pack product against a fresh profile,
/// then report the collection and any achievement tiers the run unlocked.
fn open_packs(config: &Config, catalog: &Catalog, pack: Option<&str>, count: u32) -> Result<()> {
    let spec = match pack {
        Some(name) => config
            .game
            .packs
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow!("unknown pack: {}", name))?,
        None => &config.game.packs[0],
    };

    let mut rng = rand::thread_rng();
    let mut coins = config.game.starting_coins;
    let mut owned = Vec::new();
    let mut packs_opened: u64 = 0;
    let mut coins_spent: u64 = 0;

    println!(
        "{}: opening up to {} x {} ({} coins each, {} coins available)",
        config.game.name, count, spec.name, spec.cost_coins, coins
    );

    for _ in 0..count {
        if coins < spec.cost_coins {
            warn!(
                "Stopping after {} packs: {} coins left, {} needed",
                packs_opened, coins, spec.cost_coins
            );
            break;
        }
        coins -= spec.cost_coins;
        coins_spent += spec.cost_coins as u64;
        packs_opened += 1;

        let drawn = packs::open_pack(&catalog.cards, &mut rng, &mut owned, spec);
        let listing = drawn
            .iter()
            .map(|c| format!("{} [{}]", c.name, c.rarity))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  pack {}: {}", packs_opened, listing);
    }

    println!(
        "Collection: {} unique cards, {} total copies, {} coins left",
        collection::unique_cards(&owned),
        collection::total_cards(&owned),
        coins
    );

    // Sweep for tiers this simulated run would let the player claim.
    let unique = collection::unique_cards(&owned) as u64;
    let claims = Vec::new();
    let claimable = achievement::claimable(&catalog.achievements, &claims, |id| match id {
        "pack_breaker" => packs_opened,
        "card_hoarder" => unique,
        "big_spender" => coins_spent,
        _ => 0,
    });
    for (id, tier) in &claimable {
        // Catalog lookups cannot miss here; the sweep produced the ids.
        if let Some(a) = catalog.achievements.get(id) {
            let reward = &a.tiers.get(*tier).reward;
            println!(
                "Claimable: {} {} ({} coins, {} dust)",
                a.name, tier, reward.coins, reward.dust
            );
        }
    }
    info!(
        "Simulated {} packs: {} claimable tiers",
        packs_opened,
        claimable.len()
    );
    Ok(())
}

/// Draw `samples` rarities and print the observed distribution next to the
/// base probabilities.
fn print_odds(floor: Option<Rarity>, samples: u64) {
    let mut rng = rand::thread_rng();
    let mut counts = [0u64; 5];
    for _ in 0..samples {
        counts[rarity::roll_rarity(&mut rng, floor).index()] += 1;
    }

    match floor {
        Some(f) => println!("Rarity distribution with floor {} ({} samples):", f, samples),
        None => println!("Base rarity distribution ({} samples):", samples),
    }
    for &tier in &Rarity::ALL {
        let observed = counts[tier.index()] as f64 / samples as f64;
        println!(
            "  {:<9} observed {:>7.4}  (base {:.4})",
            tier.to_string(),
            observed,
            tier.base_probability()
        );
    }
}

fn print_catalog_summary(catalog: &Catalog) {
    println!("Cards: {}", catalog.cards.len());
    for &tier in &Rarity::ALL {
        println!("  {:<9} {}", tier.to_string(), catalog.cards.of_rarity(tier).len());
    }
    println!("Achievements: {}", catalog.achievements.len());
    for a in catalog.achievements.all() {
        println!(
            "  {:<16} bronze {} / silver {} / gold {}",
            a.id, a.tiers.bronze.target, a.tiers.silver.target, a.tiers.gold.target
        );
    }
    println!("Mastery levels: {}", catalog.mastery.levels().len());
    println!("Rank tiers: {}", catalog.ranks.tiers().len());
}

fn print_profile(catalog: &Catalog, xp: u64, points: u32) {
    let level = mastery::level_of(&catalog.mastery, xp);
    println!(
        "Mastery at {} XP: level {} \"{}\" (+{} atk, +{} hp, -{} cost)",
        xp,
        level.level,
        level.title,
        level.bonus.attack_bonus,
        level.bonus.hp_bonus,
        level.bonus.cost_reduction
    );
    match mastery::next_level_of(&catalog.mastery, xp) {
        Some(next) => println!(
            "  next: level {} at {} XP ({}%)",
            next.level,
            next.xp_required,
            mastery::progress_percent(&catalog.mastery, xp)
        ),
        None => println!("  at max level"),
    }

    let current = rank::current_rank(&catalog.ranks, points);
    println!("Rank at {} points: {}", points, current.name);
    match rank::next_rank(&catalog.ranks, points) {
        Some(next) => println!(
            "  next: {} at {} points ({}%)",
            next.name,
            next.points_required,
            rank::progress_percent(&catalog.ranks, points)
        ),
        None => println!("  at top rank"),
    }
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // Base level from CLI verbosity overrides config
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .map(|c| match c.logging.level.as_str() {
                "error" => log::LevelFilter::Error,
                "warn" => log::LevelFilter::Warn,
                "debug" => log::LevelFilter::Debug,
                "trace" => log::LevelFilter::Trace,
                _ => log::LevelFilter::Info,
            })
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config.as_ref().and_then(|c| c.logging.file.clone());
    if let Some(file) = log_file {
        if let Ok(f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file)
        {
            let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));

            // If stdout is a terminal, tee log lines to the console as well;
            // under redirection only the file gets them.
            let is_tty = atty::is(atty::Stream::Stdout);

            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());

                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }

                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        } else {
            builder.format(|fmt, record| {
                writeln!(
                    fmt,
                    "{} [{}] {}",
                    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                    record.level(),
                    record.args()
                )
            });
        }
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }

    let _ = builder.try_init();
}
