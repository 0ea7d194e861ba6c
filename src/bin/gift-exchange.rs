//! Gift exchange CLI
//!
//! Plays simulated White Elephant sessions: one traced game, or a batch
//! with aggregate statistics.

use clap::{Parser, Subcommand};
use gift_exchange::{Action, GiftExchange, Playout, PlayoutConfig, PlayerId};

/// White Elephant turn engine CLI
#[derive(Parser)]
#[command(name = "gift-exchange")]
#[command(about = "Simulate White Elephant gift exchanges")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Comma-separated player names (overrides --players)
    #[arg(short, long, value_delimiter = ',', global = true)]
    names: Vec<String>,

    /// Number of generated players when no names are given
    #[arg(long, default_value = "6", global = true)]
    players: usize,

    /// Chance a player steals when stealing is allowed
    #[arg(short = 'p', long, default_value = "0.5", global = true, value_parser = parse_probability)]
    steal_probability: f64,

    /// Seed (batch runs use seed, seed+1, ...)
    #[arg(short, long, default_value = "42", global = true)]
    seed: u64,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one session and print every move
    Play,

    /// Play many sessions and print statistics
    Simulate {
        /// Number of sessions
        #[arg(short, long, default_value = "1000")]
        games: u32,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let mut config = PlayoutConfig::new()
        .with_player_count(cli.players)
        .with_steal_probability(cli.steal_probability)
        .with_seed_offset(cli.seed);
    if !cli.names.is_empty() {
        config = config.with_names(cli.names.iter().map(|n| n.trim()));
    }

    match cli.command {
        Commands::Play => {
            let (session, summary) = Playout::random(config.with_games(1)).play_game(0)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(session.state())?);
            } else {
                print_trace(&session);
                println!(
                    "\n{} actions, {} steals",
                    summary.actions, summary.steals
                );
            }
        }
        Commands::Simulate { games } => {
            let stats = Playout::random(config.with_games(games)).run()?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("games:               {}", stats.games);
                println!("mean actions:        {:.2}", stats.mean_actions());
                println!("mean steals:         {:.2}", stats.mean_steals());
                println!("max steals (player): {}", stats.max_steals_seen);
                println!("games with no steal: {}", stats.games_without_winner);
                let mut positions: Vec<_> = stats.wins_by_position.keys().copied().collect();
                positions.sort_unstable();
                for position in positions {
                    println!("  position {:>2} won {:>5.1}%", position, stats.win_rate(position) * 100.0);
                }
            }
        }
    }

    Ok(())
}

fn parse_probability(value: &str) -> Result<f64, String> {
    let probability: f64 = value.parse().map_err(|e| format!("{}", e))?;
    if (0.0..=1.0).contains(&probability) {
        Ok(probability)
    } else {
        Err(format!("{} is not within [0, 1]", value))
    }
}

fn print_trace(session: &GiftExchange) {
    let state = session.state();
    let name = |id: PlayerId| {
        state
            .player(id)
            .map(|p| p.to_string())
            .unwrap_or_else(|| id.to_string())
    };

    println!("Turn order:");
    for player in session.order_reveal() {
        println!("  {}. {}", player.order.unwrap_or(0), player);
    }
    println!();

    for record in state.history().iter().filter(|r| r.action.is_gift_move()) {
        match &record.action {
            Action::TakeFromPile { player } => {
                println!("[turn {:>2}] {} takes a gift from the pile", record.turn, name(*player));
            }
            Action::StealGift { player, from } => {
                println!("[turn {:>2}] {} steals from {}", record.turn, name(*player), name(*from));
            }
            _ => {}
        }
    }

    if let Some(result) = session.result() {
        println!();
        if result.has_winner() {
            let winners: Vec<String> = result.winners.iter().map(|&id| name(id)).collect();
            println!("Most popular ({} steals): {}", result.max_steals, winners.join(", "));
        } else {
            println!("Nobody was stolen from.");
        }
    }
}
