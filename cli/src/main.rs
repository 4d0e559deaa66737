use clap::{Parser, Subcommand};
use judge_common::util::config::Config;
use judge_common::util::logger;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a chip-and-wire routing submission and verify its cost
    Circuits,
    /// Check a sliding-vehicle submission: all moves legal, red car out
    Rushhour,
    /// Check a course schedule and compute its malus score
    Timetable,
}

fn main() -> anyhow::Result<()> {
    logger::init();
    let args = Args::parse();

    let config = if args.config.exists() {
        log::info!("Loading configuration from {:?}", args.config);
        let config_str = std::fs::read_to_string(&args.config)
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;
        toml::from_str(&config_str)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?
    } else {
        log::warn!(
            "Configuration file {:?} not found. Using internal defaults.",
            args.config
        );
        Config::default()
    };

    let passed = match args.command {
        Commands::Circuits => run_circuits(&config),
        Commands::Rushhour => run_rushhour(&config),
        Commands::Timetable => run_timetable(&config),
    };

    if !passed {
        std::process::exit(1);
    }

    Ok(())
}

fn run_circuits(config: &Config) -> bool {
    let data_dir = Path::new(&config.circuits.data_dir);
    let output = Path::new(&config.circuits.output_file);

    match judge_circuits::check::run(data_dir, output) {
        Ok(cost) => {
            log::info!("\x1b[32mPASS\x1b[0m: Routing is valid with cost {}.", cost);
            true
        }
        Err(e) => {
            log::error!("\x1b[31mFAIL\x1b[0m: {}", e);
            false
        }
    }
}

fn run_rushhour(config: &Config) -> bool {
    let board_file = Path::new(&config.rushhour.board_file);
    let output = Path::new(&config.rushhour.output_file);

    match judge_rushhour::check::run(board_file, output, config.rushhour.board_size) {
        Ok(moves) => {
            log::info!(
                "\x1b[32mPASS\x1b[0m: The red car exits after {} moves.",
                moves
            );
            true
        }
        Err(e) => {
            log::error!("\x1b[31mFAIL\x1b[0m: {}", e);
            false
        }
    }
}

fn run_timetable(config: &Config) -> bool {
    let schedule = Path::new(&config.timetable.schedule_file);
    let courses = Path::new(&config.timetable.courses_file);
    let rooms = Path::new(&config.timetable.rooms_file);

    match judge_timetable::check::run(schedule, courses, rooms, config.timetable.evening_slot) {
        Ok(score) => {
            log::info!("Malus points for free slots: {}", score.free_slots);
            log::info!("Malus points for overlap: {}", score.overlap);
            log::info!("Malus points for rooms: {}", score.room);
            log::info!("Malus points for evening slot: {}", score.evening);
            log::info!(
                "\x1b[32mPASS\x1b[0m: Schedule is feasible with score {}.",
                score.total()
            );
            true
        }
        Err(e) => {
            log::error!("\x1b[31mFAIL\x1b[0m: {}", e);
            false
        }
    }
}
