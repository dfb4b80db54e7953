//! Word Path - CLI
//!
//! Explore a word-association graph: find optimal paths, replay and play
//! games, and vet or generate puzzles.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use word_path::{
    analysis::{GameSession, HeuristicSolver, SessionOptions, SolverConfig},
    commands::{
        GenerateConfig, PairsConfig, check_pairs, find_path, generate_pairs, replay_game,
        run_play, solve_pairs,
    },
    core::{WordFrequencies, WordGraph},
    loader::{load_frequencies, load_game_record, load_graph, load_pairs},
    output::{
        print_generated_pairs, print_pair_statistics, print_path_result, print_report,
        print_solve_outcome, print_solve_statistics,
    },
    pathfinding::CostModel,
};

#[derive(Parser)]
#[command(
    name = "word_path",
    about = "Navigate a semantic word graph: optimal paths, move analysis and game reports",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word graph JSON file
    #[arg(short, long, global = true, default_value = "data/graph.json")]
    graph: PathBuf,

    /// Word frequency JSON file (enables the rarest-word heuristic)
    #[arg(short, long, global = true)]
    frequencies: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the best path between two words
    Path {
        start: String,
        target: String,

        /// Cost model: hops (fewest moves) or semantic (least drift)
        #[arg(short, long, default_value = "hops", value_parser = parse_cost_model)]
        cost: CostModel,
    },

    /// Replay a recorded game and print its report
    Replay {
        /// Game record JSON file
        record: PathBuf,

        /// Emit the report as JSON instead of formatted text
        #[arg(long)]
        json: bool,

        /// Fill in a missing AI comparison with the heuristic solver's path
        #[arg(long)]
        compare_solver: bool,

        /// Random seed for the solver
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Play a game interactively
    Play { start: String, target: String },

    /// Check a file of start/target pairs
    Pairs {
        /// File with one `start target` pair per line
        file: PathBuf,

        /// Fewest acceptable moves
        #[arg(long, default_value = "3")]
        min_hops: usize,

        /// Most acceptable moves
        #[arg(long, default_value = "6")]
        max_hops: usize,

        /// Also play every pair with the heuristic solver
        #[arg(long)]
        solve: bool,

        /// Base random seed for the solver
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Play a puzzle with the heuristic solver
    Solve {
        start: String,
        target: String,

        /// Random seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Moves per attempt
        #[arg(long, default_value = "30")]
        max_steps: usize,

        /// Attempts before accepting a near-optimal solution
        #[arg(long, default_value = "50")]
        retries: usize,

        /// Emit the outcome as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Generate random puzzles with an exact optimal length
    Generate {
        /// Number of puzzles
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Optimal path length in moves
        #[arg(long, default_value = "4")]
        hops: usize,

        /// Fewest neighbors the start and target must each have
        #[arg(long, default_value = "1")]
        min_degree: usize,

        /// Smallest embedding distance between start and target
        #[arg(long)]
        min_distance: Option<f64>,

        /// Random seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let graph = load_graph(&cli.graph)
        .with_context(|| format!("could not load word graph from {}", cli.graph.display()))?;
    let frequencies = cli
        .frequencies
        .as_deref()
        .map(load_frequencies_with_context)
        .transpose()?;

    match cli.command {
        Commands::Path {
            start,
            target,
            cost,
        } => run_path_command(&graph, &start, &target, cost),
        Commands::Replay {
            record,
            json,
            compare_solver,
            seed,
        } => {
            let solver_seed = compare_solver.then(|| seed.unwrap_or_else(rand::random));
            run_replay_command(&graph, frequencies.as_ref(), &record, json, solver_seed)
        }
        Commands::Play { start, target } => {
            run_play_command(&graph, frequencies.as_ref(), &start, &target)
        }
        Commands::Pairs {
            file,
            min_hops,
            max_hops,
            solve,
            seed,
        } => {
            let solver_seed = solve.then(|| seed.unwrap_or_else(rand::random));
            run_pairs_command(&graph, &file, min_hops, max_hops, solver_seed)
        }
        Commands::Solve {
            start,
            target,
            seed,
            max_steps,
            retries,
            json,
        } => {
            let config = SolverConfig {
                max_steps,
                max_retries: retries,
            };
            run_solve_command(&graph, &start, &target, &config, seed, json)
        }
        Commands::Generate {
            count,
            hops,
            min_degree,
            min_distance,
            seed,
        } => {
            let config = GenerateConfig {
                hops,
                min_degree,
                min_embedding_distance: min_distance,
            };
            run_generate_command(&graph, count, &config, seed)
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_frequencies_with_context(path: &Path) -> Result<WordFrequencies> {
    load_frequencies(path)
        .with_context(|| format!("could not load word frequencies from {}", path.display()))
}

fn parse_cost_model(name: &str) -> Result<CostModel, String> {
    CostModel::from_name(name).ok_or_else(|| {
        format!("unknown cost model '{name}' (expected hops, moves, semantic or distance)")
    })
}

fn run_path_command(graph: &WordGraph, start: &str, target: &str, cost: CostModel) -> Result<()> {
    let result = find_path(graph, start, target, cost)?;
    print_path_result(&result);
    Ok(())
}

fn run_replay_command(
    graph: &WordGraph,
    frequencies: Option<&WordFrequencies>,
    record_path: &Path,
    json: bool,
    solver_seed: Option<u64>,
) -> Result<()> {
    let mut record = load_game_record(record_path)
        .with_context(|| format!("could not load game record {}", record_path.display()))?;
    if let (Some(seed), true) = (solver_seed, record.options.ai_comparison.is_none()) {
        let outcome = HeuristicSolver::new(graph).solve(
            &record.start,
            &record.target,
            &mut StdRng::seed_from_u64(seed),
        );
        record.options.ai_comparison = Some(outcome.ai_comparison());
    }
    let report = replay_game(graph, frequencies, &record)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn run_play_command(
    graph: &WordGraph,
    frequencies: Option<&WordFrequencies>,
    start: &str,
    target: &str,
) -> Result<()> {
    let mut session = GameSession::new(graph, start, target, SessionOptions::default())?;
    if let Some(table) = frequencies {
        session = session.with_frequencies(table);
    }

    let report = run_play(session, io::stdin().lock(), io::stdout())?;
    print_report(&report);
    Ok(())
}

fn run_pairs_command(
    graph: &WordGraph,
    file: &Path,
    min_hops: usize,
    max_hops: usize,
    solver_seed: Option<u64>,
) -> Result<()> {
    anyhow::ensure!(
        min_hops <= max_hops,
        "--min-hops ({min_hops}) must not exceed --max-hops ({max_hops})"
    );
    let pairs = load_pairs(file)
        .with_context(|| format!("could not load pairs from {}", file.display()))?;

    println!("🎯 Checking {} pairs...", pairs.len());
    let config = PairsConfig {
        min_hops,
        max_hops,
        ..PairsConfig::default()
    };
    let stats = check_pairs(graph, &pairs, &config);
    print_pair_statistics(&stats);

    if let Some(seed) = solver_seed {
        println!("\n🤖 Solving {} pairs (seed {seed})...", pairs.len());
        let stats = solve_pairs(graph, &pairs, &SolverConfig::default(), seed, true);
        print_solve_statistics(&stats);
    }
    Ok(())
}

fn run_solve_command(
    graph: &WordGraph,
    start: &str,
    target: &str,
    config: &SolverConfig,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    anyhow::ensure!(config.max_retries > 0, "--retries must be at least 1");
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let outcome = HeuristicSolver::new(graph)
        .with_config(*config)
        .solve(start, target, &mut rng);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_solve_outcome(&outcome);
    }
    Ok(())
}

fn run_generate_command(
    graph: &WordGraph,
    count: usize,
    config: &GenerateConfig,
    seed: Option<u64>,
) -> Result<()> {
    anyhow::ensure!(config.hops > 0, "--hops must be at least 1");
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let pairs = generate_pairs(graph, count, config, &mut rng);
    if pairs.len() < count {
        warn!(
            requested = count,
            found = pairs.len(),
            hops = config.hops,
            "fewer puzzles than requested"
        );
    }
    print_generated_pairs(&pairs, config.hops);
    Ok(())
}
