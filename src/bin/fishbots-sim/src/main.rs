/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

//! Runs fishbots experiments from the command line and prints their results.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fishbots::experiment::{self, SweepPoint};
use fishbots::{SimulationConfig, Strategy, Trial};
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "fishbots-sim",
    version,
    about = "Measure how long fishbots take to clean an ocean grid"
)]
struct Cli {
    /// Seed for the random number generator.
    #[arg(long, global = true, default_value_t = 42)]
    seed: u64,

    /// Trials per simulation.
    #[arg(long, global = true, default_value_t = 20)]
    trials: usize,

    /// Fraction of the grid that must be clean to end a trial.
    #[arg(long, global = true, default_value_t = 0.8)]
    coverage: f64,

    /// Distance each fishbot travels per tick.
    #[arg(long, global = true, default_value_t = 1.0)]
    speed: f64,

    /// Print results as JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare strategies on a 20x20 grid with 1 up to MAX_AGENTS fishbots.
    Agents {
        #[arg(long, default_value_t = 10)]
        max_agents: usize,
    },
    /// Compare strategies with two fishbots on grids of equal area and different shapes.
    Shapes,
    /// Run one simulation and print its mean coverage curve.
    Single {
        #[arg(long, default_value_t = 1)]
        agents: usize,
        #[arg(long, default_value_t = 20)]
        width: i32,
        #[arg(long, default_value_t = 20)]
        height: i32,
        #[arg(long, value_enum, default_value_t = StrategyArg::Standard)]
        strategy: StrategyArg,
        /// Run trials on all cores.
        #[arg(long)]
        parallel: bool,
    },
    /// Run one trial and print a frame after every tick, one JSON object per line.
    Frames {
        #[arg(long, default_value_t = 1)]
        agents: usize,
        #[arg(long, default_value_t = 10)]
        width: i32,
        #[arg(long, default_value_t = 10)]
        height: i32,
        #[arg(long, value_enum, default_value_t = StrategyArg::Standard)]
        strategy: StrategyArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Standard,
    RandomWalk,
}

impl From<StrategyArg> for Strategy {
    fn from(strategy: StrategyArg) -> Self {
        match strategy {
            StrategyArg::Standard => Strategy::Standard,
            StrategyArg::RandomWalk => Strategy::RandomWalk,
        }
    }
}

#[derive(Debug, Serialize)]
struct SingleReport {
    config: SimulationConfig,
    mean_ticks: f64,
    mean_coverage: Vec<f64>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut rng = fishbots::Rng::seed_from_u64(cli.seed);
    let base = SimulationConfig {
        speed: cli.speed,
        min_coverage: cli.coverage,
        num_trials: cli.trials,
        ..SimulationConfig::default()
    };

    match cli.command {
        Command::Agents { max_agents } => {
            info!(max_agents, "running fishbot count sweep");
            let points = experiment::agent_count_sweep(1..=max_agents, &base, &mut rng)
                .context("fishbot count sweep failed")?;
            print_sweep("fishbots", &points, cli.json)?;
        }
        Command::Shapes => {
            info!("running grid shape sweep");
            let base = SimulationConfig {
                num_agents: experiment::GRID_SHAPE_SWEEP_AGENTS,
                ..base
            };
            let points =
                experiment::grid_shape_sweep(&experiment::DEFAULT_GRID_SHAPES, &base, &mut rng)
                    .context("grid shape sweep failed")?;
            print_sweep("grid", &points, cli.json)?;
        }
        Command::Single {
            agents,
            width,
            height,
            strategy,
            parallel,
        } => {
            let config = SimulationConfig {
                num_agents: agents,
                width,
                height,
                strategy: strategy.into(),
                ..base
            };
            let results = if parallel {
                fishbots::run_simulation_parallel(&config, cli.seed)
            } else {
                fishbots::run_simulation(&config, &mut rng)
            }
            .context("simulation failed")?;
            let report = SingleReport {
                mean_ticks: fishbots::mean_trial_length(&results),
                mean_coverage: fishbots::compute_means(&results),
                config,
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "{} x{} on {}x{}: {:.1} ticks on average to clean {:.0}%",
                    report.config.strategy,
                    report.config.num_agents,
                    report.config.width,
                    report.config.height,
                    report.mean_ticks,
                    report.config.min_coverage * 100.0
                );
                for (tick, coverage) in report.mean_coverage.iter().enumerate() {
                    println!("{:>6} {:.4}", tick + 1, coverage);
                }
            }
        }
        Command::Frames {
            agents,
            width,
            height,
            strategy,
        } => {
            let config = SimulationConfig {
                num_agents: agents,
                width,
                height,
                strategy: strategy.into(),
                ..base
            };
            let mut trial = Trial::new(&config, &mut rng).context("invalid trial")?;
            println!("{}", serde_json::to_string(&trial.frame())?);
            while !trial.is_done() {
                trial.step(&mut rng).context("trial step failed")?;
                println!("{}", serde_json::to_string(&trial.frame())?);
            }
        }
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_sweep(parameter: &str, points: &[SweepPoint], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(points)?);
        return Ok(());
    }
    println!(
        "{:>10} {:>18} {:>18}",
        parameter,
        Strategy::Standard,
        Strategy::RandomWalk
    );
    for point in points {
        println!(
            "{:>10} {:>18.1} {:>18.1}",
            point.label, point.standard_mean_ticks, point.random_walk_mean_ticks
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_single_with_random_walk() {
        let cli = Cli::parse_from([
            "fishbots-sim",
            "--seed",
            "7",
            "single",
            "--agents",
            "3",
            "--strategy",
            "random-walk",
        ]);
        assert_eq!(cli.seed, 7);
        assert_eq!(cli.trials, 20);
        match cli.command {
            Command::Single {
                agents, strategy, ..
            } => {
                assert_eq!(agents, 3);
                assert_eq!(Strategy::from(strategy), Strategy::RandomWalk);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
