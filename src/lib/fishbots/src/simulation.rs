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

//! Running trials and aggregating their coverage curves.

use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Fishbot, FishbotError, Frame, Grid, Result, Strategy};

/// Cleaned fraction of the grid after each tick of one trial.
pub type TrialResult = Vec<f64>;

/// One [`TrialResult`] per trial, in trial order.
pub type BatchResult = Vec<TrialResult>;

/// Parameters of a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fishbots per trial.
    pub num_agents: usize,

    /// Distance each fishbot travels per tick.
    pub speed: f64,

    /// Grid width in tiles.
    pub width: i32,

    /// Grid height in tiles.
    pub height: i32,

    /// A trial stops once this fraction of the grid is clean.
    pub min_coverage: f64,

    /// Independent trials per simulation.
    pub num_trials: usize,

    /// Movement strategy of every fishbot.
    pub strategy: Strategy,
}

impl SimulationConfig {
    fn new(
        num_agents: usize,
        speed: f64,
        width: i32,
        height: i32,
        min_coverage: f64,
        num_trials: usize,
        strategy: Strategy,
    ) -> Self {
        Self {
            num_agents,
            speed,
            width,
            height,
            min_coverage,
            num_trials,
            strategy,
        }
    }

    /// Check every parameter, so that a bad config fails before any trial starts.
    pub fn validate(&self) -> Result<()> {
        self.validate_trial()?;
        if self.num_trials == 0 {
            return Err(FishbotError::InvalidTrialCount);
        }
        Ok(())
    }

    fn validate_trial(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(FishbotError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        // A step as long as the diagonal can never land inside the grid.
        let diagonal = f64::from(self.width).hypot(f64::from(self.height));
        if !self.speed.is_finite() || self.speed <= 0.0 || self.speed >= diagonal {
            return Err(FishbotError::InvalidSpeed(self.speed));
        }
        if !(0.0..=1.0).contains(&self.min_coverage) {
            return Err(FishbotError::InvalidCoverage(self.min_coverage));
        }
        if self.num_agents == 0 {
            return Err(FishbotError::InvalidAgentCount);
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(1, 1.0, 20, 20, 0.8, 20, Strategy::Standard)
    }
}

/// A single trial: one grid and the fishbots cleaning it, advanced one tick at a time.
///
/// [`run_trial`] drives a trial to completion. Step it by hand to watch it, e.g. to render a
/// [`Frame`] after every tick.
#[derive(Debug, Clone)]
pub struct Trial {
    grid: Grid,
    fishbots: Vec<Fishbot>,
    min_coverage: f64,
    ticks: usize,
}

impl Trial {
    /// Build a fresh grid and randomly placed fishbots as described by `config`. The number of
    /// trials in `config` is ignored.
    pub fn new<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Result<Self> {
        config.validate_trial()?;
        let grid = Grid::new(config.width, config.height)?;
        let fishbots = (0..config.num_agents)
            .map(|_| Fishbot::new(&grid, config.speed, config.strategy, rng))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            grid,
            fishbots,
            min_coverage: config.min_coverage,
            ticks: 0,
        })
    }

    /// The grid being cleaned.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The fishbots, in the order they move.
    pub fn fishbots(&self) -> &[Fishbot] {
        &self.fishbots
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    /// Whether the grid has reached the minimum coverage.
    pub fn is_done(&self) -> bool {
        self.grid.cleaned_fraction() >= self.min_coverage
    }

    /// Move every fishbot once, in order, and return the cleaned fraction afterwards.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<f64> {
        for fishbot in self.fishbots.iter_mut() {
            fishbot.tick(&mut self.grid, rng)?;
        }
        self.ticks += 1;
        Ok(self.grid.cleaned_fraction())
    }

    /// Snapshot of the current state.
    pub fn frame(&self) -> Frame {
        Frame::capture(self.ticks, &self.grid, &self.fishbots)
    }

    /// Step until the minimum coverage is reached and return the cleaned fraction after every
    /// tick. Coverage is checked before the first tick, so a minimum of 0 gives an empty result.
    /// Fails if a fishbot finds no move inside the grid.
    pub fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> Result<TrialResult> {
        let mut cleaned_fractions = Vec::new();
        while !self.is_done() {
            cleaned_fractions.push(self.step(rng)?);
        }
        debug!(
            ticks = self.ticks,
            coverage = self.grid.cleaned_fraction(),
            "trial finished"
        );
        Ok(cleaned_fractions)
    }
}

/// Run one trial of `config` to completion.
pub fn run_trial<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Result<TrialResult> {
    Trial::new(config, rng)?.run(rng)
}

/// Run `config.num_trials` independent trials one after another, all drawing from `rng`.
pub fn run_simulation<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<BatchResult> {
    config.validate()?;
    debug!(?config, "running simulation");
    (0..config.num_trials)
        .map(|_| run_trial(config, rng))
        .collect()
}

/// Run `config.num_trials` independent trials on the rayon thread pool.
///
/// Each trial gets its own generator seeded from a master generator built from `seed`, so the
/// result depends only on `config` and `seed`, never on the number of threads.
pub fn run_simulation_parallel(config: &SimulationConfig, seed: u64) -> Result<BatchResult> {
    config.validate()?;
    debug!(?config, seed, "running simulation in parallel");
    let mut master = crate::Rng::seed_from_u64(seed);
    let trial_seeds: Vec<u64> = (0..config.num_trials).map(|_| master.gen()).collect();
    trial_seeds
        .into_par_iter()
        .map(|trial_seed| {
            let mut rng = crate::Rng::seed_from_u64(trial_seed);
            run_trial(config, &mut rng)
        })
        .collect()
}

/// Index-wise mean of several coverage curves.
///
/// The result is as long as the longest curve. A shorter curve has already converged, so it is
/// padded with its final value; an empty curve counts as 0.0 throughout.
pub fn compute_means(results: &[TrialResult]) -> Vec<f64> {
    let longest = results.iter().map(Vec::len).max().unwrap_or(0);
    let mut totals = vec![0.0; longest];
    for result in results {
        let last = result.last().copied().unwrap_or(0.0);
        for (i, total) in totals.iter_mut().enumerate() {
            *total += result.get(i).copied().unwrap_or(last);
        }
    }
    let count = results.len() as f64;
    totals.into_iter().map(|total| total / count).collect()
}

/// Mean number of ticks the trials took. Zero when there are no trials.
pub fn mean_trial_length(results: &[TrialResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let total: usize = results.iter().map(Vec::len).sum();
    total as f64 / results.len() as f64
}
