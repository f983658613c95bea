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

//! Experiments comparing the two movement strategies.
//!
//! Each sweep varies one parameter, runs a full simulation per strategy at every value, and
//! reports the mean number of ticks needed to reach the minimum coverage.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{mean_trial_length, run_simulation, Result, SimulationConfig, Strategy};

/// Grid shapes of equal area (400 tiles) with increasingly stretched aspect ratios.
pub const DEFAULT_GRID_SHAPES: [(i32, i32); 6] =
    [(20, 20), (25, 16), (40, 10), (50, 8), (80, 5), (100, 4)];

/// Fishbots per trial in the grid shape sweep.
pub const GRID_SHAPE_SWEEP_AGENTS: usize = 2;

/// Mean ticks for both strategies at one value of the swept parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Human readable value of the swept parameter, e.g. "3" or "40x10".
    pub label: String,

    /// Numeric value of the swept parameter, e.g. the fishbot count or width / height.
    pub parameter: f64,

    /// Mean ticks taken by standard fishbots.
    pub standard_mean_ticks: f64,

    /// Mean ticks taken by random walk fishbots.
    pub random_walk_mean_ticks: f64,
}

impl SweepPoint {
    /// Mean ticks for `strategy`.
    pub fn mean_ticks(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::Standard => self.standard_mean_ticks,
            Strategy::RandomWalk => self.random_walk_mean_ticks,
        }
    }
}

fn compare_strategies<R: Rng + ?Sized>(
    label: String,
    parameter: f64,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<SweepPoint> {
    let mut means = [0.0; 2];
    for (mean, strategy) in means.iter_mut().zip(Strategy::ALL) {
        let config = SimulationConfig {
            strategy,
            ..config.clone()
        };
        *mean = mean_trial_length(&run_simulation(&config, rng)?);
    }
    let [standard_mean_ticks, random_walk_mean_ticks] = means;
    info!(
        %label,
        standard_mean_ticks, random_walk_mean_ticks, "sweep point finished"
    );
    Ok(SweepPoint {
        label,
        parameter,
        standard_mean_ticks,
        random_walk_mean_ticks,
    })
}

/// For each fishbot count, the mean ticks both strategies need on the grid described by `base`.
pub fn agent_count_sweep<R: Rng + ?Sized>(
    agent_counts: impl IntoIterator<Item = usize>,
    base: &SimulationConfig,
    rng: &mut R,
) -> Result<Vec<SweepPoint>> {
    agent_counts
        .into_iter()
        .map(|num_agents| {
            let config = SimulationConfig {
                num_agents,
                ..base.clone()
            };
            compare_strategies(num_agents.to_string(), num_agents as f64, &config, rng)
        })
        .collect()
}

/// For each `(width, height)`, the mean ticks both strategies need with the fishbots described
/// by `base`.
pub fn grid_shape_sweep<R: Rng + ?Sized>(
    shapes: &[(i32, i32)],
    base: &SimulationConfig,
    rng: &mut R,
) -> Result<Vec<SweepPoint>> {
    shapes
        .iter()
        .map(|&(width, height)| {
            let config = SimulationConfig {
                width,
                height,
                ..base.clone()
            };
            compare_strategies(
                format!("{}x{}", width, height),
                f64::from(width) / f64::from(height),
                &config,
                rng,
            )
        })
        .collect()
}
