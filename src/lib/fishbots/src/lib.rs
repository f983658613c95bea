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

#![warn(missing_docs)]

//! Fishbots cleaning simulation.
//!
//! Fishbots move through a rectangular ocean grid and clean every tile they land on. This crate
//! measures how many ticks one or more fishbots need to clean a target fraction of the grid under
//! two movement strategies, and aggregates those measurements over many trials.

pub mod experiment;
pub mod fishbot;
pub mod frame;
pub mod grid;
pub mod position;
pub mod simulation;

pub use fishbot::{Fishbot, Strategy};
pub use frame::{Frame, Pose};
pub use grid::Grid;
pub use position::Position;
pub use simulation::{
    compute_means, mean_trial_length, run_simulation, run_simulation_parallel, run_trial,
    BatchResult, SimulationConfig, Trial, TrialResult,
};

/// Canonical random number generator. Any `rand::Rng` works, but seeded runs use this one.
pub type Rng = rand_pcg::Pcg64;

/// Set type used for cleaned tiles.
pub type HashSet<K> = rustc_hash::FxHashSet<K>;

/// Angle in whole degrees. Valid headings are in `0..360`.
pub type Degrees = i32;

/// Fishbots error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FishbotError {
    /// Grid width or height is not positive.
    #[error("invalid grid dimension: {width}x{height}, both must be greater than 0")]
    InvalidDimension {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },

    /// Fishbot speed is not a positive finite number, or is too long a step for any move to
    /// stay inside the grid.
    #[error("invalid speed: {0}, must be greater than 0 and shorter than the grid diagonal")]
    InvalidSpeed(f64),

    /// Heading is outside `0..360`.
    #[error("invalid heading: {0}, must be between 0 and 359 inclusive")]
    InvalidHeading(Degrees),

    /// Minimum coverage is outside `0.0..=1.0`.
    #[error("invalid minimum coverage: {0}, must be between 0 and 1 inclusive")]
    InvalidCoverage(f64),

    /// A trial needs at least one fishbot.
    #[error("at least one fishbot is required")]
    InvalidAgentCount,

    /// A simulation needs at least one trial.
    #[error("at least one trial is required")]
    InvalidTrialCount,

    /// Fishbot position is not a real coordinate, so no heading can bring it inside the grid.
    #[error("invalid fishbot position: ({x}, {y})")]
    InvalidPosition {
        /// The x coordinate.
        x: f64,
        /// The y coordinate.
        y: f64,
    },

    /// Every corrective heading tried still left the grid.
    #[error("fishbot at ({x}, {y}) found no move inside the grid after {attempts} deflections")]
    StuckAgainstWall {
        /// The x coordinate the fishbot is stuck at.
        x: f64,
        /// The y coordinate the fishbot is stuck at.
        y: f64,
        /// Deflections tried.
        attempts: usize,
    },
}

/// Fishbots result.
pub type Result<T> = std::result::Result<T, FishbotError>;
