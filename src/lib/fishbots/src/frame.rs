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

//! Read-only snapshots of a running trial, for rendering.

use serde::{Deserialize, Serialize};

use crate::{Degrees, Fishbot, Grid, Position};

/// Where a fishbot is and which way it is facing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Fishbot position.
    pub position: Position,

    /// Fishbot heading in degrees.
    pub heading: Degrees,
}

impl From<&Fishbot> for Pose {
    fn from(fishbot: &Fishbot) -> Self {
        Self {
            position: fishbot.position(),
            heading: fishbot.heading(),
        }
    }
}

/// Snapshot of one trial after a tick, enough for a renderer to draw the grid and every fishbot
/// without touching the live simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Ticks elapsed when the frame was taken.
    pub tick: usize,

    /// Grid width in tiles.
    pub width: i32,

    /// Grid height in tiles.
    pub height: i32,

    /// Cleaned tiles, sorted.
    pub cleaned: Vec<(i32, i32)>,

    /// Fishbot poses, in fishbot order.
    pub fishbots: Vec<Pose>,
}

impl Frame {
    /// Capture `grid` and `fishbots` after `tick` ticks.
    pub fn capture(tick: usize, grid: &Grid, fishbots: &[Fishbot]) -> Self {
        let mut cleaned: Vec<(i32, i32)> = grid.cleaned_tiles().collect();
        cleaned.sort_unstable();
        Self {
            tick,
            width: grid.width(),
            height: grid.height(),
            cleaned,
            fishbots: fishbots.iter().map(Pose::from).collect(),
        }
    }

    /// Whether tile `(m, n)` was clean when the frame was taken.
    pub fn is_cleaned(&self, m: i32, n: i32) -> bool {
        self.cleaned.binary_search(&(m, n)).is_ok()
    }

    /// Fraction of tiles clean when the frame was taken.
    pub fn cleaned_fraction(&self) -> f64 {
        self.cleaned.len() as f64 / (self.width as usize * self.height as usize) as f64
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::Strategy;

    #[test]
    fn test_frame_matches_grid_and_fishbots() {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(42);
        let mut grid = Grid::new(6, 4).expect("valid grid");
        let mut fishbots: Vec<Fishbot> = (0..3)
            .map(|_| Fishbot::new(&grid, 1.0, Strategy::RandomWalk, &mut rng))
            .collect::<crate::Result<_>>()
            .expect("valid fishbots");
        for _ in 0..5 {
            for fishbot in fishbots.iter_mut() {
                fishbot.tick(&mut grid, &mut rng).expect("tick");
            }
        }

        let frame = Frame::capture(5, &grid, &fishbots);
        assert_eq!(frame.tick, 5);
        assert_eq!((frame.width, frame.height), (6, 4));
        assert_eq!(frame.cleaned_fraction(), grid.cleaned_fraction());
        for m in 0..6 {
            for n in 0..4 {
                assert_eq!(frame.is_cleaned(m, n), grid.is_cleaned(m, n));
            }
        }
        assert_eq!(frame.fishbots.len(), 3);
        for (pose, fishbot) in frame.fishbots.iter().zip(&fishbots) {
            assert_eq!(pose.position, fishbot.position());
            assert_eq!(pose.heading, fishbot.heading());
        }
    }

    #[test]
    fn test_frame_serializes_to_json() {
        let mut grid = Grid::new(2, 2).expect("valid grid");
        grid.mark_cleaned(Position::new(1.5, 0.5));
        let frame = Frame::capture(1, &grid, &[]);
        let json = serde_json::to_string(&frame).expect("serializable frame");
        let parsed: Frame = serde_json::from_str(&json).expect("deserializable frame");
        assert_eq!(parsed.cleaned, vec![(1, 0)]);
        assert_eq!(parsed.width, 2);
    }
}
