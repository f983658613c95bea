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

//! The ocean grid and the tiles fishbots have cleaned.

use rand::Rng;

use crate::{FishbotError, HashSet, Position, Result};

/// A rectangular ocean grid of `width * height` unit tiles. Each tile is either dirty or cleaned,
/// and a cleaned tile never becomes dirty again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cleaned_tiles: HashSet<(i32, i32)>,
}

impl Grid {
    /// Create a grid with every tile dirty.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(FishbotError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cleaned_tiles: HashSet::default(),
        })
    }

    /// Width in tiles.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in tiles.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Length of the grid diagonal. No two positions inside the grid are this far apart.
    pub fn diagonal(&self) -> f64 {
        f64::from(self.width).hypot(f64::from(self.height))
    }

    /// Mark the tile under `position` as cleaned. `position` must lie inside the grid.
    pub fn mark_cleaned(&mut self, position: Position) {
        debug_assert!(
            self.contains(position),
            "cleaning outside the grid: {}",
            position
        );
        // `as` truncates toward zero, which is the tile index for any in-bounds coordinate.
        self.cleaned_tiles
            .insert((position.x() as i32, position.y() as i32));
    }

    /// Whether tile `(m, n)` has been cleaned.
    pub fn is_cleaned(&self, m: i32, n: i32) -> bool {
        self.cleaned_tiles.contains(&(m, n))
    }

    /// Total number of tiles.
    pub fn tile_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of cleaned tiles.
    pub fn cleaned_count(&self) -> usize {
        self.cleaned_tiles.len()
    }

    /// Fraction of tiles cleaned, in `0.0..=1.0`.
    pub fn cleaned_fraction(&self) -> f64 {
        self.cleaned_count() as f64 / self.tile_count() as f64
    }

    /// Cleaned tiles in no particular order.
    pub fn cleaned_tiles(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cleaned_tiles.iter().copied()
    }

    /// A uniformly random position with integer coordinates inside the grid.
    pub fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        Position::new(
            f64::from(rng.gen_range(0..self.width)),
            f64::from(rng.gen_range(0..self.height)),
        )
    }

    /// Whether `position` lies inside the grid. The lower bounds are inclusive and the upper
    /// bounds exclusive.
    pub fn contains(&self, position: Position) -> bool {
        (0.0..f64::from(self.width)).contains(&position.x())
            && (0.0..f64::from(self.height)).contains(&position.y())
    }
}
