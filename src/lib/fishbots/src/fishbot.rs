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

//! Fishbots and their movement strategies.
//!
//! Both strategies share one tick: pick a heading, project one step ahead, deflect off the walls
//! until the step lands inside the grid, then clean the tile underneath. They differ only in how
//! the heading is picked before the step.

use std::ops::Range;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{Degrees, FishbotError, Grid, Position, Result};

/// Movement strategy of a fishbot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Keep travelling in a straight line until a wall forces a new heading.
    Standard,

    /// Draw a fresh random heading at the start of every tick.
    RandomWalk,
}

impl Strategy {
    /// Both strategies, in the order experiments report them.
    pub const ALL: [Strategy; 2] = [Strategy::Standard, Strategy::RandomWalk];

    /// Heading to try at the start of a tick, given the heading the fishbot ended the previous
    /// tick with.
    pub fn select_heading<R: Rng + ?Sized>(self, current: Degrees, rng: &mut R) -> Degrees {
        match self {
            Strategy::Standard => current,
            Strategy::RandomWalk => rng.gen_range(0..360),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::Standard => "StandardFishbot",
            Strategy::RandomWalk => "RandomWalkFishbot",
        };
        f.pad(name)
    }
}

/// Range to draw a corrective heading from when `candidate` lies outside a `width` x `height`
/// grid, or `None` when it lies inside.
///
/// Rules are checked in a fixed order and only the first violated edge is reported, so a
/// candidate past a corner is corrected one edge at a time.
pub fn corrective_heading_range(
    candidate: Position,
    width: i32,
    height: i32,
) -> Option<Range<Degrees>> {
    let (x, y) = (candidate.x(), candidate.y());
    if x < 0.0 {
        Some(0..180)
    } else if x >= f64::from(width) {
        Some(180..360)
    } else if y < 0.0 {
        Some(90..270)
    } else if y >= f64::from(height) {
        Some(270..360)
    } else {
        None
    }
}

/// Corrective headings a fishbot tries in one tick before giving up on finding a move inside the
/// grid.
pub const MAX_WALL_DEFLECTIONS: usize = 100_000;

/// A fishbot cleaning an ocean grid.
///
/// At all times a fishbot has a position and an integer heading in degrees. Its speed is fixed
/// at creation. The grid it cleans is owned by the caller and handed to [`Fishbot::tick`].
#[derive(Debug, Clone, PartialEq)]
pub struct Fishbot {
    position: Position,
    heading: Degrees,
    speed: f64,
    strategy: Strategy,
}

impl Fishbot {
    /// Place a fishbot at a random tile of `grid` with a random heading.
    pub fn new<R: Rng + ?Sized>(
        grid: &Grid,
        speed: f64,
        strategy: Strategy,
        rng: &mut R,
    ) -> Result<Self> {
        if !speed.is_finite() || speed <= 0.0 || speed >= grid.diagonal() {
            return Err(FishbotError::InvalidSpeed(speed));
        }
        let heading = rng.gen_range(0..360);
        let position = grid.random_position(rng);
        Ok(Self {
            position,
            heading,
            speed,
            strategy,
        })
    }

    /// Current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current heading in degrees, `0..360`.
    pub fn heading(&self) -> Degrees {
        self.heading
    }

    /// Distance travelled per tick.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Movement strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Move the fishbot to `position` without cleaning anything.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Point the fishbot at `heading` degrees.
    pub fn set_heading(&mut self, heading: Degrees) -> Result<()> {
        if !(0..360).contains(&heading) {
            return Err(FishbotError::InvalidHeading(heading));
        }
        self.heading = heading;
        Ok(())
    }

    /// Advance one tick: choose a heading, move one step inside `grid` and clean the tile the
    /// fishbot lands on.
    ///
    /// Fails without moving or cleaning anything if the position is not a real coordinate, or
    /// if [`MAX_WALL_DEFLECTIONS`] corrective headings all leave the grid.
    pub fn tick<R: Rng + ?Sized>(&mut self, grid: &mut Grid, rng: &mut R) -> Result<()> {
        let mut heading = self.strategy.select_heading(self.heading, rng);
        let mut candidate = self.position.new_position(heading, self.speed);
        let mut deflections = 0;
        while !grid.contains(candidate) {
            let range = match corrective_heading_range(candidate, grid.width(), grid.height()) {
                Some(range) => range,
                // Only NaN coordinates are neither inside nor past an edge.
                None => {
                    return Err(FishbotError::InvalidPosition {
                        x: self.position.x(),
                        y: self.position.y(),
                    })
                }
            };
            if deflections == MAX_WALL_DEFLECTIONS {
                return Err(FishbotError::StuckAgainstWall {
                    x: self.position.x(),
                    y: self.position.y(),
                    attempts: deflections,
                });
            }
            deflections += 1;
            heading = rng.gen_range(range);
            trace!(%candidate, heading, "deflected off wall");
            candidate = self.position.new_position(heading, self.speed);
        }
        self.position = candidate;
        self.heading = heading;
        grid.mark_cleaned(candidate);
        Ok(())
    }
}
