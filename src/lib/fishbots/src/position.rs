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

//! Positions in the ocean grid.

use serde::{Deserialize, Serialize};

use crate::Degrees;

/// A location in the ocean grid. Coordinates are continuous; the tile under a position is found
/// by truncating each coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    /// Create a position at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The x coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Position after one tick of travel from here at `angle` degrees and `speed` units per tick.
    ///
    /// Angle 0 points along +y and angle 90 along +x. Does not check whether the result fits in
    /// any grid.
    pub fn new_position(&self, angle: Degrees, speed: f64) -> Position {
        let radians = f64::from(angle).to_radians();
        let delta_x = speed * radians.sin();
        let delta_y = speed * radians.cos();
        Position::new(self.x + delta_x, self.y + delta_y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_angle_zero_moves_along_y() {
        let next = Position::new(1.0, 1.0).new_position(0, 1.0);
        assert_abs_diff_eq!(next.x(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(next.y(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_ninety_moves_along_x() {
        let next = Position::new(1.0, 1.0).new_position(90, 2.0);
        assert_abs_diff_eq!(next.x(), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(next.y(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_one_eighty_moves_back_along_y() {
        let next = Position::new(5.0, 5.0).new_position(180, 1.5);
        assert_abs_diff_eq!(next.x(), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(next.y(), 3.5, epsilon = 1e-12);
    }

    #[test]
    fn test_new_position_leaves_original_untouched() {
        let start = Position::new(2.0, 3.0);
        let _ = start.new_position(45, 1.0);
        assert_eq!(start, Position::new(2.0, 3.0));
    }

    proptest! {
        #[test]
        fn test_new_position_is_reproducible(
            x in -100.0..100.0f64,
            y in -100.0..100.0f64,
            angle in 0..360i32,
            speed in 0.01..10.0f64,
        ) {
            let start = Position::new(x, y);
            let first = start.new_position(angle, speed);
            let second = start.new_position(angle, speed);
            prop_assert_eq!(first.x().to_bits(), second.x().to_bits());
            prop_assert_eq!(first.y().to_bits(), second.y().to_bits());
        }

        #[test]
        fn test_new_position_travels_exactly_speed(
            angle in 0..360i32,
            speed in 0.01..10.0f64,
        ) {
            let start = Position::new(0.0, 0.0);
            let next = start.new_position(angle, speed);
            let distance = (next.x() * next.x() + next.y() * next.y()).sqrt();
            prop_assert!((distance - speed).abs() < 1e-9);
        }
    }
}
