/*
fold.rs

Copyright 2025 Hervé Quatremain

This file is part of Foldwise.

Foldwise is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Foldwise is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Foldwise. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Grid geometry: points, creases, and folds.
//!
//! The grid is a square of [`Board::size`] rows and columns, numbered from 1.
//! A [`Crease`] at position `k` lies between row (or column) `k` and `k + 1`.
//! Folding reflects the points on the folding side of the crease onto the other side.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A dot on the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Crease orientation.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal line, between two rows.
    #[serde(rename = "h")]
    Horizontal,

    /// Vertical line, between two columns.
    #[serde(rename = "v")]
    Vertical,
}

/// Half of the grid that moves.
///
/// `Down` and `Up` go with [`Axis::Horizontal`] creases, `Right` and `Left` with
/// [`Axis::Vertical`] creases.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The rows at or above the crease fold down.
    Down,
    /// The rows below the crease fold up.
    Up,
    /// The columns at or left of the crease fold to the right.
    Right,
    /// The columns right of the crease fold to the left.
    Left,
}

/// Fold definition.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Crease {
    #[serde(rename = "type")]
    pub axis: Axis,
    pub k: i32,
    pub dir: Direction,
}

impl Crease {
    /// Horizontal crease between rows `k` and `k + 1`.
    pub fn horizontal(k: i32, dir: Direction) -> Self {
        Self {
            axis: Axis::Horizontal,
            k,
            dir,
        }
    }

    /// Vertical crease between columns `k` and `k + 1`.
    pub fn vertical(k: i32, dir: Direction) -> Self {
        Self {
            axis: Axis::Vertical,
            k,
            dir,
        }
    }
}

/// The square grid the dots live on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Board {
    /// Number of rows and columns.
    pub size: i32,
}

impl Board {
    /// Create a [`Board`] object.
    pub fn new(size: i32) -> Self {
        Self { size }
    }

    /// Whether the point lies on the grid.
    pub fn contains(&self, p: &Point) -> bool {
        (1..=self.size).contains(&p.x) && (1..=self.size).contains(&p.y)
    }

    /// Reflect the point across the crease if it is on the folding side.
    pub fn reflect_point(&self, p: &Point, crease: &Crease) -> Point {
        let k: i32 = crease.k;
        match (crease.axis, crease.dir) {
            (Axis::Horizontal, Direction::Down) if p.y <= k => Point::new(p.x, 2 * k + 1 - p.y),
            (Axis::Horizontal, Direction::Up) if p.y > k => Point::new(p.x, 2 * k + 1 - p.y),
            (Axis::Vertical, Direction::Right) if p.x <= k => Point::new(2 * k + 1 - p.x, p.y),
            (Axis::Vertical, Direction::Left) if p.x > k => Point::new(2 * k + 1 - p.x, p.y),
            _ => *p,
        }
    }

    /// Fold the points and return the new configuration, in the same order.
    ///
    /// Return None when the fold does not move any point, or when a point would leave the grid.
    pub fn apply_fold(&self, points: &[Point], crease: &Crease) -> Option<Vec<Point>> {
        let mut moved: bool = false;
        let mut next: Vec<Point> = Vec::with_capacity(points.len());

        for p in points {
            let rp: Point = self.reflect_point(p, crease);
            if rp != *p {
                moved = true;
            }
            if !self.contains(&rp) {
                return None;
            }
            next.push(rp);
        }
        if moved { Some(next) } else { None }
    }

    /// Return all the creases of the grid.
    ///
    /// The creases are sorted by position, and for each position: down, up, right, left.
    /// The order decides which of several shortest solutions the search returns.
    pub fn all_folds(&self) -> Vec<Crease> {
        let mut folds: Vec<Crease> = Vec::with_capacity(4 * (self.size as usize - 1));
        for k in 1..self.size {
            folds.push(Crease::horizontal(k, Direction::Down));
            folds.push(Crease::horizontal(k, Direction::Up));
            folds.push(Crease::vertical(k, Direction::Right));
            folds.push(Crease::vertical(k, Direction::Left));
        }
        folds
    }
}

/// Return the order-independent form of a point configuration.
///
/// Two configurations holding the same points in a different order share the same key.
pub fn canonical_key(points: &[Point]) -> Vec<Point> {
    let mut key: Vec<Point> = points.to_vec();
    key.sort_unstable();
    key
}

/// Whether the two configurations hold the same points, regardless of order.
pub fn same_points(a: &[Point], b: &[Point]) -> bool {
    canonical_key(a) == canonical_key(b)
}

/// Number of distinct cells occupied by the points.
pub fn distinct_count(points: &[Point]) -> usize {
    points.iter().collect::<HashSet<&Point>>().len()
}
