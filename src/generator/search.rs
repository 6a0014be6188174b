/*
search.rs

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

//! Shortest fold sequence between two configurations.
//!
//! The search is a breadth-first walk over the configurations reachable by folding.
//! Configurations are identified by their [`fold::canonical_key`], so the order of the dots does
//! not matter.
//! Because the configurations are visited by increasing number of folds, the first path that
//! reaches the target is a shortest one.

use log::trace;
use std::collections::{HashSet, VecDeque};

use super::fold;
use super::fold::{Board, Crease, Point};

/// Configuration waiting in the BFS queue, with the folds that lead to it.
struct Node {
    points: Vec<Point>,
    path: Vec<Crease>,
}

/// Return a shortest list of folds that transforms `start` into `target`.
///
/// Paths longer than `max_depth` are not explored.
/// Return an empty list when the two configurations already match, and None when the target
/// cannot be reached in `max_depth` folds or less.
pub fn find_shortest_path(
    board: &Board,
    start: &[Point],
    target: &[Point],
    max_depth: usize,
) -> Option<Vec<Crease>> {
    let target_key: Vec<Point> = fold::canonical_key(target);
    let start_key: Vec<Point> = fold::canonical_key(start);
    if start_key == target_key {
        return Some(Vec::new());
    }

    let folds: Vec<Crease> = board.all_folds();
    let mut visited: HashSet<Vec<Point>> = HashSet::from([start_key]);
    let mut queue: VecDeque<Node> = VecDeque::from([Node {
        points: start.to_vec(),
        path: Vec::new(),
    }]);

    while let Some(node) = queue.pop_front() {
        if node.path.len() >= max_depth {
            continue;
        }

        for crease in &folds {
            let Some(next) = board.apply_fold(&node.points, crease) else {
                continue;
            };
            let key: Vec<Point> = fold::canonical_key(&next);
            if visited.contains(&key) {
                continue;
            }

            let mut path: Vec<Crease> = node.path.clone();
            path.push(*crease);
            if key == target_key {
                trace!(
                    "Target reached in {} folds ({} configurations visited)",
                    path.len(),
                    visited.len()
                );
                return Some(path);
            }
            visited.insert(key);
            queue.push_back(Node { points: next, path });
        }
    }
    None
}
