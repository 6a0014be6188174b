/*
puzzles.rs

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

//! Generate a random puzzle for a difficulty level.
//!
//! A puzzle is made of a start and a target configuration, and of the shortest list of folds that
//! transforms the start into the target.
//! The length of that list must be exactly the [`DifficultyMeta::par`] of the difficulty level.
//!
//! The [`PuzzleGenerator`] object tries two strategies:
//!
//! * First, it draws a target configuration and folds a copy of it `par` times to build the
//!   start configuration. A solution of `par` folds exists by construction, but the search must
//!   confirm that there is no shorter one.
//! * When these attempts are exhausted, it draws the two configurations independently.
//!   Only the hard level uses that second strategy.

use log::debug;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::difficulty::{Difficulty, DifficultyMeta};
use super::fold;
use super::fold::{Board, Crease, Point};
use super::rng::{Mulberry32, random_choice, random_int};
use super::search;

/// Generated puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Puzzle ID in the format `<difficulty>-<day key>`.
    pub id: String,

    pub title: String,

    pub difficulty: Difficulty,

    /// Initial dot positions.
    pub start: Vec<Point>,

    /// Dot positions to reach.
    /// The dot at index `i` in [`Puzzle::start`] is the dot at index `i` in this list.
    pub target: Vec<Point>,

    /// Shortest list of folds from [`Puzzle::start`] to [`Puzzle::target`].
    pub solution: Vec<Crease>,
}

/// Return `count` random points. Several points can share the same cell.
pub fn random_points<R: RngCore>(rng: &mut R, board: &Board, count: usize) -> Vec<Point> {
    (0..count)
        .map(|_| {
            let x: i32 = random_int(rng, 1, board.size);
            let y: i32 = random_int(rng, 1, board.size);
            Point::new(x, y)
        })
        .collect()
}

/// Return `count` random points, all in different cells.
///
/// `count` must not exceed the number of cells of the board.
pub fn random_points_unique<R: RngCore>(
    rng: &mut R,
    board: &Board,
    count: usize,
) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::with_capacity(count);
    while points.len() < count {
        let x: i32 = random_int(rng, 1, board.size);
        let y: i32 = random_int(rng, 1, board.size);
        let p: Point = Point::new(x, y);
        if !points.contains(&p) {
            points.push(p);
        }
    }
    points
}

/// Return random points following the stacking rule of the difficulty level.
pub fn random_points_for_meta<R: RngCore>(
    rng: &mut R,
    board: &Board,
    meta: &DifficultyMeta,
) -> Vec<Point> {
    if meta.allow_stack {
        random_points(rng, board, meta.dots)
    } else {
        random_points_unique(rng, board, meta.dots)
    }
}

/// Whether the points follow the stacking rule of the difficulty level.
///
/// Without stacking, all the points must be in different cells.
/// With stacking, the points must still occupy at least two cells when there are several dots.
pub fn satisfies_stacking(points: &[Point], meta: &DifficultyMeta) -> bool {
    let distinct: usize = fold::distinct_count(points);
    if meta.allow_stack {
        meta.dots <= 1 || distinct >= 2
    } else {
        distinct == meta.dots
    }
}

/// Select the theme of the day.
pub fn theme_for_date<'a>(day_key: &str, themes: &[&'a str]) -> Option<&'a str> {
    let mut rng: Mulberry32 = Mulberry32::from_key(&format!("theme-{day_key}"));
    random_choice(&mut rng, themes).copied()
}

/// Build the puzzle title from the theme and the difficulty label.
pub fn format_daily_title(theme: &str, label: &str) -> String {
    format!("{theme} {label}")
}

/// Whether the puzzle has the solution length, the number of dots, and the distinct dots
/// required by the difficulty level.
pub fn puzzle_matches_meta(puzzle: &Puzzle, meta: &DifficultyMeta) -> bool {
    if puzzle.solution.len() != meta.par {
        return false;
    }
    if puzzle.start.len() != meta.dots || puzzle.target.len() != meta.dots {
        return false;
    }
    if !meta.allow_stack
        && (fold::distinct_count(&puzzle.start) != meta.dots
            || fold::distinct_count(&puzzle.target) != meta.dots)
    {
        return false;
    }
    true
}

/// [`PuzzleGenerator`] object.
pub struct PuzzleGenerator<'a> {
    board: &'a Board,
    meta: &'a DifficultyMeta,
    themes: &'a [&'a str],

    /// Every crease of the board, in the order used for random draws.
    folds: Vec<Crease>,

    /// Number of attempts it took to generate the last puzzle.
    pub attempts: usize,

    /// Duration in seconds it took to generate the last puzzle.
    pub duration: f32,
}

impl<'a> PuzzleGenerator<'a> {
    /// Create the object.
    pub fn new(board: &'a Board, meta: &'a DifficultyMeta, themes: &'a [&'a str]) -> Self {
        Self {
            board,
            meta,
            themes,
            folds: board.all_folds(),
            attempts: 0,
            duration: 0.0,
        }
    }

    /// Generate a puzzle for the given day, or return None if all the attempts are exhausted.
    pub fn generate<R: RngCore>(&mut self, rng: &mut R, day_key: &str) -> Option<Puzzle> {
        let start_time: Instant = Instant::now();
        self.attempts = 0;

        let found: Option<(Vec<Point>, Vec<Point>, Vec<Crease>)> = self
            .generate_by_folding(rng)
            .or_else(|| self.generate_independently(rng));

        self.duration = start_time.elapsed().as_secs_f32();
        debug!(
            "{}: attempts = {}  duration = {}s  found = {}",
            self.meta.difficulty,
            self.attempts,
            self.duration,
            found.is_some()
        );

        let (start, target, solution) = found?;
        let title: String = match theme_for_date(day_key, self.themes) {
            Some(theme) => format_daily_title(theme, self.meta.label),
            None => self.meta.label.to_string(),
        };
        Some(Puzzle {
            id: format!("{}-{day_key}", self.meta.difficulty),
            title,
            difficulty: self.meta.difficulty,
            start,
            target,
            solution,
        })
    }

    /// Build the start configuration by folding the target configuration.
    fn generate_by_folding<R: RngCore>(
        &mut self,
        rng: &mut R,
    ) -> Option<(Vec<Point>, Vec<Point>, Vec<Crease>)> {
        for _ in 0..self.meta.max_attempts {
            self.attempts += 1;

            let target: Vec<Point> = random_points_for_meta(rng, self.board, self.meta);
            if !satisfies_stacking(&target, self.meta) {
                continue;
            }

            // Fold draws that have no effect are not counted
            let mut start: Vec<Point> = target.clone();
            let mut folded: usize = 0;
            while folded < self.meta.par {
                let i: i32 = random_int(rng, 0, self.folds.len() as i32 - 1);
                if let Some(next) = self.board.apply_fold(&start, &self.folds[i as usize]) {
                    start = next;
                    folded += 1;
                }
            }

            if fold::same_points(&start, &target) || !satisfies_stacking(&start, self.meta) {
                continue;
            }

            if let Some(solution) = self.exact_solution(&start, &target) {
                return Some((start, target, solution));
            }
        }
        debug!(
            "{}: {} folding attempts exhausted",
            self.meta.difficulty, self.meta.max_attempts
        );
        None
    }

    /// Draw the start and target configurations independently.
    fn generate_independently<R: RngCore>(
        &mut self,
        rng: &mut R,
    ) -> Option<(Vec<Point>, Vec<Point>, Vec<Crease>)> {
        for _ in 0..self.meta.alt_attempts {
            self.attempts += 1;

            let target: Vec<Point> = random_points_for_meta(rng, self.board, self.meta);
            let start: Vec<Point> = random_points_for_meta(rng, self.board, self.meta);
            if fold::same_points(&start, &target) {
                continue;
            }
            if !satisfies_stacking(&target, self.meta) || !satisfies_stacking(&start, self.meta) {
                continue;
            }

            if let Some(solution) = self.exact_solution(&start, &target) {
                return Some((start, target, solution));
            }
        }
        if self.meta.alt_attempts > 0 {
            debug!(
                "{}: {} independent attempts exhausted",
                self.meta.difficulty, self.meta.alt_attempts
            );
        }
        None
    }

    /// Return the shortest solution if its length is exactly the par.
    fn exact_solution(&self, start: &[Point], target: &[Point]) -> Option<Vec<Crease>> {
        search::find_shortest_path(self.board, start, target, self.meta.par)
            .filter(|solution| solution.len() == self.meta.par)
    }
}

/// Generate a puzzle for the difficulty level and the given day.
pub fn generate_puzzle<R: RngCore>(
    rng: &mut R,
    board: &Board,
    meta: &DifficultyMeta,
    day_key: &str,
    themes: &[&str],
) -> Option<Puzzle> {
    PuzzleGenerator::new(board, meta, themes).generate(rng, day_key)
}
