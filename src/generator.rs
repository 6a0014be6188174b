/*
generator.rs

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

//! Generate random folding puzzles.
//!
//! The player moves dots on a square grid by folding the grid along the lines between rows or
//! columns.
//! A puzzle gives a start and a target position for the dots, and the number of folds (the par)
//! of the shortest solution.
//!
//! * [`rng::Mulberry32`] provides the seeded random numbers. The same seed always produces the
//!   same puzzles.
//! * [`fold::Board`] folds a configuration of dots along a [`fold::Crease`].
//! * [`search::find_shortest_path`] computes the shortest list of folds between two
//!   configurations.
//! * [`puzzles::PuzzleGenerator`] draws configurations until the shortest solution has exactly
//!   the par of the [`difficulty::DifficultyMeta`] difficulty level.
//! * [`verify::verify_puzzle`] checks a puzzle after the fact.

pub mod difficulty;
pub mod fold;
pub mod puzzles;
pub mod rng;
pub mod search;
pub mod verify;
