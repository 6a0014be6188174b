/*
rng.rs

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

//! Seeded random number generation.
//!
//! All the randomness used to build the daily puzzles comes from a [`Mulberry32`] generator
//! seeded from a string, such as the day key.
//! The string is first reduced to a 32-bit seed with [`hash_string_to_seed`].
//!
//! The arithmetic is done on 32-bit unsigned integers with wrapping operations, so that the
//! same string always produces the same stream of numbers, on every platform.

use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};

/// FNV-1a offset basis.
const FNV_OFFSET: u32 = 2_166_136_261;

/// FNV-1a prime.
const FNV_PRIME: u32 = 16_777_619;

/// Increment added to the [`Mulberry32`] state for each draw.
const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;

/// 2^32, to scale a 32-bit draw to the `[0, 1)` range.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Hash a string into a 32-bit seed.
///
/// The string is processed as UTF-16 code units, one at a time.
pub fn hash_string_to_seed(s: &str) -> u32 {
    s.encode_utf16().fold(FNV_OFFSET, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// Mulberry32 pseudo-random number generator.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    /// Internal state, advanced by [`MULBERRY_INCREMENT`] for every draw.
    state: u32,
}

impl Mulberry32 {
    /// Create a [`Mulberry32`] object from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Create a [`Mulberry32`] object seeded from the hash of the given string.
    pub fn from_key(key: &str) -> Self {
        Self::from_seed(hash_string_to_seed(key).to_le_bytes())
    }

    /// Advance the state and return the next 32-bit value.
    pub fn advance(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let mut t: u32 = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Return the next float in the `[0, 1)` range.
    pub fn next_f64(&mut self) -> f64 {
        unit_f64(self)
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.advance()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst);
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// Scale the next 32-bit draw of the generator to the `[0, 1)` range.
pub fn unit_f64<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    f64::from(rng.next_u32()) / TWO_POW_32
}

/// Return a random integer between `min` and `max`, both included.
pub fn random_int<R: RngCore + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    let span: f64 = f64::from(max - min + 1);
    (unit_f64(rng) * span).floor() as i32 + min
}

/// Return a random item from the slice, or None if the slice is empty.
pub fn random_choice<'a, R: RngCore + ?Sized, T>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let i: i32 = random_int(rng, 0, items.len() as i32 - 1);
    items.get(i as usize)
}
