/*
 * SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */
use bit_vec::BitVec;

const FREE_CHAR: char = '0';
const RESERVED_CHAR: char = '1';
const MAP_FREE_CHAR: char = '.';
const MAP_RESERVED_CHAR: char = 'X';

/// A fixed-length bit per address of a network, indexed by the address
/// offset from the network base. A set bit means reserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationBitmap {
    bits: BitVec,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BitmapDecodeError {
    #[error("unexpected character {found:?} at position {position}")]
    InvalidCharacter { position: usize, found: char },
}

impl ReservationBitmap {
    /// An all-free bitmap of `len` addresses.
    pub fn new(len: usize) -> Self {
        Self {
            bits: BitVec::from_elem(len, false),
        }
    }

    /// Read the `'0'`/`'1'` form produced by [`Self::encode`].
    pub fn decode(encoded: &str) -> Result<Self, BitmapDecodeError> {
        let bits = encoded
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                FREE_CHAR => Ok(false),
                RESERVED_CHAR => Ok(true),
                found => Err(BitmapDecodeError::InvalidCharacter { position, found }),
            })
            .collect::<Result<BitVec, _>>()?;
        Ok(Self { bits })
    }

    pub fn encode(&self) -> String {
        self.render(FREE_CHAR, RESERVED_CHAR)
    }

    /// The human-readable occupancy map: `X` for reserved, `.` for free.
    pub fn render_map(&self) -> String {
        self.render(MAP_FREE_CHAR, MAP_RESERVED_CHAR)
    }

    fn render(&self, free: char, reserved: char) -> String {
        self.bits
            .iter()
            .map(|bit| if bit { reserved } else { free })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// None if `idx` is out of range.
    pub fn get(&self, idx: usize) -> Option<bool> {
        self.bits.get(idx)
    }

    /// Panics if `idx` is out of range; callers map addresses to offsets
    /// through the owning network first.
    pub fn set(&mut self, idx: usize, reserved: bool) {
        self.bits.set(idx, reserved);
    }

    /// Bitwise OR of two bitmaps of the same length.
    pub fn union(&self, other: &Self) -> Self {
        debug_assert_eq!(self.len(), other.len());
        let mut bits = self.bits.clone();
        bits.or(&other.bits);
        Self { bits }
    }

    /// Whether any index is set in both bitmaps.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.first_overlap(other).is_some()
    }

    /// Lowest index set in both bitmaps, if any.
    pub fn first_overlap(&self, other: &Self) -> Option<usize> {
        debug_assert_eq!(self.len(), other.len());
        self.bits
            .iter()
            .zip(other.bits.iter())
            .position(|(a, b)| a && b)
    }

    /// Lowest clear index, if any.
    pub fn first_clear(&self) -> Option<usize> {
        self.bits.iter().position(|bit| !bit)
    }

    pub fn is_full(&self) -> bool {
        self.bits.all()
    }

    pub fn count_reserved(&self) -> usize {
        self.bits.iter().filter(|bit| *bit).count()
    }

    pub fn count_free(&self) -> usize {
        self.len() - self.count_reserved()
    }

    /// Indices of all set bits, ascending.
    pub fn iter_reserved(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(idx, bit)| bit.then_some(idx))
    }
}
