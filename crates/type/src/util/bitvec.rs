// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug, Formatter};

use serde::{Deserialize, Serialize};

/// Packed bitset, one bit per row. Used as the presence mask of every column
/// container: a set bit means the row holds a value.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitVec {
	bits: Vec<u8>,
	len: usize,
}

impl BitVec {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			bits: Vec::with_capacity(capacity.div_ceil(8)),
			len: 0,
		}
	}

	pub fn repeat(len: usize, value: bool) -> Self {
		let fill = if value {
			0xFF
		} else {
			0x00
		};
		let mut result = Self {
			bits: vec![fill; len.div_ceil(8)],
			len,
		};
		result.clear_tail();
		result
	}

	pub fn from_slice(slice: &[bool]) -> Self {
		let mut result = Self::with_capacity(slice.len());
		for &bit in slice {
			result.push(bit);
		}
		result
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn capacity(&self) -> usize {
		self.bits.capacity() * 8
	}

	pub fn push(&mut self, bit: bool) {
		let byte = self.len / 8;
		if byte == self.bits.len() {
			self.bits.push(0);
		}
		if bit {
			self.bits[byte] |= 1 << (self.len % 8);
		}
		self.len += 1;
	}

	/// Returns the bit at `idx`, or `false` when out of range.
	pub fn get(&self, idx: usize) -> bool {
		if idx >= self.len {
			return false;
		}
		self.bits[idx / 8] & (1 << (idx % 8)) != 0
	}

	pub fn set(&mut self, idx: usize, bit: bool) {
		assert!(idx < self.len, "bit index {} out of range for length {}", idx, self.len);
		let mask = 1 << (idx % 8);
		if bit {
			self.bits[idx / 8] |= mask;
		} else {
			self.bits[idx / 8] &= !mask;
		}
	}

	pub fn extend(&mut self, other: &BitVec) {
		for bit in other.iter() {
			self.push(bit);
		}
	}

	pub fn count_ones(&self) -> usize {
		self.bits.iter().map(|b| b.count_ones() as usize).sum()
	}

	pub fn all_ones(&self) -> bool {
		self.count_ones() == self.len
	}

	pub fn iter(&self) -> BitVecIter<'_> {
		BitVecIter {
			bitvec: self,
			pos: 0,
		}
	}

	// bits past `len` in the last byte stay zero so `count_ones` and `eq` hold
	fn clear_tail(&mut self) {
		let rem = self.len % 8;
		if rem != 0 {
			if let Some(last) = self.bits.last_mut() {
				*last &= (1u8 << rem) - 1;
			}
		}
	}
}

impl Debug for BitVec {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("BitVec[")?;
		for bit in self.iter() {
			f.write_str(if bit {
				"1"
			} else {
				"0"
			})?;
		}
		f.write_str("]")
	}
}

pub struct BitVecIter<'a> {
	bitvec: &'a BitVec,
	pos: usize,
}

impl Iterator for BitVecIter<'_> {
	type Item = bool;

	fn next(&mut self) -> Option<Self::Item> {
		if self.pos >= self.bitvec.len {
			return None;
		}
		let bit = self.bitvec.get(self.pos);
		self.pos += 1;
		Some(bit)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.bitvec.len - self.pos;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for BitVecIter<'_> {}

impl From<Vec<bool>> for BitVec {
	fn from(value: Vec<bool>) -> Self {
		Self::from_slice(&value)
	}
}

impl From<&[bool]> for BitVec {
	fn from(value: &[bool]) -> Self {
		Self::from_slice(value)
	}
}

impl<const N: usize> From<[bool; N]> for BitVec {
	fn from(value: [bool; N]) -> Self {
		Self::from_slice(&value)
	}
}

impl FromIterator<bool> for BitVec {
	fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
		let iter = iter.into_iter();
		let mut result = Self::with_capacity(iter.size_hint().0);
		for bit in iter {
			result.push(bit);
		}
		result
	}
}
