// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use tabulon_type::{BitVec, Value};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoolContainer {
	values: BitVec,
	bitvec: BitVec,
}

impl BoolContainer {
	pub fn new(values: Vec<bool>, bitvec: BitVec) -> Self {
		debug_assert_eq!(values.len(), bitvec.len());
		Self {
			values: BitVec::from_slice(&values),
			bitvec,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			values: BitVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_vec(values: Vec<bool>) -> Self {
		let len = values.len();
		Self {
			values: BitVec::from_slice(&values),
			bitvec: BitVec::repeat(len, true),
		}
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.values.len(), self.bitvec.len());
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn push(&mut self, value: bool) {
		self.values.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.values.push(false);
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<bool> {
		if index < self.len() && self.bitvec.get(index) {
			Some(self.values.get(index))
		} else {
			None
		}
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		self.bitvec.get(idx)
	}

	pub fn get_value(&self, index: usize) -> Value {
		self.get(index).map(Value::Boolean).unwrap_or(Value::Undefined)
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn values(&self) -> &BitVec {
		&self.values
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<bool>> + '_ {
		self.values.iter().zip(self.bitvec.iter()).map(|(v, defined)| {
			if defined {
				Some(v)
			} else {
				None
			}
		})
	}
}

impl Default for BoolContainer {
	fn default() -> Self {
		Self::with_capacity(0)
	}
}
