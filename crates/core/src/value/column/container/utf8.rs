// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use tabulon_type::{BitVec, CowVec, Value};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Utf8Container {
	values: CowVec<String>,
	bitvec: BitVec,
}

impl Utf8Container {
	pub fn new(values: Vec<String>, bitvec: BitVec) -> Self {
		debug_assert_eq!(values.len(), bitvec.len());
		Self {
			values: CowVec::new(values),
			bitvec,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			values: CowVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_vec(values: Vec<String>) -> Self {
		let len = values.len();
		Self {
			values: CowVec::new(values),
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

	pub fn push(&mut self, value: String) {
		self.values.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.values.push(String::new());
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<&String> {
		if index < self.len() && self.bitvec.get(index) {
			self.values.get(index)
		} else {
			None
		}
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		self.bitvec.get(idx)
	}

	pub fn is_fully_defined(&self) -> bool {
		self.bitvec.all_ones()
	}

	pub fn get_value(&self, index: usize) -> Value {
		self.get(index).map(|v| Value::Utf8(v.clone())).unwrap_or(Value::Undefined)
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn values(&self) -> &CowVec<String> {
		&self.values
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<&String>> + '_ {
		self.values.iter().zip(self.bitvec.iter()).map(|(v, defined)| {
			if defined {
				Some(v)
			} else {
				None
			}
		})
	}
}

impl Default for Utf8Container {
	fn default() -> Self {
		Self::with_capacity(0)
	}
}

impl FromIterator<Option<String>> for Utf8Container {
	fn from_iter<I: IntoIterator<Item = Option<String>>>(iter: I) -> Self {
		let iter = iter.into_iter();
		let mut result = Self::with_capacity(iter.size_hint().0);
		for value in iter {
			match value {
				Some(v) => result.push(v),
				None => result.push_undefined(),
			}
		}
		result
	}
}
