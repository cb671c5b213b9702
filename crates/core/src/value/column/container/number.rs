// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use tabulon_type::{BitVec, CowVec, Value, value::GetType};

pub trait IsNumber: Copy + Clone + Debug + Default + PartialEq + GetType + Into<Value> {}

impl IsNumber for f32 {}
impl IsNumber for f64 {}
impl IsNumber for i8 {}
impl IsNumber for i16 {}
impl IsNumber for i32 {}
impl IsNumber for i64 {}
impl IsNumber for i128 {}
impl IsNumber for u8 {}
impl IsNumber for u16 {}
impl IsNumber for u32 {}
impl IsNumber for u64 {}
impl IsNumber for u128 {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumberContainer<T>
where
	T: IsNumber,
{
	values: CowVec<T>,
	bitvec: BitVec,
}

impl<T> NumberContainer<T>
where
	T: IsNumber,
{
	pub fn new(values: Vec<T>, bitvec: BitVec) -> Self {
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

	pub fn from_vec(values: Vec<T>) -> Self {
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

	pub fn push(&mut self, value: T) {
		self.values.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.values.push(T::default());
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<&T> {
		if index < self.len() && self.bitvec.get(index) {
			self.values.get(index)
		} else {
			None
		}
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		self.bitvec.get(idx)
	}

	pub fn get_value(&self, index: usize) -> Value {
		self.get(index).map(|&v| v.into()).unwrap_or(Value::Undefined)
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn values(&self) -> &CowVec<T> {
		&self.values
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<T>> + '_ {
		self.values.iter().zip(self.bitvec.iter()).map(|(&v, defined)| {
			if defined {
				Some(v)
			} else {
				None
			}
		})
	}
}

impl<T> Default for NumberContainer<T>
where
	T: IsNumber,
{
	fn default() -> Self {
		Self::with_capacity(0)
	}
}
