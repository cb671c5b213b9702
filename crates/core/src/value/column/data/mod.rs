// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod factory;
mod push;
mod text;

use serde::{Deserialize, Serialize};
use tabulon_type::{Type, Value};

use crate::value::column::container::{
	BoolContainer, CategoricalContainer, NumberContainer, UndefinedContainer, Utf8Container,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Bool(BoolContainer),
	Float4(NumberContainer<f32>),
	Float8(NumberContainer<f64>),
	Int1(NumberContainer<i8>),
	Int2(NumberContainer<i16>),
	Int4(NumberContainer<i32>),
	Int8(NumberContainer<i64>),
	Int16(NumberContainer<i128>),
	Uint1(NumberContainer<u8>),
	Uint2(NumberContainer<u16>),
	Uint4(NumberContainer<u32>),
	Uint8(NumberContainer<u64>),
	Uint16(NumberContainer<u128>),
	Utf8(Utf8Container),
	Categorical(CategoricalContainer),
	// special case: all undefined
	Undefined(UndefinedContainer),
}

/// Runs the same expression against whichever container `$data` holds.
macro_rules! with_container {
	($data:expr, |$c:ident| $body:expr) => {
		match $data {
			ColumnData::Bool($c) => $body,
			ColumnData::Float4($c) => $body,
			ColumnData::Float8($c) => $body,
			ColumnData::Int1($c) => $body,
			ColumnData::Int2($c) => $body,
			ColumnData::Int4($c) => $body,
			ColumnData::Int8($c) => $body,
			ColumnData::Int16($c) => $body,
			ColumnData::Uint1($c) => $body,
			ColumnData::Uint2($c) => $body,
			ColumnData::Uint4($c) => $body,
			ColumnData::Uint8($c) => $body,
			ColumnData::Uint16($c) => $body,
			ColumnData::Utf8($c) => $body,
			ColumnData::Categorical($c) => $body,
			ColumnData::Undefined($c) => $body,
		}
	};
}

impl ColumnData {
	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Bool(_) => Type::Boolean,
			ColumnData::Float4(_) => Type::Float4,
			ColumnData::Float8(_) => Type::Float8,
			ColumnData::Int1(_) => Type::Int1,
			ColumnData::Int2(_) => Type::Int2,
			ColumnData::Int4(_) => Type::Int4,
			ColumnData::Int8(_) => Type::Int8,
			ColumnData::Int16(_) => Type::Int16,
			ColumnData::Uint1(_) => Type::Uint1,
			ColumnData::Uint2(_) => Type::Uint2,
			ColumnData::Uint4(_) => Type::Uint4,
			ColumnData::Uint8(_) => Type::Uint8,
			ColumnData::Uint16(_) => Type::Uint16,
			ColumnData::Utf8(_) => Type::Utf8,
			ColumnData::Categorical(_) => Type::Categorical,
			ColumnData::Undefined(_) => Type::Undefined,
		}
	}

	pub fn len(&self) -> usize {
		with_container!(self, |c| c.len())
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		with_container!(self, |c| c.is_defined(idx))
	}

	pub fn push_undefined(&mut self) {
		with_container!(self, |c| c.push_undefined())
	}

	pub fn get_value(&self, idx: usize) -> Value {
		match self {
			ColumnData::Bool(container) => container.get_value(idx),
			ColumnData::Float4(container) => container.get_value(idx),
			ColumnData::Float8(container) => container.get_value(idx),
			ColumnData::Int1(container) => container.get_value(idx),
			ColumnData::Int2(container) => container.get_value(idx),
			ColumnData::Int4(container) => container.get_value(idx),
			ColumnData::Int8(container) => container.get_value(idx),
			ColumnData::Int16(container) => container.get_value(idx),
			ColumnData::Uint1(container) => container.get_value(idx),
			ColumnData::Uint2(container) => container.get_value(idx),
			ColumnData::Uint4(container) => container.get_value(idx),
			ColumnData::Uint8(container) => container.get_value(idx),
			ColumnData::Uint16(container) => container.get_value(idx),
			ColumnData::Utf8(container) => container.get_value(idx),
			ColumnData::Categorical(container) => container.get_value(idx),
			ColumnData::Undefined(_) => Value::Undefined,
		}
	}

	/// The display form of the row, or `None` when the row is missing.
	pub fn as_string(&self, idx: usize) -> Option<String> {
		match self {
			ColumnData::Utf8(container) => container.get(idx).cloned(),
			ColumnData::Categorical(container) => container.get(idx).map(str::to_string),
			ColumnData::Undefined(_) => None,
			other => match other.get_value(idx) {
				Value::Undefined => None,
				value => Some(value.to_string()),
			},
		}
	}

	pub fn is_number(&self) -> bool {
		self.get_type().is_number()
	}

	pub fn is_utf8(&self) -> bool {
		self.get_type().is_utf8()
	}

	pub fn is_categorical(&self) -> bool {
		self.get_type().is_categorical()
	}
}
