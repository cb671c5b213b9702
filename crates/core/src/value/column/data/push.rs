// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabulon_type::{Value, error::diagnostic::column::value_type_mismatch, return_error};

use crate::value::column::ColumnData;

impl ColumnData {
	/// Appends one cell. An all-undefined column adopts the type of the first
	/// defined value pushed into it.
	pub fn push_value(&mut self, value: Value) -> tabulon_type::Result<()> {
		if value.is_undefined() {
			self.push_undefined();
			return Ok(());
		}

		if let ColumnData::Undefined(container) = self {
			let mut promoted = ColumnData::with_capacity(value.get_type(), container.len() + 1);
			for _ in 0..container.len() {
				promoted.push_undefined();
			}
			*self = promoted;
		}

		match (self, value) {
			(ColumnData::Bool(c), Value::Boolean(v)) => c.push(v),
			(ColumnData::Float4(c), Value::Float4(v)) => c.push(v),
			(ColumnData::Float8(c), Value::Float8(v)) => c.push(v),
			(ColumnData::Int1(c), Value::Int1(v)) => c.push(v),
			(ColumnData::Int2(c), Value::Int2(v)) => c.push(v),
			(ColumnData::Int4(c), Value::Int4(v)) => c.push(v),
			(ColumnData::Int8(c), Value::Int8(v)) => c.push(v),
			(ColumnData::Int16(c), Value::Int16(v)) => c.push(v),
			(ColumnData::Uint1(c), Value::Uint1(v)) => c.push(v),
			(ColumnData::Uint2(c), Value::Uint2(v)) => c.push(v),
			(ColumnData::Uint4(c), Value::Uint4(v)) => c.push(v),
			(ColumnData::Uint8(c), Value::Uint8(v)) => c.push(v),
			(ColumnData::Uint16(c), Value::Uint16(v)) => c.push(v),
			(ColumnData::Utf8(c), Value::Utf8(v)) => c.push(v),
			(ColumnData::Categorical(c), Value::Categorical(v)) => c.push(v),
			(ColumnData::Categorical(c), Value::Utf8(v)) => c.push(v),
			(data, value) => return_error!(value_type_mismatch(data.get_type(), value.get_type())),
		}

		Ok(())
	}
}
