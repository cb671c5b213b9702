// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! JSON described tables and transform cases.
//!
//! ```json
//! {
//!   "params": { "columns": ["A", "B"], "newcolumn": "C" },
//!   "input": [{ "name": "A", "type": "Utf8", "values": ["1", null] }],
//!   "expected": [{ "name": "A", "type": "Utf8", "values": ["1", null] }]
//! }
//! ```
//!
//! A `null` cell is missing. Float cells also accept `"NaN"`, `"inf"` and
//! `"-inf"`. A case either names an `expected` table or an `error` code.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_json::{Map, Value as Json};
use tabulon_core::{Column, ColumnData, Columns};
use tabulon_type::{Type, Value};
use tracing::trace;

#[derive(Debug, Clone, Deserialize)]
pub struct ColumnFixture {
	pub name: String,
	#[serde(rename = "type")]
	pub r#type: Type,
	pub values: Vec<Json>,
}

impl ColumnFixture {
	pub fn to_column(&self) -> Column {
		let mut data = ColumnData::with_capacity(self.r#type, self.values.len());
		for (row, cell) in self.values.iter().enumerate() {
			let value = to_value(self.r#type, cell)
				.unwrap_or_else(|| panic!("column `{}` row {}: {} is not a {} cell", self.name, row, cell, self.r#type));
			if let Err(err) = data.push_value(value) {
				panic!("column `{}` row {}: {}", self.name, row, err);
			}
		}
		Column::new(self.name.as_str(), data)
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaseFixture {
	#[serde(default)]
	pub params: Map<String, Json>,
	#[serde(default)]
	pub input: Option<Vec<ColumnFixture>>,
	#[serde(default)]
	pub expected: Option<Vec<ColumnFixture>>,
	#[serde(default)]
	pub error: Option<String>,
}

impl CaseFixture {
	pub fn load(path: &Path) -> Self {
		let text = fs::read_to_string(path).unwrap_or_else(|err| panic!("{}: {}", path.display(), err));
		let result: Self = serde_json::from_str(&text).unwrap_or_else(|err| panic!("{}: {}", path.display(), err));
		trace!(path = %path.display(), "loaded case");
		result
	}

	pub fn input(&self) -> Option<Columns> {
		self.input.as_deref().map(table)
	}

	pub fn expected(&self) -> Option<Columns> {
		self.expected.as_deref().map(table)
	}
}

fn table(columns: &[ColumnFixture]) -> Columns {
	Columns::new(columns.iter().map(ColumnFixture::to_column).collect())
}

fn to_value(target: Type, cell: &Json) -> Option<Value> {
	if cell.is_null() {
		return Some(Value::Undefined);
	}

	let result = match target {
		Type::Boolean => Value::Boolean(cell.as_bool()?),
		Type::Float4 => Value::Float4(to_float(cell)? as f32),
		Type::Float8 => Value::Float8(to_float(cell)?),
		Type::Int1 => Value::Int1(cell.as_i64()?.try_into().ok()?),
		Type::Int2 => Value::Int2(cell.as_i64()?.try_into().ok()?),
		Type::Int4 => Value::Int4(cell.as_i64()?.try_into().ok()?),
		Type::Int8 => Value::Int8(cell.as_i64()?),
		Type::Int16 => Value::Int16(cell.as_i64()?.into()),
		Type::Uint1 => Value::Uint1(cell.as_u64()?.try_into().ok()?),
		Type::Uint2 => Value::Uint2(cell.as_u64()?.try_into().ok()?),
		Type::Uint4 => Value::Uint4(cell.as_u64()?.try_into().ok()?),
		Type::Uint8 => Value::Uint8(cell.as_u64()?),
		Type::Uint16 => Value::Uint16(cell.as_u64()?.into()),
		Type::Utf8 => Value::Utf8(cell.as_str()?.to_string()),
		Type::Categorical => Value::Categorical(cell.as_str()?.to_string()),
		Type::Undefined => return None,
	};
	Some(result)
}

fn to_float(cell: &Json) -> Option<f64> {
	match cell.as_str() {
		Some("NaN") => Some(f64::NAN),
		Some("inf") => Some(f64::INFINITY),
		Some("-inf") => Some(f64::NEG_INFINITY),
		Some(_) => None,
		None => cell.as_f64(),
	}
}

/// Compares names, kinds and the text of every cell, in column order.
pub fn assert_columns_eq(actual: &Columns, expected: &Columns) {
	assert_eq!(actual.names(), expected.names(), "column names differ");
	for (left, right) in actual.iter().zip(expected.iter()) {
		assert_eq!(left.get_type(), right.get_type(), "column `{}` has a different type", left.name());
		assert_eq!(left.len(), right.len(), "column `{}` has a different length", left.name());
		for row in 0..left.len() {
			assert_eq!(
				left.data().as_string(row),
				right.data().as_string(row),
				"column `{}` differs at row {}",
				left.name(),
				row
			);
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn fixture(value: Json) -> ColumnFixture {
		serde_json::from_value(value).unwrap()
	}

	#[test]
	fn test_text_column() {
		let column = fixture(json!({ "name": "A", "type": "Utf8", "values": ["1", null, "nan"] })).to_column();

		assert_eq!(column.name(), "A");
		assert_eq!(column.data(), &ColumnData::utf8_optional([Some("1"), None, Some("nan")]));
	}

	#[test]
	fn test_float_column() {
		let column = fixture(json!({ "name": "F", "type": "Float8", "values": [1.5, null, "NaN"] })).to_column();

		assert_eq!(column.get_type(), Type::Float8);
		assert_eq!(column.data().as_string(0), Some("1.5".to_string()));
		assert_eq!(column.data().as_string(1), None);
		assert_eq!(column.data().as_string(2), Some("NaN".to_string()));
	}

	#[test]
	fn test_categorical_column() {
		let column = fixture(json!({ "name": "K", "type": "Categorical", "values": ["x", null, "x"] })).to_column();

		assert_eq!(column.get_type(), Type::Categorical);
		assert_eq!(column.data().as_string(2), Some("x".to_string()));
	}

	#[test]
	#[should_panic(expected = "is not a INT4 cell")]
	fn test_wrong_cell_kind() {
		fixture(json!({ "name": "I", "type": "Int4", "values": ["1"] })).to_column();
	}

	#[test]
	#[should_panic(expected = "differs at row 1")]
	fn test_assert_columns_eq_reports_row() {
		let left = Columns::new(vec![Column::new("A", ColumnData::utf8_optional([Some("a"), None]))]);
		let right = Columns::new(vec![Column::new("A", ColumnData::utf8(["a", "b"]))]);
		assert_columns_eq(&left, &right);
	}
}
