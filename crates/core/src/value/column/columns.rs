// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashSet, ops::Deref};

use serde::{Deserialize, Serialize};
use tabulon_type::{
	CowVec, Value,
	error::diagnostic::column::{duplicate_column_name, row_count_mismatch},
	return_error,
};

use crate::value::column::Column;

/// A table: named columns sharing one row count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Columns {
	columns: CowVec<Column>,
}

impl Deref for Columns {
	type Target = [Column];

	fn deref(&self) -> &Self::Target {
		self.columns.deref()
	}
}

impl Columns {
	pub fn new(columns: Vec<Column>) -> Self {
		let n = columns.first().map_or(0, |c| c.data().len());
		assert!(columns.iter().all(|c| c.data().len() == n));

		Self {
			columns: CowVec::new(columns),
		}
	}

	/// Like [`Columns::new`], but reports mismatched row counts and duplicate
	/// names instead of panicking.
	pub fn try_new(columns: Vec<Column>) -> tabulon_type::Result<Self> {
		let n = columns.first().map_or(0, |c| c.data().len());
		let mut seen = HashSet::with_capacity(columns.len());

		for column in &columns {
			if column.data().len() != n {
				return_error!(row_count_mismatch(column.name(), column.get_type(), n, column.data().len()));
			}
			if !seen.insert(column.name()) {
				return_error!(duplicate_column_name(column.name()));
			}
		}

		Ok(Self {
			columns: CowVec::new(columns),
		})
	}

	pub fn empty() -> Self {
		Self {
			columns: CowVec::new(vec![]),
		}
	}

	pub fn row_count(&self) -> usize {
		self.first().map_or(0, |col| col.data().len())
	}

	/// (rows, columns)
	pub fn shape(&self) -> (usize, usize) {
		(self.row_count(), self.len())
	}

	pub fn column(&self, name: &str) -> Option<&Column> {
		self.iter().find(|col| col.name() == name)
	}

	pub fn column_index(&self, name: &str) -> Option<usize> {
		self.iter().position(|col| col.name() == name)
	}

	pub fn names(&self) -> Vec<&str> {
		self.iter().map(|col| col.name()).collect()
	}

	pub fn get_row(&self, index: usize) -> Vec<Value> {
		self.iter().map(|col| col.data().get_value(index)).collect()
	}

	/// Replaces the column with the same name in place, or appends it as the
	/// last column. Every other column is left untouched.
	pub fn upsert(&mut self, column: Column) {
		if !self.columns.is_empty() {
			assert_eq!(
				column.data().len(),
				self.row_count(),
				"column `{}` must have one value per row",
				column.name()
			);
		}

		match self.column_index(column.name()) {
			Some(idx) => self.columns.set(idx, column),
			None => self.columns.push(column),
		}
	}

	pub fn into_iter(self) -> impl Iterator<Item = Column> {
		self.columns.into_iter()
	}
}

#[cfg(test)]
mod tests {
	use tabulon_type::{Type, Value};

	use super::*;
	use crate::value::column::ColumnData;

	fn abc() -> Columns {
		Columns::new(vec![
			Column::new("a", ColumnData::utf8(["a", "b"])),
			Column::new("b", ColumnData::int4([1, 2])),
			Column::new("c", ColumnData::categorical(["x", "y"])),
		])
	}

	#[test]
	fn test_shape() {
		assert_eq!(abc().shape(), (2, 3));
		assert_eq!(Columns::empty().shape(), (0, 0));
	}

	#[test]
	fn test_lookup() {
		let columns = abc();
		assert_eq!(columns.column_index("b"), Some(1));
		assert_eq!(columns.column("c").map(|c| c.get_type()), Some(Type::Categorical));
		assert!(columns.column("z").is_none());
		assert_eq!(columns.names(), vec!["a", "b", "c"]);
	}

	#[test]
	fn test_get_row() {
		assert_eq!(abc().get_row(1), vec![Value::utf8("b"), Value::Int4(2), Value::categorical("y")]);
	}

	#[test]
	fn test_upsert_replaces_in_place() {
		let original = abc();
		let mut columns = original.clone();
		columns.upsert(Column::new("b", ColumnData::utf8(["1", "2"])));

		assert_eq!(columns.names(), vec!["a", "b", "c"]);
		assert_eq!(columns[1].get_type(), Type::Utf8);
		assert_eq!(original[1].get_type(), Type::Int4);
	}

	#[test]
	fn test_upsert_appends() {
		let mut columns = abc();
		columns.upsert(Column::new("d", ColumnData::undefined(2)));

		assert_eq!(columns.names(), vec!["a", "b", "c", "d"]);
	}

	#[test]
	fn test_upsert_into_empty_table() {
		let mut columns = Columns::empty();
		columns.upsert(Column::new("a", ColumnData::utf8(["x", "y", "z"])));

		assert_eq!(columns.shape(), (3, 1));
	}

	#[test]
	#[should_panic]
	fn test_upsert_rejects_wrong_length() {
		let mut columns = abc();
		columns.upsert(Column::new("d", ColumnData::undefined(3)));
	}

	#[test]
	fn test_try_new_row_count_mismatch() {
		let err = Columns::try_new(vec![
			Column::new("a", ColumnData::utf8(["a", "b"])),
			Column::new("b", ColumnData::int4([1])),
		])
		.unwrap_err();
		assert_eq!(err.code(), "COLUMN_001");
	}

	#[test]
	fn test_try_new_duplicate_name() {
		let err = Columns::try_new(vec![
			Column::new("a", ColumnData::utf8(["a"])),
			Column::new("a", ColumnData::int4([1])),
		])
		.unwrap_err();
		assert_eq!(err.code(), "COLUMN_002");
	}
}
