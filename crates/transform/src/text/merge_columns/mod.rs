// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::borrow::Cow;

use tabulon_core::{
	Column, ColumnData, Columns,
	value::column::container::Utf8Container,
};
use tabulon_type::Result;
use tracing::{debug, instrument};

use crate::{ConfigurationError, Params, Transform};

mod params;

pub use params::{MergeColumnsParams, migrate_params};

/// Joins the text of several columns row by row into one text column.
pub struct MergeColumns;

impl MergeColumns {
	pub const NAME: &'static str = "mergecolumns";

	pub fn new() -> Self {
		Self
	}
}

impl Default for MergeColumns {
	fn default() -> Self {
		Self::new()
	}
}

impl Transform for MergeColumns {
	fn name(&self) -> &'static str {
		Self::NAME
	}

	fn migrate_params(&self, params: Params) -> Params {
		migrate_params(params)
	}

	fn render(&self, input: Option<Columns>, params: &Params) -> Result<Option<Columns>> {
		let Some(columns) = input else {
			debug!("no input table");
			return Ok(None);
		};

		let params = MergeColumnsParams::from_params(params)?;
		merge_columns(&columns, &params).map(Some)
	}
}

/// Writes `params.newcolumn` as the delimiter join of the present values of
/// `params.columns`, left to right. A row with no present value stays
/// missing. The destination replaces an existing column of the same name in
/// place or is appended last. The input table is not modified.
#[instrument(name = "transform::merge_columns", level = "debug", skip(columns, params), fields(
	sources = params.columns.len(),
	rows = columns.row_count(),
))]
pub fn merge_columns(columns: &Columns, params: &MergeColumnsParams) -> Result<Columns> {
	if params.is_noop() {
		debug!("nothing to merge, table unchanged");
		return Ok(columns.clone());
	}

	let sources = resolve(columns, params)?;

	let mut merged: Vec<Option<String>> = vec![None; columns.row_count()];
	for source in &sources {
		for (row, slot) in merged.iter_mut().enumerate() {
			*slot = join(slot.take(), source.get(row), &params.delimiter);
		}
	}

	let mut result = columns.clone();
	result.upsert(Column::new(
		params.newcolumn.as_str(),
		ColumnData::Utf8(merged.into_iter().collect::<Utf8Container>()),
	));

	Ok(result)
}

/// Every source as text, looked up before anything is written. Each source
/// and the destination must name at most one column.
fn resolve<'a>(columns: &'a Columns, params: &MergeColumnsParams) -> Result<Vec<Cow<'a, Utf8Container>>> {
	ensure_unambiguous(columns, &params.newcolumn)?;

	params.columns
		.iter()
		.map(|name| {
			ensure_unambiguous(columns, name)?;
			match columns.column(name) {
				Some(column) => Ok(column.data().to_utf8()),
				None => Err(ConfigurationError::ColumnNotFound {
					column: name.clone(),
					available: columns.names().into_iter().map(str::to_string).collect(),
				}
				.into()),
			}
		})
		.collect()
}

fn ensure_unambiguous(columns: &Columns, name: &str) -> Result<()> {
	let matches = columns.iter().filter(|column| column.name() == name).count();
	if matches > 1 {
		return Err(ConfigurationError::AmbiguousColumn {
			column: name.to_string(),
			matches,
		}
		.into());
	}
	Ok(())
}

fn join(acc: Option<String>, next: Option<&String>, delimiter: &str) -> Option<String> {
	match (acc, next) {
		(None, None) => None,
		(None, Some(next)) => Some(next.clone()),
		(Some(acc), None) => Some(acc),
		(Some(mut acc), Some(next)) => {
			acc.push_str(delimiter);
			acc.push_str(next);
			Some(acc)
		}
	}
}

#[cfg(test)]
mod tests {
	use tabulon_type::Type;

	use super::*;

	fn strings(data: &ColumnData) -> Vec<Option<String>> {
		(0..data.len()).map(|idx| data.as_string(idx)).collect()
	}

	fn two_text_columns() -> Columns {
		Columns::new(vec![
			Column::new("A", ColumnData::utf8_optional([Some("1"), None, Some("3"), Some("4"), Some("nan"), None])),
			Column::new("B", ColumnData::utf8_optional([None, None, Some("3"), Some("nan"), Some("5"), Some("6")])),
		])
	}

	#[test]
	fn test_two_text_columns_skip_missing() {
		let result = merge_columns(&two_text_columns(), &MergeColumnsParams::new(["A", "B"], "-", "C")).unwrap();

		assert_eq!(result.names(), vec!["A", "B", "C"]);
		let merged = result.column("C").unwrap();
		assert_eq!(merged.get_type(), Type::Utf8);
		assert_eq!(
			strings(merged.data()),
			vec![
				Some("1".to_string()),
				None,
				Some("3-3".to_string()),
				Some("4-nan".to_string()),
				Some("nan-5".to_string()),
				Some("6".to_string()),
			]
		);
	}

	#[test]
	fn test_literal_nan_text_is_present() {
		let table = Columns::new(vec![
			Column::new("A", ColumnData::utf8_optional([Some("nan"), Some("4")])),
			Column::new("B", ColumnData::utf8_optional([Some("5"), Some("nan")])),
		]);

		let result = merge_columns(&table, &MergeColumnsParams::new(["A", "B"], "-", "C")).unwrap();
		assert_eq!(
			strings(result.column("C").unwrap().data()),
			vec![Some("nan-5".to_string()), Some("4-nan".to_string())]
		);
	}

	#[test]
	fn test_no_columns_is_noop() {
		let table = two_text_columns();
		let result = merge_columns(&table, &MergeColumnsParams::new(Vec::<String>::new(), "-", "C")).unwrap();
		assert_eq!(result, table);
	}

	#[test]
	fn test_empty_newcolumn_is_noop() {
		let table = two_text_columns();
		let result = merge_columns(&table, &MergeColumnsParams::new(["A", "B"], "-", "")).unwrap();
		assert_eq!(result, table);
	}

	#[test]
	fn test_single_column_copies_as_text() {
		let table = two_text_columns();
		let result = merge_columns(&table, &MergeColumnsParams::new(["A"], "-", "C")).unwrap();

		assert_eq!(strings(result.column("C").unwrap().data()), strings(table.column("A").unwrap().data()));
	}

	#[test]
	fn test_all_missing_row_stays_missing() {
		let table = Columns::new(vec![
			Column::new("A", ColumnData::int4_optional([None, Some(1)])),
			Column::new("B", ColumnData::utf8_optional([None, None::<&str>])),
		]);

		let result = merge_columns(&table, &MergeColumnsParams::new(["A", "B"], "-", "C")).unwrap();
		let merged = result.column("C").unwrap().data();
		assert!(!merged.is_defined(0));
		assert_eq!(merged.as_string(1), Some("1".to_string()));
	}

	#[test]
	fn test_categorical_sources_flatten_to_text() {
		let table = Columns::new(vec![
			Column::new("A", ColumnData::categorical_optional([Some("1"), None, Some("3"), None])),
			Column::new("B", ColumnData::categorical_optional([None, Some("2"), Some("3"), None])),
			Column::new("D", ColumnData::categorical(["x", "y", "x", "y"])),
		]);

		let result = merge_columns(&table, &MergeColumnsParams::new(["A", "B"], "-", "C")).unwrap();

		let merged = result.column("C").unwrap();
		assert_eq!(merged.get_type(), Type::Utf8);
		assert_eq!(
			strings(merged.data()),
			vec![Some("1".to_string()), Some("2".to_string()), Some("3-3".to_string()), None]
		);
		assert_eq!(result.column("A"), table.column("A"));
		assert_eq!(result.column("D").unwrap().get_type(), Type::Categorical);
	}

	#[test]
	fn test_overwrite_source_reads_original() {
		let table = Columns::new(vec![
			Column::new("A", ColumnData::utf8(["a", "b"])),
			Column::new("B", ColumnData::utf8(["1", "2"])),
		]);

		let result = merge_columns(&table, &MergeColumnsParams::new(["A", "B"], "-", "A")).unwrap();

		assert_eq!(result.names(), vec!["A", "B"]);
		assert_eq!(strings(result.column("A").unwrap().data()), vec![Some("a-1".to_string()), Some("b-2".to_string())]);
		assert_eq!(strings(table.column("A").unwrap().data()), vec![Some("a".to_string()), Some("b".to_string())]);
	}

	#[test]
	fn test_overwrite_other_column_keeps_position() {
		let table = Columns::new(vec![
			Column::new("A", ColumnData::utf8(["a"])),
			Column::new("B", ColumnData::int4([7])),
			Column::new("C", ColumnData::utf8(["c"])),
		]);

		let result = merge_columns(&table, &MergeColumnsParams::new(["A", "C"], "", "B")).unwrap();

		assert_eq!(result.names(), vec!["A", "B", "C"]);
		assert_eq!(result.column("B").unwrap().get_type(), Type::Utf8);
		assert_eq!(result.column("B").unwrap().data().as_string(0), Some("ac".to_string()));
	}

	#[test]
	fn test_many_columns() {
		let table = Columns::new(vec![
			Column::new("A", ColumnData::utf8_optional([Some("a"), None, Some("a")])),
			Column::new("B", ColumnData::utf8_optional([Some("b"), Some("b"), None])),
			Column::new("C", ColumnData::utf8_optional([None, Some("c"), Some("c")])),
			Column::new("D", ColumnData::utf8_optional([Some("d"), None, None])),
		]);

		let result = merge_columns(&table, &MergeColumnsParams::new(["A", "B", "C", "D"], "+", "E")).unwrap();

		assert_eq!(
			strings(result.column("E").unwrap().data()),
			vec![Some("a+b+d".to_string()), Some("b+c".to_string()), Some("a+c".to_string())]
		);
	}

	#[test]
	fn test_source_order_is_respected() {
		let table = Columns::new(vec![
			Column::new("A", ColumnData::utf8(["a"])),
			Column::new("B", ColumnData::utf8(["b"])),
		]);

		let result = merge_columns(&table, &MergeColumnsParams::new(["B", "A"], "/", "C")).unwrap();
		assert_eq!(result.column("C").unwrap().data().as_string(0), Some("b/a".to_string()));
	}

	#[test]
	fn test_numeric_and_text_mix() {
		let table = Columns::new(vec![
			Column::new("A", ColumnData::float8_optional([Some(1.5), Some(2.0), None])),
			Column::new("B", ColumnData::int8_optional([Some(3), None, Some(-4)])),
			Column::new("C", ColumnData::bool([true, false, true])),
		]);

		let result = merge_columns(&table, &MergeColumnsParams::new(["A", "B", "C"], " ", "D")).unwrap();

		assert_eq!(
			strings(result.column("D").unwrap().data()),
			vec![
				Some("1.5 3 true".to_string()),
				Some("2.0 false".to_string()),
				Some("-4 true".to_string())
			]
		);
	}

	#[test]
	fn test_duplicate_source_joins_with_itself() {
		let table = Columns::new(vec![Column::new("A", ColumnData::utf8_optional([Some("x"), None]))]);

		let result = merge_columns(&table, &MergeColumnsParams::new(["A", "A"], "-", "B")).unwrap();
		assert_eq!(strings(result.column("B").unwrap().data()), vec![Some("x-x".to_string()), None]);
	}

	#[test]
	fn test_empty_table_with_columns() {
		let table = Columns::new(vec![Column::new("A", ColumnData::utf8(Vec::<String>::new()))]);

		let result = merge_columns(&table, &MergeColumnsParams::new(["A"], "-", "B")).unwrap();
		assert_eq!(result.shape(), (0, 2));
	}

	#[test]
	fn test_missing_column() {
		let table = two_text_columns();

		let err = merge_columns(&table, &MergeColumnsParams::new(["A", "Z"], "-", "C")).unwrap_err();
		assert_eq!(err.code(), "CONFIG_001");
		assert_eq!(err.notes, vec!["available columns: A, B".to_string()]);
	}

	fn duplicated_a() -> Columns {
		Columns::new(vec![
			Column::new("A", ColumnData::utf8(["a1"])),
			Column::new("A", ColumnData::utf8(["a2"])),
			Column::new("B", ColumnData::utf8(["b"])),
		])
	}

	#[test]
	fn test_duplicate_source_name_in_table() {
		let err = merge_columns(&duplicated_a(), &MergeColumnsParams::new(["A", "B"], "-", "C")).unwrap_err();

		assert_eq!(err.code(), "CONFIG_003");
		assert_eq!(err.message, "column `A` is ambiguous");
	}

	#[test]
	fn test_duplicate_destination_name_in_table() {
		let err = merge_columns(&duplicated_a(), &MergeColumnsParams::new(["B"], "-", "A")).unwrap_err();
		assert_eq!(err.code(), "CONFIG_003");
	}

	#[test]
	fn test_duplicate_names_elsewhere_are_fine() {
		let result = merge_columns(&duplicated_a(), &MergeColumnsParams::new(["B"], "-", "C")).unwrap();
		assert_eq!(result.names(), vec!["A", "A", "B", "C"]);
	}

	#[test]
	fn test_render_passes_through_absent_input() {
		let transform = MergeColumns::new();
		assert_eq!(transform.render(None, &Params::new()).unwrap(), None);
	}

	#[test]
	fn test_render_with_legacy_params() {
		let transform = MergeColumns::new();
		let params = match serde_json::json!({
			"firstcolumn": "A",
			"secondcolumn": "B",
			"delimiter": "-",
			"newcolumn": "C",
		}) {
			serde_json::Value::Object(map) => map,
			_ => unreachable!(),
		};

		let result = transform.render(Some(two_text_columns()), &params).unwrap().unwrap();
		assert_eq!(result.column("C").unwrap().data().as_string(2), Some("3-3".to_string()));
	}
}
