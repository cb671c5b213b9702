// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, DiagnosticColumn};
use crate::Type;

/// COLUMN_001: A column does not have the same number of rows as the others
pub fn row_count_mismatch(name: &str, r#type: Type, expected: usize, actual: usize) -> Diagnostic {
	Diagnostic {
		code: "COLUMN_001".to_string(),
		message: format!("column `{}` has {} rows, expected {}", name, actual, expected),
		column: Some(DiagnosticColumn {
			name: name.to_string(),
			r#type,
		}),
		label: Some("row count mismatch".to_string()),
		help: Some("every column of a table must hold exactly one value per row".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// COLUMN_002: Two columns of the same table share a name
pub fn duplicate_column_name(name: &str) -> Diagnostic {
	Diagnostic {
		code: "COLUMN_002".to_string(),
		message: format!("column `{}` appears more than once", name),
		column: None,
		label: Some("duplicate column".to_string()),
		help: Some("column names must be unique within a table".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// COLUMN_003: A value of one type was pushed into a column of another type
pub fn value_type_mismatch(expected: Type, actual: Type) -> Diagnostic {
	Diagnostic {
		code: "COLUMN_003".to_string(),
		message: format!("cannot push a {} value into a {} column", actual, expected),
		column: None,
		label: Some("type mismatch".to_string()),
		help: Some(format!("convert the value to {} first", expected)),
		notes: vec![],
		cause: None,
	}
}
