// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use super::Diagnostic;

pub trait DiagnosticRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String;
}

pub struct DefaultRenderer;

impl DiagnosticRenderer for DefaultRenderer {
	fn render(&self, d: &Diagnostic) -> String {
		let mut output = String::new();

		let _ = writeln!(&mut output, "error[{}]: {}", d.code, d.message);

		if let Some(label) = &d.label {
			let _ = writeln!(&mut output, "  = {}", label);
		}

		if let Some(col) = &d.column {
			let _ = writeln!(&mut output, "\nnote: column `{}` is of type `{}`", col.name, col.r#type);
		}

		if let Some(help) = &d.help {
			let _ = writeln!(&mut output, "\nhelp: {}", help);
		}

		for note in &d.notes {
			let _ = writeln!(&mut output, "\nnote: {}", note);
		}

		if let Some(cause) = &d.cause {
			let _ = write!(&mut output, "\ncaused by: {}", self.render(cause));
		}

		output
	}
}

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		DefaultRenderer.render(diagnostic)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Type, error::diagnostic::column::row_count_mismatch};

	#[test]
	fn test_render_row_count_mismatch() {
		let out = DefaultRenderer::render_string(&row_count_mismatch("b", Type::Utf8, 3, 2));
		assert_eq!(
			out,
			"error[COLUMN_001]: column `b` has 2 rows, expected 3\n  = row count mismatch\n\nnote: column `b` is of type `UTF8`\n\nhelp: every column of a table must hold exactly one value per row\n"
		);
	}

	#[test]
	fn test_render_cause() {
		let mut outer = row_count_mismatch("a", Type::Int4, 1, 0);
		outer.column = None;
		outer.help = None;
		outer.label = None;
		outer.cause = Some(Box::new(row_count_mismatch("b", Type::Int4, 1, 2)));

		let out = DefaultRenderer::render_string(&outer);
		assert!(out.starts_with("error[COLUMN_001]: column `a` has 0 rows, expected 1\n"));
		assert!(out.contains("caused by: error[COLUMN_001]: column `b` has 2 rows, expected 1"));
	}
}
