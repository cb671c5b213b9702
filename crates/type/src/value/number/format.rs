// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Text form of floating point values.
//!
//! Finite values use the shortest representation that round-trips. Values
//! without a fractional part keep a trailing `.0`, so a float column never
//! renders like an integer column. Non-finite values render as `NaN`, `inf`
//! and `-inf`.

macro_rules! impl_format_float {
	($($name:ident => $t:ty),* $(,)?) => {
		$(
			pub fn $name(value: $t) -> String {
				if value.is_nan() {
					return "NaN".to_string();
				}
				if value.is_infinite() {
					return if value.is_sign_positive() {
						"inf".to_string()
					} else {
						"-inf".to_string()
					};
				}

				let mut result = value.to_string();
				if !result.contains('.') {
					result.push_str(".0");
				}
				result
			}
		)*
	};
}

impl_format_float! {
	format_float4 => f32,
	format_float8 => f64,
}
