// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabulon_type::{BitVec, Type};

use crate::value::column::{
	ColumnData,
	container::{BoolContainer, CategoricalContainer, NumberContainer, UndefinedContainer, Utf8Container},
};

macro_rules! number_factory {
	($($name:ident, $optional:ident, $with_bitvec:ident => $t:ty, $variant:ident;)*) => {
		impl ColumnData {
			$(
				pub fn $name(data: impl IntoIterator<Item = $t>) -> Self {
					ColumnData::$variant(NumberContainer::from_vec(data.into_iter().collect()))
				}

				pub fn $optional(data: impl IntoIterator<Item = Option<$t>>) -> Self {
					let mut container = NumberContainer::with_capacity(0);
					for value in data {
						match value {
							Some(v) => container.push(v),
							None => container.push_undefined(),
						}
					}
					ColumnData::$variant(container)
				}

				pub fn $with_bitvec(data: impl IntoIterator<Item = $t>, bitvec: impl Into<BitVec>) -> Self {
					ColumnData::$variant(NumberContainer::new(data.into_iter().collect(), bitvec.into()))
				}
			)*
		}
	};
}

number_factory! {
	float4, float4_optional, float4_with_bitvec => f32, Float4;
	float8, float8_optional, float8_with_bitvec => f64, Float8;
	int1, int1_optional, int1_with_bitvec => i8, Int1;
	int2, int2_optional, int2_with_bitvec => i16, Int2;
	int4, int4_optional, int4_with_bitvec => i32, Int4;
	int8, int8_optional, int8_with_bitvec => i64, Int8;
	int16, int16_optional, int16_with_bitvec => i128, Int16;
	uint1, uint1_optional, uint1_with_bitvec => u8, Uint1;
	uint2, uint2_optional, uint2_with_bitvec => u16, Uint2;
	uint4, uint4_optional, uint4_with_bitvec => u32, Uint4;
	uint8, uint8_optional, uint8_with_bitvec => u64, Uint8;
	uint16, uint16_optional, uint16_with_bitvec => u128, Uint16;
}

impl ColumnData {
	pub fn bool(data: impl IntoIterator<Item = bool>) -> Self {
		ColumnData::Bool(BoolContainer::from_vec(data.into_iter().collect()))
	}

	pub fn bool_optional(data: impl IntoIterator<Item = Option<bool>>) -> Self {
		let mut container = BoolContainer::with_capacity(0);
		for value in data {
			match value {
				Some(v) => container.push(v),
				None => container.push_undefined(),
			}
		}
		ColumnData::Bool(container)
	}

	pub fn utf8(data: impl IntoIterator<Item = impl Into<String>>) -> Self {
		ColumnData::Utf8(Utf8Container::from_vec(data.into_iter().map(Into::into).collect()))
	}

	pub fn utf8_optional(data: impl IntoIterator<Item = Option<impl Into<String>>>) -> Self {
		ColumnData::Utf8(data.into_iter().map(|v| v.map(Into::into)).collect())
	}

	pub fn utf8_with_bitvec(data: impl IntoIterator<Item = impl Into<String>>, bitvec: impl Into<BitVec>) -> Self {
		ColumnData::Utf8(Utf8Container::new(data.into_iter().map(Into::into).collect(), bitvec.into()))
	}

	pub fn categorical(data: impl IntoIterator<Item = impl Into<String>>) -> Self {
		ColumnData::Categorical(CategoricalContainer::from_labels(
			data.into_iter().map(|v| Some(v.into())).collect(),
		))
	}

	pub fn categorical_optional(data: impl IntoIterator<Item = Option<impl Into<String>>>) -> Self {
		ColumnData::Categorical(CategoricalContainer::from_labels(
			data.into_iter().map(|v| v.map(Into::into)).collect(),
		))
	}

	pub fn undefined(len: usize) -> Self {
		ColumnData::Undefined(UndefinedContainer::new(len))
	}

	/// An empty column of the given type, ready for `push_value`.
	pub fn with_capacity(target: Type, capacity: usize) -> Self {
		match target {
			Type::Boolean => ColumnData::Bool(BoolContainer::with_capacity(capacity)),
			Type::Float4 => ColumnData::Float4(NumberContainer::with_capacity(capacity)),
			Type::Float8 => ColumnData::Float8(NumberContainer::with_capacity(capacity)),
			Type::Int1 => ColumnData::Int1(NumberContainer::with_capacity(capacity)),
			Type::Int2 => ColumnData::Int2(NumberContainer::with_capacity(capacity)),
			Type::Int4 => ColumnData::Int4(NumberContainer::with_capacity(capacity)),
			Type::Int8 => ColumnData::Int8(NumberContainer::with_capacity(capacity)),
			Type::Int16 => ColumnData::Int16(NumberContainer::with_capacity(capacity)),
			Type::Uint1 => ColumnData::Uint1(NumberContainer::with_capacity(capacity)),
			Type::Uint2 => ColumnData::Uint2(NumberContainer::with_capacity(capacity)),
			Type::Uint4 => ColumnData::Uint4(NumberContainer::with_capacity(capacity)),
			Type::Uint8 => ColumnData::Uint8(NumberContainer::with_capacity(capacity)),
			Type::Uint16 => ColumnData::Uint16(NumberContainer::with_capacity(capacity)),
			Type::Utf8 => ColumnData::Utf8(Utf8Container::with_capacity(capacity)),
			Type::Categorical => ColumnData::Categorical(CategoricalContainer::with_capacity(capacity)),
			Type::Undefined => ColumnData::Undefined(UndefinedContainer::new(0)),
		}
	}
}
