// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod fixture;
pub mod tracing;

pub use fixture::{CaseFixture, ColumnFixture, assert_columns_eq};
