// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod merge_columns;

pub use merge_columns::{MergeColumns, MergeColumnsParams, merge_columns};
