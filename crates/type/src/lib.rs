// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use error::{Diagnostic, DiagnosticColumn, Error, IntoDiagnostic};
pub use util::{BitVec, BitVecIter, CowVec};
pub use value::{Type, Value};

pub mod error;
pub mod util;
pub mod value;

pub type Result<T> = std::result::Result<T, Error>;
