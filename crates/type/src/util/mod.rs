// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod bitvec;
mod cowvec;

pub use bitvec::{BitVec, BitVecIter};
pub use cowvec::CowVec;
