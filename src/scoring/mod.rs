// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how guides get their numbers and their order.
//!
//! `core` turns one guide plus the query terms into a score and the list of
//! fields that matched. `ranking` sorts the survivors.

mod core;
pub mod ranking;

pub use core::*;
