// rlebits
// Copyright (c) 2024 The rlebits Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

//! # rlebits
//!
//! `rlebits` is a query engine over a byte-level run-length-encoded bitmap format. It answers
//! three kinds of query over one or more compressed bitmaps: enumerate the set-bit indices,
//! count them, or decide whether any exist. Querying more than one bitmap computes their bitwise
//! AND, fast-forwarding over regions that are provably all-zero instead of decompressing them.
//!
//! # Usage
//!
//! 1. Obtain the compressed bytes for each bitmap you want to query (reading them from disk is
//!    out of scope for this crate; see `rlebits-cli` for an example harness that does).
//! 2. Call [`query_one`] for a single bitmap, or [`query_and`] for the bitwise AND of two or
//!    more.
//! 3. Pick a [`Mode`]: [`Mode::List`] to enumerate set-bit indices (with an advisory result
//!    `capacity`), [`Mode::Count`] to just count them, or [`Mode::Exist`] to stop at the first
//!    one.
//!
//! ```
//! use rlebits::{query_and, Mode, QueryResult};
//!
//! let a: &[u8] = &[0x81, 0xF0];
//! let b: &[u8] = &[0x81, 0x0F];
//! assert_eq!(query_and(&[a, b], 8, Mode::List).unwrap(), QueryResult::List(vec![]));
//! ```
//!
//! The heavy lifting - the control-byte codec, the stream iterator, and the AND-traversal loop -
//! lives in [`core`] (the `rlebits-core` crate), which this crate re-exports under ergonomic
//! top-level names.

pub use rlebits_core as core;
pub use rlebits_core::{query_and, query_one, Mode, QueryResult, Result, RleBitsError, MAX_STREAMS};
