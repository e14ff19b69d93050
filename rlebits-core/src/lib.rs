// rlebits
// Copyright (c) 2024 The rlebits Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `rlebits-core` decodes a byte-level run-length-encoded bitmap format and answers three kinds
//! of queries over one or more such bitmaps: enumerate the set-bit indices, count them, or
//! decide whether any set bit exists. Querying more than one bitmap computes their bitwise AND.
//!
//! The two entry points are [`query_one`] for a single buffer and [`query_and`] for the AND of
//! two or more. Both take a [`Mode`] selecting LIST/COUNT/EXIST and, for LIST, an advisory result
//! capacity.
//!
//! ```
//! use rlebits_core::{query_one, Mode, QueryResult};
//!
//! // NOISE frame, length 1, payload 0x80 -> bit 0 set.
//! let buf = [0x81, 0x80];
//! assert_eq!(query_one(&buf, 16, Mode::List).unwrap(), QueryResult::List(vec![0]));
//! ```
//!
//! See the [`frame`] module for the wire format's control-byte codec, [`stream`] for the
//! single-pass decoder built on top of it, and [`query`] for the multi-stream AND traversal that
//! fast-forwards over zero-fill runs without materializing them.

pub mod errors;
pub mod frame;
pub mod query;
pub mod sink;
pub mod stream;

pub use errors::{Result, RleBitsError};
pub use query::{query_and, query_one, MAX_STREAMS};
pub use sink::{Mode, QueryResult};
pub use stream::StreamIter;
