// rlebits
// Copyright (c) 2024 The rlebits Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `sink` module implements the three result accumulation strategies the query engine can
//! drive: enumerate set-bit indices (LIST), count them (COUNT), or stop at the first one (EXIST).

use crate::errors::{allocation_failed_error, capacity_exceeded_error, Result};

/// Selects what a query computes from the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Enumerate every set-bit index, in ascending order.
    List,
    /// Count the set bits without materializing them.
    Count,
    /// Stop at the first set bit and report whether one exists.
    Exist,
}

/// What the query returns once finalized, matching [`Mode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    List(Vec<u32>),
    Count(usize),
    Exist(bool),
}

/// Tells the traversal loop whether to keep emitting or stop early (EXIST's short-circuit).
pub(crate) enum Emit {
    Continue,
    Stop,
}

/// Accumulates query output for exactly one [`Mode`]; lives for the duration of a single query.
pub(crate) enum Sink {
    List { out: Vec<u32>, capacity: usize },
    Count { count: usize },
    Exist { found: bool },
}

impl Sink {
    /// Creates the sink for `mode`. For `List`, eagerly (and fallibly) reserves `capacity`
    /// entries, mirroring the reference implementation's upfront `malloc` of the result buffer.
    pub(crate) fn new(mode: Mode, capacity: usize) -> Result<Self> {
        match mode {
            Mode::List => {
                let mut out = Vec::new();
                if out.try_reserve_exact(capacity).is_err() {
                    return allocation_failed_error();
                }
                Ok(Sink::List { out, capacity })
            }
            Mode::Count => Ok(Sink::Count { count: 0 }),
            Mode::Exist => Ok(Sink::Exist { found: false }),
        }
    }

    /// Records one set-bit index. Returns `Emit::Stop` when the traversal can terminate early
    /// (EXIST, once the flag is set).
    pub(crate) fn emit(&mut self, index: u32) -> Result<Emit> {
        match self {
            Sink::List { out, capacity } => {
                if out.len() == *capacity {
                    return capacity_exceeded_error(*capacity);
                }
                out.push(index);
                Ok(Emit::Continue)
            }
            Sink::Count { count } => {
                *count += 1;
                Ok(Emit::Continue)
            }
            Sink::Exist { found } => {
                *found = true;
                Ok(Emit::Stop)
            }
        }
    }

    /// Consumes the sink, producing the caller-facing result.
    pub(crate) fn finish(self) -> QueryResult {
        match self {
            Sink::List { out, .. } => QueryResult::List(out),
            Sink::Count { count } => QueryResult::Count(count),
            Sink::Exist { found } => QueryResult::Exist(found),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_sink_accumulates_in_order() {
        let mut sink = Sink::new(Mode::List, 4).unwrap();
        for i in [3u32, 8, 40] {
            sink.emit(i).unwrap();
        }
        assert_eq!(sink.finish(), QueryResult::List(vec![3, 8, 40]));
    }

    #[test]
    fn list_sink_reports_capacity_exceeded() {
        let mut sink = Sink::new(Mode::List, 1).unwrap();
        sink.emit(0).unwrap();
        assert!(sink.emit(1).is_err());
    }

    #[test]
    fn count_sink_counts_without_storing() {
        let mut sink = Sink::new(Mode::Count, 0).unwrap();
        for i in 0..5 {
            sink.emit(i).unwrap();
        }
        assert_eq!(sink.finish(), QueryResult::Count(5));
    }

    #[test]
    fn exist_sink_stops_after_first_emission() {
        let mut sink = Sink::new(Mode::Exist, 0).unwrap();
        assert!(matches!(sink.emit(0).unwrap(), Emit::Stop));
        assert_eq!(sink.finish(), QueryResult::Exist(true));
    }

    #[test]
    fn exist_sink_defaults_to_false() {
        let sink = Sink::new(Mode::Exist, 0).unwrap();
        assert_eq!(sink.finish(), QueryResult::Exist(false));
    }
}
