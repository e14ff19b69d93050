// rlebits
// Copyright (c) 2024 The rlebits Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `query` module drives one or more [`StreamIter`]s in lock-step, computes the bitwise AND
//! (and, for the fast-forward decision, the OR) of their current byte, and feeds set-bit indices
//! to a [`Sink`].

use log::{debug, trace};
use smallvec::SmallVec;

use crate::errors::{too_few_streams_error, too_many_streams_error, Result};
use crate::sink::{Emit, Mode, QueryResult, Sink};
use crate::stream::StreamIter;

/// The maximum number of streams a single query may combine with AND. Bounds the inline capacity
/// of the stream array so the common case (a handful of streams) never allocates.
pub const MAX_STREAMS: usize = 64;

type StreamSet<'a> = SmallVec<[StreamIter<'a>; MAX_STREAMS]>;

/// Runs a query over a single compressed buffer.
///
/// `capacity` is the declared pre-allocation for `Mode::List`; it is accepted, but unused, for
/// `Mode::Count` and `Mode::Exist`.
pub fn query_one(buf: &[u8], capacity: usize, mode: Mode) -> Result<QueryResult> {
    let mut streams = StreamSet::new();
    streams.push(StreamIter::open(buf));
    run(streams, capacity, mode)
}

/// Runs a query over the bitwise AND of two or more compressed buffers.
///
/// Streams are traversed byte-synchronously: `buffers` are assumed to decompress to compatible
/// lengths for the intended use. A length mismatch is not a distinct error - the shortest stream
/// exhausting first simply ends the traversal there, the same way `buffers[0]` running out ends
/// a single-stream query.
pub fn query_and(buffers: &[&[u8]], capacity: usize, mode: Mode) -> Result<QueryResult> {
    if buffers.len() < 2 {
        return too_few_streams_error();
    }
    if buffers.len() > MAX_STREAMS {
        return too_many_streams_error(buffers.len());
    }
    let streams: StreamSet = buffers.iter().map(|b| StreamIter::open(b)).collect();
    run(streams, capacity, mode)
}

/// The shared traversal: byte-synchronous AND across `streams`, with the zero-fill fast-forward
/// optimization, feeding set-bit indices to a freshly created [`Sink`] for `mode`.
fn run(mut streams: StreamSet<'_>, capacity: usize, mode: Mode) -> Result<QueryResult> {
    debug!("starting query: mode={:?}, streams={}, capacity={}", mode, streams.len(), capacity);

    let mut sink = Sink::new(mode, capacity)?;
    let mut byte_index: u64 = 0;
    let mut current = SmallVec::<[u8; MAX_STREAMS]>::new();

    'traverse: loop {
        current.clear();
        for stream in streams.iter_mut() {
            match stream.next() {
                Some(byte) => current.push(byte),
                None => break 'traverse,
            }
        }

        let and_byte = current.iter().copied().fold(0xffu8, |acc, b| acc & b);
        let or_byte = current.iter().copied().fold(0x00u8, |acc, b| acc | b);

        if or_byte == 0 {
            let skip = streams.iter().map(StreamIter::skippable_bytes).max().unwrap_or(0);
            if skip > 0 {
                trace!("skipping {} zero bytes at byte_index={}", skip, byte_index);
                byte_index += skip as u64;
                for stream in streams.iter_mut() {
                    stream.seek(skip);
                }
            }
        }

        if and_byte != 0 {
            for bit in (0u32..8).rev() {
                if and_byte & (1 << bit) == 0 {
                    continue;
                }
                let output = byte_index * 8 + u64::from(7 - bit);
                if let Emit::Stop = sink.emit(output as u32)? {
                    break 'traverse;
                }
            }
        }

        byte_index += 1;
    }

    Ok(sink.finish())
}
