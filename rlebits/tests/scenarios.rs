// rlebits
// Copyright (c) 2024 The rlebits Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end coverage of the wire-format scenarios: feeds raw compressed bytes through
//! [`rlebits::query_one`]/[`rlebits::query_and`] and checks the decoded output, the way
//! `symphonia-core` keeps format-level tests around its public API rather than only unit-testing
//! internals.

use rlebits::{query_and, query_one, Mode, QueryResult};

fn list(buf: &[u8]) -> Vec<u32> {
    match query_one(buf, 1024, Mode::List).unwrap() {
        QueryResult::List(v) => v,
        other => panic!("expected List, got {other:?}"),
    }
}

#[test]
fn single_noise_byte_with_one_set_bit() {
    assert_eq!(list(&[0x81, 0x80]), vec![0]);
}

#[test]
fn short_zero_fill_followed_by_noise() {
    assert_eq!(list(&[0x03, 0x81, 0x01]), vec![31]);
}

#[test]
fn long_0xff_fill_emits_every_bit_in_order() {
    assert_eq!(list(&[0x60, 0x02, 0x00]), (0u32..16).collect::<Vec<_>>());
}

#[test]
fn and_of_two_streams_with_no_overlap() {
    let a: &[u8] = &[0x81, 0xF0];
    let b: &[u8] = &[0x81, 0x0F];
    assert_eq!(query_and(&[a, b], 8, Mode::List).unwrap(), QueryResult::List(vec![]));
    assert_eq!(query_and(&[a, b], 8, Mode::Count).unwrap(), QueryResult::Count(0));
    assert_eq!(query_and(&[a, b], 8, Mode::Exist).unwrap(), QueryResult::Exist(false));
}

#[test]
fn and_with_skip_over_a_shared_zero_fill_prefix() {
    let a: &[u8] = &[0x05, 0x81, 0x88];
    let b: &[u8] = &[0x05, 0x81, 0x80];
    assert_eq!(query_and(&[a, b], 8, Mode::List).unwrap(), QueryResult::List(vec![40]));
}

#[test]
fn exist_mode_short_circuits_on_first_set_bit() {
    assert_eq!(query_one(&[0x81, 0x01], 0, Mode::Exist).unwrap(), QueryResult::Exist(true));
}

#[test]
fn empty_buffer_is_an_empty_query() {
    assert_eq!(list(&[]), Vec::<u32>::new());
}

#[test]
fn length_zero_run_contributes_nothing() {
    // Zero-length FILL frame immediately followed by a noise frame.
    assert_eq!(list(&[0x00, 0x81, 0x01]), vec![7]);
}

#[test]
fn and_query_requires_at_least_two_streams() {
    let a: &[u8] = &[0x81, 0x01];
    assert!(query_and(&[a], 8, Mode::List).is_err());
}

#[test]
fn list_mode_reports_capacity_exceeded_and_keeps_no_partial_output() {
    let err = query_one(&[0x81, 0xFF], 2, Mode::List).unwrap_err();
    assert!(matches!(err, rlebits::RleBitsError::CapacityExceeded(2)));
}
