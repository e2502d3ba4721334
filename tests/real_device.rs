// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests against a real IPX800.
//!
//! These tests require a controller on the network and are ignored by
//! default. They only read state, except `relay_toggle_roundtrip` which
//! toggles a relay twice.
//!
//! # Environment Variables
//!
//! - `IPX800_URL` - Base URL of the controller (e.g. `http://192.168.1.50`)
//! - `IPX800_API_KEY` - API key (default: `apikey`)
//! - `IPX800_TEST_RELAY` - 0-based index of a relay safe to toggle
//!
//! ```bash
//! export IPX800_URL=http://192.168.1.50
//! cargo test --test real_device -- --ignored --test-threads=1
//! ```

use std::env;

use ipx800_lib::Ipx800;

fn device() -> Ipx800 {
    let url = env::var("IPX800_URL").expect("IPX800_URL not set");
    let api_key = env::var("IPX800_API_KEY").unwrap_or_else(|_| "apikey".to_string());
    Ipx800::with_api_key(url, api_key).expect("invalid IPX800_URL")
}

#[test]
#[ignore = "requires a real IPX800"]
fn list_relays() {
    let ipx = device();
    let relays = ipx.relays();
    let count = relays.len().unwrap();
    assert!(count > 0);
    for relay in relays.iter().unwrap() {
        println!("{}", relay.describe().unwrap());
    }
}

#[test]
#[ignore = "requires a real IPX800"]
fn read_analogs() {
    let ipx = device();
    for analog in ipx.analogs().iter().unwrap() {
        let volt = analog.as_volt().unwrap();
        assert!((0.0..=10.0).contains(&volt), "A{} = {volt} V", analog.id());
    }
}

#[test]
#[ignore = "requires a real IPX800"]
fn read_counters() {
    let ipx = device();
    for counter in ipx.counters().iter().unwrap() {
        assert!(counter.value().unwrap() >= 0);
    }
}

#[test]
#[ignore = "requires a real IPX800 and a spare relay"]
fn relay_toggle_roundtrip() {
    let index: usize = env::var("IPX800_TEST_RELAY")
        .expect("IPX800_TEST_RELAY not set")
        .parse()
        .expect("invalid IPX800_TEST_RELAY");
    let ipx = device();
    let relay = ipx.relays().get(index).unwrap();

    let before = relay.status().unwrap();
    assert!(relay.toggle().unwrap());
    assert_eq!(relay.status().unwrap(), !before);
    assert!(relay.toggle().unwrap());
    assert_eq!(relay.status().unwrap(), before);
}
