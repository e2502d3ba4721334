// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ipx800_lib` - A Rust library to control GCE Electronics IPX800 V4
//! controllers.
//!
//! The controller exposes a JSON query API on `/api/xdevices.json`. This
//! library maps it onto typed collections of device objects. Every accessor
//! is one blocking HTTP request: nothing is cached except the number of
//! objects per category.
//!
//! # Supported Objects
//!
//! - **Relays** and **virtual inputs/outputs**: status, on, off, toggle
//! - **Analog inputs**: raw value and sensor conversions (volts, TC4012,
//!   TC100, X-HT-X3 probes)
//! - **Counters**: value and reset
//! - **X-THL extensions**: temperature, humidity, luminosity
//!
//! # Quick Start
//!
//! ```no_run
//! use ipx800_lib::Ipx800;
//!
//! fn main() -> ipx800_lib::Result<()> {
//!     let ipx = Ipx800::new("http://192.168.1.50")?;
//!
//!     // Index 0 is relay 1
//!     let relay = ipx.relays().get(0)?;
//!     if !relay.status()? {
//!         relay.on()?;
//!     }
//!
//!     for counter in ipx.counters().iter()? {
//!         println!("{}", counter.describe()?);
//!     }
//!
//!     let sensor = ipx.thl_extensions().get(0)?;
//!     println!("{:.1} °C", sensor.temperature()?);
//!     Ok(())
//! }
//! ```
//!
//! # Custom Configuration
//!
//! ```no_run
//! use std::time::Duration;
//! use ipx800_lib::{HttpConfig, Ipx800};
//!
//! # fn example() -> ipx800_lib::Result<()> {
//! let ipx = Ipx800::http(
//!     HttpConfig::new("192.168.1.50")
//!         .with_api_key("s3cret")
//!         .with_timeout(Duration::from_secs(5)),
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod collection;
pub mod command;
mod device;
pub mod error;
pub mod object;
pub mod protocol;
pub mod response;
pub mod types;

pub use collection::{Collection, CollectionIndex, Iter};
pub use command::Command;
pub use device::Ipx800;
pub use error::{ApiError, Error, IndexError, ParseError, ProtocolError, Result};
pub use object::{
    Analog, Counter, Kind, Measurable, Object, Relay, Switchable, ThlExtension, VirtualInput,
    VirtualOutput,
};
pub use protocol::{HttpClient, HttpClientBuilder, HttpConfig, Protocol, Query};
pub use response::{Envelope, Payload};
pub use types::{Category, CategoryDescriptor, SwitchState};
