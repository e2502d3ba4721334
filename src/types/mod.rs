// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for IPX800 objects.
//!
//! - [`Category`] / [`CategoryDescriptor`] - object kinds and their wire codes
//! - [`SwitchState`] - On/Off state of relays and virtual I/O
//! - [`conversion`] - analog raw value transfer functions

mod category;
pub mod conversion;
mod switch;

pub use category::{Category, CategoryDescriptor};
pub use switch::SwitchState;
