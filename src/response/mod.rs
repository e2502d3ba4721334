// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for IPX800 JSON answers.
//!
//! Every answer is a flat JSON object. Two keys form the envelope,
//! `status` and `product`; everything else is the payload, keyed by object
//! codes such as `R12`, `A3` or `THL1-TEMP`.

mod envelope;
mod payload;

pub use envelope::{EXPECTED_PRODUCT, Envelope, SUCCESS_STATUS};
pub use payload::Payload;
