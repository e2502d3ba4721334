// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::command::Command;
use crate::error::Result;
use crate::object::{Counter, Object};
use crate::protocol::Protocol;

impl<P: Protocol> Object<'_, Counter, P> {
    /// Resets the counter to zero.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub fn reset(&self) -> Result<()> {
        self.send(&Command::ResetCounter { id: self.id() })
    }
}
