// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operations of relays and virtual inputs/outputs.

use crate::command::Command;
use crate::error::Result;
use crate::object::{Object, Switchable};
use crate::protocol::Protocol;
use crate::types::SwitchState;

impl<K: Switchable, P: Protocol> Object<'_, K, P> {
    /// Returns `true` if the object is on.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub fn status(&self) -> Result<bool> {
        Ok(self.read_state()?.is_on())
    }

    /// Returns the current state.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub fn state(&self) -> Result<SwitchState> {
        self.read_state()
    }

    /// Turns the object on.
    ///
    /// The device does not echo the new state: `Ok(true)` only means the
    /// request was accepted.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub fn on(&self) -> Result<bool> {
        self.send(&Command::Set {
            category: K::CATEGORY,
            id: self.id(),
        })?;
        Ok(true)
    }

    /// Turns the object off. See [`Object::on`].
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub fn off(&self) -> Result<bool> {
        self.send(&Command::Clear {
            category: K::CATEGORY,
            id: self.id(),
        })?;
        Ok(true)
    }

    /// Toggles the object. See [`Object::on`].
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub fn toggle(&self) -> Result<bool> {
        self.send(&Command::Toggle {
            category: K::CATEGORY,
            id: self.id(),
        })?;
        Ok(true)
    }

    /// Switches the object to `state`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub fn set_state(&self, state: SwitchState) -> Result<bool> {
        match state {
            SwitchState::On => self.on(),
            SwitchState::Off => self.off(),
        }
    }
}
