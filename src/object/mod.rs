// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Handles to individual IPX800 objects.
//!
//! An [`Object`] is only an id and a reference to the session. It never
//! caches device state: every accessor sends one fresh request.
//!
//! | Kind | Operations |
//! |------|------------|
//! | [`Relay`], [`VirtualInput`], [`VirtualOutput`] | `status`, `state`, `on`, `off`, `toggle` |
//! | [`Analog`] | `value`, `as_volt`, sensor conversions |
//! | [`Counter`] | `value`, `reset` |
//! | [`ThlExtension`] | `temperature`, `humidity`, `luminosity` |

mod analog;
mod counter;
mod extension;
mod kind;
mod switch;

pub use kind::{
    Analog, Counter, Kind, Measurable, Relay, Switchable, ThlExtension, VirtualInput,
    VirtualOutput,
};

use std::fmt;
use std::marker::PhantomData;

use serde_json::Value;

use crate::command::Command;
use crate::device::Ipx800;
use crate::error::Result;
use crate::protocol::{HttpClient, Protocol};
use crate::response::Payload;
use crate::types::{Category, SwitchState};

/// One object of kind `K`, identified by its 1-based device id.
///
/// Two handles with the same kind and id compare equal.
pub struct Object<'a, K, P = HttpClient> {
    device: &'a Ipx800<P>,
    id: usize,
    kind: PhantomData<fn() -> K>,
}

impl<'a, K: Kind, P: Protocol> Object<'a, K, P> {
    pub(crate) fn new(device: &'a Ipx800<P>, id: usize) -> Self {
        Self {
            device,
            id,
            kind: PhantomData,
        }
    }

    /// Returns the 1-based device id.
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the category of this object.
    #[must_use]
    pub fn category(&self) -> Category {
        K::CATEGORY
    }

    /// Renders the object with its current state, e.g.
    /// `[relay: id=1, status=On]` or `[analog: id=2, value=44591]`.
    ///
    /// Sends the same requests as the matching accessors.
    ///
    /// # Errors
    ///
    /// Returns error if reading the state fails.
    pub fn describe(&self) -> Result<String> {
        let name = K::CATEGORY.descriptor().name;
        let id = self.id;
        Ok(match K::CATEGORY {
            Category::Relay | Category::VirtualInput | Category::VirtualOutput => {
                format!("[{name}: id={id}, status={}]", self.read_state()?)
            }
            Category::Analog | Category::Counter => {
                format!("[{name}: id={id}, value={}]", self.read_value()?)
            }
            Category::Extension => format!(
                "[{name}: id={id}, temperature={}, humidity={}, luminosity={}]",
                self.read_sub_value(extension::TEMPERATURE)?,
                self.read_sub_value(extension::HUMIDITY)?,
                self.read_sub_value(extension::LUMINOSITY)?,
            ),
        })
    }

    fn fetch(&self) -> Result<Payload> {
        self.device.execute(&Command::Get(K::CATEGORY))
    }

    fn key(&self) -> String {
        K::CATEGORY.descriptor().key(self.id)
    }

    /// Absent keys read as off.
    fn read_state(&self) -> Result<SwitchState> {
        let payload = self.fetch()?;
        Ok(payload
            .get(&self.key())
            .and_then(Value::as_i64)
            .map_or(SwitchState::Off, SwitchState::from_raw))
    }

    fn read_value(&self) -> Result<i64> {
        Ok(self.fetch()?.get_i64(&self.key())?)
    }

    fn read_sub_value(&self, suffix: &str) -> Result<f64> {
        let key = K::CATEGORY.descriptor().sub_key(self.id, suffix);
        Ok(self.fetch()?.get_f64(&key)?)
    }

    fn send(&self, command: &Command) -> Result<()> {
        self.device.execute(command).map(drop)
    }
}

impl<K, P> Clone for Object<'_, K, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, P> Copy for Object<'_, K, P> {}

impl<K, P> PartialEq for Object<'_, K, P> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<K, P> Eq for Object<'_, K, P> {}

impl<K: Kind, P> fmt::Debug for Object<'_, K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<ipx800.{} id={}>",
            K::CATEGORY.descriptor().name,
            self.id
        )
    }
}
