// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The IPX800 session.
//!
//! [`Ipx800`] owns the transport and performs every request. Device objects
//! are reached through per-category [`Collection`]s:
//!
//! ```no_run
//! use ipx800_lib::Ipx800;
//!
//! # fn example() -> ipx800_lib::Result<()> {
//! let ipx = Ipx800::with_api_key("http://192.168.1.50", "s3cret")?;
//!
//! println!("{} relays", ipx.relays().len()?);
//! let relay = ipx.relays().get(4)?;
//! relay.toggle()?;
//! println!("{}", relay.describe()?);
//!
//! for analog in ipx.analogs().iter()? {
//!     println!("A{} = {:.2} V", analog.id(), analog.as_volt()?);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::OnceLock;

use crate::collection::Collection;
use crate::command::Command;
use crate::error::Result;
use crate::object::{Analog, Counter, Kind, Relay, ThlExtension, VirtualInput, VirtualOutput};
use crate::protocol::{HttpClient, HttpClientBuilder, HttpConfig, Protocol, Query};
use crate::response::{EXPECTED_PRODUCT, Envelope, Payload};
use crate::types::Category;

/// A connection to one IPX800 controller.
///
/// The session is immutable apart from the per-category object counts, which
/// are probed on first use and kept for the lifetime of the session: the
/// device topology is treated as static.
#[derive(Debug)]
pub struct Ipx800<P = HttpClient> {
    protocol: P,
    lengths: [OnceLock<usize>; Category::COUNT],
}

impl Ipx800 {
    /// Connects to `url` with the factory API key.
    ///
    /// # Errors
    ///
    /// Returns error if the address is empty or the HTTP client cannot be
    /// created.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Ok(Self::from_protocol(HttpClient::new(url)?))
    }

    /// Connects to `url` with a custom API key.
    ///
    /// # Errors
    ///
    /// Returns error if the address is empty or the HTTP client cannot be
    /// created.
    pub fn with_api_key(url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = HttpClientBuilder::new().host(url).api_key(api_key).build()?;
        Ok(Self::from_protocol(client))
    }

    /// Connects using a full HTTP configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn http(config: HttpConfig) -> Result<Self> {
        Ok(Self::from_protocol(config.into_client()?))
    }
}

impl<P: Protocol> Ipx800<P> {
    /// Creates a session over an arbitrary transport.
    pub fn from_protocol(protocol: P) -> Self {
        Self {
            protocol,
            lengths: std::array::from_fn(|_| OnceLock::new()),
        }
    }

    /// Returns the underlying transport.
    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    /// Sends a raw query and unwraps the answer.
    ///
    /// A `product` other than `IPX800_V4` is logged as a warning and does not
    /// fail the request.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the exchange fails, `Error::Parse` if the
    /// body is not a JSON object, and `Error::Api` if the device reports a
    /// status other than the string `Success`.
    pub fn request(&self, query: &Query) -> Result<Payload> {
        let body = self.protocol.send(query)?;
        let envelope = Envelope::parse(&body)?;

        if let Some(product) = envelope
            .product_value()
            .filter(|_| envelope.is_foreign_product())
        {
            tracing::warn!(
                product = %product,
                expected = EXPECTED_PRODUCT,
                "Device might not be compatible"
            );
        }

        Ok(envelope.into_payload(query)?)
    }

    /// Sends a command and unwraps the answer.
    ///
    /// # Errors
    ///
    /// Same as [`Ipx800::request`].
    pub fn execute(&self, command: &Command) -> Result<Payload> {
        self.request(&command.to_query())
    }

    /// Returns the number of objects in `category`, probing the device once.
    ///
    /// Simple categories count the keys of the answer. An extension reports
    /// several `THL<n>-*` keys and counts once.
    pub(crate) fn category_len(&self, category: Category) -> Result<usize> {
        let cell = &self.lengths[category.ordinal()];
        if let Some(len) = cell.get() {
            return Ok(*len);
        }

        let payload = self.execute(&Command::Get(category))?;
        let len = match category {
            Category::Extension => payload.object_count(),
            _ => payload.len(),
        };
        tracing::trace!(%category, len, "Cached collection length");

        // A concurrent probe may have won; both saw the same topology.
        Ok(*cell.get_or_init(|| len))
    }

    /// Returns the object count of `category` if it has been probed.
    #[must_use]
    pub fn cached_len(&self, category: Category) -> Option<usize> {
        self.lengths[category.ordinal()].get().copied()
    }

    /// Returns the collection of objects of kind `K`.
    #[must_use]
    pub fn collection<K: Kind>(&self) -> Collection<'_, K, P> {
        Collection::new(self)
    }

    /// Physical relays.
    #[must_use]
    pub fn relays(&self) -> Collection<'_, Relay, P> {
        self.collection()
    }

    /// Analog inputs.
    #[must_use]
    pub fn analogs(&self) -> Collection<'_, Analog, P> {
        self.collection()
    }

    /// Counters.
    #[must_use]
    pub fn counters(&self) -> Collection<'_, Counter, P> {
        self.collection()
    }

    /// Virtual inputs.
    #[must_use]
    pub fn virtual_inputs(&self) -> Collection<'_, VirtualInput, P> {
        self.collection()
    }

    /// Virtual outputs.
    #[must_use]
    pub fn virtual_outputs(&self) -> Collection<'_, VirtualOutput, P> {
        self.collection()
    }

    /// X-THL temperature/humidity/luminosity extensions.
    #[must_use]
    pub fn thl_extensions(&self) -> Collection<'_, ThlExtension, P> {
        self.collection()
    }
}
