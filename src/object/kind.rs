// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Type-level object kinds.
//!
//! Each marker type selects a [`Category`] for [`Object`](super::Object) and
//! [`Collection`](crate::collection::Collection). The [`Switchable`] and
//! [`Measurable`] traits gate which operations a kind offers.

use crate::types::Category;

mod sealed {
    pub trait Sealed {}
}

/// An object kind, bound to one [`Category`].
pub trait Kind: sealed::Sealed {
    /// The category of objects of this kind.
    const CATEGORY: Category;
}

/// Kinds that can be read as on/off and switched.
pub trait Switchable: Kind {}

/// Kinds that report an integer value.
pub trait Measurable: Kind {}

macro_rules! kind {
    ($(#[$meta:meta])* $name:ident => $category:ident $(, $capability:ident)*) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {}

        impl sealed::Sealed for $name {}

        impl Kind for $name {
            const CATEGORY: Category = Category::$category;
        }

        $(impl $capability for $name {})*
    };
}

kind!(
    /// A physical relay.
    Relay => Relay, Switchable
);
kind!(
    /// A virtual input.
    VirtualInput => VirtualInput, Switchable
);
kind!(
    /// A virtual output.
    VirtualOutput => VirtualOutput, Switchable
);
kind!(
    /// An analog input.
    Analog => Analog, Measurable
);
kind!(
    /// A counter.
    Counter => Counter, Measurable
);
kind!(
    /// An X-THL temperature/humidity/luminosity extension.
    ThlExtension => Extension
);
