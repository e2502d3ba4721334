// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Object categories exposed by the IPX800 API.
//!
//! Every category is addressed the same way on the wire: `Get=<code>` lists
//! all objects of the category as `<key prefix><id>` keys, and switch-like
//! categories accept `Set<code>=<id>`, `Clear<code>=<id>` and
//! `Toggle<code>=<id>`. [`CategoryDescriptor`] holds those codes as data so a
//! single handle type can serve all categories.

use std::fmt;

/// A kind of object on the controller.
///
/// # Examples
///
/// ```
/// use ipx800_lib::types::Category;
///
/// let relay = Category::Relay.descriptor();
/// assert_eq!(relay.get_code, "R");
/// assert_eq!(relay.key(12), "R12");
///
/// let thl = Category::Extension.descriptor();
/// assert_eq!(thl.sub_key(1, "TEMP"), "THL1-TEMP");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Physical relay outputs.
    Relay,
    /// Virtual inputs.
    VirtualInput,
    /// Virtual outputs.
    VirtualOutput,
    /// Analog inputs.
    Analog,
    /// Counters.
    Counter,
    /// X-THL temperature/humidity/luminosity extensions.
    Extension,
}

/// Wire codes of a [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDescriptor {
    /// Human readable name used when rendering objects.
    pub name: &'static str,
    /// Value of the `Get` parameter listing the category.
    pub get_code: &'static str,
    /// Parameter turning an object on.
    pub set_prefix: &'static str,
    /// Parameter turning an object off.
    pub clear_prefix: &'static str,
    /// Parameter toggling an object.
    pub toggle_prefix: &'static str,
    /// Prefix of the response keys, followed by the object id.
    pub key_prefix: &'static str,
}

impl CategoryDescriptor {
    /// Returns the response key of object `id`, e.g. `R12`.
    #[must_use]
    pub fn key(&self, id: usize) -> String {
        format!("{}{id}", self.key_prefix)
    }

    /// Returns the response key of a sub-value of object `id`,
    /// e.g. `THL1-TEMP`.
    #[must_use]
    pub fn sub_key(&self, id: usize, suffix: &str) -> String {
        format!("{}{id}-{suffix}", self.key_prefix)
    }
}

static DESCRIPTORS: [CategoryDescriptor; Category::COUNT] = [
    CategoryDescriptor {
        name: "relay",
        get_code: "R",
        set_prefix: "SetR",
        clear_prefix: "ClearR",
        toggle_prefix: "ToggleR",
        key_prefix: "R",
    },
    CategoryDescriptor {
        name: "virtual-input",
        get_code: "VI",
        set_prefix: "SetVI",
        clear_prefix: "ClearVI",
        toggle_prefix: "ToggleVI",
        key_prefix: "VI",
    },
    CategoryDescriptor {
        name: "virtual-output",
        get_code: "VO",
        set_prefix: "SetVO",
        clear_prefix: "ClearVO",
        toggle_prefix: "ToggleVO",
        key_prefix: "VO",
    },
    CategoryDescriptor {
        name: "analog",
        get_code: "A",
        set_prefix: "SetA",
        clear_prefix: "ClearA",
        toggle_prefix: "ToggleA",
        key_prefix: "A",
    },
    CategoryDescriptor {
        name: "counter",
        get_code: "C",
        set_prefix: "SetC",
        clear_prefix: "ClearC",
        toggle_prefix: "ToggleC",
        key_prefix: "C",
    },
    CategoryDescriptor {
        name: "thl-extension",
        get_code: "XTHL",
        set_prefix: "SetXTHL",
        clear_prefix: "ClearXTHL",
        toggle_prefix: "ToggleXTHL",
        key_prefix: "THL",
    },
];

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 6;

    /// All categories, in declaration order.
    pub const ALL: [Category; Self::COUNT] = [
        Self::Relay,
        Self::VirtualInput,
        Self::VirtualOutput,
        Self::Analog,
        Self::Counter,
        Self::Extension,
    ];

    /// Returns the wire codes of this category.
    #[must_use]
    pub fn descriptor(self) -> &'static CategoryDescriptor {
        &DESCRIPTORS[self.ordinal()]
    }

    /// Returns the position of this category in [`Category::ALL`].
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Relay => 0,
            Self::VirtualInput => 1,
            Self::VirtualOutput => 2,
            Self::Analog => 3,
            Self::Counter => 4,
            Self::Extension => 5,
        }
    }

    /// Returns whether objects of this category can be switched on and off.
    #[must_use]
    pub const fn is_switch(self) -> bool {
        matches!(self, Self::Relay | Self::VirtualInput | Self::VirtualOutput)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().name)
    }
}
