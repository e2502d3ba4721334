// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IPX800 command definitions.
//!
//! | Command | Query | Purpose |
//! |---------|-------|---------|
//! | [`Command::Get`] | `Get=R` | Read every object of a category |
//! | [`Command::Set`] | `SetR=4` | Turn an object on |
//! | [`Command::Clear`] | `ClearR=4` | Turn an object off |
//! | [`Command::Toggle`] | `ToggleR=4` | Toggle an object |
//! | [`Command::ResetCounter`] | `SetC04=0` | Reset a counter to zero |
//!
//! # Examples
//!
//! ```
//! use ipx800_lib::command::Command;
//! use ipx800_lib::types::Category;
//!
//! let cmd = Command::Toggle { category: Category::VirtualOutput, id: 3 };
//! assert_eq!(cmd.to_query().to_string(), "ToggleVO=3");
//!
//! let reset = Command::ResetCounter { id: 4 };
//! assert_eq!(reset.to_query().to_string(), "SetC04=0");
//! ```

use std::fmt;

use crate::protocol::Query;
use crate::types::Category;

/// A request that can be sent to an IPX800.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Reads all objects of a category.
    Get(Category),
    /// Turns object `id` on.
    Set {
        /// Target category.
        category: Category,
        /// 1-based object id.
        id: usize,
    },
    /// Turns object `id` off.
    Clear {
        /// Target category.
        category: Category,
        /// 1-based object id.
        id: usize,
    },
    /// Toggles object `id`.
    Toggle {
        /// Target category.
        category: Category,
        /// 1-based object id.
        id: usize,
    },
    /// Resets counter `id` to zero.
    ResetCounter {
        /// 1-based counter id.
        id: usize,
    },
}

impl Command {
    /// Returns the query parameters of this command.
    #[must_use]
    pub fn to_query(&self) -> Query {
        match *self {
            Self::Get(category) => Query::new().with("Get", category.descriptor().get_code),
            Self::Set { category, id } => {
                Query::new().with(category.descriptor().set_prefix, id.to_string())
            }
            Self::Clear { category, id } => {
                Query::new().with(category.descriptor().clear_prefix, id.to_string())
            }
            Self::Toggle { category, id } => {
                Query::new().with(category.descriptor().toggle_prefix, id.to_string())
            }
            // The counter id is part of the parameter name, zero padded.
            Self::ResetCounter { id } => Query::new().with(
                format!("{}{id:02}", Category::Counter.descriptor().set_prefix),
                "0",
            ),
        }
    }

    /// Returns the category this command addresses.
    #[must_use]
    pub const fn category(&self) -> Category {
        match *self {
            Self::Get(category)
            | Self::Set { category, .. }
            | Self::Clear { category, .. }
            | Self::Toggle { category, .. } => category,
            Self::ResetCounter { .. } => Category::Counter,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_uses_category_code() {
        assert_eq!(Command::Get(Category::Relay).to_string(), "Get=R");
        assert_eq!(Command::Get(Category::Analog).to_string(), "Get=A");
        assert_eq!(Command::Get(Category::Counter).to_string(), "Get=C");
        assert_eq!(Command::Get(Category::VirtualInput).to_string(), "Get=VI");
        assert_eq!(Command::Get(Category::Extension).to_string(), "Get=XTHL");
    }

    #[test]
    fn switch_commands() {
        let relay = Category::Relay;
        assert_eq!(
            Command::Set {
                category: relay,
                id: 4
            }
            .to_string(),
            "SetR=4"
        );
        assert_eq!(
            Command::Clear {
                category: relay,
                id: 2
            }
            .to_string(),
            "ClearR=2"
        );
        assert_eq!(
            Command::Toggle {
                category: Category::VirtualInput,
                id: 8
            }
            .to_string(),
            "ToggleVI=8"
        );
    }

    #[test]
    fn reset_counter_pads_id() {
        assert_eq!(Command::ResetCounter { id: 1 }.to_string(), "SetC01=0");
        assert_eq!(Command::ResetCounter { id: 12 }.to_string(), "SetC12=0");
        assert_eq!(Command::ResetCounter { id: 123 }.to_string(), "SetC123=0");
    }

    #[test]
    fn category_of_command() {
        assert_eq!(Command::ResetCounter { id: 1 }.category(), Category::Counter);
        assert_eq!(
            Command::Set {
                category: Category::VirtualOutput,
                id: 1
            }
            .category(),
            Category::VirtualOutput
        );
    }
}
