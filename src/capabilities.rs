// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device capabilities.
//!
//! ZControl controllers come in several flavours: some carry a backup
//! battery, some monitor floats, some drive pumps. A device model declares
//! which of these groups it has, and only those groups appear in its
//! [`DeviceState`](crate::state::DeviceState).

use std::fmt;

/// Equipment groups a device model reports on.
///
/// # Examples
///
/// ```
/// use zctrl_lib::Capabilities;
///
/// let caps = Capabilities::builder().batteries().pumps().build();
/// assert!(caps.supports_batteries());
/// assert!(!caps.supports_floats());
/// assert_eq!(caps.to_string(), "batteries, pumps");
///
/// assert_eq!(Capabilities::default(), Capabilities::none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// Reports on one or more batteries.
    pub batteries: bool,

    /// Reports on one or more water-level floats.
    pub floats: bool,

    /// Reports on one or more pumps.
    pub pumps: bool,
}

impl Capabilities {
    /// No equipment groups, identity and firmware only.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            batteries: false,
            floats: false,
            pumps: false,
        }
    }

    /// Batteries, floats and pumps.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            batteries: true,
            floats: true,
            pumps: true,
        }
    }

    /// Creates a builder starting from [`none`](Self::none).
    #[must_use]
    pub fn builder() -> CapabilitiesBuilder {
        CapabilitiesBuilder::default()
    }

    /// Returns `true` if the device reports battery state.
    #[must_use]
    pub const fn supports_batteries(&self) -> bool {
        self.batteries
    }

    /// Returns `true` if the device reports float state.
    #[must_use]
    pub const fn supports_floats(&self) -> bool {
        self.floats
    }

    /// Returns `true` if the device reports pump state.
    #[must_use]
    pub const fn supports_pumps(&self) -> bool {
        self.pumps
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (self.batteries, "batteries"),
            (self.floats, "floats"),
            (self.pumps, "pumps"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();

        if names.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&names.join(", "))
        }
    }
}

/// Builder for [`Capabilities`].
#[derive(Debug, Default)]
pub struct CapabilitiesBuilder {
    caps: Capabilities,
}

impl CapabilitiesBuilder {
    /// Adds battery reporting.
    #[must_use]
    pub fn batteries(mut self) -> Self {
        self.caps.batteries = true;
        self
    }

    /// Adds float reporting.
    #[must_use]
    pub fn floats(mut self) -> Self {
        self.caps.floats = true;
        self
    }

    /// Adds pump reporting.
    #[must_use]
    pub fn pumps(mut self) -> Self {
        self.caps.pumps = true;
        self
    }

    /// Builds the capabilities.
    #[must_use]
    pub fn build(self) -> Capabilities {
        self.caps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_and_all() {
        let none = Capabilities::none();
        assert!(!none.supports_batteries());
        assert!(!none.supports_floats());
        assert!(!none.supports_pumps());

        let all = Capabilities::all();
        assert!(all.supports_batteries());
        assert!(all.supports_floats());
        assert!(all.supports_pumps());
    }

    #[test]
    fn builder_composes_groups() {
        let caps = Capabilities::builder().floats().build();
        assert_eq!(
            caps,
            Capabilities {
                batteries: false,
                floats: true,
                pumps: false,
            }
        );
    }

    #[test]
    fn display() {
        assert_eq!(Capabilities::none().to_string(), "none");
        assert_eq!(Capabilities::all().to_string(), "batteries, floats, pumps");
    }
}
