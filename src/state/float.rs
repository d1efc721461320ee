// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Float switch state for float-equipped devices.
//!
//! A float is a water-level switch. Devices report four raw flags per float
//! and [`Float::state`] condenses them into a single [`FloatState`].

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Role of a float within the pit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatType {
    /// Float that switches the pump on and off.
    Operational,
    /// Float that signals a high water level.
    HighWater,
}

impl FloatType {
    /// Returns the display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Operational => "Operational",
            Self::HighWater => "High Water",
        }
    }
}

impl fmt::Display for FloatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Condensed state of a float.
///
/// Ordered by precedence: when several conditions hold at once the first
/// one listed is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatState {
    /// The float has never been detected.
    NeverPresent,
    /// The float is missing.
    Missing,
    /// The float is malfunctioning.
    Malfunctioning,
    /// The float is raised.
    Active,
    /// The float is lowered.
    Inactive,
}

impl FloatState {
    /// Returns the display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NeverPresent => "Never Present",
            Self::Missing => "Missing",
            Self::Malfunctioning => "Malfunctioning",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for FloatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of a single float.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Float {
    /// Whether the float is raised.
    pub is_active: Option<bool>,

    /// Lifetime activation count.
    pub activation_count: Option<i64>,

    /// Whether the float is malfunctioning.
    pub is_malfunctioning: Option<bool>,

    /// Whether the float is missing.
    pub is_missing: Option<bool>,

    /// Whether the float was never present.
    pub never_present: Option<bool>,
}

impl Float {
    /// Derives the condensed state from the raw flags.
    ///
    /// Returns `None` when no fault flag is set and `is_active` is unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use zctrl_lib::state::{Float, FloatState};
    ///
    /// let float = Float {
    ///     is_active: Some(true),
    ///     is_missing: Some(true),
    ///     ..Float::default()
    /// };
    /// assert_eq!(float.state(), Some(FloatState::Missing));
    /// assert_eq!(Float::default().state(), None);
    /// ```
    #[must_use]
    pub fn state(&self) -> Option<FloatState> {
        if self.never_present == Some(true) {
            Some(FloatState::NeverPresent)
        } else if self.is_missing == Some(true) {
            Some(FloatState::Missing)
        } else if self.is_malfunctioning == Some(true) {
            Some(FloatState::Malfunctioning)
        } else {
            self.is_active.map(|active| {
                if active {
                    FloatState::Active
                } else {
                    FloatState::Inactive
                }
            })
        }
    }
}

/// Floats by type.
pub type Floats = BTreeMap<FloatType, Float>;
