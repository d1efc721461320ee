// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Battery state for battery-equipped devices.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Role of a battery within the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryType {
    /// Backup battery that powers the device when primary power is lost.
    Backup,
}

impl BatteryType {
    /// Returns the display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Backup => "Backup",
        }
    }
}

impl fmt::Display for BatteryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of a single battery.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Battery {
    /// Voltage in volts.
    pub voltage: Option<f64>,

    /// Charge current in amps.
    pub current: Option<f64>,

    /// Whether the battery is charging.
    pub is_charging: Option<bool>,

    /// Whether the battery voltage is low.
    pub is_low: Option<bool>,

    /// Whether the battery is missing.
    pub is_missing: Option<bool>,

    /// Whether the battery has been reported bad.
    pub is_bad: Option<bool>,
}

/// Battery capability group of a device snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatteryGroup {
    /// Batteries by type.
    pub batteries: BTreeMap<BatteryType, Battery>,

    /// Whether primary power is missing, leaving the device on battery.
    pub is_primary_power_missing: Option<bool>,
}

impl BatteryGroup {
    /// Returns the battery of the given type.
    #[must_use]
    pub fn get(&self, battery_type: BatteryType) -> Option<&Battery> {
        self.batteries.get(&battery_type)
    }
}
