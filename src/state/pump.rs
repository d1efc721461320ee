// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pump state for pump-equipped devices.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Kind of pump driven by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PumpType {
    /// DC backup pump.
    Dc,
}

impl PumpType {
    /// Returns the display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dc => "DC",
        }
    }
}

impl fmt::Display for PumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of a single pump.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Pump {
    /// Motor current in amps.
    pub current: Option<f64>,

    /// Whether the pump is running.
    pub is_running: Option<bool>,

    /// Lifetime runtime in seconds.
    pub runtime: Option<f64>,

    /// Whether the pump has detected an airlock.
    pub airlock_detected: Option<bool>,
}

impl Pump {
    /// Returns the lifetime runtime as a [`Duration`].
    ///
    /// `None` if the runtime is unknown or not a valid duration.
    #[must_use]
    pub fn runtime_duration(&self) -> Option<Duration> {
        self.runtime.and_then(|s| Duration::try_from_secs_f64(s).ok())
    }
}

/// Pumps by type.
pub type Pumps = BTreeMap<PumpType, Pump>;
