// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device snapshot.

use std::time::Duration;

use serde::Serialize;

use super::{Battery, BatteryGroup, BatteryType, Float, FloatType, Floats, Pump, PumpType, Pumps};
use crate::capabilities::Capabilities;

/// Snapshot of a device as of its last successful update.
///
/// Every field is optional: a field is `None` before the first update and
/// whenever the latest status document did not carry a usable value for it.
/// Capability groups (`batteries`, `floats`, `pumps`) are only present for
/// models that declare them.
///
/// # Examples
///
/// ```
/// use zctrl_lib::state::DeviceState;
///
/// let state = DeviceState::new();
/// assert_eq!(state.device_id, None);
/// assert_eq!(state.has_active_alarms(), None);
/// assert!(state.floats.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceState {
    /// Unique identifier of the device.
    pub device_id: Option<String>,

    /// Serial number. Same value as `device_id` on current models.
    pub serial_number: Option<String>,

    /// Firmware version string.
    pub firmware_version: Option<String>,

    /// Seconds since the device booted.
    pub system_uptime: Option<f64>,

    /// Whether a self-test is in progress.
    pub is_self_test_running: Option<bool>,

    /// Raw alarm bitmask.
    pub alarms: Option<i64>,

    /// Battery capability group.
    pub batteries: Option<BatteryGroup>,

    /// Float capability group.
    pub floats: Option<Floats>,

    /// Pump capability group.
    pub pumps: Option<Pumps>,
}

impl DeviceState {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the uptime as a [`Duration`].
    #[must_use]
    pub fn uptime(&self) -> Option<Duration> {
        self.system_uptime
            .and_then(|s| Duration::try_from_secs_f64(s).ok())
    }

    /// Returns `true` if any alarm bit is set.
    #[must_use]
    pub fn has_active_alarms(&self) -> Option<bool> {
        self.alarms.map(|bits| bits != 0)
    }

    /// Returns whether primary power is missing.
    #[must_use]
    pub fn is_primary_power_missing(&self) -> Option<bool> {
        self.batteries
            .as_ref()
            .and_then(|group| group.is_primary_power_missing)
    }

    /// Returns the battery of the given type.
    #[must_use]
    pub fn battery(&self, battery_type: BatteryType) -> Option<&Battery> {
        self.batteries.as_ref()?.get(battery_type)
    }

    /// Returns the float of the given type.
    #[must_use]
    pub fn float(&self, float_type: FloatType) -> Option<&Float> {
        self.floats.as_ref()?.get(&float_type)
    }

    /// Returns the pump of the given type.
    #[must_use]
    pub fn pump(&self, pump_type: PumpType) -> Option<&Pump> {
        self.pumps.as_ref()?.get(&pump_type)
    }

    /// Drops capability groups that `capabilities` does not include.
    ///
    /// Returns the names of the groups that were removed.
    pub fn restrict_to(&mut self, capabilities: Capabilities) -> Vec<&'static str> {
        let mut removed = Vec::new();
        if !capabilities.batteries && self.batteries.take().is_some() {
            removed.push("batteries");
        }
        if !capabilities.floats && self.floats.take().is_some() {
            removed.push("floats");
        }
        if !capabilities.pumps && self.pumps.take().is_some() {
            removed.push("pumps");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> DeviceState {
        DeviceState {
            device_id: Some("pit".to_string()),
            batteries: Some(BatteryGroup::default()),
            floats: Some(Floats::new()),
            pumps: Some(Pumps::new()),
            ..DeviceState::default()
        }
    }

    #[test]
    fn has_active_alarms() {
        let mut state = DeviceState::new();
        assert_eq!(state.has_active_alarms(), None);
        state.alarms = Some(0);
        assert_eq!(state.has_active_alarms(), Some(false));
        state.alarms = Some(1 << 11);
        assert_eq!(state.has_active_alarms(), Some(true));
    }

    #[test]
    fn uptime_duration() {
        let state = DeviceState {
            system_uptime: Some(120.5),
            ..DeviceState::default()
        };
        assert_eq!(state.uptime(), Some(Duration::from_millis(120_500)));
    }

    #[test]
    fn restrict_to_removes_undeclared_groups() {
        let mut state = populated();
        let removed = state.restrict_to(Capabilities::builder().pumps().build());

        assert_eq!(removed, vec!["batteries", "floats"]);
        assert!(state.batteries.is_none());
        assert!(state.floats.is_none());
        assert!(state.pumps.is_some());
        assert_eq!(state.device_id.as_deref(), Some("pit"));
    }

    #[test]
    fn restrict_to_all_keeps_everything() {
        let mut state = populated();
        assert!(state.restrict_to(Capabilities::all()).is_empty());
        assert_eq!(state, populated());
    }

    #[test]
    fn lookups_on_missing_groups() {
        let state = DeviceState::new();
        assert!(state.battery(BatteryType::Backup).is_none());
        assert!(state.float(FloatType::Operational).is_none());
        assert!(state.pump(PumpType::Dc).is_none());
        assert_eq!(state.is_primary_power_missing(), None);
    }
}
