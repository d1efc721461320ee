// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state types.
//!
//! [`DeviceState`] is the snapshot a device holds between updates. The
//! battery, float and pump types are the shapes of the optional capability
//! groups inside it. Snapshots are replaced wholesale on every update; nothing
//! is merged with the previous one.

mod battery;
mod device_state;
mod float;
mod pump;

pub use battery::{Battery, BatteryGroup, BatteryType};
pub use device_state::DeviceState;
pub use float::{Float, FloatState, FloatType, Floats};
pub use pump::{Pump, PumpType, Pumps};
