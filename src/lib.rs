// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ZCtrl` Lib - A Rust library to monitor ZControl® pump controllers.
//!
//! This library polls a ZControl device over HTTP, parses its XML status
//! document and exposes the device's batteries, floats, pumps and alarms as
//! typed, optional values. It can also send the simple commands the device
//! understands (self-test, silence alarms, acknowledge faults).
//!
//! # Supported Devices
//!
//! - Aquanot® Fit 508 battery backup pump controller
//!
//! # Absent Values
//!
//! Every field of a [`DeviceState`] is an `Option`. A field is `None` before
//! the first update, when the device does not report it, and when the reported
//! value cannot be read. A single bad reading never fails an update.
//!
//! # Quick Start
//!
//! ```no_run
//! use zctrl_lib::device::AquanotFit508Device;
//! use zctrl_lib::protocol::{HttpConfig, HttpConnection};
//! use zctrl_lib::state::{BatteryType, FloatType};
//!
//! #[tokio::main]
//! async fn main() -> zctrl_lib::Result<()> {
//!     let mut device = AquanotFit508Device::<HttpConnection>::http(HttpConfig::new("192.168.1.60"))?;
//!     device.update().await?;
//!
//!     let state = device.state();
//!     if let Some(battery) = state.battery(BatteryType::Backup) {
//!         println!("battery: {:?} V", battery.voltage);
//!     }
//!     if let Some(float) = state.float(FloatType::HighWater) {
//!         println!("high water float: {:?}", float.state());
//!     }
//!
//!     if state.has_active_alarms() == Some(true) {
//!         device.silence_alarms().await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Custom Transports
//!
//! Anything implementing [`Connection`] can drive a device, which is how the
//! tests feed canned status documents:
//!
//! ```
//! use zctrl_lib::device::{AquanotFit508, Device};
//! use zctrl_lib::error::ConnectionError;
//! use zctrl_lib::protocol::Connection;
//!
//! struct Canned(&'static str);
//!
//! impl Connection for Canned {
//!     async fn fetch_resource(&self, _path: &str) -> Result<String, ConnectionError> {
//!         Ok(self.0.to_string())
//!     }
//! }
//!
//! let device = Device::new(AquanotFit508, Canned("<response/>"));
//! assert_eq!(device.device_id(), None);
//! ```

pub mod attributes;
mod capabilities;
pub mod command;
pub mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod state;

pub use attributes::{AttributeKey, AttributeMap, Bitmask};
pub use capabilities::{Capabilities, CapabilitiesBuilder};
pub use command::{AquanotCommand, Command};
pub use device::{AquanotFit508, AquanotFit508Device, Device, DeviceModel};
pub use error::{ConnectionError, Error, ParseError, Result};
pub use protocol::Connection;
#[cfg(feature = "http")]
pub use protocol::{HttpConfig, HttpConnection};
pub use state::{
    Battery, BatteryGroup, BatteryType, DeviceState, Float, FloatState, FloatType, Pump, PumpType,
};
