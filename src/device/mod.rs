// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level device abstraction for ZControl devices.
//!
//! A [`Device`] pairs a [`DeviceModel`], which knows how to turn the
//! attributes of a status document into a [`DeviceState`], with a
//! [`Connection`] that fetches resources from the physical device.
//!
//! # Lifecycle
//!
//! A freshly created device holds an empty snapshot where every field is
//! `None`. [`Device::update`] is the only operation that changes it: each call
//! fetches `status.xml` and replaces the snapshot wholesale. If the fetch
//! fails the previous snapshot is left untouched.
//!
//! ```no_run
//! use zctrl_lib::device::{AquanotFit508, Device};
//! use zctrl_lib::protocol::{HttpConfig, HttpConnection};
//! use zctrl_lib::state::PumpType;
//!
//! # async fn example() -> zctrl_lib::Result<()> {
//! let mut device = Device::<AquanotFit508, HttpConnection>::http(HttpConfig::new("192.168.1.60"))?;
//! device.update().await?;
//!
//! if let Some(pump) = device.state().pump(PumpType::Dc) {
//!     println!("pump running: {:?}", pump.is_running);
//! }
//! # Ok(())
//! # }
//! ```

mod aquanot;

pub use aquanot::{Action, Alarm, AquanotFit508, AquanotFit508Device, Attribute};

use crate::attributes::AttributeMap;
use crate::capabilities::Capabilities;
use crate::command::Command;
use crate::error::Result;
use crate::protocol::{Connection, STATUS_PATH};
use crate::response::parse_status_document;
use crate::state::DeviceState;

#[cfg(feature = "http")]
use crate::protocol::{HttpConfig, HttpConnection};

/// A family of devices sharing one status document layout.
///
/// The model is the only place that binds raw attribute names to snapshot
/// fields.
pub trait DeviceModel {
    /// Manufacturer name.
    const MANUFACTURER: &'static str;

    /// Model name.
    const MODEL: &'static str;

    /// Capability groups this model populates.
    const CAPABILITIES: Capabilities;

    /// Commands accepted by this model.
    type Command: Command;

    /// Builds a complete snapshot from a status document's attributes.
    ///
    /// Must set every field the model owns. Attributes that are missing or
    /// unreadable map to `None`.
    fn process_attrs(&self, attrs: &AttributeMap) -> DeviceState;
}

/// A ZControl device.
///
/// # Type Parameters
///
/// - `M` - the [`DeviceModel`] describing the device family
/// - `C` - the [`Connection`] used to reach the device
#[derive(Debug)]
pub struct Device<M, C> {
    model: M,
    connection: C,
    state: DeviceState,
}

impl<M: DeviceModel, C: Connection> Device<M, C> {
    /// Creates a device with an empty snapshot.
    #[must_use]
    pub fn new(model: M, connection: C) -> Self {
        Self {
            model,
            connection,
            state: DeviceState::new(),
        }
    }

    /// Returns the device model.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Returns the connection.
    #[must_use]
    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Returns the manufacturer name.
    #[must_use]
    pub fn manufacturer(&self) -> &'static str {
        M::MANUFACTURER
    }

    /// Returns the model name.
    #[must_use]
    pub fn model_name(&self) -> &'static str {
        M::MODEL
    }

    /// Returns the capability groups of this device.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        M::CAPABILITIES
    }

    /// Returns the snapshot from the last successful update.
    #[must_use]
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Returns the device identifier.
    #[must_use]
    pub fn device_id(&self) -> Option<&str> {
        self.state.device_id.as_deref()
    }

    /// Returns the serial number.
    #[must_use]
    pub fn serial_number(&self) -> Option<&str> {
        self.state.serial_number.as_deref()
    }

    /// Returns the firmware version.
    #[must_use]
    pub fn firmware_version(&self) -> Option<&str> {
        self.state.firmware_version.as_deref()
    }

    /// Returns the seconds since the device booted.
    #[must_use]
    pub fn system_uptime(&self) -> Option<f64> {
        self.state.system_uptime
    }

    /// Returns whether a self-test is in progress.
    #[must_use]
    pub fn is_self_test_running(&self) -> Option<bool> {
        self.state.is_self_test_running
    }

    /// Fetches the status document and replaces the snapshot.
    ///
    /// # Errors
    ///
    /// Returns error if the status document cannot be fetched or is not
    /// well-formed XML. The previous snapshot is kept in that case.
    pub async fn update(&mut self) -> Result<()> {
        let body = self.connection.fetch_resource(STATUS_PATH).await?;
        let attrs = parse_status_document(&body)?;

        tracing::debug!(
            model = M::MODEL,
            attributes = attrs.len(),
            "Parsed status document"
        );

        let mut state = self.model.process_attrs(&attrs);
        let removed = state.restrict_to(M::CAPABILITIES);
        if !removed.is_empty() {
            tracing::warn!(
                model = M::MODEL,
                ?removed,
                "Model populated capability groups it does not declare"
            );
        }

        self.state = state;
        Ok(())
    }

    /// Sends a command to the device.
    ///
    /// The response body is discarded and the snapshot is not changed.
    ///
    /// # Errors
    ///
    /// Returns error if the command resource cannot be fetched.
    pub async fn send_command(&self, command: &M::Command) -> Result<()> {
        tracing::debug!(
            model = M::MODEL,
            command = command.name(),
            "Sending command"
        );
        self.connection.fetch_resource(command.resource()).await?;
        Ok(())
    }
}

#[cfg(feature = "http")]
impl<M: DeviceModel + Default> Device<M, HttpConnection> {
    /// Creates a device reached over HTTP.
    ///
    /// No request is made until [`update`](Self::update) or a command is
    /// called.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP connection cannot be created.
    pub fn http(config: HttpConfig) -> Result<Self> {
        Ok(Self::new(M::default(), config.into_connection()?))
    }
}
