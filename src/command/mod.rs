// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device command definitions.
//!
//! ZControl devices accept commands as plain `GET` requests to fixed CGI
//! resources. The response body carries nothing of interest; a command
//! succeeds when the request does. Commands never touch the local snapshot,
//! so an explicit update is needed to observe their effect.
//!
//! # Examples
//!
//! ```
//! use zctrl_lib::command::{AquanotCommand, Command};
//!
//! let cmd = AquanotCommand::SelfTest;
//! assert_eq!(cmd.resource(), "selftest.cgi");
//! assert_eq!(cmd.name(), "self-test");
//! ```

mod aquanot;

pub use aquanot::AquanotCommand;

/// A command that can be sent to a ZControl device.
pub trait Command {
    /// Returns the resource path, relative to the device base URL.
    fn resource(&self) -> &'static str;

    /// Returns a short human readable name, used in logs.
    fn name(&self) -> &'static str;
}
