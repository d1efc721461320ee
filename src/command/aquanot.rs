// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Aquanot commands.

use super::Command;

/// Commands accepted by Aquanot controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AquanotCommand {
    /// Runs the built-in self-test.
    SelfTest,
    /// Silences all audible alarms.
    SilenceAlarms,
    /// Acknowledges all faults and resets the device.
    AcknowledgeFaults,
}

impl AquanotCommand {
    /// All commands.
    pub const ALL: [Self; 3] = [Self::SelfTest, Self::SilenceAlarms, Self::AcknowledgeFaults];
}

impl Command for AquanotCommand {
    fn resource(&self) -> &'static str {
        match self {
            Self::SelfTest => "selftest.cgi",
            Self::SilenceAlarms => "silence.cgi",
            Self::AcknowledgeFaults => "ackfaults.cgi",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::SelfTest => "self-test",
            Self::SilenceAlarms => "silence alarms",
            Self::AcknowledgeFaults => "acknowledge faults",
        }
    }
}
