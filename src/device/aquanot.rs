// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Aquanot® Fit 508 battery backup pump controller.
//!
//! The Fit 508 carries one backup battery, an operational and a high water
//! float, and drives one DC pump.
//!
//! | Field | Attribute | Transform |
//! |-------|-----------|-----------|
//! | `device_id`, `serial_number` | `deviceid` | text |
//! | `firmware_version` | `firm` | text |
//! | `system_uptime` | `nt` | × 0.1 |
//! | `is_self_test_running` | `action` | [`Action::SelfTestRunning`] bit |
//! | battery `voltage` / `current` | `batteryv` / `chargei` | × 0.01 |
//! | battery `is_charging` | `chargestate` | bool |
//! | pump `current` / `runtime` | `motori` / `mrt` | × 0.1 |
//! | pump `is_running` / `airlock_detected` | `pump` / `airllogic` | bool |
//! | float `is_active` | `of` / `hiwaterfloat` | bool |
//! | float `activation_count` | `ofc` / `hi` | int |
//! | float `never_present` | `opnevpres` / `hinevpres` | bool |
//! | fault flags | `alarms` | [`Alarm`] bits |

use std::fmt;

use super::{Device, DeviceModel};
use crate::attributes::{AttributeKey, AttributeMap, Bitmask, has_all_bits};
use crate::capabilities::Capabilities;
use crate::command::AquanotCommand;
use crate::error::Result;
use crate::protocol::Connection;
use crate::state::{
    Battery, BatteryGroup, BatteryType, DeviceState, Float, FloatType, Floats, Pump, PumpType,
    Pumps,
};

/// Attributes of the Aquanot status document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Device identifier / serial number.
    DeviceId,
    /// Firmware version.
    FirmwareVersion,
    /// Uptime counter in tenths of a second.
    SystemUptime,

    /// DC pump motor current in tenths of an amp.
    DcPumpCurrent,
    /// DC pump runtime in tenths of a second.
    DcPumpRuntime,
    /// DC pump running flag.
    DcPumpIsRunning,
    /// DC pump airlock flag.
    DcPumpAirlockDetected,

    /// Operational float raised flag.
    OperationalFloatIsActive,
    /// Operational float activation counter.
    OperationalFloatActivationCount,
    /// Operational float never-present flag.
    OperationalFloatNeverPresent,

    /// High water float raised flag.
    HighWaterFloatIsActive,
    /// High water float activation counter.
    HighWaterFloatActivationCount,
    /// High water float never-present flag.
    HighWaterFloatNeverPresent,

    /// Battery voltage in hundredths of a volt.
    BatteryVoltage,
    /// Battery charge current in hundredths of an amp.
    BatteryCurrent,
    /// Battery charging flag.
    BatteryIsCharging,

    /// Action bitmask, see [`Action`].
    Action,
    /// Alarm bitmask, see [`Alarm`].
    Alarms,
}

impl Attribute {
    /// Returns the raw attribute name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DeviceId => "deviceid",
            Self::FirmwareVersion => "firm",
            Self::SystemUptime => "nt",
            Self::DcPumpCurrent => "motori",
            Self::DcPumpRuntime => "mrt",
            Self::DcPumpIsRunning => "pump",
            Self::DcPumpAirlockDetected => "airllogic",
            Self::OperationalFloatIsActive => "of",
            Self::OperationalFloatActivationCount => "ofc",
            Self::OperationalFloatNeverPresent => "opnevpres",
            Self::HighWaterFloatIsActive => "hiwaterfloat",
            Self::HighWaterFloatActivationCount => "hi",
            Self::HighWaterFloatNeverPresent => "hinevpres",
            Self::BatteryVoltage => "batteryv",
            Self::BatteryCurrent => "chargei",
            Self::BatteryIsCharging => "chargestate",
            Self::Action => "action",
            Self::Alarms => "alarms",
        }
    }
}

impl AttributeKey for Attribute {
    fn as_key(&self) -> &str {
        self.as_str()
    }
}

/// Bits of the `action` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Action {
    /// The DC pump is running.
    DcPumpRunning = 1,
    /// A self-test is in progress.
    SelfTestRunning = 1 << 1,
}

impl Bitmask for Action {
    fn bits(&self) -> u32 {
        *self as u32
    }
}

/// Bits of the `alarms` attribute.
///
/// Each bit is an independent condition; any combination may be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Alarm {
    /// Primary (mains) power is missing.
    PrimaryPowerMissing = 1,
    /// The backup battery is missing.
    BatteryMissing = 1 << 1,
    /// The backup battery voltage is low.
    LowBatteryVoltage = 1 << 2,
    /// The backup battery is connected with reversed polarity.
    BatteryPolarity = 1 << 3,
    /// The operational float is raised.
    OperationalFloat = 1 << 4,
    /// The high water float is raised.
    HighWaterFloat = 1 << 5,
    /// The operational float is malfunctioning.
    OperationalFloatMalfunction = 1 << 6,
    /// The pump draws less current than expected.
    PumpLowCurrent = 1 << 7,
    /// The pump was cycled.
    PumpCycled = 1 << 8,
    /// The pump draws locked-rotor current.
    PumpLockedRotorCurrent = 1 << 9,
    /// The high water float is missing.
    HighWaterFloatMissing = 1 << 10,
    /// The backup battery is bad.
    BatteryBad = 1 << 11,
    /// The operational float is missing.
    OperationalFloatMissing = 1 << 12,
    /// The pump draws no current.
    PumpNoCurrent = 1 << 14,
}

impl Alarm {
    /// All alarms, in bit order.
    pub const ALL: [Self; 14] = [
        Self::PrimaryPowerMissing,
        Self::BatteryMissing,
        Self::LowBatteryVoltage,
        Self::BatteryPolarity,
        Self::OperationalFloat,
        Self::HighWaterFloat,
        Self::OperationalFloatMalfunction,
        Self::PumpLowCurrent,
        Self::PumpCycled,
        Self::PumpLockedRotorCurrent,
        Self::HighWaterFloatMissing,
        Self::BatteryBad,
        Self::OperationalFloatMissing,
        Self::PumpNoCurrent,
    ];

    /// Returns every alarm set in `bits`.
    #[must_use]
    pub fn from_bits(bits: i64) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|alarm| has_all_bits(bits, alarm.bits()))
            .collect()
    }

    /// Returns the display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PrimaryPowerMissing => "Primary power missing",
            Self::BatteryMissing => "Battery missing",
            Self::LowBatteryVoltage => "Low battery voltage",
            Self::BatteryPolarity => "Battery polarity",
            Self::OperationalFloat => "Operational float",
            Self::HighWaterFloat => "High water float",
            Self::OperationalFloatMalfunction => "Operational float malfunction",
            Self::PumpLowCurrent => "Pump low current",
            Self::PumpCycled => "Pump cycled",
            Self::PumpLockedRotorCurrent => "Pump locked rotor current",
            Self::HighWaterFloatMissing => "High water float missing",
            Self::BatteryBad => "Battery bad",
            Self::OperationalFloatMissing => "Operational float missing",
            Self::PumpNoCurrent => "Pump no current",
        }
    }
}

impl Bitmask for Alarm {
    fn bits(&self) -> u32 {
        *self as u32
    }
}

impl fmt::Display for Alarm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The Aquanot® Fit 508 model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AquanotFit508;

/// An Aquanot® Fit 508 reached through connection `C`.
pub type AquanotFit508Device<C> = Device<AquanotFit508, C>;

impl AquanotFit508 {
    fn battery_group(attrs: &AttributeMap) -> BatteryGroup {
        let backup = Battery {
            voltage: attrs.get_float(&Attribute::BatteryVoltage, 0.01),
            current: attrs.get_float(&Attribute::BatteryCurrent, 0.01),
            is_charging: attrs.get_bool(&Attribute::BatteryIsCharging),
            is_low: attrs.get_bool_from_bitmask(&Attribute::Alarms, Alarm::LowBatteryVoltage),
            is_missing: attrs.get_bool_from_bitmask(&Attribute::Alarms, Alarm::BatteryMissing),
            is_bad: attrs.get_bool_from_bitmask(&Attribute::Alarms, Alarm::BatteryBad),
        };

        BatteryGroup {
            batteries: [(BatteryType::Backup, backup)].into(),
            is_primary_power_missing: attrs
                .get_bool_from_bitmask(&Attribute::Alarms, Alarm::PrimaryPowerMissing),
        }
    }

    fn floats(attrs: &AttributeMap) -> Floats {
        let operational = Float {
            is_active: attrs.get_bool(&Attribute::OperationalFloatIsActive),
            activation_count: attrs.get_int(&Attribute::OperationalFloatActivationCount),
            is_malfunctioning: attrs
                .get_bool_from_bitmask(&Attribute::Alarms, Alarm::OperationalFloatMalfunction),
            is_missing: attrs
                .get_bool_from_bitmask(&Attribute::Alarms, Alarm::OperationalFloatMissing),
            never_present: attrs.get_bool(&Attribute::OperationalFloatNeverPresent),
        };

        // No malfunction bit exists for the high water float.
        let high_water = Float {
            is_active: attrs.get_bool(&Attribute::HighWaterFloatIsActive),
            activation_count: attrs.get_int(&Attribute::HighWaterFloatActivationCount),
            is_malfunctioning: None,
            is_missing: attrs
                .get_bool_from_bitmask(&Attribute::Alarms, Alarm::HighWaterFloatMissing),
            never_present: attrs.get_bool(&Attribute::HighWaterFloatNeverPresent),
        };

        [
            (FloatType::Operational, operational),
            (FloatType::HighWater, high_water),
        ]
        .into()
    }

    fn pumps(attrs: &AttributeMap) -> Pumps {
        let dc = Pump {
            current: attrs.get_float(&Attribute::DcPumpCurrent, 0.1),
            is_running: attrs.get_bool(&Attribute::DcPumpIsRunning),
            runtime: attrs.get_float(&Attribute::DcPumpRuntime, 0.1),
            airlock_detected: attrs.get_bool(&Attribute::DcPumpAirlockDetected),
        };

        [(PumpType::Dc, dc)].into()
    }
}

impl DeviceModel for AquanotFit508 {
    const MANUFACTURER: &'static str = "Zoeller Pump Company";
    const MODEL: &'static str = "Aquanot® Fit 508";
    const CAPABILITIES: Capabilities = Capabilities::all();

    type Command = AquanotCommand;

    fn process_attrs(&self, attrs: &AttributeMap) -> DeviceState {
        let device_id = attrs.get_string(&Attribute::DeviceId);

        DeviceState {
            serial_number: device_id.clone(),
            device_id,
            firmware_version: attrs.get_string(&Attribute::FirmwareVersion),
            system_uptime: attrs.get_float(&Attribute::SystemUptime, 0.1),
            is_self_test_running: attrs
                .get_bool_from_bitmask(&Attribute::Action, Action::SelfTestRunning),
            alarms: attrs.get_int(&Attribute::Alarms),
            batteries: Some(Self::battery_group(attrs)),
            floats: Some(Self::floats(attrs)),
            pumps: Some(Self::pumps(attrs)),
        }
    }
}

impl<C: Connection> Device<AquanotFit508, C> {
    /// Starts the device self-test.
    ///
    /// # Errors
    ///
    /// Returns error if the command cannot be delivered.
    pub async fn perform_self_test(&self) -> Result<()> {
        self.send_command(&AquanotCommand::SelfTest).await
    }

    /// Silences all alarms.
    ///
    /// # Errors
    ///
    /// Returns error if the command cannot be delivered.
    pub async fn silence_alarms(&self) -> Result<()> {
        self.send_command(&AquanotCommand::SilenceAlarms).await
    }

    /// Acknowledges all faults and resets the device.
    ///
    /// # Errors
    ///
    /// Returns error if the command cannot be delivered.
    pub async fn acknowledge_faults(&self) -> Result<()> {
        self.send_command(&AquanotCommand::AcknowledgeFaults).await
    }

    /// Returns whether `alarm` is set in the last snapshot.
    #[must_use]
    pub fn is_alarm_active(&self, alarm: Alarm) -> Option<bool> {
        self.state()
            .alarms
            .map(|bits| has_all_bits(bits, alarm.bits()))
    }

    /// Returns every alarm set in the last snapshot.
    #[must_use]
    pub fn active_alarms(&self) -> Option<Vec<Alarm>> {
        self.state().alarms.map(Alarm::from_bits)
    }
}
