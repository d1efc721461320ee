// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Aquanot® Fit 508 tests against canned status documents.

mod common;

use common::{MockConnection, read_fixture};
use zctrl_lib::device::{Alarm, AquanotFit508, Device};
use zctrl_lib::error::{ConnectionError, Error, ParseError};
use zctrl_lib::state::{BatteryType, FloatState, FloatType, PumpType};

fn device(connection: &MockConnection) -> Device<AquanotFit508, &MockConnection> {
    Device::new(AquanotFit508, connection)
}

// ============================================================================
// Status updates
// ============================================================================

mod update {
    use super::*;

    #[tokio::test]
    async fn valid_status() {
        let connection = MockConnection::with_status(read_fixture("valid_status.xml"));
        let mut device = device(&connection);
        device.update().await.unwrap();

        assert_eq!(device.device_id(), Some("test_device"));
        assert_eq!(device.serial_number(), Some("test_device"));
        assert_eq!(device.firmware_version(), Some("1.40"));
        assert_eq!(device.system_uptime(), Some(920_172.1));
        assert_eq!(device.is_self_test_running(), Some(false));
        assert_eq!(device.manufacturer(), "Zoeller Pump Company");
        assert_eq!(device.model_name(), "Aquanot® Fit 508");

        let state = device.state();

        // Batteries
        assert_eq!(state.is_primary_power_missing(), Some(false));
        let backup = state.battery(BatteryType::Backup).unwrap();
        assert_eq!(backup.voltage, Some(12.85));
        assert_eq!(backup.current, Some(0.0));
        assert_eq!(backup.is_charging, Some(false));
        assert_eq!(backup.is_low, Some(false));
        assert_eq!(backup.is_missing, Some(false));
        assert_eq!(backup.is_bad, Some(false));

        // Floats
        let operational = state.float(FloatType::Operational).unwrap();
        assert_eq!(operational.is_active, Some(false));
        assert_eq!(operational.activation_count, Some(2));
        assert_eq!(operational.is_malfunctioning, Some(false));
        assert_eq!(operational.is_missing, Some(false));
        assert_eq!(operational.never_present, Some(false));
        assert_eq!(operational.state(), Some(FloatState::Inactive));

        let high_water = state.float(FloatType::HighWater).unwrap();
        assert_eq!(high_water.is_active, Some(false));
        assert_eq!(high_water.activation_count, Some(0));
        assert_eq!(high_water.is_malfunctioning, None);
        assert_eq!(high_water.is_missing, Some(false));
        assert_eq!(high_water.never_present, Some(false));

        // Pumps
        let dc = state.pump(PumpType::Dc).unwrap();
        assert_eq!(dc.current, Some(0.0));
        assert_eq!(dc.is_running, Some(false));
        assert_eq!(dc.runtime, Some(78.8));
        assert_eq!(dc.airlock_detected, Some(false));

        // Alarms
        assert_eq!(state.has_active_alarms(), Some(false));
        assert_eq!(device.is_alarm_active(Alarm::BatteryBad), Some(false));
        assert_eq!(device.active_alarms(), Some(vec![]));

        assert_eq!(connection.requests(), ["status.xml"]);
    }

    #[tokio::test]
    async fn fields_are_absent_before_first_update() {
        let connection = MockConnection::with_status(read_fixture("valid_status.xml"));
        let device = device(&connection);

        assert_eq!(device.device_id(), None);
        assert_eq!(device.system_uptime(), None);
        assert!(device.state().batteries.is_none());
        assert!(device.state().floats.is_none());
        assert!(device.state().pumps.is_none());
        assert_eq!(device.is_alarm_active(Alarm::PumpCycled), None);
        assert!(connection.requests().is_empty());
    }

    #[tokio::test]
    async fn update_is_idempotent() {
        let connection = MockConnection::with_status(read_fixture("valid_status.xml"));
        let mut device = device(&connection);

        device.update().await.unwrap();
        let first = device.state().clone();
        device.update().await.unwrap();

        assert_eq!(device.state(), &first);
        assert_eq!(connection.requests().len(), 2);
    }

    #[tokio::test]
    async fn new_snapshot_replaces_old_one() {
        let connection = MockConnection::with_status(read_fixture("valid_status.xml"));
        let mut device = device(&connection);
        device.update().await.unwrap();
        assert_eq!(device.firmware_version(), Some("1.40"));

        connection.set_resource(
            "status.xml",
            "<response><deviceid>test_device</deviceid><alarms>2049</alarms></response>",
        );
        device.update().await.unwrap();

        assert_eq!(device.device_id(), Some("test_device"));
        assert_eq!(device.firmware_version(), None);
        assert_eq!(device.system_uptime(), None);

        let backup = device.state().battery(BatteryType::Backup).unwrap();
        assert_eq!(backup.voltage, None);
        assert_eq!(backup.is_bad, Some(true));
        assert_eq!(device.state().is_primary_power_missing(), Some(true));
        assert_eq!(
            device.active_alarms(),
            Some(vec![Alarm::PrimaryPowerMissing, Alarm::BatteryBad])
        );
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_snapshot() {
        let connection = MockConnection::with_status(read_fixture("valid_status.xml"));
        let mut device = device(&connection);
        device.update().await.unwrap();
        let before = device.state().clone();

        connection.remove_resource("status.xml");
        let err = device.update().await.unwrap_err();

        assert!(matches!(
            err,
            Error::Connection(ConnectionError::Failed { ref url, .. }) if url == "status.xml"
        ));
        assert_eq!(device.state(), &before);
    }

    #[tokio::test]
    async fn failed_first_fetch_leaves_fields_absent() {
        let connection = MockConnection::default();
        let mut device = device(&connection);

        assert!(device.update().await.is_err());
        assert_eq!(device.device_id(), None);
        assert!(device.state().pumps.is_none());
    }

    #[tokio::test]
    async fn missing_response_element_resolves_all_fields_absent() {
        let connection = MockConnection::with_status("<status><deviceid>x</deviceid></status>");
        let mut device = device(&connection);
        device.update().await.unwrap();

        assert_eq!(device.device_id(), None);
        assert_eq!(device.state().has_active_alarms(), None);
        let dc = device.state().pump(PumpType::Dc).unwrap();
        assert_eq!(dc.runtime, None);
        assert_eq!(dc.is_running, None);
    }

    #[tokio::test]
    async fn malformed_document_is_a_parse_error() {
        let connection = MockConnection::with_status("<response><deviceid>x</firm></response>");
        let mut device = device(&connection);

        let err = device.update().await.unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::Xml(_))));
        assert_eq!(device.device_id(), None);
    }

    #[tokio::test]
    async fn float_state_reflects_faults() {
        let connection = MockConnection::with_status(
            "<response><of>1</of><opnevpres>1</opnevpres><hiwaterfloat>1</hiwaterfloat>\
             <alarms>0</alarms></response>",
        );
        let mut device = device(&connection);
        device.update().await.unwrap();

        let state = device.state();
        assert_eq!(
            state.float(FloatType::Operational).unwrap().state(),
            Some(FloatState::NeverPresent)
        );
        assert_eq!(
            state.float(FloatType::HighWater).unwrap().state(),
            Some(FloatState::Active)
        );
    }

    #[tokio::test]
    async fn snapshot_serializes_absent_fields_as_null() {
        let connection = MockConnection::with_status("<response><deviceid>pit</deviceid></response>");
        let mut device = device(&connection);
        device.update().await.unwrap();

        let json = serde_json::to_value(device.state()).unwrap();
        assert_eq!(json["device_id"], "pit");
        assert!(json["firmware_version"].is_null());
        assert!(json["pumps"]["dc"]["runtime"].is_null());
        assert!(json["floats"]["high_water"]["is_active"].is_null());
    }
}

// ============================================================================
// Commands
// ============================================================================

mod commands {
    use super::*;

    #[tokio::test]
    async fn perform_self_test_fetches_selftest_resource() {
        let connection = MockConnection::new([("selftest.cgi", "")]);
        let device = device(&connection);

        device.perform_self_test().await.unwrap();
        assert_eq!(connection.requests(), ["selftest.cgi"]);
    }

    #[tokio::test]
    async fn silence_and_acknowledge() {
        let connection = MockConnection::new([("silence.cgi", "OK"), ("ackfaults.cgi", "OK")]);
        let device = device(&connection);

        device.silence_alarms().await.unwrap();
        device.acknowledge_faults().await.unwrap();
        assert_eq!(connection.requests(), ["silence.cgi", "ackfaults.cgi"]);
    }

    #[tokio::test]
    async fn unmapped_command_propagates_connection_error() {
        let connection = MockConnection::default();
        let device = device(&connection);

        let err = device.perform_self_test().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Connection(ConnectionError::Failed { ref url, reason: None })
                if url == "selftest.cgi"
        ));
        assert_eq!(connection.requests(), ["selftest.cgi"]);
    }

    #[tokio::test]
    async fn commands_do_not_touch_the_snapshot() {
        let connection = MockConnection::new([
            ("status.xml", read_fixture("valid_status.xml")),
            ("selftest.cgi", "<response><action>2</action></response>".to_string()),
        ]);
        let mut device = device(&connection);
        device.update().await.unwrap();

        device.perform_self_test().await.unwrap();
        assert_eq!(device.is_self_test_running(), Some(false));
    }
}
