// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared test helpers.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use zctrl_lib::error::ConnectionError;
use zctrl_lib::protocol::Connection;

/// Reads a file from `tests/fixtures`.
pub fn read_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}

/// A connection backed by a static map of resources.
///
/// Unknown paths fail with [`ConnectionError::Failed`]. Every requested path
/// is recorded.
#[derive(Debug, Default)]
pub struct MockConnection {
    resources: RefCell<HashMap<String, String>>,
    requests: RefCell<Vec<String>>,
}

impl MockConnection {
    pub fn new<I, K, V>(resources: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            resources: RefCell::new(
                resources
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn with_status(body: impl Into<String>) -> Self {
        Self::new([("status.xml", body.into())])
    }

    pub fn set_resource(&self, path: &str, body: impl Into<String>) {
        self.resources
            .borrow_mut()
            .insert(path.to_string(), body.into());
    }

    pub fn remove_resource(&self, path: &str) {
        self.resources.borrow_mut().remove(path);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Connection for MockConnection {
    async fn fetch_resource(&self, path: &str) -> Result<String, ConnectionError> {
        self.requests.borrow_mut().push(path.to_string());
        self.resources
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| ConnectionError::Failed {
                url: path.to_string(),
                reason: None,
            })
    }
}
