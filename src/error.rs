// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `ZCtrl` library.
//!
//! Only transport failures and unreadable status documents surface as
//! errors. A single attribute that cannot be coerced to the requested type
//! is not an error: the accessor reports it as absent and logs a warning
//! (see [`AttributeMap`](crate::attributes::AttributeMap)).

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while talking to the device.
    #[error("connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// Error occurred while parsing the status document.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors raised by a [`Connection`](crate::protocol::Connection).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// The round trip exceeded the configured timeout.
    #[error("timed out connecting to {url}")]
    Timeout {
        /// The URL that was being fetched.
        url: String,
    },

    /// Any other transport or HTTP failure, including non-2xx responses.
    #[error("failed to connect to {url}{}", reason_suffix(.reason.as_deref()))]
    Failed {
        /// The URL that was being fetched.
        url: String,
        /// Human readable reason, when one is known.
        reason: Option<String>,
    },

    /// The base URL or resource path does not form a valid URL.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl ConnectionError {
    /// Returns the URL the failed request targeted, if any.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Timeout { url } | Self::Failed { url, .. } => Some(url),
            Self::InvalidAddress(_) => None,
        }
    }

    /// Returns `true` if this error is a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

fn reason_suffix(reason: Option<&str>) -> String {
    reason.map(|r| format!("; {r}")).unwrap_or_default()
}

/// Errors related to parsing the device status document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The document is not well-formed XML.
    #[error("malformed status document: {0}")]
    Xml(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
