// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer for talking to ZControl devices.
//!
//! Devices only ever need one operation from a transport: fetch the resource
//! at a path relative to the device's base URL and return its body. The
//! [`Connection`] trait captures that, and [`HttpConnection`] implements it
//! over HTTP. Tests and alternative transports can implement the trait
//! directly.

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{Credentials, HttpConfig, HttpConnection};

use crate::error::ConnectionError;

/// Resource path of the status document.
pub const STATUS_PATH: &str = "status.xml";

/// A connection to a single device.
///
/// Implementations resolve `path` against their configured base URL, perform
/// exactly one round trip and return the response body.
#[allow(async_fn_in_trait)]
pub trait Connection {
    /// Fetches the resource at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::Timeout`] if the round trip exceeds the
    /// configured timeout and [`ConnectionError::Failed`] for any other
    /// transport or HTTP failure.
    async fn fetch_resource(&self, path: &str) -> Result<String, ConnectionError>;
}

impl<C: Connection + ?Sized> Connection for &C {
    async fn fetch_resource(&self, path: &str) -> Result<String, ConnectionError> {
        (**self).fetch_resource(path).await
    }
}
