// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parsing of device responses.
//!
//! Status documents are XML; see [`parse_status_document`]. Command
//! responses carry no information and are never parsed.

mod status;

pub use status::{STATUS_ROOT, parse_status_document};
