// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed access to the flat attribute bag reported by a device.
//!
//! The status document of a ZControl device is a single `response` element
//! whose children are key/value pairs. [`AttributeMap`] wraps those pairs and
//! offers typed accessors. Every accessor returns an `Option`: a missing key
//! and a value that cannot be coerced both come back as `None`, so a single
//! bad reading never prevents the rest of a snapshot from being built.
//!
//! # Examples
//!
//! ```
//! use zctrl_lib::attributes::AttributeMap;
//!
//! let attrs = AttributeMap::from_iter([("batteryv", "1285"), ("alarms", "3")]);
//!
//! assert_eq!(attrs.get_float("batteryv", 0.01), Some(12.85));
//! assert_eq!(attrs.get_bool_from_bitmask("alarms", 1_u32), Some(true));
//! assert_eq!(attrs.get_bool_from_bitmask("alarms", 4_u32), Some(false));
//! assert_eq!(attrs.get_int("missing"), None);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Default number of decimal places kept by [`AttributeMap::get_float`].
pub const DEFAULT_PRECISION: i32 = 2;

const TRUTHY: [&str; 5] = ["1", "true", "t", "yes", "y"];

/// A key that can be looked up in an [`AttributeMap`].
///
/// Device models implement this for a closed enum of their attribute names;
/// plain string slices implement it as well.
pub trait AttributeKey {
    /// Returns the raw key as it appears in the status document.
    fn as_key(&self) -> &str;
}

impl AttributeKey for str {
    fn as_key(&self) -> &str {
        self
    }
}

impl AttributeKey for String {
    fn as_key(&self) -> &str {
        self
    }
}

/// A set of bits that must all be set for a bitmask attribute to read `true`.
pub trait Bitmask {
    /// Returns the raw bits of the mask.
    fn bits(&self) -> u32;
}

impl Bitmask for u32 {
    fn bits(&self) -> u32 {
        *self
    }
}

/// Returns `true` if every bit of `mask` is set in `value`.
#[must_use]
pub fn has_all_bits(value: i64, mask: u32) -> bool {
    let mask = i64::from(mask);
    value & mask == mask
}

/// Immutable map of raw attribute values keyed by attribute name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    values: HashMap<String, String>,
}

impl AttributeMap {
    /// Creates an empty attribute map. Every accessor yields `None`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the map holds no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the raw string value for `key`.
    #[must_use]
    pub fn get<K: AttributeKey + ?Sized>(&self, key: &K) -> Option<&str> {
        self.values.get(key.as_key()).map(String::as_str)
    }

    /// Returns the raw value for `key` as an owned string.
    #[must_use]
    pub fn get_string<K: AttributeKey + ?Sized>(&self, key: &K) -> Option<String> {
        self.get(key).map(ToOwned::to_owned)
    }

    /// Returns `true` if the value is one of `1`, `true`, `t`, `yes`, `y`
    /// (case-insensitive) and `false` for any other present value.
    #[must_use]
    pub fn get_bool<K: AttributeKey + ?Sized>(&self, key: &K) -> Option<bool> {
        let value = self.get(key)?.trim();
        Some(TRUTHY.iter().any(|t| value.eq_ignore_ascii_case(t)))
    }

    /// Returns the value parsed as an integer.
    ///
    /// A value that is not an integer is logged and reported as absent.
    #[must_use]
    pub fn get_int<K: AttributeKey + ?Sized>(&self, key: &K) -> Option<i64> {
        self.parse_or_warn(key, "int")
    }

    /// Returns the value parsed as a float, scaled by `multiplier` and
    /// rounded half to even at [`DEFAULT_PRECISION`] decimal places.
    #[must_use]
    pub fn get_float<K: AttributeKey + ?Sized>(&self, key: &K, multiplier: f64) -> Option<f64> {
        self.get_float_with_precision(key, multiplier, DEFAULT_PRECISION)
    }

    /// Like [`get_float`](Self::get_float) with an explicit number of
    /// decimal places.
    #[must_use]
    pub fn get_float_with_precision<K: AttributeKey + ?Sized>(
        &self,
        key: &K,
        multiplier: f64,
        precision: i32,
    ) -> Option<f64> {
        let value: f64 = self.parse_or_warn(key, "float")?;
        Some(round_to(value * multiplier, precision))
    }

    /// Returns `true` if every bit of `mask` is set in the integer value.
    #[must_use]
    pub fn get_bool_from_bitmask<K, M>(&self, key: &K, mask: M) -> Option<bool>
    where
        K: AttributeKey + ?Sized,
        M: Bitmask,
    {
        self.get_int(key)
            .map(|value| has_all_bits(value, mask.bits()))
    }

    /// Shared parse path for numeric accessors.
    fn parse_or_warn<K, T>(&self, key: &K, kind: &str) -> Option<T>
    where
        K: AttributeKey + ?Sized,
        T: FromStr,
    {
        let raw = self.get(key)?;
        match raw.trim().parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(
                    attribute = key.as_key(),
                    value = raw,
                    "Failed to convert attribute to {kind}"
                );
                None
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for AttributeMap {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl fmt::Display for AttributeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.values.keys().collect();
        keys.sort();
        for (i, key) in keys.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={}", self.values[key])?;
        }
        Ok(())
    }
}

/// Rounds half to even at `precision` decimal places.
///
/// Values too large to scale are already integral at that precision and are
/// returned unchanged.
fn round_to(value: f64, precision: i32) -> f64 {
    let factor = 10_f64.powi(precision);
    let scaled = value * factor;
    if !factor.is_normal() || !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / factor
}
