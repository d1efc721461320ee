// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status document parsing.
//!
//! A device answers `status.xml` with a document of the form:
//!
//! ```xml
//! <response>
//!   <deviceid>test_device</deviceid>
//!   <firm>1.40</firm>
//!   <alarms>0</alarms>
//! </response>
//! ```
//!
//! Each direct child of `response` that holds only text becomes one entry of
//! the resulting [`AttributeMap`].

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::attributes::AttributeMap;
use crate::error::ParseError;

/// Name of the root element that carries the attributes.
pub const STATUS_ROOT: &str = "response";

/// Parses a status document into a flat attribute map.
///
/// - Text is trimmed; empty and self-closing children are left out.
/// - Children with nested elements are skipped.
/// - A later duplicate key overwrites an earlier one.
/// - A well-formed document whose root is not `response` yields an empty map.
///
/// # Examples
///
/// ```
/// use zctrl_lib::response::parse_status_document;
///
/// let attrs = parse_status_document(
///     "<response><deviceid>pit-1</deviceid><ofc>2</ofc></response>",
/// ).unwrap();
/// assert_eq!(attrs.get("deviceid"), Some("pit-1"));
/// assert_eq!(attrs.get_int("ofc"), Some(2));
/// ```
///
/// # Errors
///
/// Returns [`ParseError::Xml`] if the document is not well-formed.
pub fn parse_status_document(text: &str) -> Result<AttributeMap, ParseError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut values = Vec::new();
    let mut depth = 0_usize;
    let mut saw_root = false;
    let mut in_response = false;
    let mut found_response = false;
    // Key and accumulated text of the child currently open at depth 2.
    let mut current: Option<(String, String)> = None;

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) => {
                depth += 1;
                match depth {
                    1 => {
                        in_response = !saw_root && e.name().as_ref() == STATUS_ROOT.as_bytes();
                        saw_root = true;
                        found_response |= in_response;
                    }
                    2 if in_response => current = Some((element_name(&e), String::new())),
                    // nested element: the enclosing child is not a leaf
                    _ => current = None,
                }
            }
            Event::Empty(e) => {
                if depth == 0 {
                    found_response |= !saw_root && e.name().as_ref() == STATUS_ROOT.as_bytes();
                    saw_root = true;
                } else if depth >= 2 {
                    current = None;
                }
            }
            Event::Text(e) => {
                if depth == 2
                    && let Some((_, buf)) = current.as_mut()
                {
                    buf.push_str(&e.unescape().map_err(xml_error)?);
                }
            }
            Event::CData(e) => {
                if depth == 2
                    && let Some((_, buf)) = current.as_mut()
                {
                    buf.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(_) => {
                if depth == 2
                    && in_response
                    && let Some((key, text)) = current.take()
                {
                    let text = text.trim();
                    if !text.is_empty() {
                        values.push((key, text.to_string()));
                    }
                }
                if depth == 1 {
                    in_response = false;
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth > 0 {
        return Err(ParseError::Xml("unexpected end of document".to_string()));
    }

    if !found_response {
        tracing::warn!("Status document has no <{STATUS_ROOT}> element");
    }

    Ok(values.into_iter().collect())
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

#[allow(clippy::needless_pass_by_value)]
fn xml_error(err: quick_xml::Error) -> ParseError {
    ParseError::Xml(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leaf_children() {
        let attrs = parse_status_document(
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <response>
                <deviceid>test_device</deviceid>
                <firm> 1.40 </firm>
                <nt>9201721</nt>
            </response>"#,
        )
        .unwrap();

        assert_eq!(attrs.len(), 3);
        assert_eq!(attrs.get("deviceid"), Some("test_device"));
        assert_eq!(attrs.get("firm"), Some("1.40"));
        assert_eq!(attrs.get("nt"), Some("9201721"));
    }

    #[test]
    fn missing_response_root_yields_empty_map() {
        let attrs = parse_status_document("<status><deviceid>x</deviceid></status>").unwrap();
        assert!(attrs.is_empty());
    }

    #[test]
    fn empty_root_yields_empty_map() {
        assert!(parse_status_document("<response/>").unwrap().is_empty());
        assert!(parse_status_document("<response></response>").unwrap().is_empty());
    }

    #[test]
    fn empty_and_nested_children_are_absent() {
        let attrs = parse_status_document(
            "<response><a/><b></b><c><d>1</d></c><e>2</e></response>",
        )
        .unwrap();

        assert_eq!(attrs.get("a"), None);
        assert_eq!(attrs.get("b"), None);
        assert_eq!(attrs.get("c"), None);
        assert_eq!(attrs.get("d"), None);
        assert_eq!(attrs.get("e"), Some("2"));
    }

    #[test]
    fn later_duplicate_wins() {
        let attrs = parse_status_document("<response><a>1</a><a>2</a></response>").unwrap();
        assert_eq!(attrs.get("a"), Some("2"));
    }

    #[test]
    fn entities_and_cdata_are_decoded() {
        let attrs = parse_status_document(
            "<response><name>A &amp; B</name><raw><![CDATA[<x>]]></raw></response>",
        )
        .unwrap();
        assert_eq!(attrs.get("name"), Some("A & B"));
        assert_eq!(attrs.get("raw"), Some("<x>"));
    }

    #[test]
    fn mismatched_tags_are_an_error() {
        let result = parse_status_document("<response><a>1</b></response>");
        assert!(matches!(result, Err(ParseError::Xml(_))));
    }

    #[test]
    fn unterminated_document_is_an_error() {
        let result = parse_status_document("<response><a>1</a>");
        assert!(matches!(result, Err(ParseError::Xml(_))));
    }
}
