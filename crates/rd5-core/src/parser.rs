//! Parameter dump parsing
//!
//! The device answers snapshot requests with a single `RD5WEB` document
//! holding up to four typed sections. Every value is transmitted as
//! attribute text regardless of the section's declared type, so the
//! parser flattens all sections into one identifier → string mapping.

use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;

use crate::error::SnapshotError;
use crate::models::Snapshot;

#[derive(Debug, Deserialize)]
struct Rd5Web {
    #[serde(rename = "RD5", default)]
    rd5: Rd5,
}

#[derive(Debug, Default, Deserialize)]
struct Rd5 {
    #[serde(rename = "INTEGER_R", default)]
    integer: Section,
    #[serde(rename = "STRING_R", default)]
    string: Section,
    #[serde(rename = "FLOAT_R", default)]
    float: Section,
    #[serde(rename = "ENUM_R", default)]
    enumerated: Section,
}

#[derive(Debug, Default, Deserialize)]
struct Section {
    #[serde(rename = "O", default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    #[serde(rename = "@I", default)]
    id: String,
    #[serde(rename = "@V", default)]
    value: String,
}

/// Parse one parameter dump into a [`Snapshot`].
///
/// Sections are merged in the order integer, string, float, enumerated;
/// when an identifier appears in more than one section the later section
/// wins. A well-formed document with no items (including one without an
/// `RD5` body) yields an empty snapshot, not an error.
pub fn parse_snapshot(xml: &str) -> Result<Snapshot, SnapshotError> {
    expect_dump_root(xml)?;

    let root: Rd5Web = quick_xml::de::from_str(xml)
        .map_err(|e| SnapshotError::MalformedDocument(e.to_string()))?;

    let mut items = HashMap::new();
    for section in [
        root.rd5.integer,
        root.rd5.string,
        root.rd5.float,
        root.rd5.enumerated,
    ] {
        for item in section.items {
            if !item.id.is_empty() {
                items.insert(item.id, item.value);
            }
        }
    }

    Ok(Snapshot::from_items(items))
}

/// Verify the first element of the document is `RD5WEB`. The serde
/// layer does not match the root element's name, so this is checked
/// against the raw event stream first.
fn expect_dump_root(xml: &str) -> Result<(), SnapshotError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return if e.name().as_ref() == b"RD5WEB" {
                    Ok(())
                } else {
                    Err(SnapshotError::UnexpectedRoot(
                        String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                    ))
                };
            }
            Ok(Event::Eof) => return Err(SnapshotError::MissingRoot),
            Ok(_) => continue,
            Err(e) => return Err(SnapshotError::MalformedDocument(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_basic_document() {
        let xml = r#"<?xml version="1.0"?>
<RD5WEB>
  <RD5>
    <INTEGER_R>
      <O I="I10215" V="201"/>
      <O I="I10211" V="36"/>
    </INTEGER_R>
    <FLOAT_R>
      <O I="I10230" V="50.5"/>
    </FLOAT_R>
  </RD5>
</RD5WEB>"#;

        let snap = parse_snapshot(xml).unwrap();
        assert_eq!(snap.len(), 3);
        assert_eq!(snap.get("I10215"), Some("201"));
        assert_eq!(snap.get("I10211"), Some("36"));
        assert_eq!(snap.get("I10230"), Some("50.5"));
    }

    #[test]
    fn test_later_section_wins() {
        let xml = r#"<RD5WEB><RD5>
            <INTEGER_R><O I="X" V="1"/></INTEGER_R>
            <ENUM_R><O I="X" V="2"/></ENUM_R>
        </RD5></RD5WEB>"#;

        let snap = parse_snapshot(xml).unwrap();
        assert_eq!(snap.get("X"), Some("2"));
        assert_eq!(snap.len(), 1);
    }

    #[test]
    fn test_string_overrides_integer_but_not_enum() {
        let xml = r#"<RD5WEB><RD5>
            <INTEGER_R><O I="A" V="int"/><O I="B" V="int"/></INTEGER_R>
            <STRING_R><O I="A" V="str"/></STRING_R>
            <ENUM_R><O I="B" V="enum"/></ENUM_R>
        </RD5></RD5WEB>"#;

        let snap = parse_snapshot(xml).unwrap();
        assert_eq!(snap.get("A"), Some("str"));
        assert_eq!(snap.get("B"), Some("enum"));
    }

    #[test]
    fn test_empty_document_is_empty_snapshot() {
        assert!(parse_snapshot("<RD5WEB></RD5WEB>").unwrap().is_empty());
        assert!(parse_snapshot("<RD5WEB><RD5/></RD5WEB>").unwrap().is_empty());
        assert!(parse_snapshot(r#"<RD5WEB><RD5><INTEGER_R></INTEGER_R></RD5></RD5WEB>"#)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_unknown_sections_are_ignored() {
        let xml = r#"<RD5WEB><RD5>
            <INTEGER_R><O I="I10215" V="201"/></INTEGER_R>
            <PREV_R><O I="Z" V="9"/></PREV_R>
        </RD5></RD5WEB>"#;

        let snap = parse_snapshot(xml).unwrap();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap.get("Z"), None);
    }

    #[test]
    fn test_items_without_identifier_are_skipped() {
        let xml = r#"<RD5WEB><RD5>
            <INTEGER_R><O V="201"/><O I="I10215" V="201"/></INTEGER_R>
        </RD5></RD5WEB>"#;

        let snap = parse_snapshot(xml).unwrap();
        assert_eq!(snap.len(), 1);
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(
            parse_snapshot("<RD5WEB><RD5>"),
            Err(SnapshotError::MalformedDocument(_))
        ));
        assert!(matches!(
            parse_snapshot("not xml at all <<<"),
            Err(SnapshotError::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_wrong_root_element() {
        assert!(matches!(
            parse_snapshot("<HTML><BODY/></HTML>"),
            Err(SnapshotError::UnexpectedRoot(_))
        ));
    }

    #[test]
    fn test_no_root_element() {
        assert!(matches!(
            parse_snapshot(r#"<?xml version="1.0"?>"#),
            Err(SnapshotError::MissingRoot)
        ));
        assert!(matches!(
            parse_snapshot(""),
            Err(SnapshotError::MissingRoot)
        ));
    }
}
