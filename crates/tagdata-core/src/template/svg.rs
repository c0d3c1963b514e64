//! Element-id harvesting from SVG templates.
//!
//! Only the `id` attributes matter here; the template is never rendered.

use std::collections::BTreeSet;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use crate::error::TemplateError;

/// The set of unique element identifiers present in an SVG template.
#[derive(Debug, Clone, Default)]
pub struct TemplateIds(BTreeSet<String>);

impl TemplateIds {
    /// Load element ids from an SVG file.
    pub fn from_path(path: &Path) -> Result<Self, TemplateError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| TemplateError::Svg(e.to_string()))?;
        Self::parse_str(&content)
    }

    /// Harvest element ids from SVG markup.
    pub fn parse_str(svg: &str) -> Result<Self, TemplateError> {
        let mut reader = Reader::from_str(svg);
        let mut ids = BTreeSet::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"id" {
                            if let Ok(value) = attr.unescape_value() {
                                ids.insert(value.into_owned());
                            }
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(TemplateError::Svg(e.to_string())),
                Ok(_) => {}
            }
        }

        debug!("harvested {} element ids from template", ids.len());
        Ok(Self(ids))
    }

    /// Whether the template contains the given element id.
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Iterate over the ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }

    /// Number of unique ids.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the template has no identified elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for TemplateIds {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SVG: &str = r#"<?xml version="1.0"?>
        <svg xmlns="http://www.w3.org/2000/svg" id="page">
            <g id="frame">
                <rect id="var_price" x="0" y="0" width="10" height="5"/>
                <text id="var_name">placeholder</text>
                <text>anonymous</text>
            </g>
        </svg>"#;

    #[test]
    fn test_harvest_ids_from_nested_elements() {
        let ids = TemplateIds::parse_str(SVG).unwrap();
        assert_eq!(ids.len(), 4);
        assert!(ids.contains("page"));
        assert!(ids.contains("frame"));
        assert!(ids.contains("var_price"));
        assert!(ids.contains("var_name"));
    }

    #[test]
    fn test_elements_without_id_are_skipped() {
        let ids = TemplateIds::parse_str("<svg><text/></svg>").unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let ids = TemplateIds::parse_str(r#"<svg><a id="x"/><b id="x"/></svg>"#).unwrap();
        assert_eq!(ids.len(), 1);
    }

    #[test]
    fn test_malformed_svg_is_an_error() {
        assert!(TemplateIds::parse_str("<svg><unclosed").is_err());
    }
}
