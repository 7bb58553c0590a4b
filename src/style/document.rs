//! Serde model of the map style document.
//!
//! Only the fields the resolver needs are modeled; everything else in the
//! document is ignored on deserialization.

use crate::Result;
use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::fmt;

/// One declared source: either a TileJSON `url` or inline `tiles` templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSource {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tiles: Vec<String>,
}

impl StyleSource {
    /// The tile-request template URL this source declares, if any.
    pub fn template_url(&self) -> Option<&str> {
        self.tiles.first().map(String::as_str).or(self.url.as_deref())
    }
}

/// The document's sources in declaration order.
///
/// "First declared source" must mean first in the JSON text, so this is a
/// Vec of pairs rather than a BTree-backed map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceMap(Vec<(String, StyleSource)>);

impl SourceMap {
    pub fn first(&self) -> Option<(&str, &StyleSource)> {
        self.0.first().map(|(name, source)| (name.as_str(), source))
    }

    pub fn get(&self, name: &str) -> Option<&StyleSource> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, source)| source)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleSource)> {
        self.0.iter().map(|(name, source)| (name.as_str(), source))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SourceMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, source) in &self.0 {
            map.serialize_entry(name, source)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SourceMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct SourceMapVisitor;

        impl<'de> Visitor<'de> for SourceMapVisitor {
            type Value = SourceMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of source name to source")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, source)) = access.next_entry()? {
                    entries.push((name, source));
                }
                Ok(SourceMap(entries))
            }
        }

        deserializer.deserialize_map(SourceMapVisitor)
    }
}

/// A map style document: rendering sources plus visual styling. Only the
/// source declarations matter here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleDocument {
    #[serde(default)]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub sources: SourceMap,
}

impl StyleDocument {
    /// Parse a style document from raw JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The first declared source, in document order.
    pub fn first_source(&self) -> Option<(&str, &StyleSource)> {
        self.sources.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLE_JSON: &str = r#"{
        "version": 8,
        "name": "xyz-light",
        "glyphs": "https://example.test/glyphs/{fontstack}/{range}.pbf",
        "sources": {
            "zulu-base": {
                "type": "vector",
                "tiles": ["https://tiles.example.test/api/vectors/{z}/{x}/{y}.pbf"]
            },
            "alpha-extra": {
                "type": "vector",
                "url": "https://tiles.example.test/api/extra.json"
            }
        },
        "layers": []
    }"#;

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let doc = StyleDocument::from_json(STYLE_JSON).unwrap();
        assert_eq!(doc.version, 8);
        assert_eq!(doc.name.as_deref(), Some("xyz-light"));
        assert_eq!(doc.sources.len(), 2);
    }

    #[test]
    fn test_first_source_is_declaration_order() {
        // "zulu-base" sorts after "alpha-extra" alphabetically; declaration
        // order must win.
        let doc = StyleDocument::from_json(STYLE_JSON).unwrap();
        let (name, source) = doc.first_source().unwrap();
        assert_eq!(name, "zulu-base");
        assert_eq!(
            source.template_url(),
            Some("https://tiles.example.test/api/vectors/{z}/{x}/{y}.pbf")
        );
    }

    #[test]
    fn test_template_url_prefers_tiles() {
        let source = StyleSource {
            kind: Some("vector".into()),
            url: Some("https://a.test/tilejson.json".into()),
            tiles: vec!["https://a.test/{z}/{x}/{y}.pbf".into()],
        };
        assert_eq!(source.template_url(), Some("https://a.test/{z}/{x}/{y}.pbf"));
    }

    #[test]
    fn test_empty_document() {
        let doc = StyleDocument::from_json("{}").unwrap();
        assert!(doc.sources.is_empty());
        assert!(doc.first_source().is_none());
    }
}
