//! # Notebook Document
//!
//! Typed view over a Jupyter notebook in nbformat v4 (v3 input is upgraded on load).
//! Only the top-level layout is modelled: cells and any keys this crate does not
//! know about are carried through untouched as raw JSON.

use crate::domain::upgrade;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Major nbformat version that can be read and written.
pub const NBFORMAT_MAJOR: u64 = 4;

/// Tag appended to `metadata.tags` on every metadata edit.
pub const AUTO_GENERATED_TAG: &str = "auto-generated";

/// A single entry of `metadata.authors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
}

impl Author {
    /// An empty affiliation is treated the same as no affiliation.
    pub fn new(name: impl Into<String>, affiliation: Option<String>) -> Self {
        Self {
            name: name.into(),
            affiliation: affiliation.filter(|a| !a.is_empty()),
        }
    }
}

/// A notebook document.
///
/// Held as plain JSON maps rather than a derived struct so that number text
/// (big integers, `1e-06`) survives a load/save cycle unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Notebook {
    pub metadata: Map<String, Value>,
    pub cells: Vec<Value>,
    pub nbformat: u64,
    pub nbformat_minor: u64,
    /// Top-level keys outside the v4 layout.
    pub extra: Map<String, Value>,
}

impl Notebook {
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).context("Notebook is not valid JSON")?;
        Self::from_value(value)
    }

    /// Builds a notebook from a parsed document. v3 documents are upgraded to
    /// the v4 layout; majors other than 3 and [`NBFORMAT_MAJOR`] are rejected.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut doc) = value else {
            bail!("Notebook is not a JSON object");
        };

        let major = doc
            .get("nbformat")
            .and_then(Value::as_u64)
            .context("Notebook has no integer `nbformat` field")?;
        match major {
            NBFORMAT_MAJOR => {}
            3 => upgrade::v3_to_v4(&mut doc)?,
            other => bail!("Unsupported nbformat major version {other} (expected {NBFORMAT_MAJOR})"),
        }

        let metadata = match doc.remove("metadata") {
            None => Map::new(),
            Some(Value::Object(metadata)) => metadata,
            Some(_) => bail!("Notebook metadata is not an object"),
        };
        let cells = match doc.remove("cells") {
            Some(Value::Array(cells)) => cells,
            _ => bail!("Notebook has no `cells` list"),
        };
        let nbformat = take_u64(&mut doc, "nbformat")?;
        let nbformat_minor = take_u64(&mut doc, "nbformat_minor")?;

        Ok(Self {
            metadata,
            cells,
            nbformat,
            nbformat_minor,
            extra: doc,
        })
    }

    pub fn to_value(&self) -> Value {
        let mut doc = self.extra.clone();
        doc.insert("cells".into(), Value::Array(self.cells.clone()));
        doc.insert("metadata".into(), Value::Object(self.metadata.clone()));
        doc.insert("nbformat".into(), Value::from(self.nbformat));
        doc.insert("nbformat_minor".into(), Value::from(self.nbformat_minor));
        Value::Object(doc)
    }

    /// Serializes the notebook with sorted keys, a one-space indent and a
    /// trailing newline. Non-ASCII text is written as-is.
    pub fn to_json(&self) -> Result<String> {
        let value = self.to_value();

        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
        value.serialize(&mut serializer)?;

        let mut text = String::from_utf8(buf)?;
        text.push('\n');
        Ok(text)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read notebook {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("Failed to parse notebook {}", path.display()))
    }

    /// Overwrites `path` in place. No backup is kept.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self.to_json()?;
        fs::write(path, text)
            .with_context(|| format!("Failed to write notebook {}", path.display()))
    }

    pub fn set_title(&mut self, title: &str) {
        self.metadata
            .insert("title".to_string(), Value::String(title.to_string()));
    }

    /// Replaces `metadata.authors`; previous authors are discarded.
    pub fn set_authors(&mut self, authors: &[Author]) -> Result<()> {
        let authors = serde_json::to_value(authors)?;
        self.metadata.insert("authors".to_string(), authors);
        Ok(())
    }

    /// Appends `tag` to `metadata.tags`, creating the list if needed.
    /// Existing entries are kept and duplicates are not collapsed.
    pub fn append_tag(&mut self, tag: &str) -> Result<()> {
        let tags = self
            .metadata
            .entry("tags")
            .or_insert_with(|| Value::Array(Vec::new()));
        let Value::Array(tags) = tags else {
            bail!("metadata.tags is not a list");
        };
        tags.push(Value::String(tag.to_string()));
        Ok(())
    }

    #[cfg(test)]
    pub fn title(&self) -> Option<&str> {
        self.metadata.get("title").and_then(Value::as_str)
    }

    #[cfg(test)]
    pub fn tags(&self) -> Vec<&str> {
        self.metadata
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

fn take_u64(doc: &mut Map<String, Value>, key: &str) -> Result<u64> {
    doc.remove(key)
        .as_ref()
        .and_then(Value::as_u64)
        .with_context(|| format!("Notebook has no integer `{key}` field"))
}
