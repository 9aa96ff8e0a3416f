//! # Metadata Editor
//!
//! Rewrites `title`, `authors` and `tags` in a notebook's metadata, in place.
//! Any failure aborts before the file is written.

use crate::domain::notebook::{AUTO_GENERATED_TAG, Author, Notebook};
use crate::strings::logs;
use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

/// The metadata to stamp onto a notebook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataEdit {
    pub title: String,
    pub author: Author,
}

impl MetadataEdit {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        affiliation: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: Author::new(author, affiliation),
        }
    }
}

/// Applies `edit` to an in-memory notebook.
pub fn apply(notebook: &mut Notebook, edit: &MetadataEdit) -> Result<()> {
    notebook.set_title(&edit.title);
    notebook.set_authors(std::slice::from_ref(&edit.author))?;
    notebook.append_tag(AUTO_GENERATED_TAG)?;
    Ok(())
}

/// Loads the notebook at `path`, applies `edit` and writes it back to `path`.
pub fn edit_metadata(path: &Path, edit: &MetadataEdit) -> Result<()> {
    let mut notebook = Notebook::load(path)?;
    debug!("{}", logs::notebook_loaded(path, notebook.cells.len()));

    apply(&mut notebook, edit)?;
    notebook.save(path)?;

    info!("{}", logs::notebook_updated(path));
    Ok(())
}
