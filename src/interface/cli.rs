//! Argument definitions for `nb-metadata` and `clean-plot-tmp`.

use crate::application::metadata::MetadataEdit;
use crate::strings::help;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "nb-metadata",
    version,
    about = help::NB_METADATA_ABOUT,
    long_about = help::NB_METADATA_LONG_ABOUT
)]
pub struct MetadataArgs {
    /// Path to the .ipynb file
    pub notebook_path: PathBuf,

    /// Title of the notebook
    #[arg(long)]
    pub title: String,

    /// Author of the notebook
    #[arg(long)]
    pub author: String,

    /// Affiliation of the author
    #[arg(long)]
    pub affiliation: Option<String>,
}

impl MetadataArgs {
    pub fn edit(&self) -> MetadataEdit {
        MetadataEdit::new(&self.title, &self.author, self.affiliation.clone())
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "clean-plot-tmp",
    version,
    about = help::CLEAN_ABOUT,
    long_about = help::CLEAN_LONG_ABOUT
)]
pub struct CleanArgs {
    /// Directory to sweep
    #[arg(default_value = ".")]
    pub directory: PathBuf,
}
