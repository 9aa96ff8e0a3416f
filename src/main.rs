//! # nb-metadata
//!
//! Edits a notebook's title, authors and tags in place.

use anyhow::Result;
use clap::Parser;
use nb_tools::application::{logging, metadata};
use nb_tools::interface::cli::MetadataArgs;

fn main() -> Result<()> {
    let args = MetadataArgs::parse();
    let _guard = logging::init();

    metadata::edit_metadata(&args.notebook_path, &args.edit())
}
