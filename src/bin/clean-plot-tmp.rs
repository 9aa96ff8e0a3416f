//! # clean-plot-tmp
//!
//! Removes temp plot artifacts under a directory (default: the current one).
//! Per-file failures are printed and never change the exit status.

use clap::Parser;
use nb_tools::application::{cleaner, logging};
use nb_tools::interface::cli::CleanArgs;

fn main() {
    let args = CleanArgs::parse();
    let _guard = logging::init();

    let stdout = std::io::stdout();
    cleaner::remove_tmp_files(&args.directory, &mut stdout.lock());
}
