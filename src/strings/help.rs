//! # Help Text
//!
//! `--help` descriptions for both binaries.

pub const NB_METADATA_ABOUT: &str = "Edit notebook metadata.";

pub const NB_METADATA_LONG_ABOUT: &str = concat!(
    "Edit notebook metadata.\n",
    "\n",
    "Sets metadata.title, replaces metadata.authors with a single author and\n",
    "appends the \"auto-generated\" tag to metadata.tags. The notebook is\n",
    "rewritten in place.\n",
    "\n",
    "Logging is controlled with RUST_LOG (default: warn)."
);

pub const CLEAN_ABOUT: &str = "Remove temp plot artifacts.";

pub const CLEAN_LONG_ABOUT: &str = concat!(
    "Remove temp plot artifacts.\n",
    "\n",
    "Recursively deletes files named tmp*.pdf, tmp*.svg and tmp*gif left behind\n",
    "by the plotting helper, printing one line per deleted or failed file.\n",
    "\n",
    "Logging is controlled with RUST_LOG (default: warn)."
);
