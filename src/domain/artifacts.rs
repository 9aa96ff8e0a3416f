//! # Temp Artifacts
//!
//! Naming convention of the short-lived files the plotting helper drops next to
//! notebooks while they execute.

use std::ffi::OsStr;

pub const TMP_PREFIX: &str = "tmp";

/// Note the last suffix has no leading dot, so `tmpfoogif` matches too.
pub const TMP_SUFFIXES: &[&str] = &[".pdf", ".svg", "gif"];

/// File name rule: fixed prefix plus any one of a set of suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempArtifactPattern {
    prefix: &'static str,
    suffixes: &'static [&'static str],
}

impl TempArtifactPattern {
    /// The rule for plot helper output (`tmp*.pdf`, `tmp*.svg`, `tmp*gif`).
    pub const fn plot_helper() -> Self {
        Self {
            prefix: TMP_PREFIX,
            suffixes: TMP_SUFFIXES,
        }
    }

    /// Compares raw bytes, so names that are not valid UTF-8 can still match.
    pub fn matches(&self, file_name: &OsStr) -> bool {
        let name = file_name.as_encoded_bytes();
        name.starts_with(self.prefix.as_bytes())
            && self
                .suffixes
                .iter()
                .any(|suffix| name.ends_with(suffix.as_bytes()))
    }
}

impl Default for TempArtifactPattern {
    fn default() -> Self {
        Self::plot_helper()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(name: &str) -> bool {
        TempArtifactPattern::default().matches(OsStr::new(name))
    }

    #[test]
    fn test_plot_artifacts_match() {
        assert!(matches("tmp1.pdf"));
        assert!(matches("tmpX.svg"));
        assert!(matches("tmpY.gif"));
        assert!(matches("tmp.pdf"));
    }

    #[test]
    fn test_gif_suffix_has_no_dot() {
        assert!(matches("tmpfoogif"));
        assert!(matches("tmpgif"));
        assert!(!matches("tmpfoopdf"));
    }

    #[test]
    fn test_other_names_do_not_match() {
        assert!(!matches("notes.pdf"));
        assert!(!matches("tmp.txt"));
        assert!(!matches("Tmp1.pdf"));
        assert!(!matches("xtmp.pdf"));
        assert!(!matches("tmp.gifx"));
        assert!(!matches("tmp1.PDF"));
        assert!(!matches(""));
    }
}
