//! Admin GUI version descriptor.
//!
//! The literals are edited by hand (or stamped by the deploy pipeline) for
//! each release. Nothing here validates them.

use std::sync::OnceLock;

use chrono::NaiveDate;
use serde::Serialize;

pub const GUI_VERSION: &str = "V0.1.1";
pub const GUI_COMMIT: &str = "e0f404e";
pub const GUI_BUILD_DATE: &str = "2024-11-05";

/// Immutable build metadata for a deployed artifact.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    /// `V{major}.{minor}.{patch}`
    pub version: &'static str,
    /// Short commit hash.
    pub commit: &'static str,
    /// ISO date (`YYYY-MM-DD`).
    pub build_date: &'static str,
}

impl VersionInfo {
    pub const fn new(version: &'static str, commit: &'static str, build_date: &'static str) -> Self {
        Self {
            version,
            commit,
            build_date,
        }
    }

    /// Display string `{version}-{commit}`, e.g. `V0.1.1-e0f404e`.
    pub fn revision(&self) -> String {
        format!("{}-{}", self.version, self.commit)
    }

    /// `None` when the literal is not a valid ISO date.
    pub fn build_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.build_date, "%Y-%m-%d").ok()
    }
}

const GUI: VersionInfo = VersionInfo::new(GUI_VERSION, GUI_COMMIT, GUI_BUILD_DATE);

pub fn gui_version_info() -> VersionInfo {
    GUI
}

/// `GUI_VERSION-GUI_COMMIT`, computed on first use and cached for the process.
pub fn gui_revision() -> &'static str {
    static REVISION: OnceLock<String> = OnceLock::new();
    REVISION.get_or_init(|| GUI.revision())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn gui_revision_matches_literals() {
        assert_eq!(gui_revision(), "V0.1.1-e0f404e");
        assert_eq!(gui_revision(), format!("{GUI_VERSION}-{GUI_COMMIT}"));
    }

    #[test]
    fn build_date_parses_when_iso() {
        assert_eq!(
            gui_version_info().build_date(),
            NaiveDate::from_ymd_opt(2024, 11, 5)
        );
        assert_eq!(VersionInfo::new("V1.0.0", "abc1234", "yesterday").build_date(), None);
    }

    #[test]
    fn serializes_literal_fields() {
        let json = serde_json::to_value(gui_version_info()).unwrap();
        assert_eq!(json["version"], "V0.1.1");
        assert_eq!(json["commit"], "e0f404e");
        assert_eq!(json["build_date"], GUI_BUILD_DATE);
    }

    proptest! {
        #[test]
        fn revision_is_version_dash_commit(
            major in 0u32..100,
            minor in 0u32..100,
            patch in 0u32..100,
            commit in "[0-9a-f]{7}",
        ) {
            let version: &'static str = Box::leak(format!("V{major}.{minor}.{patch}").into_boxed_str());
            let commit: &'static str = Box::leak(commit.into_boxed_str());
            let info = VersionInfo::new(version, commit, GUI_BUILD_DATE);
            prop_assert_eq!(info.revision(), format!("{version}-{commit}"));
        }
    }
}
