//! `printerp-admin` — build metadata for the internal admin GUI.

pub mod version;

pub use version::{GUI_BUILD_DATE, GUI_COMMIT, GUI_VERSION, VersionInfo, gui_revision, gui_version_info};
