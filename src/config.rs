//! Window and context configuration.
//!
//! Every demo starts from [`AppInfo::default`], lets the application adjust it in
//! [`Application::init`](crate::lifecycle::Application::init), and then applies an optional
//! JSON overrides file from the user's config directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Directory under the platform config directory holding per-demo overrides.
pub const CONFIG_DIR_NAME: &str = "superbible-demos";

/// Boolean switches for the window and context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppFlags {
    pub fullscreen: bool,
    pub vsync: bool,
    pub cursor: bool,
    pub debug: bool,
}

impl Default for AppFlags {
    fn default() -> Self {
        Self {
            fullscreen: false,
            vsync: false,
            cursor: true,
            debug: false,
        }
    }
}

/// Describes the window and context a demo wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub major_version: u8,
    pub minor_version: u8,
    pub samples: u8,
    pub flags: AppFlags,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            title: "OpenGL SuperBible Example".to_string(),
            window_width: 800,
            window_height: 600,
            major_version: 4,
            minor_version: 3,
            samples: 0,
            flags: AppFlags::default(),
        }
    }
}

/// A partial [`AppInfo`] as read from disk. Absent fields leave the current value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppInfoOverrides {
    pub title: Option<String>,
    pub window_width: Option<u32>,
    pub window_height: Option<u32>,
    pub major_version: Option<u8>,
    pub minor_version: Option<u8>,
    pub samples: Option<u8>,
    pub fullscreen: Option<bool>,
    pub vsync: Option<bool>,
    pub cursor: Option<bool>,
    pub debug: Option<bool>,
}

impl std::str::FromStr for AppInfoOverrides {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map_err(|e| e.to_string())
    }
}

impl AppInfoOverrides {
    /// Reads overrides from `path`. A missing file yields `Ok(None)`.
    pub fn load(path: &Path) -> Result<Option<Self>, String> {
        match std::fs::read_to_string(path) {
            Ok(contents) => contents
                .parse()
                .map(Some)
                .map_err(|e| format!("{}: {}", path.display(), e)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(format!("{}: {}", path.display(), e)),
        }
    }

    /// Applies the overrides on top of `info`.
    pub fn apply(self, info: &mut AppInfo) {
        if let Some(title) = self.title {
            info.title = title;
        }
        if let Some(width) = self.window_width {
            info.window_width = width;
        }
        if let Some(height) = self.window_height {
            info.window_height = height;
        }
        if let Some(major) = self.major_version {
            info.major_version = major;
        }
        if let Some(minor) = self.minor_version {
            info.minor_version = minor;
        }
        if let Some(samples) = self.samples {
            info.samples = samples;
        }
        if let Some(fullscreen) = self.fullscreen {
            info.flags.fullscreen = fullscreen;
        }
        if let Some(vsync) = self.vsync {
            info.flags.vsync = vsync;
        }
        if let Some(cursor) = self.cursor {
            info.flags.cursor = cursor;
        }
        if let Some(debug) = self.debug {
            info.flags.debug = debug;
        }
    }
}

/// Returns the overrides file for the demo called `name`, if the platform has a config
/// directory.
pub fn overrides_path(name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(format!("{name}.json")))
}

impl AppInfo {
    /// Applies the overrides file for the demo called `name`.
    ///
    /// Configuration problems never stop a demo: unreadable or malformed files are
    /// logged and skipped.
    pub fn apply_overrides_for(&mut self, name: &str) {
        let Some(path) = overrides_path(name) else {
            return;
        };
        match AppInfoOverrides::load(&path) {
            Ok(Some(overrides)) => {
                log::info!("applying config overrides from {}", path.display());
                overrides.apply(self);
            }
            Ok(None) => {}
            Err(e) => log::warn!("ignoring config overrides: {e}"),
        }
    }
}
