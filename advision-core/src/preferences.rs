//! Persisted UI preferences: theme and accent color.
//!
//! # Storage layout
//!
//! ```text
//! ~/.advision/
//!   preferences.yaml   (flat string map: mode 0600)
//! ```
//!
//! The file is a plain key/value map keyed by [`THEME_KEY`] and [`ACCENT_KEY`],
//! so unknown keys written by other tools survive a save.
//!
//! # API pattern
//!
//! Every function has two forms:
//! - `fn_at(home: &Path, …)`: explicit home; used in tests with `TempDir`
//! - `fn(…)`: derives home from `dirs::home_dir()`, delegates to `_at`

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{io_err, PreferencesError};

pub const THEME_KEY: &str = "advision-theme";
pub const ACCENT_KEY: &str = "advision-accent";

// ---------------------------------------------------------------------------
// 1. Values
// ---------------------------------------------------------------------------

/// Color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon on the toggle button: it shows the scheme you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "sun",
            Theme::Light => "moon",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = PreferencesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(PreferencesError::UnknownTheme(other.to_owned())),
        }
    }
}

/// Accent color applied to primary UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Teal,
    Blue,
    Purple,
    Green,
    Orange,
}

impl AccentColor {
    pub fn all() -> &'static [AccentColor] {
        &[
            AccentColor::Teal,
            AccentColor::Blue,
            AccentColor::Purple,
            AccentColor::Green,
            AccentColor::Orange,
        ]
    }

    /// CSS value for `--color-primary`.
    pub fn hex(self) -> &'static str {
        match self {
            AccentColor::Teal => "#218e9b",
            AccentColor::Blue => "#3b82f6",
            AccentColor::Purple => "#8b5cf6",
            AccentColor::Green => "#10b981",
            AccentColor::Orange => "#f59e0b",
        }
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccentColor::Teal => "teal",
            AccentColor::Blue => "blue",
            AccentColor::Purple => "purple",
            AccentColor::Green => "green",
            AccentColor::Orange => "orange",
        };
        f.write_str(name)
    }
}

impl FromStr for AccentColor {
    type Err = PreferencesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        AccentColor::all()
            .iter()
            .copied()
            .find(|c| c.to_string() == wanted)
            .ok_or(PreferencesError::UnknownAccent(wanted))
    }
}

/// Theme plus accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub accent: AccentColor,
}

impl Preferences {
    /// Read from a raw key/value map; unknown or missing values fall back to defaults.
    pub fn from_entries(entries: &BTreeMap<String, String>) -> Self {
        let theme = entries
            .get(THEME_KEY)
            .map(|raw| {
                raw.parse().unwrap_or_else(|err| {
                    tracing::warn!(error = %err, "ignoring stored theme");
                    Theme::default()
                })
            })
            .unwrap_or_default();
        let accent = entries
            .get(ACCENT_KEY)
            .map(|raw| {
                raw.parse().unwrap_or_else(|err| {
                    tracing::warn!(error = %err, "ignoring stored accent color");
                    AccentColor::default()
                })
            })
            .unwrap_or_default();
        Preferences { theme, accent }
    }

    /// Write into a raw key/value map, leaving unrelated keys alone.
    pub fn write_entries(&self, entries: &mut BTreeMap<String, String>) {
        entries.insert(THEME_KEY.to_owned(), self.theme.to_string());
        entries.insert(ACCENT_KEY.to_owned(), self.accent.to_string());
    }
}

// ---------------------------------------------------------------------------
// 2. Paths
// ---------------------------------------------------------------------------

/// `<home>/.advision/preferences.yaml`: pure, no I/O.
pub fn preferences_path_at(home: &Path) -> PathBuf {
    home.join(".advision").join("preferences.yaml")
}

// ---------------------------------------------------------------------------
// 3. Load / save
// ---------------------------------------------------------------------------

fn load_entries_at(home: &Path) -> Result<BTreeMap<String, String>, PreferencesError> {
    let path = preferences_path_at(home);
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
    if contents.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    serde_yaml::from_str(&contents).map_err(|e| PreferencesError::Parse { path, source: e })
}

/// Load preferences; a missing file yields the defaults.
pub fn load_at(home: &Path) -> Result<Preferences, PreferencesError> {
    Ok(Preferences::from_entries(&load_entries_at(home)?))
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<Preferences, PreferencesError> {
    load_at(&home()?)
}

/// Atomically save preferences.
///
/// Write flow: merge into existing map → `.yaml.tmp` sibling → `chmod 0600` → `rename`.
pub fn save_at(home: &Path, prefs: &Preferences) -> Result<(), PreferencesError> {
    let mut entries = load_entries_at(home)?;
    prefs.write_entries(&mut entries);

    let path = preferences_path_at(home);
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    }
    let tmp_path = path.with_file_name("preferences.yaml.tmp");
    let yaml = serde_yaml::to_string(&entries)?;
    std::fs::write(&tmp_path, yaml).map_err(|e| io_err(&tmp_path, e))?;
    set_file_permissions(&tmp_path)?;
    std::fs::rename(&tmp_path, &path).map_err(|e| io_err(&path, e))?;
    tracing::debug!(path = %path.display(), theme = %prefs.theme, accent = %prefs.accent, "preferences saved");
    Ok(())
}

/// `save_at` convenience wrapper.
pub fn save(prefs: &Preferences) -> Result<(), PreferencesError> {
    save_at(&home()?, prefs)
}

// ---------------------------------------------------------------------------
// 4. Mutations
// ---------------------------------------------------------------------------

/// Set and persist the theme.
pub fn set_theme_at(home: &Path, theme: Theme) -> Result<Preferences, PreferencesError> {
    let mut prefs = load_at(home)?;
    prefs.theme = theme;
    save_at(home, &prefs)?;
    Ok(prefs)
}

/// `set_theme_at` convenience wrapper.
pub fn set_theme(theme: Theme) -> Result<Preferences, PreferencesError> {
    set_theme_at(&home()?, theme)
}

/// Flip light/dark and persist.
pub fn toggle_theme_at(home: &Path) -> Result<Preferences, PreferencesError> {
    let current = load_at(home)?;
    set_theme_at(home, current.theme.toggled())
}

/// `toggle_theme_at` convenience wrapper.
pub fn toggle_theme() -> Result<Preferences, PreferencesError> {
    toggle_theme_at(&home()?)
}

/// Set and persist the accent color.
pub fn set_accent_at(home: &Path, accent: AccentColor) -> Result<Preferences, PreferencesError> {
    let mut prefs = load_at(home)?;
    prefs.accent = accent;
    save_at(home, &prefs)?;
    Ok(prefs)
}

/// `set_accent_at` convenience wrapper.
pub fn set_accent(accent: AccentColor) -> Result<Preferences, PreferencesError> {
    set_accent_at(&home()?, accent)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn home() -> Result<PathBuf, PreferencesError> {
    dirs::home_dir().ok_or(PreferencesError::HomeNotFound)
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), PreferencesError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .map_err(|e| io_err(path, e))
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), PreferencesError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
