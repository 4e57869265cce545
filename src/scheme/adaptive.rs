//! Scheme pairs that follow the system light/dark preference.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;
use tracing::debug;

use super::{Appearance, ColorScheme};

/// A light and a dark scheme, picked between by the current appearance.
///
/// # Example
///
/// ```rust
/// use stylecraft::{set_appearance_detector, AdaptiveScheme, Appearance, ColorScheme};
///
/// let adaptive = AdaptiveScheme::new(
///     ColorScheme::builtin("one-light").unwrap(),
///     ColorScheme::builtin("one-dark").unwrap(),
/// );
///
/// set_appearance_detector(|| Appearance::Dark);
/// assert_eq!(adaptive.resolve().name, "One Dark");
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveScheme {
    light: ColorScheme,
    dark: ColorScheme,
}

impl AdaptiveScheme {
    pub fn new(light: ColorScheme, dark: ColorScheme) -> Self {
        Self { light, dark }
    }

    /// The two built-in schemes as a pair.
    pub fn builtin() -> Result<Self, super::SchemeError> {
        Ok(Self::new(
            ColorScheme::builtin("one-light")?,
            ColorScheme::builtin("one-dark")?,
        ))
    }

    /// Returns the scheme for an explicit appearance.
    pub fn for_appearance(&self, appearance: Appearance) -> &ColorScheme {
        match appearance {
            Appearance::Light => &self.light,
            Appearance::Dark => &self.dark,
        }
    }

    /// Returns the scheme matching the detected appearance.
    pub fn resolve(&self) -> &ColorScheme {
        self.for_appearance(detect_appearance())
    }
}

type AppearanceDetector = fn() -> Appearance;

static APPEARANCE_DETECTOR: Lazy<Mutex<AppearanceDetector>> =
    Lazy::new(|| Mutex::new(os_appearance_detector));

/// Overrides the detector used to decide between light and dark schemes.
///
/// This is useful for testing or when you want to force a specific appearance.
pub fn set_appearance_detector(detector: AppearanceDetector) {
    let mut guard = APPEARANCE_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Runs the current appearance detector.
pub fn detect_appearance() -> Appearance {
    let detector = *APPEARANCE_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let appearance = detector();
    debug!(%appearance, "detected appearance");
    appearance
}

pub(crate) fn os_appearance_detector() -> Appearance {
    match detect_os_theme() {
        OsThemeMode::Dark => Appearance::Dark,
        OsThemeMode::Light => Appearance::Light,
    }
}
