//! Color schemes: the token set every style tree is built from.
//!
//! This module provides:
//!
//! - [`ColorScheme`]: three elevation [`Layer`]s plus [`Typography`]
//! - [`background`], [`foreground`], [`border`], [`text`]: token accessors
//! - [`AdaptiveScheme`] / [`SchemeChoice`]: light/dark selection
//! - loading from YAML/JSON files and the built-in schemes
//!
//! A scheme is built once per theme load and shared read-only; nothing in
//! this crate mutates one after construction.

mod accessors;
mod adaptive;
mod choice;
mod load;

pub use accessors::{background, border, foreground, text, FontWeight, TextOptions, TextStyle};
pub use adaptive::{detect_appearance, set_appearance_detector, AdaptiveScheme};
pub use choice::SchemeChoice;
pub use load::{SchemeError, BUILTIN_SCHEMES};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Whether a scheme is meant for light or dark surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Appearance::Light => f.write_str("light"),
            Appearance::Dark => f.write_str("dark"),
        }
    }
}

/// One of the three elevation levels of a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Elevation {
    Lowest,
    Middle,
    Highest,
}

/// Named groups of colors within a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleSetName {
    Base,
    Variant,
    On,
    Accent,
    Positive,
    Warning,
    Negative,
}

/// Interaction-state tag used when reading colors from a style set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateTag {
    Default,
    Hovered,
    Pressed,
    Active,
    Disabled,
    Inverted,
}

/// The three colors defined for one state of a style set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateStyle {
    pub background: Color,
    pub border: Color,
    pub foreground: Color,
}

impl StateStyle {
    pub const fn new(background: Color, border: Color, foreground: Color) -> Self {
        Self {
            background,
            border,
            foreground,
        }
    }
}

/// Colors for each interaction state of one style set.
///
/// Only `default` is required; missing states read as `default`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSet {
    pub default: StateStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hovered: Option<StateStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressed: Option<StateStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<StateStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<StateStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inverted: Option<StateStyle>,
}

impl StyleSet {
    /// Creates a style set where every state reads as `default`.
    pub fn new(default: StateStyle) -> Self {
        Self {
            default,
            hovered: None,
            pressed: None,
            active: None,
            disabled: None,
            inverted: None,
        }
    }

    /// Sets the colors for a state, returning the updated set for chaining.
    ///
    /// Setting [`StateTag::Default`] replaces the default colors.
    pub fn with_state(mut self, tag: StateTag, style: StateStyle) -> Self {
        match tag {
            StateTag::Default => self.default = style,
            StateTag::Hovered => self.hovered = Some(style),
            StateTag::Pressed => self.pressed = Some(style),
            StateTag::Active => self.active = Some(style),
            StateTag::Disabled => self.disabled = Some(style),
            StateTag::Inverted => self.inverted = Some(style),
        }
        self
    }

    /// Returns the colors for `tag`, falling back to `default`.
    pub fn state(&self, tag: StateTag) -> &StateStyle {
        let specific = match tag {
            StateTag::Default => None,
            StateTag::Hovered => self.hovered.as_ref(),
            StateTag::Pressed => self.pressed.as_ref(),
            StateTag::Active => self.active.as_ref(),
            StateTag::Disabled => self.disabled.as_ref(),
            StateTag::Inverted => self.inverted.as_ref(),
        };
        specific.unwrap_or(&self.default)
    }
}

/// One elevation level: a required `base` style set plus optional others.
///
/// Missing style sets read as `base`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub base: StyleSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<StyleSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<StyleSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<StyleSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positive: Option<StyleSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<StyleSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative: Option<StyleSet>,
}

impl Layer {
    /// Creates a layer with only a base style set.
    pub fn new(base: StyleSet) -> Self {
        Self {
            base,
            variant: None,
            on: None,
            accent: None,
            positive: None,
            warning: None,
            negative: None,
        }
    }

    /// Sets a style set, returning the updated layer for chaining.
    pub fn with_set(mut self, name: StyleSetName, set: StyleSet) -> Self {
        match name {
            StyleSetName::Base => self.base = set,
            StyleSetName::Variant => self.variant = Some(set),
            StyleSetName::On => self.on = Some(set),
            StyleSetName::Accent => self.accent = Some(set),
            StyleSetName::Positive => self.positive = Some(set),
            StyleSetName::Warning => self.warning = Some(set),
            StyleSetName::Negative => self.negative = Some(set),
        }
        self
    }

    /// Returns the named style set, falling back to `base`.
    pub fn style_set(&self, name: StyleSetName) -> &StyleSet {
        let specific = match name {
            StyleSetName::Base => None,
            StyleSetName::Variant => self.variant.as_ref(),
            StyleSetName::On => self.on.as_ref(),
            StyleSetName::Accent => self.accent.as_ref(),
            StyleSetName::Positive => self.positive.as_ref(),
            StyleSetName::Warning => self.warning.as_ref(),
            StyleSetName::Negative => self.negative.as_ref(),
        };
        specific.unwrap_or(&self.base)
    }
}

fn default_sans() -> String {
    "IBM Plex Sans".to_string()
}

fn default_mono() -> String {
    "IBM Plex Mono".to_string()
}

/// Font families and the text size ramp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    #[serde(default = "default_sans")]
    pub sans: String,
    #[serde(default = "default_mono")]
    pub mono: String,
    #[serde(default)]
    pub sizes: TextSizes,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            sans: default_sans(),
            mono: default_mono(),
            sizes: TextSizes::default(),
        }
    }
}

/// Named text sizes, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSizes {
    pub xs: f64,
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
}

impl Default for TextSizes {
    fn default() -> Self {
        Self {
            xs: 10.0,
            sm: 12.0,
            md: 14.0,
            lg: 16.0,
        }
    }
}

/// A complete color scheme.
///
/// # Example
///
/// ```rust
/// use stylecraft::{background, Appearance, Color, ColorScheme, Layer, StateStyle, StyleSet};
///
/// let layer = |c: u8| Layer::new(StyleSet::new(StateStyle::new(
///     Color::rgb(c, c, c),
///     Color::rgb(0, 0, 0),
///     Color::rgb(255, 255, 255),
/// )));
/// let scheme = ColorScheme::new("Gray", Appearance::Dark, layer(10), layer(20), layer(30));
///
/// assert_eq!(background(&scheme.lowest, None, None), Color::rgb(10, 10, 10));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub name: String,
    pub appearance: Appearance,
    pub lowest: Layer,
    pub middle: Layer,
    pub highest: Layer,
    #[serde(default)]
    pub typography: Typography,
}

impl ColorScheme {
    /// Creates a scheme with default typography.
    pub fn new(
        name: impl Into<String>,
        appearance: Appearance,
        lowest: Layer,
        middle: Layer,
        highest: Layer,
    ) -> Self {
        Self {
            name: name.into(),
            appearance,
            lowest,
            middle,
            highest,
            typography: Typography::default(),
        }
    }

    /// Returns the layer at the given elevation.
    pub fn layer(&self, elevation: Elevation) -> &Layer {
        match elevation {
            Elevation::Lowest => &self.lowest,
            Elevation::Middle => &self.middle,
            Elevation::Highest => &self.highest,
        }
    }

    pub fn is_light(&self) -> bool {
        self.appearance == Appearance::Light
    }
}
