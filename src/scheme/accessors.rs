//! Token accessors: read a concrete color or text style out of a layer.
//!
//! Every accessor takes an optional style set (defaulting to `base`) and an
//! optional state tag (defaulting to `default`), so call sites read like
//! `background(&scheme.lowest, None, StateTag::Hovered)`.

use serde::Serialize;

use super::{Layer, StateStyle, StateTag, StyleSetName};
use crate::color::Color;
use crate::style::StyleMap;

fn lookup(
    layer: &Layer,
    style_set: Option<StyleSetName>,
    state: Option<StateTag>,
) -> &StateStyle {
    layer
        .style_set(style_set.unwrap_or(StyleSetName::Base))
        .state(state.unwrap_or(StateTag::Default))
}

/// Background color of a style set in a given state.
pub fn background(
    layer: &Layer,
    style_set: impl Into<Option<StyleSetName>>,
    state: impl Into<Option<StateTag>>,
) -> Color {
    lookup(layer, style_set.into(), state.into()).background
}

/// Foreground color of a style set in a given state.
pub fn foreground(
    layer: &Layer,
    style_set: impl Into<Option<StyleSetName>>,
    state: impl Into<Option<StateTag>>,
) -> Color {
    lookup(layer, style_set.into(), state.into()).foreground
}

/// Border color of a style set in a given state.
pub fn border(
    layer: &Layer,
    style_set: impl Into<Option<StyleSetName>>,
    state: impl Into<Option<StateTag>>,
) -> Color {
    lookup(layer, style_set.into(), state.into()).border
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Light,
    Normal,
    Medium,
    Semibold,
    Bold,
}

/// Size and decoration options for [`text`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOptions {
    pub size: f64,
    pub weight: Option<FontWeight>,
    pub underline: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            size: 12.0,
            weight: None,
            underline: false,
        }
    }
}

impl TextOptions {
    pub fn size(size: f64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

/// A resolved text style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    pub family: String,
    pub color: Color,
    pub size: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub underline: bool,
}

/// Text style colored with the foreground of a style set in a given state.
pub fn text(
    layer: &Layer,
    family: &str,
    style_set: impl Into<Option<StyleSetName>>,
    state: impl Into<Option<StateTag>>,
    options: TextOptions,
) -> TextStyle {
    TextStyle {
        family: family.to_string(),
        color: foreground(layer, style_set, state),
        size: options.size,
        weight: options.weight,
        underline: options.underline,
    }
}

impl From<TextStyle> for StyleMap {
    fn from(text: TextStyle) -> Self {
        let mut map = StyleMap::new()
            .with("family", text.family)
            .with("color", text.color)
            .with("size", text.size);
        if let Some(weight) = text.weight {
            let name = match weight {
                FontWeight::Light => "light",
                FontWeight::Normal => "normal",
                FontWeight::Medium => "medium",
                FontWeight::Semibold => "semibold",
                FontWeight::Bold => "bold",
            };
            map.insert("weight", name);
        }
        if text.underline {
            map.insert("underline", true);
        }
        map
    }
}
