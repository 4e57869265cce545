//! Style values and flat style maps.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::color::Color;

/// A single property value in a style record.
///
/// Values are always concrete: colors have already been looked up in the
/// scheme by the time they land here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Bool(bool),
    Number(f64),
    Color(Color),
    Text(String),
    Map(StyleMap),
}

impl StyleValue {
    /// Returns the color if this value is one.
    pub fn as_color(&self) -> Option<Color> {
        match self {
            StyleValue::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Returns the number if this value is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the nested map if this value is one.
    pub fn as_map(&self) -> Option<&StyleMap> {
        match self {
            StyleValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Bool(b)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<u32> for StyleValue {
    fn from(n: u32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<Color> for StyleValue {
    fn from(c: Color) -> Self {
        StyleValue::Color(c)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<StyleMap> for StyleValue {
    fn from(m: StyleMap) -> Self {
        StyleValue::Map(m)
    }
}

/// A flat mapping of property names to values.
///
/// Property names are kept verbatim, since they form the contract with
/// whatever renderer reads the output. Iteration and serialization order is
/// sorted by name.
///
/// # Example
///
/// ```rust
/// use stylecraft::{Color, StyleMap};
///
/// let base = StyleMap::new()
///     .with("cornerRadius", 6)
///     .with("background", Color::rgb(30, 31, 44));
/// let hovered = StyleMap::new().with("background", Color::rgb(40, 41, 58));
///
/// let merged = base.merged(&hovered);
/// assert_eq!(merged.get("cornerRadius").and_then(|v| v.as_number()), Some(6.0));
/// assert_eq!(merged.color("background"), Some(Color::rgb(40, 41, 58)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleMap {
    props: BTreeMap<String, StyleValue>,
}

impl StyleMap {
    /// Creates an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the updated map for chaining.
    pub fn with<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a property in place, returning the previous value if any.
    pub fn insert<V: Into<StyleValue>>(&mut self, name: &str, value: V) -> Option<StyleValue> {
        self.props.insert(name.to_string(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.props.get(name)
    }

    /// Shorthand for reading a color-valued property.
    pub fn color(&self, name: &str) -> Option<Color> {
        self.get(name).and_then(StyleValue::as_color)
    }

    /// Returns true if a property with this exact name exists.
    pub fn has(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Applies `overlay` on top of this map in place.
    ///
    /// Merge is shallow: an overlay key replaces the base value of the same
    /// name wholesale, nested maps included.
    pub fn apply(&mut self, overlay: &StyleMap) {
        for (name, value) in &overlay.props {
            self.props.insert(name.clone(), value.clone());
        }
    }

    /// Returns a copy of this map with `overlay` applied.
    pub fn merged(&self, overlay: &StyleMap) -> StyleMap {
        let mut out = self.clone();
        out.apply(overlay);
        out
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            props: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
