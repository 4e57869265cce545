//! Transient pointer states layered over a base style.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::error::StyleValidationError;
use super::value::StyleMap;

/// A transient interaction state driven by the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Interaction {
    Hovered,
    Clicked,
    Disabled,
}

impl Interaction {
    /// All transient states, in resolution listing order.
    pub const ALL: [Interaction; 3] = [
        Interaction::Hovered,
        Interaction::Clicked,
        Interaction::Disabled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interaction::Hovered => "hovered",
            Interaction::Clicked => "clicked",
            Interaction::Disabled => "disabled",
        }
    }
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A base style plus unmerged overlays for transient states.
///
/// Overlays are stored as given; [`Interactive::resolve`] merges on demand.
///
/// # Example
///
/// ```rust
/// use stylecraft::{Color, Interaction, Interactive, StyleMap};
///
/// let button = Interactive::new(StyleMap::new().with("background", Color::rgb(0, 0, 0)))
///     .hovered(StyleMap::new().with("background", Color::rgb(9, 9, 9)));
///
/// let hovered = button.resolve(Some(Interaction::Hovered));
/// assert_eq!(hovered.color("background"), Some(Color::rgb(9, 9, 9)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Interactive {
    pub base: StyleMap,
    pub state: BTreeMap<Interaction, StyleMap>,
}

/// Wraps a base style with overlays for the given transient states.
///
/// This is a purely structural wrap: `base` is exposed unchanged and `state`
/// holds exactly the provided keys. A later entry for the same state
/// replaces an earlier one.
pub fn interactive<I>(base: StyleMap, state: I) -> Interactive
where
    I: IntoIterator<Item = (Interaction, StyleMap)>,
{
    Interactive {
        base,
        state: state.into_iter().collect(),
    }
}

impl Interactive {
    /// Creates an interactive style with no overlays.
    pub fn new(base: StyleMap) -> Self {
        Self {
            base,
            state: BTreeMap::new(),
        }
    }

    /// Sets the overlay for `state`, returning the updated style for chaining.
    pub fn with_state(mut self, state: Interaction, overlay: StyleMap) -> Self {
        self.state.insert(state, overlay);
        self
    }

    pub fn hovered(self, overlay: StyleMap) -> Self {
        self.with_state(Interaction::Hovered, overlay)
    }

    pub fn clicked(self, overlay: StyleMap) -> Self {
        self.with_state(Interaction::Clicked, overlay)
    }

    pub fn disabled(self, overlay: StyleMap) -> Self {
        self.with_state(Interaction::Disabled, overlay)
    }

    /// Returns the overlay for `state` if one was provided.
    pub fn overlay(&self, state: Interaction) -> Option<&StyleMap> {
        self.state.get(&state)
    }

    /// Resolves the style for an optional transient state.
    ///
    /// Starts from `base` and applies the overlay for `transient` when one
    /// exists. A state without an overlay resolves to `base`.
    pub fn resolve(&self, transient: Option<Interaction>) -> StyleMap {
        let mut out = self.base.clone();
        if let Some(overlay) = transient.and_then(|t| self.state.get(&t)) {
            out.apply(overlay);
        }
        out
    }

    /// Checks that every overlay only sets properties the base defines.
    ///
    /// Not called by the combinators themselves; renderers that look up
    /// properties on `base` first can use this to catch typos early.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        for (state, overlay) in &self.state {
            check_overlay(&self.base, state.as_str(), overlay)?;
        }
        Ok(())
    }
}

impl From<StyleMap> for Interactive {
    fn from(base: StyleMap) -> Self {
        Interactive::new(base)
    }
}

pub(crate) fn check_overlay(
    base: &StyleMap,
    state: &str,
    overlay: &StyleMap,
) -> Result<(), StyleValidationError> {
    match overlay.keys().find(|k| !base.has(k)) {
        Some(property) => Err(StyleValidationError::UnknownProperty {
            state: state.to_string(),
            property: property.to_string(),
        }),
        None => Ok(()),
    }
}
