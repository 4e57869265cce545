//! A persistent active/inactive axis layered over an interactive style.
//!
//! Resolution for a `(toggled, transient)` pair proceeds in four steps,
//! each later step winning over earlier ones:
//!
//! 1. `base.base`
//! 2. `base.state[transient]`, if present
//! 3. `state.active.default`, if toggled
//! 4. `state.active[transient]`, if toggled and present
//!
//! So overlays keyed under `active` take precedence over the plain transient
//! overlays whenever the toggle is on.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::error::StyleValidationError;
use super::interactive::{check_overlay, Interaction, Interactive};
use super::value::StyleMap;

/// Overlays applied while the toggle is on.
///
/// Serializes as `{ "default": {...}, "hovered": {...}, ... }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActiveStyle {
    pub default: StyleMap,
    #[serde(flatten)]
    pub state: BTreeMap<Interaction, StyleMap>,
}

impl ActiveStyle {
    /// Creates an active overlay with only a default layer.
    pub fn new(default: StyleMap) -> Self {
        Self {
            default,
            state: BTreeMap::new(),
        }
    }

    /// Sets the overlay for `state` while active, returning the updated value.
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
}

impl From<StyleMap> for ActiveStyle {
    fn from(default: StyleMap) -> Self {
        ActiveStyle::new(default)
    }
}

/// Persistent states of a toggleable record, keyed under `state`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ToggleStates {
    pub active: ActiveStyle,
}

/// An interactive style with an additional persistent toggle.
///
/// # Example
///
/// ```rust
/// use stylecraft::{toggleable, ActiveStyle, Color, Interaction, Interactive, StyleMap};
///
/// let bg = |c: u8| StyleMap::new().with("background", Color::rgb(c, c, c));
/// let button = toggleable(
///     Interactive::new(bg(1)).hovered(bg(2)),
///     ActiveStyle::new(bg(3)).hovered(bg(4)),
/// );
///
/// let style = button.resolve(true, Some(Interaction::Hovered));
/// assert_eq!(style.color("background"), Some(Color::rgb(4, 4, 4)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Toggleable {
    pub base: Interactive,
    pub state: ToggleStates,
}

/// Adds an active/inactive axis to `base`.
///
/// `base` may be an [`Interactive`] or a bare [`StyleMap`]; `active` may be an
/// [`ActiveStyle`] or a bare default overlay.
pub fn toggleable(base: impl Into<Interactive>, active: impl Into<ActiveStyle>) -> Toggleable {
    Toggleable {
        base: base.into(),
        state: ToggleStates {
            active: active.into(),
        },
    }
}

/// One fully resolved combination of toggle and transient state.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedVariant {
    pub toggled: bool,
    pub interaction: Option<Interaction>,
    pub style: StyleMap,
}

impl ResolvedVariant {
    /// Dotted variant name: `default`, `hovered`, `active`, `active.hovered`.
    pub fn name(&self) -> String {
        match (self.toggled, self.interaction) {
            (false, None) => "default".to_string(),
            (false, Some(i)) => i.as_str().to_string(),
            (true, None) => "active".to_string(),
            (true, Some(i)) => format!("active.{}", i),
        }
    }
}

impl Toggleable {
    /// Returns the active overlay for a transient state, if provided.
    pub fn active_overlay(&self, transient: Interaction) -> Option<&StyleMap> {
        self.state.active.state.get(&transient)
    }

    /// Resolves the style for a toggle value and optional transient state.
    pub fn resolve(&self, toggled: bool, transient: Option<Interaction>) -> StyleMap {
        let mut out = self.base.resolve(transient);
        if toggled {
            out.apply(&self.state.active.default);
            if let Some(overlay) = transient.and_then(|t| self.active_overlay(t)) {
                out.apply(overlay);
            }
        }
        out
    }

    /// Transient states that carry an overlay on either axis.
    pub fn reachable_interactions(&self) -> BTreeSet<Interaction> {
        self.base
            .state
            .keys()
            .chain(self.state.active.state.keys())
            .copied()
            .collect()
    }

    /// Resolves every reachable variant eagerly.
    ///
    /// Inactive variants come first, then active ones; within each group the
    /// plain state precedes the transient states in [`Interaction::ALL`]
    /// order.
    pub fn variants(&self) -> Vec<ResolvedVariant> {
        let reachable = self.reachable_interactions();
        let transients: Vec<Option<Interaction>> = std::iter::once(None)
            .chain(reachable.into_iter().map(Some))
            .collect();
        let transients = &transients;

        [false, true]
            .into_iter()
            .flat_map(move |toggled| {
                transients.iter().map(move |&interaction| ResolvedVariant {
                    toggled,
                    interaction,
                    style: self.resolve(toggled, interaction),
                })
            })
            .collect()
    }

    /// Checks every overlay, including the active ones, against the base.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        self.base.validate()?;
        let base = &self.base.base;
        check_overlay(base, "active", &self.state.active.default)?;
        for (state, overlay) in &self.state.active.state {
            check_overlay(base, &format!("active.{}", state), overlay)?;
        }
        Ok(())
    }
}
