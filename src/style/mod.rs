//! Style combinators for layered interaction states.
//!
//! This module provides the core styling primitives:
//!
//! - [`StyleMap`] / [`StyleValue`]: flat, fully resolved property records
//! - [`Interactive`]: a base style with transient (hover/click) overlays
//! - [`Toggleable`]: an interactive style with a persistent active axis
//! - [`StyleValidationError`]: errors from the opt-in overlay checks
//!
//! Combinators are plain functions over data: [`interactive`] and
//! [`toggleable`] wrap their inputs without merging, and the records resolve
//! a concrete style for any state on request.

mod error;
mod interactive;
mod toggleable;
mod value;

pub use error::StyleValidationError;
pub use interactive::{interactive, Interaction, Interactive};
pub use toggleable::{toggleable, ActiveStyle, ResolvedVariant, ToggleStates, Toggleable};
pub use value::{StyleMap, StyleValue};
