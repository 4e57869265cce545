//! # Stylecraft - Interaction-aware style trees from color schemes
//!
//! Stylecraft turns a [`ColorScheme`] into fully resolved style records for
//! UI components. Records are plain data: a base style plus unmerged
//! overlays for transient pointer states ([`Interactive`]) and a persistent
//! active state ([`Toggleable`]). A renderer picks the variant it needs with
//! [`Toggleable::resolve`].
//!
//! ## Resolution order
//!
//! For a toggled, hovered button the style is built as
//! `base.base` < `base.state.hovered` < `state.active.default` <
//! `state.active.hovered`, each later layer overriding keys of the earlier
//! ones (shallow merge).
//!
//! ## Quick Start
//!
//! ```rust
//! use stylecraft::{titlebar, ColorScheme, Interaction};
//!
//! let scheme = ColorScheme::builtin("one-dark").unwrap();
//! let styles = titlebar(&scheme);
//!
//! let hovered = styles
//!     .user_menu_button_online
//!     .resolve(false, Some(Interaction::Hovered));
//! assert!(hovered.has("background"));
//! ```
//!
//! ## Schemes
//!
//! Schemes have three elevation layers (`lowest`, `middle`, `highest`).
//! Colors are read with [`background`], [`foreground`], [`border`] and
//! [`text`], which take an optional style set and state tag. Schemes load
//! from YAML or JSON ([`ColorScheme::load`]) or come built in
//! ([`ColorScheme::builtin`]); [`AdaptiveScheme`] picks between a light and
//! a dark scheme based on the OS setting.

pub mod color;
pub mod components;
pub mod preview;
pub mod scheme;
pub mod style;
pub mod tree;

pub use color::{Color, ColorParseError};
pub use components::{titlebar, user_menu_button, TitlebarStyle};
pub use scheme::{
    background, border, detect_appearance, foreground, set_appearance_detector, text,
    AdaptiveScheme, Appearance, ColorScheme, Elevation, FontWeight, Layer, SchemeChoice,
    SchemeError, StateStyle, StateTag, StyleSet, StyleSetName, TextOptions, TextSizes,
    TextStyle, Typography, BUILTIN_SCHEMES,
};
pub use style::{
    interactive, toggleable, ActiveStyle, Interaction, Interactive, ResolvedVariant,
    StyleMap, StyleValidationError, StyleValue, ToggleStates, Toggleable,
};
pub use tree::{build_theme, build_theme_for, ThemeMeta, ThemeStyles};
