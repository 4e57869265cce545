//! Scheme selection for building style trees.

use super::adaptive::AdaptiveScheme;
use super::ColorScheme;

/// Reference to either a fixed scheme or an adaptive pair.
#[derive(Debug, Clone, Copy)]
pub enum SchemeChoice<'a> {
    /// A scheme used regardless of the system appearance.
    Fixed(&'a ColorScheme),
    /// A light/dark pair resolved against the current appearance detector.
    Adaptive(&'a AdaptiveScheme),
}

impl<'a> SchemeChoice<'a> {
    /// Resolves to a concrete scheme.
    pub fn resolve(&self) -> &'a ColorScheme {
        match *self {
            SchemeChoice::Fixed(scheme) => scheme,
            SchemeChoice::Adaptive(adaptive) => adaptive.resolve(),
        }
    }
}

impl<'a> From<&'a ColorScheme> for SchemeChoice<'a> {
    fn from(scheme: &'a ColorScheme) -> Self {
        SchemeChoice::Fixed(scheme)
    }
}

impl<'a> From<&'a AdaptiveScheme> for SchemeChoice<'a> {
    fn from(adaptive: &'a AdaptiveScheme) -> Self {
        SchemeChoice::Adaptive(adaptive)
    }
}
