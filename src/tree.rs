//! The exported theme record: metadata plus every component tree.

use serde::Serialize;

use crate::components::{titlebar, TitlebarStyle};
use crate::scheme::{Appearance, ColorScheme, SchemeChoice};

/// Name and appearance of the scheme a theme was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeMeta {
    pub name: String,
    pub appearance: Appearance,
}

/// All component styles for one scheme.
///
/// # Example
///
/// ```rust
/// use stylecraft::{build_theme, ColorScheme};
///
/// let scheme = ColorScheme::builtin("one-dark").unwrap();
/// let theme = build_theme(&scheme);
/// let json = theme.to_json(false).unwrap();
/// assert!(json.contains("userMenuButtonOnline"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeStyles {
    pub meta: ThemeMeta,
    pub titlebar: TitlebarStyle,
}

/// Builds every component tree for `scheme`.
pub fn build_theme(scheme: &ColorScheme) -> ThemeStyles {
    ThemeStyles {
        meta: ThemeMeta {
            name: scheme.name.clone(),
            appearance: scheme.appearance,
        },
        titlebar: titlebar(scheme),
    }
}

/// Resolves `choice` and builds the theme for the resulting scheme.
pub fn build_theme_for<'a>(choice: impl Into<SchemeChoice<'a>>) -> ThemeStyles {
    build_theme(choice.into().resolve())
}

impl ThemeStyles {
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::tests::sample_scheme;

    #[test]
    fn test_meta_mirrors_scheme() {
        let theme = build_theme(&sample_scheme());
        assert_eq!(theme.meta.name, "Sample");
        assert_eq!(theme.meta.appearance, Appearance::Dark);
    }

    #[test]
    fn test_build_is_deterministic() {
        let scheme = sample_scheme();
        assert_eq!(build_theme(&scheme), build_theme(&scheme));
        assert_eq!(
            build_theme(&scheme).to_json(false).unwrap(),
            build_theme(&scheme).to_json(false).unwrap()
        );
    }

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&build_theme(&sample_scheme()).to_json(true).unwrap()).unwrap();
        assert_eq!(json["meta"]["appearance"], "dark");
        let button = &json["titlebar"]["userMenuButtonOnline"];
        assert_eq!(button["base"]["base"]["cornerRadius"], 6.0);
        assert!(button["state"]["active"]["default"]["background"].is_string());
    }

    #[test]
    fn test_yaml_output() {
        let yaml = build_theme(&sample_scheme()).to_yaml().unwrap();
        assert!(yaml.contains("userMenuButtonOffline:"));
        assert!(yaml.contains("outerCornerRadius:"));
    }

    #[test]
    fn test_build_theme_for_fixed_choice() {
        let scheme = sample_scheme();
        assert_eq!(build_theme_for(&scheme), build_theme(&scheme));
    }
}
