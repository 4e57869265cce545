//! Titlebar style tree.

use serde::Serialize;

use crate::scheme::{background, foreground, ColorScheme, Layer, StateTag};
use crate::style::{interactive, toggleable, ActiveStyle, Interaction, StyleMap, Toggleable};

const BUTTON_CORNER_RADIUS: i32 = 6;
const BUTTON_WIDTH: i32 = 37;
const BUTTON_HEIGHT: i32 = 19;
const CHEVRON_SIZE: i32 = 8;
const AVATAR_SIZE: i32 = 16;

/// Styles for the titlebar, as read by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitlebarStyle {
    pub user_menu_button_online: Toggleable,
    pub user_menu_button_offline: Toggleable,
}

/// Builds the titlebar styles for a scheme.
pub fn titlebar(scheme: &ColorScheme) -> TitlebarStyle {
    TitlebarStyle {
        user_menu_button_online: user_menu_button(scheme, true),
        user_menu_button_offline: user_menu_button(scheme, false),
    }
}

fn padding(top: i32, bottom: i32, left: i32, right: i32) -> StyleMap {
    StyleMap::new()
        .with("top", top)
        .with("bottom", bottom)
        .with("left", left)
        .with("right", right)
}

// The snake_case and camelCase outer ring keys disagree on value. Both are
// emitted verbatim; which one the renderer reads is unresolved.
fn avatar() -> StyleMap {
    StyleMap::new()
        .with("iconWidth", AVATAR_SIZE)
        .with("iconHeight", AVATAR_SIZE)
        .with("cornerRadius", AVATAR_SIZE / 2)
        .with("outer_width", 0)
        .with("outer_corner_radius", 0)
        .with("outerWidth", 10)
        .with("outerCornerRadius", 10)
}

/// The user menu toggle in the titlebar.
///
/// Only the chevron color depends on `online`: the lowest layer's
/// foreground when online, its background (so the chevron disappears)
/// when offline.
pub fn user_menu_button(scheme: &ColorScheme, online: bool) -> Toggleable {
    let icon_color = if online {
        foreground(&scheme.lowest, None, None)
    } else {
        background(&scheme.lowest, None, None)
    };

    let base = StyleMap::new()
        .with("cornerRadius", BUTTON_CORNER_RADIUS)
        .with("width", BUTTON_WIDTH)
        .with("height", BUTTON_HEIGHT)
        .with("padding", padding(2, 2, 6, 20))
        .with("background", background(&scheme.lowest, None, None))
        .with(
            "icon",
            StyleMap::new()
                .with("color", icon_color)
                .with("width", CHEVRON_SIZE)
                .with("height", CHEVRON_SIZE),
        )
        .with("avatar", avatar());

    let bg = |layer: &Layer, state: StateTag| {
        StyleMap::new().with("background", background(layer, None, state))
    };

    toggleable(
        interactive(
            base,
            [
                (Interaction::Hovered, bg(&scheme.lowest, StateTag::Hovered)),
                (Interaction::Clicked, bg(&scheme.lowest, StateTag::Pressed)),
            ],
        ),
        ActiveStyle::new(bg(&scheme.middle, StateTag::Active))
            .hovered(bg(&scheme.middle, StateTag::Hovered))
            .clicked(bg(&scheme.middle, StateTag::Pressed)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::scheme::tests::sample_scheme;
    use crate::style::StyleValue;

    fn icon_color(button: &Toggleable) -> Color {
        button
            .base
            .base
            .get("icon")
            .and_then(StyleValue::as_map)
            .and_then(|icon| icon.color("color"))
            .unwrap()
    }

    #[test]
    fn test_online_icon_uses_foreground() {
        let scheme = sample_scheme();
        let button = user_menu_button(&scheme, true);
        assert_eq!(icon_color(&button), foreground(&scheme.lowest, None, None));
    }

    #[test]
    fn test_offline_icon_uses_background() {
        let scheme = sample_scheme();
        let button = user_menu_button(&scheme, false);
        assert_eq!(icon_color(&button), background(&scheme.lowest, None, None));
    }

    #[test]
    fn test_base_has_renderer_properties() {
        let button = user_menu_button(&sample_scheme(), true);
        for key in ["cornerRadius", "width", "height", "padding", "background", "icon", "avatar"] {
            assert!(button.base.base.has(key), "missing {}", key);
        }
    }

    #[test]
    fn test_avatar_keeps_both_spellings() {
        let button = user_menu_button(&sample_scheme(), true);
        let avatar = button.base.base.get("avatar").and_then(StyleValue::as_map).unwrap();
        let num = |k: &str| avatar.get(k).and_then(StyleValue::as_number);

        assert_eq!(num("outer_corner_radius"), Some(0.0));
        assert_eq!(num("outer_width"), Some(0.0));
        assert_eq!(num("outerCornerRadius"), Some(10.0));
        assert_eq!(num("outerWidth"), Some(10.0));
    }

    #[test]
    fn test_states_resolve_through_scheme() {
        let scheme = sample_scheme();
        let button = user_menu_button(&scheme, true);

        let hovered = button.resolve(false, Some(Interaction::Hovered));
        assert_eq!(
            hovered.color("background"),
            Some(background(&scheme.lowest, None, StateTag::Hovered))
        );

        let active = button.resolve(true, None);
        assert_eq!(
            active.color("background"),
            Some(background(&scheme.middle, None, StateTag::Active))
        );

        let active_clicked = button.resolve(true, Some(Interaction::Clicked));
        assert_eq!(
            active_clicked.color("background"),
            Some(background(&scheme.middle, None, StateTag::Pressed))
        );
    }

    #[test]
    fn test_button_validates() {
        assert!(user_menu_button(&sample_scheme(), false).validate().is_ok());
    }

    #[test]
    fn test_titlebar_keys() {
        let json = serde_json::to_value(titlebar(&sample_scheme())).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["userMenuButtonOffline", "userMenuButtonOnline"]);
    }
}
