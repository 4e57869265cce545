use proptest::prelude::*;
use stylecraft::{
    background, build_theme, foreground, titlebar, user_menu_button, Appearance, Color,
    ColorScheme, Interaction, Layer, StateStyle, StateTag, StyleMap, StyleSet, StyleValue,
    Toggleable,
};

fn icon(button: &Toggleable) -> &StyleMap {
    button
        .base
        .base
        .get("icon")
        .and_then(StyleValue::as_map)
        .expect("icon map")
}

fn scheme_from(colors: [Color; 6]) -> ColorScheme {
    let [bg, border, fg, hover, press, active] = colors;
    let set = StyleSet::new(StateStyle::new(bg, border, fg))
        .with_state(StateTag::Hovered, StateStyle::new(hover, border, fg))
        .with_state(StateTag::Pressed, StateStyle::new(press, border, fg))
        .with_state(StateTag::Active, StateStyle::new(active, border, fg));
    ColorScheme::new(
        "Generated",
        Appearance::Dark,
        Layer::new(set.clone()),
        Layer::new(set.clone()),
        Layer::new(set),
    )
}

fn color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::rgb(r, g, b))
}

#[test]
fn test_titlebar_has_exactly_two_buttons() {
    for name in stylecraft::BUILTIN_SCHEMES {
        let scheme = ColorScheme::builtin(name).unwrap();
        let json = serde_json::to_value(titlebar(&scheme)).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("userMenuButtonOnline"));
        assert!(obj.contains_key("userMenuButtonOffline"));
    }
}

#[test]
fn test_builtin_online_offline_icon_colors() {
    let scheme = ColorScheme::builtin("one-dark").unwrap();
    let styles = titlebar(&scheme);
    assert_eq!(
        icon(&styles.user_menu_button_online).color("color"),
        Some(foreground(&scheme.lowest, None, None))
    );
    assert_eq!(
        icon(&styles.user_menu_button_offline).color("color"),
        Some(background(&scheme.lowest, None, None))
    );
}

#[test]
fn test_builtin_variants_all_resolved() {
    let scheme = ColorScheme::builtin("one-light").unwrap();
    let button = user_menu_button(&scheme, true);
    let variants = button.variants();
    let names: Vec<String> = variants.iter().map(|v| v.name()).collect();
    assert_eq!(
        names,
        vec!["default", "hovered", "clicked", "active", "active.hovered", "active.clicked"]
    );
    for v in &variants {
        assert_eq!(v.style.keys().count(), button.base.base.len(), "{}", v.name());
    }
}

#[test]
fn test_renderer_json_contract() {
    let scheme = ColorScheme::builtin("one-dark").unwrap();
    let json = serde_json::to_value(build_theme(&scheme)).unwrap();
    let base = &json["titlebar"]["userMenuButtonOnline"]["base"]["base"];

    assert_eq!(base["cornerRadius"], 6.0);
    assert_eq!(base["padding"]["right"], 20.0);
    assert_eq!(base["avatar"]["outer_corner_radius"], 0.0);
    assert_eq!(base["avatar"]["outerCornerRadius"], 10.0);
    assert_eq!(base["avatar"]["outer_width"], 0.0);
    assert_eq!(base["avatar"]["outerWidth"], 10.0);
    assert_eq!(base["background"], "#24272e");
    assert_eq!(base["icon"]["color"], "#c8ccd4");
}

proptest! {
    #[test]
    fn prop_icon_color_tracks_lowest_layer(colors in prop::array::uniform6(color())) {
        let scheme = scheme_from(colors);
        let styles = titlebar(&scheme);

        prop_assert_eq!(
            icon(&styles.user_menu_button_online).color("color"),
            Some(foreground(&scheme.lowest, None, None))
        );
        prop_assert_eq!(
            icon(&styles.user_menu_button_offline).color("color"),
            Some(background(&scheme.lowest, None, None))
        );
    }

    #[test]
    fn prop_online_offline_differ_only_in_icon_color(colors in prop::array::uniform6(color())) {
        let scheme = scheme_from(colors);
        let mut online = user_menu_button(&scheme, true);
        let offline = user_menu_button(&scheme, false);

        let mut patched_icon = icon(&online).clone();
        patched_icon.insert("color", icon(&offline).color("color").unwrap());
        online.base.base.insert("icon", patched_icon);

        prop_assert_eq!(online, offline);
    }

    #[test]
    fn prop_build_is_idempotent(colors in prop::array::uniform6(color())) {
        let scheme = scheme_from(colors);
        prop_assert_eq!(build_theme(&scheme), build_theme(&scheme));
    }

    #[test]
    fn prop_active_hover_wins(colors in prop::array::uniform6(color())) {
        let scheme = scheme_from(colors);
        let button = user_menu_button(&scheme, true);
        let resolved = button.resolve(true, Some(Interaction::Hovered));
        prop_assert_eq!(
            resolved.color("background"),
            Some(background(&scheme.middle, None, StateTag::Hovered))
        );
    }
}
