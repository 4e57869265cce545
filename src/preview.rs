//! Terminal listing of resolved style variants.

use console::{Color as TermColor, Style};

use crate::color::Color;
use crate::style::{StyleMap, StyleValue, Toggleable};

/// Renders one line per resolved variant of `style`.
///
/// Each line lists the color-valued properties of the variant, nested maps
/// flattened with dotted names. With `use_color` set, every color is
/// preceded by a swatch in the nearest ANSI-256 color.
///
/// # Example
///
/// ```rust
/// use stylecraft::{preview::render_variants, toggleable, Color, StyleMap};
///
/// let bg = |c: u8| StyleMap::new().with("background", Color::rgb(c, c, c));
/// let out = render_variants("button", &toggleable(bg(1), bg(2)), false);
/// assert!(out.contains("active"));
/// ```
pub fn render_variants(title: &str, style: &Toggleable, use_color: bool) -> String {
    let variants = style.variants();
    let width = variants
        .iter()
        .map(|v| v.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    for variant in &variants {
        let colors = color_props(&variant.style)
            .into_iter()
            .map(|(name, color)| format!("{}={}", name, swatch(color, use_color)))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!("  {:<width$}  {}\n", variant.name(), colors, width = width));
    }
    out
}

fn swatch(color: Color, use_color: bool) -> String {
    if use_color {
        let block = Style::new()
            .bg(TermColor::Color256(color.to_ansi256()))
            .force_styling(true)
            .apply_to("  ");
        format!("{} {}", block, color)
    } else {
        color.to_string()
    }
}

fn color_props(style: &StyleMap) -> Vec<(String, Color)> {
    let mut found = Vec::new();
    collect_colors("", style, &mut found);
    found
}

fn collect_colors(prefix: &str, style: &StyleMap, found: &mut Vec<(String, Color)>) {
    for (name, value) in style.iter() {
        let path = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", prefix, name)
        };
        match value {
            StyleValue::Color(c) => found.push((path, *c)),
            StyleValue::Map(nested) => collect_colors(&path, nested, found),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{toggleable, ActiveStyle, Interactive};

    fn button() -> Toggleable {
        let bg = |c: u8| StyleMap::new().with("background", Color::rgb(c, c, c));
        toggleable(
            Interactive::new(
                bg(1).with(
                    "icon",
                    StyleMap::new()
                        .with("color", Color::rgb(255, 0, 0))
                        .with("width", 8),
                ),
            )
            .hovered(bg(2)),
            ActiveStyle::new(bg(3)),
        )
    }

    #[test]
    fn test_plain_listing() {
        let out = render_variants("menu", &button(), false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "menu");
        assert_eq!(lines.len(), 5);
        assert!(lines[1].trim_start().starts_with("default"));
        assert!(lines[1].contains("background=#010101"));
        assert!(lines[1].contains("icon.color=#ff0000"));
        assert!(!lines[1].contains("width"));
        assert!(lines[4].contains("active.hovered"));
        assert!(lines[4].contains("background=#030303"));
    }

    #[test]
    fn test_plain_listing_has_no_escapes() {
        assert!(!render_variants("menu", &button(), false).contains('\x1b'));
    }

    #[test]
    fn test_colored_listing_draws_swatches() {
        let out = render_variants("menu", &button(), true);
        // red maps to palette index 196
        assert!(out.contains("\x1b[48;5;196m"));
        assert!(out.contains("#ff0000"));
    }
}
