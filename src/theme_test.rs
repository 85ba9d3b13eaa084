use super::*;

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[test]
fn default_palette_uses_normalized_hex_colors() {
    let theme = Theme::default();
    for value in [
        &theme.page_bg,
        &theme.card_bg,
        &theme.card_tint_bg,
        &theme.heading,
        &theme.body_text,
        &theme.field_ink,
        &theme.primary,
        &theme.primary_hover,
        &theme.link,
        &theme.navbar_bg,
        &theme.border,
        &theme.error_fg,
        &theme.error_bg,
        &theme.success_fg,
        &theme.success_bg,
    ] {
        assert!(is_hex_color(value), "not a #rrggbb color: {value}");
    }
}

#[test]
fn default_palette_matches_invenza_brand_anchors() {
    let theme = Theme::default();
    assert_eq!(theme.primary, "#2c4166");
    assert_eq!(theme.link, "#b01045");
    assert_eq!(theme.heading, "#610c1e");
}
