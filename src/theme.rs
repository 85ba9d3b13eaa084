//! Injectable color palette for the UI.
//!
//! DESIGN
//! ======
//! Screens read the palette from Leptos context instead of module-level
//! literals, so an alternative theme is a different `Theme` value at
//! mount time rather than a recompile.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Named colors consumed by pages and components.
///
/// All values are CSS color strings. `Theme::default()` is the Invenza
/// palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Page background behind cards.
    pub page_bg: String,
    /// Plain card surface (signup, dashboard welcome card).
    pub card_bg: String,
    /// Tinted card surface (login).
    pub card_tint_bg: String,
    /// Headline color.
    pub heading: String,
    /// Regular copy color.
    pub body_text: String,
    /// Field labels, input borders and input text.
    pub field_ink: String,
    /// Primary action buttons.
    pub primary: String,
    /// Primary action hover shade.
    pub primary_hover: String,
    /// Accent links (sign up, forgot password, logout).
    pub link: String,
    /// Dashboard navigation bar background.
    pub navbar_bg: String,
    /// Hairline borders on neutral chrome.
    pub border: String,
    /// Error banner text.
    pub error_fg: String,
    /// Error banner background.
    pub error_bg: String,
    /// Success banner text.
    pub success_fg: String,
    /// Success banner background.
    pub success_bg: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            page_bg: "#ffffff".to_owned(),
            card_bg: "#ffffff".to_owned(),
            card_tint_bg: "#4b5f82".to_owned(),
            heading: "#610c1e".to_owned(),
            body_text: "#415982".to_owned(),
            field_ink: "#330307".to_owned(),
            primary: "#2c4166".to_owned(),
            primary_hover: "#4b5f82".to_owned(),
            link: "#b01045".to_owned(),
            navbar_bg: "#6a7d9b".to_owned(),
            border: "#cccccc".to_owned(),
            error_fg: "#b91c1c".to_owned(),
            error_bg: "#f8d7da".to_owned(),
            success_fg: "#1e7e34".to_owned(),
            success_bg: "#d4edda".to_owned(),
        }
    }
}
