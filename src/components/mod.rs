//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form and chrome details while reading the palette
//! from the Leptos theme context.

pub mod auth_card;
pub mod nav_bar;
pub mod spinner;
pub mod status_banner;
pub mod text_field;
