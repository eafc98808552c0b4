//! # HTML Templates
//!
//! Templates live as standalone `.html` files next to this module and are
//! included here as string constants. Keeping them out of the Rust source
//! makes them easier to edit and diff; keeping the `include_str!` list in
//! one place makes registration in [`super::Renderer::new`] mechanical.
//!
//! Templates are minijinja based. Conventions:
//!
//! 1. Layout logic (pluralization, placeholder substitution, fixed weekday
//!    ordering) happens in Rust; templates branch only on what gets output.
//! 2. `card.html` is shared by every listing view via `{% include %}`.
//! 3. The `.html` suffix in the registered names keeps minijinja's HTML
//!    auto-escaping active, so record data can never break the markup.

pub const HOME_TEMPLATE: &str = include_str!("templates/home.html");
pub const AREA_TEMPLATE: &str = include_str!("templates/area.html");
pub const RESTAURANT_TEMPLATE: &str = include_str!("templates/restaurant.html");
pub const SEARCH_TEMPLATE: &str = include_str!("templates/search.html");
pub const CARD_TEMPLATE: &str = include_str!("templates/card.html");
pub const NOT_FOUND_TEMPLATE: &str = include_str!("templates/not_found.html");
pub const LOAD_ERROR_TEMPLATE: &str = include_str!("templates/load_error.html");
