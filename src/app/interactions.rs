//! Element event handlers shared by the components. In the browser they feed
//! the page controller; the server never fires them.

#[cfg(feature = "hydrate")]
pub use crate::dom::{contact_hover, nav_click, social_click, toggle_menu};

#[cfg(not(feature = "hydrate"))]
pub use self::inert::*;

#[cfg(not(feature = "hydrate"))]
mod inert {
    use leptos::ev::MouseEvent;

    pub fn nav_click(_ev: &MouseEvent, _href: &str) {}

    pub fn toggle_menu() {}

    pub fn social_click(_ev: &MouseEvent, _index: usize) {}

    pub fn contact_hover(_index: usize, _entered: bool) {}
}
