//! Page and overlay state types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scroll offset (in pixels from the top) past which the navbar switches
/// to its solid appearance.
pub const NAVBAR_SCROLL_THRESHOLD: u32 = 50;

/// Whether the navbar should render solid for a scroll observation.
///
/// A pure function of the latest observation; the scrolled look is
/// re-derived on every scroll event, never stored as independent truth.
pub fn navbar_scrolled(offset: u32) -> bool {
    offset > NAVBAR_SCROLL_THRESHOLD
}

/// Top-level pages. Mutually exclusive; exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Menu,
    About,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Menu => "menu",
            Page::About => "about",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "home" => Some(Page::Home),
            "menu" => Some(Page::Menu),
            "about" => Some(Page::About),
            _ => None,
        }
    }

    /// Navigation label as shown in the navbar.
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Beranda",
            Page::Menu => "Menu",
            Page::About => "Tentang Kami",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transient overlay flags.
///
/// Independent booleans, not mutually exclusive: any combination is valid
/// state. Coupling rules (navigation closes the mobile menu, adding to the
/// cart opens the drawer) live on [`Session`](crate::Session), not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Overlays {
    /// Cart drawer sliding in from the side.
    pub cart_drawer: bool,
    /// Full-screen search overlay.
    pub search: bool,
    /// Mobile navigation menu.
    pub mobile_menu: bool,
}

impl Overlays {
    /// Whether any overlay is showing.
    pub fn any_open(&self) -> bool {
        self.cart_drawer || self.search || self.mobile_menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_scrolled_threshold() {
        assert!(!navbar_scrolled(0));
        assert!(!navbar_scrolled(50));
        assert!(navbar_scrolled(51));
        assert!(navbar_scrolled(400));
    }

    #[test]
    fn test_page_round_trip() {
        for page in [Page::Home, Page::Menu, Page::About] {
            assert_eq!(Page::from_str(page.as_str()), Some(page));
        }
        assert_eq!(Page::from_str("checkout"), None);
    }

    #[test]
    fn test_default_page_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn test_overlays_any_open() {
        let mut overlays = Overlays::default();
        assert!(!overlays.any_open());
        overlays.search = true;
        assert!(overlays.any_open());
    }
}
