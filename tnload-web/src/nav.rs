//! Open/closed state of the responsive navigation menu.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Hamburger or close button pressed.
    Toggle,
    /// A navigation link was followed.
    LinkClicked,
    /// A click landed outside both the menu and the hamburger.
    OutsideClick,
    /// Escape was pressed anywhere on the page.
    Escape,
}

/// Next open state after `event`. Everything but an explicit toggle only closes.
#[must_use]
pub const fn next_open(open: bool, event: MenuEvent) -> bool {
    match event {
        MenuEvent::Toggle => !open,
        MenuEvent::LinkClicked | MenuEvent::OutsideClick | MenuEvent::Escape => false,
    }
}

/// Map a document-level key to a menu event.
#[must_use]
pub fn event_for_key(key: &str) -> Option<MenuEvent> {
    (key == "Escape").then_some(MenuEvent::Escape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state() {
        assert!(next_open(false, MenuEvent::Toggle));
        assert!(!next_open(true, MenuEvent::Toggle));
    }

    #[test]
    fn dismissals_only_close() {
        for event in [
            MenuEvent::LinkClicked,
            MenuEvent::OutsideClick,
            MenuEvent::Escape,
        ] {
            assert!(!next_open(true, event));
            assert!(!next_open(false, event));
        }
    }

    #[test]
    fn only_escape_maps_to_an_event() {
        assert_eq!(event_for_key("Escape"), Some(MenuEvent::Escape));
        assert_eq!(event_for_key("Enter"), None);
    }
}
