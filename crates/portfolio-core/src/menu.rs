//! Mobile hamburger menu state.
//!
//! The trigger's icon and the panel both derive their class from the same
//! flag, so they cannot disagree.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Flip open/closed. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close unconditionally (used when a link is picked).
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn trigger_class(&self) -> &'static str {
        if self.open {
            "hamburger open"
        } else {
            "hamburger"
        }
    }

    pub fn panel_class(&self) -> &'static str {
        if self.open {
            "mobile-menu open"
        } else {
            "mobile-menu"
        }
    }
}
