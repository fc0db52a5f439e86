//! Mobile Menu Component
//!
//! Slide-down panel of section links for narrow screens.

use dioxus::prelude::*;
use portfolio_core::MenuState;

use crate::components::nav_header::NAV_LINKS;

#[derive(Props, Clone, PartialEq)]
pub struct MobileMenuProps {
    /// Shared with the hamburger trigger
    pub state: MenuState,
    /// Called when any link is picked
    pub on_select: EventHandler<()>,
}

/// Mobile menu panel
///
/// Picking a link always closes the menu; it never toggles it.
#[component]
pub fn MobileMenu(props: MobileMenuProps) -> Element {
    let on_select = props.on_select;

    rsx! {
        div { id: "mobileMenu", class: "{props.state.panel_class()}",
            for link in NAV_LINKS {
                a {
                    key: "{link.href}",
                    href: link.href,
                    onclick: move |_| on_select.call(()),
                    "{link.label}"
                }
            }
        }
    }
}
