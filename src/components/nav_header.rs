//! Navigation Header Component
//!
//! Desktop: logo and inline section links, frosted once the page scrolls
//! Mobile: logo and hamburger trigger for the slide-down [`MobileMenu`]

use dioxus::prelude::*;
use portfolio_core::{MenuState, NavScrollState};

use crate::components::mobile_nav::MobileMenu;

/// An in-page section link
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Sections linked from both the desktop nav and the mobile menu
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Projects", href: "#projects" },
    NavLink { label: "Skills", href: "#skills" },
    NavLink { label: "Contact", href: "#contact" },
];

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Scroll state of the page; decides the `scrolled` marker
    pub scroll: NavScrollState,
}

/// Navigation Header component
///
/// - Left: logo
/// - Right: section links (desktop) or hamburger (mobile)
///
/// The hamburger icon and the menu panel read the same [`MenuState`], so
/// they always open and close together.
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let mut menu = use_signal(MenuState::default);

    let on_toggle = move |_: MouseEvent| {
        let open = menu.write().toggle();
        tracing::debug!(open, "mobile menu toggled");
    };

    let state = menu();

    rsx! {
        nav { id: "nav", class: "{props.scroll.class()}",
            a { class: "nav-logo", href: "#hero", "portfolio" }

            ul { class: "nav-links",
                for link in NAV_LINKS {
                    li { key: "{link.href}",
                        a { href: link.href, "{link.label}" }
                    }
                }
            }

            button {
                id: "hamburger",
                class: "{state.trigger_class()}",
                "aria-label": "Toggle menu",
                "aria-expanded": "{state.is_open()}",
                onclick: on_toggle,
                span {}
                span {}
                span {}
            }
        }

        MobileMenu {
            state,
            on_select: move |_| menu.write().close(),
        }
    }
}
