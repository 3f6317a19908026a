use dioxus::prelude::*;
use dioxus_router::prelude::*;

use common::{
    scroll::{active_section, scroll_progress},
    theme::Theme,
};
use content::{
    SECTION_CONTACT, SECTION_EDUCATION, SECTION_HOME, SECTION_PROJECTS, SECTION_SKILLS, SECTIONS,
};

use crate::Route;
use crate::common::{THEME, dom, use_catalog};

const NAV_LINKS: [(&str, &str); 5] = [
    (SECTION_HOME, "Home"),
    (SECTION_EDUCATION, "Education"),
    (SECTION_SKILLS, "Skills"),
    (SECTION_PROJECTS, "Projects"),
    (SECTION_CONTACT, "Contact"),
];

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: &'static str,
    section: &'static str,
    active: bool,
    on_select: EventHandler<()>,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    rsx! {
        a {
            class: if props.active { "nav-link active" } else { "nav-link" },
            href: "#{props.section}",
            "aria-current": if props.active { "page" } else { "false" },
            onclick: move |_| props.on_select.call(()),
            "{props.name}"
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let theme = THEME();

    rsx! {
        button {
            class: "theme-toggle tooltip-anchor",
            "aria-label": theme.toggle_label(),
            title: theme.tooltip(),
            onclick: move |_| {
                let next = THEME().toggled();
                *THEME.write() = next;
            },
            if theme == Theme::Light {
                "☾"
            } else {
                "☀"
            }
        }
    }
}

// NavBar
//
// the layout wrapping every page.  on the portfolio page it follows the scroll
// position: the section under the navbar is highlighted, a progress bar runs
// along the top of the window and the bar's shadow deepens once the page has
// moved at all
#[component]
pub fn NavBar() -> Element {
    let mut active = use_signal(|| SECTION_HOME.to_owned());
    let mut progress = use_signal(|| 0.0f64);
    let mut scrolled = use_signal(|| false);
    let mut menu_open = use_signal(|| false);

    let brand = match use_catalog() {
        Ok(portfolio) => portfolio.profile.short_name.clone(),
        Err(_) => String::from("Portfolio"),
    };

    // reads with peek() so that the effect below doesn't subscribe to the signals
    // it writes
    let track = move || {
        match dom::scroll_state() {
            Ok(state) => {
                let pct = scroll_progress(state.scroll_y, state.scroll_height, state.client_height);
                if *progress.peek() != pct {
                    progress.set(pct);
                }

                let moved = state.scroll_y > 0.0;
                if *scrolled.peek() != moved {
                    scrolled.set(moved);
                }
            }
            Err(err) => tracing::error!("failed to read scroll position: {err}"),
        }

        let rects: Vec<_> = SECTIONS
            .iter()
            .map(|id| (*id, dom::section_rect(id)))
            .collect();

        if let Some(id) = active_section(&rects) {
            if *active.peek() != id {
                active.set(id.to_owned());
            }
        }
    };

    use_effect(track);
    dom::use_window_listener("scroll", track);
    dom::use_window_listener("resize", track);

    let links = move |mobile: bool| {
        rsx! {
            for (section , name) in NAV_LINKS {
                NavBarButton {
                    key: "{mobile}-{section}",
                    name,
                    section,
                    active: active() == section,
                    on_select: move |_| menu_open.set(false),
                }
            }
        }
    };

    let pct = progress();
    let rounded = pct.round();

    rsx! {
        div {
            class: "scroll-progress",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{rounded}",
            style: "width: {pct}%;",
        }
        header { class: if scrolled() { "navbar scrolled" } else { "navbar" },
            div { class: "nav-container",
                a { class: "nav-logo", href: "#{SECTION_HOME}", "{brand}" }

                nav { class: "nav-links", "aria-label": "Main navigation",
                    {links(false)}
                    ThemeToggle {}
                    button {
                        class: "menu-toggle",
                        "aria-label": if menu_open() { "Close menu" } else { "Open menu" },
                        "aria-expanded": "{menu_open}",
                        onclick: move |_| menu_open.toggle(),
                        if menu_open() {
                            "✕"
                        } else {
                            "☰"
                        }
                    }
                }
            }
            nav { class: if menu_open() { "mobile-menu open" } else { "mobile-menu" },
                {links(true)}
            }
        }
        Outlet::<Route> {}
    }
}
