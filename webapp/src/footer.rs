use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, error};

use content::Portfolio;

use crate::common::{current_year, dom};
use crate::hero::SocialButton;

const FOOTER_ID: &str = "site-footer";

#[derive(Clone, PartialEq, Props)]
pub struct FooterProps {
    portfolio: Rc<Portfolio>,
}

#[component]
pub fn Footer(props: FooterProps) -> Element {
    let mut glowing = use_signal(|| false);

    // the glow starts the first time any of the footer is on screen
    let check = move || {
        if *glowing.peek() {
            return;
        }

        let Ok(viewport_height) = dom::viewport_height() else {
            return;
        };

        if let Some(rect) = dom::section_rect(FOOTER_ID) {
            if rect.in_view(viewport_height, 1.0) {
                debug!("footer in view");
                glowing.set(true);
            }
        }
    };

    use_effect(check);
    dom::use_window_listener("scroll", check);

    let profile = props.portfolio.profile.clone();
    let social = props.portfolio.social.clone();
    let year = current_year();

    rsx! {
        footer { id: FOOTER_ID, class: "footer",
            div { class: if glowing() { "footer-glow active" } else { "footer-glow" } }

            h2 { class: "footer-name", "{profile.name}" }
            p { class: "footer-title", "{profile.title}" }

            div { class: "footer-social",
                for link in social {
                    SocialButton {
                        key: "{link.url}",
                        link,
                        owner: profile.short_name.clone(),
                    }
                }
            }

            div { class: "footer-bottom",
                p { "© {year} {profile.short_name}. All Rights Reserved." }
                div { class: "footer-legal",
                    a { href: "#privacy", "Privacy Policy" }
                    a { href: "#terms", "Terms of Service" }
                }
            }
        }

        button {
            class: "scroll-top",
            "aria-label": "Scroll to top",
            title: "Back to top",
            onclick: move |_| {
                if let Err(err) = dom::scroll_to_top() {
                    error!("failed to scroll to top: {err}");
                }
            },
            "↑"
        }
    }
}
