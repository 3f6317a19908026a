use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::{debug, warn};

use common::{CopyFeedback, Transient};
use content::{
    Portfolio, SECTION_HOME,
    profile::{SocialKind, SocialLink},
};

use crate::common::dom;

const TAP_VIBRATION_MS: u32 = 50;

#[derive(Clone, PartialEq, Props)]
pub struct HeroProps {
    portfolio: Rc<Portfolio>,
}

#[component]
pub fn Hero(props: HeroProps) -> Element {
    let profile = props.portfolio.profile.clone();
    let social: Vec<_> = props
        .portfolio
        .social
        .iter()
        .filter(|link| link.kind != SocialKind::Instagram)
        .cloned()
        .collect();

    let mut feedback = use_signal(Transient::<CopyFeedback>::new);

    let email = profile.email.clone();
    let copy_email = move |_| {
        let email = email.clone();

        async move {
            dom::vibrate(TAP_VIBRATION_MS);

            let result = match dom::copy_to_clipboard(&email).await {
                Ok(()) => {
                    debug!("copied email to clipboard");
                    CopyFeedback::Copied
                }
                Err(err) => {
                    warn!("failed to copy email: {err}");
                    CopyFeedback::Failed
                }
            };

            let ticket = feedback.write().set(result);

            TimeoutFuture::new(result.duration_ms()).await;
            feedback.write().expire(ticket);
        }
    };

    let status = *feedback.read().get();
    let email_label = match status {
        CopyFeedback::Copied => String::from("Email copied to clipboard"),
        _ => format!("Copy {}'s email address", profile.short_name),
    };

    rsx! {
        section { id: SECTION_HOME, class: "section hero",
            div { class: "hero-text",
                h1 { class: "hero-greeting", "{profile.greeting}" }
                p { class: "hero-name", "I'm {profile.name}" }
                p { class: "hero-about", "{profile.about}" }

                div { class: "hero-social",
                    for link in social {
                        SocialButton {
                            key: "{link.url}",
                            link,
                            owner: profile.short_name.clone(),
                        }
                    }

                    button {
                        class: "social-button social-email tooltip-anchor",
                        "aria-label": email_label,
                        onclick: copy_email,
                        "@"
                        {match status {
                            CopyFeedback::Idle => rsx! {
                                span { class: "tooltip tooltip-hover", "Email" }
                            },
                            CopyFeedback::Copied => rsx! {
                                span { class: "tooltip", role: "status", "Copied!" }
                            },
                            CopyFeedback::Failed => rsx! {
                                span { class: "tooltip error", role: "alert", "Failed! Use: {profile.email}" }
                            },
                        }}
                    }
                }
            }

            img {
                class: "hero-image",
                src: "{profile.image}",
                alt: "{profile.name}",
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SocialButtonProps {
    link: SocialLink,
    owner: String,
}

// a round link to one of the social profiles, used by the hero and the contact
// and footer sections
#[component]
pub fn SocialButton(props: SocialButtonProps) -> Element {
    let link = props.link;
    let class = format!("social-button tooltip-anchor {}", link.kind.css_class());
    let glyph = social_glyph(link.kind);

    rsx! {
        a {
            class,
            href: "{link.url}",
            target: "_blank",
            rel: "noopener noreferrer",
            "aria-label": "Visit {props.owner}'s {link.label} profile",
            onclick: move |_| dom::vibrate(TAP_VIBRATION_MS),
            "{glyph}"
            span { class: "tooltip tooltip-hover", "{link.label}" }
        }
    }
}

// text stand-ins for the brand icons
fn social_glyph(kind: SocialKind) -> &'static str {
    match kind {
        SocialKind::GitHub => "GH",
        SocialKind::LinkedIn => "in",
        SocialKind::Instagram => "IG",
    }
}
