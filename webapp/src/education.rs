use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use common::scroll::REVEAL_FRACTION;
use content::{
    Portfolio, SECTION_EDUCATION,
    detail::Detail,
    education::{Certification, Education},
};

use crate::common::dom;
use crate::components::{
    modal::open_modal,
    progress::ProgressRing,
};

const TIMELINE_ID: &str = "education-timeline";

#[derive(Clone, PartialEq, Props)]
pub struct EducationProps {
    portfolio: Rc<Portfolio>,
}

// EducationCertifications
//
// an alternating timeline of degrees followed by the certificate cards.  the
// timeline fades in the first time it scrolls into view and then stays put
#[component]
pub fn EducationCertifications(props: EducationProps) -> Element {
    let mut revealed = use_signal(|| false);

    let check = move || {
        if *revealed.peek() {
            return;
        }

        let Ok(viewport_height) = dom::viewport_height() else {
            return;
        };

        if let Some(rect) = dom::section_rect(TIMELINE_ID) {
            if rect.in_view(viewport_height, REVEAL_FRACTION) {
                debug!("revealing education timeline");
                revealed.set(true);
            }
        }
    };

    use_effect(check);
    dom::use_window_listener("scroll", check);

    let education = props.portfolio.education.clone();
    let certifications = props.portfolio.certifications.clone();

    rsx! {
        section { id: SECTION_EDUCATION, class: "section",
            h2 { class: "section-title",
                span { "Education & Certifications" }
            }

            div {
                id: TIMELINE_ID,
                class: if revealed() { "timeline revealed" } else { "timeline" },
                for (idx , edu) in education.into_iter().enumerate() {
                    TimelineItem { key: "{idx}", idx, edu }
                }
            }

            if !certifications.is_empty() {
                div { class: "certifications",
                    for (idx , cert) in certifications.into_iter().enumerate() {
                        CertificationCard { key: "{idx}", idx, cert }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct TimelineItemProps {
    idx: usize,
    edu: Education,
}

#[component]
fn TimelineItem(props: TimelineItemProps) -> Element {
    let edu = props.edu;
    let side = if props.idx % 2 == 0 { "left" } else { "right" };
    let delay = props.idx * 150;
    let score = edu.score.label();

    rsx! {
        div { class: "timeline-item {side}", style: "transition-delay: {delay}ms;",
            div { class: "card timeline-card",
                ProgressRing {
                    value: edu.score.progress(),
                    label: edu.progress_label(),
                }
                div {
                    h3 { "{edu.degree}" }
                    p { "{edu.institution}" }
                    p { "{score}" }
                    p { "{edu.years}" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct CertificationCardProps {
    idx: usize,
    cert: Certification,
}

#[component]
fn CertificationCard(props: CertificationCardProps) -> Element {
    let idx = props.idx;
    let cert = props.cert;

    rsx! {
        div { class: "card certification-card",
            div { class: "certification-header",
                if let Some(logo) = &cert.logo {
                    img {
                        class: "certification-logo",
                        src: "{logo}",
                        alt: "{cert.name} logo",
                    }
                }
                div {
                    h3 { "{cert.name}" }
                    p { "Earned Certification" }
                }
            }
            div { class: "certification-actions",
                a {
                    class: "btn btn-primary btn-sm",
                    href: "{cert.document}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Preview"
                }
                a {
                    class: "btn btn-secondary btn-sm",
                    href: "{cert.document}",
                    download: true,
                    "Download"
                }
                button {
                    class: "btn btn-secondary btn-sm",
                    onclick: move |_| open_modal(Detail::Certification(idx)),
                    "Details"
                }
            }
        }
    }
}
