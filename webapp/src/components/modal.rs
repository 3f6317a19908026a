use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, error};

use common::modal::{Dismiss, ModalState};
use content::{
    Portfolio,
    detail::{Detail, DetailView},
    education::Certification,
    project::Project,
};

use crate::common::dom;

// global modal signal
//
// any section can open the detail view, and the escape handler and overlay click
// need to close it from inside the modal itself, so the selection lives in a
// global signal rather than being threaded through props
pub static MODAL: GlobalSignal<ModalState<Detail>> = Signal::global(ModalState::default);

const PANEL_ID: &str = "modal-panel";

pub fn open_modal(detail: Detail) {
    debug!("opening modal {detail:?}");
    MODAL.write().open(detail);
}

pub fn close_modal(how: Dismiss) {
    MODAL.write().dismiss(how);
}

#[derive(Clone, PartialEq, Props)]
pub struct ModalBoxProps {
    portfolio: Rc<Portfolio>,
}

#[component]
pub fn ModalBox(props: ModalBoxProps) -> Element {
    let portfolio = props.portfolio;

    let Some(detail) = MODAL.read().current().copied() else {
        return rsx! {};
    };

    match portfolio.detail(detail) {
        Some(DetailView::Project(project)) => rsx! {
            ProjectDetail { project: project.clone() }
        },
        Some(DetailView::Certification(certification)) => rsx! {
            CertificationDetail { certification: certification.clone() }
        },
        None => {
            error!("nothing in the catalog for {detail:?}");
            rsx! {}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    title: String,
    children: Element,
}

// ModernModal
//
// the shell shared by every detail view.  it closes on the close button, on
// escape anywhere on the page, and on a click that lands on the overlay itself;
// clicks inside the panel are stopped before they reach the overlay.  while it
// is mounted the page behind is locked and tab cycles through the panel only
#[component]
pub fn ModernModal(props: ModalProps) -> Element {
    use_hook(|| {
        if let Err(err) = dom::lock_body_scroll(true) {
            error!("failed to lock page scroll: {err}");
        }
    });

    use_drop(|| {
        if let Err(err) = dom::lock_body_scroll(false) {
            error!("failed to unlock page scroll: {err}");
        }
    });

    // the listener runs outside of any dioxus event, so it writes through the
    // signal backing MODAL rather than the global itself
    let mut modal = MODAL.signal();
    dom::use_document_keydown(move |evt| {
        let key = evt.key();

        if let Some(how) = Dismiss::from_key(&key) {
            modal.write().dismiss(how);
            return;
        }

        if key == "Tab" {
            match dom::trap_tab(PANEL_ID, evt.shift_key()) {
                Ok(true) => evt.prevent_default(),
                Ok(false) => {}
                Err(err) => error!("failed to move focus: {err}"),
            }
        }
    });

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |evt| {
                evt.stop_propagation();
                close_modal(Dismiss::Overlay);
            },
            div {
                id: PANEL_ID,
                class: "modal-content",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{props.title}",
                tabindex: "-1",
                onmounted: move |evt| async move {
                    // the first control gets focus, or the panel itself if there
                    // is none
                    match dom::focus_first_in(PANEL_ID) {
                        Ok(true) => {}
                        Ok(false) => {
                            if let Err(err) = evt.data().set_focus(true).await {
                                debug!("failed to focus modal: {err:?}");
                            }
                        }
                        Err(err) => error!("failed to focus modal: {err}"),
                    }
                },
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{props.title}" }
                    button {
                        class: "btn-close",
                        "aria-label": "Close",
                        onclick: move |_| close_modal(Dismiss::CloseButton),
                        "×"
                    }
                }

                div { class: "modal-body", {props.children} }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProjectDetailProps {
    project: Project,
}

#[component]
fn ProjectDetail(props: ProjectDetailProps) -> Element {
    let project = props.project;
    let overview = project.overview().to_owned();

    rsx! {
        ModernModal { title: project.title.clone(),
            img {
                class: "modal-image",
                src: "{project.image}",
                alt: "{project.title}",
            }

            h4 { class: "modal-subtitle", "Overview" }
            p { "{overview}" }

            if project.is_certification() {
                h4 { class: "modal-subtitle", "Details" }
                ul { class: "detail-list",
                    if let Some(date) = &project.issue_date {
                        li {
                            strong { "Issue Date: " }
                            "{date}"
                        }
                    }
                    if let Some(number) = &project.validation_number {
                        li {
                            strong { "Validation Number: " }
                            "{number}"
                        }
                    }
                }
                if let Some(document) = &project.document {
                    a {
                        class: "btn btn-primary",
                        href: "{document}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "View Certificate"
                    }
                }
            } else {
                h4 { class: "modal-subtitle", "Technologies Used" }
                div { class: "project-tags",
                    for tag in project.tags.iter() {
                        span { key: "{tag}", class: "chip", "{tag}" }
                    }
                }
                div { class: "project-actions", style: "margin-top: var(--space-4);",
                    a {
                        class: "btn btn-primary",
                        href: "{project.source}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "View Source"
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct CertificationDetailProps {
    certification: Certification,
}

#[component]
fn CertificationDetail(props: CertificationDetailProps) -> Element {
    let cert = props.certification;

    rsx! {
        ModernModal { title: cert.name.clone(),
            if let Some(logo) = &cert.logo {
                img {
                    class: "certification-logo",
                    src: "{logo}",
                    alt: "{cert.name} logo",
                }
            }

            h4 { class: "modal-subtitle", "Details" }
            ul { class: "detail-list",
                if let Some(date) = &cert.issue_date {
                    li {
                        strong { "Issue Date: " }
                        "{date}"
                    }
                }
                if let Some(number) = &cert.validation_number {
                    li {
                        strong { "Validation Number: " }
                        "{number}"
                    }
                }
            }

            div { class: "certification-actions", style: "margin-top: var(--space-4);",
                a {
                    class: "btn btn-primary",
                    href: "{cert.document}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Preview"
                }
                a {
                    class: "btn btn-secondary",
                    href: "{cert.document}",
                    download: true,
                    "Download"
                }
            }
        }
    }
}
