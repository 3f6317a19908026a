use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::common::use_catalog;
use crate::components::modal::ModalBox;
use crate::contact::Contact;
use crate::education::EducationCertifications;
use crate::footer::Footer;
use crate::hero::Hero;
use crate::projects::Projects;
use crate::skills::Skills;

// Home
//
// the whole portfolio is a single scrolling page; the navbar links are anchors
// into the sections below
#[component]
pub fn Home() -> Element {
    let portfolio = match use_catalog() {
        Ok(portfolio) => portfolio,
        Err(err) => {
            return rsx! {
                div { class: "error-panel", role: "alert",
                    h2 { "This page failed to load" }
                    pre { "{err}" }
                }
            };
        }
    };

    rsx! {
        main {
            Hero { portfolio: portfolio.clone() }
            EducationCertifications { portfolio: portfolio.clone() }
            Skills { portfolio: portfolio.clone() }
            Projects { portfolio: portfolio.clone() }
            Contact { portfolio: portfolio.clone() }
        }
        Footer { portfolio: portfolio.clone() }
        ModalBox { portfolio }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "error-panel",
            h2 { "Nothing here" }
            p { "There is no page at /{path}." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back to the portfolio" }
        }
    }
}
