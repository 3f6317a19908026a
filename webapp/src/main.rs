#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, error};

mod common;

mod components;
use components::{
    background::Background, navigation::NavBar, particles::ParticleBackground,
};

mod contact;
mod education;
mod footer;
mod hero;
mod projects;
mod skills;

mod home;
use home::{Home, NotFound};

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(common::load_catalog);

    // mirror the theme onto the document root, where the css variables live
    use_effect(|| {
        if let Err(err) = common::dom::set_root_theme(common::THEME()) {
            error!("failed to apply theme: {err}");
        }
    });

    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        style { "{common::style::SECTION_STYLES}" }
        Background {}
        ParticleBackground {}
        Router::<Route> { config: RouterConfig::default }
    }
}
