use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use content::{
    Portfolio, SECTION_PROJECTS,
    detail::Detail,
    project::{Project, ProjectCategory, ProjectFilter},
};

use crate::components::modal::open_modal;

// the grid is held back behind a spinner briefly on first render
const LOADING_MS: u32 = 1000;

const FILTERS: [(&str, &str); 5] = [
    ("all", "All"),
    ("featured", "Featured"),
    ("web", "Web"),
    ("data", "Data"),
    ("certification", "Certifications"),
];

#[derive(Clone, PartialEq, Props)]
pub struct ProjectsProps {
    portfolio: Rc<Portfolio>,
}

#[component]
pub fn Projects(props: ProjectsProps) -> Element {
    let mut loading = use_signal(|| true);
    let mut filter = use_signal(ProjectFilter::default);

    use_future(move || async move {
        TimeoutFuture::new(LOADING_MS).await;
        loading.set(false);
    });

    let portfolio = props.portfolio;
    let current = filter();

    // only offer a category button when something would match it
    let buttons: Vec<_> = FILTERS
        .into_iter()
        .filter(|(value, _)| {
            let filter = ProjectFilter::from_selection(value);
            matches!(filter, ProjectFilter::All | ProjectFilter::Featured)
                || !filter.apply(&portfolio.projects).is_empty()
        })
        .collect();

    let shown: Vec<Project> = current
        .apply(&portfolio.projects)
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        section { id: SECTION_PROJECTS, class: "section",
            h2 { class: "section-title",
                span { "Projects" }
            }
            p { class: "section-intro",
                "A selection of things I have built, along with the certifications I have earned. "
                a {
                    href: "{portfolio.profile.projects_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "See everything on GitHub."
                }
            }

            if loading() {
                div { class: "loading-container", role: "status", "aria-label": "Loading projects",
                    div { class: "spinner" }
                }
            } else {
                div { class: "filter-bar",
                    for (value , name) in buttons {
                        button {
                            key: "{value}",
                            class: if current.to_string() == value { "filter-button active" } else { "filter-button" },
                            onclick: move |_| filter.set(ProjectFilter::from_selection(value)),
                            "{name}"
                        }
                    }
                    if let ProjectFilter::Tag(tag) = &current {
                        button {
                            class: "filter-button active",
                            "aria-label": "Clear tag filter",
                            onclick: move |_| filter.set(ProjectFilter::All),
                            "#{tag} ×"
                        }
                    }
                }

                if shown.is_empty() {
                    div { class: "empty-state",
                        p { "No items found matching the selected filter." }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| filter.set(ProjectFilter::All),
                            "Show all items"
                        }
                    }
                } else {
                    div { class: "project-grid",
                        for project in shown {
                            ProjectCard { key: "{project.id}", project, filter }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
    filter: Signal<ProjectFilter>,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;
    let mut filter = props.filter;

    let id = project.id;
    let excerpt = project.excerpt();
    let category = match project.category {
        ProjectCategory::Certification => "Certification",
        ProjectCategory::Web => "Web",
        ProjectCategory::Data => "Data",
    };

    rsx! {
        article { class: if project.featured { "card project-card featured" } else { "card project-card" },
            img {
                class: "project-image",
                src: "{project.image}",
                alt: "{project.title}",
                loading: "lazy",
            }
            div { class: "project-body",
                if project.featured {
                    span { class: "badge featured-badge", "Featured" }
                }
                h3 { "{project.title}" }
                p { "{excerpt}" }

                div { class: "project-tags",
                    span { class: "chip", "{category}" }
                    for tag in project.tags.iter() {
                        button {
                            key: "{tag}",
                            class: if filter.read().is_tag(tag) { "chip active" } else { "chip" },
                            onclick: {
                                let tag = tag.clone();
                                move |_| filter.set(ProjectFilter::Tag(tag.clone()))
                            },
                            "{tag}"
                        }
                    }
                }

                div { class: "project-actions",
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| open_modal(Detail::Project(id)),
                        "View Details"
                    }
                    if !project.is_certification() {
                        a {
                            class: "btn btn-secondary btn-sm",
                            href: "{project.source}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Source"
                        }
                    }
                }
            }
        }
    }
}
