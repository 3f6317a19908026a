use std::rc::Rc;

use dioxus::prelude::*;

use content::{
    Portfolio, SECTION_CONTACT, SECTION_PROJECTS, SECTION_SKILLS,
    skill::{Skill, SkillFilter, category_names},
};

use crate::components::progress::ProgressRing;

#[derive(Clone, PartialEq, Props)]
pub struct SkillsProps {
    portfolio: Rc<Portfolio>,
}

#[component]
pub fn Skills(props: SkillsProps) -> Element {
    let mut filter = use_signal(SkillFilter::default);

    let categories = props.portfolio.skills.clone();
    let tabs = category_names(&categories);
    let shown = filter.read().apply(&categories);
    let query = filter.read().query.clone();
    let selected = filter.read().category.clone();

    rsx! {
        section { id: SECTION_SKILLS, class: "section",
            h2 { class: "section-title",
                span { "Skills" }
            }
            p { class: "section-intro",
                "The tools and languages I work with, how well I know them and how often I reach for them."
            }

            div { class: "filter-bar", role: "tablist", "aria-label": "Filter skills by category",
                for name in tabs {
                    button {
                        key: "{name}",
                        class: if name == selected { "filter-button active" } else { "filter-button" },
                        role: "tab",
                        "aria-selected": if name == selected { "true" } else { "false" },
                        onclick: {
                            let name = name.clone();
                            move |_| filter.write().category = name.clone()
                        },
                        "{name}"
                    }
                }
            }

            div { class: "skill-search",
                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Search skills...",
                    "aria-label": "Search skills",
                    value: "{query}",
                    oninput: move |evt| filter.write().query = evt.value(),
                }
                if !query.is_empty() {
                    button {
                        class: "btn-close",
                        "aria-label": "Clear search",
                        onclick: move |_| filter.write().query.clear(),
                        "×"
                    }
                }
            }

            if shown.is_empty() {
                div { class: "empty-state",
                    h3 { "No skills found matching your criteria" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| filter.set(SkillFilter::default()),
                        "Clear filters"
                    }
                }
            } else {
                for category in shown {
                    div { key: "{category.name}", class: "skill-category",
                        h3 { "{category.name}" }
                        div { class: "skill-grid",
                            for skill in category.skills.iter() {
                                SkillCard { key: "{skill.name}", skill: skill.clone() }
                            }
                        }
                    }
                }
            }

            div { class: "learning-journey",
                h3 { "My Learning Journey" }
                p {
                    "I'm passionate about continuous growth and staying current with how software is built. "
                    "Every project is a chance to pick up something new."
                }
                div { class: "actions",
                    a { class: "btn btn-gradient", href: "#{SECTION_PROJECTS}", "View My Projects" }
                    a { class: "btn btn-secondary", href: "#{SECTION_CONTACT}", "Get In Touch" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct SkillCardProps {
    skill: Skill,
}

// SkillCard
//
// the front shows the skill in its brand colour, the back its proficiency and
// how often it gets used.  hovering flips it on desktop, tapping on touch screens
#[component]
fn SkillCard(props: SkillCardProps) -> Element {
    let skill = props.skill;
    let mut flipped = use_signal(|| false);

    let initial: String = skill.name.chars().take(2).collect();
    let badge = format!("badge {}", skill.frequency.css_class());
    let label = skill.frequency.label();

    rsx! {
        div {
            class: if flipped() { "flip-card flipped" } else { "flip-card" },
            tabindex: "0",
            "aria-label": "{skill.name}, {skill.proficiency}% proficiency, {label} use",
            onclick: move |_| flipped.toggle(),
            onkeydown: move |evt| {
                if evt.key() == Key::Enter {
                    flipped.toggle();
                }
            },
            div { class: "flip-card-inner",
                div {
                    class: "flip-card-face",
                    style: "background-color: {skill.color};",
                    span { class: "skill-initial", "{initial}" }
                    p { "{skill.name}" }
                }
                div { class: "flip-card-face flip-card-back",
                    p { "Proficiency" }
                    ProgressRing {
                        value: f32::from(skill.proficiency),
                        label: format!("{}%", skill.proficiency),
                        size: 48,
                        color: skill.color.clone(),
                    }
                    span { class: badge, "{label}" }
                }
            }
        }
    }
}
