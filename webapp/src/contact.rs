use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::info;

use common::contact::{
    ContactDraft, ContactForm, Field, STATUS_RESET_MS, SUBMIT_DELAY_MS, SubmitStatus,
};
use content::{Portfolio, SECTION_CONTACT, profile::SocialKind};

use crate::hero::SocialButton;

// there is no backend to send messages to, so delivery is simulated.  anything
// that actually sends the form only needs to replace this
async fn deliver(form: &ContactForm) -> anyhow::Result<()> {
    info!(
        "delivering message from {} <{}> re: {}",
        form.name, form.email, form.subject
    );

    TimeoutFuture::new(SUBMIT_DELAY_MS).await;

    Ok(())
}

#[derive(Clone, PartialEq, Props)]
pub struct ContactProps {
    portfolio: Rc<Portfolio>,
}

#[component]
pub fn Contact(props: ContactProps) -> Element {
    let mut draft = use_signal(ContactDraft::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        spawn(async move {
            let Some(form) = draft.write().begin_submit() else {
                return;
            };

            let result = deliver(&form).await;
            let ticket = draft.write().finish_submit(result);

            TimeoutFuture::new(STATUS_RESET_MS).await;
            draft.write().clear_status(ticket);
        });
    };

    let profile = props.portfolio.profile.clone();
    let social: Vec<_> = props
        .portfolio
        .social
        .iter()
        .filter(|link| link.kind != SocialKind::Instagram)
        .cloned()
        .collect();

    let status = draft.read().status();
    let submitting = status == SubmitStatus::Submitting;

    rsx! {
        section { id: SECTION_CONTACT, class: "section",
            h2 { class: "section-title",
                span { "Get In Touch" }
            }
            p { class: "section-intro",
                "Have a project in mind or just want to say hello? Send me a message and I'll get back to you."
            }

            div { class: "contact-grid",
                div { class: "card contact-panel",
                    h3 { "Send Me a Message" }
                    form { novalidate: true, onsubmit: onsubmit,
                        for field in Field::ALL {
                            FormField { key: "{field:?}", draft, field }
                        }

                        button {
                            class: "btn btn-gradient",
                            r#type: "submit",
                            disabled: submitting,
                            if submitting {
                                span { class: "spinner spinner-sm" }
                                "Sending..."
                            } else {
                                "Send Message"
                            }
                        }

                        {match status {
                            SubmitStatus::Success => rsx! {
                                div { class: "status-banner success", role: "status",
                                    "Message sent successfully! I'll get back to you soon."
                                }
                            },
                            SubmitStatus::Error => rsx! {
                                div { class: "status-banner error", role: "alert",
                                    "Something went wrong. Please try again later."
                                }
                            },
                            _ => rsx! {},
                        }}
                    }
                }

                div { class: "card contact-panel",
                    h3 { "Contact Information" }
                    ul { class: "contact-info",
                        li {
                            h4 { "Location" }
                            p { "{profile.location}" }
                        }
                        li {
                            h4 { "Email" }
                            a { href: "mailto:{profile.email}", "{profile.email}" }
                        }
                        li {
                            h4 { "Phone" }
                            a { href: "tel:{profile.phone}", "{profile.phone}" }
                        }
                    }

                    h3 { "Follow Me" }
                    div { class: "contact-social",
                        for link in social {
                            SocialButton {
                                key: "{link.url}",
                                link,
                                owner: profile.short_name.clone(),
                            }
                        }
                    }

                    h3 { "My Resume" }
                    div { class: "resume-card",
                        div {
                            h4 { "{profile.name}" }
                            p { "{profile.title} Resume" }
                            small { "Last updated: {profile.resume_updated}" }
                        }
                        div { class: "project-actions",
                            a {
                                class: "btn btn-secondary btn-sm",
                                href: "{profile.resume}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "aria-label": "View Resume in New Tab",
                                "View"
                            }
                            a {
                                class: "btn btn-primary btn-sm",
                                href: "{profile.resume}",
                                download: true,
                                "aria-label": "Download Resume",
                                "Download"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct FormFieldProps {
    draft: Signal<ContactDraft>,
    field: Field,
}

#[component]
fn FormField(props: FormFieldProps) -> Element {
    let mut draft = props.draft;
    let field = props.field;

    let value = draft.read().field(field).to_owned();
    let error = draft.read().error(field);
    let disabled = draft.read().is_submitting();

    let id = field.id();
    let label = field.label();
    let error_id = format!("{id}-error");
    let class = match (field, error.is_some()) {
        (Field::Message, false) => "form-textarea",
        (Field::Message, true) => "form-textarea invalid",
        (_, false) => "form-input",
        (_, true) => "form-input invalid",
    };

    let describedby = if error.is_some() {
        error_id.clone()
    } else {
        String::new()
    };

    let oninput = move |evt: FormEvent| draft.write().set_field(field, evt.value());

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: id, "{label}" }
            if field == Field::Message {
                textarea {
                    id,
                    name: id,
                    class,
                    placeholder: field.placeholder(),
                    value: "{value}",
                    disabled,
                    "aria-invalid": error.is_some(),
                    "aria-describedby": describedby.clone(),
                    oninput: oninput,
                }
            } else {
                input {
                    id,
                    name: id,
                    class,
                    r#type: if field == Field::Email { "email" } else { "text" },
                    placeholder: field.placeholder(),
                    value: "{value}",
                    disabled,
                    "aria-invalid": error.is_some(),
                    "aria-describedby": describedby.clone(),
                    oninput: oninput,
                }
            }
            if let Some(err) = error {
                p { id: "{error_id}", class: "form-error", role: "alert", "{err}" }
            }
        }
    }
}
