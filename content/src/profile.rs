use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Profile {
    pub name: String,
    // used by the footer signature
    pub short_name: String,
    pub title: String,
    pub greeting: String,
    pub about: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub image: String,
    pub resume: String,
    pub resume_updated: String,
    pub projects_url: String,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    #[serde(rename = "github")]
    GitHub,
    #[serde(rename = "linkedin")]
    LinkedIn,
    Instagram,
}

impl SocialKind {
    // css modifier used for the hover colour of the footer buttons
    pub fn css_class(self) -> &'static str {
        match self {
            SocialKind::GitHub => "social-github",
            SocialKind::LinkedIn => "social-linkedin",
            SocialKind::Instagram => "social-instagram",
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: String,
    pub url: String,
}
