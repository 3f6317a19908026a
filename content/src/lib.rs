use std::collections::HashSet;

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub mod detail;
pub mod education;
pub mod profile;
pub mod project;
pub mod skill;

use education::{Certification, Education};
use profile::{Profile, SocialLink};
use project::Project;
use skill::SkillCategory;

// section anchors
//
// these double as element ids on the page and as the fragment targets of the
// navigation links, so they need to stay in sync with the webapp sections
pub const SECTION_HOME: &str = "home";
pub const SECTION_EDUCATION: &str = "education-certifications";
pub const SECTION_SKILLS: &str = "skills";
pub const SECTION_PROJECTS: &str = "projects";
pub const SECTION_CONTACT: &str = "contact";

pub const SECTIONS: [&str; 5] = [
    SECTION_HOME,
    SECTION_EDUCATION,
    SECTION_SKILLS,
    SECTION_PROJECTS,
    SECTION_CONTACT,
];

// static asset roots, served as-is by the server crate
pub const ASSET_PATH: &str = "assets";
pub const CERTIFICATE_PATH: &str = "certificates";

const BUILTIN_CATALOG: &str = include_str!("../portfolio.toml");

// the whole catalog
//
// everything the page displays comes from here; none of it is mutated at runtime
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
}

impl Portfolio {
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_toml(BUILTIN_CATALOG).context("failed to load built-in portfolio catalog")
    }

    pub fn from_toml(doc: &str) -> anyhow::Result<Self> {
        let portfolio: Portfolio = toml::from_str(doc).context("failed to parse catalog")?;

        portfolio.validate()?;

        Ok(portfolio)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.projects.is_empty() {
            return Err(anyhow::Error::msg("catalog has no projects"));
        }

        let mut ids = HashSet::new();
        for project in &self.projects {
            if !ids.insert(project.id) {
                return Err(anyhow::Error::msg(format!(
                    "duplicate project id {}",
                    project.id
                )));
            }
        }

        for category in &self.skills {
            for skill in &category.skills {
                if skill.proficiency > 100 {
                    return Err(anyhow::Error::msg(format!(
                        "skill {} has proficiency {} (max 100)",
                        skill.name, skill.proficiency
                    )));
                }
            }
        }

        for edu in &self.education {
            if !edu.score.is_valid() {
                return Err(anyhow::Error::msg(format!(
                    "education entry {} has an out of range score",
                    edu.degree
                )));
            }
        }

        Ok(())
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [profile]
        name = "Sam"
        short_name = "Sam"
        title = "Developer"
        greeting = "Hi"
        about = "About"
        location = "Somewhere"
        email = "sam@example.com"
        phone = "000"
        image = "/assets/me.png"
        resume = "/assets/resume.pdf"
        resume_updated = "May 2025"
        projects_url = "https://example.com"

        [[projects]]
        id = 7
        title = "Thing"
        description = "Does things"
        image = "https://example.com/thing.png"
        tags = ["rust"]
        source = "https://example.com/thing"
        category = "web"
    "#;

    #[test]
    fn builtin_catalog_loads() {
        let portfolio = Portfolio::builtin().expect("built-in catalog should parse");

        assert_eq!(portfolio.projects.len(), 3);
        assert_eq!(portfolio.education.len(), 3);
        assert_eq!(portfolio.skills.len(), 4);
        assert!(
            portfolio
                .social
                .iter()
                .any(|link| link.kind == profile::SocialKind::GitHub)
        );
        assert_eq!(portfolio.project(1).map(|p| p.featured), Some(true));
    }

    #[test]
    fn minimal_catalog_fills_defaults() {
        let portfolio = Portfolio::from_toml(MINIMAL).unwrap();

        assert!(portfolio.social.is_empty());
        assert!(portfolio.skills.is_empty());
        assert!(!portfolio.projects[0].featured);
        assert!(portfolio.projects[0].long_description.is_none());
    }

    #[test]
    fn duplicate_project_ids_are_rejected() {
        let doc = format!(
            "{MINIMAL}\n{}",
            r#"
            [[projects]]
            id = 7
            title = "Other"
            description = "Also does things"
            image = "https://example.com/other.png"
            source = "https://example.com/other"
            category = "data"
            "#
        );

        let err = Portfolio::from_toml(&doc).unwrap_err();
        assert!(err.to_string().contains("duplicate project id 7"));
    }

    #[test]
    fn out_of_range_proficiency_is_rejected() {
        let doc = format!(
            "{MINIMAL}\n{}",
            r##"
            [[skills]]
            name = "Languages"
            skills = [{ name = "Rust", color = "#000000", proficiency = 120, frequency = "daily" }]
            "##
        );

        assert!(Portfolio::from_toml(&doc).is_err());
    }

    #[test]
    fn malformed_catalog_reports_parse_failure() {
        let err = Portfolio::from_toml("[profile]\nname = 3").unwrap_err();
        assert!(err.to_string().contains("failed to parse catalog"));
    }
}
