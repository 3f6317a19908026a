use std::fmt;

use serde::{Deserialize, Serialize};

pub const EXCERPT_CHARS: usize = 120;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Data,
    Certification,
}

impl ProjectCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectCategory::Web => "web",
            ProjectCategory::Data => "data",
            ProjectCategory::Certification => "certification",
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub source: String,
    #[serde(default)]
    pub featured: bool,
    pub category: ProjectCategory,

    // only meaningful for certification entries
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub validation_number: Option<String>,
    #[serde(default)]
    pub document: Option<String>,
}

impl Project {
    pub fn is_certification(&self) -> bool {
        self.category == ProjectCategory::Certification
    }

    // the full text shown in the detail modal
    pub fn overview(&self) -> &str {
        self.long_description.as_deref().unwrap_or(&self.description)
    }

    // card text: the long description cut to EXCERPT_CHARS characters, with an
    // ellipsis if anything was dropped
    pub fn excerpt(&self) -> String {
        match &self.long_description {
            Some(long) if !long.is_empty() => {
                let mut excerpt: String = long.chars().take(EXCERPT_CHARS).collect();
                if long.chars().count() > EXCERPT_CHARS {
                    excerpt.push_str("...");
                }
                excerpt
            }
            _ => self.description.clone(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

// ProjectFilter
//
// the grid is filtered by a single selection.  the selection arrives as a string
// (from a filter button or a tag chip), and anything that is not a reserved word
// or a category name is treated as a tag
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ProjectFilter {
    #[default]
    All,
    Featured,
    Category(ProjectCategory),
    Tag(String),
}

impl ProjectFilter {
    pub fn from_selection(selection: &str) -> Self {
        match selection {
            "all" => ProjectFilter::All,
            "featured" => ProjectFilter::Featured,
            "web" => ProjectFilter::Category(ProjectCategory::Web),
            "data" => ProjectFilter::Category(ProjectCategory::Data),
            "certification" => ProjectFilter::Category(ProjectCategory::Certification),
            tag => ProjectFilter::Tag(tag.to_owned()),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Featured => project.featured,
            ProjectFilter::Category(category) => project.category == *category,
            ProjectFilter::Tag(tag) => project.has_tag(tag),
        }
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }

    pub fn is_tag(&self, tag: &str) -> bool {
        matches!(self, ProjectFilter::Tag(t) if t == tag)
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectFilter::All => write!(f, "all"),
            ProjectFilter::Featured => write!(f, "featured"),
            ProjectFilter::Category(category) => write!(f, "{}", category.as_str()),
            ProjectFilter::Tag(tag) => write!(f, "{tag}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, category: ProjectCategory, tags: &[&str], featured: bool) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            description: format!("Short {id}"),
            long_description: None,
            image: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            source: String::new(),
            featured,
            category,
            issue_date: None,
            validation_number: None,
            document: None,
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project(1, ProjectCategory::Web, &["react", "node", "mongodb"], true),
            project(2, ProjectCategory::Data, &["react", "flask", "python"], false),
            project(3, ProjectCategory::Web, &["react", "mongodb", "analytics"], false),
            project(4, ProjectCategory::Certification, &[], false),
        ]
    }

    fn ids(projects: Vec<&Project>) -> Vec<u32> {
        projects.into_iter().map(|p| p.id).collect()
    }

    #[test]
    fn selection_parsing() {
        assert_eq!(ProjectFilter::from_selection("all"), ProjectFilter::All);
        assert_eq!(ProjectFilter::from_selection("featured"), ProjectFilter::Featured);
        assert_eq!(
            ProjectFilter::from_selection("data"),
            ProjectFilter::Category(ProjectCategory::Data)
        );
        assert_eq!(
            ProjectFilter::from_selection("certification"),
            ProjectFilter::Category(ProjectCategory::Certification)
        );
        assert_eq!(
            ProjectFilter::from_selection("python"),
            ProjectFilter::Tag("python".into())
        );
    }

    #[test]
    fn filters_select_exactly_matching_projects() {
        let projects = sample();

        assert_eq!(ids(ProjectFilter::All.apply(&projects)), vec![1, 2, 3, 4]);
        assert_eq!(ids(ProjectFilter::Featured.apply(&projects)), vec![1]);
        assert_eq!(
            ids(ProjectFilter::from_selection("web").apply(&projects)),
            vec![1, 3]
        );
        assert_eq!(
            ids(ProjectFilter::from_selection("mongodb").apply(&projects)),
            vec![1, 3]
        );
        assert_eq!(
            ids(ProjectFilter::from_selection("react").apply(&projects)),
            vec![1, 2, 3]
        );
        assert!(ProjectFilter::from_selection("cobol").apply(&projects).is_empty());
    }

    #[test]
    fn display_round_trips_selection() {
        for selection in ["all", "featured", "web", "data", "certification", "nlp"] {
            assert_eq!(ProjectFilter::from_selection(selection).to_string(), selection);
        }
    }

    #[test]
    fn excerpt_truncates_long_descriptions() {
        let mut p = project(1, ProjectCategory::Web, &[], false);
        assert_eq!(p.excerpt(), "Short 1");
        assert_eq!(p.overview(), "Short 1");

        p.long_description = Some("x".repeat(EXCERPT_CHARS));
        assert_eq!(p.excerpt(), "x".repeat(EXCERPT_CHARS));

        p.long_description = Some("é".repeat(EXCERPT_CHARS + 5));
        let excerpt = p.excerpt();
        assert!(excerpt.ends_with("..."));
        assert_eq!(excerpt.chars().count(), EXCERPT_CHARS + 3);
        assert_eq!(p.overview().chars().count(), EXCERPT_CHARS + 5);
    }

    #[test]
    fn tag_selection_is_tracked() {
        let filter = ProjectFilter::from_selection("flask");
        assert!(filter.is_tag("flask"));
        assert!(!filter.is_tag("react"));
        assert!(!ProjectFilter::All.is_tag("all"));
    }
}
