use serde::{Deserialize, Serialize};

pub const ALL_CATEGORIES: &str = "All";

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Occasional,
}

impl Frequency {
    pub fn label(self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Occasional => "Occasional",
        }
    }

    // badge colour class
    pub fn css_class(self) -> &'static str {
        match self {
            Frequency::Daily => "freq-daily",
            Frequency::Weekly => "freq-weekly",
            Frequency::Occasional => "freq-other",
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Skill {
    pub name: String,
    pub color: String,
    pub proficiency: u8,
    pub frequency: Frequency,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

// tab labels, "All" first
pub fn category_names(categories: &[SkillCategory]) -> Vec<String> {
    std::iter::once(ALL_CATEGORIES.to_owned())
        .chain(categories.iter().map(|c| c.name.clone()))
        .collect()
}

// SkillFilter
//
// a category selection combined with a free-text query.  the query is matched
// case-insensitively against skill names, and categories that end up with no
// matching skills are dropped from the result
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SkillFilter {
    pub category: String,
    pub query: String,
}

impl Default for SkillFilter {
    fn default() -> Self {
        SkillFilter {
            category: ALL_CATEGORIES.to_owned(),
            query: String::new(),
        }
    }
}

impl SkillFilter {
    pub fn is_default(&self) -> bool {
        self.category == ALL_CATEGORIES && self.query.is_empty()
    }

    pub fn apply(&self, categories: &[SkillCategory]) -> Vec<SkillCategory> {
        if self.is_default() {
            return categories.to_vec();
        }

        let selected = categories
            .iter()
            .filter(|c| self.category == ALL_CATEGORIES || c.name == self.category);

        // a chosen category is shown as-is until there is something to search for
        if self.query.is_empty() {
            return selected.cloned().collect();
        }

        let query = self.query.to_lowercase();

        selected
            .map(|c| SkillCategory {
                name: c.name.clone(),
                skills: c
                    .skills
                    .iter()
                    .filter(|s| s.name.to_lowercase().contains(&query))
                    .cloned()
                    .collect(),
            })
            .filter(|c| !c.skills.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str) -> Skill {
        Skill {
            name: name.to_owned(),
            color: "#000000".to_owned(),
            proficiency: 50,
            frequency: Frequency::Weekly,
        }
    }

    fn sample() -> Vec<SkillCategory> {
        vec![
            SkillCategory {
                name: "Languages".into(),
                skills: vec![skill("JavaScript"), skill("Java"), skill("C")],
            },
            SkillCategory {
                name: "Frontend".into(),
                skills: vec![skill("React"), skill("CSS3")],
            },
            SkillCategory {
                name: "Empty".into(),
                skills: vec![],
            },
        ]
    }

    fn names(categories: &[SkillCategory]) -> Vec<(String, Vec<String>)> {
        categories
            .iter()
            .map(|c| {
                (
                    c.name.clone(),
                    c.skills.iter().map(|s| s.name.clone()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn default_filter_returns_everything() {
        let categories = sample();
        assert_eq!(SkillFilter::default().apply(&categories), categories);
    }

    #[test]
    fn query_matches_across_categories_case_insensitively() {
        let filter = SkillFilter {
            category: ALL_CATEGORIES.into(),
            query: "JAVA".into(),
        };

        assert_eq!(
            names(&filter.apply(&sample())),
            vec![(
                "Languages".to_string(),
                vec!["JavaScript".to_string(), "Java".to_string()]
            )]
        );
    }

    #[test]
    fn category_without_query_keeps_whole_category() {
        let filter = SkillFilter {
            category: "Frontend".into(),
            query: String::new(),
        };

        assert_eq!(
            names(&filter.apply(&sample())),
            vec![(
                "Frontend".to_string(),
                vec!["React".to_string(), "CSS3".to_string()]
            )]
        );
    }

    #[test]
    fn category_and_query_combine() {
        let filter = SkillFilter {
            category: "Frontend".into(),
            query: "java".into(),
        };
        assert!(filter.apply(&sample()).is_empty());

        let filter = SkillFilter {
            category: "Frontend".into(),
            query: "css".into(),
        };
        assert_eq!(filter.apply(&sample()).len(), 1);
    }

    #[test]
    fn chosen_empty_category_is_still_shown() {
        let filter = SkillFilter {
            category: "Empty".into(),
            query: String::new(),
        };
        assert_eq!(
            names(&filter.apply(&sample())),
            vec![("Empty".to_string(), vec![])]
        );

        let filter = SkillFilter {
            category: "Empty".into(),
            query: "rust".into(),
        };
        assert!(filter.apply(&sample()).is_empty());
    }

    #[test]
    fn unknown_category_is_empty() {
        let filter = SkillFilter {
            category: "Databases".into(),
            query: String::new(),
        };
        assert!(filter.apply(&sample()).is_empty());
    }

    #[test]
    fn tabs_start_with_all() {
        assert_eq!(
            category_names(&sample()),
            vec!["All", "Languages", "Frontend", "Empty"]
        );
    }

    #[test]
    fn frequency_badges() {
        assert_eq!(Frequency::Daily.css_class(), "freq-daily");
        assert_eq!(Frequency::Weekly.css_class(), "freq-weekly");
        assert_eq!(Frequency::Occasional.css_class(), "freq-other");
    }
}
