use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Score {
    // grade point average out of 10
    Cgpa(f32),
    Percentage(f32),
}

impl Score {
    pub fn is_valid(&self) -> bool {
        match *self {
            Score::Cgpa(v) => (0.0..=10.0).contains(&v),
            Score::Percentage(v) => (0.0..=100.0).contains(&v),
        }
    }

    // fill level of the progress ring, 0-100
    pub fn progress(&self) -> f32 {
        match *self {
            Score::Cgpa(v) => v * 10.0,
            Score::Percentage(v) => v,
        }
    }

    pub fn label(&self) -> String {
        match *self {
            Score::Cgpa(v) => format!("CGPA: {v}"),
            Score::Percentage(v) => format!("Percentage: {v}%"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub score: Score,
    pub years: String,
}

impl Education {
    pub fn progress_label(&self) -> String {
        format!("{:.1}%", self.score.progress())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Certification {
    pub name: String,
    pub document: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub validation_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cgpa_scales_to_percent() {
        let edu = Education {
            degree: "B.Tech IT".into(),
            institution: "College".into(),
            score: Score::Cgpa(7.25),
            years: "2022 - 2026".into(),
        };

        assert_eq!(edu.score.progress(), 72.5);
        assert_eq!(edu.progress_label(), "72.5%");
        assert_eq!(edu.score.label(), "CGPA: 7.25");
    }

    #[test]
    fn percentage_is_used_directly() {
        let score = Score::Percentage(85.5);

        assert_eq!(score.progress(), 85.5);
        assert_eq!(score.label(), "Percentage: 85.5%");
    }

    #[test]
    fn score_bounds() {
        assert!(Score::Cgpa(10.0).is_valid());
        assert!(!Score::Cgpa(10.5).is_valid());
        assert!(!Score::Percentage(-1.0).is_valid());
        assert!(Score::Percentage(100.0).is_valid());
    }
}
