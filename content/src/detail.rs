use crate::{Portfolio, education::Certification, project::Project};

// the catalog entries that can be opened in the detail view
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Detail {
    Project(u32),
    Certification(usize),
}

// DetailView
//
// a Detail resolved against the catalog, borrowing the entry it points at
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DetailView<'a> {
    Project(&'a Project),
    Certification(&'a Certification),
}

impl DetailView<'_> {
    pub fn title(&self) -> &str {
        match self {
            DetailView::Project(project) => &project.title,
            DetailView::Certification(cert) => &cert.name,
        }
    }

    // certifications carry no prose of their own
    pub fn overview(&self) -> Option<&str> {
        match self {
            DetailView::Project(project) => Some(project.overview()),
            DetailView::Certification(_) => None,
        }
    }
}

impl Portfolio {
    pub fn detail(&self, detail: Detail) -> Option<DetailView<'_>> {
        match detail {
            Detail::Project(id) => self.project(id).map(DetailView::Project),
            Detail::Certification(idx) => self
                .certifications
                .get(idx)
                .map(DetailView::Certification),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio() -> Portfolio {
        Portfolio::builtin().unwrap()
    }

    #[test]
    fn project_detail_shows_title_and_long_description() {
        let portfolio = portfolio();
        let view = portfolio.detail(Detail::Project(1)).unwrap();

        assert_eq!(view.title(), "E-Commerce Platform");
        assert!(
            view.overview()
                .unwrap()
                .starts_with("This e-commerce platform is a full-stack application")
        );
    }

    #[test]
    fn overview_falls_back_to_short_description() {
        let mut portfolio = portfolio();
        portfolio.projects[0].long_description = None;

        let view = portfolio.detail(Detail::Project(1)).unwrap();
        assert_eq!(view.overview(), Some(portfolio.projects[0].description.as_str()));
    }

    #[test]
    fn certification_detail_uses_its_name() {
        let portfolio = portfolio();
        let view = portfolio.detail(Detail::Certification(0)).unwrap();

        assert_eq!(view.title(), "AWS Cloud Practitioner");
        assert_eq!(view.overview(), None);
    }

    #[test]
    fn unknown_entries_resolve_to_nothing() {
        let portfolio = portfolio();

        assert_eq!(portfolio.detail(Detail::Project(999)), None);
        assert_eq!(portfolio.detail(Detail::Certification(99)), None);
    }
}
