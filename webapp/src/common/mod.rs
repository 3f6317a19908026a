use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, error};

use common::theme::Theme;
use content::Portfolio;

pub mod dom;
pub mod style;

// global theme signal
//
// the navbar owns the toggle and the app root mirrors it onto the document, so
// nothing else ever writes this
pub static THEME: GlobalSignal<Theme> = Signal::global(Theme::default);

// the catalog is compiled in, so it is parsed once at startup and handed down
// through context.  a broken catalog is a build problem, but we still render an
// error panel rather than a blank page
pub type Catalog = Result<Rc<Portfolio>, String>;

pub fn load_catalog() -> Catalog {
    match Portfolio::builtin() {
        Ok(portfolio) => {
            debug!(
                "loaded catalog with {} projects and {} skill categories",
                portfolio.projects.len(),
                portfolio.skills.len()
            );
            Ok(Rc::new(portfolio))
        }
        Err(err) => {
            error!("{err:?}");
            Err(format!("{err:#}"))
        }
    }
}

pub fn use_catalog() -> Catalog {
    use_context::<Catalog>()
}

// the current year, for the footer
pub fn current_year() -> i32 {
    use chrono::Datelike;

    chrono::Local::now().year()
}
