use constcat::concat;

mod components;
mod sections;
mod variables;

pub use components::BASE_COMPONENTS;
pub use sections::{
    BACKGROUND_STYLES, CONTACT_STYLES, EDUCATION_STYLES, FOOTER_STYLES, HERO_STYLES, NAV_STYLES,
    PROJECT_STYLES, SKILLS_STYLES,
};
pub use variables::CSS_VARIABLES;

pub const MODERN_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS
);

// everything specific to the page sections
pub const SECTION_STYLES: &str = concat!(
    NAV_STYLES,
    HERO_STYLES,
    EDUCATION_STYLES,
    SKILLS_STYLES,
    PROJECT_STYLES,
    CONTACT_STYLES,
    FOOTER_STYLES,
    BACKGROUND_STYLES
);
