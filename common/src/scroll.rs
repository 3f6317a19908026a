// a section is active when it straddles this line, measured from the top of the
// viewport (roughly the bottom edge of the sticky navbar)
pub const ACTIVE_LINE: f64 = 100.0;

// fraction of the viewport height a section must scroll past before it reveals
pub const REVEAL_FRACTION: f64 = 0.75;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    pub fn contains_line(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }

    pub fn in_view(&self, viewport_height: f64, fraction: f64) -> bool {
        self.top <= viewport_height * fraction && self.bottom >= 0.0
    }
}

// picks the first section (in page order) crossing ACTIVE_LINE, falling back to
// the first entry.  sections that are not in the document are passed as None
pub fn active_section<'a>(sections: &[(&'a str, Option<SectionRect>)]) -> Option<&'a str> {
    sections
        .iter()
        .find_map(|(id, rect)| match rect {
            Some(rect) if rect.contains_line(ACTIVE_LINE) => Some(*id),
            _ => None,
        })
        .or_else(|| sections.first().map(|(id, _)| *id))
}

// percentage of the page scrolled so far
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let total = scroll_height - client_height;

    if total <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }

    (scroll_y / total * 100.0).clamp(0.0, 100.0)
}
