/// A tracked section and its distance from the top of the document.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Fragment id of an in-page link, `None` for anything that is not `#id`.
pub fn parse_anchor(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Scroll position that leaves the target clear of the fixed header.
pub fn scroll_target(offset_top: f64, header_offset: f64) -> f64 {
    offset_top - header_offset
}

/// Index of the section being read: sections are walked in document order and
/// the last one whose top is at or above `scroll_y + lookahead` wins.
pub fn current_section(sections: &[SectionOffset], scroll_y: f64, lookahead: f64) -> Option<usize> {
    let pos = scroll_y + lookahead;
    let mut current = None;
    for (index, section) in sections.iter().enumerate() {
        if section.top <= pos {
            current = Some(index);
        }
    }
    current
}
