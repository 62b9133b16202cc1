pub const LABEL_COLLAPSED: &str = "Read More";
pub const LABEL_EXPANDED: &str = "Read Less";

/// Expanded/collapsed state of an about card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AboutCard {
    expanded: bool,
}

impl AboutCard {
    pub fn from_expanded_class(expanded: bool) -> Self {
        Self { expanded }
    }

    pub fn toggled(self) -> Self {
        Self {
            expanded: !self.expanded,
        }
    }

    pub fn is_expanded(self) -> bool {
        self.expanded
    }

    /// Whether the text block carries the line-clamp class.
    pub fn text_clamped(self) -> bool {
        !self.expanded
    }

    pub fn trigger_label(self) -> &'static str {
        if self.expanded {
            LABEL_EXPANDED
        } else {
            LABEL_COLLAPSED
        }
    }
}
