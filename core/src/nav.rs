/// Open/closed state of the mobile navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavPanel {
    open: bool,
}

impl NavPanel {
    pub fn from_open_class(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed() -> Self {
        Self { open: false }
    }

    /// Value for the toggle's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_restores_state() {
        for start in [false, true] {
            let panel = NavPanel::from_open_class(start);
            let once = panel.toggled();
            assert_eq!(once.is_open(), !start);
            assert_eq!(once.aria_expanded(), if start { "false" } else { "true" });
            assert_eq!(once.toggled(), panel);
        }
    }

    #[test]
    fn link_click_always_closes() {
        assert_eq!(NavPanel::closed().aria_expanded(), "false");
        assert!(!NavPanel::from_open_class(true).toggled().is_open());
    }
}
