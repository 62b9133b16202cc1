/// One-shot visibility of a `[data-reveal]` element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Feeds one intersection report. Once revealed, nothing moves it back.
    pub fn observe(self, is_intersecting: bool) -> Self {
        match self {
            RevealState::Revealed => RevealState::Revealed,
            RevealState::Hidden if is_intersecting => RevealState::Revealed,
            RevealState::Hidden => RevealState::Hidden,
        }
    }

    pub fn from_visible_class(has_class: bool) -> Self {
        if has_class {
            RevealState::Revealed
        } else {
            RevealState::Hidden
        }
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }
}
