pub mod about;
pub mod config;
pub mod contact;
pub mod gallery;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod seed;
pub mod tilt;

pub use about::AboutCard;
pub use config::{PageConfig, Selectors};
pub use contact::{ContactDraft, ContactError, FormStatus, StatusTone};
pub use gallery::{build_batch, placeholder_url, CardSpec};
pub use nav::NavPanel;
pub use reveal::RevealState;
pub use scroll::{current_section, parse_anchor, scroll_target, SectionOffset};
pub use seed::{card_seed, SeedSource};
pub use tilt::{Bounds, Tilt};
