use crate::config::PageConfig;
use crate::seed::{card_seed, SeedSource};

pub const CARD_CLASS: &str = "work-card tilt";
pub const CARD_IMAGE_ALT: &str = "Random inspiration from Picsum";
pub const CARD_META_CLASS: &str = "work-meta";
pub const CARD_TITLE_CLASS: &str = "work-title";
pub const CARD_SUB_CLASS: &str = "work-sub";
pub const CARD_TITLE: &str = "Visual Concept";
pub const CARD_SUBTITLE: &str = "Randomized from Picsum";

/// Everything needed to materialize one gallery card.
#[derive(Clone, Debug, PartialEq)]
pub struct CardSpec {
    pub seed: String,
    pub image_url: String,
    pub alt: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tiltable: bool,
    pub revealable: bool,
}

impl CardSpec {
    pub fn new(config: &PageConfig, seed: String) -> Self {
        let image_url = placeholder_url(
            &config.placeholder_host,
            &seed,
            config.image_width,
            config.image_height,
        );
        Self {
            seed,
            image_url,
            alt: CARD_IMAGE_ALT,
            title: CARD_TITLE,
            subtitle: CARD_SUBTITLE,
            tiltable: true,
            revealable: true,
        }
    }
}

pub fn placeholder_url(host: &str, seed: &str, width: u32, height: u32) -> String {
    format!("https://{host}/seed/{seed}/{width}/{height}")
}

pub fn build_batch<S: SeedSource + ?Sized>(
    config: &PageConfig,
    source: &mut S,
    count: usize,
) -> Vec<CardSpec> {
    (0..count)
        .map(|index| CardSpec::new(config, card_seed(source, index)))
        .collect()
}
