pub const DEFAULT_BATCH_SIZE: usize = 9;
pub const PLACEHOLDER_HOST: &str = "picsum.photos";
pub const CARD_IMAGE_WIDTH: u32 = 600;
pub const CARD_IMAGE_HEIGHT: u32 = 400;
pub const TILT_MAX_DEG: f64 = 10.0;
pub const TILT_PERSPECTIVE_PX: f64 = 800.0;
pub const TILT_TRANSITION_MS: u32 = 150;
pub const REVEAL_THRESHOLD: f64 = 0.12;
pub const SCROLL_HEADER_OFFSET: f64 = 70.0;
pub const SPY_LOOKAHEAD: f64 = 90.0;

pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_OPEN: &str = "open";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_EXPANDED: &str = "expanded";
pub const CLASS_CLAMP: &str = "clamp";

/// DOM hooks the behaviors attach to.
#[derive(Clone, Debug, PartialEq)]
pub struct Selectors {
    pub gallery_id: &'static str,
    pub load_more_id: &'static str,
    pub year_id: &'static str,
    pub nav_toggle: &'static str,
    pub nav_links: &'static str,
    pub nav_link_anchors: &'static str,
    pub tracked_links: &'static str,
    pub contact_form_id: &'static str,
    pub form_status_id: &'static str,
    pub about_card: &'static str,
    pub about_toggle: &'static str,
    pub about_text: &'static str,
    pub tilt_marker: &'static str,
    pub reveal_marker: &'static str,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            gallery_id: "portfolioGrid",
            load_more_id: "loadMore",
            year_id: "year",
            nav_toggle: ".nav-toggle",
            nav_links: ".nav-links",
            nav_link_anchors: "a",
            tracked_links: ".nav-links a[data-link]",
            contact_form_id: "contactForm",
            form_status_id: "formStatus",
            about_card: ".about-card",
            about_toggle: ".toggle-more",
            about_text: ".about-text",
            tilt_marker: "[data-tilt]",
            reveal_marker: "[data-reveal]",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub batch_size: usize,
    pub placeholder_host: String,
    pub image_width: u32,
    pub image_height: u32,
    pub tilt_max_deg: f64,
    pub perspective_px: f64,
    pub tilt_transition_ms: u32,
    pub reveal_threshold: f64,
    pub header_offset: f64,
    pub spy_lookahead: f64,
    pub selectors: Selectors,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            placeholder_host: PLACEHOLDER_HOST.to_string(),
            image_width: CARD_IMAGE_WIDTH,
            image_height: CARD_IMAGE_HEIGHT,
            tilt_max_deg: TILT_MAX_DEG,
            perspective_px: TILT_PERSPECTIVE_PX,
            tilt_transition_ms: TILT_TRANSITION_MS,
            reveal_threshold: REVEAL_THRESHOLD,
            header_offset: SCROLL_HEADER_OFFSET,
            spy_lookahead: SPY_LOOKAHEAD,
            selectors: Selectors::default(),
        }
    }
}

impl PageConfig {
    /// Replaces the placeholder host, ignoring blank values. Any scheme prefix
    /// or trailing slash is stripped so the URL builder can add its own.
    pub fn with_placeholder_host(mut self, raw: &str) -> Self {
        let trimmed = raw.trim();
        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .unwrap_or(trimmed)
            .trim_end_matches('/');
        if !host.is_empty() {
            self.placeholder_host = host.to_string();
        }
        self
    }

    pub fn with_batch_size(mut self, raw: &str) -> Self {
        if let Ok(size) = raw.trim().parse::<usize>() {
            self.batch_size = size;
        }
        self
    }

    pub fn tilt_transition(&self) -> String {
        format!("transform {}s ease", f64::from(self.tilt_transition_ms) / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_override_strips_scheme_and_slash() {
        let config = PageConfig::default().with_placeholder_host(" https://img.example.test/ ");
        assert_eq!(config.placeholder_host, "img.example.test");
    }

    #[test]
    fn blank_overrides_keep_defaults() {
        let config = PageConfig::default()
            .with_placeholder_host("   ")
            .with_batch_size("nine");
        assert_eq!(config.placeholder_host, PLACEHOLDER_HOST);
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
    }

    #[test]
    fn batch_override_accepts_zero() {
        let config = PageConfig::default().with_batch_size("0");
        assert_eq!(config.batch_size, 0);
    }

    #[test]
    fn transition_matches_stylesheet_shorthand() {
        assert_eq!(PageConfig::default().tilt_transition(), "transform 0.15s ease");
    }
}
