use std::collections::HashSet;

use folio_core::{build_batch, PageConfig, SeedSource};

/// Frozen clock with a cycling random source, the worst case for collisions.
struct FrozenClock {
    now: f64,
    values: Vec<f64>,
    cursor: usize,
}

impl SeedSource for FrozenClock {
    fn now_ms(&self) -> f64 {
        self.now
    }

    fn random_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

fn frozen() -> FrozenClock {
    FrozenClock {
        now: 1_729_000_000_000.0,
        values: vec![0.5],
        cursor: 0,
    }
}

#[test]
fn batch_has_requested_size_and_distinct_seeds() {
    let config = PageConfig::default();
    for count in [0usize, 1, 9, 64] {
        let cards = build_batch(&config, &mut frozen(), count);
        assert_eq!(cards.len(), count);
        let seeds: HashSet<&str> = cards.iter().map(|card| card.seed.as_str()).collect();
        assert_eq!(seeds.len(), count, "seed collision in batch of {count}");
    }
}

#[test]
fn every_card_points_at_placeholder_host() {
    let config = PageConfig::default();
    let cards = build_batch(&config, &mut frozen(), 3);
    for (index, card) in cards.iter().enumerate() {
        assert!(card.seed.starts_with(&format!("1729000000000-{index}-")));
        assert_eq!(
            card.image_url,
            format!("https://picsum.photos/seed/{}/600/400", card.seed)
        );
    }
}

#[test]
fn host_override_flows_into_urls() {
    let config = PageConfig::default().with_placeholder_host("img.local");
    let cards = build_batch(&config, &mut frozen(), 1);
    assert!(cards[0].image_url.starts_with("https://img.local/seed/"));
}
