use rand::seq::SliceRandom;

const DEFAULT_POSTERS: [&str; 3] = [
    "https://picsum.photos/342/513?random=101",
    "https://picsum.photos/342/513?random=102",
    "https://picsum.photos/342/513?random=103",
];

const DEFAULT_BACKDROPS: [&str; 2] = [
    "https://picsum.photos/1280/720?random=201",
    "https://picsum.photos/1280/720?random=202",
];

/// Supplies artwork for items whose source has none.
///
/// The chosen URL is cosmetic: it never contributes to an item's identity.
pub trait PlaceholderProvider: Send + Sync {
    fn poster(&self) -> String;
    fn backdrop(&self) -> String;
}

/// Picks uniformly at random from static pools
#[derive(Debug, Clone)]
pub struct RandomPlaceholders {
    posters: Vec<String>,
    backdrops: Vec<String>,
}

impl RandomPlaceholders {
    pub fn new(posters: Vec<String>, backdrops: Vec<String>) -> Self {
        Self { posters, backdrops }
    }

    fn sample(pool: &[String]) -> String {
        pool.choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for RandomPlaceholders {
    fn default() -> Self {
        Self::new(
            DEFAULT_POSTERS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_BACKDROPS.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl PlaceholderProvider for RandomPlaceholders {
    fn poster(&self) -> String {
        Self::sample(&self.posters)
    }

    fn backdrop(&self) -> String {
        Self::sample(&self.backdrops)
    }
}

/// Always returns the same artwork, for deterministic output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPlaceholders {
    poster: String,
    backdrop: String,
}

impl FixedPlaceholders {
    pub fn new(poster: impl Into<String>, backdrop: impl Into<String>) -> Self {
        Self {
            poster: poster.into(),
            backdrop: backdrop.into(),
        }
    }
}

impl PlaceholderProvider for FixedPlaceholders {
    fn poster(&self) -> String {
        self.poster.clone()
    }

    fn backdrop(&self) -> String {
        self.backdrop.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_placeholders_come_from_the_pool() {
        let placeholders = RandomPlaceholders::default();
        for _ in 0..20 {
            assert!(DEFAULT_POSTERS.contains(&placeholders.poster().as_str()));
            assert!(DEFAULT_BACKDROPS.contains(&placeholders.backdrop().as_str()));
        }
    }

    #[test]
    fn test_empty_pool_yields_empty_url() {
        let placeholders = RandomPlaceholders::new(vec![], vec![]);
        assert_eq!(placeholders.poster(), "");
    }

    #[test]
    fn test_fixed_placeholders() {
        let placeholders = FixedPlaceholders::new("poster.jpg", "backdrop.jpg");
        assert_eq!(placeholders.poster(), "poster.jpg");
        assert_eq!(placeholders.backdrop(), "backdrop.jpg");
    }
}
