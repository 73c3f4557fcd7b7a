//! Quick-reply suggestion generation.
//!
//! Suggestions are drawn from fixed pools: an ordered keyword-category match
//! against the last user message, or a seasonal/inspirational blend when
//! nothing matches. A per-pool used-set biases against repetition until a
//! pool runs out of fresh items.

use crate::types::Location;
use chrono::Datelike;
use log::debug;
use parking_lot::Mutex;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::{HashMap, HashSet};

/// Placeholder substituted with the known city name at draw time.
const CITY_PLACEHOLDER: &str = "{city}";
/// Fallback substitution when no city is known.
const CITY_FALLBACK: &str = "my area";
/// Probability of swapping one blended slot for a city-parameterized phrase.
const CITY_SLOT_PROBABILITY: f64 = 0.15;

/// Keyword category evaluated in fixed order; first match wins.
struct Category {
    key: &'static str,
    keywords: &'static [&'static str],
    pool: &'static [&'static str],
}

const CATEGORIES: &[Category] = &[
    Category {
        key: "proximity",
        keywords: &["near me", "nearby", "around here", "close to me", "local"],
        pool: &[
            "Best restaurants in {city}",
            "Top attractions near me",
            "Hidden gems around here",
            "Day trips from {city}",
        ],
    },
    Category {
        key: "discovery",
        keywords: &["where", "destination", "recommend", "suggest", "visit", "place"],
        pool: &[
            "Top beach destinations",
            "Best cities for culture",
            "Underrated places to visit",
            "Where should I go this year?",
        ],
    },
    Category {
        key: "budget",
        keywords: &["budget", "cheap", "cost", "price", "expensive", "afford"],
        pool: &[
            "Budget destinations 2025",
            "How to save on flights",
            "Cheap weekend getaways",
            "Travel on $50 a day",
        ],
    },
    Category {
        key: "booking",
        keywords: &["book", "booking", "reserve", "reservation", "ticket"],
        pool: &[
            "How far ahead should I book?",
            "Best day to book flights",
            "Refundable booking tips",
            "Bundle flight and hotel?",
        ],
    },
    Category {
        key: "transport",
        keywords: &["flight", "fly", "train", "bus", "car rental", "airport", "transport"],
        pool: &[
            "Cheapest ways to get around",
            "Train vs flight in Europe",
            "Airport transfer tips",
            "Is a rail pass worth it?",
        ],
    },
    Category {
        key: "weather",
        keywords: &["weather", "season", "rain", "summer", "winter", "climate", "temperature"],
        pool: &[
            "Best time to visit Southeast Asia",
            "Where is it sunny in January?",
            "Shoulder season secrets",
            "Monsoon-proof destinations",
        ],
    },
    Category {
        key: "activity",
        keywords: &[
            "hike", "hiking", "beach", "museum", "adventure", "food", "surf", "dive", "ski",
            "activity",
        ],
        pool: &[
            "Best hiking trails",
            "Top food experiences",
            "Adventure travel ideas",
            "World-class diving spots",
        ],
    },
    Category {
        key: "family",
        keywords: &["family", "kids", "children", "toddler"],
        pool: &[
            "Family-friendly resorts",
            "Traveling with kids tips",
            "Best theme parks",
            "All-inclusive family deals",
        ],
    },
];

const WINTER_POOL: &[&str] = &[
    "Winter sun escapes",
    "Best ski resorts",
    "Northern lights trips",
    "Christmas market cities",
];
const SPRING_POOL: &[&str] = &[
    "Cherry blossom destinations",
    "Spring city breaks",
    "Best hiking in spring",
    "Tulip season in Holland",
];
const SUMMER_POOL: &[&str] = &[
    "Top summer beach spots",
    "Island hopping in Greece",
    "Beat-the-heat mountain escapes",
    "Best summer festivals",
];
const AUTUMN_POOL: &[&str] = &[
    "Fall foliage road trips",
    "Wine harvest tours",
    "Quiet beaches in September",
    "Autumn city breaks",
];

const GENERIC_POOL: &[&str] = &[
    "Surprise me with a destination",
    "Plan a 7 day trip",
    "Weekend getaway ideas",
    "Most romantic cities",
];

/// Per-session quick-reply generator with repetition control.
pub struct SuggestionEngine {
    /// Suggestions returned per batch, clamped to 2..=4 by config.
    batch_size: usize,
    /// Already-presented items, tracked per pool key.
    used: Mutex<HashMap<&'static str, HashSet<String>>>,
    /// Calendar month override for tests; 1-12.
    month: Option<u32>,
}

impl SuggestionEngine {
    /// Create an engine producing `batch_size` suggestions per call.
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.clamp(2, 4),
            used: Mutex::new(HashMap::new()),
            month: None,
        }
    }

    /// Pin the calendar month instead of reading the clock.
    pub fn with_month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    /// Compute the next batch of quick replies.
    pub fn next(&self, last_user_text: &str, location: &Location) -> Vec<String> {
        let lowered = last_user_text.trim().to_lowercase();

        if !lowered.is_empty() {
            for category in CATEGORIES {
                if category
                    .keywords
                    .iter()
                    .any(|keyword| lowered.contains(keyword))
                {
                    debug!("suggestion category matched (key={})", category.key);
                    return self.draw(category.key, category.pool, self.batch_size, location);
                }
            }
        }

        self.blended(location)
    }

    /// Seasonal pick plus generic picks for empty or unmatched input.
    fn blended(&self, location: &Location) -> Vec<String> {
        let (season_key, season_pool) = self.seasonal_pool();
        let mut suggestions = self.draw(season_key, season_pool, 1, location);
        suggestions.extend(self.draw(
            "generic",
            GENERIC_POOL,
            self.batch_size - 1,
            location,
        ));

        if let Some(city) = &location.city
            && rand::rng().random_bool(CITY_SLOT_PROBABILITY)
        {
            let slot = suggestions.len() - 1;
            suggestions[slot] = format!("Things to do in {city}");
        }

        suggestions
    }

    /// Pool for the current calendar quarter.
    fn seasonal_pool(&self) -> (&'static str, &'static [&'static str]) {
        let month = self.month.unwrap_or_else(|| chrono::Utc::now().month());
        match month {
            12 | 1 | 2 => ("winter", WINTER_POOL),
            3..=5 => ("spring", SPRING_POOL),
            6..=8 => ("summer", SUMMER_POOL),
            _ => ("autumn", AUTUMN_POOL),
        }
    }

    /// Draw up to `n` fresh items from a pool, resetting the pool's used-set
    /// only when fewer fresh items remain than requested.
    fn draw(
        &self,
        key: &'static str,
        pool: &'static [&'static str],
        n: usize,
        location: &Location,
    ) -> Vec<String> {
        let mut used = self.used.lock();
        let used_for_pool = used.entry(key).or_default();

        let mut fresh: Vec<&'static str> = pool
            .iter()
            .copied()
            .filter(|item| !used_for_pool.contains(*item))
            .collect();
        if fresh.len() < n {
            debug!("recycling suggestion pool (key={key})");
            used_for_pool.clear();
            fresh = pool.to_vec();
        }

        let count = n.min(fresh.len());
        let chosen: Vec<&'static str> = fresh
            .choose_multiple(&mut rand::rng(), count)
            .copied()
            .collect();
        for item in &chosen {
            used_for_pool.insert((*item).to_string());
        }

        let city = location.city.as_deref().unwrap_or(CITY_FALLBACK);
        chosen
            .into_iter()
            .map(|item| item.replace(CITY_PLACEHOLDER, city))
            .collect()
    }
}
