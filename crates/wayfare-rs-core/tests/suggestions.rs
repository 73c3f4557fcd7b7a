//! Suggestion behavior through the engine surface.

use pretty_assertions::assert_eq;
use std::sync::Arc;
use wayfare_rs_config::{SuggestionsConfig, WayfareConfig};
use wayfare_rs_core::ChatEngine;
use wayfare_rs_test_utils::{
    EmptyGeocoder, FixedGenerator, FixedGeocoder, FixedPositionSource, eiffel_tower_results,
};

fn engine(config: WayfareConfig) -> ChatEngine {
    ChatEngine::new(
        &config,
        Arc::new(FixedGenerator::new("reply")),
        Arc::new(FixedGeocoder::new(eiffel_tower_results())),
        Arc::new(FixedPositionSource::new(48.8584, 2.2945)),
        None,
    )
}

#[tokio::test]
async fn budget_questions_return_budget_suggestions() {
    let engine = engine(WayfareConfig::default());
    let reply = engine
        .send_message("what's the budget for Bali?")
        .await
        .expect("reply");

    let budget_pool = [
        "Budget destinations 2025",
        "How to save on flights",
        "Cheap weekend getaways",
        "Travel on $50 a day",
    ];
    assert_eq!(reply.suggestions.len(), 2);
    for suggestion in &reply.suggestions {
        assert!(budget_pool.contains(&suggestion.as_str()), "{suggestion}");
    }
}

#[tokio::test]
async fn batch_size_comes_from_config() {
    let config = WayfareConfig::builder()
        .suggestions(SuggestionsConfig { batch_size: 4 })
        .build();
    let engine = engine(config);
    let reply = engine
        .send_message("how do I book a ticket?")
        .await
        .expect("reply");
    assert_eq!(reply.suggestions.len(), 4);
}

#[tokio::test]
async fn proximity_suggestions_use_the_resolved_city() {
    let engine = engine(WayfareConfig::default());
    engine.share_location().await;

    let reply = engine
        .send_message("anything fun near me?")
        .await
        .expect("reply");
    // City-parameterized items name the resolved city, never the placeholder.
    for suggestion in &reply.suggestions {
        assert!(!suggestion.contains("{city}"));
        assert!(!suggestion.contains("my area"));
    }
}

#[tokio::test]
async fn repeated_sends_never_return_empty_suggestions() {
    let engine = ChatEngine::new(
        &WayfareConfig::default(),
        Arc::new(FixedGenerator::new("reply")),
        Arc::new(EmptyGeocoder),
        Arc::new(FixedPositionSource::new(0.0, 0.0)),
        None,
    );

    for _ in 0..12 {
        let reply = engine.send_message("zzz unmatched input").await.expect("reply");
        assert!(!reply.suggestions.is_empty());
    }
}
