use super::*;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use similarity::SimilarityError;

/// Scripted index: maps exact chunk text to a canned match, optionally
/// failing on one specific chunk.
#[derive(Default)]
struct ScriptedLookup {
    matches: HashMap<String, SimilarityMatch>,
    fail_on: Option<String>,
    calls: AtomicUsize,
}

impl ScriptedLookup {
    fn new() -> Self {
        Self::default()
    }

    fn with_match(mut self, chunk_text: &str, score: f32, matched: &str) -> Self {
        self.matches.insert(
            chunk_text.to_string(),
            SimilarityMatch {
                score,
                text: matched.to_string(),
            },
        );
        self
    }

    fn failing_on(mut self, chunk_text: &str) -> Self {
        self.fail_on = Some(chunk_text.to_string());
        self
    }
}

#[async_trait]
impl SimilarityLookup for ScriptedLookup {
    async fn nearest(&self, text: &str) -> Result<Option<SimilarityMatch>, SimilarityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on.as_deref() == Some(text) {
            return Err(SimilarityError::Request("connection reset by peer".into()));
        }
        Ok(self.matches.get(text).cloned())
    }
}

fn classifier(lookup: ScriptedLookup) -> (Classifier, Arc<ScriptedLookup>) {
    classifier_with_whitelist(lookup, Whitelist::new(["swear"]))
}

fn classifier_with_whitelist(
    lookup: ScriptedLookup,
    whitelist: Whitelist,
) -> (Classifier, Arc<ScriptedLookup>) {
    let lookup = Arc::new(lookup);
    let engine = Classifier::new(lookup.clone(), whitelist, ClassifierConfig::default())
        .expect("default config is valid");
    (engine, lookup)
}

#[tokio::test]
async fn single_word_above_threshold_flags() {
    let (engine, _) = classifier(ScriptedLookup::new().with_match("anathema", 0.97, "anathema"));

    let verdict = engine.classify("anathema").await.expect("classify");
    assert_eq!(
        verdict,
        Classification::Profane {
            score: 0.97,
            flagged_for: "anathema".into()
        }
    );
}

#[tokio::test]
async fn single_word_queries_word_view_only() {
    let (engine, lookup) = classifier(ScriptedLookup::new());

    let verdict = engine.classify("hello").await.expect("classify");
    assert_eq!(verdict, Classification::Clean { score: 0.0 });
    // One word chunk, no semantic windows.
    assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn multi_word_message_queries_words_and_window() {
    let (engine, lookup) = classifier(
        ScriptedLookup::new()
            .with_match("hello", 0.41, "heck")
            .with_match("world", 0.52, "dang")
            .with_match("hello world", 0.33, "heck no"),
    );

    let verdict = engine.classify("hello world").await.expect("classify");
    assert_eq!(verdict, Classification::Clean { score: 0.52 });
    // Two word chunks plus one semantic window.
    assert_eq!(lookup.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn window_match_flags_at_lower_threshold() {
    let (engine, _) = classifier(
        ScriptedLookup::new()
            .with_match("utterly", 0.40, "x")
            .with_match("cursed", 0.90, "cursed")
            .with_match("utterly cursed", 0.91, "utterly cursed stuff"),
    );

    // 0.90/0.91 clear the 0.88 window threshold but not the 0.95 word one;
    // only the window chunk is semantic, so it is the sole flag.
    let verdict = engine.classify("utterly cursed").await.expect("classify");
    assert_eq!(
        verdict,
        Classification::Profane {
            score: 0.91,
            flagged_for: "utterly cursed stuff".into()
        }
    );
}

#[tokio::test]
async fn whitelisted_message_performs_no_lookups() {
    let (engine, lookup) = classifier(ScriptedLookup::new());

    let verdict = engine.classify("swear").await.expect("classify");
    assert_eq!(verdict, Classification::Clean { score: 0.0 });
    assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn whitelist_is_case_insensitive() {
    let (engine, lookup) = classifier(ScriptedLookup::new());

    let verdict = engine.classify("SWEAR Swear sWeAr").await.expect("classify");
    assert_eq!(verdict, Classification::Clean { score: 0.0 });
    assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn whitelisted_token_cannot_trigger_a_flag() {
    // Even with a perfect match scripted for the whitelisted token, it is
    // stripped before chunking and never looked up.
    let (engine, _) = classifier(
        ScriptedLookup::new()
            .with_match("swear", 1.0, "swear")
            .with_match("ok", 0.10, "x")
            .with_match("fine", 0.20, "y")
            .with_match("ok fine", 0.15, "z"),
    );

    let verdict = engine.classify("ok swear fine").await.expect("classify");
    assert_eq!(verdict, Classification::Clean { score: 0.20 });
}

#[tokio::test]
async fn failing_lookup_fails_the_whole_classification() {
    let (engine, _) = classifier(
        ScriptedLookup::new()
            .with_match("good", 0.99, "good")
            .failing_on("faulty"),
    );

    let err = engine
        .classify("good faulty")
        .await
        .expect_err("batch must fail fast");
    assert!(matches!(err, ClassifyError::Lookup(_)));
}

#[tokio::test]
async fn equal_scores_prefer_earlier_chunk() {
    let (engine, _) = classifier(
        ScriptedLookup::new()
            .with_match("alpha", 0.99, "first match")
            .with_match("beta", 0.99, "second match")
            .with_match("alpha beta", 0.10, "window"),
    );

    let verdict = engine.classify("alpha beta").await.expect("classify");
    assert_eq!(
        verdict,
        Classification::Profane {
            score: 0.99,
            flagged_for: "first match".into()
        }
    );
}

#[tokio::test]
async fn repeated_classification_is_deterministic() {
    let (engine, _) = classifier(
        ScriptedLookup::new()
            .with_match("some", 0.30, "a")
            .with_match("words", 0.96, "flagged words")
            .with_match("some words", 0.50, "b"),
    );

    let first = engine.classify("some words").await.expect("classify");
    for _ in 0..5 {
        let again = engine.classify("some words").await.expect("classify");
        assert_eq!(first, again);
    }
}

#[tokio::test]
async fn invalid_config_is_rejected_at_construction() {
    let cfg = ClassifierConfig {
        word_threshold: -0.1,
        ..ClassifierConfig::default()
    };
    let err = Classifier::new(Arc::new(ScriptedLookup::new()), Whitelist::default(), cfg)
        .err()
        .expect("invalid config");
    assert!(matches!(err, ClassifyError::InvalidConfig(_)));
}

#[tokio::test]
async fn empty_whitelist_keeps_all_tokens() {
    let (engine, lookup) = classifier_with_whitelist(
        ScriptedLookup::new().with_match("swear", 0.97, "swear"),
        Whitelist::default(),
    );

    let verdict = engine.classify("swear").await.expect("classify");
    assert!(verdict.is_profanity());
    assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);
}
