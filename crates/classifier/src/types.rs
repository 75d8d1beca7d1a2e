use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Outcome of classifying one message.
///
/// A tagged union rather than a struct with an optional field: the matched
/// phrase exists exactly when the message is profane, and the type enforces
/// it. Serialization produces the wire shape the API promises —
/// `flaggedFor` is present only on the profane variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// At least one chunk matched a flagged phrase above its threshold.
    Profane {
        /// Score of the strongest flagged match.
        score: f32,
        /// The reference phrase that match was closest to.
        flagged_for: String,
    },
    /// No chunk crossed a threshold.
    Clean {
        /// The closest any chunk came to a flagged phrase; 0 when nothing
        /// was looked up.
        score: f32,
    },
}

impl Classification {
    pub fn is_profanity(&self) -> bool {
        matches!(self, Classification::Profane { .. })
    }

    pub fn score(&self) -> f32 {
        match self {
            Classification::Profane { score, .. } | Classification::Clean { score } => *score,
        }
    }
}

impl Serialize for Classification {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Classification::Profane { score, flagged_for } => {
                let mut state = serializer.serialize_struct("Classification", 3)?;
                state.serialize_field("isProfanity", &true)?;
                state.serialize_field("score", score)?;
                state.serialize_field("flaggedFor", flagged_for)?;
                state.end()
            }
            Classification::Clean { score } => {
                let mut state = serializer.serialize_struct("Classification", 2)?;
                state.serialize_field("isProfanity", &false)?;
                state.serialize_field("score", score)?;
                state.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profane_serializes_with_flagged_for() {
        let verdict = Classification::Profane {
            score: 0.5,
            flagged_for: "bad phrase".into(),
        };
        assert_eq!(
            serde_json::to_value(&verdict).unwrap(),
            json!({ "isProfanity": true, "score": 0.5, "flaggedFor": "bad phrase" })
        );
    }

    #[test]
    fn clean_serializes_without_flagged_for() {
        let verdict = Classification::Clean { score: 0.25 };
        assert_eq!(
            serde_json::to_value(&verdict).unwrap(),
            json!({ "isProfanity": false, "score": 0.25 })
        );
    }

    #[test]
    fn accessors_cover_both_variants() {
        let profane = Classification::Profane {
            score: 0.97,
            flagged_for: "x".into(),
        };
        assert!(profane.is_profanity());
        assert_eq!(profane.score(), 0.97);

        let clean = Classification::Clean { score: 0.0 };
        assert!(!clean.is_profanity());
        assert_eq!(clean.score(), 0.0);
    }
}
