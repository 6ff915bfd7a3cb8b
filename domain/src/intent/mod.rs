//! Heuristic intent detection.
//!
//! When the backend is unreachable or answers with something unusable, the
//! controller still has to decide whether a tool applies. The detector
//! re-derives the tool and its arguments from the raw user text using an
//! ordered list of keyword rules. It is deterministic and has no I/O.

pub mod detector;
pub mod rules;

pub use detector::{HeuristicMatch, IntentDetector, IntentRule};
pub use rules::Utterance;
