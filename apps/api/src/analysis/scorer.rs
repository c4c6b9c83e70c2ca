//! Scorer — match percentage and ATS-compatibility score.
//!
//! The ATS score is the match score plus a bounded random jitter that models
//! imperfect ATS parsing. The jitter comes from a `JitterSource` carried in
//! `AppState` as `Arc<dyn JitterSource>`, so tests can pin it.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::analysis::errors::AnalysisError;

/// Jitter is drawn from `[-MAX_JITTER, +MAX_JITTER]`.
pub const MAX_JITTER: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub match_score: u32,
    pub ats_score: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Jitter sources
// ────────────────────────────────────────────────────────────────────────────

/// Source of the ATS jitter term. Implement this to swap randomness without
/// touching the scorer or its callers.
pub trait JitterSource: Send + Sync {
    /// Returns a value in `[-MAX_JITTER, +MAX_JITTER]`.
    fn jitter(&self) -> f64;
}

/// Uniform jitter from the thread-local RNG. Production default.
pub struct UniformJitter;

impl JitterSource for UniformJitter {
    fn jitter(&self) -> f64 {
        rand::thread_rng().gen_range(-MAX_JITTER..=MAX_JITTER)
    }
}

/// Uniform jitter from a seeded RNG, for reproducible runs.
pub struct SeededJitter {
    rng: Mutex<StdRng>,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl JitterSource for SeededJitter {
    fn jitter(&self) -> f64 {
        // A poisoned lock still holds a usable RNG.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(-MAX_JITTER..=MAX_JITTER)
    }
}

/// Always returns the same jitter.
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn jitter(&self) -> f64 {
        self.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// `round(100 * matched / vocabulary_len)`.
///
/// An empty vocabulary is a misconfigured job, not a 0% match, and fails.
pub fn compute_match_score(matched: usize, vocabulary_len: usize) -> Result<u32, AnalysisError> {
    if vocabulary_len == 0 {
        return Err(AnalysisError::InvalidInput(
            "job has no skills to score against".to_string(),
        ));
    }
    if matched > vocabulary_len {
        return Err(AnalysisError::Computation(format!(
            "matched skill count {matched} exceeds vocabulary size {vocabulary_len}"
        )));
    }
    Ok((100.0 * matched as f64 / vocabulary_len as f64).round() as u32)
}

/// `clamp(round(match_score + jitter), 0, 100)`. Jitter outside the allowed
/// band is clamped to it first.
pub fn compute_ats_score(match_score: u32, jitter: f64) -> Result<u32, AnalysisError> {
    if !jitter.is_finite() {
        return Err(AnalysisError::Computation(format!(
            "jitter source produced a non-finite value: {jitter}"
        )));
    }
    let jitter = jitter.clamp(-MAX_JITTER, MAX_JITTER);
    Ok((match_score as f64 + jitter).round().clamp(0.0, 100.0) as u32)
}

pub fn score(
    matched: &[String],
    vocabulary: &[String],
    jitter: &dyn JitterSource,
) -> Result<Scores, AnalysisError> {
    let match_score = compute_match_score(matched.len(), vocabulary.len())?;
    let ats_score = compute_ats_score(match_score, jitter.jitter())?;
    Ok(Scores {
        match_score,
        ats_score,
    })
}
