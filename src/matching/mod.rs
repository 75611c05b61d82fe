//! Heuristics for catching likely mistakes in submitted data.

pub mod typo_guard;

pub use typo_guard::{levenshtein, TypoCheck, TypoGuard, DEFAULT_PROVIDERS};
