//! Email provider typo detection.
//!
//! Compares the domain of an address against a list of well-known mail
//! providers and suggests a correction when the domain is one or two edits
//! away from one of them (`gamil.com` -> `gmail.com`).

use crate::domain::EmailAddress;

/// Providers checked when no list is configured, in tie-break order.
pub const DEFAULT_PROVIDERS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "icloud.com",
    "aol.com",
    "protonmail.com",
    "live.com",
    "msn.com",
    "ymail.com",
    "mail.com",
];

/// Largest edit distance still treated as a typo.
const MAX_TYPO_DISTANCE: usize = 2;

/// Result of a typo check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypoCheck {
    /// Whether the domain looks like a misspelled provider
    pub is_typo: bool,

    /// Corrected address (local part unchanged) when `is_typo` is set
    pub suggestion: Option<String>,
}

impl TypoCheck {
    fn clean() -> Self {
        Self::default()
    }

    fn suggest(suggestion: String) -> Self {
        Self {
            is_typo: true,
            suggestion: Some(suggestion),
        }
    }
}

/// Typo guard over a fixed, ordered provider list.
#[derive(Debug, Clone)]
pub struct TypoGuard {
    providers: Vec<String>,
}

impl Default for TypoGuard {
    fn default() -> Self {
        Self::new(DEFAULT_PROVIDERS.iter().map(|p| p.to_string()))
    }
}

impl TypoGuard {
    /// Create a guard from an ordered provider list.
    ///
    /// Providers are lower-cased; empty entries are dropped. Order matters:
    /// when two providers are equally close, the earlier one is suggested.
    pub fn new<I, S>(providers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let providers = providers
            .into_iter()
            .map(|p| p.into().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        Self { providers }
    }

    /// The configured providers, in tie-break order.
    pub fn providers(&self) -> &[String] {
        &self.providers
    }

    /// Check an (already lower-cased) address for a misspelled provider domain.
    ///
    /// Addresses without an `@` are never reported as typos.
    pub fn check(&self, email: &str) -> TypoCheck {
        match email.split_once('@') {
            Some((local, domain)) => self.check_parts(local, domain),
            None => TypoCheck::clean(),
        }
    }

    /// Check an already validated address.
    pub fn check_address(&self, email: &EmailAddress) -> TypoCheck {
        self.check_parts(email.local_part(), email.domain())
    }

    fn check_parts(&self, local: &str, domain: &str) -> TypoCheck {
        if domain.is_empty() || self.providers.iter().any(|p| p == domain) {
            return TypoCheck::clean();
        }

        let mut best: Option<(usize, &str)> = None;
        for provider in &self.providers {
            let distance = levenshtein(domain, provider);
            // Strict comparison keeps the first provider on ties
            if best.map_or(true, |(d, _)| distance < d) {
                best = Some((distance, provider));
            }
        }

        match best {
            Some((distance, provider)) if (1..=MAX_TYPO_DISTANCE).contains(&distance) => {
                TypoCheck::suggest(format!("{}@{}", local, provider))
            }
            _ => TypoCheck::clean(),
        }
    }
}

/// Levenshtein edit distance with unit costs, computed over chars.
///
/// Uses two rolling rows, so memory is linear in the shorter input.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let substitution = prev[j] + usize::from(lc != sc);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}
