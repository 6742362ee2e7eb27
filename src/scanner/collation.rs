use crate::config::Collation;
use anyhow::Result;
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use icu_locale_core::locale;
use std::cmp::Ordering;
use std::fmt;

/// Compares sibling names according to the configured [`Collation`].
pub enum NameCollator {
    /// ICU collator with Japanese tailoring.
    Japanese(CollatorBorrowed<'static>),
    /// Unicode codepoint order.
    Codepoint,
}

impl NameCollator {
    /// Creates a collator for the requested ordering.
    ///
    /// # Errors
    ///
    /// Returns an error if the collation data for the locale cannot be loaded.
    pub fn new(collation: Collation) -> Result<Self> {
        match collation {
            Collation::Japanese => {
                let collator = Collator::try_new(locale!("ja").into(), CollatorOptions::default())
                    .map_err(|e| anyhow::anyhow!("Failed to load Japanese collation data: {e}"))?;
                Ok(Self::Japanese(collator))
            }
            Collation::Codepoint => Ok(Self::Codepoint),
        }
    }

    /// Compares two names.
    #[must_use]
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        match self {
            Self::Japanese(collator) => collator.compare(left, right),
            Self::Codepoint => left.cmp(right),
        }
    }
}

impl fmt::Debug for NameCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Japanese(_) => f.write_str("NameCollator::Japanese"),
            Self::Codepoint => f.write_str("NameCollator::Codepoint"),
        }
    }
}
