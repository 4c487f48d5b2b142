//! Locale-aware string ordering for the text columns.
//!
//! Backed by the Unicode Collation Algorithm with the CLDR root tailoring: accents and case
//! only decide between strings that are otherwise equal, so "Éclair" sorts with the e's and
//! "milk" precedes "Milk". Fully equal collation keys fall back to a byte comparison.

use std::cmp::Ordering;

use feruca::Collator;

/// Reusable collator for sorting many rows; build one per sort rather than per comparison.
pub struct TextCollator {
    inner: Collator,
}

impl TextCollator {
    pub fn new() -> Self {
        Self {
            inner: Collator::default(),
        }
    }

    pub fn compare(&mut self, a: &str, b: &str) -> Ordering {
        self.inner.collate(a, b)
    }
}

impl Default for TextCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// One-off comparison; prefer [`TextCollator`] inside sort loops.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    TextCollator::new().compare(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case_at_primary_level() {
        assert_eq!(locale_compare("apples", "Bread"), Ordering::Less);
        assert_eq!(locale_compare("Bread", "apples"), Ordering::Greater);
        assert_eq!(locale_compare("bananas", "Bread"), Ordering::Less);
    }

    #[test]
    fn lowercase_precedes_uppercase_on_case_only_difference() {
        assert_eq!(locale_compare("milk", "Milk"), Ordering::Less);
        assert_eq!(locale_compare("Milk", "milk"), Ordering::Greater);
        assert_eq!(locale_compare("Milk", "Milk"), Ordering::Equal);
    }

    #[test]
    fn accented_letters_sort_with_their_base_letter() {
        assert_eq!(locale_compare("Éclair", "Fig"), Ordering::Less);
        assert_eq!(locale_compare("école", "zebra"), Ordering::Less);
        assert_eq!(locale_compare("Éclair", "Dates"), Ordering::Greater);
    }

    #[test]
    fn accent_only_breaks_ties_between_equal_base_letters() {
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_compare("résumé", "resumes"), Ordering::Less);
    }

    #[test]
    fn shorter_prefix_sorts_first() {
        assert_eq!(locale_compare("Sock", "socks"), Ordering::Less);
        assert_eq!(locale_compare("", "a"), Ordering::Less);
    }

    #[test]
    fn sorting_with_a_shared_collator_is_deterministic() {
        let mut collator = TextCollator::new();
        let mut words = vec!["sugar", "Eggs", "éclair", "eggs", "Apples", "bread", "EGGS", "fig"];
        words.sort_by(|a, b| collator.compare(a, b));
        assert_eq!(
            words,
            vec!["Apples", "bread", "éclair", "eggs", "Eggs", "EGGS", "fig", "sugar"]
        );
    }
}
