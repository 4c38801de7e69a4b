//! Preference-list matching against the available locale identifiers.
//!
//! Matching is first-match-wins over the preference list: the earliest
//! candidate that hits anything decides the result, even when a later
//! candidate would match more precisely.

/// Return the primary subtag of `candidate`, the text before the first `-`.
///
/// Identifiers without a hyphen are their own primary subtag.
///
/// # Examples
///
/// ```rust
/// use locale_tree::matcher::primary_subtag;
///
/// assert_eq!(primary_subtag("en-US"), "en");
/// assert_eq!(primary_subtag("enUS"), "enUS");
/// ```
#[must_use]
pub fn primary_subtag(candidate: &str) -> &str {
    candidate
        .split_once('-')
        .map_or(candidate, |(primary, _)| primary)
}

/// Pick the available identifier matching the earliest preference.
///
/// Each candidate is compared first for exact equality with an available
/// identifier, then by its primary subtag against available identifiers taken
/// whole. Available identifiers are never split.
///
/// # Examples
///
/// ```rust
/// use locale_tree::matcher::match_locale;
///
/// let available = ["en", "zh-CN"];
/// assert_eq!(match_locale(["fr", "en-US"], available), Some("en"));
/// assert_eq!(match_locale(["fr"], available), None);
/// ```
#[must_use]
pub fn match_locale<'a, P, A>(preferences: P, available: A) -> Option<&'a str>
where
    P: IntoIterator,
    P::Item: AsRef<str>,
    A: IntoIterator<Item = &'a str>,
    A::IntoIter: Clone,
{
    let targets = available.into_iter();
    for preference in preferences {
        let candidate = preference.as_ref();
        if let Some(exact) = targets.clone().find(|target| *target == candidate) {
            return Some(exact);
        }
        let primary = primary_subtag(candidate);
        if let Some(by_subtag) = targets.clone().find(|target| *target == primary) {
            return Some(by_subtag);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("en-US", "en")]
    #[case("zh-Hant-TW", "zh")]
    #[case("fr", "fr")]
    #[case("-x", "")]
    fn primary_subtag_splits_on_first_hyphen(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(primary_subtag(input), expected);
    }

    #[rstest]
    fn exact_match_beats_subtag_for_same_candidate() {
        let available = ["en", "en-US"];
        assert_eq!(match_locale(["en-US"], available), Some("en-US"));
    }

    #[rstest]
    fn earlier_candidate_wins_over_more_precise_later_one() {
        let available = ["en", "fr-CA"];
        assert_eq!(match_locale(["en-GB", "fr-CA"], available), Some("en"));
    }

    #[rstest]
    fn available_side_is_not_split() {
        let available = ["en-US", "zh-CN"];
        assert_eq!(match_locale(["en"], available), None);
    }

    #[rstest]
    fn empty_preferences_match_nothing() {
        let none: [&str; 0] = [];
        assert_eq!(match_locale(none, ["en"]), None);
    }
}
