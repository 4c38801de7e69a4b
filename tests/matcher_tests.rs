//! Tests for preference-list matching.

use anyhow::{Result, ensure};
use locale_tree::matcher::match_locale;
use rstest::rstest;

#[rstest]
#[case(&["fr", "en-US", "en"], &["enUS", "zhCN"], None)]
#[case(&["fr", "en-US", "en"], &["en-US", "zh-CN"], Some("en-US"))]
#[case(&["fr", "en-US", "en"], &["enUS", "fr"], Some("fr"))]
#[case(&["en-GB"], &["en", "en-GB"], Some("en-GB"))]
#[case(&["en-GB"], &["en-US", "en"], Some("en"))]
#[case(&["pt-BR", "es"], &["es", "pt"], Some("pt"))]
#[case(&[], &["en"], None)]
#[case(&["en"], &[], None)]
fn match_locale_is_first_match_wins(
    #[case] preferences: &[&str],
    #[case] available: &[&str],
    #[case] expected: Option<&str>,
) -> Result<()> {
    let matched = match_locale(preferences, available.iter().copied());
    ensure!(
        matched == expected,
        "expected {preferences:?} against {available:?} to give {expected:?}, got {matched:?}"
    );
    Ok(())
}
