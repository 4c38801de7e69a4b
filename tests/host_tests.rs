//! Tests for host locale discovery and its effect on store construction.

use anyhow::{Result, ensure};
use locale_tree::host::{
    LOCALE_TREE_LOCALE_ENV, SystemEnv, host_preferences, normalize_locale_tag,
};
use locale_tree::{LocaleStore, StoreOptions};
use rstest::rstest;
use test_support::locale_stubs::{StubEnv, StubSystemLocale};
use test_support::{MAIN, ScopedEnvVar, sample_locales};

#[rstest]
#[case("en_US.UTF-8", Some("en-US"))]
#[case("es_ES", Some("es-ES"))]
#[case("pt_BR@latin", Some("pt-BR"))]
#[case("de_DE.UTF-8@euro", Some("de-DE"))]
#[case(".UTF-8", None)]
#[case("  en-GB  ", Some("en-GB"))]
#[case("C", None)]
#[case("", None)]
fn normalize_locale_tag_handles_common_formats(
    #[case] raw: &str,
    #[case] expected: Option<&str>,
) -> Result<()> {
    let normalized = normalize_locale_tag(raw);
    ensure!(
        normalized.as_deref() == expected,
        "expected {:?} to normalize to {:?}, got {:?}",
        raw,
        expected,
        normalized
    );
    Ok(())
}

#[rstest]
fn environment_override_precedes_system_locales() -> Result<()> {
    let env = StubEnv::with_locale("fr_FR.UTF-8");
    let system = StubSystemLocale::with_locales(["en_US", "C", "fr-FR", "de_DE"]);
    let preferences = host_preferences(&env, &system);
    ensure!(
        preferences == vec!["fr-FR", "en-US", "de-DE"],
        "unexpected preferences {preferences:?}"
    );
    Ok(())
}

#[rstest]
fn host_preferences_select_initial_locale() -> Result<()> {
    let env = StubEnv::default();
    let system = StubSystemLocale::with_locales(["fr_BE.UTF-8", "en_US"]);
    let store =
        LocaleStore::with_host(MAIN, sample_locales(), StoreOptions::default(), &env, &system)?;
    ensure!(store.current() == "fr", "expected 'fr', got '{}'", store.current());
    Ok(())
}

#[rstest]
fn explicit_sources_ignore_host() -> Result<()> {
    let env = StubEnv::with_locale("fr-FR");
    let system = StubSystemLocale::with_locales(["fr_FR"]);
    let options = StoreOptions::default().with_sources(["en-AU"]);
    let store = LocaleStore::with_host(MAIN, sample_locales(), options, &env, &system)?;
    ensure!(store.current() == MAIN, "explicit sources were ignored");
    Ok(())
}

#[rstest]
fn process_environment_override_is_read() -> Result<()> {
    let _guard = ScopedEnvVar::set(LOCALE_TREE_LOCALE_ENV, "fr_FR.UTF-8");
    let system = StubSystemLocale::default();
    let store = LocaleStore::with_host(
        MAIN,
        sample_locales(),
        StoreOptions::default(),
        &SystemEnv,
        &system,
    )?;
    ensure!(store.current() == "fr", "expected 'fr', got '{}'", store.current());
    Ok(())
}

#[rstest]
fn system_defaults_select_a_known_locale() -> Result<()> {
    let _guard = ScopedEnvVar::unset(LOCALE_TREE_LOCALE_ENV);
    let store = LocaleStore::new(MAIN, sample_locales(), StoreOptions::default())?;
    ensure!(
        store.contains(store.current()),
        "initial locale '{}' is not in the collection",
        store.current()
    );
    Ok(())
}
