use std::collections::HashMap;
use std::time::Duration;

use taxdoc_analyzer::presentation::config::{ConfigError, Environment, Settings};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn given_default_settings_when_created_then_match_service_defaults() {
    let settings = Settings::default();

    assert_eq!(settings.server.port, 8000);
    assert_eq!(settings.upload.directory, "uploads");
    assert_eq!(settings.upload.max_file_size_mb, 10);
    assert_eq!(settings.upload.allowed_extensions.len(), 6);
    assert_eq!(settings.document_intelligence.model_id, "prebuilt-tax.us.1040");
    assert_eq!(settings.document_intelligence.api_version, "2024-11-30");
    assert_eq!(settings.openai.model, "gpt-4");
    assert_eq!(settings.openai.max_tokens, 500);
}

#[test]
fn given_default_settings_when_building_poll_policy_then_thirty_polls_two_seconds_apart() {
    let policy = Settings::default().document_intelligence.poll_policy();

    assert_eq!(policy.max_attempts, 30);
    assert_eq!(policy.interval, Duration::from_secs(2));
}

#[test]
fn given_no_credentials_when_validating_then_reports_first_missing() {
    let result = Settings::default().validate_credentials();

    assert!(matches!(
        result,
        Err(ConfigError::MissingCredential("document_intelligence.endpoint"))
    ));
}

#[test]
fn given_legacy_variables_when_applied_then_fill_empty_credentials() {
    let mut settings = Settings::default();

    settings.apply_legacy_credentials(lookup(&[
        ("AZ_ENDPOINT", "https://example.cognitiveservices.azure.com"),
        ("AZ_KEY", "az-key"),
        ("OPENAI_API_KEY", "sk-test"),
    ]));

    assert_eq!(
        settings.document_intelligence.endpoint,
        "https://example.cognitiveservices.azure.com"
    );
    assert_eq!(settings.document_intelligence.api_key, "az-key");
    assert_eq!(settings.openai.api_key, "sk-test");
    assert!(settings.validate_credentials().is_ok());
}

#[test]
fn given_configured_credential_when_legacy_variable_set_then_configured_value_wins() {
    let mut settings = Settings::default();
    settings.openai.api_key = "sk-configured".to_string();

    settings.apply_legacy_credentials(lookup(&[("OPENAI_API_KEY", "sk-legacy")]));

    assert_eq!(settings.openai.api_key, "sk-configured");
}

#[test]
fn given_blank_openai_key_when_validating_then_reports_openai_key() {
    let mut settings = Settings::default();
    settings.apply_legacy_credentials(lookup(&[
        ("AZ_ENDPOINT", "https://example"),
        ("AZ_KEY", "k"),
        ("OPENAI_API_KEY", "   "),
    ]));

    assert!(matches!(
        settings.validate_credentials(),
        Err(ConfigError::MissingCredential("openai.api_key"))
    ));
}

#[test]
fn given_environment_names_when_parsing_then_accepts_known_and_rejects_unknown() {
    assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Prod);
    assert_eq!("production".parse::<Environment>().unwrap(), Environment::Prod);
    assert_eq!(" test ".parse::<Environment>().unwrap(), Environment::Test);
    assert_eq!(Environment::default().as_str(), "local");
    assert!(matches!(
        "staging".parse::<Environment>(),
        Err(ConfigError::InvalidEnvironment(_))
    ));
}

#[test]
fn given_scaffold_values_when_parsing_then_only_true_or_one_enable_it() {
    use taxdoc_analyzer::presentation::config::ScaffoldConfig;

    assert!(ScaffoldConfig::from_value(Some("TRUE")).enabled);
    assert!(ScaffoldConfig::from_value(Some("1")).enabled);
    assert!(!ScaffoldConfig::from_value(Some("yes")).enabled);
    assert!(!ScaffoldConfig::from_value(None).enabled);
}
