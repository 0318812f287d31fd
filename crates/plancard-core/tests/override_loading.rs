//! Integration tests for loading override files from disk

use plancard_core::{CoreError, ErrorSeverity, OverridesLoader, ResolvedPricing};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_json_overrides_and_resolve() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pricing.json");
    fs::write(
        &path,
        r#"{
            "plan1Price": "$39",
            "plan2Name": "Growth",
            "plan3CTAHref": "https://example.com/sales"
        }"#,
    )
    .unwrap();

    let (overrides, report) = OverridesLoader::new().load(&path).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.overridden, 3);

    let pricing = ResolvedPricing::resolve(&overrides).unwrap();
    assert_eq!(pricing.content.plan1_price, "$39");
    assert_eq!(pricing.content.plan2_name, "Growth");
    assert_eq!(pricing.content.plan3_cta_href, "https://example.com/sales");
    assert_eq!(pricing.content.plan1_name, "Starter");
}

#[test]
fn test_load_yaml_overrides() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pricing.yaml");
    fs::write(&path, "plan2Trial: \"30-day trial\"\nbillingAnnualBadge: \"-25%\"\n").unwrap();

    let (overrides, report) = OverridesLoader::new().load(&path).unwrap();
    assert!(report.is_clean());
    assert_eq!(overrides.plan2_trial.as_deref(), Some("30-day trial"));
    assert_eq!(overrides.billing_annual_badge.as_deref(), Some("-25%"));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = OverridesLoader::new()
        .parse(&dir.path().join("absent.json"))
        .unwrap_err();
    assert!(matches!(err, CoreError::FileNotFound { .. }));
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pricing.toml");
    fs::write(&path, "plan1Price = \"$39\"").unwrap();

    let err = OverridesLoader::new().parse(&path).unwrap_err();
    assert!(matches!(err, CoreError::UnsupportedFormat { .. }));
}

#[test]
fn test_malformed_json_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"plan1Price\": ").unwrap();

    let err = OverridesLoader::new().parse(&path).unwrap_err();
    assert!(matches!(err, CoreError::JsonParse { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_report_flags_bad_price_before_resolution() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pricing.json");
    fs::write(&path, r#"{"plan3Price": "On request"}"#).unwrap();

    let (overrides, report) = OverridesLoader::new().load(&path).unwrap();
    assert!(report.has_errors());
    assert!(ResolvedPricing::resolve(&overrides).is_err());
}

#[test]
fn test_check_missing_file_is_a_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let report = OverridesLoader::new().check(&path);

    assert!(report.has_errors());
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].key, path.display().to_string());
    assert_eq!(report.findings[0].message, "Override file not found");
}

#[test]
fn test_check_malformed_yaml_is_a_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pricing.yml");
    fs::write(&path, "plan1Price: [\"$29\"\n").unwrap();

    let report = OverridesLoader::new().check(&path);

    assert_eq!(report.counts(), (0, 1));
    assert_eq!(report.findings[0].severity, ErrorSeverity::Error);
    assert!(report.findings[0].suggestion.is_some());
}

#[test]
fn test_check_valid_file_keeps_inspection_findings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pricing.json");
    fs::write(&path, r#"{"plan2Nane": "Pro", "plan1Price": "$19"}"#).unwrap();

    let report = OverridesLoader::new().check(&path);

    assert_eq!(report.overridden, 1);
    assert_eq!(report.counts(), (1, 0));
}
