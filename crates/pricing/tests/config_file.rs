//! Loading pricing tiers from a config file

use std::io::Write;

use rust_decimal_macros::dec;
use tempfile::NamedTempFile;

use shopkeep_pricing::{Customer, DiscountPolicy, PricingConfig, PricingError};

fn write_config(json: &str) -> anyhow::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(json.as_bytes())?;
    Ok(file)
}

#[test]
fn test_policy_from_file() -> anyhow::Result<()> {
    let file = write_config(r#"{ "senior_age": 60, "senior_rate": "0.25" }"#)?;
    let policy = DiscountPolicy::from_config(PricingConfig::from_file(file.path())?)?;

    let customer = Customer::new("Jane", 62);
    assert_eq!(policy.discount(&customer).value(), dec!(0.25));

    let customer = Customer::new("Jack", 30);
    assert_eq!(policy.discount(&customer).value(), dec!(0.10));
    Ok(())
}

#[test]
fn test_empty_object_uses_defaults() -> anyhow::Result<()> {
    let file = write_config("{}")?;
    assert_eq!(PricingConfig::from_file(file.path())?, PricingConfig::default());
    Ok(())
}

#[test]
fn test_missing_file() {
    let result = PricingConfig::from_file(std::path::Path::new("/nonexistent/pricing.json"));
    assert!(matches!(result, Err(PricingError::Io(_))));
}

#[test]
fn test_malformed_file() -> anyhow::Result<()> {
    let file = write_config("{ not json")?;
    let result = PricingConfig::from_file(file.path());
    assert!(matches!(result, Err(PricingError::Parse(_))));
    Ok(())
}

#[test]
fn test_overlapping_tiers_in_file() -> anyhow::Result<()> {
    let file = write_config(r#"{ "senior_age": 18 }"#)?;
    let result = PricingConfig::from_file(file.path());
    assert!(matches!(result, Err(PricingError::ThresholdOrder { .. })));
    Ok(())
}
