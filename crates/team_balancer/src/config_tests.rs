use super::*;

#[test]
fn test_empty_config_uses_defaults() {
    let config = BalancerConfig::from_toml("").unwrap();
    assert_eq!(config, BalancerConfig::default());
    assert_eq!(config.jitter, DEFAULT_JITTER);
    assert!(config.seed.is_none());
}

#[test]
fn test_full_config() {
    let config = BalancerConfig::from_toml(
        r#"
jitter = 2.5
seed = 7
rating = "reject"
positions = "reject"
"#,
    )
    .unwrap();

    assert_eq!(config.jitter, 2.5);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.rating, RatingPolicy::Reject);
    assert_eq!(config.positions, PositionPolicy::Reject);
}

#[test]
fn test_negative_jitter_rejected() {
    let err = BalancerConfig::from_toml("jitter = -1.0").unwrap_err();
    assert!(matches!(err, BalanceError::InvalidConfig(_)));
}

#[test]
fn test_oversized_jitter_rejected() {
    for text in ["jitter = 1e308", "jitter = 100.5", "jitter = inf", "jitter = nan"] {
        let err = BalancerConfig::from_toml(text).unwrap_err();
        assert!(matches!(err, BalanceError::InvalidConfig(_)), "{}", text);
    }
    assert!(BalancerConfig::from_toml("jitter = 100.0").is_ok());
}

#[test]
fn test_unknown_policy_is_parse_error() {
    let err = BalancerConfig::from_toml(r#"rating = "ignore""#).unwrap_err();
    assert!(matches!(err, BalanceError::TomlParse(_)));
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("balancer.toml");

    let config = BalancerConfig {
        jitter: 0.0,
        seed: Some(99),
        ..Default::default()
    };
    config.save(&path).unwrap();

    let loaded = BalancerConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}
