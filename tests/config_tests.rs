//! Configuration loading from files.

mod support;

use rust_decimal_macros::dec;

use dealdesk::domain::Decision;
use dealdesk::error::{ConfigError, Error};
use dealdesk::infrastructure::config::settings::Config;
use support::config::{write_temp_config, VALID_CONFIG};

#[test]
fn full_config_loads() {
    let file = write_temp_config(VALID_CONFIG);
    let config = Config::load(&file.path).unwrap();

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.decision.seed, Some(7));
    let policy = config.decision.policy().unwrap();
    assert_eq!(policy.direct().probability(Decision::Pool), dec!(0.2));
    assert_eq!(policy.pool().probability(Decision::Postpone), dec!(0));
    assert_eq!(config.oracle.timeout_secs, 30);
}

#[test]
fn missing_file_is_read_error() {
    let err = Config::load("/definitely/not/here/config.toml").unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
    assert!(err.is_validation());
}

#[test]
fn distribution_summing_to_point_nine_is_rejected() {
    let file = write_temp_config(
        r#"
[decision.direct]
accept = 0.5
reject = 0.2
postpone = 0.1
pool = 0.1
"#,
    );

    let err = Config::load(&file.path).unwrap_err();
    assert!(
        matches!(
            &err,
            Error::Config(ConfigError::InvalidValue {
                field: "decision.direct",
                ..
            })
        ),
        "{err}"
    );
}

#[test]
fn negative_probability_is_rejected() {
    let file = write_temp_config(
        r#"
[decision.direct]
accept = 1.2
reject = -0.2
"#,
    );

    let err = Config::load(&file.path).unwrap_err();
    assert!(err.to_string().contains("reject"), "{err}");
}

#[test]
fn pool_section_with_postpone_is_rejected() {
    let file = write_temp_config(
        r#"
[decision.pool]
accept = 0.4
reject = 0.4
postpone = 0.2
"#,
    );

    assert!(matches!(
        Config::load(&file.path),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "decision.pool",
            ..
        }))
    ));
}

#[test]
fn oracle_defaults_apply_when_section_is_partial() {
    let file = write_temp_config(
        r#"
[oracle]
base_url = "http://localhost:8080/"
"#,
    );

    let config = Config::load(&file.path).unwrap();
    assert_eq!(config.oracle.model, "gpt-3.5-turbo-instruct");
    assert_eq!(config.oracle.max_tokens, 60);
    assert_eq!(config.oracle.base_url, "http://localhost:8080/");
}
