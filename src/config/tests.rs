use super::*;
use serial_test::serial;
use std::env;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_softlep_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("SOFTLEP_JETS");
        env::remove_var("SOFTLEP_PRIMARY_VERTEX");
        env::remove_var("SOFTLEP_LEPTONS");
        env::remove_var("SOFTLEP_OUTPUT");
        env::remove_var("SOFTLEP_TAGGER_SETTINGS");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.jets, "jets");
    assert_eq!(config.primary_vertex, "primaryVertex");
    assert_eq!(config.leptons, "leptons");
    assert_eq!(config.output, "softLeptonTags");
    assert!(config.tagger_settings.is_null());
    assert!(!config.vertex_disabled());
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_softlep_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.jets, DEFAULT_JETS_LABEL);
    assert_eq!(config.output, DEFAULT_OUTPUT_LABEL);
}

#[test]
#[serial]
fn test_from_env_custom_labels() {
    clear_softlep_env();

    with_env_vars(
        &[
            ("SOFTLEP_JETS", "iterativeCone5JetTracks"),
            ("SOFTLEP_PRIMARY_VERTEX", "offlinePrimaryVertices"),
            ("SOFTLEP_LEPTONS", "globalMuons"),
            ("SOFTLEP_OUTPUT", "softMuonTags"),
        ],
        || {
            let config = Config::from_env().expect("should parse");

            assert_eq!(config.jets, "iterativeCone5JetTracks");
            assert_eq!(config.primary_vertex, "offlinePrimaryVertices");
            assert_eq!(config.leptons, "globalMuons");
            assert_eq!(config.output, "softMuonTags");
        },
    );
}

#[test]
#[serial]
fn test_from_env_disabled_vertex() {
    clear_softlep_env();

    with_env_vars(&[("SOFTLEP_PRIMARY_VERTEX", "none")], || {
        let config = Config::from_env().expect("should parse");
        assert!(config.vertex_disabled());
    });
}

#[test]
#[serial]
fn test_from_env_tagger_settings_json() {
    clear_softlep_env();

    with_env_vars(
        &[(
            "SOFTLEP_TAGGER_SETTINGS",
            r#"{"quality":"loose","minPt":2.0}"#,
        )],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.tagger_settings["quality"], "loose");
            assert_eq!(config.tagger_settings["minPt"], 2.0);
        },
    );
}

#[test]
#[serial]
fn test_from_env_invalid_tagger_settings() {
    clear_softlep_env();

    with_env_vars(&[("SOFTLEP_TAGGER_SETTINGS", "not json")], || {
        let result = Config::from_env();
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTaggerSettings { .. }));
        assert!(err.to_string().contains("not json"));
    });
}

#[test]
fn test_validate_default_config() {
    let config = Config::default();
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_empty_label() {
    let config = Config {
        leptons: String::new(),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::EmptyLabel { field: "leptons" }));
}

#[test]
fn test_validate_output_collides_with_input() {
    let config = Config {
        jets: "shared".to_string(),
        output: "shared".to_string(),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::OutputLabelCollision { .. }));
    assert!(err.to_string().contains("shared"));
}

#[test]
fn test_validate_output_may_reuse_disabled_vertex_label() {
    // "none" disables vertex input, so an output label of "none" is odd but
    // cannot overwrite an input product
    let config = Config {
        primary_vertex: "none".to_string(),
        output: "none".to_string(),
        ..Default::default()
    };

    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_output_collides_with_vertex_label() {
    let config = Config {
        primary_vertex: "vertices".to_string(),
        output: "vertices".to_string(),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::OutputLabelCollision { .. }));
}
