#[cfg(test)]
mod integration_tests {
    use crate::binding::{BindType, Value};
    use crate::config::{load_and_validate_config, RuntimeBuilder};
    use crate::converters::ConverterRegistry;
    use crate::errors::{ConfigError, ValidationError};

    /// Test that the hex demo document loads and chains through three participants
    #[test]
    fn test_hex_demo_yaml_runtime() {
        let registry = ConverterRegistry::with_builtins();
        let config = load_and_validate_config("configs/hex-demo.yaml", &registry).unwrap();

        assert_eq!(config.participants.len(), 3);
        assert_eq!(config.bindings.len(), 2);

        let runtime = RuntimeBuilder::from_config(&config, &registry).unwrap();
        runtime.set("mod_a", "data", "AA FF 10").unwrap();

        assert_eq!(
            runtime.get("mod_b", "data"),
            Some(Value::Bytes(vec![0xaa, 0xff, 0x10]))
        );
        assert_eq!(runtime.get("mod_c", "data"), Some(Value::from("aa ff 10")));
    }

    /// Test the two-way TOML document converts in both directions
    #[test]
    fn test_two_way_form_toml_runtime() {
        let registry = ConverterRegistry::with_builtins();
        let config = load_and_validate_config("configs/two-way-form.toml", &registry).unwrap();
        assert_eq!(config.bindings[0].bind_type, BindType::TwoWay);

        let runtime = RuntimeBuilder::from_config(&config, &registry).unwrap();

        runtime.set("age_field", "text", " 42 ").unwrap();
        assert_eq!(runtime.get("person", "age"), Some(Value::Int(42)));
        // The reverse binding writes the normalized text back into the field
        assert_eq!(runtime.get("age_field", "text"), Some(Value::from("42")));

        runtime.set("person", "age", 7i64).unwrap();
        assert_eq!(runtime.get("age_field", "text"), Some(Value::from("7")));
    }

    /// Test that every problem in an invalid document is reported
    #[test]
    fn test_invalid_document_reports_all_errors() {
        let err = load_and_validate_config(
            "configs/invalid-bindings.yaml",
            &ConverterRegistry::with_builtins(),
        )
        .unwrap_err();

        let errors = match err {
            ConfigError::Validation(errors) => errors,
            other => panic!("unexpected error: {other}"),
        };

        assert!(errors.contains(&ValidationError::DuplicateParticipantId {
            participant_id: "sensor".to_string()
        }));
        assert!(errors.contains(&ValidationError::UnknownParticipant {
            binding_index: 0,
            participant_id: "display".to_string()
        }));
        assert!(errors.contains(&ValidationError::UnknownProperty {
            binding_index: 1,
            participant_id: "sensor".to_string(),
            property: "missing".to_string()
        }));
        assert!(errors.contains(&ValidationError::UnknownConverter {
            binding_index: 1,
            converter: "celsius_to_fahrenheit".to_string()
        }));
        assert!(errors.contains(&ValidationError::BackConverterOnOneWay { binding_index: 1 }));
        assert_eq!(errors.len(), 5);
    }
}
