//! tests/config_tests.rs

#[cfg(test)]
mod tests {
    use crate::config::app_config::{parse_origins, AppConfig};
    use crate::config::subject_config::{subject_at, Component, NUM_SUBJECTS};

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.port, 8000);
        assert!(config.allows_any_origin());
        assert_eq!(config.max_upload_bytes, 50 * 1024 * 1024);
        assert_eq!(config.max_upload_label(), "50MB");
        assert_eq!(config.exam_session, "December 2025");
        assert_eq!(config.university, "University of Mumbai");
        assert!(config.workers >= 1);
    }

    #[test]
    fn test_small_upload_label() {
        let config = AppConfig {
            max_upload_bytes: 512,
            ..AppConfig::default()
        };
        assert_eq!(config.max_upload_label(), "512 bytes");
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins(" https://results.example.edu/ ,http://localhost:3000,, "),
            vec!["https://results.example.edu", "http://localhost:3000"]
        );
        assert!(parse_origins(" , ").is_empty());
    }

    #[test]
    fn test_config_from_env() {
        std::env::set_var("MU_PARSER_PORT", "9100");
        std::env::set_var("MU_PARSER_ALLOWED_ORIGINS", "https://a.example, https://b.example");
        std::env::set_var("MU_PARSER_MAX_UPLOAD_MB", "10");
        std::env::set_var("MU_PARSER_WORKERS", "not-a-number");

        let config = AppConfig::from_env();
        assert_eq!(config.port, 9100);
        assert_eq!(
            config.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert!(!config.allows_any_origin());
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.workers, AppConfig::default().workers);

        for key in [
            "MU_PARSER_PORT",
            "MU_PARSER_ALLOWED_ORIGINS",
            "MU_PARSER_MAX_UPLOAD_MB",
            "MU_PARSER_WORKERS",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_component_columns() {
        assert_eq!(Component::TermWork.max_values(), 8);
        assert_eq!(Component::Oral.max_values(), 3);
        assert_eq!(Component::External.max_values(), 6);
        assert_eq!(Component::Internal.max_values(), 7);

        assert_eq!(Component::Oral.position_for(12), Some(2));
        assert_eq!(Component::Oral.position_for(0), None);
        assert_eq!(Component::Internal.position_for(13), Some(6));

        // Todas las columnas apuntan a materias existentes
        for component in Component::ALL {
            assert!(component
                .columns()
                .iter()
                .all(|(subject, _)| *subject < NUM_SUBJECTS));
        }
        assert_eq!(subject_at(13).map(|s| s.0), Some("10424"));
        assert_eq!(subject_at(14), None);
    }
}
