//! Tests for TOML options files.

use std::io::Write;

use super::options::{OptionsFile, default_options_template};
use super::{ContainerDetails, OptionsError, keys, parse_logger_config};

mod parsing {
    use super::*;

    #[test]
    fn scalars_become_strings() {
        let file = OptionsFile::parse(
            r#"
            token = "123:abc"
            chat-id = "-100"
            retries = 3
            batch-enabled = false
            ratio = 1.5
        "#,
        )
        .unwrap();

        let options = file.into_options();
        assert_eq!(options["token"], "123:abc");
        assert_eq!(options["chat-id"], "-100");
        assert_eq!(options["retries"], "3");
        assert_eq!(options["batch-enabled"], "false");
        assert_eq!(options["ratio"], "1.5");
    }

    #[test]
    fn empty_file() {
        let file = OptionsFile::parse("").unwrap();

        assert!(file.options.is_empty());
    }

    #[test]
    fn rejects_tables() {
        let err = OptionsFile::parse("[section]\nkey = 1").unwrap_err();

        assert!(matches!(
            err,
            OptionsError::UnsupportedValue { ref key, kind: "table" } if key == "section"
        ));
    }

    #[test]
    fn rejects_arrays() {
        let err = OptionsFile::parse("labels = [\"a\", \"b\"]").unwrap_err();

        assert!(matches!(
            err,
            OptionsError::UnsupportedValue { kind: "array", .. }
        ));
    }

    #[test]
    fn rejects_invalid_toml() {
        let err = OptionsFile::parse("token = ").unwrap_err();

        assert!(matches!(err, OptionsError::TomlParse(_)));
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "token = \"abc\"").unwrap();

        let options = OptionsFile::load(file.path()).unwrap();

        assert_eq!(options.options["token"], "abc");
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = OptionsFile::load(&dir.path().join("absent.toml")).unwrap_err();

        assert!(matches!(err, OptionsError::FileRead { .. }));
    }
}

mod template {
    use super::*;

    #[test]
    fn template_is_valid_options_file() {
        let file = OptionsFile::parse(&default_options_template()).unwrap();

        assert_eq!(file.options.len(), 2);
        assert_eq!(file.options[keys::TOKEN], "");
        assert_eq!(file.options[keys::CHAT_ID], "");
    }

    #[test]
    fn template_mentions_every_key() {
        let template = default_options_template();

        for key in keys::ALL {
            assert!(template.contains(key), "missing key: {key}");
        }
    }

    #[test]
    fn uncommented_template_decodes_to_defaults() {
        let uncommented: String = default_options_template()
            .lines()
            .map(|line| line.strip_prefix("# ").unwrap_or(line))
            .filter(|line| line.contains(" = "))
            .filter(|line| !line.starts_with("filter-regex"))
            .filter(|line| !line.starts_with("labels") && !line.starts_with("env"))
            .collect::<Vec<_>>()
            .join("\n");

        let file = OptionsFile::parse(&uncommented).unwrap();
        let from_template =
            parse_logger_config(&ContainerDetails::from_options(file.into_options())).unwrap();
        let from_nothing = parse_logger_config(&ContainerDetails::default()).unwrap();

        assert_eq!(from_template, from_nothing);
    }
}
