//! Tests for container details and extra attribute selection.

use std::collections::HashMap;

use super::{AttrsError, ContainerDetails};

fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn container(options: &[(&str, &str)]) -> ContainerDetails {
    ContainerDetails::from_options(map(options))
        .with_labels(map(&[
            ("com.example.service", "api"),
            ("com.example.team", "core"),
            ("maintainer", "ops@example.com"),
        ]))
        .with_env(vec![
            "APP_ENV=production".to_string(),
            "APP_REGION=eu-west-1".to_string(),
            "PATH=/usr/bin".to_string(),
            "MALFORMED".to_string(),
            "EMPTY=".to_string(),
        ])
}

mod json {
    use super::*;

    #[test]
    fn parses_daemon_info() {
        let json = r#"{
            "Config": {"token": "t", "chat-id": "c"},
            "ContainerID": "0123456789abcdef0123",
            "ContainerName": "/web",
            "ContainerEntrypoint": "/bin/sh",
            "ContainerArgs": ["-c", "run"],
            "ContainerImageID": "sha256:abc",
            "ContainerImageName": "nginx:latest",
            "ContainerCreated": "2024-01-01T00:00:00Z",
            "ContainerEnv": ["A=1"],
            "ContainerLabels": {"tier": "front"},
            "LogPath": "/var/log/web.log",
            "DaemonName": "docker"
        }"#;

        let details = ContainerDetails::from_json(json).unwrap();

        assert_eq!(details.option("token"), Some("t"));
        assert_eq!(details.container_id, "0123456789abcdef0123");
        assert_eq!(details.id(), "0123456789ab");
        assert_eq!(details.name(), "web");
        assert_eq!(details.container_args, vec!["-c", "run"]);
        assert_eq!(details.container_image_id, "sha256:abc");
        assert_eq!(details.container_image_name, "nginx:latest");
        assert_eq!(details.container_env, vec!["A=1"]);
        assert_eq!(
            details.container_labels.get("tier").map(String::as_str),
            Some("front")
        );
        assert_eq!(details.daemon_name, "docker");
    }

    #[test]
    fn null_collections_become_empty() {
        let json = r#"{
            "Config": null,
            "ContainerArgs": null,
            "ContainerEnv": null,
            "ContainerLabels": null
        }"#;

        let details = ContainerDetails::from_json(json).unwrap();

        assert!(details.config.is_empty());
        assert!(details.container_args.is_empty());
        assert!(details.container_env.is_empty());
        assert!(details.container_labels.is_empty());
    }

    #[test]
    fn missing_fields_default() {
        let details = ContainerDetails::from_json("{}").unwrap();

        assert_eq!(details, ContainerDetails::default());
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(ContainerDetails::from_json(r#"{"Config": ["token"]}"#).is_err());
    }
}

mod accessors {
    use super::*;

    #[test]
    fn short_id_of_short_container_id() {
        let details = ContainerDetails {
            container_id: "abc".to_string(),
            ..ContainerDetails::default()
        };

        assert_eq!(details.id(), "abc");
    }

    #[test]
    fn name_without_slash_unchanged() {
        let details = ContainerDetails {
            container_name: "web".to_string(),
            ..ContainerDetails::default()
        };

        assert_eq!(details.name(), "web");
    }

    #[test]
    fn empty_option_is_unset_for_non_empty_lookup() {
        let details = ContainerDetails::from_options(map(&[("url", "")]));

        assert_eq!(details.option("url"), Some(""));
        assert_eq!(details.non_empty_option("url"), None);
    }
}

mod extra_attributes {
    use super::*;

    #[test]
    fn nothing_configured_yields_empty_map() {
        let attrs = container(&[]).extra_attributes().unwrap();

        assert!(attrs.is_empty());
    }

    #[test]
    fn listed_labels() {
        let attrs = container(&[("labels", "com.example.service, maintainer,missing")])
            .extra_attributes()
            .unwrap();

        assert_eq!(
            attrs,
            map(&[
                ("com.example.service", "api"),
                ("maintainer", "ops@example.com"),
            ])
        );
    }

    #[test]
    fn labels_by_pattern() {
        let attrs = container(&[("labels-regex", r"^com\.example\.")])
            .extra_attributes()
            .unwrap();

        assert_eq!(
            attrs,
            map(&[
                ("com.example.service", "api"),
                ("com.example.team", "core"),
            ])
        );
    }

    #[test]
    fn listed_env() {
        let attrs = container(&[("env", "APP_ENV,EMPTY,MALFORMED")])
            .extra_attributes()
            .unwrap();

        assert_eq!(attrs, map(&[("APP_ENV", "production"), ("EMPTY", "")]));
    }

    #[test]
    fn env_by_pattern() {
        let attrs = container(&[("env-regex", "^APP_")])
            .extra_attributes()
            .unwrap();

        assert_eq!(
            attrs,
            map(&[("APP_ENV", "production"), ("APP_REGION", "eu-west-1")])
        );
    }

    #[test]
    fn sources_combine() {
        let attrs = container(&[("labels", "maintainer"), ("env-regex", "^PATH$")])
            .extra_attributes()
            .unwrap();

        assert_eq!(
            attrs,
            map(&[("maintainer", "ops@example.com"), ("PATH", "/usr/bin")])
        );
    }

    #[test]
    fn value_containing_equals_sign_kept_whole() {
        let details = ContainerDetails::default().with_env(vec!["OPTS=a=b".to_string()]);
        let details = ContainerDetails {
            config: map(&[("env", "OPTS")]),
            ..details
        };

        let attrs = details.extra_attributes().unwrap();

        assert_eq!(attrs, map(&[("OPTS", "a=b")]));
    }

    #[test]
    fn invalid_labels_regex() {
        let err = container(&[("labels-regex", r"(.*\(")])
            .extra_attributes()
            .unwrap_err();

        assert!(matches!(err, AttrsError::LabelsRegex { .. }));
    }

    #[test]
    fn invalid_env_regex() {
        let err = container(&[("env-regex", "[")])
            .extra_attributes()
            .unwrap_err();

        assert!(matches!(err, AttrsError::EnvRegex { .. }));
    }
}
