// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

#[cfg(test)]
mod config_tests {
    //! # 配置加载测试
    //!
    //! 在临时目录中写入 TOML 文件，验证 `Config::from_toml` 的解析、回退与报错，
    //! 以及由配置构造的 `Recorder` 能驱动一条完整的处理链。

    use std::io::Write;

    use tempfile::{tempdir, NamedTempFile};

    use webbuilder::{combinator::*, Config, Culture, Exception, Recorder, ResponseState};

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
            log_config = "config/custom.yaml"
            server_name = "unit-test"
            culture = "fr-FR"
            sample_path = "/items/3"
            sample_body = '{"id": 3}'
            sample_query = '{"page": 2}'
            "#,
        );

        let config = Config::from_toml(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.log_config(), "config/custom.yaml");
        assert_eq!(config.server_name(), "unit-test");
        assert_eq!(config.culture(), Some(Culture::new("fr-FR").unwrap()));
        assert_eq!(config.sample_path(), "/items/3");
        assert_eq!(config.sample_body(), Some(r#"{"id": 3}"#));
        assert_eq!(config.sample_query(), Some(r#"{"page": 2}"#));
    }

    #[test]
    fn test_malformed_toml_falls_back_to_defaults() {
        let file = write_config("server_name = [unterminated");

        let config = Config::from_toml(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.server_name(), Config::new().server_name());
        assert_eq!(config.sample_path(), "/");
    }

    #[test]
    fn test_invalid_culture_is_ignored() {
        let file = write_config(r#"culture = "not a culture!""#);

        let config = Config::from_toml(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.culture(), None);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let result = Config::from_toml(path.to_str().unwrap());

        assert_eq!(result.unwrap_err(), Exception::ConfigNotFound);
    }

    #[test]
    fn test_recorder_from_config_drives_pipeline() {
        let file = write_config(
            r#"
            sample_method = "post"
            sample_path = "/items/3"
            sample_body = '{"id": 3}'
            "#,
        );
        let config = Config::from_toml(file.path().to_str().unwrap()).unwrap();
        let recorder = Recorder::from_config(&config).unwrap();

        let app = fish(
            post::<Recorder>,
            fish(
                |b: &Recorder| {
                    routef(
                        "/items/%i",
                        |id: i32, b: &Recorder| set_http_header("X-Item", &id.to_string(), b),
                        b,
                    )
                },
                |b: &Recorder| bind_json(|body: serde_json::Value, b: &Recorder| json(&body, b), b),
            ),
        );
        let handler = app(&recorder);

        let mut state = ResponseState::new().with_server_name(config.server_name());
        assert!(recorder.replay(&handler, &mut state).unwrap());

        assert_eq!(state.header("X-Item"), Some("3"));
        assert_eq!(state.content().map(|c| c.to_vec()), Some(br#"{"id":3}"#.to_vec()));
        let rendered = String::from_utf8(state.as_bytes()).unwrap();
        assert!(rendered.contains("Server: shaneyale-webbuilder\r\n"));
    }
}
