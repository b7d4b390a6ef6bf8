#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::config::ReasoningEffort;
    use crate::i18n::TargetLanguage;
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_args_default_values() {
        let args = Args::try_parse_from(["prospect-brief"]).unwrap();

        assert!(args.company.is_none());
        assert!(args.config.is_none());
        assert!(args.output_path.is_none());
        assert!(args.max_parallels.is_none());
        assert!(!args.no_html);
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_short_options() {
        let args = Args::try_parse_from([
            "prospect-brief",
            "-n",
            "Acme Corp",
            "-o",
            "/tmp/briefs",
            "-c",
            "/tmp/brief.toml",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.company, Some("Acme Corp".to_string()));
        assert_eq!(args.output_path, Some(PathBuf::from("/tmp/briefs")));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/brief.toml")));
        assert!(args.verbose);
    }

    #[test]
    fn test_args_llm_options() {
        let args = Args::try_parse_from([
            "prospect-brief",
            "--company",
            "Acme Corp",
            "--search-api-key",
            "pplx-test",
            "--search-model",
            "sonar",
            "--synthesis-api-key",
            "sk-test",
            "--synthesis-model",
            "o4-mini",
            "--reasoning-effort",
            "high",
            "--max-parallels",
            "3",
            "--target-language",
            "fr",
            "--no-html",
        ])
        .unwrap();

        let config = args.into_config().unwrap();
        assert_eq!(config.company_name, Some("Acme Corp".to_string()));
        assert_eq!(config.search.api_key, "pplx-test");
        assert_eq!(config.search.model, "sonar");
        assert_eq!(config.search.max_parallels, 3);
        assert_eq!(config.synthesis.api_key, "sk-test");
        assert_eq!(config.synthesis.model, "o4-mini");
        assert_eq!(config.synthesis.reasoning_effort, ReasoningEffort::High);
        assert_eq!(config.target_language, TargetLanguage::French);
        assert!(!config.render_html);
    }

    #[test]
    fn test_invalid_reasoning_effort_is_rejected() {
        let args =
            Args::try_parse_from(["prospect-brief", "--reasoning-effort", "maximal"]).unwrap();
        assert!(args.into_config().is_err());
    }

    #[test]
    fn test_zero_max_parallels_is_rejected() {
        let args = Args::try_parse_from(["prospect-brief", "--max-parallels", "0"]).unwrap();
        assert!(args.into_config().is_err());
    }

    #[test]
    fn test_unknown_language_keeps_default() {
        let args =
            Args::try_parse_from(["prospect-brief", "--target-language", "klingon"]).unwrap();
        let config = args.into_config().unwrap();
        assert_eq!(config.target_language, TargetLanguage::English);
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("brief.toml");
        std::fs::write(
            &path,
            r#"
company_name = "From File Inc"
output_path = "/srv/briefs"

[search]
api_key = "pplx-file"
max_parallels = 2
"#,
        )
        .unwrap();

        let args = Args::try_parse_from([
            "prospect-brief",
            "--config",
            path.to_str().unwrap(),
            "--company",
            "Acme Corp",
        ])
        .unwrap();
        let config = args.into_config().unwrap();

        assert_eq!(config.company_name, Some("Acme Corp".to_string()));
        assert_eq!(config.output_path, PathBuf::from("/srv/briefs"));
        assert_eq!(config.search.api_key, "pplx-file");
        assert_eq!(config.search.max_parallels, 2);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args =
            Args::try_parse_from(["prospect-brief", "--config", "/nonexistent/brief.toml"])
                .unwrap();
        assert!(args.into_config().is_err());
    }
}
