#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command, OutputFormat, TierArg};
    use clap::Parser;
    use std::path::PathBuf;
    use tierpath_config::Tier;

    #[test]
    fn test_tier_enum_values() {
        use clap::ValueEnum;

        let tiers: Vec<_> = TierArg::value_variants()
            .iter()
            .map(|v| v.to_possible_value().unwrap().get_name().to_string())
            .collect();
        assert_eq!(tiers, vec!["development", "testing", "staging", "production"]);
    }

    #[test]
    fn test_tier_arg_converts_to_tier() {
        assert_eq!(Tier::from(TierArg::Staging), Tier::Staging);
        assert_eq!(Tier::from(TierArg::Production), Tier::Production);
    }

    #[test]
    fn test_resolve_defaults() {
        let cli = Cli::try_parse_from(["tierpath", "resolve"]).unwrap();
        match cli.command {
            Command::Resolve(args) => {
                assert_eq!(args.tier, None);
                assert_eq!(args.format, OutputFormat::Text);
                assert!(!args.dev_server);
                assert!(!args.serve_static);
                assert!(!args.settings);
            }
            _ => panic!("Expected resolve command"),
        }
    }

    #[test]
    fn test_resolve_all_options() {
        let cli = Cli::try_parse_from([
            "tierpath",
            "resolve",
            "--config",
            "props.json",
            "--tier",
            "staging",
            "--dev-server",
            "--serve-static",
            "--format",
            "json",
            "--settings",
        ])
        .unwrap();

        match cli.command {
            Command::Resolve(args) => {
                assert_eq!(args.config, Some(PathBuf::from("props.json")));
                assert_eq!(args.tier, Some(TierArg::Staging));
                assert!(args.dev_server);
                assert!(args.serve_static);
                assert_eq!(args.format, OutputFormat::Json);
                assert!(args.settings);
            }
            _ => panic!("Expected resolve command"),
        }
    }

    #[test]
    fn test_unknown_tier_rejected() {
        let result = Cli::try_parse_from(["tierpath", "resolve", "--tier", "qa"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["tierpath", "-v", "-q", "check"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tierpath", "tiers", "--no-color", "--verbose"]).unwrap();
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Tiers(_)));
    }

    #[test]
    fn test_check_strict() {
        let cli = Cli::try_parse_from(["tierpath", "check", "--strict"]).unwrap();
        match cli.command {
            Command::Check(args) => assert!(args.strict),
            _ => panic!("Expected check command"),
        }
    }
}
