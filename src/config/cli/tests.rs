//! Tests for CLI argument parsing

use super::*;
use ecoscore_common::OutputFormat;
use std::path::PathBuf;

#[test]
fn test_parse_footprint_command() {
    let cli = parse_args([
        "ecoscore",
        "footprint",
        "--model",
        "claude3-sonnet",
        "--region",
        "eu-central-1",
        "--requests",
        "10000",
    ])
    .unwrap();

    match cli.command {
        Command::Footprint(args) => {
            assert_eq!(args.model, "claude3-sonnet");
            assert_eq!(args.region, "eu-central-1");
            assert_eq!(args.requests, 10_000);
            assert_eq!(args.avg_tokens, 1000);
            assert_eq!(args.pue, None);
            assert_eq!(args.format, OutputFormat::Text);
        }
        _ => panic!("Expected Footprint command"),
    }
}

#[test]
fn test_parse_footprint_overrides() {
    let cli = parse_args([
        "ecoscore", "footprint", "-m", "gpt4", "-r", "us-east-1", "--pue", "1.4", "--wue", "0.5",
        "--gpu", "nvidia-h100", "-f", "json",
    ])
    .unwrap();

    match cli.command {
        Command::Footprint(args) => {
            assert_eq!(args.pue, Some(1.4));
            assert_eq!(args.wue, Some(0.5));
            assert_eq!(args.gpu.as_deref(), Some("nvidia-h100"));
            assert_eq!(args.format, OutputFormat::Json);
        }
        _ => panic!("Expected Footprint command"),
    }
}

#[test]
fn test_parse_compare_comma_list() {
    let cli = parse_args([
        "ecoscore",
        "compare",
        "--models",
        "gpt4,claude3-haiku,mistral7b",
        "--region",
        "eu-west-1",
    ])
    .unwrap();

    match cli.command {
        Command::Compare(args) => {
            assert_eq!(args.models, vec!["gpt4", "claude3-haiku", "mistral7b"]);
            assert_eq!(args.requests, 1000);
        }
        _ => panic!("Expected Compare command"),
    }
}

#[test]
fn test_compare_requires_models() {
    assert!(parse_args(["ecoscore", "compare", "--region", "eu-west-1"]).is_err());
}

#[test]
fn test_parse_reference_tables() {
    let cli = parse_args(["ecoscore", "reference", "regions", "--format", "yaml"]).unwrap();
    match cli.command {
        Command::Reference(args) => {
            assert_eq!(args.table, ReferenceKind::Regions);
            assert_eq!(args.format, OutputFormat::Yaml);
        }
        _ => panic!("Expected Reference command"),
    }

    let cli = parse_args(["ecoscore", "reference"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Reference(ReferenceArgs { table: ReferenceKind::Models, .. })
    ));

    assert!(parse_args(["ecoscore", "reference", "tpus"]).is_err());
}

#[test]
fn test_parse_global_flags() {
    let cli = parse_args([
        "ecoscore",
        "report",
        "usage.yaml",
        "--config",
        "ecoscore.yaml",
        "-v",
    ])
    .unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("ecoscore.yaml")));
    assert!(cli.verbose);
    assert!(!cli.quiet);
    match cli.command {
        Command::Report(args) => assert_eq!(args.file, PathBuf::from("usage.yaml")),
        _ => panic!("Expected Report command"),
    }
}

#[test]
fn test_parse_validate_detailed() {
    let cli = parse_args(["ecoscore", "validate", "ecoscore.yaml", "--detailed"]).unwrap();
    match cli.command {
        Command::Validate(args) => {
            assert_eq!(args.file, PathBuf::from("ecoscore.yaml"));
            assert!(args.detailed);
        }
        _ => panic!("Expected Validate command"),
    }
}

#[test]
fn test_parse_scenario() {
    let cli = parse_args(["ecoscore", "-q", "scenario", "migration.yaml"]).unwrap();
    assert!(cli.quiet);
    assert!(matches!(cli.command, Command::Scenario(_)));
}

#[test]
fn test_invalid_format_rejected() {
    let result = parse_args(["ecoscore", "score", "-m", "gpt4", "-r", "eu-west-1", "-f", "xml"]);
    assert!(result.is_err());
}

#[test]
fn test_reference_kind_from_str() {
    assert_eq!("GPU".parse::<ReferenceKind>(), Ok(ReferenceKind::Gpus));
    assert_eq!("settings".parse::<ReferenceKind>(), Ok(ReferenceKind::Defaults));
    assert!("planets".parse::<ReferenceKind>().unwrap_err().contains("Valid tables"));
}
