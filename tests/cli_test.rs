//! Tests for CLI parsing and error exit codes

use clap::Parser;

use patterns::application::ApplicationError;
use patterns::cli::args::{Cli, Commands, CompositeCommands, LayerArg};
use patterns::cli::CliError;
use patterns::creational::Pattern;
use patterns::domain::DomainError;
use patterns::exitcode;

#[test]
fn given_run_with_pattern_name_when_parsing_then_pattern_resolved() {
    let cli = Cli::try_parse_from(["patterns", "run", "abstract-factory"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Run {
            pattern: Pattern::AbstractFactory
        })
    ));
}

#[test]
fn given_unknown_pattern_when_parsing_then_rejected() {
    assert!(Cli::try_parse_from(["patterns", "run", "observer"]).is_err());
}

#[test]
fn given_price_with_node_when_parsing_then_options_captured() {
    let cli =
        Cli::try_parse_from(["patterns", "-dd", "composite", "price", "--node", "box2"]).unwrap();
    assert_eq!(cli.debug, 2);
    match cli.command {
        Some(Commands::Composite {
            command: CompositeCommands::Price { file, node },
        }) => {
            assert!(file.is_none());
            assert_eq!(node.as_deref(), Some("box2"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_notify_with_layers_when_parsing_then_layers_in_order() {
    let cli =
        Cli::try_parse_from(["patterns", "notify", "hi", "--via", "slack", "--via", "sms"]).unwrap();
    match cli.command {
        Some(Commands::Notify { message, via }) => {
            assert_eq!(message, "hi");
            assert_eq!(via, vec![LayerArg::Slack, LayerArg::Sms]);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_errors_when_mapping_exit_codes_then_sysexits() {
    let usage = CliError::Usage("bad".into());
    let missing = CliError::io(
        "read tree.toml",
        std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    );
    let spec: CliError = DomainError::InvalidSpec {
        label: "x".into(),
        reason: "y".into(),
    }
    .into();
    let config: CliError = ApplicationError::Config {
        message: "bad".into(),
    }
    .into();
    let cycle: CliError = DomainError::CycleDetected {
        parent: "a".into(),
        child: "b".into(),
    }
    .into();

    assert_eq!(usage.exit_code(), exitcode::USAGE);
    assert_eq!(missing.exit_code(), exitcode::NOINPUT);
    assert_eq!(spec.exit_code(), exitcode::DATAERR);
    assert_eq!(config.exit_code(), exitcode::CONFIG);
    assert_eq!(cycle.exit_code(), exitcode::SOFTWARE);
}
