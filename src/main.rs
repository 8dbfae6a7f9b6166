//! sarathi - CLI entry point.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sarathi::commit::TerminalConfirmation;
use sarathi::git::{SystemGit, check_git_installed};
use sarathi::llm::OpenAiClient;
use sarathi::{CommitError, Dispatcher, GitCommand, MessageGenerator, Outcome, PromptRegistry, Settings};

/// Exit code for command-line usage errors (matches clap).
const USAGE_EXIT_CODE: u8 = 2;

/// Write commit messages for staged changes with a language model.
#[derive(Parser, Debug)]
#[command(name = "sarathi")]
#[command(about = "Write commit messages for staged changes with a language model")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Git helpers
    Git {
        #[command(subcommand)]
        command: Option<GitCommand>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let is_usage = e
                .downcast_ref::<CommitError>()
                .is_some_and(CommitError::is_usage);
            if is_usage {
                eprintln!("Run 'sarathi git --help' for usage.");
                ExitCode::from(USAGE_EXIT_CODE)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

async fn run(command: Command) -> Result<()> {
    let Command::Git { command } = command;

    // Reject a missing sub-command before touching git or the network.
    if command.is_none() {
        return Err(CommitError::MissingSubCommand.into());
    }

    let settings = Settings::from_env();

    check_git_installed(&settings.git_program).context("git is required")?;
    let git = SystemGit::new(settings.git_program.clone());

    let client = OpenAiClient::new(&settings).context("Failed to configure completion client")?;

    let mut prompts = PromptRegistry::builtin();
    if let Some(ref model) = settings.model {
        prompts = prompts.with_model(model);
    }

    let dispatcher = Dispatcher::new(
        MessageGenerator::new(git, client, prompts),
        TerminalConfirmation,
    );

    let outcome = dispatcher.run(command, &mut io::stdout()).await?;

    if outcome == Outcome::NothingToCommit {
        println!("No commit message was generated. Nothing to commit.");
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "sarathi=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_autocommit() {
        let cli = Cli::try_parse_from(["sarathi", "git", "autocommit"]).unwrap();
        let Command::Git { command } = cli.command;
        assert_eq!(command, Some(GitCommand::Autocommit));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_gencommit_verbose() {
        let cli = Cli::try_parse_from(["sarathi", "git", "gencommit", "--verbose"]).unwrap();
        let Command::Git { command } = cli.command;
        assert_eq!(command, Some(GitCommand::Gencommit));
        assert!(cli.verbose);
    }

    #[test]
    fn test_unrecognized_sub_command_is_usage_error() {
        let err = Cli::try_parse_from(["sarathi", "git", "frobnicate"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        assert_eq!(err.exit_code(), i32::from(USAGE_EXIT_CODE));
    }

    #[test]
    fn test_missing_git_sub_command_parses_to_none() {
        let cli = Cli::try_parse_from(["sarathi", "git"]).unwrap();
        let Command::Git { command } = cli.command;
        assert!(command.is_none());
    }

    #[tokio::test]
    async fn test_run_without_sub_command_is_usage_error() {
        let err = run(Command::Git { command: None }).await.unwrap_err();
        let commit_err = err.downcast_ref::<CommitError>().unwrap();
        assert!(commit_err.is_usage());
    }
}
