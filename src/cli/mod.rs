//! Command-line interface for lipstick
//!
//! Without a subcommand lipstick rewrites the message given on the command
//! line and prints it. The subcommands manage the git hook and the local
//! configuration file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod output;

pub use output::Output;

use crate::utils::get_current_dir;

/// lipstick - Make your git commits more expressive
#[derive(Parser)]
#[command(name = "lipstick", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Run as if started in <DIR> instead of current working directory
    #[arg(short = 'C', long = "directory", value_name = "DIR", global = true)]
    pub directory: Option<PathBuf>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file instead of .lipstickrc
    #[arg(long, value_name = "FILE", env = "LIPSTICK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub rewrite: commands::rewrite::RewriteArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Install the git hook into the current repository
    #[command(visible_alias = "i")]
    Install(commands::install::InstallArgs),
    /// Remove the git hook
    #[command(visible_alias = "u")]
    Uninstall(commands::uninstall::UninstallArgs),
    /// Create a .lipstickrc file if one does not exist
    #[command(visible_alias = "initialize")]
    Init(commands::init::InitArgs),
    /// List the available lipstick mappings
    #[command(visible_alias = "l")]
    List,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let workdir = match self.directory {
            Some(dir) => dir,
            None => get_current_dir()?,
        };
        let config = self.config.as_deref();
        let output = Output::new(self.verbose > 0, self.quiet);

        match self.command {
            Some(Commands::Install(args)) => commands::install::execute(args, &workdir, &output),
            Some(Commands::Uninstall(args)) => {
                commands::uninstall::execute(args, &workdir, &output)
            }
            Some(Commands::Init(args)) => commands::init::execute(args, &workdir, &output),
            Some(Commands::List) => commands::list::execute(&workdir, config, &output),
            None => commands::rewrite::execute(self.rewrite, &workdir, config),
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // stdout carries the rewritten message, logs must stay out of it
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_words_are_collected() {
        let cli = Cli::try_parse_from(["lipstick", ":init", "first", "--wip", "commit"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.rewrite.words, [":init", "first", "--wip", "commit"]);
    }

    #[test]
    fn test_subcommand_aliases() {
        let cli = Cli::try_parse_from(["lipstick", "i", "--hook", "prepare-commit-msg"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Install(_))));

        let cli = Cli::try_parse_from(["lipstick", "initialize", "--force"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Init(ref args)) if args.force));

        let cli = Cli::try_parse_from(["lipstick", "-v", "l"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List)));
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_message_flag() {
        let cli = Cli::try_parse_from(["lipstick", "-m", ":docs update readme"]).unwrap();
        assert_eq!(cli.rewrite.message.as_deref(), Some(":docs update readme"));
        assert!(cli.rewrite.words.is_empty());
    }

    #[test]
    fn test_message_flag_is_never_a_subcommand_or_flag() {
        for message in ["init", "list", "install", "--help", "-V"] {
            let cli = Cli::try_parse_from(["lipstick", "-m", message]).unwrap();
            assert!(cli.command.is_none());
            assert_eq!(cli.rewrite.message.as_deref(), Some(message));
        }
    }
}
