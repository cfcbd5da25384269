use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use uebuild_lib::config::BuildSettings;
use uebuild_lib::consts::{DEFAULT_CONFIGURATION, DEFAULT_PLATFORM};
use uebuild_lib::pipeline::Workflow;

mod cmd;
mod output;
mod prompts;

use cmd::Context;
use output::{OutputFormat, print_error, print_tail};

/// uebuild - compile an Unreal Engine project with the installed UnrealBuildTool
#[derive(Parser)]
#[command(name = "uebuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Directory to search for the .uproject file
  #[arg(short = 'C', long, global = true, default_value = ".")]
  project_dir: PathBuf,

  /// Engine installation directory; skips the registry lookup (also UEBUILD_ENGINE_DIR)
  #[arg(long, global = true)]
  engine_dir: Option<PathBuf>,

  /// Exit without waiting for Enter (also UEBUILD_NO_PAUSE)
  #[arg(long, global = true)]
  no_pause: bool,

  /// Defaults to `build`
  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Compile the project's editor target
  Build {
    #[command(flatten)]
    target: TargetArgs,
  },

  /// Delete cached build files, regenerate project files, then compile
  Rebuild {
    #[command(flatten)]
    target: TargetArgs,
  },

  /// Delete cached build files only
  Clean,

  /// Show the project and build tool that would be used
  Info {
    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },
}

#[derive(Args)]
struct TargetArgs {
  /// Build configuration
  #[arg(long, default_value = DEFAULT_CONFIGURATION)]
  configuration: String,

  /// Target platform
  #[arg(long, default_value = DEFAULT_PLATFORM)]
  platform: String,
}

impl From<TargetArgs> for BuildSettings {
  fn from(args: TargetArgs) -> Self {
    BuildSettings {
      configuration: args.configuration,
      platform: args.platform,
    }
  }
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let filter = if cli.verbose {
    EnvFilter::new("uebuild=debug,uebuild_lib=debug")
  } else {
    EnvFilter::from_default_env()
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let ctx = Context {
    project_dir: cli.project_dir,
    engine_dir: cli.engine_dir,
  };

  let result = match cli.command {
    None => cmd::cmd_build(&ctx, Workflow::Build, BuildSettings::default()),
    Some(Commands::Build { target }) => cmd::cmd_build(&ctx, Workflow::Build, target.into()),
    Some(Commands::Rebuild { target }) => cmd::cmd_build(&ctx, Workflow::Rebuild, target.into()),
    Some(Commands::Clean) => cmd::cmd_clean(&ctx),
    Some(Commands::Info { output }) => cmd::cmd_info(&ctx, output),
  };

  let code = match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{:#}", e));
      if let Some(tail) = cmd::failure_tail(&e) {
        print_tail(tail);
      }
      ExitCode::FAILURE
    }
  };

  if let Err(e) = prompts::acknowledge(cli.no_pause) {
    tracing::debug!(error = %e, "acknowledgement prompt failed");
  }

  code
}
