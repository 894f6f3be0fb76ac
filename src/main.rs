use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io;
use std::io::Write;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod context;
mod helpers;

use cli::{Cli, Commands, Shell};
use context::AppContext;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let ctx = AppContext {
        quiet: cli.quiet,
        verbose: cli.verbose,
        dry_run: cli.dry_run,
    };
    init_tracing(&ctx);

    let result = match cli.command {
        Commands::Auth(cmd) => commands::auth::handle(&ctx, cmd).await,
        Commands::Preset(cmd) => commands::preset::handle(&ctx, cmd).await,
        Commands::Mapping(cmd) => commands::mapping::handle(&ctx, cmd).await,
        Commands::Profile(cmd) => commands::profile::handle(&ctx, cmd).await,
        Commands::Transform(cmd) => commands::transform::handle(&ctx, cmd).await,
        Commands::Resource(cmd) => commands::resource::handle(&ctx, cmd).await,
        Commands::Completions(args) => generate_completions(args),
    };

    if let Err(err) = result {
        if ctx.verbose > 0 {
            eprintln!("{err:?}");
        } else {
            eprintln!("{}", format_error_chain(&err));
        }
        std::process::exit(1);
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` maps to debug and `-vv` to trace for this crate.
fn init_tracing(ctx: &AppContext) {
    let default = match (ctx.quiet, ctx.verbose) {
        (true, _) => "off",
        (false, 0) => "warn",
        (false, 1) => "warn,mediacli=debug",
        (false, _) => "warn,mediacli=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn format_error_chain(err: &anyhow::Error) -> String {
    let mut out = err.to_string();
    for cause in err.chain().skip(1) {
        out.push_str(": ");
        out.push_str(&cause.to_string());
    }
    out
}

fn generate_completions(args: cli::CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let shell = match args.shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::Pwsh => clap_complete::Shell::PowerShell,
    };

    // Generate into a buffer so a closed pipe (`mediacli completions bash | head`)
    // is not a panic.
    let mut buf: Vec<u8> = Vec::new();
    clap_complete::generate(shell, &mut cmd, "mediacli", &mut buf);

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout.write_all(&buf) {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }

    Ok(())
}
