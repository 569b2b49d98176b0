use anyhow::{Context, Result};
use clap::Parser;

use auto_semver::cli::{run_auto_semver, RunOutcome};
use auto_semver::config::{self, Overrides};
use auto_semver::domain::IncrementTarget;
use auto_semver::git::GitCli;
use auto_semver::ui;

#[derive(clap::Parser)]
#[command(
    name = "auto-semver",
    version,
    about = "Auto increment semver tags from a remote's existing tags"
)]
struct Args {
    #[arg(
        long,
        value_name = "minor|patch",
        help = "The highest value (minor or patch) to auto-increment [default: patch]"
    )]
    highest_value: Option<IncrementTarget>,

    #[arg(long, help = "A specific git remote to pull tags from [default: git's own]")]
    remote: Option<String>,

    #[arg(long, help = "Skip tags that are not semantic versions instead of failing")]
    skip_malformed: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let file_config =
        config::load_config(args.config.as_deref()).context("Error loading config")?;
    let run_config = file_config.resolve(Overrides {
        remote: args.remote,
        highest_value: args.highest_value,
        skip_malformed: args.skip_malformed,
    });
    log::debug!("resolved configuration: {:?}", run_config);

    match run_auto_semver(&GitCli::new(), &run_config)? {
        RunOutcome::NoTags => ui::display_no_tags(),
        RunOutcome::Next { next, warnings, .. } => {
            for warning in &warnings {
                ui::display_boundary_warning(warning);
            }
            ui::display_version(&next.to_string());
        }
    }

    Ok(())
}
