use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use console::style;

use crate::adapters::DialoguerConfirm;
use crate::app::AppController;
use crate::domain::{DomainError, PullOutcome};

/// Pull bounce renders from a mounted OP-Z sampler.
#[derive(Parser)]
#[command(name = "bouncepull", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the current configuration and storage paths.
    Show,
    /// Set the root directory of the mounted OP-Z.
    Source { path: PathBuf },
    /// Set the folder that receives pulled bounces.
    Dest { path: PathBuf },
    /// Toggle deleting slot directories from the device after a pull.
    Delete { state: Toggle },
    /// Toggle remembering the confirmation choice for future transfers.
    SkipConfirm { state: Toggle },
    /// Move every available bounce to the destination folder.
    Pull,
}

#[derive(Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> bool {
        matches!(toggle, Toggle::On)
    }
}

impl Cli {
    /// Dispatch the parsed command against the controller.
    pub fn dispatch(self, controller: &AppController) -> Result<(), DomainError> {
        match self.command.unwrap_or(Command::Show) {
            Command::Show => show(controller),
            Command::Source { path } => {
                controller.set_source_root(path.to_string_lossy().into_owned());
                println!("OP-Z drive set to {}", path.display());
            }
            Command::Dest { path } => {
                controller.set_destination_folder(path.to_string_lossy().into_owned());
                println!("Destination folder set to {}", path.display());
            }
            Command::Delete { state } => {
                controller.set_delete_after_transfer(state.into());
            }
            Command::SkipConfirm { state } => {
                controller.set_skip_confirmation(state.into());
            }
            Command::Pull => {
                let outcome = controller.pull_bounces(&DialoguerConfirm)?;
                report(outcome);
            }
        }
        Ok(())
    }
}

fn show(controller: &AppController) {
    let config = controller.config();
    let unset = style("(unset)").dim().to_string();
    let or_unset = |s: &str| {
        if s.is_empty() {
            unset.clone()
        } else {
            s.to_string()
        }
    };

    println!("OP-Z drive:            {}", or_unset(&config.source_root));
    println!("Destination folder:    {}", or_unset(&config.destination_folder));
    println!("Delete after transfer: {}", on_off(config.delete_after_transfer));
    println!("Skip confirmation:     {}", on_off(config.skip_confirmation));
    println!();
    println!("Config file:           {}", controller.config_path());
    println!("Logs:                  {}", controller.logs_dir());
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

/// Map the engine's outcome to the user-facing notices.
fn report(outcome: PullOutcome) {
    match outcome {
        PullOutcome::Transferred => {
            println!(
                "{} All bounces have been transferred from your OP-Z!",
                style("Success:").green().bold()
            );
        }
        PullOutcome::NothingFound => {
            println!("No bounces found on the OP-Z.");
        }
        PullOutcome::MissingPaths => {
            println!(
                "{} Please set both the OP-Z drive and the destination folder \
                 (`bouncepull source <PATH>`, `bouncepull dest <PATH>`).",
                style("Missing paths:").yellow().bold()
            );
        }
        PullOutcome::SourceNotFound => {
            println!(
                "{} The configured OP-Z drive was not found. Select the correct \
                 drive with `bouncepull source <PATH>`.",
                style("Drive not found:").yellow().bold()
            );
        }
        PullOutcome::Declined => {
            println!("Aborted; nothing was moved.");
        }
    }
}
