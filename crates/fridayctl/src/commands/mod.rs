//! Command handlers, one module per command group.

pub mod clips;
pub mod config_cmd;
pub mod device;
pub mod examples;
pub mod hue;
pub mod keywords;
pub mod scripts;
pub mod sync;
pub mod util;

use fridayctl_core::Assistant;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Command,
    assistant: &Assistant,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match command {
        Command::Name(args) => device::handle(assistant, args, global).await,
        Command::Keywords => keywords::handle(assistant, global).await,
        Command::Examples(args) => examples::handle(assistant, args, global).await,
        Command::Scripts(args) => scripts::handle(assistant, args, global).await,
        Command::Clips(args) => clips::handle(assistant, args, global).await,
        Command::Hue(args) => hue::handle(assistant, args, global).await,
        Command::Sync => sync::handle(assistant, global).await,

        // Handled before a device connection exists.
        Command::Config(_) | Command::Completions(_) => unreachable!("handled in main"),
    }
}
