//! Recorded clip handlers.

use std::path::PathBuf;

use tabled::Tabled;

use fridayctl_core::Assistant;

use crate::cli::{ClipsArgs, ClipsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct ClipRow {
    #[tabled(rename = "Clip")]
    id: String,
}

pub async fn handle(
    assistant: &Assistant,
    args: ClipsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ClipsCommand::List => {
            let clips = assistant
                .clips()
                .await
                .map_err(|e| util::map_core(e, assistant))?;
            let out = output::render_list(
                &global.output,
                &clips,
                |id| ClipRow { id: id.clone() },
                Clone::clone,
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ClipsCommand::New => {
            let id = assistant
                .new_clip()
                .await
                .map_err(|e| util::map_core(e, assistant))?;
            let out = output::render_single(&global.output, &id, Clone::clone);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ClipsCommand::Remove { id } => {
            if !util::confirm(&format!("Delete clip '{id}'?"), global.yes)? {
                return Ok(());
            }
            assistant
                .remove_clip(&id)
                .await
                .map_err(|e| util::map_core(e, assistant))?;
            if !global.quiet {
                eprintln!("Clip '{id}' deleted");
            }
            Ok(())
        }

        ClipsCommand::Rename { old_id, new_id } => {
            assistant
                .rename_clip(&old_id, &new_id)
                .await
                .map_err(|e| util::map_core(e, assistant))?;
            if !global.quiet {
                eprintln!("Clip '{old_id}' renamed to '{new_id}'");
            }
            Ok(())
        }

        ClipsCommand::Listen { id, out } => {
            let audio = assistant
                .clip_audio(&id)
                .await
                .map_err(|e| util::map_core(e, assistant))?;
            let path = out.unwrap_or_else(|| PathBuf::from(&id));
            std::fs::write(&path, &audio)?;
            if !global.quiet {
                eprintln!("Wrote {} bytes to {}", audio.len(), path.display());
            }
            Ok(())
        }
    }
}
