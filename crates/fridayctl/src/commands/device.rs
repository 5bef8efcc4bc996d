//! Device name handlers.

use fridayctl_core::Assistant;

use crate::cli::{GlobalOpts, NameArgs, NameCommand};
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(
    assistant: &Assistant,
    args: NameArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        NameCommand::Get => {
            let name = assistant
                .device_name()
                .await
                .map_err(|e| util::map_core(e, assistant))?;
            let out = output::render_single(&global.output, &name, Clone::clone);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        NameCommand::Set { name } => {
            assistant
                .set_device_name(&name)
                .await
                .map_err(|e| util::map_core(e, assistant))?;
            if !global.quiet {
                eprintln!("Device renamed to '{name}'");
            }
            Ok(())
        }
    }
}
