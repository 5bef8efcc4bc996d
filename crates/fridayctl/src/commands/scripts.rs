//! Script binding handlers.

use serde::Serialize;
use tabled::Tabled;

use fridayctl_core::Assistant;

use crate::cli::{GlobalOpts, ScriptsArgs, ScriptsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Serialize, Tabled)]
struct BindingRow {
    #[tabled(rename = "Keyword")]
    keyword: String,
    #[tabled(rename = "Scripts")]
    scripts: String,
}

#[derive(Serialize, Tabled)]
struct ScriptRow {
    #[tabled(rename = "Script")]
    script: String,
}

pub async fn handle(
    assistant: &Assistant,
    args: ScriptsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ScriptsCommand::All => {
            let scripts = assistant
                .all_scripts()
                .await
                .map_err(|e| util::map_core(e, assistant))?;
            let out = output::render_list(
                &global.output,
                &scripts,
                |s| ScriptRow { script: s.clone() },
                Clone::clone,
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ScriptsCommand::Bound => {
            let bound = assistant
                .bound_scripts()
                .await
                .map_err(|e| util::map_core(e, assistant))?;
            let rows: Vec<BindingRow> = bound
                .into_iter()
                .map(|(keyword, scripts)| BindingRow {
                    keyword,
                    scripts: scripts.join(", "),
                })
                .collect();
            let out = output::render_list(
                &global.output,
                &rows,
                |r| BindingRow {
                    keyword: r.keyword.clone(),
                    scripts: r.scripts.clone(),
                },
                |r| r.keyword.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ScriptsCommand::Bind { keyword, scripts } => {
            let mut bound = assistant
                .bound_scripts()
                .await
                .map_err(|e| util::map_core(e, assistant))?;
            bound.insert(keyword.clone(), scripts);
            assistant
                .set_bound_scripts(&bound)
                .await
                .map_err(|e| util::map_core(e, assistant))?;
            if !global.quiet {
                eprintln!("Bound '{keyword}'");
            }
            Ok(())
        }

        ScriptsCommand::Unbind { keyword } => {
            let mut bound = assistant
                .bound_scripts()
                .await
                .map_err(|e| util::map_core(e, assistant))?;
            if bound.remove(&keyword).is_none() {
                return Err(CliError::NotFound {
                    resource_type: "binding".into(),
                    identifier: keyword,
                    list_command: "scripts bound".into(),
                });
            }
            assistant
                .set_bound_scripts(&bound)
                .await
                .map_err(|e| util::map_core(e, assistant))?;
            if !global.quiet {
                eprintln!("Unbound '{keyword}'");
            }
            Ok(())
        }
    }
}
