//! Example-map handlers.

use std::collections::BTreeMap;

use serde::Serialize;
use tabled::Tabled;

use fridayctl_core::Assistant;

use crate::cli::{ExamplesArgs, ExamplesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Serialize, Tabled)]
struct ExampleRow {
    #[tabled(rename = "Clip")]
    file: String,
    #[tabled(rename = "Keyword")]
    keyword: String,
}

pub async fn handle(
    assistant: &Assistant,
    args: ExamplesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ExamplesCommand::List => {
            let examples = assistant
                .examples()
                .await
                .map_err(|e| util::map_core(e, assistant))?;

            let rows: Vec<ExampleRow> = examples
                .into_iter()
                .map(|(file, keyword)| ExampleRow { file, keyword })
                .collect();
            let out = output::render_list(
                &global.output,
                &rows,
                |r| ExampleRow {
                    file: r.file.clone(),
                    keyword: r.keyword.clone(),
                },
                |r| r.file.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ExamplesCommand::Set { file } => {
            let examples: BTreeMap<String, String> = util::read_json_file(&file)?;
            assistant
                .set_examples(&examples)
                .await
                .map_err(|e| util::map_core(e, assistant))?;
            if !global.quiet {
                eprintln!("Examples updated ({} entries)", examples.len());
            }
            Ok(())
        }
    }
}
