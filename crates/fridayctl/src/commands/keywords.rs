//! Keyword listing.

use tabled::Tabled;

use fridayctl_core::Assistant;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct KeywordRow {
    #[tabled(rename = "Keyword")]
    keyword: String,
}

pub async fn handle(assistant: &Assistant, global: &GlobalOpts) -> Result<(), CliError> {
    let keywords = assistant
        .keywords()
        .await
        .map_err(|e| util::map_core(e, assistant))?;

    let out = output::render_list(
        &global.output,
        &keywords,
        |k| KeywordRow { keyword: k.clone() },
        Clone::clone,
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
