//! Keyword sync: rebuild the keyword view and GC orphaned clips.

use serde::Serialize;
use tabled::Tabled;

use fridayctl_core::Assistant;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Serialize, Tabled)]
struct KeywordClipsRow {
    #[tabled(rename = "Keyword")]
    keyword: String,
    #[tabled(rename = "Clips")]
    clips: String,
}

pub async fn handle(assistant: &Assistant, global: &GlobalOpts) -> Result<(), CliError> {
    let keywords = assistant
        .keyword_clips()
        .await
        .map_err(|e| util::map_core(e, assistant))?;

    let rows: Vec<KeywordClipsRow> = keywords
        .into_iter()
        .map(|(keyword, clips)| KeywordClipsRow {
            keyword,
            clips: clips.join(", "),
        })
        .collect();
    let out = output::render_list(
        &global.output,
        &rows,
        |r| KeywordClipsRow {
            keyword: r.keyword.clone(),
            clips: r.clips.clone(),
        },
        |r| r.keyword.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
