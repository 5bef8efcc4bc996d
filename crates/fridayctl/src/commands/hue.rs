//! Philips Hue handlers.

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::Tabled;

use fridayctl_core::{Assistant, LightUpdate};

use crate::cli::{GlobalOpts, HueArgs, HueCommand, PowerState};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct LightRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "On")]
    on: String,
    #[tabled(rename = "Brightness")]
    brightness: String,
}

#[derive(Serialize, Tabled)]
struct HueBindingRow {
    #[tabled(rename = "Keyword")]
    keyword: String,
    #[tabled(rename = "Commands")]
    commands: String,
}

/// Human-oriented summary of one light command, e.g. `light 3 on`.
fn describe(update: &LightUpdate) -> String {
    let mut parts = vec![format!("light {}", update.id)];
    if let Some(on) = update.state.on {
        parts.push(if on { "on".into() } else { "off".into() });
    }
    if let Some(bri) = update.state.brightness {
        parts.push(format!("bri={bri}"));
    }
    if let Some(hue) = update.state.hue {
        parts.push(format!("hue={hue}"));
    }
    if let Some(sat) = update.state.saturation {
        parts.push(format!("sat={sat}"));
    }
    parts.join(" ")
}

pub async fn handle(
    assistant: &Assistant,
    args: HueArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        HueCommand::Lights => {
            let lights = assistant
                .lights()
                .await
                .map_err(|e| util::map_core(e, assistant))?;
            let out = output::render_list(
                &global.output,
                &lights,
                |l| LightRow {
                    id: l.id.clone(),
                    name: l.name.clone(),
                    on: l
                        .state
                        .on
                        .map_or_else(String::new, |on| if on { "yes" } else { "no" }.to_owned()),
                    brightness: l
                        .state
                        .brightness
                        .map_or_else(String::new, |b| b.to_string()),
                },
                |l| l.id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        HueCommand::Commands => {
            let commands = assistant
                .light_commands()
                .await
                .map_err(|e| util::map_core(e, assistant))?;
            let rows: Vec<HueBindingRow> = commands
                .into_iter()
                .map(|(keyword, updates)| HueBindingRow {
                    keyword,
                    commands: updates.iter().map(describe).collect::<Vec<_>>().join("; "),
                })
                .collect();
            let out = output::render_list(
                &global.output,
                &rows,
                |r| HueBindingRow {
                    keyword: r.keyword.clone(),
                    commands: r.commands.clone(),
                },
                |r| r.keyword.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        HueCommand::Power { id, state } => {
            let on = matches!(state, PowerState::On);
            assistant
                .set_lights(&[LightUpdate::power(id.clone(), on)])
                .await
                .map_err(|e| util::map_core(e, assistant))?;
            if !global.quiet {
                eprintln!("Light {id} {}", if on { "on" } else { "off" });
            }
            Ok(())
        }

        HueCommand::Login => {
            assistant
                .hue_login()
                .await
                .map_err(|e| util::map_core(e, assistant))?;
            if !global.quiet {
                eprintln!("Paired with the Hue bridge");
            }
            Ok(())
        }

        HueCommand::Status => {
            let paired = assistant
                .hue_login_status()
                .await
                .map_err(|e| util::map_core(e, assistant))?;
            let color = output::should_color(&global.color);
            let out = output::render_single(&global.output, &paired, |p| match (*p, color) {
                (true, true) => "paired".green().to_string(),
                (true, false) => "paired".to_owned(),
                (false, true) => "not paired".red().to_string(),
                (false, false) => "not paired".to_owned(),
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
