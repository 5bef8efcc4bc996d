//! Clap derive structures for the `fridayctl` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// fridayctl -- configure friday voice-assistant devices
#[derive(Debug, Parser)]
#[command(
    name = "fridayctl",
    version,
    about = "Configure friday voice-assistant devices from the command line",
    long_about = "Manage a friday home voice-assistant device over its local HTTP API:\n\
        keywords and recorded examples, script bindings, Philips Hue light\n\
        commands, voice clips, and the device name.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Device base URL (overrides the config file)
    #[arg(long, short = 'd', env = "FRIDAY_DEVICE", global = true)]
    pub device: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "FRIDAY_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, env = "FRIDAY_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show or change the device name
    Name(NameArgs),

    /// List recognized keywords
    #[command(alias = "kw")]
    Keywords,

    /// Manage the clip-file to keyword example map
    #[command(alias = "ex")]
    Examples(ExamplesArgs),

    /// Manage script bindings
    Scripts(ScriptsArgs),

    /// Manage recorded voice clips
    Clips(ClipsArgs),

    /// Manage Philips Hue lights and commands
    Hue(HueArgs),

    /// Rebuild the keyword view and delete orphaned clips
    Sync,

    /// Manage fridayctl configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Name ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct NameArgs {
    #[command(subcommand)]
    pub command: NameCommand,
}

#[derive(Debug, Subcommand)]
pub enum NameCommand {
    /// Print the device name
    Get,
    /// Rename the device
    Set {
        /// New device name
        name: String,
    },
}

// ── Examples ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ExamplesArgs {
    #[command(subcommand)]
    pub command: ExamplesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ExamplesCommand {
    /// List the example map (clip file -> keyword)
    List,
    /// Replace the example map from a JSON file
    Set {
        /// JSON file containing a {"clip.wav": "keyword"} object
        file: PathBuf,
    },
}

// ── Scripts ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ScriptsArgs {
    #[command(subcommand)]
    pub command: ScriptsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ScriptsCommand {
    /// List every script available on the device
    All,
    /// List keyword to script bindings
    Bound,
    /// Bind scripts to a keyword (replaces that keyword's binding)
    Bind {
        /// Keyword to bind
        keyword: String,
        /// Scripts to run when the keyword is recognized, in order
        #[arg(required = true)]
        scripts: Vec<String>,
    },
    /// Remove a keyword's script binding
    Unbind {
        /// Keyword to unbind
        keyword: String,
    },
}

// ── Clips ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ClipsArgs {
    #[command(subcommand)]
    pub command: ClipsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ClipsCommand {
    /// List recorded clip ids
    List,
    /// Record a new clip on the device
    New,
    /// Delete a clip
    Remove {
        /// Clip id
        id: String,
    },
    /// Rename a clip
    Rename {
        /// Current clip id
        old_id: String,
        /// New clip id
        new_id: String,
    },
    /// Download a clip's WAV audio
    Listen {
        /// Clip id
        id: String,
        /// Output file (defaults to the clip id)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

// ── Hue ──────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct HueArgs {
    #[command(subcommand)]
    pub command: HueCommand,
}

#[derive(Debug, Subcommand)]
pub enum HueCommand {
    /// List lights known to the paired bridge
    Lights,
    /// List keyword to light-command bindings
    Commands,
    /// Switch one light on or off
    Power {
        /// Light id
        id: String,
        /// Target state
        state: PowerState,
    },
    /// Pair with the Hue bridge (press its link button first)
    Login,
    /// Show bridge pairing status
    Status,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PowerState {
    On,
    Off,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write a starter config file
    Init,
    /// Print the resolved configuration
    Show,
    /// Print the config file path
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
