//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No tree logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use stackview_core::domain::{Inflection, TreeKind};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stackview",
    bin_name = "stackview",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Navigable trees over a React/TypeScript workspace",
    long_about = "Stackview lists a workspace's files by category, the JSX \
                  components each file renders, the React hooks it calls and \
                  the RPC procedures it defines.",
    after_help = "EXAMPLES:\n\
        \x20 stackview tree files\n\
        \x20 stackview tree hooks --format flat\n\
        \x20 stackview watch components --root ./web\n\
        \x20 stackview inflect dasherize fooBar\n\
        \x20 stackview completions bash > /usr/share/bash-completion/completions/stackview",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print one or all trees.
    #[command(
        visible_alias = "t",
        about = "Print a workspace tree",
        after_help = "EXAMPLES:\n\
            \x20 stackview tree files\n\
            \x20 stackview tree components --depth 1\n\
            \x20 stackview tree all --format json"
    )]
    Tree(TreeArgs),

    /// Print a tree and re-print it whenever it changes.
    #[command(
        visible_alias = "w",
        about = "Watch a workspace tree",
        after_help = "EXAMPLES:\n\
            \x20 stackview watch hooks\n\
            \x20 stackview watch routes --root ./server"
    )]
    Watch(WatchArgs),

    /// Apply a string-form transformation.
    #[command(
        about = "Transform a name (camelize, dasherize, ...)",
        after_help = "EXAMPLES:\n\
            \x20 stackview inflect camelize \"hello world\"\n\
            \x20 stackview inflect pluralize query\n\
            \x20 stackview inflect ordinalize \"floor 3\""
    )]
    Inflect(InflectArgs),

    /// Initialise a Stackview configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stackview init           # user config directory\n\
            \x20 stackview init --local   # .stackview.toml in CWD\n\
            \x20 stackview init --force   # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stackview completions bash > ~/.local/share/bash-completion/completions/stackview\n\
            \x20 stackview completions zsh  > ~/.zfunc/_stackview\n\
            \x20 stackview completions fish > ~/.config/fish/completions/stackview.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Stackview configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stackview config get workspace.scan_concurrency\n\
            \x20 stackview config list\n\
            \x20 stackview config path"
    )]
    Config(ConfigCommands),
}

// ── tree / watch ──────────────────────────────────────────────────────────────

/// Arguments for `stackview tree`.
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Which tree to print.
    #[arg(value_enum, value_name = "TREE", help = "Tree to print")]
    pub target: TreeTarget,

    #[command(flatten)]
    pub view: ViewArgs,
}

/// Arguments for `stackview watch`.
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Which tree to watch.
    #[arg(value_enum, value_name = "TREE", help = "Tree to watch")]
    pub kind: TreeKindArg,

    #[command(flatten)]
    pub view: ViewArgs,
}

/// Rendering options shared by `tree` and `watch`.
#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Workspace root (defaults to `workspace.root`, then the current directory).
    #[arg(short = 'r', long = "root", value_name = "DIR", help = "Workspace root")]
    pub root: Option<PathBuf>,

    /// Render style (defaults to `output.format`).
    #[arg(short = 'f', long = "format", value_enum, help = "Render style")]
    pub format: Option<TreeFormat>,

    /// Levels to expand; 1 prints roots only.
    #[arg(
        short = 'd',
        long = "depth",
        value_name = "N",
        value_parser = clap::value_parser!(u16).range(1..),
        help = "Levels to expand (1 = roots only)"
    )]
    pub depth: Option<u16>,
}

/// A single tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TreeKindArg {
    Files,
    #[value(alias = "component")]
    Components,
    #[value(alias = "hook")]
    Hooks,
    #[value(alias = "procedures")]
    Routes,
}

impl From<TreeKindArg> for TreeKind {
    fn from(arg: TreeKindArg) -> Self {
        match arg {
            TreeKindArg::Files => TreeKind::Files,
            TreeKindArg::Components => TreeKind::Components,
            TreeKindArg::Hooks => TreeKind::Hooks,
            TreeKindArg::Routes => TreeKind::Routes,
        }
    }
}

/// A single tree or all four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TreeTarget {
    Files,
    #[value(alias = "component")]
    Components,
    #[value(alias = "hook")]
    Hooks,
    #[value(alias = "procedures")]
    Routes,
    All,
}

impl TreeTarget {
    /// The trees to print, in display order.
    pub fn kinds(self) -> Vec<TreeKind> {
        match self {
            Self::Files => vec![TreeKind::Files],
            Self::Components => vec![TreeKind::Components],
            Self::Hooks => vec![TreeKind::Hooks],
            Self::Routes => vec![TreeKind::Routes],
            Self::All => TreeKind::ALL.to_vec(),
        }
    }
}

/// How a tree is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TreeFormat {
    /// Indented tree with box-drawing guides.
    #[default]
    Tree,
    /// JSON document of renderable items.
    Json,
    /// One line per leaf (`file:line: text` for matches).
    Flat,
}

// ── inflect ───────────────────────────────────────────────────────────────────

/// Arguments for `stackview inflect`.
#[derive(Debug, Args)]
pub struct InflectArgs {
    /// Transformation to apply.
    #[arg(value_enum, value_name = "INFLECTION")]
    pub inflection: InflectionArg,

    /// Input text. Several words may be passed unquoted.
    #[arg(value_name = "TEXT", required = true, num_args = 1.., trailing_var_arg = true)]
    pub text: Vec<String>,
}

/// Named string-form transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum InflectionArg {
    Camelize,
    Pascalize,
    Underscore,
    Decamelize,
    Humanize,
    Dasherize,
    Pluralize,
    Singularize,
    Titleize,
    Ordinalize,
}

impl From<InflectionArg> for Inflection {
    fn from(arg: InflectionArg) -> Self {
        match arg {
            InflectionArg::Camelize => Inflection::Camelize,
            InflectionArg::Pascalize => Inflection::Pascalize,
            InflectionArg::Underscore => Inflection::Underscore,
            InflectionArg::Decamelize => Inflection::Decamelize,
            InflectionArg::Humanize => Inflection::Humanize,
            InflectionArg::Dasherize => Inflection::Dasherize,
            InflectionArg::Pluralize => Inflection::Pluralize,
            InflectionArg::Singularize => Inflection::Singularize,
            InflectionArg::Titleize => Inflection::Titleize,
            InflectionArg::Ordinalize => Inflection::Ordinalize,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stackview init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.stackview.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stackview completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stackview config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `workspace.watch`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
