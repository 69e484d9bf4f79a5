use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use swish::types::{Difficulty, ExerciseType, FocusArea, Position};

#[derive(Parser)]
#[command(name = "swish", version, about = "Basketball training planner")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Emit machine-readable JSON instead of colorful text.
    #[arg(global = true, long)]
    pub json: bool,

    /// Load exercises from a TOML file instead of the built-in catalog.
    #[arg(global = true, long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Show debug logs on stderr.
    #[arg(global = true, short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the exercise catalog
    #[command(visible_alias = "c")]
    Catalog {
        /// Only show this exercise type
        #[arg(short, long = "type", value_name = "TYPE")]
        kind: Option<ExerciseType>,

        /// Only show this difficulty
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },

    /// Generate training plans
    #[command(visible_alias = "p")]
    Plan {
        #[command(flatten)]
        params: PlanArgs,

        /// How many plans to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,
    },

    /// Generate a plan and run it with a live timer
    #[command(visible_alias = "t")]
    #[command(after_help = "While running: `p` (or enter) pause/resume, `s` skip/finish, `q` quit")]
    Train {
        #[command(flatten)]
        params: PlanArgs,

        /// Milliseconds per workout second (overrides `tick_ms` config)
        #[arg(long, value_name = "MS")]
        tick_ms: Option<u64>,
    },

    /// View or edit swish config
    #[command(subcommand)]
    Config(ConfigCmd),
}

#[derive(Args, Clone, Debug)]
pub struct PlanArgs {
    /// Player position (defaults to `position` config, then guard)
    #[arg(short, long)]
    pub position: Option<Position>,

    /// Training focus (defaults to `focus` config, then shooting)
    #[arg(short, long)]
    pub focus: Option<FocusArea>,

    /// Difficulty level (defaults to `difficulty` config, then intermediate)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Custom plan name
    #[arg(long)]
    pub name: Option<String>,

    /// Seed the shuffle for a reproducible plan
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// Show all config keys
    List,

    /// Get the value of a key
    Get { key: String },

    /// Set or override a key
    Set { key: String, val: String },

    /// Remove a key
    Unset { key: String },
}
