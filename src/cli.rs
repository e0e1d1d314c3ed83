use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Hypixel Bedwars stats lookup")]
pub struct Cli {
    /// Path of the JSON config file holding the API key
    #[arg(short, long, global = true, env = "GOLDENSTATS_CONFIG", default_value = "config.json")]
    pub config: PathBuf,

    /// Your own Minecraft username, used when `stats` gets no player
    #[arg(short, long, global = true, env = "MINECRAFT_USERNAME")]
    pub username: Option<String>,

    /// Print without colour codes
    #[arg(long, global = true)]
    pub plain: bool,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Show Bedwars stats for a player
    Stats {
        /// Player name (optional, defaults to --username)
        player: Option<String>,
        /// Print the resolved record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Store the Hypixel API key in the config file
    SetApiKey {
        /// Raw API key
        key: String,
    },
}
