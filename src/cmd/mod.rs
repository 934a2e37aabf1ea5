pub mod import;
pub mod provision;
pub mod schema;

mod error;

pub use error::*;

use crate::sdk::{self, ItemFields};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cohere-plugin",
    version,
    about = "credential plugin for the cohere cli config file",
    long_about = "Provisions and imports the JWT, email and endpoint URL the Cohere CLI keeps in ~/.command/config."
)]
pub struct Cli {
    /// Home directory the config file lives under
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Describe the credential fields
    Schema,
    /// Write the config file from field values
    Provision(ProvisionArgs),
    /// Remove the provisioned config file
    Deprovision,
    /// Look for an existing credential on disk
    Import {
        #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Args, Default)]
pub struct ProvisionArgs {
    /// Field value as NAME=VALUE (JWT, Email, URL)
    #[arg(short, long = "field", value_name = "NAME=VALUE")]
    pub fields: Vec<String>,
    /// Read field values from a dotenv file
    #[arg(long)]
    pub env_file: Option<PathBuf>,
    /// Prompt for fields that are still missing
    #[arg(short, long)]
    pub interactive: bool,
    /// Print the file contents instead of writing them
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

pub fn handle(cli: Cli) -> CmdResult<()> {
    match cli.command {
        Command::Schema => schema::handle(),
        Command::Provision(args) => provision::handle(resolve_home(cli.home)?, args),
        Command::Deprovision => provision::remove(resolve_home(cli.home)?),
        Command::Import { format } => import::handle(resolve_home(cli.home)?, format),
    }
}

fn resolve_home(home: Option<PathBuf>) -> CmdResult<PathBuf> {
    match home {
        Some(home) => Ok(home),
        None => Ok(sdk::home_dir()?),
    }
}

fn parse_field(raw: &str) -> CmdResult<(sdk::FieldName, String)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| CmdError::InvalidField(raw.to_string()))?;

    let name = name
        .parse()
        .map_err(|_| CmdError::InvalidField(raw.to_string()))?;

    Ok((name, value.to_string()))
}

fn collect_fields<'a>(raw: impl IntoIterator<Item = &'a String>) -> CmdResult<ItemFields> {
    raw.into_iter().map(|field| parse_field(field)).collect()
}
