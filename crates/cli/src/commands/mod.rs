//! CLI commands module.

use anyhow::Result;
use clap::Subcommand;
use snowcodec_core::Serialization;
use std::path::Path;

mod address;
mod convert;
mod tx;

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a value into its document form
    Encode(convert::ConvertArgs),
    /// Convert a document value back into another form
    Decode(convert::ConvertArgs),
    /// Address management
    Address(address::AddressArgs),
    /// Transaction documents
    Tx(tx::TxArgs),
}

pub fn run(cmd: Commands, config_path: Option<&Path>) -> Result<()> {
    let codec = Serialization::new(crate::config::load(config_path)?);

    match cmd {
        Commands::Encode(args) => convert::run(args, &codec, convert::Direction::Encode),
        Commands::Decode(args) => convert::run(args, &codec, convert::Direction::Decode),
        Commands::Address(args) => address::run(args, &codec),
        Commands::Tx(args) => tx::run(args, &codec),
    }
}
