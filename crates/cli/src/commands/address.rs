//! Address management command.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use snowcodec_core::{parse_address, Serialization, ShortId};
use snowcodec_tx::Keypair;

#[derive(Args)]
pub struct AddressArgs {
    #[command(subcommand)]
    command: AddressCommand,
}

#[derive(Subcommand)]
enum AddressCommand {
    /// Generate a new keypair and show its address
    New,
    /// Render 20 bytes (hex) as an address on the configured chain
    Encode {
        /// Address payload in hex
        bytes: String,
    },
    /// Decode an address on any configured network
    Parse {
        /// Address such as X-avax1...
        address: String,
    },
}

pub fn run(args: AddressArgs, codec: &Serialization) -> Result<()> {
    match args.command {
        AddressCommand::New => new_keypair(codec),
        AddressCommand::Encode { bytes } => encode(codec, &bytes),
        AddressCommand::Parse { address } => parse(codec, &address),
    }
}

fn new_keypair(codec: &Serialization) -> Result<()> {
    let keypair = Keypair::generate();
    let address = codec.address_to_string(keypair.short_id().as_bytes())?;

    println!("{}", "Generated new keypair".bold().cyan());
    println!("  Address:     {}", address.bright_yellow());
    println!("  Public key:  {}", hex::encode(keypair.public_key.as_bytes()));
    println!("  Private key: {}", hex::encode(keypair.private_key()).red());
    println!();
    println!("{}", "Keep the private key secret.".yellow());
    Ok(())
}

fn encode(codec: &Serialization, bytes: &str) -> Result<()> {
    let raw = hex::decode(bytes.strip_prefix("0x").unwrap_or(bytes))
        .context("Address payload must be hex")?;
    let short_id = ShortId::from_slice(&raw)?;
    println!("{}", codec.address_to_string(short_id.as_bytes())?);
    Ok(())
}

fn parse(codec: &Serialization, address: &str) -> Result<()> {
    let bytes = codec
        .string_to_address(address)
        .with_context(|| format!("Invalid address {:?}", address))?;
    let parts = parse_address(address)?;

    println!("  Chain alias: {}", parts.chain_alias.bright_cyan());
    println!("  HRP:         {}", parts.hrp.bright_cyan());
    println!("  Payload:     {}", hex::encode(bytes).bright_yellow());
    Ok(())
}
