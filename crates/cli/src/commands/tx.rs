//! Transaction document commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use snowcodec_core::config::network_for_hrp;
use snowcodec_core::{Id, Serialization, SerializedEncoding};
use snowcodec_tx::{
    BaseTx, Envelope, Keypair, SecpTransferInput, SecpTransferOutput, Serializable, Tx,
};
use std::fs;
use std::path::PathBuf;

/// Fee taken by the sample transfer.
const SAMPLE_FEE: u64 = 1_000_000;

#[derive(Args)]
pub struct TxArgs {
    #[command(subcommand)]
    command: TxCommand,
}

#[derive(Subcommand)]
enum TxCommand {
    /// Build and sign a sample transfer and print its envelope
    Sample {
        /// Document encoding: hex or display
        #[arg(short, long, default_value = "display")]
        encoding: SerializedEncoding,

        /// Amount to send
        #[arg(short, long, default_value = "1000")]
        amount: u64,

        /// Memo attached to the transfer
        #[arg(long, default_value = "")]
        memo: String,

        /// Write the envelope to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Read an envelope, rebuild the transaction and show its summary
    Inspect {
        /// Envelope file (JSON)
        file: PathBuf,
    },
}

pub fn run(args: TxArgs, codec: &Serialization) -> Result<()> {
    match args.command {
        TxCommand::Sample {
            encoding,
            amount,
            memo,
            output,
        } => sample(codec, encoding, amount, memo, output),
        TxCommand::Inspect { file } => inspect(codec, file),
    }
}

fn sample_tx(codec: &Serialization, amount: u64, memo: String) -> Result<Tx> {
    let sender = Keypair::generate();
    let recipient = Keypair::generate();
    let asset = Id([0x3d; 32]);
    let network_id = network_for_hrp(&codec.config().hrp).unwrap_or(0);
    let funded = amount
        .checked_add(SAMPLE_FEE)
        .context("Amount plus fee overflows")?;

    let unsigned = BaseTx::new(
        network_id,
        Id([0x01; 32]),
        vec![SecpTransferOutput::new(asset, amount, vec![recipient.short_id()])],
        vec![SecpTransferInput::new(Id([0x44; 32]), 0, asset, funded, vec![0])],
    )
    .with_memo(memo);

    Ok(Tx::sign(unsigned, std::slice::from_ref(&sender))?)
}

fn sample(
    codec: &Serialization,
    encoding: SerializedEncoding,
    amount: u64,
    memo: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let tx = sample_tx(codec, amount, memo)?;
    let envelope = tx.to_envelope(codec, encoding)?;
    let json = envelope.to_json_pretty()?;

    match output {
        Some(path) => {
            fs::write(&path, &json)
                .with_context(|| format!("Failed to write envelope: {}", path.display()))?;
            println!(
                "{}  Wrote {} envelope to {}",
                "✓".green().bold(),
                encoding,
                path.display().to_string().bright_black()
            );
            println!("    Tx ID: {}", tx.tx_id()?.to_string().bright_yellow());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn inspect(codec: &Serialization, file: PathBuf) -> Result<()> {
    let text = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read envelope: {}", file.display()))?;
    let envelope = Envelope::from_json_str(&text)?;
    let tx = Tx::from_envelope(codec, &envelope).context("Failed to rebuild transaction")?;

    let unsigned = &tx.unsigned;
    println!("{}", "Transaction".bold().cyan());
    println!("  VM:          {}", envelope.vm);
    println!("  Encoding:    {}", envelope.encoding);
    println!("  Tx ID:       {}", tx.tx_id()?.to_string().bright_yellow());
    println!("  Network ID:  {}", unsigned.network_id);
    println!("  Blockchain:  {}", unsigned.blockchain_id);
    println!("  Inputs:      {}", unsigned.inputs.len());
    println!("  Outputs:     {}", unsigned.outputs.len());
    match unsigned.fee() {
        Some(fee) => println!("  Fee:         {}", fee),
        None => println!("  Fee:         {}", "outputs exceed inputs".red()),
    }

    let rebuilt = tx.to_envelope(codec, envelope.encoding)?;
    if is_canonical(&text, &rebuilt)? {
        println!("{}  Envelope is canonical", "✓".green().bold());
    } else {
        println!("{}  Envelope differs from its canonical form", "!".yellow().bold());
    }
    Ok(())
}

/// Whether `text` is byte-for-byte the compact form of `rebuilt`, key order included.
fn is_canonical(text: &str, rebuilt: &Envelope) -> Result<bool> {
    let parsed: serde_json::Value = serde_json::from_str(text)?;
    Ok(serde_json::to_string(&parsed)? == rebuilt.to_json_string()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_roundtrip_through_file() {
        let codec = Serialization::global();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tx.json");

        sample(codec, SerializedEncoding::Hex, 500, "memo".into(), Some(path.clone())).unwrap();
        let envelope = Envelope::from_json_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(envelope.encoding, SerializedEncoding::Hex);

        let tx = Tx::from_envelope(codec, &envelope).unwrap();
        assert_eq!(tx.unsigned.outputs[0].amount, 500);
        assert_eq!(tx.unsigned.fee(), Some(SAMPLE_FEE));
        assert_eq!(tx.unsigned.memo, b"memo");
        assert!(inspect(codec, path).is_ok());
    }

    #[test]
    fn test_reordered_envelope_not_canonical() {
        let codec = Serialization::global();
        let tx = sample_tx(codec, 10, String::new()).unwrap();
        let envelope = tx.to_envelope(codec, SerializedEncoding::Display).unwrap();
        assert!(is_canonical(&envelope.to_json_pretty().unwrap(), &envelope).unwrap());

        let descriptor = envelope.fields.as_object().unwrap();
        let mut swapped = serde_json::Map::new();
        swapped.insert("fields".into(), descriptor["fields"].clone());
        swapped.insert("type".into(), descriptor["type"].clone());
        let reordered = Envelope {
            fields: serde_json::Value::Object(swapped),
            ..envelope.clone()
        };
        assert_eq!(reordered.fields, envelope.fields);

        let text = reordered.to_json_string().unwrap();
        assert!(!is_canonical(&text, &envelope).unwrap());
    }

    #[test]
    fn test_sample_uses_configured_network() {
        let codec = Serialization::new(snowcodec_core::CodecConfig::for_network(5).unwrap());
        let tx = sample_tx(&codec, 1, String::new()).unwrap();
        assert_eq!(tx.unsigned.network_id, 5);
    }

    #[test]
    fn test_amount_overflow_rejected() {
        assert!(sample_tx(Serialization::global(), u64::MAX, String::new()).is_err());
    }
}
