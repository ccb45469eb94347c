//! Encode and decode commands.

use anyhow::{Context, Result};
use clap::Args;
use num_bigint::BigUint;
use snowcodec_core::{Repr, Serialization, SerializedEncoding, SerializedType, Value};

#[derive(Args)]
pub struct ConvertArgs {
    /// Value to convert
    value: String,

    /// Type of the input: hex, BN, Buffer, Bech32, cb58, base58, base64,
    /// decimalString, number or utf8
    #[arg(short, long)]
    from: SerializedType,

    /// Type of the output
    #[arg(short, long)]
    to: SerializedType,

    /// Document encoding: hex forces raw hex on the document side
    #[arg(short, long, default_value = "display")]
    mode: SerializedEncoding,

    /// Fixed byte width for BN, number and decimalString
    #[arg(short, long)]
    width: Option<usize>,

    /// Bech32 human-readable part (defaults to the configured hrp)
    #[arg(long)]
    hrp: Option<String>,

    /// Chain alias (defaults to the configured alias)
    #[arg(long)]
    alias: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

pub fn run(args: ConvertArgs, codec: &Serialization, direction: Direction) -> Result<()> {
    let out = convert(&args, codec, direction)?;
    println!("{}", out);
    Ok(())
}

fn convert(args: &ConvertArgs, codec: &Serialization, direction: Direction) -> Result<Value> {
    let hrp = args.hrp.as_deref().unwrap_or(&codec.config().hrp);
    let alias = args.alias.as_deref().unwrap_or(&codec.config().chain_alias);
    let from = Repr::from_parts(args.from, args.width, Some((hrp, alias)))?;
    let to = Repr::from_parts(args.to, args.width, Some((hrp, alias)))?;

    // Hex mode reads decode input as hex whatever --from says.
    let input_kind = match (direction, args.mode) {
        (Direction::Decode, SerializedEncoding::Hex) => SerializedType::Hex,
        _ => args.from,
    };
    let value = parse_input(&args.value, input_kind)?;

    let out = match direction {
        Direction::Encode => codec.encode(&value, args.mode, from, to),
        Direction::Decode => codec.decode(&value, args.mode, from, to),
    };
    out.with_context(|| {
        format!(
            "Failed to convert {:?} from {} to {}",
            args.value, args.from, args.to
        )
    })
}

/// Turn command-line text into the value shape `kind` expects.
fn parse_input(raw: &str, kind: SerializedType) -> Result<Value> {
    Ok(match kind {
        SerializedType::Buffer => {
            let digits = raw.strip_prefix("0x").unwrap_or(raw);
            Value::Bytes(hex::decode(digits).context("Buffer input must be hex")?)
        }
        SerializedType::Number => {
            Value::Number(raw.parse().context("number input must be an unsigned integer")?)
        }
        SerializedType::Bn => Value::Integer(
            raw.parse::<BigUint>()
                .context("BN input must be an unsigned decimal integer")?,
        ),
        _ => Value::Text(raw.to_string()),
    })
}
