use anyhow::{Context, Result};
use clap::Subcommand;
use hotel_core::encode;
use hotel_core::theory;
use serde::Serialize;
use std::io::Write;

#[derive(Subcommand, Debug)]
pub enum Method {
    /// Room prime(bus)^seat for a bus passenger
    PrimePower {
        #[arg(long)]
        bus: u32,
        #[arg(long)]
        seat: u32,
    },
    /// Room 2^seat * 3^bus
    Factorization {
        #[arg(long)]
        bus: u32,
        #[arg(long)]
        seat: u32,
    },
    /// Digits of bus and seat interleaved after padding to groups of three
    Interleave {
        #[arg(long)]
        bus: String,
        #[arg(long)]
        seat: String,
    },
    /// Room T(bus+seat-1) + seat
    Triangular {
        #[arg(long)]
        bus: u32,
        #[arg(long)]
        seat: u32,
    },
    /// Room 2^seat * 3^bus * 5^ferry
    HigherInfinity {
        #[arg(long)]
        ferry: u32,
        #[arg(long)]
        bus: u32,
        #[arg(long)]
        seat: u32,
    },
    /// Hyphen-separated address encoded as binary groups
    Binary {
        #[arg(long)]
        address: String,
    },
    /// Print the theory screen
    Theory,
}

/// Result of a one-shot computation. Rooms are strings so JSON readers do
/// not lose precision.
#[derive(Debug, Serialize)]
pub struct Assignment {
    pub method: &'static str,
    pub input: serde_json::Value,
    pub room: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bits: Option<String>,
}

fn exponent(value: u32, name: &str) -> Result<u32> {
    encode::check_exponent(value).with_context(|| format!("--{name}"))
}

pub fn assign(method: &Method) -> Result<Option<Assignment>> {
    let assignment = match method {
        Method::PrimePower { bus, seat } => Assignment {
            method: "prime-power",
            input: serde_json::json!({ "bus": bus, "seat": seat }),
            room: encode::passenger_room(*bus, *seat)
                .context("prime power method")?
                .to_string(),
            bits: None,
        },
        Method::Factorization { bus, seat } => Assignment {
            method: "factorization",
            input: serde_json::json!({ "bus": bus, "seat": seat }),
            room: encode::factorization_room(exponent(*bus, "bus")?, exponent(*seat, "seat")?)
                .to_string(),
            bits: None,
        },
        Method::Interleave { bus, seat } => Assignment {
            method: "interleave",
            input: serde_json::json!({ "bus": bus, "seat": seat }),
            room: encode::interleave_digits(bus, seat).context("interleaving method")?,
            bits: None,
        },
        Method::Triangular { bus, seat } => Assignment {
            method: "triangular",
            input: serde_json::json!({ "bus": bus, "seat": seat }),
            room: encode::passenger_triangular_room(*bus, *seat).to_string(),
            bits: None,
        },
        Method::HigherInfinity { ferry, bus, seat } => Assignment {
            method: "higher-infinity",
            input: serde_json::json!({ "ferry": ferry, "bus": bus, "seat": seat }),
            room: encode::higher_infinity_room(
                exponent(*ferry, "ferry")?,
                exponent(*bus, "bus")?,
                exponent(*seat, "seat")?,
            )
            .to_string(),
            bits: None,
        },
        Method::Binary { address } => {
            let parsed = encode::parse_address(address)
                .with_context(|| format!("binary encoding of '{address}'"))?;
            Assignment {
                method: "binary",
                input: serde_json::json!({ "address": parsed }),
                room: encode::binary_encoding(&parsed).to_string(),
                bits: Some(encode::binary_string(&parsed)),
            }
        }
        Method::Theory => return Ok(None),
    };
    Ok(Some(assignment))
}

pub fn run(method: &Method, json: bool, out: &mut dyn Write) -> Result<()> {
    match assign(method)? {
        None => write!(out, "{}", theory::theory_text())?,
        Some(a) if json => writeln!(out, "{}", serde_json::to_string_pretty(&a)?)?,
        Some(a) => writeln!(out, "{}", a.room)?,
    }
    Ok(())
}
