use itertools::Itertools;
use log::{debug, info};
use serde_json::json;
use crate::app::utils::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, derive_more::Display)]
pub enum Op {
    Add, Sub, Mul, DivRem, Div
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    /// left operand p, a JSON list of [coeff, deg] pairs, e.g. '[[3, 3], ["-1/2", 0]]'
    pub lhs: String,

    /// right operand q
    pub rhs: String,

    #[arg(short, long, default_value = "text")]
    pub format: Format,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

pub fn dispatch(op: Op, args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let p = load_poly(&args.lhs)?;
    let q = load_poly(&args.rhs)?;

    info!("{op}: p = {p}, q = {q}");

    let res = match op {
        Op::Add => vec![("", &p + &q)],
        Op::Sub => vec![("", &p - &q)],
        Op::Mul => vec![("", &p * &q)],
        Op::DivRem => {
            let (q, r) = p.div_rem(&q)?;
            vec![("q", q), ("r", r)]
        },
        Op::Div => vec![("", p.div_exact(&q)?)],
    };

    debug!("nterms: {:?}", res.iter().map(|(_, p)| p.nterms()).collect_vec());

    render(&res, args.format)
}

// named results go one per line: "q: ...", or into a JSON object.
fn render(res: &[(&str, P)], format: Format) -> Result<String, Box<dyn std::error::Error>> {
    let out = match (format, res) {
        (Format::Text, [("", p)]) => p.to_string(),
        (Format::Text, _) => res.iter().map(|(k, p)| format!("{k}: {p}")).join("\n"),
        (Format::Json, [("", p)]) => serde_json::to_string(p)?,
        (Format::Json, _) => {
            let mut obj = serde_json::Map::new();
            for (k, p) in res {
                obj.insert(k.to_string(), json!(p));
            }
            serde_json::Value::Object(obj).to_string()
        }
    };
    Ok(out)
}
