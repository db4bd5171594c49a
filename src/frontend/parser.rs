//! IDL JSON → typed model.
//!
//! Deserialization goes through private `Raw*` mirrors of the Anchor JSON layout, then [`parse_idl`] lowers them
//! into [`crate::frontend::idl`] types. Lowering is where the document's looser shapes get normalized:
//!
//! - `isMut`/`isSigner` (legacy layout) are accepted as `writable`/`signer`
//! - composite account groups are flattened in declaration order
//! - argument types collapse to [`ArgType`]
//! - constant seeds written as strings become their UTF-8 bytes

use serde::Deserialize;
use serde_json::Value;

use super::diagnostics::GenerateError;
use super::idl::{Account, Arg, ArgType, Idl, Instruction, Pda, Seed};

#[derive(Debug, Deserialize)]
struct RawIdl {
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    metadata: Option<RawMetadata>,
    #[serde(default)]
    instructions: Vec<RawInstruction>,
}

#[derive(Debug, Deserialize)]
struct RawMetadata {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawInstruction {
    name: String,
    #[serde(default)]
    accounts: Vec<RawAccount>,
    #[serde(default)]
    args: Vec<RawArg>,
}

#[derive(Debug, Deserialize)]
struct RawAccount {
    name: String,
    #[serde(default, alias = "isMut")]
    writable: bool,
    #[serde(default, alias = "isSigner")]
    signer: bool,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    pda: Option<RawPda>,
    /// Present on composite account groups
    #[serde(default)]
    accounts: Option<Vec<RawAccount>>,
}

#[derive(Debug, Deserialize)]
struct RawPda {
    #[serde(default)]
    seeds: Vec<RawSeed>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum RawSeed {
    Const { value: RawSeedValue },
    Account { path: String },
    Arg { path: String },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSeedValue {
    Bytes(Vec<u8>),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct RawArg {
    name: String,
    #[serde(rename = "type")]
    ty: Value,
}

/// Parse an IDL JSON document.
///
/// ## Parameters
/// - `source`: the document text.
/// - `origin`: where the text came from (a path, or a label for in-memory input); used in error messages.
///
/// ## Errors
/// - [`GenerateError::InvalidIdl`] if the text is not JSON or does not match the IDL layout.
#[tracing::instrument(skip_all, fields(origin = origin, source_len = source.len()))]
pub fn parse_idl(source: &str, origin: &str) -> Result<Idl, GenerateError> {
    let raw: RawIdl = serde_json::from_str(source).map_err(|source| GenerateError::InvalidIdl {
        origin: origin.to_string(),
        source,
    })?;

    let instructions: Vec<Instruction> = raw.instructions.into_iter().map(lower_instruction).collect();
    tracing::debug!(instructions = instructions.len(), "parsed IDL");

    Ok(Idl {
        name: raw.metadata.and_then(|m| m.name).or(raw.name),
        address: raw.address,
        instructions,
    })
}

fn lower_instruction(raw: RawInstruction) -> Instruction {
    let mut accounts = Vec::new();
    flatten_accounts(raw.accounts, &mut accounts);
    Instruction {
        name: raw.name,
        accounts,
        args: raw.args.into_iter().map(lower_arg).collect(),
    }
}

fn flatten_accounts(raw: Vec<RawAccount>, out: &mut Vec<Account>) {
    for account in raw {
        if let Some(nested) = account.accounts {
            flatten_accounts(nested, out);
            continue;
        }
        out.push(Account {
            name: account.name,
            writable: account.writable,
            signer: account.signer,
            address: account.address,
            pda: account.pda.map(|pda| Pda {
                seeds: pda.seeds.into_iter().map(lower_seed).collect(),
            }),
        });
    }
}

fn lower_seed(raw: RawSeed) -> Seed {
    match raw {
        RawSeed::Const {
            value: RawSeedValue::Bytes(bytes),
        } => Seed::Const(bytes),
        RawSeed::Const {
            value: RawSeedValue::Text(text),
        } => Seed::Const(text.into_bytes()),
        RawSeed::Account { path } => Seed::Account { path },
        RawSeed::Arg { path } => Seed::Arg { path },
    }
}

fn lower_arg(raw: RawArg) -> Arg {
    Arg {
        name: raw.name,
        ty: arg_type_from_json(&raw.ty),
    }
}

/// Collapse an IDL type (a string tag or a JSON object) into an [`ArgType`].
pub fn arg_type_from_json(value: &Value) -> ArgType {
    match value {
        Value::String(tag) => match tag.as_str() {
            "u64" | "i64" => ArgType::Int64,
            "string" => ArgType::String,
            other => ArgType::Other(other.to_string()),
        },
        // `{ "kind": "u64" }` is how some generators spell scalars
        Value::Object(map) => match map.get("kind") {
            Some(kind @ Value::String(_)) => arg_type_from_json(kind),
            _ => ArgType::Other(value.to_string()),
        },
        other => ArgType::Other(other.to_string()),
    }
}
