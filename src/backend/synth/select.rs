//! Instruction selection.
//!
//! Lower scores are tested first. Creates, updates and deletes are preferred; every account that the generator
//! cannot wire meaningfully (not a signer, not a PDA, no address in the IDL) pushes an instruction back.
//! A `system_program` without an address still counts as opaque here; only wiring treats it as fixed.

use soltest_core::heuristics::{SELECTION_CREATE_MARKERS, SELECTION_DELETE_MARKERS, UPDATE_MARKERS, mentions};

use crate::frontend::idl::Instruction;

const CREATE_BONUS: i32 = -10;
const UPDATE_BONUS: i32 = -5;
const DELETE_BONUS: i32 = -3;
const OPAQUE_ACCOUNT_PENALTY: i32 = 5;

/// Score an instruction for selection.
pub fn selection_score(instruction: &Instruction) -> i32 {
    let name = instruction.name.as_str();
    let mut score = 0;

    if mentions(name, SELECTION_CREATE_MARKERS) {
        score += CREATE_BONUS;
    }
    if mentions(name, UPDATE_MARKERS) {
        score += UPDATE_BONUS;
    }
    if mentions(name, SELECTION_DELETE_MARKERS) {
        score += DELETE_BONUS;
    }

    let opaque = instruction
        .accounts
        .iter()
        .filter(|account| !account.signer && !account.is_pda() && account.address.is_none())
        .count();
    score + OPAQUE_ACCOUNT_PENALTY * opaque as i32
}

/// Pick up to `limit` instructions, lowest score first; ties keep program order.
#[tracing::instrument(skip_all, fields(total = all.len(), limit))]
pub fn select_instructions(all: &[Instruction], limit: usize) -> Vec<&Instruction> {
    let mut scored: Vec<(i32, &Instruction)> = all.iter().map(|ix| (selection_score(ix), ix)).collect();
    scored.sort_by_key(|(score, _)| *score);

    let selected: Vec<&Instruction> = scored.into_iter().take(limit).map(|(_, ix)| ix).collect();
    tracing::debug!(
        selected = ?selected.iter().map(|ix| ix.name.as_str()).collect::<Vec<_>>(),
        "selected instructions"
    );
    selected
}
