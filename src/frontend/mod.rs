//! soltest frontend
//!
//! This module turns an IDL document into the typed model the rest of the pipeline reads:
//! - `idl`: instruction/account/seed/argument model
//! - `parser`: JSON → model, with load-time normalization
//! - `diagnostics`: error taxonomy shared by loading and generation

pub mod diagnostics;
pub mod idl;
pub mod parser;
