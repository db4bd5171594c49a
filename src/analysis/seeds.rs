//! Seed processing: PDA seed lists → address-derivation expressions.
//!
//! Expressions are structured ([`SeedExpr`]); the emitter decides how they look in TypeScript. Arg-bound seeds are
//! resolved against an [`ArgEnv`], an ordered stack of argument lists searched front to back.

use crate::frontend::idl::{Arg, ArgType, Seed};

/// One positional component of a PDA derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedExpr {
    /// Literal bytes
    Bytes(Vec<u8>),
    /// The caller's own address, as bytes
    CallerKey,
    /// An integer variable encoded as 8 little-endian bytes
    IntLe64(String),
    /// A string variable encoded as raw bytes
    Utf8(String),
}

/// Result of processing a seed list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedDerivation {
    /// Expressions in seed order
    pub expressions: Vec<SeedExpr>,
    /// Whether at least one seed was resolved to an argument
    pub uses_args: bool,
    /// Paths of arg-bound seeds that named no argument in scope; they contribute no expression
    pub unresolved: Vec<String>,
}

impl SeedDerivation {
    /// A derivation with no argument dependency yields one address for the whole suite.
    pub fn is_scope_stable(&self) -> bool {
        !self.uses_args
    }
}

/// Arguments visible to a derivation, searched in order.
///
/// The first frame is normally the instruction's own argument list; later frames hold arguments bound by setup
/// calls that run earlier in the same test.
#[derive(Debug, Clone, Default)]
pub struct ArgEnv<'a> {
    frames: Vec<&'a [Arg]>,
}

impl<'a> ArgEnv<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self { frames: vec![args] }
    }

    /// Append a frame searched after every existing one.
    pub fn with_frame(mut self, args: &'a [Arg]) -> Self {
        self.frames.push(args);
        self
    }

    /// Find the argument a seed path refers to (exact name or underscore alias).
    pub fn resolve(&self, path: &str) -> Option<&'a Arg> {
        self.frames
            .iter()
            .copied()
            .flat_map(|frame| frame.iter())
            .find(|arg| arg.answers_to(path))
    }
}

/// Process seeds against a plain argument list.
///
/// ## Parameters
/// - `seeds`: the PDA's ordered seed list.
/// - `args`: arguments in scope.
///
/// ## Returns
/// - ([`SeedDerivation`]): ordered expressions and whether the derivation depends on arguments.
pub fn process_seeds(seeds: &[Seed], args: &[Arg]) -> SeedDerivation {
    process_seeds_in(seeds, &ArgEnv::new(args))
}

/// Process seeds against an [`ArgEnv`].
///
/// ## Notes
/// - Const seeds become [`SeedExpr::Bytes`]; account seeds become [`SeedExpr::CallerKey`].
/// - A resolved arg seed always sets `uses_args`, even when its type has no byte encoding (only `Int64` and
///   `String` produce an expression).
/// - An unresolved arg seed contributes nothing and is recorded in `unresolved`.
pub fn process_seeds_in(seeds: &[Seed], env: &ArgEnv<'_>) -> SeedDerivation {
    let mut out = SeedDerivation::default();

    for seed in seeds {
        match seed {
            Seed::Const(bytes) => out.expressions.push(SeedExpr::Bytes(bytes.clone())),
            Seed::Account { .. } => out.expressions.push(SeedExpr::CallerKey),
            Seed::Arg { path } => {
                let Some(arg) = env.resolve(path) else {
                    out.unresolved.push(path.clone());
                    continue;
                };
                let var = arg.var_name().to_string();
                match arg.ty {
                    ArgType::Int64 => out.expressions.push(SeedExpr::IntLe64(var)),
                    ArgType::String => out.expressions.push(SeedExpr::Utf8(var)),
                    ArgType::Other(_) => {}
                }
                out.uses_args = true;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> Vec<Arg> {
        vec![
            Arg::new("_poll_id", ArgType::Int64),
            Arg::new("title", ArgType::String),
            Arg::new("flag", ArgType::Other("bool".into())),
        ]
    }

    #[test]
    fn test_const_and_account_seeds_are_stable() {
        let seeds = vec![Seed::Const(vec![1, 2]), Seed::Account { path: "owner".into() }];
        let out = process_seeds(&seeds, &[]);
        assert_eq!(out.expressions, vec![SeedExpr::Bytes(vec![1, 2]), SeedExpr::CallerKey]);
        assert!(out.is_scope_stable());
        assert!(out.unresolved.is_empty());
    }

    #[test]
    fn test_arg_seeds_use_stripped_variable_names_in_order() {
        let seeds = vec![
            Seed::Arg { path: "title".into() },
            Seed::Const(vec![7]),
            Seed::Arg { path: "poll_id".into() },
        ];
        let out = process_seeds(&seeds, &args());
        assert_eq!(
            out.expressions,
            vec![
                SeedExpr::Utf8("title".into()),
                SeedExpr::Bytes(vec![7]),
                SeedExpr::IntLe64("poll_id".into()),
            ]
        );
        assert!(out.uses_args);
    }

    #[test]
    fn test_other_typed_arg_seed_sets_uses_args_without_expression() {
        let out = process_seeds(&[Seed::Arg { path: "flag".into() }], &args());
        assert!(out.expressions.is_empty());
        assert!(out.uses_args);
    }

    #[test]
    fn test_unresolved_seed_is_dropped_and_recorded() {
        let seeds = vec![Seed::Const(vec![9]), Seed::Arg { path: "missing".into() }];
        let out = process_seeds(&seeds, &args());
        assert_eq!(out.expressions, vec![SeedExpr::Bytes(vec![9])]);
        assert!(!out.uses_args);
        assert_eq!(out.unresolved, vec!["missing".to_string()]);
    }

    #[test]
    fn test_env_searches_later_frames() {
        let own: Vec<Arg> = vec![Arg::new("candidate", ArgType::String)];
        let setup: Vec<Arg> = vec![Arg::new("poll_id", ArgType::Int64)];
        let env = ArgEnv::new(&own).with_frame(&setup);
        let seeds = vec![Seed::Arg { path: "poll_id".into() }];
        let out = process_seeds_in(&seeds, &env);
        assert_eq!(out.expressions, vec![SeedExpr::IntLe64("poll_id".into())]);
        assert!(out.uses_args);
    }

    #[test]
    fn test_env_prefers_earlier_frames() {
        let own: Vec<Arg> = vec![Arg::new("id", ArgType::String)];
        let setup: Vec<Arg> = vec![Arg::new("id", ArgType::Int64)];
        let env = ArgEnv::new(&own).with_frame(&setup);
        assert_eq!(env.resolve("id").map(|a| &a.ty), Some(&ArgType::String));
    }
}
