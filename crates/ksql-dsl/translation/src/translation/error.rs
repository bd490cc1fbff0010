//! Errors for clause translation.

use ksql_dsl_expression::expression::ast::{BinaryOperator, MemberName};

/// Which side of a join a source argument belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinSide {
    Outer,
    Inner,
}

/// A fatal translation error.
///
/// Shape ambiguities that still permit syntactically valid output degrade
/// to sentinel text inside the clause instead and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unsupported operator: {0:?}")]
    UnsupportedOperator(BinaryOperator),
    #[error("unable to resolve the {0} element type from the join arguments")]
    UnresolvedJoinSourceType(JoinSide),
    #[error("unable to resolve an alias for projected member '{0}'")]
    UnresolvedProjectionAlias(MemberName),
}

impl std::fmt::Display for JoinSide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            JoinSide::Outer => write!(f, "outer"),
            JoinSide::Inner => write!(f, "inner"),
        }
    }
}
