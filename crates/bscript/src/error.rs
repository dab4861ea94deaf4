use crate::opcode::Opcode;
use thiserror::Error;

/// Everything that can go wrong while tokenizing or evaluating a script.
///
/// Execution-time kinds never escape [`Engine::execute`](crate::Engine::execute)
/// as `Err`; they are folded into the returned [`ScriptResult`](crate::ScriptResult).
/// Only `UnrecognizedToken` reaches callers directly, from `tokenize`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unrecognized token: {0}")]
    UnrecognizedToken(String),
    #[error("{0}: unsupported opcode")]
    UnsupportedOpcode(Opcode),
    #[error("{op}: needs at least {needed} stack element(s)")]
    InsufficientOperands { op: Opcode, needed: usize },
    #[error("{0}: verification failed")]
    VerifyFailed(Opcode),
    #[error("OP_RETURN: script terminated")]
    ExplicitReturn,
    #[error("OP_ELSE without a matching OP_IF")]
    UnbalancedElse,
    #[error("OP_ENDIF without a matching OP_IF")]
    UnbalancedEndif,
    #[error("{0} conditional frame(s) left open at end of script")]
    UnclosedConditional(usize),
    #[error("stack empty at end of script")]
    EmptyStack,
    #[error("top of stack is false at end of script")]
    FalseResult,
}

pub type Result<T> = std::result::Result<T, ScriptError>;
