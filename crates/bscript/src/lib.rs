//! bscript - validator for a Bitcoin-style stack scripting language
//!
//! Goals:
//! - Lex a whitespace-delimited textual script into typed values
//! - Evaluate them on a stack machine with nested IF/NOTIF/ELSE/ENDIF
//! - Report a truthy result, or the precise reason the script is invalid
//! - No real cryptography: hashing and signature checks go through
//!   injected provider traits, with deterministic mocks supplied
//!
//! Execution is single-threaded and bounded by script length; one engine
//! evaluates one script per `execute` call and resets its stacks on entry.

pub mod encoding;
pub mod engine;
pub mod error;
pub mod lexer;
pub mod opcode;
pub mod ops;
pub mod providers;
pub mod trace;
pub mod value;

pub use encoding::{bytes_equal, bytes_to_int, int_to_bytes, is_truthy};
pub use engine::{Engine, ScriptResult};
pub use error::{Result, ScriptError};
pub use lexer::tokenize;
pub use opcode::Opcode;
pub use providers::{HashKind, HashProvider, MockHasher, MockSigRegistry, SigVerifier};
pub use trace::{Recorder, TraceSink};
pub use value::Value;
