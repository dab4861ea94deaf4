//! The stack machine. Owns the data stack and the conditional-nesting
//! stack, walks a token sequence, and dispatches live tokens to the
//! opcode catalog.
//!
//! A token is processed under one of two states:
//! - **live** — the conditional stack is empty or every frame is true;
//! - **suppressed** — some enclosing frame is false. Only OP_IF/OP_NOTIF/
//!   OP_ELSE/OP_ENDIF are interpreted (to track nesting); everything else
//!   is skipped.
//!
//! Every execution-time failure is folded into the returned
//! [`ScriptResult`]; `execute` itself never returns `Err`.

use crate::encoding::is_truthy;
use crate::error::{Result, ScriptError};
use crate::opcode::Opcode;
use crate::ops::{self, Stack};
use crate::providers::{HashKind, HashProvider, MockHasher, MockSigRegistry, SigVerifier};
use crate::trace::TraceSink;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Outcome of one `execute` call. `final_stack` is ordered top-to-bottom
/// and reflects the stack as of success or as of the failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptResult {
    pub success: bool,
    pub message: String,
    pub final_stack: Vec<Vec<u8>>,
    /// The failure kind, when `success` is false.
    #[serde(skip)]
    pub error: Option<ScriptError>,
}

pub struct Engine<H: HashProvider, V: SigVerifier> {
    hasher: H,
    verifier: V,
    stack: Stack,
    cond: Vec<bool>,
}

impl Engine<MockHasher, MockSigRegistry> {
    /// Engine wired to the placeholder hash and signature providers.
    pub fn with_mocks() -> Self {
        Engine::new(MockHasher, MockSigRegistry::new())
    }
}

impl<H: HashProvider, V: SigVerifier> Engine<H, V> {
    pub fn new(hasher: H, verifier: V) -> Self {
        Self {
            hasher,
            verifier,
            stack: Stack::new(),
            cond: Vec::new(),
        }
    }

    /// Mutable access to the signature provider, for registering fixtures.
    pub fn verifier_mut(&mut self) -> &mut V {
        &mut self.verifier
    }

    /// Evaluate a token sequence to a truthy result or a failure.
    pub fn execute(&mut self, tokens: &[Value]) -> ScriptResult {
        self.run(tokens, None)
    }

    /// As [`execute`](Self::execute), notifying `sink` once per token.
    pub fn execute_with_trace(
        &mut self,
        tokens: &[Value],
        sink: &mut dyn TraceSink,
    ) -> ScriptResult {
        self.run(tokens, Some(sink))
    }

    fn run(&mut self, tokens: &[Value], mut sink: Option<&mut dyn TraceSink>) -> ScriptResult {
        self.stack.clear();
        self.cond.clear();

        for token in tokens {
            let live = self.cond.iter().all(|&f| f);
            let stepped = if live {
                self.step_live(token)
            } else {
                self.step_suppressed(token)
            };
            if let Err(err) = stepped {
                return self.fail(err);
            }
            if let Some(s) = sink.as_deref_mut() {
                s.on_step(token, &self.snapshot());
            }
        }

        if !self.cond.is_empty() {
            return self.fail(ScriptError::UnclosedConditional(self.cond.len()));
        }
        match self.stack.last() {
            None => self.fail(ScriptError::EmptyStack),
            Some(top) if !is_truthy(top) => self.fail(ScriptError::FalseResult),
            Some(_) => ScriptResult {
                success: true,
                message: "execution successful".into(),
                final_stack: self.snapshot(),
                error: None,
            },
        }
    }

    fn step_live(&mut self, token: &Value) -> Result<()> {
        match token {
            Value::Data(bytes) => {
                self.stack.push(bytes.clone());
                Ok(())
            }
            Value::Op(op) => self.dispatch(*op),
        }
    }

    /// Inside a false branch only the nesting structure is tracked. A
    /// nested OP_IF/OP_NOTIF opens as false without consuming a condition.
    fn step_suppressed(&mut self, token: &Value) -> Result<()> {
        match token {
            Value::Op(Opcode::If) | Value::Op(Opcode::NotIf) => {
                self.cond.push(false);
                Ok(())
            }
            Value::Op(Opcode::Else) => self.flip_else(),
            Value::Op(Opcode::EndIf) => self.close_endif(),
            _ => Ok(()),
        }
    }

    fn dispatch(&mut self, op: Opcode) -> Result<()> {
        use Opcode::*;
        match op {
            Zero | Num(_) => {
                ops::push_literal(&mut self.stack, op);
                Ok(())
            }
            Pushdata1 | Pushdata2 => Err(ScriptError::UnsupportedOpcode(op)),

            Dup => ops::stack::dup(&mut self.stack),
            Drop => ops::stack::drop(&mut self.stack),
            Swap => ops::stack::swap(&mut self.stack),
            Over => ops::stack::over(&mut self.stack),

            Equal => ops::logic::equal(&mut self.stack),
            EqualVerify => ops::logic::equal_verify(&mut self.stack),
            Not => ops::logic::not(&mut self.stack),
            BoolAnd => ops::logic::bool_and(&mut self.stack),
            BoolOr => ops::logic::bool_or(&mut self.stack),

            Add => ops::arith::add(&mut self.stack),
            Sub => ops::arith::sub(&mut self.stack),
            NumEqualVerify => ops::arith::num_equal_verify(&mut self.stack),
            LessThan | GreaterThan | LessThanOrEqual | GreaterThanOrEqual => {
                ops::arith::compare(&mut self.stack, op)
            }

            If => {
                let cond = self.pop_condition(If)?;
                self.cond.push(cond);
                Ok(())
            }
            NotIf => {
                let cond = self.pop_condition(NotIf)?;
                self.cond.push(!cond);
                Ok(())
            }
            Else => self.flip_else(),
            EndIf => self.close_endif(),
            Verify => {
                let top = self
                    .stack
                    .pop()
                    .ok_or(ScriptError::InsufficientOperands { op: Verify, needed: 1 })?;
                if !is_truthy(&top) {
                    return Err(ScriptError::VerifyFailed(Verify));
                }
                Ok(())
            }
            Return => Err(ScriptError::ExplicitReturn),

            Sha256 => ops::crypto::hash(&mut self.stack, HashKind::Sha256, &self.hasher),
            Hash160 => ops::crypto::hash(&mut self.stack, HashKind::Hash160, &self.hasher),
            Hash256 => ops::crypto::hash(&mut self.stack, HashKind::Hash256, &self.hasher),

            CheckSig => ops::sig::check_sig(&mut self.stack, &self.verifier),
            CheckSigVerify => ops::sig::check_sig_verify(&mut self.stack, &self.verifier),
            CheckMultiSig => ops::sig::check_multi_sig(&mut self.stack, &self.verifier),
            CheckMultiSigVerify => {
                ops::sig::check_multi_sig_verify(&mut self.stack, &self.verifier)
            }
        }
    }

    fn pop_condition(&mut self, op: Opcode) -> Result<bool> {
        let top = self
            .stack
            .pop()
            .ok_or(ScriptError::InsufficientOperands { op, needed: 1 })?;
        Ok(is_truthy(&top))
    }

    /// OP_ELSE flips the innermost frame, but only when every ancestor
    /// frame is true; under a suppressed ancestor the frame stays false.
    fn flip_else(&mut self) -> Result<()> {
        let top = self.cond.pop().ok_or(ScriptError::UnbalancedElse)?;
        let ancestors_live = self.cond.iter().all(|&f| f);
        self.cond.push(if ancestors_live { !top } else { top });
        Ok(())
    }

    fn close_endif(&mut self) -> Result<()> {
        self.cond.pop().ok_or(ScriptError::UnbalancedEndif)?;
        Ok(())
    }

    /// Top-to-bottom copy of the data stack.
    fn snapshot(&self) -> Vec<Vec<u8>> {
        self.stack.iter().rev().cloned().collect()
    }

    fn fail(&self, err: ScriptError) -> ScriptResult {
        ScriptResult {
            success: false,
            message: err.to_string(),
            final_stack: self.snapshot(),
            error: Some(err),
        }
    }
}
