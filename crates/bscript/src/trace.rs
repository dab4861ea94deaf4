//! Step-by-step execution tracing. The engine pushes a read-only snapshot
//! of the data stack to the attached sink after every processed token,
//! live or suppressed.

use crate::value::Value;

/// Receives `(token, stack snapshot)` once per processed token. The
/// snapshot is ordered top-to-bottom.
pub trait TraceSink {
    fn on_step(&mut self, value: &Value, stack: &[Vec<u8>]);
}

/// Accumulates formatted trace lines of the form
/// `Step  N: <token>             | Stack: [top, .., bottom]`.
#[derive(Debug, Default)]
pub struct Recorder {
    entries: Vec<String>,
    steps: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn step_count(&self) -> usize {
        self.steps
    }
}

impl TraceSink for Recorder {
    fn on_step(&mut self, value: &Value, stack: &[Vec<u8>]) {
        self.steps += 1;
        self.entries.push(format!(
            "Step {:2}: {:<20} | Stack: {}",
            self.steps,
            value.to_string(),
            format_stack(stack)
        ));
    }
}

fn format_stack(stack: &[Vec<u8>]) -> String {
    let entries: Vec<String> = stack.iter().map(hex::encode).collect();
    format!("[{}]", entries.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcode::Opcode;

    #[test]
    fn records_one_line_per_step() {
        let mut rec = Recorder::new();
        rec.on_step(&Value::Data(vec![0x03]), &[vec![0x03]]);
        rec.on_step(&Value::Op(Opcode::Dup), &[vec![0x03], vec![0x03]]);
        assert_eq!(rec.step_count(), 2);
        assert_eq!(rec.entries().len(), 2);
        assert!(rec.entries()[0].contains("DATA[03]"));
        assert!(rec.entries()[1].contains("OP_DUP"));
        assert!(rec.entries()[1].contains("[03, 03]"));
    }

    #[test]
    fn empty_stack_renders_as_brackets() {
        let mut rec = Recorder::new();
        rec.on_step(&Value::Op(Opcode::Drop), &[]);
        assert!(rec.entries()[0].ends_with("Stack: []"));
    }
}
