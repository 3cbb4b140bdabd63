//! Sub-stream driver for nested Form XObjects (interpreter design §4.8).
//!
//! Interpreting a Form XObject is just interpreting its content stream bytes
//! with its own (merged) resources, the same as a page: this module exists
//! only to fix the intermediate sink a backend's `Do` handler records into,
//! so the result can be memoized and replayed. Caching the result on the
//! Form's own PDF object is the collaborator's responsibility (see
//! `pdf_page::PdfObjectCollaborator`); this function always interprets.

use std::cell::RefCell;
use std::rc::Rc;

use crate::diagnostics::NullDiagnosticSink;
use crate::error::PdfOperatorError;
use crate::interpreter::Interpreter;
use crate::recording_pdf_operator_backend::{RecordedOperation, RecordingBackend};

/// Interprets `bytes` (a Form XObject's content stream) to completion and
/// returns the resulting command sequence, unconditionally — no cache is
/// consulted here. Callers that want the once-only memoization described in
/// §4.8 should check their own cache slot first and only call this on a
/// miss (see `pdf_page::PdfObjectCollaborator::commands_or_interpret`).
pub fn interpret_sub_stream(bytes: &[u8]) -> Result<Rc<[RecordedOperation]>, PdfOperatorError> {
    let sink = Rc::new(RefCell::new(RecordingBackend::new()));
    let mut interpreter = Interpreter::new(bytes, &sink, Box::new(NullDiagnosticSink));
    interpreter.run_to_completion()?;
    let recorded = std::mem::take(&mut sink.borrow_mut().operations);
    Ok(Rc::from(recorded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interprets_a_form_stream_to_a_command_list() {
        let commands = interpret_sub_stream(b"1 0 0 1 0 0 cm 0 0 10 10 re f").unwrap();
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], RecordedOperation::ConcatMatrix { .. }));
        assert!(matches!(commands[1], RecordedOperation::Rectangle { .. }));
        assert!(matches!(
            commands[2],
            RecordedOperation::FillPathNonZeroWinding
        ));
    }

    #[test]
    fn repeated_interpretation_is_deterministic() {
        let bytes: &[u8] = b"q 1 0 0 RG 0 0 10 10 re S Q";
        let first = interpret_sub_stream(bytes).unwrap();
        let second = interpret_sub_stream(bytes).unwrap();
        assert_eq!(first, second);
    }
}
