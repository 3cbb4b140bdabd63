//! The watchable driver loop.
//!
//! [`Interpreter`] turns the raw bytes of a content stream into calls on a
//! [`PdfOperatorBackend`] ("the sink"), one operator at a time. Unlike
//! [`crate::pdf_operator::PdfOperatorVariant::from`], which parses an entire
//! stream eagerly and returns a `Vec`, the interpreter is externally
//! steppable: each call to [`Interpreter::iterate`] advances by exactly one
//! operator and reports whether more work remains.
//!
//! The sink is reached only through a weak reference. Every step upgrades it
//! on entry and drops the resulting strong handle again on exit, so the sink
//! can be reclaimed by its owner between steps; if the upgrade fails the
//! interpreter halts with [`RunState::Stopped`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use pdf_object::ObjectVariant;
use pdf_object::dictionary::Dictionary;
use pdf_parser::PdfParser;
use pdf_tokenizer::PdfToken;

use crate::{
    diagnostics::{DiagnosticLevel, DiagnosticSink},
    error::PdfOperatorError,
    operation_map::get_operation_descriptor,
    operator_tokenizer::OperatorReader,
    pdf_operator::Operands,
    pdf_operator_backend::PdfOperatorBackend,
};

/// The outcome of a single interpreter step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Another step is needed to finish the stream.
    Running,
    /// The stream is exhausted.
    Completed,
    /// The sink was dropped; the interpreter will not progress further.
    Stopped,
}

/// Operator keywords some encoders emit as a single mushed-together
/// alphabetic run, expanded here into the zero-arity operators they stand
/// for. Each constituent is dispatched in order as if it had appeared on its
/// own.
const MUSHED_OPERATORS: &[(&str, &[&str])] =
    &[("QBT", &["Q", "BT"]), ("Qq", &["Q", "q"]), ("qBT", &["q", "BT"])];

/// Abbreviated inline image dictionary keys and the full names they stand
/// for (PDF 1.7 Table 93).
const INLINE_IMAGE_KEY_ABBREVIATIONS: &[(&str, &str)] = &[
    ("BPC", "BitsPerComponent"),
    ("CS", "ColorSpace"),
    ("D", "Decode"),
    ("DP", "DecodeParms"),
    ("F", "Filter"),
    ("H", "Height"),
    ("IM", "ImageMask"),
    ("W", "Width"),
    ("I", "Interpolate"),
];

fn expand_inline_image_key(key: &str) -> &str {
    INLINE_IMAGE_KEY_ABBREVIATIONS
        .iter()
        .find(|(short, _)| *short == key)
        .map_or(key, |(_, full)| *full)
}

/// Drives a content stream's operators into a [`PdfOperatorBackend`].
pub struct Interpreter<'a, B: PdfOperatorBackend> {
    parser: PdfParser<'a>,
    sink: Weak<RefCell<B>>,
    diagnostics: Box<dyn DiagnosticSink>,
    operands: Vec<ObjectVariant>,
    compat_depth: u32,
    done: bool,
}

impl<'a, B: PdfOperatorBackend> Interpreter<'a, B>
where
    B::ErrorType: std::error::Error + 'static,
{
    /// Builds an interpreter over `bytes`, holding only a weak reference to
    /// `sink`.
    pub fn new(bytes: &'a [u8], sink: &Rc<RefCell<B>>, diagnostics: Box<dyn DiagnosticSink>) -> Self {
        Self::from_weak(bytes, Rc::downgrade(sink), diagnostics)
    }

    /// Builds an interpreter from an already-weak handle to the sink; useful
    /// when a sub-interpreter is constructed from within a step that only
    /// has a weak reference of its own.
    pub fn from_weak(
        bytes: &'a [u8],
        sink: Weak<RefCell<B>>,
        diagnostics: Box<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            parser: PdfParser::from(bytes),
            sink,
            diagnostics,
            operands: Vec::new(),
            compat_depth: 0,
            done: false,
        }
    }

    /// Advances by exactly one operator, or detects end-of-stream /
    /// sink-loss. Errors outside a `BX…EX` bracket are fatal and propagate;
    /// the interpreter should not be stepped again after an `Err`.
    pub fn iterate(&mut self) -> Result<RunState, PdfOperatorError> {
        if self.done {
            return Ok(RunState::Completed);
        }

        let Some(sink) = self.sink.upgrade() else {
            self.done = true;
            return Ok(RunState::Stopped);
        };

        let result = self.step(&sink);
        // Dropping the strong handle here, rather than holding it for the
        // interpreter's lifetime, is what lets the owner reclaim the sink
        // between steps.
        drop(sink);
        result
    }

    fn step(&mut self, sink: &Rc<RefCell<B>>) -> Result<RunState, PdfOperatorError> {
        loop {
            self.parser.skip_whitespace_and_comments()?;

            let Some(token) = self.parser.tokenizer.peek() else {
                self.done = true;
                return Ok(RunState::Completed);
            };

            if let PdfToken::Alphabetic(_) = token {
                let name = self.parser.read_operation_name()?;
                if name.is_empty() {
                    self.done = true;
                    return Ok(RunState::Completed);
                }

                if name == "BI" {
                    self.handle_inline_image(sink)?;
                } else {
                    self.dispatch(&name, sink)?;
                }
                self.operands.clear();
                return Ok(RunState::Running);
            }

            let value = self.parser.parse_object()?;
            self.operands.push(value);
        }
    }

    fn dispatch(&mut self, name: &str, sink: &Rc<RefCell<B>>) -> Result<(), PdfOperatorError> {
        if name == "BX" {
            self.compat_depth += 1;
        } else if name == "EX" {
            self.compat_depth = self.compat_depth.saturating_sub(1);
        }

        if let Some(constituents) = MUSHED_OPERATORS
            .iter()
            .find(|(mushed, _)| *mushed == name)
            .map(|(_, parts)| *parts)
        {
            for part in constituents {
                self.dispatch_single(part, &[], sink)?;
            }
            return Ok(());
        }

        // Operands are collected by the caller (`step`); take them so the
        // recursive mushed-operator path above never sees stale state.
        let operands = std::mem::take(&mut self.operands);
        let result = self.dispatch_single(name, &operands, sink);
        self.operands = operands;
        result
    }

    fn dispatch_single(
        &mut self,
        name: &str,
        operands: &[ObjectVariant],
        sink: &Rc<RefCell<B>>,
    ) -> Result<(), PdfOperatorError> {
        let Some(descriptor) = get_operation_descriptor(name) else {
            return self.tolerate(PdfOperatorError::UnknownOperator(name.to_string()));
        };

        if let Some(expected) = descriptor.operand_count
            && expected != operands.len()
        {
            return self.tolerate(PdfOperatorError::IncorrectOperandCount {
                op_name: descriptor.name,
                expected,
                got: operands.len(),
            });
        }

        let mut view = Operands::new(operands);
        let operator = match (descriptor.parser)(&mut view) {
            Ok(operator) => operator,
            Err(err) => return self.tolerate(err),
        };

        if !view.is_empty() {
            self.diagnostics.log(
                DiagnosticLevel::Warn,
                &format!("operator '{name}' left unconsumed operands on the stack"),
            );
        }

        let outcome = operator.call(&mut *sink.borrow_mut());
        if let Err(err) = outcome {
            let wrapped = PdfOperatorError::Collaborator(Box::new(err));
            // `sh` tolerates a failing shading collaborator unconditionally;
            // every other operator only does so inside BX...EX.
            return if name == "sh" {
                self.diagnostics.log(DiagnosticLevel::Warn, &wrapped.to_string());
                Ok(())
            } else {
                self.tolerate(wrapped)
            };
        }
        Ok(())
    }

    /// Scans and interprets a `BI … ID … EI` inline image, which cannot go
    /// through the normal operand/operator dispatch path because the bytes
    /// between `ID` and `EI` are raw image data, not content stream tokens.
    fn handle_inline_image(&mut self, sink: &Rc<RefCell<B>>) -> Result<(), PdfOperatorError> {
        let mut entries: BTreeMap<String, Box<ObjectVariant>> = BTreeMap::new();

        loop {
            self.parser.skip_whitespace_and_comments()?;

            if let Some(PdfToken::Alphabetic(_)) = self.parser.tokenizer.peek() {
                let keyword = self.parser.read_operation_name()?;
                if keyword == "ID" {
                    break;
                }
                return Err(PdfOperatorError::MalformedInlineImage(format!(
                    "expected 'ID', found operator '{keyword}'"
                )));
            }

            let key = match self.parser.parse_object()? {
                ObjectVariant::Name(name) => name,
                other => {
                    return Err(PdfOperatorError::MalformedInlineImage(format!(
                        "expected a dictionary key name, found {}",
                        other.name()
                    )));
                }
            };
            self.parser.skip_whitespace_and_comments()?;
            let value = self.parser.parse_object()?;
            entries.insert(expand_inline_image_key(&key).to_string(), Box::new(value));
        }

        let data = self.read_inline_image_data()?;

        let is_mask = matches!(
            entries.get("ImageMask").map(|v| v.as_ref()),
            Some(ObjectVariant::Boolean(true))
        );
        if is_mask && !entries.contains_key("Decode") {
            entries.insert(
                "Decode".to_string(),
                Box::new(ObjectVariant::Array(vec![
                    ObjectVariant::Integer(0),
                    ObjectVariant::Integer(1),
                ])),
            );
        }

        let dict = Rc::new(Dictionary::new(entries));
        if let Err(err) = sink.borrow_mut().draw_inline_image(&dict, &data) {
            let wrapped = PdfOperatorError::Collaborator(Box::new(err));
            return self.tolerate(wrapped);
        }
        Ok(())
    }

    /// Reads the raw image bytes following `ID`: one optional CR then one
    /// optional LF-or-space is consumed first, then bytes are scanned until
    /// a whitespace byte immediately followed by `EI` is found. Leaves the
    /// parser positioned just past the `EI` marker.
    fn read_inline_image_data(&mut self) -> Result<Vec<u8>, PdfOperatorError> {
        if let Some(PdfToken::CarriageReturn) = self.parser.tokenizer.peek() {
            self.parser.tokenizer.read();
        }
        match self.parser.tokenizer.peek() {
            Some(PdfToken::NewLine) | Some(PdfToken::Space) => {
                self.parser.tokenizer.read();
            }
            _ => {}
        }

        let remaining = self.parser.tokenizer.data();

        // A zero-length image: `EI` follows immediately, with no data and no
        // separating whitespace byte (the ID/data separator already
        // consumed above was the only one present).
        let found = if remaining.len() >= 2 && remaining[0] == b'E' && remaining[1] == b'I' {
            Some((0, 2))
        } else {
            let mut found = None;
            let mut i = 0;
            while i + 2 < remaining.len() {
                let b = remaining[i];
                if Self::is_inline_image_whitespace(b)
                    && remaining[i + 1] == b'E'
                    && remaining[i + 2] == b'I'
                    && (i + 3 == remaining.len()
                        || Self::is_inline_image_whitespace(remaining[i + 3]))
                {
                    found = Some((i, 3));
                    break;
                }
                i += 1;
            }
            found
        };

        let Some((end, marker_len)) = found else {
            return Err(PdfOperatorError::MalformedInlineImage(
                "no 'EI' boundary found before end of stream".to_string(),
            ));
        };

        let data = remaining[..end].to_vec();
        let consumed = end + marker_len;
        let _ = self.parser.tokenizer.read_excactly(consumed);
        Ok(data)
    }

    const fn is_inline_image_whitespace(b: u8) -> bool {
        matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0C' | b'\0')
    }

    /// Inside a `BX…EX` bracket, downgrades `err` to a logged warning and
    /// continues; outside one, returns it unchanged.
    fn tolerate(&mut self, err: PdfOperatorError) -> Result<(), PdfOperatorError> {
        if self.compat_depth > 0 {
            self.diagnostics.log(DiagnosticLevel::Warn, &err.to_string());
            Ok(())
        } else {
            Err(err)
        }
    }

    /// Steps until the stream completes or the sink is lost, then flushes
    /// the backend via [`PdfOperatorBackend::finish`].
    pub fn run_to_completion(&mut self) -> Result<RunState, PdfOperatorError> {
        loop {
            match self.iterate()? {
                RunState::Running => continue,
                state @ (RunState::Completed | RunState::Stopped) => {
                    self.cleanup();
                    return Ok(state);
                }
            }
        }
    }

    /// Flushes the backend's buffered state (e.g. a pending text run).
    /// Harmless to call if the sink has already been dropped.
    pub fn cleanup(&mut self) {
        if let Some(sink) = self.sink.upgrade() {
            let _ = sink.borrow_mut().finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NullDiagnosticSink;
    use crate::recording_pdf_operator_backend::{RecordedOperation, RecordingBackend};

    fn run(bytes: &[u8]) -> (Vec<RecordedOperation>, RunState) {
        let sink = Rc::new(RefCell::new(RecordingBackend::default()));
        let mut interpreter = Interpreter::new(bytes, &sink, Box::new(NullDiagnosticSink));
        let state = interpreter.run_to_completion().unwrap();
        let recorded = sink.borrow().operations.clone();
        (recorded, state)
    }

    #[test]
    fn steps_one_operator_at_a_time() {
        let sink = Rc::new(RefCell::new(RecordingBackend::default()));
        let mut interpreter =
            Interpreter::new(b"1 0 0 1 0 0 cm q Q", &sink, Box::new(NullDiagnosticSink));

        assert_eq!(interpreter.iterate().unwrap(), RunState::Running);
        assert_eq!(sink.borrow().operations.len(), 1);
        assert_eq!(interpreter.iterate().unwrap(), RunState::Running);
        assert_eq!(interpreter.iterate().unwrap(), RunState::Running);
        assert_eq!(interpreter.iterate().unwrap(), RunState::Completed);
    }

    #[test]
    fn unknown_operator_is_fatal_outside_compatibility_section() {
        let sink = Rc::new(RefCell::new(RecordingBackend::default()));
        let mut interpreter = Interpreter::new(b"/Nonexistent Dummy", &sink, Box::new(NullDiagnosticSink));
        assert!(interpreter.run_to_completion().is_err());
    }

    #[test]
    fn unknown_operator_is_tolerated_inside_compatibility_section() {
        let (recorded, state) = run(b"BX 1 2 foo EX q");
        assert_eq!(state, RunState::Completed);
        // BX, EX, and q all execute; `foo` is skipped after logging a warning.
        assert_eq!(recorded.len(), 3);
    }

    #[test]
    fn sink_loss_halts_iteration() {
        let sink = Rc::new(RefCell::new(RecordingBackend::default()));
        let mut interpreter = Interpreter::new(b"q Q q Q", &sink, Box::new(NullDiagnosticSink));
        drop(sink);
        assert_eq!(interpreter.iterate().unwrap(), RunState::Stopped);
    }

    #[test]
    fn mushed_operators_expand_to_their_constituents() {
        let (recorded, state) = run(b"q QBT ET");
        assert_eq!(state, RunState::Completed);
        // q, then QBT -> Q, BT, then ET: four operations total.
        assert_eq!(recorded.len(), 4);
    }

    #[test]
    fn inline_image_dictionary_and_data_are_recorded() {
        let (recorded, state) =
            run(b"q BI /W 2 /H 2 /BPC 8 /CS /G /F /AHx ID \xff\x00\xff\x00 EI Q");
        assert_eq!(state, RunState::Completed);
        assert_eq!(recorded.len(), 3);

        let RecordedOperation::DrawInlineImage { dict, data } = &recorded[1] else {
            panic!("expected a DrawInlineImage operation, got {:?}", recorded[1]);
        };
        assert_eq!(dict.get_number("Width"), Some(2));
        assert_eq!(dict.get_number("Height"), Some(2));
        assert_eq!(dict.get_number("BitsPerComponent"), Some(8));
        assert_eq!(dict.get_string("ColorSpace"), Some("G"));
        assert_eq!(dict.get_string("Filter"), Some("AHx"));
        assert_eq!(data.as_slice(), b"\xff\x00\xff\x00");
    }

    #[test]
    fn inline_image_mask_without_decode_gets_default_decode_array() {
        let (recorded, _) = run(b"BI /IM true /W 1 /H 1 ID \x00 EI");
        let RecordedOperation::DrawInlineImage { dict, .. } = &recorded[0] else {
            panic!("expected a DrawInlineImage operation, got {:?}", recorded[0]);
        };
        let decode = dict.get_array("Decode").unwrap();
        assert_eq!(decode.len(), 2);
    }

    #[test]
    fn inline_image_with_no_data_consumes_ei_immediately() {
        let (recorded, state) = run(b"BI /W 0 /H 0 ID EI");
        assert_eq!(state, RunState::Completed);
        let RecordedOperation::DrawInlineImage { data, .. } = &recorded[0] else {
            panic!("expected a DrawInlineImage operation, got {:?}", recorded[0]);
        };
        assert!(data.is_empty());
    }

    #[test]
    fn inline_image_missing_ei_is_an_error() {
        let sink = Rc::new(RefCell::new(RecordingBackend::default()));
        let mut interpreter =
            Interpreter::new(b"BI /W 1 /H 1 ID \x00\x00\x00", &sink, Box::new(NullDiagnosticSink));
        assert!(interpreter.run_to_completion().is_err());
    }
}
