//! Parsing and dispatch for PDF content stream operators.
//!
//! A content stream is a sequence of operands followed by a one- or
//! two-character operator keyword, e.g. `1 0 0 1 72 712 cm`. This crate
//! tokenizes that sequence, groups operands under their operator, and
//! dispatches each resulting [`pdf_operator::PdfOperatorVariant`] to a
//! [`pdf_operator_backend::PdfOperatorBackend`] implementation, which is free
//! to interpret the operators however it needs to (rendering, text
//! extraction, recording for tests, and so on).

extern crate alloc;

pub mod clipping_path_operators;
pub mod color_operators;
pub mod compatibility_operators;
pub mod diagnostics;
pub mod error;
pub mod form;
pub mod graphics_state_operators;
pub mod interpreter;
pub mod marked_content_operators;
pub mod operation_map;
pub mod operator_tokenizer;
pub mod path_operators;
pub mod path_paint_operators;
pub mod pdf_operator;
pub mod pdf_operator_backend;
pub mod recording_pdf_operator_backend;
pub mod shadings_operators;
pub mod text_object_operators;
pub mod text_positioning_operators;
pub mod text_showing_operators;
pub mod text_state_operators;
pub mod type3_font_operators;
pub mod xobject_and_image_operators;

/// One element of a `TJ` array operand: either a string to show or a
/// positioning adjustment (in thousandths of text space units) to apply
/// before the next glyph.
#[derive(Debug, Clone, PartialEq)]
pub enum TextElement {
    Text { value: String },
    Adjustment { amount: f32 },
}
