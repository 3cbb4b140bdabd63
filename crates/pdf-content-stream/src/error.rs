use pdf_object::error::ObjectError;
use pdf_parser::error::ParserError;
use pdf_tokenizer::error::TokenizerError;
use thiserror::Error;

/// Errors raised while parsing and dispatching content stream operators.
#[derive(Error, Debug)]
pub enum PdfOperatorError {
    #[error("Unimplemented operation: {0}")]
    UnimplementedOperation(&'static str),

    #[error("Unknown operator: '{0}'")]
    UnknownOperator(String),

    // Error for when an operand is expected but not found (e.g., empty stack)
    #[error("Missing operand: expected a {expected_type}")]
    MissingOperand { expected_type: &'static str },

    // Error for when an operand has an unexpected type
    #[error("Invalid operand type: expected {expected_type}, found {found_type}")]
    InvalidOperandType {
        expected_type: &'static str,
        found_type: &'static str,
    },

    /// Error converting a PDF value to a number.
    #[error("Failed to convert a PDF value to number of type '{expected_type}': {source}")]
    OperandNumericConversionError {
        expected_type: &'static str,
        #[source]
        source: ObjectError,
    },

    // Error for when the number of operands is incorrect for an operator
    #[error("Incorrect operand count for operation '{op_name}': expected {expected}, got {got}")]
    IncorrectOperandCount {
        op_name: &'static str,
        expected: usize,
        got: usize,
    },

    // Errors from underlying pdf_tokenizer
    #[error("Tokenizer error: {0}")]
    Tokenizer(#[from] TokenizerError),

    #[error("Parser error: {0}")]
    Parser(#[from] ParserError),

    #[error("Empty text")]
    EmptyText,

    /// An operand was present and of the right type, but held a value the
    /// operator cannot accept (e.g. an out-of-range text rendering mode).
    #[error("Invalid operand value: expected {expected}, found '{value}'")]
    InvalidOperandValue {
        expected: &'static str,
        value: String,
    },

    /// A named resource (font, XObject, color space, pattern, shading, ...)
    /// could not be found in the current resource dictionary.
    #[error("Resource not found: '{0}'")]
    ResourceNotFound(String),

    /// The command sink the interpreter was driving has been dropped.
    #[error("Command sink was dropped before the content stream finished")]
    SinkLost,

    /// An error surfaced by a collaborator (resource resolver, font, image,
    /// color space, pattern or shading backend).
    #[error("Collaborator error: {0}")]
    Collaborator(#[source] Box<dyn std::error::Error>),

    /// The `BI … ID … EI` inline image sequence was malformed (bad
    /// dictionary entry, or no `EI` boundary found before the stream ended).
    #[error("Malformed inline image: {0}")]
    MalformedInlineImage(String),
}
