use std::rc::Rc;

use pdf_object::{ObjectVariant, indirect_object::IndirectObject, stream::StreamObject};
use pdf_tokenizer::{PdfToken, error::TokenizerError};
use thiserror::Error;

use crate::{
    PdfParser,
    error::ParserError,
    stream::StreamParsingError,
    traits::{IndirectObjectParser, StreamParser},
};

/// Represents an error that can occur while parsing an indirect object or an object reference.
#[derive(Error, Debug, PartialEq)]
pub enum IndirectObjectError {
    #[error("Error while parsing object within indirect object: {source}")]
    InvalidObject {
        #[source]
        source: ParserError,
    },
    #[error("Stream object found without a preceding dictionary")]
    StreamObjectWithoutDictionary,
    #[error("Stream parsing error: {0}")]
    StreamError(#[from] StreamParsingError),
    #[error("Failed to parse 'endobj' keyword: {source}")]
    InvalidEndObjKeyword {
        #[source]
        source: ParserError,
    },
    #[error("Tokenizer error: {0}")]
    TokenizerError(#[from] TokenizerError),
    #[error("Parser error: {0}")]
    ParserError(#[from] ParserError),
}

impl IndirectObjectParser for PdfParser<'_> {
    type ErrorType = IndirectObjectError;

    /// Parses an indirect object (`N G obj ... endobj`) or an object reference
    /// (`N G R`) from the current position in the input stream (PDF 1.7 §7.3.10).
    ///
    /// Returns `Ok(None)` without consuming input past the failed probe when the
    /// bytes at the cursor don't match either shape (e.g. a plain number);
    /// callers should rewind and fall back to [`crate::PdfParser::parse_number`]
    /// in that case, the same way content-stream operands that merely look like
    /// the start of a reference are read back as plain numbers.
    ///
    /// ## Example inputs
    ///
    /// ```text
    /// 15 0 obj
    /// << /Type /Catalog /Pages 1 0 R >>
    /// endobj
    /// ```
    ///
    /// ```text
    /// 15 0 R
    /// ```
    fn parse_indirect_object(&mut self) -> Result<Option<ObjectVariant>, Self::ErrorType> {
        const OBJ_KEYWORD: &[u8] = b"obj";
        const ENDOBJ_KEYWORD: &[u8] = b"endobj";

        let Ok(object_number) = self.read_number::<i32>(true) else {
            return Ok(None);
        };

        let Ok(generation_number) = self.read_number::<i32>(true) else {
            return Ok(None);
        };

        if let Some(PdfToken::Alphabetic(b'R')) = self.tokenizer.peek() {
            match self.tokenizer.data().get(1) {
                Some(b) if Self::is_pdf_delimiter(*b) => {
                    self.tokenizer.read();
                    return Ok(Some(ObjectVariant::Reference(object_number)));
                }
                None => {
                    self.tokenizer.read();
                    return Ok(Some(ObjectVariant::Reference(object_number)));
                }
                Some(_) => {}
            }
        }

        if self.read_keyword(OBJ_KEYWORD).is_err() {
            return Ok(None);
        }

        let object = self
            .parse_object()
            .map_err(|source| IndirectObjectError::InvalidObject { source })?;

        self.skip_whitespace();

        if let Some(PdfToken::Alphabetic(b's')) = self.tokenizer.peek() {
            let ObjectVariant::Dictionary(dictionary) = &object else {
                return Err(IndirectObjectError::StreamObjectWithoutDictionary);
            };
            let stream = self.parse_stream(dictionary)?;

            self.read_keyword(ENDOBJ_KEYWORD)
                .map_err(|source| IndirectObjectError::InvalidEndObjKeyword { source })?;

            return Ok(Some(ObjectVariant::Stream(Rc::new(StreamObject::new(
                object_number,
                generation_number,
                Rc::clone(dictionary),
                stream,
            )))));
        }

        self.read_keyword(ENDOBJ_KEYWORD)
            .map_err(|source| IndirectObjectError::InvalidEndObjKeyword { source })?;

        Ok(Some(ObjectVariant::IndirectObject(Rc::new(
            IndirectObject::new(object_number, generation_number, Some(object)),
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_an_indirect_object() {
        let input = b"0 1 obj\n(HELLO)\nendobj\n";
        let mut parser = PdfParser::from(input.as_slice());

        let Some(ObjectVariant::IndirectObject(indirect_object)) =
            parser.parse_indirect_object().unwrap()
        else {
            panic!("expected an IndirectObject variant");
        };

        assert_eq!(indirect_object.object_number, 0);
        assert_eq!(indirect_object.generation_number, 1);
        assert_eq!(
            indirect_object.object,
            Some(ObjectVariant::LiteralString("HELLO".to_string()))
        );
    }

    #[test]
    fn parses_an_object_reference() {
        let mut parser = PdfParser::from(b"4 0 R".as_slice());
        assert_eq!(
            parser.parse_indirect_object().unwrap(),
            Some(ObjectVariant::Reference(4))
        );
    }

    #[test]
    fn a_bare_number_is_not_an_indirect_object() {
        let mut parser = PdfParser::from(b"42".as_slice());
        assert_eq!(parser.parse_indirect_object().unwrap(), None);
    }
}
