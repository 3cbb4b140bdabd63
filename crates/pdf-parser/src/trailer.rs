use pdf_object::{ObjectVariant, trailer::Trailer};
use thiserror::Error;

use crate::{PdfParser, error::ParserError, traits::TrailerParser};

#[derive(Debug, PartialEq, Error)]
pub enum TrailerError {
    #[error("Failed to parse 'trailer' keyword: {source}")]
    FailedToParseTrailerKeyword {
        #[source]
        source: ParserError,
    },
    #[error("Failed to parse 'startxref' keyword: {source}")]
    FailedToParseStartXrefKeyword {
        #[source]
        source: ParserError,
    },
    #[error("Error while reading offset in trailer: {source}")]
    OffsetReadError {
        #[source]
        source: ParserError,
    },
    #[error("Missing EOL marker after trailer dictionary: {source}")]
    MissingEOLAfterDictionary {
        #[source]
        source: ParserError,
    },
    #[error("Failed to parse dictionary object in trailer: {source}")]
    FailedToParseDictionary {
        #[source]
        source: ParserError,
    },
    #[error("Missing dictionary object in trailer")]
    MissingDictionary,
}

impl TrailerParser for PdfParser<'_> {
    type ErrorType = TrailerError;

    /// Parses the PDF file trailer (PDF 1.7 §7.5.5): the `trailer` keyword, a
    /// dictionary (`/Size`, `/Root`, `/Prev`, `/Info`, `/ID`, ...), the
    /// `startxref` keyword, and the byte offset of the cross-reference
    /// section it precedes.
    ///
    /// ```text
    /// trailer
    /// << /Size 22 /Root 2 0 R /Info 1 0 R >>
    /// startxref
    /// 1879
    /// %%EOF
    /// ```
    fn parse_trailer(&mut self) -> Result<Trailer, Self::ErrorType> {
        const TRAILER_KEYWORD: &[u8] = b"trailer";
        const START_XREF_KEYWORD: &[u8] = b"startxref";

        self.read_keyword(TRAILER_KEYWORD)
            .map_err(|source| TrailerError::FailedToParseTrailerKeyword { source })?;

        let dictionary = match self.parse_object() {
            Ok(ObjectVariant::Dictionary(dict)) => dict,
            Ok(_) => return Err(TrailerError::MissingDictionary),
            Err(source) => return Err(TrailerError::FailedToParseDictionary { source }),
        };

        self.read_end_of_line_marker()
            .map_err(|source| TrailerError::MissingEOLAfterDictionary { source })?;

        self.read_keyword(START_XREF_KEYWORD)
            .map_err(|source| TrailerError::FailedToParseStartXrefKeyword { source })?;

        let offset = self
            .read_number::<u32>(true)
            .map_err(|source| TrailerError::OffsetReadError { source })?;

        Ok(Trailer::new(dictionary, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_valid_trailer() {
        let input = b"trailer\n<< /Size 22 /Root 1 0 R >>\nstartxref\n187\n%%EOF";
        let mut parser = PdfParser::from(input.as_slice());

        let trailer = parser.parse_trailer().unwrap();

        assert_eq!(trailer.dictionary.get_number("Size"), Some(22));
        assert_eq!(trailer.offset, 187);
    }

    #[test]
    fn missing_trailer_keyword_is_an_error() {
        let input = b"<< /Size 22 >>\nstartxref\n187\n%%EOF";
        let mut parser = PdfParser::from(input.as_slice());
        assert!(parser.parse_trailer().is_err());
    }
}
