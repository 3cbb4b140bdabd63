use std::io::Read;

use flate2::bufread::ZlibDecoder;
use pdf_object::dictionary::Dictionary;
use pdf_tokenizer::{PdfToken, error::TokenizerError};
use thiserror::Error;

use crate::{PdfParser, error::ParserError, traits::StreamParser};

/// Represents an error that can occur while parsing a stream object's raw bytes.
#[derive(Debug, PartialEq, Error)]
pub enum StreamParsingError {
    #[error("Failed to parse 'stream' keyword: {source}")]
    InvalidStreamKeyword {
        #[source]
        source: ParserError,
    },
    #[error("Failed to parse 'endstream' keyword: {source}")]
    InvalidEndStreamKeyword {
        #[source]
        source: ParserError,
    },
    #[error("Stream dictionary missing /Length entry")]
    MissingLength,
    #[error("Unsupported stream filter: {0}")]
    UnsupportedFilter(String),
    #[error("Error while decoding stream: {0}")]
    DecompressionError(String),
    #[error("Tokenizer error: {0}")]
    TokenizerError(#[from] TokenizerError),
    #[error("Parser error: {0}")]
    ParserError(#[from] ParserError),
}

impl StreamParser for PdfParser<'_> {
    type ErrorType = StreamParsingError;

    /// Parses a PDF stream object's raw byte payload, given its already-parsed
    /// dictionary (PDF 1.7 §7.3.8).
    ///
    /// Expects `stream<EOL>...data...<EOL>endstream<EOL>`. `/Length` gives the
    /// exact byte count of the raw (still-encoded) data; `/Filter`, when
    /// present, is applied to produce the decoded bytes this function returns.
    /// Only `FlateDecode` is decompressed here; `DCTDecode` (JPEG) is handed
    /// back encoded for an image collaborator to decode, matching the scope
    /// boundary in interpreter design §1 (image decoding is a collaborator
    /// concern).
    fn parse_stream(&mut self, dictionary: &Dictionary) -> Result<Vec<u8>, Self::ErrorType> {
        const STREAM_START: &[u8] = b"stream";
        const STREAM_END: &[u8] = b"endstream";

        self.read_keyword(STREAM_START)
            .map_err(|source| StreamParsingError::InvalidStreamKeyword { source })?;

        let length = dictionary
            .get_number("Length")
            .ok_or(StreamParsingError::MissingLength)?;

        let decode = dictionary.get_string("Filter");

        let stream_data = self
            .tokenizer
            .read_excactly(usize::try_from(length).unwrap_or(0))?
            .to_vec();

        if let Some(PdfToken::CarriageReturn) = self.tokenizer.peek() {
            let _ = self.tokenizer.read();
        }
        self.read_end_of_line_marker()?;

        self.read_keyword(STREAM_END)
            .map_err(|source| StreamParsingError::InvalidEndStreamKeyword { source })?;

        let Some(decode) = decode else {
            return Ok(stream_data);
        };

        match decode {
            "FlateDecode" => {
                let mut decoder = ZlibDecoder::new(stream_data.as_slice());
                let mut decoded = Vec::new();
                decoder
                    .read_to_end(&mut decoded)
                    .map_err(|err| StreamParsingError::DecompressionError(err.to_string()))?;
                Ok(decoded)
            }
            "DCTDecode" => Ok(stream_data),
            other => Err(StreamParsingError::UnsupportedFilter(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pdf_object::ObjectVariant;

    use super::*;

    fn dictionary_with_length(length: i64) -> Dictionary {
        Dictionary::new(
            vec![("Length".to_string(), Box::new(ObjectVariant::Integer(length)))]
                .into_iter()
                .collect(),
        )
    }

    #[test]
    fn reads_uncompressed_stream_bytes() {
        let dictionary = dictionary_with_length(11);
        let mut parser = PdfParser::from(b"stream\nHello World\nendstream".as_slice());
        assert_eq!(parser.parse_stream(&dictionary).unwrap(), b"Hello World");
    }

    #[test]
    fn missing_stream_keyword_is_an_error() {
        let dictionary = dictionary_with_length(11);
        let mut parser = PdfParser::from(b"strm\nHello World\nendstream".as_slice());
        assert!(parser.parse_stream(&dictionary).is_err());
    }

    #[test]
    fn missing_endstream_keyword_is_an_error() {
        let dictionary = dictionary_with_length(11);
        let mut parser = PdfParser::from(b"stream\nHello World\nendstrm".as_slice());
        assert!(parser.parse_stream(&dictionary).is_err());
    }

    #[test]
    fn missing_length_entry_is_an_error() {
        let dictionary = Dictionary::new(BTreeMap::new());
        let mut parser = PdfParser::from(b"stream\nHello World\nendstream".as_slice());
        assert!(parser.parse_stream(&dictionary).is_err());
    }

    #[test]
    fn unsupported_filter_is_an_error() {
        let dictionary = Dictionary::new(
            vec![
                ("Length".to_string(), Box::new(ObjectVariant::Integer(11))),
                (
                    "Filter".to_string(),
                    Box::new(ObjectVariant::Name("RunLengthDecode".to_string())),
                ),
            ]
            .into_iter()
            .collect(),
        );
        let mut parser = PdfParser::from(b"stream\nHello World\nendstream".as_slice());
        assert!(parser.parse_stream(&dictionary).is_err());
    }
}
