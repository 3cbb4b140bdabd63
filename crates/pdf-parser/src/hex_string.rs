use pdf_tokenizer::{PdfToken, error::TokenizerError};
use thiserror::Error;

use crate::{PdfParser, traits::HexStringParser};

/// Represents an error that can occur while parsing a hex string object.
#[derive(Debug, PartialEq, Error)]
pub enum HexStringError {
    #[error("Tokenizer error: {0}")]
    TokenizerError(#[from] TokenizerError),
}

impl HexStringParser for PdfParser<'_> {
    type ErrorType = HexStringError;

    /// Parses a hexadecimal string object from the current position in the input stream.
    ///
    /// According to PDF 1.7 Specification (Section 7.3.4.3), a hex string
    /// begins with `<` and ends with `>`, holding hex digits (case-insensitive)
    /// in between. Per interpreter design §4.1, any byte in between that is
    /// neither a hex digit nor whitespace is skipped silently rather than
    /// rejected, and an odd trailing nibble is padded with a zero low nibble
    /// (Appendix H, Implementer Note 5 for Section 7.3.4.3). No character
    /// transcoding is performed: the result is the raw byte payload.
    fn parse_hex_string(&mut self) -> Result<Vec<u8>, Self::ErrorType> {
        self.tokenizer.expect(PdfToken::LeftAngleBracket)?;

        let hex_string = self.tokenizer.read_while_u8(|c| c != b'>');

        let mut digits = Vec::new();
        for &b in hex_string {
            if b.is_ascii_hexdigit() {
                digits.push(b);
            }
            // Whitespace and any other stray byte are skipped silently.
        }

        if digits.len() % 2 != 0 {
            digits.push(b'0');
        }

        self.tokenizer.expect(PdfToken::RightAngleBracket)?;

        let bytes = digits
            .chunks(2)
            .map(|chunk| {
                let hex = std::str::from_utf8(chunk).unwrap_or("00");
                u8::from_str_radix(hex, 16).unwrap_or(0)
            })
            .collect::<Vec<u8>>();

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_digits_into_raw_bytes() {
        let mut parser = PdfParser::from(b"<48656C6C6F20576F726C64>".as_slice());
        let result = parser.parse_hex_string().unwrap();
        assert_eq!(result, b"Hello World");
    }

    #[test]
    fn ignores_embedded_whitespace() {
        for input in [
            b"<48656C6C6F  >".as_slice(),
            b"<48656C6C6F\n>".as_slice(),
            b"<48656C6C6F\t>".as_slice(),
            b"<48656C6C6F\r>".as_slice(),
            b"<48656C6C6F\x0C>".as_slice(),
        ] {
            let mut parser = PdfParser::from(input);
            assert_eq!(parser.parse_hex_string().unwrap(), b"Hello");
        }
    }

    #[test]
    fn odd_trailing_nibble_is_padded_with_a_zero_low_nibble() {
        let mut parser = PdfParser::from(b"<4>".as_slice());
        assert_eq!(parser.parse_hex_string().unwrap(), vec![0x40]);
    }

    #[test]
    fn non_hex_bytes_are_skipped_rather_than_rejected() {
        let mut parser = PdfParser::from(b"<48-65!6C6C6F>".as_slice());
        assert_eq!(parser.parse_hex_string().unwrap(), b"Hello");
    }

    #[test]
    fn missing_closing_angle_bracket_is_an_error() {
        let mut parser = PdfParser::from(b"<48656C6C6F".as_slice());
        assert!(parser.parse_hex_string().is_err());
    }

    #[test]
    fn missing_opening_angle_bracket_is_an_error() {
        let mut parser = PdfParser::from(b"48656C6C6F>".as_slice());
        assert!(parser.parse_hex_string().is_err());
    }
}
