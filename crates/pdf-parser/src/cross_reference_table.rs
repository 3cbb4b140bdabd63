use pdf_object::cross_reference_table::{
    CrossReferenceEntry, CrossReferenceStatus, CrossReferenceTable,
};
use pdf_tokenizer::{PdfToken, error::TokenizerError};
use thiserror::Error;

use crate::{PdfParser, error::ParserError, traits::CrossReferenceTableParser};

/// Represents an error that can occur while parsing a cross-reference table.
#[derive(Debug, PartialEq, Error)]
pub enum CrossReferenceTableError {
    #[error("Invalid cross-reference status character: '{0}'")]
    InvalidCrossReferenceStatus(char),
    #[error("Missing entry count in cross-reference table")]
    MissingTableEntryCount,
    #[error("Missing object number in cross-reference entry")]
    MissingObjectNumber,
    #[error("Missing generation number in cross-reference entry")]
    MissingGenerationNumber,
    #[error("Missing status in cross-reference entry")]
    MissingStatus,
    #[error("Missing one or more table entries. Expected {0} entries, but found {1}")]
    MissingTableEntries(usize, usize),
    #[error("Tokenizer error: {0}")]
    TokenizerError(#[from] TokenizerError),
    #[error("Parser error: {0}")]
    ParserError(#[from] ParserError),
}

impl CrossReferenceTableParser for PdfParser<'_> {
    type ErrorType = CrossReferenceTableError;

    /// Parses a traditional cross-reference table (PDF 1.7 §7.5.4): the
    /// `xref` keyword followed by one or more subsections, each a
    /// `start_obj count` header and `count` fixed-width 20-byte entries of
    /// the form `nnnnnnnnnn nnnnn n\r\n` (byte offset, generation, `n`/`f`
    /// status).
    ///
    /// ```text
    /// xref
    /// 0 3
    /// 0000000000 65535 f
    /// 0000000017 00000 n
    /// 0000000081 00000 n
    /// ```
    fn parse_cross_reference_table(&mut self) -> Result<CrossReferenceTable, Self::ErrorType> {
        const XREF_KEYWORD: &[u8] = b"xref";

        self.read_keyword(XREF_KEYWORD)?;

        let mut total_number_of_entries = 0_usize;
        let mut first_object_number = None;
        let mut entries = Vec::new();

        loop {
            if let Some(PdfToken::Number(_)) = self.tokenizer.peek() {
                let first_object_number_in_section: i32 = self.read_number(true)?;
                if first_object_number.is_none() {
                    first_object_number = Some(first_object_number_in_section);
                }
            }

            let number_of_objects: u32 = self
                .read_number(true)
                .map_err(|_| CrossReferenceTableError::MissingTableEntryCount)?;

            for _ in 0..number_of_objects {
                total_number_of_entries += 1;

                let byte_offset: u32 = self
                    .read_number(true)
                    .map_err(|_| CrossReferenceTableError::MissingObjectNumber)?;
                let generation_number: u16 = self
                    .read_number(true)
                    .map_err(|_| CrossReferenceTableError::MissingGenerationNumber)?;

                let Some(PdfToken::Alphabetic(status_byte)) = self.tokenizer.read() else {
                    return Err(CrossReferenceTableError::MissingStatus);
                };
                let status = CrossReferenceStatus::from_byte(status_byte).ok_or(
                    CrossReferenceTableError::InvalidCrossReferenceStatus(status_byte as char),
                )?;
                entries.push(CrossReferenceEntry::new(
                    byte_offset,
                    generation_number,
                    status,
                ));
                self.skip_whitespace();
            }

            if !matches!(self.tokenizer.peek(), Some(PdfToken::Number(_))) {
                if entries.len() != total_number_of_entries {
                    return Err(CrossReferenceTableError::MissingTableEntries(
                        total_number_of_entries,
                        entries.len(),
                    ));
                }
                break;
            }
        }

        Ok(CrossReferenceTable::new(
            u32::try_from(first_object_number.unwrap_or(0)).unwrap_or(0),
            u32::try_from(total_number_of_entries).unwrap_or(0),
            entries,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_single_section() {
        let data = b"xref\n0 2\n0000000000 65535 f\n0000000017 00000 n\n";
        let mut parser = PdfParser::from(data.as_slice());

        let table = parser.parse_cross_reference_table().unwrap();

        assert_eq!(table.first_object_number, 0);
        assert_eq!(table.number_of_entries, 2);
        assert_eq!(table.entries[0].byte_offset, 0);
        assert_eq!(table.entries[0].generation_number, 65535);
        assert_eq!(table.entries[0].status, CrossReferenceStatus::Free);
        assert_eq!(table.entries[1].byte_offset, 17);
        assert_eq!(table.entries[1].status, CrossReferenceStatus::Normal);
    }

    #[test]
    fn missing_entries_is_an_error() {
        let data = b"xref\n0 2\n0000000000 65535 f\n";
        let mut parser = PdfParser::from(data.as_slice());
        assert!(parser.parse_cross_reference_table().is_err());
    }

    #[test]
    fn an_empty_section_is_valid() {
        let data = b"xref\n0 0\n";
        let mut parser = PdfParser::from(data.as_slice());
        let table = parser.parse_cross_reference_table().unwrap();
        assert_eq!(table.number_of_entries, 0);
        assert!(table.entries.is_empty());
    }

    #[test]
    fn parses_multiple_sections() {
        let data = b"xref\n0 2\n0000000000 65535 f\n0000000017 00000 n\n4 2\n0000001000 00000 n\n0000001100 00000 n\n";
        let mut parser = PdfParser::from(data.as_slice());
        let table = parser.parse_cross_reference_table().unwrap();
        assert_eq!(table.first_object_number, 0);
        assert_eq!(table.number_of_entries, 4);
    }
}
