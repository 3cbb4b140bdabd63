use crate::{
    TextElement,
    error::PdfOperatorError,
    pdf_operator::{Operands, PdfOperator, PdfOperatorVariant},
    pdf_operator_backend::PdfOperatorBackend,
};

/// Shows a text string. (`Tj`)
#[derive(Debug, Clone, PartialEq)]
pub struct ShowText {
    /// The text string to be shown, encoded according to the font's encoding.
    text: String,
}

impl ShowText {
    pub fn new(text: String) -> Self {
        Self { text }
    }
}

impl PdfOperator for ShowText {
    const NAME: &'static str = "Tj";

    const OPERAND_COUNT: Option<usize> = Some(1);

    fn read(operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        let text = operands.get_str()?;
        Ok(PdfOperatorVariant::ShowText(Self::new(text)))
    }

    fn call<T: PdfOperatorBackend>(&self, backend: &mut T) -> Result<(), T::ErrorType> {
        backend.show_text(self.text.as_bytes())
    }
}

/// Moves to the next line, using the current leading, and shows a text
/// string. Equivalent to `T*` followed by `Tj`. (`'`)
#[derive(Debug, Clone, PartialEq)]
pub struct MoveNextLineShowText {
    text: String,
}

impl MoveNextLineShowText {
    pub fn new(text: String) -> Self {
        Self { text }
    }
}

impl PdfOperator for MoveNextLineShowText {
    const NAME: &'static str = "'";

    const OPERAND_COUNT: Option<usize> = Some(1);

    fn read(operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        let text = operands.get_str()?;
        Ok(PdfOperatorVariant::MoveNextLineShowText(Self::new(text)))
    }

    fn call<T: PdfOperatorBackend>(&self, backend: &mut T) -> Result<(), T::ErrorType> {
        backend.move_to_next_line_and_show_text(self.text.as_bytes())
    }
}

/// Sets the word and character spacing, moves to the next line, and shows a
/// text string. Equivalent to `aw Tw ac Tc string '`. (`"`)
#[derive(Debug, Clone, PartialEq)]
pub struct SetSpacingMoveShowText {
    word_spacing: f32,
    char_spacing: f32,
    text: String,
}

impl SetSpacingMoveShowText {
    pub fn new(word_spacing: f32, char_spacing: f32, text: String) -> Self {
        Self {
            word_spacing,
            char_spacing,
            text,
        }
    }
}

impl PdfOperator for SetSpacingMoveShowText {
    const NAME: &'static str = "\"";

    const OPERAND_COUNT: Option<usize> = Some(3);

    fn read(operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        let word_spacing = operands.get_f32()?;
        let char_spacing = operands.get_f32()?;
        let text = operands.get_str()?;
        Ok(PdfOperatorVariant::SetSpacingMoveShowText(Self::new(
            word_spacing,
            char_spacing,
            text,
        )))
    }

    fn call<T: PdfOperatorBackend>(&self, backend: &mut T) -> Result<(), T::ErrorType> {
        backend.set_spacing_and_show_text(self.word_spacing, self.char_spacing, self.text.as_bytes())
    }
}

/// Shows one or more text strings with individual glyph positioning. The
/// array alternates strings and numeric adjustments applied before the next
/// string or glyph. (`TJ`)
#[derive(Debug, Clone, PartialEq)]
pub struct ShowTextArray {
    elements: Vec<TextElement>,
}

impl ShowTextArray {
    pub fn new(elements: Vec<TextElement>) -> Self {
        Self { elements }
    }
}

impl PdfOperator for ShowTextArray {
    const NAME: &'static str = "TJ";

    const OPERAND_COUNT: Option<usize> = Some(1);

    fn read(operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        let elements = operands.get_text_element_array()?;
        Ok(PdfOperatorVariant::ShowTextArray(Self::new(elements)))
    }

    fn call<T: PdfOperatorBackend>(&self, backend: &mut T) -> Result<(), T::ErrorType> {
        backend.show_text_with_glyph_positioning(&self.elements)
    }
}

#[cfg(test)]
mod tests {
    use crate::{pdf_operator::PdfOperatorVariant, recording_pdf_operator_backend::RecordingBackend};

    use super::*;

    #[test]
    fn show_text_operators_parse_from_content_stream() {
        let ops = PdfOperatorVariant::from(b"(Hello) Tj (World) ' 0.1 0.2 (!) \"").unwrap();
        assert_eq!(
            ops,
            vec![
                PdfOperatorVariant::ShowText(ShowText::new("Hello".to_string())),
                PdfOperatorVariant::MoveNextLineShowText(MoveNextLineShowText::new(
                    "World".to_string()
                )),
                PdfOperatorVariant::SetSpacingMoveShowText(SetSpacingMoveShowText::new(
                    0.1,
                    0.2,
                    "!".to_string()
                )),
            ]
        );

        let mut backend = RecordingBackend::default();
        for op in &ops {
            op.call(&mut backend).unwrap();
        }
    }

    #[test]
    fn show_text_array_parses_strings_and_adjustments() {
        let ops = PdfOperatorVariant::from(b"[(AB) -120 (CD)] TJ").unwrap();
        assert_eq!(
            ops,
            vec![PdfOperatorVariant::ShowTextArray(ShowTextArray::new(vec![
                TextElement::Text {
                    value: "AB".to_string()
                },
                TextElement::Adjustment { amount: -120.0 },
                TextElement::Text {
                    value: "CD".to_string()
                },
            ]))]
        );
    }
}
