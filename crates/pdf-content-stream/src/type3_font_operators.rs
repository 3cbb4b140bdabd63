use crate::{
    error::PdfOperatorError,
    pdf_operator::{Operands, PdfOperator, PdfOperatorVariant},
    pdf_operator_backend::PdfOperatorBackend,
};

/// Declares the glyph width for a Type-3 glyph description, `d0`. Used when
/// the glyph paints its own color, so no bounding box is supplied. Consumes
/// its operands and emits nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SetGlyphWidth {
    wx: f32,
    wy: f32,
}

impl PdfOperator for SetGlyphWidth {
    const NAME: &'static str = "d0";

    const OPERAND_COUNT: Option<usize> = Some(2);

    fn read(operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        let wx = operands.get_f32()?;
        let wy = operands.get_f32()?;
        Ok(PdfOperatorVariant::SetGlyphWidth(Self { wx, wy }))
    }

    fn call<T: PdfOperatorBackend>(&self, _backend: &mut T) -> Result<(), T::ErrorType> {
        Ok(())
    }
}

/// Declares the glyph width and bounding box for a Type-3 glyph description,
/// `d1`. Used when the glyph only describes shape (color comes from the
/// text object's current fill color). Consumes its operands and emits
/// nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SetCharWidthAndBoundingBox {
    wx: f32,
    wy: f32,
    llx: f32,
    lly: f32,
    urx: f32,
    ury: f32,
}

impl PdfOperator for SetCharWidthAndBoundingBox {
    const NAME: &'static str = "d1";

    const OPERAND_COUNT: Option<usize> = Some(6);

    fn read(operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        let wx = operands.get_f32()?;
        let wy = operands.get_f32()?;
        let llx = operands.get_f32()?;
        let lly = operands.get_f32()?;
        let urx = operands.get_f32()?;
        let ury = operands.get_f32()?;

        Ok(PdfOperatorVariant::SetCharWidthAndBoundingBox(Self {
            wx,
            wy,
            llx,
            lly,
            urx,
            ury,
        }))
    }

    fn call<T: PdfOperatorBackend>(&self, _backend: &mut T) -> Result<(), T::ErrorType> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{pdf_operator::PdfOperatorVariant, recording_pdf_operator_backend::RecordingBackend};

    use super::*;

    #[test]
    fn d0_and_d1_parse_and_emit_nothing() {
        let ops = PdfOperatorVariant::from(b"500 0 d0 500 0 0 0 500 700 d1").unwrap();
        assert_eq!(
            ops,
            vec![
                PdfOperatorVariant::SetGlyphWidth(SetGlyphWidth { wx: 500.0, wy: 0.0 }),
                PdfOperatorVariant::SetCharWidthAndBoundingBox(SetCharWidthAndBoundingBox {
                    wx: 500.0,
                    wy: 0.0,
                    llx: 0.0,
                    lly: 0.0,
                    urx: 500.0,
                    ury: 700.0,
                }),
            ]
        );

        let mut backend = RecordingBackend::default();
        for op in &ops {
            op.call(&mut backend).unwrap();
        }
    }
}
