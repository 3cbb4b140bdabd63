use crate::{
    error::PdfOperatorError,
    pdf_operator::{Operands, PdfOperator, PdfOperatorVariant},
    pdf_operator_backend::PdfOperatorBackend,
};

/// Moves to the start of the next line, offset from the start of the
/// current line by `(tx, ty)`. Does not change the leading. (`Td`)
#[derive(Debug, Clone, PartialEq)]
pub struct MoveTextPosition {
    tx: f32,
    ty: f32,
}

impl MoveTextPosition {
    pub fn new(tx: f32, ty: f32) -> Self {
        Self { tx, ty }
    }
}

impl PdfOperator for MoveTextPosition {
    const NAME: &'static str = "Td";

    const OPERAND_COUNT: Option<usize> = Some(2);

    fn read(operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        let tx = operands.get_f32()?;
        let ty = operands.get_f32()?;
        Ok(PdfOperatorVariant::MoveTextPosition(Self::new(tx, ty)))
    }

    fn call<T: PdfOperatorBackend>(&self, backend: &mut T) -> Result<(), T::ErrorType> {
        backend.move_text_position(self.tx, self.ty)
    }
}

/// Moves to the start of the next line, offset by `(tx, ty)`, and sets the
/// leading to `-ty`. (`TD`)
#[derive(Debug, Clone, PartialEq)]
pub struct MoveTextPositionAndSetLeading {
    tx: f32,
    ty: f32,
}

impl MoveTextPositionAndSetLeading {
    pub fn new(tx: f32, ty: f32) -> Self {
        Self { tx, ty }
    }
}

impl PdfOperator for MoveTextPositionAndSetLeading {
    const NAME: &'static str = "TD";

    const OPERAND_COUNT: Option<usize> = Some(2);

    fn read(operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        let tx = operands.get_f32()?;
        let ty = operands.get_f32()?;
        Ok(PdfOperatorVariant::MoveTextPositionAndSetLeading(
            Self::new(tx, ty),
        ))
    }

    fn call<T: PdfOperatorBackend>(&self, backend: &mut T) -> Result<(), T::ErrorType> {
        backend.move_text_position_and_set_leading(self.tx, self.ty)
    }
}

/// Sets the text matrix and the text line matrix directly. (`Tm`)
#[derive(Debug, Clone, PartialEq)]
pub struct SetTextMatrix {
    matrix: [f32; 6],
}

impl SetTextMatrix {
    pub fn new(matrix: [f32; 6]) -> Self {
        Self { matrix }
    }
}

impl PdfOperator for SetTextMatrix {
    const NAME: &'static str = "Tm";

    const OPERAND_COUNT: Option<usize> = Some(6);

    fn read(operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        let matrix = [
            operands.get_f32()?,
            operands.get_f32()?,
            operands.get_f32()?,
            operands.get_f32()?,
            operands.get_f32()?,
            operands.get_f32()?,
        ];
        Ok(PdfOperatorVariant::SetTextMatrix(Self::new(matrix)))
    }

    fn call<T: PdfOperatorBackend>(&self, backend: &mut T) -> Result<(), T::ErrorType> {
        let [a, b, c, d, e, f] = self.matrix;
        backend.set_text_matrix(a, b, c, d, e, f)
    }
}

/// Moves to the start of the next line, using the current leading. (`T*`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoveToNextLine;

impl PdfOperator for MoveToNextLine {
    const NAME: &'static str = "T*";

    const OPERAND_COUNT: Option<usize> = Some(0);

    fn read(_operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        Ok(PdfOperatorVariant::MoveToNextLine(Self))
    }

    fn call<T: PdfOperatorBackend>(&self, backend: &mut T) -> Result<(), T::ErrorType> {
        backend.move_to_start_of_next_line()
    }
}

#[cfg(test)]
mod tests {
    use crate::{pdf_operator::PdfOperatorVariant, recording_pdf_operator_backend::RecordingBackend};

    use super::*;

    #[test]
    fn text_positioning_operators_parse_from_content_stream() {
        let ops = PdfOperatorVariant::from(b"10 20 Td 0 -15 TD 1 0 0 1 100 700 Tm T*").unwrap();
        assert_eq!(
            ops,
            vec![
                PdfOperatorVariant::MoveTextPosition(MoveTextPosition::new(10.0, 20.0)),
                PdfOperatorVariant::MoveTextPositionAndSetLeading(
                    MoveTextPositionAndSetLeading::new(0.0, -15.0)
                ),
                PdfOperatorVariant::SetTextMatrix(SetTextMatrix::new([
                    1.0, 0.0, 0.0, 1.0, 100.0, 700.0
                ])),
                PdfOperatorVariant::MoveToNextLine(MoveToNextLine),
            ]
        );

        let mut backend = RecordingBackend::default();
        for op in &ops {
            op.call(&mut backend).unwrap();
        }
    }
}
