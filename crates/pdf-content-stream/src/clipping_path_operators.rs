use crate::{
    error::PdfOperatorError,
    pdf_operator::{Operands, PdfOperator, PdfOperatorVariant},
    pdf_operator_backend::PdfOperatorBackend,
};

/// Modifies the current clipping path by intersecting it with the current
/// path, using the non-zero winding number rule to determine the region to
/// clip. Takes effect only at the next path-painting operator. (PDF operator
/// `W`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClipNonZero;

impl PdfOperator for ClipNonZero {
    const NAME: &'static str = "W";

    const OPERAND_COUNT: Option<usize> = Some(0);

    fn read(_operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        Ok(PdfOperatorVariant::ClipNonZero(Self))
    }

    fn call<T: PdfOperatorBackend>(&self, backend: &mut T) -> Result<(), T::ErrorType> {
        backend.clip_path_nonzero_winding()
    }
}

/// Modifies the current clipping path by intersecting it with the current
/// path, using the even-odd rule to determine the region to clip. (PDF
/// operator `W*`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClipEvenOdd;

impl PdfOperator for ClipEvenOdd {
    const NAME: &'static str = "W*";

    const OPERAND_COUNT: Option<usize> = Some(0);

    fn read(_operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        Ok(PdfOperatorVariant::ClipEvenOdd(Self))
    }

    fn call<T: PdfOperatorBackend>(&self, backend: &mut T) -> Result<(), T::ErrorType> {
        backend.clip_path_even_odd()
    }
}

#[cfg(test)]
mod tests {
    use crate::recording_pdf_operator_backend::RecordingBackend;

    use super::*;

    #[test]
    fn clip_operators_parse_from_content_stream() {
        let ops = PdfOperatorVariant::from(b"0 0 10 10 re W n").unwrap();
        assert_eq!(
            ops,
            vec![
                PdfOperatorVariant::Rectangle(crate::path_operators::Rectangle::new(
                    0.0, 0.0, 10.0, 10.0
                )),
                PdfOperatorVariant::ClipNonZero(ClipNonZero),
                PdfOperatorVariant::EndPath(crate::path_paint_operators::EndPath),
            ]
        );
    }

    #[test]
    fn clip_operators_dispatch_to_backend() {
        let mut backend = RecordingBackend::default();
        ClipNonZero.call(&mut backend).unwrap();
        ClipEvenOdd.call(&mut backend).unwrap();
    }
}
