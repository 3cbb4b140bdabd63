use crate::{
    error::PdfOperatorError,
    pdf_operator::{Operands, PdfOperator, PdfOperatorVariant},
    pdf_operator_backend::PdfOperatorBackend,
};

/// Begins a compatibility section (`BX`). Inside a `BX…EX` bracket, unknown
/// operators and collaborator errors are downgraded to a diagnostic and
/// skipped rather than aborting the content stream; the interpreter's driver
/// loop applies that tolerance, since neither this operator nor its backend
/// method carries any state of its own.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BeginCompatibilitySection;

impl PdfOperator for BeginCompatibilitySection {
    const NAME: &'static str = "BX";

    const OPERAND_COUNT: Option<usize> = Some(0);

    fn read(_operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        Ok(PdfOperatorVariant::BeginCompatibilitySection(Self))
    }

    fn call<T: PdfOperatorBackend>(&self, _backend: &mut T) -> Result<(), T::ErrorType> {
        Ok(())
    }
}

/// Ends a compatibility section begun by `BX`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EndCompatibilitySection;

impl PdfOperator for EndCompatibilitySection {
    const NAME: &'static str = "EX";

    const OPERAND_COUNT: Option<usize> = Some(0);

    fn read(_operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        Ok(PdfOperatorVariant::EndCompatibilitySection(Self))
    }

    fn call<T: PdfOperatorBackend>(&self, _backend: &mut T) -> Result<(), T::ErrorType> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::pdf_operator::PdfOperatorVariant;

    use super::*;

    #[test]
    fn compatibility_markers_parse_from_content_stream() {
        let ops = PdfOperatorVariant::from(b"BX /Nonexistent Dummy EX").unwrap_err();
        // Outside the interpreter's tolerant dispatch, an unrecognized
        // operator inside BX...EX is still an UnknownOperator when the
        // eager, non-tolerant parser (`PdfOperatorVariant::from`) is used
        // directly; BX and EX themselves parse cleanly.
        assert!(matches!(ops, PdfOperatorError::UnknownOperator(_)));

        let ops = PdfOperatorVariant::from(b"BX EX").unwrap();
        assert_eq!(
            ops,
            vec![
                PdfOperatorVariant::BeginCompatibilitySection(BeginCompatibilitySection),
                PdfOperatorVariant::EndCompatibilitySection(EndCompatibilitySection),
            ]
        );
    }
}
