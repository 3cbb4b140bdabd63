use crate::{
    error::PdfOperatorError,
    pdf_operator::{Operands, PdfOperator, PdfOperatorVariant},
    pdf_operator_backend::PdfOperatorBackend,
};

/// Invokes a named XObject (an image or a self-contained Form XObject) from
/// the resource dictionary's XObject subdictionary. (`Do`)
#[derive(Debug, Clone, PartialEq)]
pub struct InvokeXObject {
    name: String,
}

impl InvokeXObject {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl PdfOperator for InvokeXObject {
    const NAME: &'static str = "Do";

    const OPERAND_COUNT: Option<usize> = Some(1);

    fn read(operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        let name = operands.get_name()?;
        Ok(PdfOperatorVariant::InvokeXObject(Self::new(name)))
    }

    fn call<T: PdfOperatorBackend>(&self, backend: &mut T) -> Result<(), T::ErrorType> {
        backend.invoke_xobject(&self.name)
    }
}

/// Begins an inline image object. The dictionary of abbreviated keys and the
/// raw image data that follow are scanned by the driver loop directly (see
/// the interpreter's handling of `BI`/`ID`/`EI`); this marker only records
/// that the `BI` keyword was seen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BeginInlineImage;

impl PdfOperator for BeginInlineImage {
    const NAME: &'static str = "BI";

    const OPERAND_COUNT: Option<usize> = Some(0);

    fn read(_operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        Ok(PdfOperatorVariant::BeginInlineImage(Self))
    }

    fn call<T: PdfOperatorBackend>(&self, _backend: &mut T) -> Result<(), T::ErrorType> {
        Ok(())
    }
}

/// Marks the image-data boundary of an inline image object. The driver loop
/// intercepts the raw bytes that follow `ID` directly (see the interpreter's
/// inline-image handling) rather than routing them through the generic
/// operand collector; this marker carries whatever bytes the driver
/// attached once scanning for the trailing `EI` completed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InlineImageData {
    data: Vec<u8>,
}

impl InlineImageData {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl PdfOperator for InlineImageData {
    const NAME: &'static str = "ID";

    const OPERAND_COUNT: Option<usize> = Some(0);

    fn read(_operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        Ok(PdfOperatorVariant::InlineImageData(Self::default()))
    }

    fn call<T: PdfOperatorBackend>(&self, _backend: &mut T) -> Result<(), T::ErrorType> {
        Ok(())
    }
}

/// Ends an inline image object, after the image dictionary and data have
/// already been handed to the image collaborator by the driver loop. (`EI`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EndInlineImage;

impl PdfOperator for EndInlineImage {
    const NAME: &'static str = "EI";

    const OPERAND_COUNT: Option<usize> = Some(0);

    fn read(_operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        Ok(PdfOperatorVariant::EndInlineImage(Self))
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
    fn invoke_xobject_parses_from_content_stream() {
        let ops = PdfOperatorVariant::from(b"/Fm0 Do").unwrap();
        assert_eq!(
            ops,
            vec![PdfOperatorVariant::InvokeXObject(InvokeXObject::new(
                "Fm0".to_string()
            ))]
        );

        let mut backend = RecordingBackend::default();
        ops[0].call(&mut backend).unwrap();
    }
}
