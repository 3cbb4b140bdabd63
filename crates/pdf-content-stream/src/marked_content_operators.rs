use std::rc::Rc;

use pdf_object::dictionary::Dictionary;

use crate::{
    error::PdfOperatorError,
    pdf_operator::{Operands, PdfOperator, PdfOperatorVariant},
    pdf_operator_backend::PdfOperatorBackend,
};

/// Designates a point in a content stream with a tag, with no associated
/// property list. (`MP`)
#[derive(Debug, Clone, PartialEq)]
pub struct MarkedContentPoint {
    tag: String,
}

impl MarkedContentPoint {
    pub fn new(tag: String) -> Self {
        Self { tag }
    }
}

impl PdfOperator for MarkedContentPoint {
    const NAME: &'static str = "MP";

    const OPERAND_COUNT: Option<usize> = Some(1);

    fn read(operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        let tag = operands.get_str()?;
        Ok(PdfOperatorVariant::MarkedContentPoint(Self::new(tag)))
    }

    fn call<T: PdfOperatorBackend>(&self, backend: &mut T) -> Result<(), T::ErrorType> {
        backend.mark_point(&self.tag)
    }
}

/// Designates a point in a content stream with a tag and an associated
/// property list, named in the Properties subdictionary of the current
/// resource dictionary. (`DP`)
#[derive(Debug, Clone, PartialEq)]
pub struct MarkedContentPointWithProps {
    tag: String,
    properties_name: String,
}

impl MarkedContentPointWithProps {
    pub fn new(tag: String, properties_name: String) -> Self {
        Self {
            tag,
            properties_name,
        }
    }
}

impl PdfOperator for MarkedContentPointWithProps {
    const NAME: &'static str = "DP";

    const OPERAND_COUNT: Option<usize> = Some(2);

    fn read(operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        let tag = operands.get_str()?;
        let properties_name = operands.get_name()?;
        Ok(PdfOperatorVariant::MarkedContentPointWithProps(Self::new(
            tag,
            properties_name,
        )))
    }

    fn call<T: PdfOperatorBackend>(&self, backend: &mut T) -> Result<(), T::ErrorType> {
        backend.mark_point_with_properties(&self.tag, &self.properties_name)
    }
}

/// Begins a marked-content sequence.
/// Marked-content sequences associate a tag with a sequence of content stream operations.
#[derive(Debug, Clone, PartialEq)]
pub struct BeginMarkedContent {
    /// The tag indicating the role or nature of the marked-content sequence.
    tag: String,
}

impl BeginMarkedContent {
    pub fn new(tag: String) -> Self {
        Self { tag }
    }
}

impl PdfOperator for BeginMarkedContent {
    const NAME: &'static str = "BMC";

    const OPERAND_COUNT: Option<usize> = Some(1);

    fn read(operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        let tag = operands.get_str()?;
        Ok(PdfOperatorVariant::BeginMarkedContent(Self::new(tag)))
    }

    fn call<T: PdfOperatorBackend>(&self, backend: &mut T) -> Result<(), T::ErrorType> {
        backend.begin_marked_content(&self.tag)
    }
}

/// Begins a marked-content sequence with an associated property list.
/// The property list can be either a name (referring to an entry in the Properties subdictionary
/// of the current resource dictionary) or an inline dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct BeginMarkedContentWithProps {
    /// The tag indicating the role or nature of the marked-content sequence.
    tag: String,
    /// The property list, which can be a name (of an entry in the resource dictionary's Properties subdictionary) or an inline dictionary.
    properties: Rc<Dictionary>,
}

impl BeginMarkedContentWithProps {
    pub fn new(tag: String, properties: Rc<Dictionary>) -> Self {
        Self { tag, properties }
    }
}

impl PdfOperator for BeginMarkedContentWithProps {
    const NAME: &'static str = "BDC";

    const OPERAND_COUNT: Option<usize> = Some(2);

    fn read(operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        let tag = operands.get_str()?;
        let properties = operands.get_dictionary()?;
        Ok(PdfOperatorVariant::BeginMarkedContentWithProps(Self::new(
            tag, properties,
        )))
    }

    fn call<T: PdfOperatorBackend>(&self, backend: &mut T) -> Result<(), T::ErrorType> {
        backend.begin_marked_content_with_properties(&self.tag, &self.properties)
    }
}

/// Ends a marked-content sequence begun by a `BMC` or `BDC` operator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EndMarkedContent;

impl PdfOperator for EndMarkedContent {
    const NAME: &'static str = "EMC";

    const OPERAND_COUNT: Option<usize> = Some(0);

    fn read(_operands: &mut Operands) -> Result<PdfOperatorVariant, PdfOperatorError> {
        Ok(PdfOperatorVariant::EndMarkedContent(Self::default()))
    }

    fn call<T: PdfOperatorBackend>(&self, backend: &mut T) -> Result<(), T::ErrorType> {
        backend.end_marked_content()
    }
}

#[cfg(test)]
mod tests {
    use crate::{pdf_operator::PdfOperatorVariant, recording_pdf_operator_backend::RecordingBackend};

    use super::*;

    #[test]
    fn marked_content_operators_parse_from_content_stream() {
        let ops = PdfOperatorVariant::from(b"/Tag1 MP /Tag2 /P1 DP /Tag3 BMC EMC").unwrap();
        assert_eq!(
            ops,
            vec![
                PdfOperatorVariant::MarkedContentPoint(MarkedContentPoint::new(
                    "Tag1".to_string()
                )),
                PdfOperatorVariant::MarkedContentPointWithProps(
                    MarkedContentPointWithProps::new("Tag2".to_string(), "P1".to_string())
                ),
                PdfOperatorVariant::BeginMarkedContent(BeginMarkedContent::new(
                    "Tag3".to_string()
                )),
                PdfOperatorVariant::EndMarkedContent(EndMarkedContent),
            ]
        );

        let mut backend = RecordingBackend::default();
        for op in &ops {
            op.call(&mut backend).unwrap();
        }
    }
}
