//! A minimal `/Resources` dictionary fixture, enough to drive a content
//! stream end to end in tests without a concrete font/image/color-space
//! engine behind it.

use std::rc::Rc;

use pdf_object::{ObjectVariant, dictionary::Dictionary};

use crate::resource::{ResourceCategory, ResourceResolver};

/// Resolves names against the sub-dictionaries of a single `/Resources`
/// dictionary (`/Font`, `/XObject`, `/ColorSpace`, `/Pattern`, `/Shading`,
/// `/ExtGState`, `/Properties`), returning the raw [`ObjectVariant`] filed
/// under that name. Indirect references are not resolved here — that is the
/// PDF object collaborator's job (§6), out of scope for this crate.
pub struct Resources {
    dictionary: Rc<Dictionary>,
}

impl Resources {
    pub fn new(dictionary: Rc<Dictionary>) -> Self {
        Self { dictionary }
    }
}

impl ResourceResolver for Resources {
    type Handle = ObjectVariant;

    fn resolve(&self, category: ResourceCategory, name: &str) -> Option<&ObjectVariant> {
        let sub_dictionary = self.dictionary.get_dictionary(category.dictionary_key())?;
        sub_dictionary.get(name).map(|value| value.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn resources_with_one_font() -> Resources {
        let mut font_dict = BTreeMap::new();
        font_dict.insert(
            "F1".to_string(),
            Box::new(ObjectVariant::Name("Helvetica".to_string())),
        );

        let mut resources_dict = BTreeMap::new();
        resources_dict.insert(
            "Font".to_string(),
            Box::new(ObjectVariant::Dictionary(Rc::new(Dictionary::new(
                font_dict,
            )))),
        );

        Resources::new(Rc::new(Dictionary::new(resources_dict)))
    }

    #[test]
    fn resolves_a_name_within_its_category() {
        let resources = resources_with_one_font();
        let resolved = resources.resolve(ResourceCategory::Font, "F1");
        assert_eq!(
            resolved,
            Some(&ObjectVariant::Name("Helvetica".to_string()))
        );
    }

    #[test]
    fn missing_name_in_a_present_category_resolves_to_none() {
        let resources = resources_with_one_font();
        assert_eq!(resources.resolve(ResourceCategory::Font, "F2"), None);
    }

    #[test]
    fn missing_category_resolves_to_none() {
        let resources = resources_with_one_font();
        assert_eq!(resources.resolve(ResourceCategory::Pattern, "P1"), None);
    }
}
