//! Name + category resource lookup (interpreter design §4.5).

use std::fmt;

/// The resource sub-dictionaries a content stream can reference by name:
/// `/Font`, `/XObject`, `/ColorSpace`, `/Pattern`, `/Shading`, `/ExtGState`,
/// `/Properties`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceCategory {
    Font,
    XObject,
    ColorSpace,
    Pattern,
    Shading,
    ExtGState,
    Properties,
}

impl ResourceCategory {
    /// The dictionary key this category is filed under in a `/Resources`
    /// dictionary, e.g. `ResourceCategory::Font` under `/Font`.
    pub const fn dictionary_key(self) -> &'static str {
        match self {
            ResourceCategory::Font => "Font",
            ResourceCategory::XObject => "XObject",
            ResourceCategory::ColorSpace => "ColorSpace",
            ResourceCategory::Pattern => "Pattern",
            ResourceCategory::Shading => "Shading",
            ResourceCategory::ExtGState => "ExtGState",
            ResourceCategory::Properties => "Properties",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dictionary_key())
    }
}

/// Resolves a named resource within a given category against the current
/// page or Form XObject's resource dictionary.
///
/// Implementations are free to hand back whatever handle type makes sense
/// for their backend (a raw PDF object, a pre-parsed collaborator handle,
/// ...); the interpreter only ever carries the handle back to the command
/// sink, it never inspects it.
pub trait ResourceResolver {
    type Handle;

    /// Looks up `name` in `category`. `None` means the name was not present
    /// under that category — callers treat this as a resource error unless
    /// they are in a tolerant context (e.g. `sh`, per §4.5).
    fn resolve(&self, category: ResourceCategory, name: &str) -> Option<&Self::Handle>;
}
