//! Static-factory collaborator traits (interpreter design §6).
//!
//! "Font / Image / ColorSpace / Pattern / Shader collaborators each provide
//! a static factory (object + resources -> instance) and per-instance query
//! operations used above." Concrete glyph rendering, image decoding, color
//! management, and shading math are all out of scope for this crate (they
//! are the interpreter's Non-goals); these traits only fix the shape a real
//! backend must expose so `pdf-content-stream`'s operator dispatch can be
//! written and tested against it.

use pdf_object::ObjectVariant;

use crate::resource::{ResourceCategory, ResourceResolver};

/// A collaborator constructed from a PDF dictionary plus the resource
/// resolver it was found under, producing a `Handle` the interpreter treats
/// as opaque.
pub trait Collaborator: Sized {
    type Handle;
    type Error;

    /// `category` is the collaborator's own category (e.g.
    /// [`ResourceCategory::Font`] for [`FontCollaborator`]), supplied so a
    /// single resolver can host more than one collaborator kind.
    fn construct<R: ResourceResolver<Handle = ObjectVariant>>(
        dictionary: &ObjectVariant,
        resources: &R,
        category: ResourceCategory,
    ) -> Result<Self::Handle, Self::Error>;
}

/// Resolves `/Font` resources for `Tf`.
pub trait FontCollaborator: Collaborator {}

/// Resolves `/XObject` resources of Subtype `/Image` for `Do` and inline
/// images (`BI`/`ID`/`EI`).
pub trait ImageCollaborator: Collaborator {}

/// Resolves `/ColorSpace` resources for `CS`/`cs`, and backs the device
/// color spaces implied by `G`/`RG`/`K` and their stroking counterparts.
pub trait ColorSpaceCollaborator: Collaborator {}

/// Resolves `/Pattern` resources for the pattern-space branch of
/// `SCN`/`scn`.
pub trait PatternCollaborator: Collaborator {}

/// Resolves `/Shading` resources for `sh`.
pub trait ShadingCollaborator: Collaborator {}
