//! Thin collaborator interfaces between a content stream interpreter and the
//! PDF resources (fonts, images, color spaces, patterns, shadings, external
//! graphics states) its operators reference by name.
//!
//! `pdf-content-stream` never constructs these objects itself — §1 of the
//! interpreter design treats font handling, image decoding, color-space
//! construction, and pattern/shader construction as external collaborators.
//! This crate hosts the trait surface those collaborators implement, plus a
//! minimal in-memory [`resources::Resources`] fixture that resolves names
//! against [`pdf_object::ObjectVariant`] dictionaries, enough to drive a
//! content stream end to end in tests without a concrete font or image
//! engine behind it.

pub mod cache;
pub mod collaborator;
pub mod resource;
pub mod resources;

pub use cache::PdfObjectCollaborator;
pub use resource::{ResourceCategory, ResourceResolver};
pub use resources::Resources;
