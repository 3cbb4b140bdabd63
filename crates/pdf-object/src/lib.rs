pub mod cross_reference_table;
pub mod dictionary;
pub mod error;
pub mod indirect_object;
pub mod object_collection;
pub mod object_variant;
pub mod stream;
pub mod trailer;

pub use object_variant::ObjectVariant;
