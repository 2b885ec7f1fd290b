//! Domain core of the atlas content service.
//!
//! Holds the typed row schemas, the lookup index, the hierarchical
//! assembler that turns flat rows into the nested atlas document, the
//! static editorial content used when the store is unavailable, and the
//! [`source::AtlasSource`] seam implemented by the database crate.
//! Nothing in this crate performs I/O.

pub mod affectation;
pub mod assembly;
pub mod atlas;
pub mod content;
pub mod error;
pub mod index;
pub mod publication;
pub mod rows;
pub mod source;
pub mod types;
