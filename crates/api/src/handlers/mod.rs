//! Request handlers.
//!
//! Handlers load the atlas through [`crate::service::AtlasService`] and tag
//! every content response with the provenance header.

pub mod atlas;
