//! Scheme configuration for layer encryption. Blobs and parameter sets are the
//! raw material, schemes give them a typed shape, bundles group them by
//! direction, and constructors are the only validated way to build a bundle.

pub mod blob;
pub mod bundle;
pub mod constructors;
pub mod parameters;
pub mod schemes;
