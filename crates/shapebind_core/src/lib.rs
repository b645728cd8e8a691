//! Structural data binding between schema-less value trees and typed domain objects.

/// Value trees, type descriptors, the structural matcher, and `bind`/`unbind`.
pub mod bind;
/// Byte-level codecs producing and consuming value trees.
pub mod codec;
