//! Imgsink Core - In-memory image encoding
//!
//! This crate turns raw pixel data into complete, owned PNG or JPEG byte
//! buffers. The compression itself is delegated to the `image` crate; what
//! lives here is the growable output sink the encoders stream into and the
//! thin adapters that hand the finished buffer to the caller.

pub mod encode;
pub mod writer;

pub use encode::{encode_jpeg, encode_png, encode_to_memory, EncodeError, EncodeFormat};
pub use writer::{MemoryWriter, SinkError};
