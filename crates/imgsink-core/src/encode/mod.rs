//! Image encoding pipeline for Imgsink.
//!
//! This module provides functionality for:
//! - Encoding pixel data to PNG format with a caller-supplied row stride
//! - Encoding pixel data to JPEG format with configurable quality
//!
//! # Architecture
//!
//! Both formats share a single adapter ([`encode_to_memory`]) keyed by
//! [`EncodeFormat`]: it validates the input, accumulates the encoder's output
//! in a [`MemoryWriter`](crate::writer::MemoryWriter), and returns the
//! finished buffer by value. The encoding pipeline is designed to be used
//! from Web Workers via WASM bindings; all operations are synchronous and
//! single-threaded within WASM.
//!
//! # Examples
//!
//! ```ignore
//! use imgsink_core::encode::{encode_jpeg, encode_png};
//!
//! let pixels = vec![128u8; 100 * 100 * 3]; // Gray image
//! let png = encode_png(&pixels, 100, 100, 3, 0).unwrap();
//! let jpeg = encode_jpeg(&pixels, 100, 100, 3, 90).unwrap();
//! println!("PNG {} bytes, JPEG {} bytes", png.len(), jpeg.len());
//! ```

mod adapter;
mod jpeg;
mod png;
mod types;

pub use adapter::encode_to_memory;
pub use jpeg::encode_jpeg;
pub use png::encode_png;
pub use types::{EncodeError, EncodeFormat};
