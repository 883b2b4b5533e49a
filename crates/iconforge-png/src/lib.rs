//! Minimal PNG container encoder.
//!
//! Produces the smallest valid PNG layout: signature, `IHDR`, a single `IDAT`
//! and `IEND`. Scanlines are always written with filter type 0 and the whole
//! payload is deflated once at the maximum compression level.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`chunk`] | `Chunk`, `ChunkType`, length/tag/data/CRC framing |
//! | [`crc`] | table-driven CRC-32 (reflected `0xEDB88320`) |
//! | [`encoder`] | `encode` entry point, scanline framing, compression |
//! | [`error`] | `PngError` |
//! | [`header`] | `ImageHeader`, `ColorType` |
//! | [`reader`] | `read_chunks` for checking encoded streams |
//!
//! # Quick start
//!
//! ```rust
//! use iconforge_png::{encode, read_chunks, ColorType};
//!
//! // 2×1 RGB image: one red pixel, one blue pixel.
//! let pixels: [u8; 6] = [255, 0, 0, 0, 0, 255];
//! let bytes = encode(2, 1, ColorType::Rgb, &pixels).unwrap();
//!
//! let chunks = read_chunks(&bytes).unwrap();
//! assert_eq!(chunks.len(), 3);
//! ```

pub mod chunk;
pub mod crc;
pub mod encoder;
pub mod error;
pub mod header;
pub mod reader;

pub use chunk::{Chunk, ChunkType};
pub use encoder::{encode, SIGNATURE};
pub use error::PngError;
pub use header::{ColorType, ImageHeader};
pub use reader::read_chunks;
