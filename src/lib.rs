//! # StegoShield Core
//!
//! Adaptive, texture-aware LSB steganography. A complexity analyzer finds
//! the busy regions of a cover image where single-bit changes are invisible,
//! a framer packs a password proof and the message into a length-prefixed
//! bitstream, and the codec writes that stream into the blue-channel LSBs of
//! the safe pixels in raster order. Extraction only hands the message back
//! when the supplied password reproduces the embedded proof.
//!
//! # Usage Examples
//!
//! ## Hide a message in an image
//!
//! ```rust
//! use image::{Rgb, RgbImage};
//! use stegoshield_core::{embed, extract};
//!
//! // Any textured cover works; flat images have no safe pixels.
//! let cover = RgbImage::from_fn(100, 100, |x, y| {
//!     if ((x / 10) + (y / 10)) % 2 == 0 {
//!         Rgb([235, 235, 235])
//!     } else {
//!         Rgb([20, 20, 20])
//!     }
//! });
//!
//! let embedded = embed(&cover, "meet at dawn", "correct horse").unwrap();
//! assert_eq!(extract(&embedded.image, "correct horse").unwrap(), "meet at dawn");
//! ```
//!
//! ## Through the file boundary
//!
//! ```rust,no_run
//! stegoshield_core::api::hide::prepare()
//!     .with_image("cover.png")
//!     .with_message("meet at dawn")
//!     .with_password("correct horse")
//!     .with_output("innocent-looking.png")
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = stegoshield_core::api::unveil::prepare()
//!     .from_secret_file("innocent-looking.png")
//!     .using_password("correct horse")
//!     .execute()
//!     .expect("Failed to unveil message from image");
//! ```

#![warn(clippy::redundant_else)]

pub mod analysis;
pub mod api;
pub mod carrier;
pub mod codec;
pub mod commands;
pub mod error;
pub mod media;
pub mod payload;
pub mod result;

pub use crate::analysis::{analyze, ComplexityMask};
pub use crate::api::Password;
pub use crate::carrier::CarrierSlots;
pub use crate::codec::{capacity, embed, extract, Embedded};
pub use crate::error::{EmbedError, ExtractError, FrameError, StegoShieldError};
pub use crate::result::Result;
