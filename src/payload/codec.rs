//! Length-prefixed payload framing.
//!
//! Wire layout, written MSB-first into the carrier:
//!
//! ```text
//! [4 bytes] payload bit length (big-endian u32, excludes the header itself)
//! [N bytes] UTF-8 of "<8-hex-sha256-prefix>::<message>"
//! ```
//!
//! The length prefix makes the stream self-delimiting. An earlier design
//! terminated the stream with a 16-bit sentinel pattern instead; that scheme
//! cannot represent payload bytes equal to the sentinel and breaks on
//! multi-byte UTF-8, so only the length-prefixed format is supported.

use byteorder::{BigEndian, ByteOrder};

use crate::error::FrameError;
use crate::payload::proof::password_proof;

/// Separator between the password proof and the message. Hex digest output
/// never contains it, so the first occurrence always ends the proof.
pub const SEPARATOR: &str = "::";

/// Bits occupied by the length header.
pub const HEADER_BITS: usize = 32;

const HEADER_BYTES: usize = HEADER_BITS / 8;

/// Serialize a message and password proof into a framed byte stream.
///
/// The result is the complete carrier content: header bytes followed by
/// payload bytes. Total bits required on the carrier is `8 * len`.
pub fn frame(message: &str, password: &str) -> Vec<u8> {
    let proof = password_proof(password);

    let mut framed =
        Vec::with_capacity(HEADER_BYTES + proof.len() + SEPARATOR.len() + message.len());
    framed.extend_from_slice(&[0u8; HEADER_BYTES]);
    framed.extend_from_slice(proof.as_bytes());
    framed.extend_from_slice(SEPARATOR.as_bytes());
    framed.extend_from_slice(message.as_bytes());

    let payload_bits = ((framed.len() - HEADER_BYTES) * 8) as u32;
    BigEndian::write_u32(&mut framed[..HEADER_BYTES], payload_bits);

    framed
}

/// Decode the declared payload bit length from the 4 header bytes.
pub fn read_declared_bits(header: &[u8; HEADER_BYTES]) -> u64 {
    BigEndian::read_u32(header) as u64
}

/// Reject a declared bit length that cannot belong to a framed payload.
///
/// `max_bits` is the theoretical one-bit-per-pixel ceiling of the carrier
/// (`width * height`); it bounds how much a corrupted or hostile header can
/// make the extractor read. The framer only ever emits byte-aligned
/// payloads, so lengths that are not a multiple of 8 are rejected too.
pub fn validate_declared_bits(declared_bits: u64, max_bits: u64) -> Result<(), FrameError> {
    if declared_bits == 0 || declared_bits > max_bits || declared_bits % 8 != 0 {
        return Err(FrameError::CorruptHeader { declared_bits });
    }
    Ok(())
}

/// Parse payload bytes (header already stripped) back into the message.
///
/// Fails with [`FrameError::CorruptPayload`] on invalid UTF-8,
/// [`FrameError::MissingSeparator`] when the proof separator is absent, and
/// [`FrameError::PasswordMismatch`] when the embedded proof does not match
/// the supplied password.
pub fn parse(payload: &[u8], password: &str) -> Result<String, FrameError> {
    let text = String::from_utf8(payload.to_vec())?;

    let (embedded_proof, message) = text
        .split_once(SEPARATOR)
        .ok_or(FrameError::MissingSeparator)?;

    if embedded_proof != password_proof(password) {
        return Err(FrameError::PasswordMismatch);
    }

    Ok(message.to_string())
}
