//! Embedding and extraction over the adaptive carrier.
//!
//! Both operations are pure functions of their inputs: the mask is
//! recomputed from pixel data on each call, the carrier slots are walked in
//! the same order on both sides, and no state survives a call. Embed never
//! mutates the caller's image; it returns a freshly allocated stego image.

use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use image::RgbImage;
use log::debug;

use crate::analysis::analyze;
use crate::carrier::{read_bit, write_bit, CarrierSlots};
use crate::error::{EmbedError, ExtractError};
use crate::payload;

/// Result of a successful embed.
///
/// `capacity` and `used_bits` are derived metrics for display purposes
/// (safe-pixel count and payload size); they are not part of the wire
/// format and nothing reads them back.
#[derive(Debug)]
pub struct Embedded {
    pub image: RgbImage,
    pub capacity: usize,
    pub used_bits: usize,
}

/// Number of safe carrier bits the given cover image offers.
pub fn capacity(cover: &RgbImage) -> usize {
    analyze(cover).capacity()
}

/// Hide `message` behind `password` inside a copy of `cover`.
///
/// Fails with [`EmbedError::InsufficientCapacity`] when the cover is too
/// smooth for the payload; the caller's image is never touched either way.
pub fn embed(cover: &RgbImage, message: &str, password: &str) -> Result<Embedded, EmbedError> {
    let mask = analyze(cover);
    let capacity = mask.capacity();

    let framed = payload::frame(message, password);
    let required = framed.len() * 8;

    if required > capacity {
        return Err(EmbedError::InsufficientCapacity { required, capacity });
    }

    debug!("embedding {required} of {capacity} available carrier bits");

    let mut stego = cover.clone();
    let mut bits = BitReader::endian(Cursor::new(&framed), BigEndian);
    for slot in CarrierSlots::new(&mask).take(required) {
        let bit = bits.read_bit().expect("Framed payload ended early");
        write_bit(&mut stego, slot, bit);
    }

    Ok(Embedded {
        image: stego,
        capacity,
        used_bits: required,
    })
}

/// Recover the message hidden in `stego`, gated on `password`.
pub fn extract(stego: &RgbImage, password: &str) -> Result<String, ExtractError> {
    let (width, height) = stego.dimensions();
    let mask = analyze(stego);
    let mut slots = CarrierSlots::new(&mask);

    let header = collect_bytes(stego, &mut slots, payload::HEADER_BITS)
        .ok_or(ExtractError::StreamExhausted)?;
    let header: [u8; 4] = header.try_into().expect("Header is always 4 bytes");

    let declared_bits = payload::read_declared_bits(&header);
    payload::validate_declared_bits(declared_bits, u64::from(width) * u64::from(height))?;

    let declared_bits = declared_bits as usize;
    if mask.capacity() < payload::HEADER_BITS + declared_bits {
        return Err(ExtractError::StreamExhausted);
    }

    let payload_bytes = collect_bytes(stego, &mut slots, declared_bits)
        .ok_or(ExtractError::StreamExhausted)?;

    payload::parse(&payload_bytes, password).map_err(ExtractError::from)
}

/// Read `bit_count` carrier bits into bytes, MSB first.
///
/// Returns `None` when the slot sequence runs dry early. `bit_count` is
/// byte-aligned by construction: the header is 32 bits and declared payload
/// lengths are validated to be multiples of 8.
fn collect_bytes(
    image: &RgbImage,
    slots: &mut CarrierSlots<'_>,
    bit_count: usize,
) -> Option<Vec<u8>> {
    let mut collected = 0;
    let mut buffer = BitWriter::endian(Vec::new(), BigEndian);
    for slot in slots.by_ref().take(bit_count) {
        buffer
            .write_bit(read_bit(image, slot))
            .expect("Cannot buffer carrier bit");
        collected += 1;
    }

    if collected < bit_count {
        return None;
    }

    Some(buffer.into_writer())
}
