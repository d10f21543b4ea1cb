//! WS2812 duty-cycle encoding for a byte-oriented SPI bus.
//!
//! The bus is clocked at 8x the LED bit rate, so every transport byte spans
//! exactly one LED bit period split into 8 sub-slots. A `0` bit becomes a
//! short high pulse and a `1` bit a long one.

use crate::color::Rgb;

/// Transport byte for a `0` bit: 2 of 8 sub-slots high
pub const BIT_LOW: u8 = 0b1100_0000;
/// Transport byte for a `1` bit: 5 of 8 sub-slots high
pub const BIT_HIGH: u8 = 0b1111_1000;

/// Transport bytes per color channel
pub const BYTES_PER_CHANNEL: usize = 8;
/// Transport bytes per pixel
pub const BITSTREAM_LEN: usize = BYTES_PER_CHANNEL * 3;

/// Encoded form of one channel value
pub type ChannelBits = [u8; BYTES_PER_CHANNEL];

/// Encoded form of one pixel, channels in R, G, B order
pub type Bitstream = [u8; BITSTREAM_LEN];

/// Encode one channel value.
///
/// Bit order is LSB first: output byte `k` carries bit `k` of `value`.
/// Real WS2812 parts latch MSB first, so hardware that shows wrong colors
/// should be checked against this ordering.
pub const fn encode_byte(value: u8) -> ChannelBits {
    let mut bits = [BIT_LOW; BYTES_PER_CHANNEL];
    let mut i = 0;
    while i < BYTES_PER_CHANNEL {
        if value & (1 << i) != 0 {
            bits[i] = BIT_HIGH;
        }
        i += 1;
    }
    bits
}

/// Encode a pixel as `encode_byte(r) ++ encode_byte(g) ++ encode_byte(b)`
pub fn encode_color(color: Rgb) -> Bitstream {
    let mut stream = [0; BITSTREAM_LEN];
    for (chunk, channel) in stream
        .chunks_exact_mut(BYTES_PER_CHANNEL)
        .zip([color.r, color.g, color.b])
    {
        chunk.copy_from_slice(&encode_byte(channel));
    }
    stream
}
