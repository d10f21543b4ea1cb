mod tests {
    use neopixel_shine::bitstream::{BIT_HIGH, BIT_LOW, BITSTREAM_LEN, encode_byte, encode_color};
    use neopixel_shine::Rgb;

    #[test]
    fn test_encode_byte_every_value() {
        for value in 0..=255u8 {
            let bits = encode_byte(value);
            assert_eq!(bits.len(), 8);
            for (k, byte) in bits.iter().enumerate() {
                let expected = if value & (1 << k) != 0 { BIT_HIGH } else { BIT_LOW };
                assert_eq!(*byte, expected, "value {value:#04x}, bit {k}");
            }
        }
    }

    #[test]
    fn test_encode_byte_is_lsb_first() {
        assert_eq!(
            encode_byte(0x01),
            [0xF8, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0]
        );
        assert_eq!(
            encode_byte(0x80),
            [0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xF8]
        );
        assert_eq!(encode_byte(0x00), [0xC0; 8]);
        assert_eq!(encode_byte(0xFF), [0xF8; 8]);
    }

    #[test]
    fn test_encode_color_concatenates_rgb() {
        let stream = encode_color(Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(stream.len(), BITSTREAM_LEN);
        assert_eq!(stream[..8], encode_byte(0x12));
        assert_eq!(stream[8..16], encode_byte(0x34));
        assert_eq!(stream[16..], encode_byte(0x56));
    }

    #[test]
    fn test_duty_cycle_patterns() {
        assert_eq!(BIT_LOW.count_ones(), 2);
        assert_eq!(BIT_HIGH.count_ones(), 5);
    }
}
