mod tests {
    use neopixel_shine::config::{DEFAULT_GPIO_PIN, DEFAULT_SPI_INTERFACE};
    use neopixel_shine::{ConfigError, Duration, Error, ShineConfig};

    #[test]
    fn test_defaults() {
        let config = ShineConfig::default();
        assert_eq!(config.neopixel.gpio_pin, Some(DEFAULT_GPIO_PIN));
        assert_eq!(config.neopixel.spi_interface.as_str(), DEFAULT_SPI_INTERFACE);
        assert_eq!(config.pulse_duration(), Ok(Duration::from_millis(1000)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_full() {
        let config = ShineConfig::from_json(
            br#"{"neopixel":{"gpio_pin":21,"spi_interface":"/dev/spidev1.0"},"pulse_duration_ms":1500}"#,
        )
        .unwrap();
        assert_eq!(config.neopixel.gpio_pin, Some(21));
        assert_eq!(config.neopixel.spi_interface.as_str(), "/dev/spidev1.0");
        assert_eq!(config.pulse_duration(), Ok(Duration::from_millis(1500)));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = ShineConfig::from_json(br#"{"neopixel":{"gpio_pin":12}}"#).unwrap();
        assert_eq!(config.neopixel.gpio_pin, Some(12));
        assert_eq!(config.neopixel.spi_interface.as_str(), DEFAULT_SPI_INTERFACE);
        assert_eq!(config.pulse_duration_ms, 1000);

        assert_eq!(ShineConfig::from_json(b"{}").unwrap(), ShineConfig::default());
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert_eq!(
            ShineConfig::from_json(b"not json"),
            Err(Error::Config(ConfigError::Parse))
        );
        assert_eq!(
            ShineConfig::from_json(br#"{"pulse_duration_ms":3000}"#),
            Err(Error::Config(ConfigError::PulseDuration(3000)))
        );
    }

    #[test]
    fn test_huge_pulse_duration_is_rejected() {
        assert_eq!(
            ShineConfig::from_json(br#"{"pulse_duration_ms":18446744073709551615}"#),
            Err(Error::Config(ConfigError::PulseDuration(u64::MAX)))
        );

        let config = ShineConfig {
            pulse_duration_ms: u64::MAX / 2,
            ..ShineConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(Error::Config(ConfigError::PulseDuration(u64::MAX / 2)))
        );
    }

    #[test]
    fn test_pulse_duration_bounds_are_inclusive() {
        for millis in [500, 2000] {
            let config = ShineConfig {
                pulse_duration_ms: millis,
                ..ShineConfig::default()
            };
            assert_eq!(config.pulse_duration(), Ok(Duration::from_millis(millis)));
        }
        let config = ShineConfig {
            pulse_duration_ms: 499,
            ..ShineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
