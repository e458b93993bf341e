//! Validated RGB colors.

use std::str::FromStr;

use crate::{Error, Result};

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wide integers, failing on any channel outside
    /// 0..=255 instead of clamping.
    pub fn try_from_channels(r: i64, g: i64, b: i64) -> Result<Self> {
        fn channel(name: &'static str, value: i64) -> Result<u8> {
            u8::try_from(value).map_err(|_| Error::InvalidChannel {
                channel: name,
                value,
            })
        }
        Ok(Self::new(channel("red", r)?, channel("green", g)?, channel("blue", b)?))
    }

    /// Parse a `#rrggbb` string (either case).
    pub fn from_hex_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidHexColor(s.to_owned());
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        let mut bytes = [0u8; 3];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| invalid())?;
        let [r, g, b] = bytes;
        Ok(Self::new(r, g, b))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex_string(&self) -> String {
        format!("#{}", hex::encode(self.channels()))
    }

    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex_str(s)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_strings() {
        assert_eq!(Rgb::from_hex_str("#ffffff").unwrap(), Rgb::WHITE);
        assert_eq!(Rgb::from_hex_str("#FF8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!("#000000".parse::<Rgb>().unwrap(), Rgb::BLACK);
    }

    #[test]
    fn rejects_malformed_hex_strings() {
        for bad in ["ffffff", "#fff", "#ffffffff", "#gg0000", "", "#"] {
            assert_eq!(
                Rgb::from_hex_str(bad),
                Err(Error::InvalidHexColor(bad.to_owned())),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn formats_lowercase() {
        let c = Rgb::new(171, 205, 239);
        assert_eq!(c.to_hex_string(), "#abcdef");
        assert_eq!(c.to_string(), "#abcdef");
    }

    #[test]
    fn channel_range_is_checked_not_clamped() {
        assert_eq!(Rgb::try_from_channels(1, 2, 3).unwrap(), Rgb::new(1, 2, 3));
        assert_eq!(
            Rgb::try_from_channels(256, 0, 0),
            Err(Error::InvalidChannel { channel: "red", value: 256 })
        );
        assert_eq!(
            Rgb::try_from_channels(0, 0, -1),
            Err(Error::InvalidChannel { channel: "blue", value: -1 })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(255, 0, 16)).unwrap();
        assert_eq!(json, r##""#ff0010""##);
        assert_eq!(serde_json::from_str::<Rgb>(&json).unwrap(), Rgb::new(255, 0, 16));
        assert!(serde_json::from_str::<Rgb>(r#""red""#).is_err());
    }
}
