// This file is part of picker-kernel and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2023 Michael Ripley

/// Serialize a u32-packed ARGB color as a `#AARRGGBB` hex string, because editing a decimal u32 by
/// hand is miserable.
///
/// Deserialization accepts the `#` as optional, and also takes six digit `RRGGBB` colors which are
/// read as fully opaque.
pub mod argb_color {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &u32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("#{color:08X}"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(de::Error::custom)
    }

    pub fn parse(s: &str) -> Result<u32, String> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("\"{s}\" is not a hex color"));
        }
        let value = match digits.len() {
            6 => u32::from_str_radix(digits, 16).map(|rgb| 0xFF000000 | rgb),
            8 => u32::from_str_radix(digits, 16),
            _ => return Err(format!("\"{s}\" should have 6 (RRGGBB) or 8 (AARRGGBB) hex digits")),
        };
        value.map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod test_argb_color {
    use serde::{Deserialize, Serialize};

    use super::argb_color;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Wrapper {
        #[serde(with = "argb_color")]
        color: u32,
    }

    #[test]
    fn serializes_as_hex() {
        let text = toml::to_string(&Wrapper { color: 0xB2FF0000 }).unwrap();
        assert_eq!(text.trim(), "color = \"#B2FF0000\"");
    }

    #[test]
    fn deserializes_own_output() {
        let wrapper: Wrapper = toml::from_str("color = \"#B2FF0000\"").unwrap();
        assert_eq!(wrapper.color, 0xB2FF0000);
    }

    #[test]
    fn hash_is_optional() {
        assert_eq!(argb_color::parse("80ff8000"), Ok(0x80FF8000));
    }

    #[test]
    fn six_digits_are_opaque() {
        assert_eq!(argb_color::parse("#00FF00"), Ok(0xFF00FF00));
    }

    #[test]
    fn rejects_garbage() {
        assert!(argb_color::parse("#12345").is_err());
        assert!(argb_color::parse("#GGHHII").is_err());
        assert!(argb_color::parse("+1234567").is_err());
        assert!(toml::from_str::<Wrapper>("color = \"red\"").is_err());
    }
}
