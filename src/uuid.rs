use std::{fmt, ops, str};

/// Represents a Universally Unique IDentifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// The layout family of a UUID, read from the top bits of octet 8.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// `0xx`: reserved for NCS backward compatibility.
    Ncs,
    /// `10x`: the layout specified in RFC 4122.
    Rfc4122,
    /// `110`: reserved for Microsoft backward compatibility.
    Microsoft,
    /// `111`: reserved for future definition.
    Future,
}

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates a UUID from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Consumes the UUID and returns the underlying byte array.
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns the 4-bit version field.
    ///
    /// The value is read back from the stamped bits, so any UUID that did not come out of a
    /// generator may report a number outside `1..=5`.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Stores `version` in the high nibble of octet 6.
    ///
    /// Only the low four bits of `version` are kept; the caller is expected to pass `1..=5`.
    pub fn set_version(&mut self, version: u8) {
        self.0[6] = (self.0[6] & 0x0f) | (version << 4);
    }

    /// Returns the variant field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_rfc4122::{Variant, NAMESPACE_DNS};
    ///
    /// assert_eq!(NAMESPACE_DNS.variant(), Variant::Rfc4122);
    /// ```
    pub const fn variant(&self) -> Variant {
        // longer prefixes first
        match self.0[8] {
            0xe0..=0xff => Variant::Future,
            0xc0..=0xdf => Variant::Microsoft,
            0x80..=0xbf => Variant::Rfc4122,
            _ => Variant::Ncs,
        }
    }

    /// Sets the variant field to the RFC 4122 layout (`10`).
    pub fn set_variant(&mut self) {
        self.0[8] = (self.0[8] & 0x3f) | 0x80;
    }

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Hexadecimal digits are accepted in either case. Braces, URN prefixes, and the
    /// hyphen-less form are rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_rfc4122::{Uuid, NAMESPACE_URL};
    ///
    /// let x = Uuid::parse_str("6BA7B811-9DAD-11D1-80B4-00C04FD430C8")?;
    /// assert_eq!(x, NAMESPACE_URL);
    /// # Ok::<(), uuid_rfc4122::ParseError>(())
    /// ```
    pub fn parse_str(src: &str) -> Result<Self, ParseError> {
        let src = src.as_bytes();
        if src.len() != 36 {
            return Err(ParseError::InvalidLength(src.len()));
        }

        let mut dst = [0u8; 16];
        let mut pos = 0;
        for (i, e) in dst.iter_mut().enumerate() {
            *e = (decode_digit(src, pos)? << 4) | decode_digit(src, pos + 1)?;
            pos += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                if src[pos] != b'-' {
                    return Err(ParseError::InvalidHyphen(pos));
                }
                pos += 1;
            }
        }
        Ok(Self(dst))
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_rfc4122::Uuid;
    ///
    /// let x = "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(format!("{}", y), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), uuid_rfc4122::ParseError>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut pos = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[pos] = DIGITS[(e >> 4) as usize];
            buffer[pos + 1] = DIGITS[(e & 15) as usize];
            pos += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[pos] = b'-';
                pos += 1;
            }
        }
        debug_assert!(buffer.is_ascii());
        UuidStr(buffer)
    }
}

/// Returns the value of the hexadecimal digit at `pos`.
fn decode_digit(src: &[u8], pos: usize) -> Result<u8, ParseError> {
    match src[pos] {
        c @ b'0'..=b'9' => Ok(c - b'0'),
        c @ b'a'..=b'f' => Ok(c - b'a' + 10),
        c @ b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ParseError::InvalidDigit(pos)),
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse_str(src)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

/// Concrete return type of [`Uuid::encode()`] containing the stack-allocated 8-4-4-4-12 string
/// representation.
struct UuidStr([u8; 36]);

impl ops::Deref for UuidStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for UuidStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

/// Error parsing an invalid string representation of UUID.
///
/// Positions are byte offsets into the input.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum ParseError {
    /// The input is not 36 bytes long; holds the actual length.
    #[error("invalid string representation: expected 36 bytes, found {0}")]
    InvalidLength(usize),
    /// A hyphen is missing at the given offset.
    #[error("invalid string representation: expected '-' at {0}")]
    InvalidHyphen(usize),
    /// A non-hexadecimal character sits at the given offset.
    #[error("invalid string representation: invalid hexadecimal digit at {0}")]
    InvalidDigit(usize),
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(|_| de::Error::invalid_length(value.len(), &self))
        }
    }

}
