//! Field base types and value decoding.

use crate::mesg::Value;

/// A FIT base type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BaseType {
    Enum,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    Str,
    F32,
    F64,
    U8Z,
    U16Z,
    U32Z,
    Byte,
    I64,
    U64,
    U64Z,
}

impl BaseType {
    /// Resolve a base type from its definition code.
    pub(super) fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0x00 => Self::Enum,
            0x01 => Self::I8,
            0x02 => Self::U8,
            0x83 => Self::I16,
            0x84 => Self::U16,
            0x85 => Self::I32,
            0x86 => Self::U32,
            0x07 => Self::Str,
            0x88 => Self::F32,
            0x89 => Self::F64,
            0x0A => Self::U8Z,
            0x8B => Self::U16Z,
            0x8C => Self::U32Z,
            0x0D => Self::Byte,
            0x8E => Self::I64,
            0x8F => Self::U64,
            0x90 => Self::U64Z,
            _ => return None,
        })
    }

    /// Size in bytes of a single element of this base type.
    pub(super) fn unit_size(self) -> usize {
        match self {
            Self::Enum | Self::I8 | Self::U8 | Self::U8Z | Self::Str | Self::Byte => 1,
            Self::I16 | Self::U16 | Self::U16Z => 2,
            Self::I32 | Self::U32 | Self::U32Z | Self::F32 => 4,
            Self::I64 | Self::U64 | Self::U64Z | Self::F64 => 8,
        }
    }

    /// Decode a field's bytes to a value.
    ///
    /// Values holding the base type's 'invalid' marker are dropped. For
    /// numeric array fields the first valid element is kept; `string`
    /// fields accumulate to UTF-8 text; `byte` arrays are kept raw.
    pub(super) fn decode(self, r: &[u8], is_le: bool) -> Option<Value> {
        match self {
            Self::Str => {
                let text = r.split(|b| *b == 0).next().unwrap_or(r);
                if text.is_empty() {
                    return None;
                }
                Some(Value::Text(str::from_utf8(text).ok()?.to_owned()))
            }
            Self::Byte => {
                // A byte array is invalid only if every byte is.
                if r.iter().all(|b| *b == u8::MAX) {
                    return None;
                }
                Some(Value::Bytes(r.to_vec()))
            }
            _ => r
                .chunks_exact(self.unit_size())
                .find_map(|element| self.element(element, is_le)),
        }
    }

    /// Decode a single element, if it differs from the 'invalid' marker.
    fn element(self, r: &[u8], is_le: bool) -> Option<Value> {
        macro_rules! element {
            ($t:ty, $invalid:ident, $variant:ident) => {{
                let b = <[u8; size_of::<$t>()]>::try_from(r).ok()?;
                let x = if is_le {
                    <$t>::from_le_bytes(b)
                } else {
                    <$t>::from_be_bytes(b)
                };

                if x != <$t>::$invalid {
                    Some(Value::$variant(x))
                } else {
                    None
                }
            }};
        }

        match self {
            Self::Enum | Self::U8 => element!(u8, MAX, U8),
            Self::U8Z => element!(u8, MIN, U8),
            Self::U16 => element!(u16, MAX, U16),
            Self::U16Z => element!(u16, MIN, U16),
            Self::U32 => element!(u32, MAX, U32),
            Self::U32Z => element!(u32, MIN, U32),
            Self::U64 => element!(u64, MAX, U64),
            Self::U64Z => element!(u64, MIN, U64),

            Self::I8 => element!(i8, MAX, I8),
            Self::I16 => element!(i16, MAX, I16),
            Self::I32 => element!(i32, MAX, I32),
            Self::I64 => element!(i64, MAX, I64),

            Self::F32 => element!(f32, MAX, F32),
            Self::F64 => element!(f64, MAX, F64),

            // Handled in `decode`.
            Self::Str | Self::Byte => None,
        }
    }
}
