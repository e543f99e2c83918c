//! Decoded messages and the streams holding them.
//!
//! A [`Message`] is one record of a FIT document after byte-level decoding:
//! its global message number and a map from field number to decoded
//! [`Value`]. Fields holding their base type's 'invalid' marker are never
//! entered into the map, so a field is valid exactly when it is present.
//!
//! A [`FitStream`] owns the messages of one document in document order.
//! Streams are usually produced by [`crate::wire`], but can be built
//! directly from any source of decoded messages.

use std::collections::BTreeMap;

use crate::profile::MesgNum;

/// A decoded field value, tagged by its FIT base type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    /// A `string` field, accumulated to UTF-8 text.
    Text(String),
    /// A `byte` array field, kept raw.
    Bytes(Vec<u8>),
}

impl Value {
    /// Read as an unsigned integer, widening smaller and accepting
    /// non-negative signed values.
    pub fn uint(&self) -> Option<u32> {
        match *self {
            Self::U8(x) => Some(u32::from(x)),
            Self::U16(x) => Some(u32::from(x)),
            Self::U32(x) => Some(x),
            Self::U64(x) => u32::try_from(x).ok(),
            Self::I8(x) => u32::try_from(x).ok(),
            Self::I16(x) => u32::try_from(x).ok(),
            Self::I32(x) => u32::try_from(x).ok(),
            Self::I64(x) => u32::try_from(x).ok(),
            _ => None,
        }
    }

    /// Read as a signed integer, widening smaller and accepting unsigned
    /// values in range.
    pub fn int(&self) -> Option<i32> {
        match *self {
            Self::U8(x) => Some(i32::from(x)),
            Self::U16(x) => Some(i32::from(x)),
            Self::U32(x) => i32::try_from(x).ok(),
            Self::U64(x) => i32::try_from(x).ok(),
            Self::I8(x) => Some(i32::from(x)),
            Self::I16(x) => Some(i32::from(x)),
            Self::I32(x) => Some(x),
            Self::I64(x) => i32::try_from(x).ok(),
            _ => None,
        }
    }

    /// Read as floating point, accepting any numeric value.
    pub fn float(&self) -> Option<f64> {
        match *self {
            Self::U8(x) => Some(f64::from(x)),
            Self::U16(x) => Some(f64::from(x)),
            Self::U32(x) => Some(f64::from(x)),
            Self::U64(x) => Some(x as f64),
            Self::I8(x) => Some(f64::from(x)),
            Self::I16(x) => Some(f64::from(x)),
            Self::I32(x) => Some(f64::from(x)),
            Self::I64(x) => Some(x as f64),
            Self::F32(x) => Some(f64::from(x)),
            Self::F64(x) => Some(x),
            _ => None,
        }
    }

    /// Read as text.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(x) => Some(x),
            _ => None,
        }
    }
}

/// One decoded record of a FIT document.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    mesg: MesgNum,
    fields: BTreeMap<u8, Value>,
}

impl Message {
    /// Create an empty message for a global message number.
    pub fn new(mesg: MesgNum) -> Self {
        Self {
            mesg,
            fields: BTreeMap::new(),
        }
    }

    /// Create the sentinel message returned for stream misses: an unknown
    /// message number with every field invalid.
    pub(crate) fn empty() -> Self {
        Self::new(MesgNum::Other(u16::MAX))
    }

    /// The global message number, folded onto the handled subset.
    pub fn kind(&self) -> MesgNum {
        self.mesg
    }

    /// The raw global message number.
    pub fn number(&self) -> u16 {
        self.mesg.number()
    }

    /// Store a value for a field, replacing an earlier one.
    pub fn set(&mut self, field: u8, value: Value) {
        self.fields.insert(field, value);
    }

    /// Builder form of [`Message::set`].
    pub fn with(mut self, field: u8, value: Value) -> Self {
        self.set(field, value);
        self
    }

    /// Whether a field is present with a valid (non-sentinel) value.
    pub fn is_valid(&self, field: u8) -> bool {
        self.fields.contains_key(&field)
    }

    /// The decoded value of a field, if valid.
    pub fn value(&self, field: u8) -> Option<&Value> {
        self.fields.get(&field)
    }

    /// The value of a field as an unsigned integer.
    pub fn uint(&self, field: u8) -> Option<u32> {
        self.value(field)?.uint()
    }

    /// The value of a field as a signed integer.
    pub fn int(&self, field: u8) -> Option<i32> {
        self.value(field)?.int()
    }

    /// The value of a field as floating point.
    pub fn float(&self, field: u8) -> Option<f64> {
        self.value(field)?.float()
    }

    /// The value of a field as text.
    pub fn text(&self, field: u8) -> Option<&str> {
        self.value(field)?.text()
    }
}

/// The decoded messages of one document, in document order, behind a
/// sequential cursor.
#[derive(Debug, Clone)]
pub struct FitStream {
    name: String,
    mesgs: Vec<Message>,
    cursor: usize,
    empty: Message,
}

impl FitStream {
    /// Create a stream over decoded messages.
    ///
    /// The name is the document's display name (usually the file name),
    /// used in error messages and as the last resort of track naming.
    pub fn new(name: impl Into<String>, mesgs: Vec<Message>) -> Self {
        Self {
            name: name.into(),
            mesgs,
            cursor: 0,
            empty: Message::empty(),
        }
    }

    /// The document's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of messages in the stream.
    pub fn len(&self) -> usize {
        self.mesgs.len()
    }

    /// Whether the stream holds no messages.
    pub fn is_empty(&self) -> bool {
        self.mesgs.is_empty()
    }

    /// Move the cursor back before the first message.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Whether advancing the cursor would yield a message.
    pub fn has_more_mesg(&self) -> bool {
        self.cursor < self.mesgs.len()
    }

    /// Advance the cursor and return the message at the new position.
    ///
    /// Calling while [`FitStream::has_more_mesg`] is false violates the
    /// cursor contract and panics.
    pub fn next_mesg(&mut self) -> &Message {
        let mesg = &self.mesgs[self.cursor];
        self.cursor += 1;
        mesg
    }

    /// The first message of a kind, scanning from the start independently
    /// of the cursor.
    ///
    /// Misses return a sentinel message with every field invalid, so the
    /// result is always safe to query.
    pub fn first_mesg_of(&self, mesg: MesgNum) -> &Message {
        self.mesgs
            .iter()
            .find(|m| m.kind() == mesg)
            .unwrap_or(&self.empty)
    }

    /// The final message in the stream, or the sentinel message if the
    /// stream is empty.
    pub fn last_mesg(&self) -> &Message {
        self.mesgs.last().unwrap_or(&self.empty)
    }
}
