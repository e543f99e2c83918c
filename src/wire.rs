//! Byte-level decoding of FIT documents.
//!
//! This module turns the bytes of a FIT document into the materialized
//! message stream the readers in [`crate::read`] consume. Decoding is a
//! single pass: the document header is checked, definition records are
//! retained per local message number, and every data record is decoded
//! against its definition into a [`Message`] holding only valid field
//! values.
//!
//! Streams need not come from here: any producer of decoded messages can
//! build a [`FitStream`] directly and run the readers over it.

pub mod check;
mod data;
mod definition;
mod header;

use std::io::Read;

use thiserror::Error;

use crate::mesg::{FitStream, Message, Value};

use self::{
    check::accumulate,
    definition::{Definition, FieldDef},
    header::{HeaderError, RecordError, RecordKind},
};

/// Field number carried by every timestamped message.
const TIMESTAMP: u8 = 253;

/// Errors occurring while decoding a document.
#[derive(Debug, Error)]
pub enum Error {
    /// Unexpectedly reached the end of the document.
    #[error("Unexpectedly reached the end of the document.")]
    EndOfData,
    /// Calculated and found CRC values do not match.
    #[error("Calculated ({calculated}) and found ({found}) CRC values do not match.")]
    CyclicRedundancyCheck { found: u16, calculated: u16 },
    /// Incorrect file header.
    #[error("Incorrect file header: {0}.")]
    Header(#[from] HeaderError),
    /// Found unsupported developer data.
    #[error("Found unsupported developer data.")]
    Developer,
    /// A definition declared a base type outside the FIT protocol.
    #[error("Unknown base type (0x{0:02X}).")]
    UnknownBaseType(u8),
    /// A data record arrived before any definition for its local number.
    #[error("Data record for undefined local message number ({0}).")]
    UndefinedLocalMesg(u8),
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<RecordError> for Error {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::DeveloperData => Self::Developer,
        }
    }
}

/// Decode a document from a slice, materializing its message stream.
///
/// The name is the document's display name, attached to the stream for
/// naming and error reporting.
pub fn decode_slice(r: &[u8], name: &str) -> Result<FitStream, Error> {
    let i = &mut 0; // Counter of bytes read, used to read bytes from the tip.

    let head = header::document_header(take(r, i)?)?;
    if head.is_extended {
        // The header check value; covered by the document check below.
        let _: [u8; 2] = take(r, i)?;
    }

    let end = *i + head.data_size as usize; // Offset to the end of the record section.

    // Apply the cyclic redundancy check before decoding.
    let mut j = end;
    let found = u16::from_le_bytes(take(r, &mut j)?);
    let calculated = accumulate(0, r.get(..end).ok_or(Error::EndOfData)?);

    if found != calculated {
        Err(Error::CyclicRedundancyCheck { found, calculated })?;
    }

    // Store of definition records, by local message number.
    let mut definitions: [Option<Definition>; 16] = Default::default();

    let mut mesgs = Vec::new();
    let mut last_timestamp = None;

    while *i < end {
        let [byte] = take(r, i)?;

        match header::record_header(byte)? {
            RecordKind::Definition { local } => {
                definitions[local as usize] = Some(decode_definition(r, i)?);
            }
            RecordKind::Data { local, time_offset } => {
                let definition = definitions[local as usize]
                    .as_ref()
                    .ok_or(Error::UndefinedLocalMesg(local))?;

                mesgs.push(decode_data(r, i, definition, time_offset, &mut last_timestamp)?);
            }
        }
    }

    Ok(FitStream::new(name, mesgs))
}

/// Decode a document from a reader, materializing its message stream.
///
/// The document is buffered in full first; messages are materialized in
/// memory either way.
pub fn decode_reader(r: &mut impl Read, name: &str) -> Result<FitStream, Error> {
    let mut buffer = Vec::new();
    r.read_to_end(&mut buffer)?;

    decode_slice(&buffer, name)
}

fn decode_definition(r: &[u8], i: &mut usize) -> Result<Definition, Error> {
    let (global, is_little_endian, count) = definition::definition_head(take(r, i)?);

    let mut fields = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let field = definition::definition_field(take(r, i)?).map_err(Error::UnknownBaseType)?;
        fields.push(field);
    }

    Ok(Definition {
        global,
        is_little_endian,
        fields,
    })
}

fn decode_data(
    r: &[u8],
    i: &mut usize,
    definition: &Definition,
    time_offset: Option<u8>,
    last_timestamp: &mut Option<u32>,
) -> Result<Message, Error> {
    let mut mesg = Message::new(definition.global.into());

    for FieldDef { number, size, base } in &definition.fields {
        let s = *i;
        *i += *size as usize;
        let bytes = r.get(s..*i).ok_or(Error::EndOfData)?;

        if let Some(value) = base.decode(bytes, definition.is_little_endian) {
            mesg.set(*number, value);
        }
    }

    // Compressed headers carry the low five timestamp bits; roll them
    // forward against the last full timestamp seen.
    if let (Some(offset), Some(last)) = (time_offset, *last_timestamp) {
        mesg.set(TIMESTAMP, Value::U32(roll_timestamp(last, offset)));
    }
    if let Some(timestamp) = mesg.uint(TIMESTAMP) {
        *last_timestamp = Some(timestamp);
    }

    Ok(mesg)
}

/// Reconstruct a full timestamp from its compressed five-bit offset.
fn roll_timestamp(last: u32, offset: u8) -> u32 {
    let offset = u32::from(offset) & 0x1F;
    let base = last & !0x1F;

    if offset >= last & 0x1F {
        base + offset
    } else {
        base + offset + 0x20
    }
}

/// Take an exact number of bytes from an offset in a slice, advancing the offset.
fn take<const N: usize>(r: &[u8], i: &mut usize) -> Result<[u8; N], Error> {
    let s = *i;
    *i += N;

    r.get(s..*i)
        .and_then(|b| b.try_into().ok())
        .ok_or(Error::EndOfData)
}
