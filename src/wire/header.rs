//! Document and record headers.

use tartan_bitfield::bitfield;
use thiserror::Error;
use zerocopy::FromBytes;

/// An error in a document header.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// Incorrect filetype marker.
    #[error("Incorrect file type marker.")]
    NotFitData,
    /// Unknown header length.
    #[error("Unknown header length ({0}).")]
    UnknownHeaderLength(u8),
}

/// Sizes and flags read from a document header.
pub(super) struct DocumentHeader {
    /// Number of record bytes following the header.
    pub data_size: u32,
    /// Whether two further header bytes (a header check value) follow.
    pub is_extended: bool,
}

/// Decode the leading twelve bytes of a document header.
pub(super) fn document_header(r: [u8; 12]) -> Result<DocumentHeader, HeaderError> {
    #[repr(C, packed)]
    #[derive(FromBytes)]
    struct FileHeader {
        header_size: u8,
        protocol_version: u8,
        profile_version: [u8; 2],
        data_size: [u8; 4],
        data_type: [u8; 4],
    }

    let FileHeader {
        header_size,
        data_size,
        data_type,
        ..
    } = zerocopy::transmute!(r);

    if &data_type != b".FIT" {
        Err(HeaderError::NotFitData)?;
    }

    let is_extended = match header_size {
        14 => true,
        12 => false,
        _ => Err(HeaderError::UnknownHeaderLength(header_size))?,
    };

    Ok(DocumentHeader {
        data_size: u32::from_le_bytes(data_size),
        is_extended,
    })
}

/// An error in a record header.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Found developer data (not supported).
    #[error("Found developer data.")]
    DeveloperData,
}

/// The shape of one record, read from its header byte.
pub(super) enum RecordKind {
    /// A definition record for a local message number.
    Definition { local: u8 },
    /// A data record, with the time offset of compressed headers.
    Data { local: u8, time_offset: Option<u8> },
}

/// Decode a record header byte.
pub(super) fn record_header(r: u8) -> Result<RecordKind, RecordError> {
    bitfield! {
        struct Header(u8) {
            [7] is_compressed,
        }
    }

    if Header(r).is_compressed() {
        bitfield! {
            struct CompressedHeader(u8) {
                [0..5] time_offset: u8,
                [5..7] local_mesg: u8,
            }
        }

        let header = CompressedHeader(r);

        Ok(RecordKind::Data {
            local: header.local_mesg(),
            time_offset: Some(header.time_offset()),
        })
    } else {
        bitfield! {
            struct NormalHeader(u8) {
                [0..4] local_mesg: u8,
                [5] is_developer,
                [6] is_definition,
            }
        }

        let header = NormalHeader(r);

        if header.is_developer() {
            Err(RecordError::DeveloperData)?;
        }

        Ok(if header.is_definition() {
            RecordKind::Definition {
                local: header.local_mesg(),
            }
        } else {
            RecordKind::Data {
                local: header.local_mesg(),
                time_offset: None,
            }
        })
    }
}
