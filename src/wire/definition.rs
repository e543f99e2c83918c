//! Definition records.

use zerocopy::FromBytes;

use super::data::BaseType;

/// One field declaration of a definition record.
pub(super) struct FieldDef {
    pub number: u8,
    /// Declared size in bytes; a multiple of the base type's unit size
    /// for array fields.
    pub size: u8,
    pub base: BaseType,
}

/// The declared layout of a local message number's data records.
pub(super) struct Definition {
    pub global: u16,
    pub is_little_endian: bool,
    pub fields: Vec<FieldDef>,
}

/// Decode the fixed head of a definition record.
///
/// Returns the global message number, the endianness, and the number of
/// field declarations that follow.
pub(super) fn definition_head(r: [u8; 5]) -> (u16, bool, u8) {
    #[repr(C, packed)]
    #[derive(FromBytes)]
    struct DefinitionHead {
        _reserved: u8,
        architecture: u8,
        global_mesg: [u8; 2],
        field_count: u8,
    }

    let DefinitionHead {
        architecture,
        global_mesg,
        field_count,
        ..
    } = zerocopy::transmute!(r);

    let is_little_endian = architecture == 0;
    let global = if is_little_endian {
        u16::from_le_bytes(global_mesg)
    } else {
        u16::from_be_bytes(global_mesg)
    };

    (global, is_little_endian, field_count)
}

/// Decode one field declaration.
///
/// An unrecognized base type code is returned as the error value.
pub(super) fn definition_field(r: [u8; 3]) -> Result<FieldDef, u8> {
    let [number, size, code] = r;

    let base = BaseType::from_code(code).ok_or(code)?;

    Ok(FieldDef { number, size, base })
}
