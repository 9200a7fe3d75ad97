//! Minimal NumPy `.npy` (format 1.0) support for 1-D int64 label arrays.

use std::fs;
use std::path::Path;

use crate::error::{LabelError, Result};

const MAGIC: &[u8] = b"\x93NUMPY";
const HEADER_ALIGN: usize = 64;
const DESCR: &str = "'<i8'";

fn header(len: usize) -> Vec<u8> {
    let dict = format!(
        "{{'descr': {}, 'fortran_order': False, 'shape': ({},), }}",
        DESCR, len
    );
    // magic + version + u16 header length + dict + padding + '\n'
    let unpadded = MAGIC.len() + 2 + 2 + dict.len() + 1;
    let padding = (HEADER_ALIGN - unpadded % HEADER_ALIGN) % HEADER_ALIGN;
    let header_len = (dict.len() + padding + 1) as u16;

    let mut bytes = Vec::with_capacity(unpadded + padding);
    bytes.extend_from_slice(MAGIC);
    bytes.extend_from_slice(&[1, 0]);
    bytes.extend_from_slice(&header_len.to_le_bytes());
    bytes.extend_from_slice(dict.as_bytes());
    bytes.resize(bytes.len() + padding, b' ');
    bytes.push(b'\n');
    bytes
}

/// Encode `values` as the bytes of a `.npy` file.
pub fn encode_int64(values: &[i64]) -> Vec<u8> {
    let mut bytes = header(values.len());
    bytes.reserve(values.len() * 8);
    for value in values {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}

/// Write `values` to `path`, replacing any existing file.
pub fn write_int64(path: &Path, values: &[i64]) -> Result<()> {
    fs::write(path, encode_int64(values)).map_err(|e| LabelError::io(path, e))
}

/// Read a 1-D little-endian int64 array written by [`write_int64`].
pub fn read_int64(path: &Path) -> Result<Vec<i64>> {
    let bytes = fs::read(path).map_err(|e| LabelError::io(path, e))?;
    let invalid = |reason: &str| {
        LabelError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidData, reason.to_string()),
        )
    };

    if bytes.len() < 10 || &bytes[..MAGIC.len()] != MAGIC {
        return Err(invalid("not a valid npy file"));
    }
    if bytes[6] != 1 {
        return Err(invalid("unsupported npy version"));
    }

    let header_len = u16::from_le_bytes([bytes[8], bytes[9]]) as usize;
    let data_start = 10 + header_len;
    if bytes.len() < data_start {
        return Err(invalid("npy header is truncated"));
    }

    let header = std::str::from_utf8(&bytes[10..data_start])
        .map_err(|_| invalid("invalid npy header encoding"))?;
    if !header.contains(DESCR) {
        return Err(invalid("npy data is not little-endian int64"));
    }

    let data = &bytes[data_start..];
    if data.len() % 8 != 0 {
        return Err(invalid("npy data is not a whole number of int64 values"));
    }

    Ok(data
        .chunks_exact(8)
        .map(|chunk| {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(chunk);
            i64::from_le_bytes(raw)
        })
        .collect())
}
