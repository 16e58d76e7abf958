use super::error::PrivateError;
use super::layout;

/// Little-endian access to a CSA-style packed value.
pub struct CsaReader<'a> {
    bytes: &'a [u8],
}

impl<'a> CsaReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn require_aligned(&self, width: usize) -> Result<(), PrivateError> {
        if self.bytes.len() % width != 0 {
            return Err(PrivateError::Misaligned {
                len: self.bytes.len(),
                width,
            });
        }
        Ok(())
    }

    pub fn read_f64_le_array(&self) -> Result<Vec<f64>, PrivateError> {
        self.require_aligned(layout::DOUBLE_WIDTH)?;
        Ok(self
            .bytes
            .chunks_exact(layout::DOUBLE_WIDTH)
            .map(|chunk| {
                let mut raw = [0u8; layout::DOUBLE_WIDTH];
                raw.copy_from_slice(chunk);
                f64::from_le_bytes(raw)
            })
            .collect())
    }

    pub fn read_first_f64_le(&self) -> Result<f64, PrivateError> {
        self.read_f64_le_array()?
            .first()
            .copied()
            .ok_or(PrivateError::Empty)
    }

    pub fn read_int_le(&self, width: usize, signed: bool) -> Result<i64, PrivateError> {
        if self.bytes.len() != width {
            return Err(PrivateError::WrongLength {
                expected: width,
                actual: self.bytes.len(),
            });
        }
        decode_int(self.bytes, signed)
    }

    pub fn read_int_le_array(&self, width: usize, signed: bool) -> Result<Vec<i64>, PrivateError> {
        if !layout::SUPPORTED_INT_WIDTHS.contains(&width) {
            return Err(PrivateError::UnsupportedWidth { width });
        }
        self.require_aligned(width)?;
        self.bytes
            .chunks_exact(width)
            .map(|chunk| decode_int(chunk, signed))
            .collect()
    }

    /// Text with trailing NUL padding and surrounding whitespace removed.
    pub fn read_trimmed_string(&self) -> String {
        let raw = String::from_utf8_lossy(self.bytes);
        raw.trim_end_matches(|c: char| c == '\0' || c.is_whitespace())
            .trim_start()
            .to_string()
    }
}

fn decode_int(bytes: &[u8], signed: bool) -> Result<i64, PrivateError> {
    let value = match (bytes.len(), signed) {
        (1, false) => bytes[0] as i64,
        (1, true) => bytes[0] as i8 as i64,
        (2, false) => u16::from_le_bytes([bytes[0], bytes[1]]) as i64,
        (2, true) => i16::from_le_bytes([bytes[0], bytes[1]]) as i64,
        (4, false) => u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as i64,
        (4, true) => i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as i64,
        (8, true) => {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(bytes);
            i64::from_le_bytes(raw)
        }
        (width, _) => return Err(PrivateError::UnsupportedWidth { width }),
    };
    Ok(value)
}
