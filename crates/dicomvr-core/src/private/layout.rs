/// Siemens CSA-style elements live in this private group.
pub const SIEMENS_GROUP: u16 = 0x0019;

pub const DOUBLE_WIDTH: usize = 8;
pub const SUPPORTED_INT_WIDTHS: [usize; 4] = [1, 2, 4, 8];

/// Slice timings are stored with float noise past this many decimals.
pub const SLICE_TIMING_DECIMALS: u32 = 5;

pub const DELIMITER_BYTE: u8 = b'\\';
