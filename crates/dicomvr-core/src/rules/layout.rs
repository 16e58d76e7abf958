pub const VALUE_DELIMITER: char = '\\';

pub const DAYS_PER_YEAR: f64 = 365.25;
pub const WEEKS_PER_YEAR: f64 = 52.1775;
pub const MONTHS_PER_YEAR: f64 = 12.0;

pub const DATE_LEN: usize = 8;
pub const YEAR_RANGE: std::ops::Range<usize> = 0..4;
pub const MONTH_RANGE: std::ops::Range<usize> = 4..6;
pub const DAY_RANGE: std::ops::Range<usize> = 6..8;
/// ACR-NEMA dates are written `YYYY.MM.DD`.
pub const LEGACY_DATE_LEN: usize = 10;
pub const LEGACY_DATE_SEPARATOR: char = '.';

pub const HOUR_RANGE: std::ops::Range<usize> = 0..2;
pub const MINUTE_RANGE: std::ops::Range<usize> = 2..4;
pub const SECOND_RANGE: std::ops::Range<usize> = 4..6;
pub const LEGACY_TIME_SEPARATOR: char = ':';
pub const FRACTION_SEPARATOR: char = '.';
pub const MAX_FRACTION_DIGITS: usize = 6;

pub const OFFSET_LEN: usize = 5;
pub const OFFSET_HOUR_RANGE: std::ops::Range<usize> = 1..3;
pub const OFFSET_MINUTE_RANGE: std::ops::Range<usize> = 3..5;
