//! Value Representation vocabulary.
//!
//! A VR is the two-letter code that declares how an element's raw value is
//! encoded. This module only knows which codes exist; which of them carry a
//! conversion rule is decided by `dispatch`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Standard DICOM value representations (PS3.5 section 6.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Vr {
    AE,
    AS,
    AT,
    CS,
    DA,
    DS,
    DT,
    FL,
    FD,
    IS,
    LO,
    LT,
    OB,
    OD,
    OF,
    OL,
    OV,
    OW,
    PN,
    SH,
    SL,
    SQ,
    SS,
    ST,
    SV,
    TM,
    UC,
    UI,
    UL,
    UN,
    UR,
    US,
    UT,
    UV,
}

impl Vr {
    /// Every recognized code, in alphabetical order.
    pub const ALL: [Vr; 34] = [
        Vr::AE,
        Vr::AS,
        Vr::AT,
        Vr::CS,
        Vr::DA,
        Vr::DS,
        Vr::DT,
        Vr::FL,
        Vr::FD,
        Vr::IS,
        Vr::LO,
        Vr::LT,
        Vr::OB,
        Vr::OD,
        Vr::OF,
        Vr::OL,
        Vr::OV,
        Vr::OW,
        Vr::PN,
        Vr::SH,
        Vr::SL,
        Vr::SQ,
        Vr::SS,
        Vr::ST,
        Vr::SV,
        Vr::TM,
        Vr::UC,
        Vr::UI,
        Vr::UL,
        Vr::UN,
        Vr::UR,
        Vr::US,
        Vr::UT,
        Vr::UV,
    ];

    /// Look up a VR by its two-letter code.
    ///
    /// Codes are matched exactly; `"ds"` and `"DS "` are not recognized.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|vr| vr.code() == code)
    }

    pub const fn code(self) -> &'static str {
        match self {
            Vr::AE => "AE",
            Vr::AS => "AS",
            Vr::AT => "AT",
            Vr::CS => "CS",
            Vr::DA => "DA",
            Vr::DS => "DS",
            Vr::DT => "DT",
            Vr::FL => "FL",
            Vr::FD => "FD",
            Vr::IS => "IS",
            Vr::LO => "LO",
            Vr::LT => "LT",
            Vr::OB => "OB",
            Vr::OD => "OD",
            Vr::OF => "OF",
            Vr::OL => "OL",
            Vr::OV => "OV",
            Vr::OW => "OW",
            Vr::PN => "PN",
            Vr::SH => "SH",
            Vr::SL => "SL",
            Vr::SQ => "SQ",
            Vr::SS => "SS",
            Vr::ST => "ST",
            Vr::SV => "SV",
            Vr::TM => "TM",
            Vr::UC => "UC",
            Vr::UI => "UI",
            Vr::UL => "UL",
            Vr::UN => "UN",
            Vr::UR => "UR",
            Vr::US => "US",
            Vr::UT => "UT",
            Vr::UV => "UV",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Vr::AE => "Application Entity",
            Vr::AS => "Age String",
            Vr::AT => "Attribute Tag",
            Vr::CS => "Code String",
            Vr::DA => "Date",
            Vr::DS => "Decimal String",
            Vr::DT => "Date Time",
            Vr::FL => "Floating Point Single",
            Vr::FD => "Floating Point Double",
            Vr::IS => "Integer String",
            Vr::LO => "Long String",
            Vr::LT => "Long Text",
            Vr::OB => "Other Byte",
            Vr::OD => "Other Double",
            Vr::OF => "Other Float",
            Vr::OL => "Other Long",
            Vr::OV => "Other 64-bit Very Long",
            Vr::OW => "Other Word",
            Vr::PN => "Person Name",
            Vr::SH => "Short String",
            Vr::SL => "Signed Long",
            Vr::SQ => "Sequence of Items",
            Vr::SS => "Signed Short",
            Vr::ST => "Short Text",
            Vr::SV => "Signed 64-bit Very Long",
            Vr::TM => "Time",
            Vr::UC => "Unlimited Characters",
            Vr::UI => "Unique Identifier",
            Vr::UL => "Unsigned Long",
            Vr::UN => "Unknown",
            Vr::UR => "Universal Resource Identifier",
            Vr::US => "Unsigned Short",
            Vr::UT => "Unlimited Text",
            Vr::UV => "Unsigned 64-bit Very Long",
        }
    }
}

impl fmt::Display for Vr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Vr {
    type Err = ParseError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::from_code(code).ok_or_else(|| ParseError::UnsupportedVr {
            code: code.to_string(),
        })
    }
}
