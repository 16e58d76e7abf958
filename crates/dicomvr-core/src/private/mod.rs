//! Vendor private tag resolution.
//!
//! Elements read with the generic `UN` VR are looked up by vendor and tag in
//! a static table; a hit names the real VR and a decoding recipe for the raw
//! bytes. Misses pass through untouched. Byte widths live in `layout`,
//! little-endian access in `reader`, the entries in `table`.
//!
//! Adding a vendor means adding a `Vendor` variant and its block of table
//! entries; the resolver itself does not branch on vendor.

pub mod error;
pub mod layout;
pub mod reader;
pub mod resolver;
pub mod table;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use error::PrivateError;
pub use resolver::resolve;
pub use table::{PrivateTagEntry, Recipe, lookup};

/// Equipment vendor whose private dictionary is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    #[serde(alias = "SIEMENS", alias = "Siemens")]
    Siemens,
}

impl Vendor {
    pub const ALL: [Vendor; 1] = [Vendor::Siemens];

    pub const fn name(self) -> &'static str {
        match self {
            Vendor::Siemens => "SIEMENS",
        }
    }

    /// Match a Manufacturer (0008,0070) value such as `"SIEMENS"` or
    /// `"Siemens Healthineers"`.
    pub fn from_manufacturer(manufacturer: &str) -> Option<Self> {
        let manufacturer = manufacturer.to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|vendor| manufacturer.contains(vendor.name()))
    }

    pub(crate) fn entries(self) -> &'static [PrivateTagEntry] {
        match self {
            Vendor::Siemens => table::SIEMENS,
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
#[error("unknown vendor '{name}'")]
pub struct UnknownVendorError {
    pub name: String,
}

impl FromStr for Vendor {
    type Err = UnknownVendorError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_manufacturer(name).ok_or_else(|| UnknownVendorError {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Vendor;

    #[test]
    fn manufacturer_matching_ignores_case() {
        assert_eq!(Vendor::from_manufacturer("SIEMENS"), Some(Vendor::Siemens));
        assert_eq!(
            Vendor::from_manufacturer("Siemens Healthineers"),
            Some(Vendor::Siemens)
        );
        assert_eq!(Vendor::from_manufacturer("GE MEDICAL SYSTEMS"), None);
    }

    #[test]
    fn parse_vendor_name() {
        assert_eq!("siemens".parse::<Vendor>().unwrap(), Vendor::Siemens);
        let err = "philips".parse::<Vendor>().unwrap_err();
        assert!(err.to_string().contains("unknown vendor"));
    }
}
