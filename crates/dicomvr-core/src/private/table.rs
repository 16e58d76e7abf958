//! Static private tag tables, one block of entries per vendor.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::Vendor;
use super::layout::{SIEMENS_GROUP, SLICE_TIMING_DECIMALS};
use crate::element::Tag;
use crate::vr::Vr;

/// How the raw bytes of a private element become a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    /// Contiguous little-endian IEEE-754 doubles.
    DoubleArray,
    /// Like `DoubleArray`, with each value rounded to `decimals` places.
    RoundedDoubleArray { decimals: u32 },
    /// The first packed double; anything after it is padding.
    FirstDouble,
    /// Text with NUL padding and surrounding whitespace stripped.
    TrimmedString,
    /// One little-endian integer filling the whole value.
    Integer { width: usize, signed: bool },
    /// Contiguous little-endian integers.
    IntegerArray { width: usize, signed: bool },
    /// Already IS/DS text; the standard rule for the VR applies.
    Textual(Vr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateTagEntry {
    pub vendor: Vendor,
    pub tag: Tag,
    pub keyword: &'static str,
    /// The VR the vendor actually encodes, hidden behind `UN`.
    pub true_vr: Vr,
    pub recipe: Recipe,
}

const fn siemens(element: u16, keyword: &'static str, true_vr: Vr, recipe: Recipe) -> PrivateTagEntry {
    PrivateTagEntry {
        vendor: Vendor::Siemens,
        tag: Tag::new(SIEMENS_GROUP, element),
        keyword,
        true_vr,
        recipe,
    }
}

pub static SIEMENS: &[PrivateTagEntry] = &[
    siemens(0x1008, "CsaImageHeaderType", Vr::CS, Recipe::TrimmedString),
    siemens(0x1009, "CsaImageHeaderVersion", Vr::LO, Recipe::TrimmedString),
    siemens(
        0x100A,
        "NumberOfImagesInMosaic",
        Vr::US,
        Recipe::Integer {
            width: 2,
            signed: false,
        },
    ),
    siemens(0x100B, "SliceMeasurementDuration", Vr::DS, Recipe::Textual(Vr::DS)),
    siemens(0x100C, "B_value", Vr::IS, Recipe::Textual(Vr::IS)),
    siemens(0x100D, "DiffusionDirectionality", Vr::CS, Recipe::TrimmedString),
    siemens(0x100E, "DiffusionGradientDirection", Vr::FD, Recipe::DoubleArray),
    siemens(0x100F, "GradientMode", Vr::SH, Recipe::TrimmedString),
    siemens(0x1011, "FlowCompensation", Vr::SH, Recipe::TrimmedString),
    siemens(
        0x1012,
        "TablePositionOrigin",
        Vr::SL,
        Recipe::IntegerArray {
            width: 4,
            signed: true,
        },
    ),
    siemens(
        0x1013,
        "ImaAbsTablePosition",
        Vr::SL,
        Recipe::IntegerArray {
            width: 4,
            signed: true,
        },
    ),
    siemens(0x1014, "ImaRelTablePosition", Vr::IS, Recipe::Textual(Vr::IS)),
    siemens(0x1015, "SlicePosition_PCS", Vr::FD, Recipe::DoubleArray),
    siemens(0x1016, "TimeAfterStart", Vr::DS, Recipe::Textual(Vr::DS)),
    siemens(0x1017, "SliceResolution", Vr::DS, Recipe::Textual(Vr::DS)),
    siemens(0x1018, "RealDwellTime", Vr::IS, Recipe::Textual(Vr::IS)),
    siemens(0x1027, "B_matrix", Vr::FD, Recipe::DoubleArray),
    siemens(0x1028, "BandwidthPerPixelPhaseEncode", Vr::FD, Recipe::FirstDouble),
    siemens(
        0x1029,
        "MosaicRefAcqTimes",
        Vr::FD,
        Recipe::RoundedDoubleArray {
            decimals: SLICE_TIMING_DECIMALS,
        },
    ),
];

static TABLE: LazyLock<HashMap<(Vendor, Tag), &'static PrivateTagEntry>> = LazyLock::new(|| {
    Vendor::ALL
        .iter()
        .flat_map(|vendor| vendor.entries())
        .map(|entry| ((entry.vendor, entry.tag), entry))
        .collect()
});

/// Find the entry for a vendor's private tag.
pub fn lookup(vendor: Vendor, tag: Tag) -> Option<&'static PrivateTagEntry> {
    TABLE.get(&(vendor, tag)).copied()
}

#[cfg(test)]
mod tests {
    use super::{Recipe, SIEMENS, lookup};
    use crate::element::Tag;
    use crate::private::Vendor;
    use std::collections::HashSet;

    #[test]
    fn lookup_by_exact_tag() {
        let entry = lookup(Vendor::Siemens, Tag::new(0x0019, 0x100e)).expect("entry");
        assert_eq!(entry.keyword, "DiffusionGradientDirection");
        assert_eq!(entry.recipe, Recipe::DoubleArray);
        assert!(lookup(Vendor::Siemens, Tag::new(0x0051, 0x1015)).is_none());
        assert!(lookup(Vendor::Siemens, Tag::new(0x0021, 0x100e)).is_none());
    }

    #[test]
    fn entries_are_unique_private_tags() {
        let mut seen = HashSet::new();
        for entry in SIEMENS {
            assert!(entry.tag.is_private(), "{} is not private", entry.tag);
            assert!(seen.insert(entry.tag), "duplicate entry for {}", entry.tag);
        }
    }
}
