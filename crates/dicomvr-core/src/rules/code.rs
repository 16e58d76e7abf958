//! Code String (CS) and the defined terms of enumerated attributes.

use tracing::debug;

use super::error::RuleError;
use super::{RuleContext, trim_padding};
use crate::element::Tag;
use crate::options::CodeStringPolicy;
use crate::value::Value;

pub const MODALITY: Tag = Tag::new(0x0008, 0x0060);
pub const PATIENT_SEX: Tag = Tag::new(0x0010, 0x0040);
pub const SCANNING_SEQUENCE: Tag = Tag::new(0x0018, 0x0020);
pub const SEQUENCE_VARIANT: Tag = Tag::new(0x0018, 0x0021);
pub const PATIENT_POSITION: Tag = Tag::new(0x0018, 0x5100);

const MODALITIES: &[&str] = &[
    "AR", "ASMT", "AU", "BDUS", "BI", "BMD", "CR", "CT", "CTPROTOCOL", "DG", "DOC", "DX", "ECG",
    "EPS", "ES", "FID", "GM", "HC", "HD", "IO", "IOL", "IVOCT", "IVUS", "KER", "KO", "LEN", "LS",
    "MG", "MR", "M3D", "NM", "OAM", "OCT", "OP", "OPM", "OPT", "OPTBSV", "OPTENF", "OPV", "OSS",
    "OT", "PLAN", "PR", "PT", "PX", "REG", "RESP", "RF", "RG", "RTDOSE", "RTIMAGE", "RTINTENT",
    "RTPLAN", "RTRAD", "RTRECORD", "RTSEGANN", "RTSTRUCT", "RWV", "SEG", "SM", "SMR", "SR", "SRF",
    "STAIN", "TEXTUREMAP", "TG", "US", "VA", "XA", "XC",
];
const PATIENT_SEXES: &[&str] = &["M", "F", "O"];
const SCANNING_SEQUENCES: &[&str] = &["SE", "IR", "GR", "EP", "RM"];
const SEQUENCE_VARIANTS: &[&str] = &["SK", "MTC", "SS", "TRSS", "SP", "MP", "OSP", "NONE"];
const PATIENT_POSITIONS: &[&str] = &[
    "HFP", "HFS", "HFDR", "HFDL", "FFDR", "FFDL", "FFP", "FFS", "LFP", "LFS", "RFP", "RFS", "AFDR",
    "AFDL", "PFDR", "PFDL",
];

/// Defined terms for an enumerated attribute, if the tag has any.
pub fn defined_terms(tag: Tag) -> Option<&'static [&'static str]> {
    match tag {
        MODALITY => Some(MODALITIES),
        PATIENT_SEX => Some(PATIENT_SEXES),
        SCANNING_SEQUENCE => Some(SCANNING_SEQUENCES),
        SEQUENCE_VARIANT => Some(SEQUENCE_VARIANTS),
        PATIENT_POSITION => Some(PATIENT_POSITIONS),
        _ => None,
    }
}

/// Code String, trimmed. Values outside the tag's defined terms are kept
/// unless the policy is strict.
pub fn parse_code_string(raw: &str, ctx: &RuleContext) -> Result<Value, RuleError> {
    let code = trim_padding(raw);
    if let Some(terms) = defined_terms(ctx.tag) {
        if !code.is_empty() && !terms.contains(&code) {
            if ctx.code_strings == CodeStringPolicy::Strict {
                return Err(RuleError::NotInEnumeration {
                    value: code.to_string(),
                    allowed: terms.join(", "),
                });
            }
            debug!(tag = %ctx.tag, code, "code string outside defined terms");
        }
    }
    Ok(Value::Text(code.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{MODALITY, PATIENT_SEX, parse_code_string};
    use crate::element::Tag;
    use crate::options::CodeStringPolicy;
    use crate::rules::RuleContext;
    use crate::rules::error::RuleError;
    use crate::value::Value;

    fn ctx(tag: Tag, code_strings: CodeStringPolicy) -> RuleContext {
        RuleContext { tag, code_strings }
    }

    #[test]
    fn trims_padding() {
        let ctx = ctx(MODALITY, CodeStringPolicy::Strict);
        assert_eq!(parse_code_string("MR ", &ctx), Ok(Value::Text("MR".into())));
    }

    #[test]
    fn lenient_keeps_unknown_terms() {
        let ctx = ctx(MODALITY, CodeStringPolicy::Lenient);
        assert_eq!(
            parse_code_string("KITTENS", &ctx),
            Ok(Value::Text("KITTENS".into()))
        );
    }

    #[test]
    fn strict_rejects_unknown_terms() {
        let ctx = ctx(PATIENT_SEX, CodeStringPolicy::Strict);
        let err = parse_code_string("X", &ctx).unwrap_err();
        assert!(matches!(err, RuleError::NotInEnumeration { .. }));
        assert!(err.to_string().contains("M, F, O"));
        assert_eq!(parse_code_string("", &ctx), Ok(Value::Text(String::new())));
    }

    #[test]
    fn free_codes_are_never_checked() {
        let ctx = ctx(Tag::new(0x0018, 0x0015), CodeStringPolicy::Strict);
        assert_eq!(
            parse_code_string("BRAIN", &ctx),
            Ok(Value::Text("BRAIN".into()))
        );
    }
}
