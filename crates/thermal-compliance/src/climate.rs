//! Köppen climate zones for threshold selection

use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::EvaluationError;

/// Köppen climate classification of the building site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClimateZone {
    // Tropical
    Af,
    Am,
    Aw,
    As,
    // Dry
    BWh,
    BWk,
    BSh,
    BSk,
    // Temperate
    Cfa,
    Cfb,
    Cfc,
    Csa,
    Csb,
    Csc,
    // Continental
    Dfa,
    Dfb,
    Dfc,
    Dfd,
    Dsa,
    Dsb,
    Dsc,
    Dsd,
    // Polar
    ET,
    EF,
}

impl ClimateZone {
    pub const ALL: [ClimateZone; 24] = [
        ClimateZone::Af,
        ClimateZone::Am,
        ClimateZone::Aw,
        ClimateZone::As,
        ClimateZone::BWh,
        ClimateZone::BWk,
        ClimateZone::BSh,
        ClimateZone::BSk,
        ClimateZone::Cfa,
        ClimateZone::Cfb,
        ClimateZone::Cfc,
        ClimateZone::Csa,
        ClimateZone::Csb,
        ClimateZone::Csc,
        ClimateZone::Dfa,
        ClimateZone::Dfb,
        ClimateZone::Dfc,
        ClimateZone::Dfd,
        ClimateZone::Dsa,
        ClimateZone::Dsb,
        ClimateZone::Dsc,
        ClimateZone::Dsd,
        ClimateZone::ET,
        ClimateZone::EF,
    ];

    /// Zone used when the run configuration does not name one
    pub const DEFAULT: ClimateZone = ClimateZone::Csa;

    /// Köppen code, e.g. "Cfa"
    pub fn code(&self) -> &'static str {
        match self {
            ClimateZone::Af => "Af",
            ClimateZone::Am => "Am",
            ClimateZone::Aw => "Aw",
            ClimateZone::As => "As",
            ClimateZone::BWh => "BWh",
            ClimateZone::BWk => "BWk",
            ClimateZone::BSh => "BSh",
            ClimateZone::BSk => "BSk",
            ClimateZone::Cfa => "Cfa",
            ClimateZone::Cfb => "Cfb",
            ClimateZone::Cfc => "Cfc",
            ClimateZone::Csa => "Csa",
            ClimateZone::Csb => "Csb",
            ClimateZone::Csc => "Csc",
            ClimateZone::Dfa => "Dfa",
            ClimateZone::Dfb => "Dfb",
            ClimateZone::Dfc => "Dfc",
            ClimateZone::Dfd => "Dfd",
            ClimateZone::Dsa => "Dsa",
            ClimateZone::Dsb => "Dsb",
            ClimateZone::Dsc => "Dsc",
            ClimateZone::Dsd => "Dsd",
            ClimateZone::ET => "ET",
            ClimateZone::EF => "EF",
        }
    }

    /// Full identifier as offered in the function inputs, e.g. "Cfa_HumidSubtropical"
    pub fn identifier(&self) -> &'static str {
        match self {
            ClimateZone::Af => "Af_TropicalRainforest",
            ClimateZone::Am => "Am_TropicalMonsoon",
            ClimateZone::Aw => "Aw_TropicalSavanna",
            ClimateZone::As => "As_TropicalSavanna",
            ClimateZone::BWh => "BWh_HotDesert",
            ClimateZone::BWk => "BWk_ColdDesert",
            ClimateZone::BSh => "BSh_HotSemiArid",
            ClimateZone::BSk => "BSk_ColdSemiArid",
            ClimateZone::Cfa => "Cfa_HumidSubtropical",
            ClimateZone::Cfb => "Cfb_Oceanic",
            ClimateZone::Cfc => "Cfc_SubpolarOceanic",
            ClimateZone::Csa => "Csa_MediterraneanHotSummer",
            ClimateZone::Csb => "Csb_MediterraneanWarmSummer",
            ClimateZone::Csc => "Csc_MediterraneanCoolSummer",
            ClimateZone::Dfa => "Dfa_HumidContinentalHotSummer",
            ClimateZone::Dfb => "Dfb_HumidContinentalMildSummer",
            ClimateZone::Dfc => "Dfc_Subarctic",
            ClimateZone::Dfd => "Dfd_SubarcticExtremeWinter",
            ClimateZone::Dsa => "Dsa_MediterraneanInfluenceSnowyWinter",
            ClimateZone::Dsb => "Dsb_MediterraneanInfluenceSnowyWinter",
            ClimateZone::Dsc => "Dsc_MediterraneanInfluenceSnowyWinter",
            ClimateZone::Dsd => "Dsd_MediterraneanInfluenceSnowyWinter",
            ClimateZone::ET => "ET_Tundra",
            ClimateZone::EF => "EF_IceCap",
        }
    }

    /// Parse from Köppen code or full identifier (case-insensitive)
    pub fn parse_code(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Self::ALL.into_iter().find(|zone| {
            zone.code().eq_ignore_ascii_case(wanted)
                || zone.identifier().eq_ignore_ascii_case(wanted)
        })
    }
}

impl FromStr for ClimateZone {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_code(s).ok_or_else(|| {
            EvaluationError::InvalidConfiguration(format!("unknown climate zone '{}'", s))
        })
    }
}

impl std::fmt::Display for ClimateZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

impl Serialize for ClimateZone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_parsing() {
        assert_eq!(ClimateZone::parse_code("Cfa"), Some(ClimateZone::Cfa));
        assert_eq!(ClimateZone::parse_code("cfa"), Some(ClimateZone::Cfa));
        assert_eq!(
            ClimateZone::parse_code("Cfa_HumidSubtropical"),
            Some(ClimateZone::Cfa)
        );
        assert_eq!(ClimateZone::parse_code("  et_tundra "), Some(ClimateZone::ET));
        assert_eq!(ClimateZone::parse_code("InvalidZone123"), None);
        assert_eq!(ClimateZone::parse_code(""), None);
    }

    #[test]
    fn test_from_str_reports_invalid_configuration() {
        let err = "InvalidZone123".parse::<ClimateZone>().unwrap_err();
        assert!(matches!(err, EvaluationError::InvalidConfiguration(ref msg) if msg.contains("InvalidZone123")));
    }

    #[test]
    fn test_codes_and_identifiers_round_trip() {
        for zone in ClimateZone::ALL {
            assert_eq!(ClimateZone::parse_code(zone.code()), Some(zone));
            assert_eq!(ClimateZone::parse_code(zone.identifier()), Some(zone));
            assert!(zone.identifier().starts_with(zone.code()));
        }
    }

    #[test]
    fn test_serializes_as_identifier() {
        let json = serde_json::to_string(&ClimateZone::Cfa).unwrap();
        assert_eq!(json, "\"Cfa_HumidSubtropical\"");
        assert_eq!(ClimateZone::DEFAULT.to_string(), "Csa_MediterraneanHotSummer");
    }
}
