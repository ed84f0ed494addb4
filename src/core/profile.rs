use serde::{Deserialize, Serialize};

/// XRechnung 3.0 specification identifier (BT-24).
pub const XRECHNUNG_URN: &str = "urn:cen.eu:en16931:2017#compliant#urn:xeinkauf.de:kosit:xrechnung_3.0";

/// PEPPOL BIS Billing 3.0 specification identifier (BT-24).
pub const PEPPOL_URN: &str =
    "urn:cen.eu:en16931:2017#compliant#urn:fdc:peppol.eu:2017:poacc:billing:3.0";

/// PEPPOL BIS Billing 3.0 business process (BT-23).
pub const PEPPOL_PROCESS: &str = "urn:fdc:peppol.eu:2017:poacc:billing:01:1.0";

/// Conformance level of an invoice.
///
/// Levels are ordered: every level includes the elements of all lower ones,
/// so "at least Basic" is `profile >= Profile::Basic`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Profile {
    /// Specification identifier not recognised.
    #[default]
    Unknown,
    /// Factur-X / ZUGFeRD Minimum.
    Minimum,
    /// Factur-X / ZUGFeRD Basic WL (no lines).
    BasicWl,
    /// Factur-X / ZUGFeRD Basic.
    Basic,
    /// Plain EN 16931 (also PEPPOL BIS Billing 3.0).
    En16931,
    /// Factur-X / ZUGFeRD Extended.
    Extended,
    /// XRechnung CIUS.
    XRechnung,
}

static PROFILE_URNS: &[(&str, Profile)] = &[
    ("urn:factur-x.eu:1p0:minimum", Profile::Minimum),
    ("urn:zugferd.de:2p0:minimum", Profile::Minimum),
    ("urn:factur-x.eu:1p0:basicwl", Profile::BasicWl),
    ("urn:zugferd.de:2p0:basicwl", Profile::BasicWl),
    (
        "urn:cen.eu:en16931:2017#compliant#urn:factur-x.eu:1p0:basic",
        Profile::Basic,
    ),
    (
        "urn:cen.eu:en16931:2017#compliant#urn:zugferd.de:2p0:basic",
        Profile::Basic,
    ),
    ("urn:cen.eu:en16931:2017", Profile::En16931),
    (PEPPOL_URN, Profile::En16931),
    (
        "urn:cen.eu:en16931:2017#conformant#urn:factur-x.eu:1p0:extended",
        Profile::Extended,
    ),
    (
        "urn:cen.eu:en16931:2017#conformant#urn:zugferd.de:2p0:extended",
        Profile::Extended,
    ),
    (XRECHNUNG_URN, Profile::XRechnung),
    (
        "urn:cen.eu:en16931:2017#compliant#urn:xoev-de:kosit:standard:xrechnung_2.3",
        Profile::XRechnung,
    ),
    (
        "urn:cen.eu:en16931:2017#compliant#urn:xoev-de:kosit:standard:xrechnung_2.2",
        Profile::XRechnung,
    ),
    (
        "urn:cen.eu:en16931:2017#compliant#urn:xoev-de:kosit:standard:xrechnung_2.1",
        Profile::XRechnung,
    ),
    (
        "urn:cen.eu:en16931:2017#compliant#urn:xoev-de:kosit:standard:xrechnung_2.0",
        Profile::XRechnung,
    ),
];

impl Profile {
    /// Look up a BT-24 specification identifier. Unrecognised values yield
    /// [`Profile::Unknown`].
    pub fn from_urn(urn: &str) -> Self {
        let urn = urn.trim();
        PROFILE_URNS
            .iter()
            .find(|(u, _)| *u == urn)
            .map(|(_, p)| *p)
            .unwrap_or(Profile::Unknown)
    }

    /// Canonical BT-24 value written for this profile. `Unknown` has none.
    pub fn urn(&self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Minimum => "urn:factur-x.eu:1p0:minimum",
            Self::BasicWl => "urn:factur-x.eu:1p0:basicwl",
            Self::Basic => "urn:cen.eu:en16931:2017#compliant#urn:factur-x.eu:1p0:basic",
            Self::En16931 => "urn:cen.eu:en16931:2017",
            Self::Extended => "urn:cen.eu:en16931:2017#conformant#urn:factur-x.eu:1p0:extended",
            Self::XRechnung => XRECHNUNG_URN,
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Self::Unknown
    }

    /// Profile used by the validator when deciding which rules apply.
    /// An unknown profile is checked as plain EN 16931.
    pub(crate) fn effective(&self) -> Self {
        match self {
            Self::Unknown => Self::En16931,
            p => *p,
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Minimum => "Minimum",
            Self::BasicWl => "Basic WL",
            Self::Basic => "Basic",
            Self::En16931 => "EN 16931",
            Self::Extended => "Extended",
            Self::XRechnung => "XRechnung",
        };
        f.write_str(name)
    }
}

/// Whether a BT-23 business process identifier is a PEPPOL billing process,
/// `urn:fdc:peppol.eu:2017:poacc:billing:NN:1.0` with exactly two digits.
pub fn is_peppol_process(process: &str) -> bool {
    const PREFIX: &str = "urn:fdc:peppol.eu:2017:poacc:billing:";
    const SUFFIX: &str = ":1.0";
    let Some(rest) = process.trim().strip_prefix(PREFIX) else {
        return false;
    };
    let Some(nn) = rest.strip_suffix(SUFFIX) else {
        return false;
    };
    nn.len() == 2 && nn.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_ordered() {
        assert!(Profile::Unknown < Profile::Minimum);
        assert!(Profile::Minimum < Profile::BasicWl);
        assert!(Profile::BasicWl < Profile::Basic);
        assert!(Profile::Basic < Profile::En16931);
        assert!(Profile::En16931 < Profile::Extended);
        assert!(Profile::Extended < Profile::XRechnung);
    }

    #[test]
    fn urn_lookup() {
        assert_eq!(Profile::from_urn("urn:factur-x.eu:1p0:minimum"), Profile::Minimum);
        assert_eq!(Profile::from_urn(" urn:cen.eu:en16931:2017 "), Profile::En16931);
        assert_eq!(Profile::from_urn(XRECHNUNG_URN), Profile::XRechnung);
        assert_eq!(Profile::from_urn(PEPPOL_URN), Profile::En16931);
        assert_eq!(Profile::from_urn("urn:example:nothing"), Profile::Unknown);
        assert_eq!(Profile::from_urn(""), Profile::Unknown);
    }

    #[test]
    fn urn_roundtrip_for_known_profiles() {
        for p in [
            Profile::Minimum,
            Profile::BasicWl,
            Profile::Basic,
            Profile::En16931,
            Profile::Extended,
            Profile::XRechnung,
        ] {
            assert_eq!(Profile::from_urn(p.urn()), p);
        }
    }

    #[test]
    fn peppol_process_detection() {
        assert!(is_peppol_process(PEPPOL_PROCESS));
        assert!(is_peppol_process("urn:fdc:peppol.eu:2017:poacc:billing:42:1.0"));
        assert!(!is_peppol_process("urn:fdc:peppol.eu:2017:poacc:billing:1:1.0"));
        assert!(!is_peppol_process("urn:fdc:peppol.eu:2017:poacc:billing:123:1.0"));
        assert!(!is_peppol_process("urn:fdc:peppol.eu:2017:poacc:billing:ab:1.0"));
        assert!(!is_peppol_process("urn:fdc:peppol.eu:2017:poacc:billing:01:2.0"));
        assert!(!is_peppol_process(""));
    }
}
