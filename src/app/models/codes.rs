//! Coded field classification
//!
//! ULS records carry short categorical codes (radio service, operator class,
//! history action). Each coded domain is an enum with an explicit table of
//! `(value, code, description)` rows; [`classify`] turns a raw code into a
//! [`Classification`] and falls back to the domain's `Unknown` value paired
//! with the raw input when the code is not in the table.

use serde::{Deserialize, Serialize};

/// A coded field domain backed by a static code table
pub trait CodeDomain: Copy + PartialEq + 'static {
    /// Sentinel for codes that are not in [`CodeDomain::TABLE`]
    const UNKNOWN: Self;

    /// Every recognised value with its wire code and description
    const TABLE: &'static [(Self, &'static str, &'static str)];

    /// Parse an exact, case-sensitive code
    fn from_code(code: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(_, known, _)| *known == code)
            .map(|(value, _, _)| *value)
    }

    /// Human-readable description for this value
    fn description(self) -> &'static str {
        Self::TABLE
            .iter()
            .find(|(value, _, _)| *value == self)
            .map(|(_, _, description)| *description)
            .unwrap_or(UNKNOWN_DESCRIPTION)
    }
}

/// Description attached to every domain's unknown sentinel
pub const UNKNOWN_DESCRIPTION: &str = "Unknown";

/// Result of classifying a raw code: the enum value and its description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification<T> {
    pub code: T,
    pub description: String,
}

impl<T: CodeDomain> Classification<T> {
    /// Whether the raw code was recognised
    pub fn is_known(&self) -> bool {
        self.code != T::UNKNOWN
    }
}

/// Classify a raw code within a domain
///
/// Blank and unrecognised codes yield `T::UNKNOWN` with the raw code passed
/// through unchanged as the description, so an empty code produces an empty
/// description rather than "Unknown".
pub fn classify<T: CodeDomain>(raw: &str) -> Classification<T> {
    let known = if raw.trim().is_empty() {
        None
    } else {
        T::from_code(raw)
    };

    match known {
        Some(code) => Classification {
            code,
            description: code.description().to_string(),
        },
        None => Classification {
            code: T::UNKNOWN,
            description: raw.to_string(),
        },
    }
}

// =============================================================================
// Radio Service
// =============================================================================

/// Radio service code of a license (`HD` position 6)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RadioService {
    #[default]
    Unknown,
    Commercial,
    Amateur,
    Vanity,
    Restricted,
    Gmrs,
    PublicSafety,
    IndustrialBusiness,
    ShipVoluntary,
    ShipCompulsory,
    MicrowavePublicSafety,
}

impl CodeDomain for RadioService {
    const UNKNOWN: Self = RadioService::Unknown;

    const TABLE: &'static [(Self, &'static str, &'static str)] = &[
        (RadioService::Commercial, "CM", "Commercial"),
        (RadioService::Amateur, "HA", "Amateur"),
        (RadioService::Vanity, "HV", "Vanity"),
        (RadioService::Restricted, "RR", "Restricted"),
        (RadioService::Gmrs, "ZA", "GMRS"),
        (RadioService::PublicSafety, "PW", "Public Safety"),
        (RadioService::IndustrialBusiness, "IG", "Industrial/Business"),
        (RadioService::ShipVoluntary, "SA", "Ship (Voluntarily)"),
        (RadioService::ShipCompulsory, "SB", "Ship (Compulsory)"),
        (RadioService::MicrowavePublicSafety, "MW", "Microwave Public Safety"),
    ];
}

// =============================================================================
// Operator Class
// =============================================================================

/// Amateur operator license class (`AM` position 5)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorClass {
    #[default]
    Unknown,
    Technician,
    AmateurExtra,
    General,
    Novice,
    Advanced,
    TechnicianPlus,
}

impl CodeDomain for OperatorClass {
    const UNKNOWN: Self = OperatorClass::Unknown;

    const TABLE: &'static [(Self, &'static str, &'static str)] = &[
        (OperatorClass::Technician, "T", "Technician"),
        (OperatorClass::AmateurExtra, "E", "Amateur Extra"),
        (OperatorClass::General, "G", "General"),
        (OperatorClass::Novice, "N", "Novice"),
        (OperatorClass::Advanced, "A", "Advanced"),
        (OperatorClass::TechnicianPlus, "P", "Technician Plus"),
    ];
}

// =============================================================================
// History Action
// =============================================================================

/// License history action (`HS` position 5)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryAction {
    #[default]
    Unknown,
    LicenseRenewed,
    AdministrativeUpdate,
    LicenseExpired,
    FrnAssociationEmail,
    LicenseTinAdded,
    InternalCorrection,
    AuthorizationPrinted,
    LicenseCanceled,
    FrnAssociationLetter,
    LicenseIssued,
    VanityCallSignAssigned,
    SystematicCallSignAssigned,
    LicenseModified,
    ReferenceCopyRequested,
    RenewalReminderLetter,
    LicenseConverted,
    AuditResponseOperational,
    ApplicationReceiptEmail,
    ApplicationReceiptEmailFailed,
    ApplicationReceiptLetter,
    LicenseAuditLetter,
    ConstructionReminderLetter,
    PublicSafetyRenewalEmail,
    PaperlessRenewalReminder,
    AutoTerminationLetter,
    SiteBasedAutoTermNotice,
    LicenseAssigned,
}

impl CodeDomain for HistoryAction {
    const UNKNOWN: Self = HistoryAction::Unknown;

    const TABLE: &'static [(Self, &'static str, &'static str)] = &[
        (HistoryAction::LicenseRenewed, "LIREN", "License Renewed"),
        (HistoryAction::AdministrativeUpdate, "LIAUA", "Administrative Update Applied"),
        (HistoryAction::LicenseExpired, "LIEXP", "License Status Set to Expired"),
        (
            HistoryAction::FrnAssociationEmail,
            "ESCFRN",
            "FRN Association email sent: CORES email",
        ),
        (HistoryAction::LicenseTinAdded, "LITIN", "License TIN Added"),
        (HistoryAction::InternalCorrection, "COR", "Internal Correction Applied"),
        (HistoryAction::AuthorizationPrinted, "AUTHPR", "Authorization Printed"),
        (HistoryAction::LicenseCanceled, "LICAN", "License Canceled"),
        (HistoryAction::FrnAssociationLetter, "LTSFRN", "FRN Association Letter sent"),
        (HistoryAction::LicenseIssued, "LIISS", "License Issued"),
        (HistoryAction::VanityCallSignAssigned, "VANGRT", "Vanity Call Sign Assigned"),
        (
            HistoryAction::SystematicCallSignAssigned,
            "SYSGRT",
            "New Systematic Call Sign Assigned",
        ),
        (HistoryAction::LicenseModified, "LIMOD", "License Modified"),
        (
            HistoryAction::ReferenceCopyRequested,
            "RCDUP",
            "Reference Copy Duplicate Requested",
        ),
        (HistoryAction::RenewalReminderLetter, "LETRES", "Renewal Reminder Letter Sent"),
        (HistoryAction::LicenseConverted, "LICCNV", "License Converted"),
        (
            HistoryAction::AuditResponseOperational,
            "AUDOPR",
            "Audit Response - License Operational",
        ),
        (
            HistoryAction::ApplicationReceiptEmail,
            "ESCAPR",
            "Application receipt email sent: CORES email",
        ),
        (
            HistoryAction::ApplicationReceiptEmailFailed,
            "EFCAPR",
            "Application receipt email failed: CORES email",
        ),
        (
            HistoryAction::ApplicationReceiptLetter,
            "LTSAPR",
            "Application Receipt Letter sent",
        ),
        (HistoryAction::LicenseAuditLetter, "LETAUS", "License Audit Letter Sent"),
        (
            HistoryAction::ConstructionReminderLetter,
            "LETCNS",
            "Construction/Coverage Reminder Letter Sent",
        ),
        (
            HistoryAction::PublicSafetyRenewalEmail,
            "ESURNW",
            "Public Safety Renewal email sent: ULS email",
        ),
        (
            HistoryAction::PaperlessRenewalReminder,
            "PLRRPR",
            "Paperless Renewal Reminder Letter",
        ),
        (
            HistoryAction::AutoTerminationLetter,
            "LETTRS",
            "License Auto Termination Letter Sent",
        ),
        (
            HistoryAction::SiteBasedAutoTermNotice,
            "PNLISR",
            "Site Based Auto Term PN Generated",
        ),
        (
            HistoryAction::LicenseAssigned,
            "LIASS",
            "License Assigned (Full Assignment)",
        ),
    ];
}
