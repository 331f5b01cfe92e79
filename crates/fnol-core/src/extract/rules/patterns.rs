//! Regex patterns for claim document extraction.
//!
//! Only the policy number label is matched case-insensitively; every other
//! label must appear with its exact capitalisation.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Policy identification
    pub static ref POLICY_NUMBER: Regex = Regex::new(
        r"(?i)Policy Number[:\s]+([A-Z0-9]+)"
    ).unwrap();

    pub static ref POLICYHOLDER_NAME: Regex = Regex::new(
        r"Policyholder Name[:\s]+([A-Za-z ]+)"
    ).unwrap();

    pub static ref EFFECTIVE_DATES: Regex = Regex::new(
        r"Effective Dates[:\s]+(.+)"
    ).unwrap();

    // Incident
    pub static ref INCIDENT_DATE: Regex = Regex::new(
        r"Incident Date[:\s]+(.+)"
    ).unwrap();

    pub static ref INCIDENT_TIME: Regex = Regex::new(
        r"Incident Time[:\s]+(.+)"
    ).unwrap();

    pub static ref INCIDENT_LOCATION: Regex = Regex::new(
        r"Incident Location[:\s]+(.+)"
    ).unwrap();

    pub static ref DESCRIPTION: Regex = Regex::new(
        r"Description[:\s]+(.+)"
    ).unwrap();

    // Parties
    pub static ref CLAIMANT: Regex = Regex::new(
        r"Claimant[:\s]+([A-Za-z ]+)"
    ).unwrap();

    // Email pattern
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[A-Za-z]{2,}"
    ).unwrap();

    // Phone pattern (optional country code, ten-digit subscriber number)
    pub static ref PHONE: Regex = Regex::new(
        r"\+?\d{1,3}[-\s]?\d{10}"
    ).unwrap();

    // Asset
    pub static ref ASSET_TYPE: Regex = Regex::new(
        r"Asset Type[:\s]+(.+)"
    ).unwrap();

    pub static ref ASSET_ID: Regex = Regex::new(
        r"Asset ID[:\s]+(.+)"
    ).unwrap();

    // Damage amount (comma thousands separators: 12,500.00)
    pub static ref ESTIMATED_DAMAGE: Regex = Regex::new(
        r"(Estimated Damage|Initial Estimate)[:\s]+([\d,\.]+)"
    ).unwrap();

    // Claim classification
    pub static ref CLAIM_TYPE: Regex = Regex::new(
        r"Claim Type[:\s]+([A-Za-z]+)"
    ).unwrap();
}
