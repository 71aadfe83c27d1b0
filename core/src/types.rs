//! Public and backend schemas for the account resource.
//!
//! # Design
//! The public shapes (`CreateAccountRequest`, `FetchAccountResult`,
//! `CreateAccountResult`, `DeleteAccountResult`) and the backend shapes
//! (`BackendEnvelope`, `AccountData`) are kept as separate types. They are
//! connected only by the translators in `client.rs`, so the backend contract
//! (fixed `type`, generated `id`) can evolve without touching the public one.
//!
//! `AccountAttributes` is the one shape shared by both sides. Every field is
//! optional here: required-ness and formats are validated by the backend, and
//! empty values are omitted on the wire the same way the backend omits them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Literal `type` carried by every backend account record.
pub const ACCOUNT_TYPE: &str = "accounts";

/// A single user-defined key/value pair attached to an account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDefinedDatum {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

/// The externally visible account attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountAttributes {
    /// ISO 3166-1 alpha-2 country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// ISO 4217 currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_id_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternative_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_defined_data: Vec<UserDefinedDatum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_mask: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceptance_qualifier: Option<String>,
}

/// Public request payload for creating an account. There is no identifier
/// field: identifiers are always generated by the core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateAccountRequest {
    #[serde(default)]
    pub attributes: AccountAttributes,
    #[serde(default)]
    pub organisation_id: String,
}

/// The account record as the backend stores and returns it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountData {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub organisation_id: String,
    #[serde(default)]
    pub attributes: AccountAttributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
}

/// Pagination links the backend attaches to responses. Passed through only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Links {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// Backend wire envelope: resource data under a `data` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendEnvelope {
    pub data: AccountData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Public result of a successful fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FetchAccountResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    pub attributes: AccountAttributes,
}

/// Public result of a successful create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateAccountResult {
    pub account_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    pub attributes: AccountAttributes,
}

/// Public result of a successful delete, synthesized locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteAccountResult {
    pub message: String,
    pub success: bool,
}

/// Error body shape shared by the backend and the façade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub error_message: String,
}
