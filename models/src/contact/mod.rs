pub mod builder;
pub mod validation;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================
// ENUMS
// ============================================

/// Legal form of the contact holder.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum BodyForm {
    /// Individual
    #[default]
    #[serde(rename = "IND")]
    Individual,
    /// Company
    #[serde(rename = "ORG")]
    Organization,
    /// Association
    #[serde(rename = "ASS")]
    Association,
    /// Public body
    #[serde(rename = "PUB")]
    Public,
}

// ============================================
// RECORDS
// ============================================

/// A contact as submitted to the registrar.
///
/// Text fields the backend treats as optional are sent as empty strings rather
/// than omitted. See [`validation`] for the required-field policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub body_form: BodyForm,
    #[serde(default)]
    pub body_name: String,
    #[serde(default)]
    pub address1: String,
    #[serde(default)]
    pub address2: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub fax: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub language: String,
    #[serde(
        default,
        serialize_with = "serialize_owner_flag",
        deserialize_with = "deserialize_owner_flag"
    )]
    pub is_owner: bool,
    #[serde(default)]
    pub company_number: String,
    #[serde(default)]
    pub vat_number: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub birth_city: String,
    #[serde(default)]
    pub birth_country: String,
    #[serde(default)]
    pub id_number: String,
    #[serde(default)]
    pub additional: String,
}

/// A partial contact edit. Only the fields that are `Some` are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_form: Option<BodyForm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl ContactUpdate {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == ContactUpdate::default()
    }
}

/// A contact as returned by the registrar: the submitted fields plus its identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactSnapshot {
    #[serde(rename = "idContact")]
    pub id: String,
    #[serde(flatten)]
    pub contact: Contact,
}

// ============================================
// OWNER FLAG (0/1 on the wire)
// ============================================

fn serialize_owner_flag<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*value))
}

fn deserialize_owner_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(u64),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(i) => i != 0,
        Flag::Text(s) => s.trim() == "1" || s.trim().eq_ignore_ascii_case("true"),
    })
}
