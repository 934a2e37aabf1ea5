use super::{PluginError, TempFile, TryAll};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// Identifier of a credential field, shared by provisioning and import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldName {
    #[serde(rename = "JWT")]
    Jwt,
    Email,
    #[serde(rename = "URL")]
    Url,
}

impl FieldName {
    pub const ALL: [FieldName; 3] = [FieldName::Jwt, FieldName::Email, FieldName::Url];

    pub const fn as_str(self) -> &'static str {
        match self {
            FieldName::Jwt => "JWT",
            FieldName::Email => "Email",
            FieldName::Url => "URL",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        FieldName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PluginError::UnknownField(trimmed.to_string()))
    }
}

pub type ItemFields = BTreeMap<FieldName, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialField {
    pub name: FieldName,
    pub markdown_description: &'static str,
    pub secret: bool,
    pub optional: bool,
}

/// Everything the host needs to know about one kind of credential: how to
/// present its fields, how to provision it and where to look for existing
/// copies on disk.
#[derive(Debug, Clone)]
pub struct CredentialType {
    pub name: &'static str,
    pub docs_url: &'static str,
    pub management_url: &'static str,
    pub fields: Vec<CredentialField>,
    pub default_provisioner: TempFile,
    pub importer: TryAll,
}

impl CredentialType {
    pub fn field(&self, name: FieldName) -> Option<&CredentialField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn missing_required(&self, fields: &ItemFields) -> Vec<FieldName> {
        self.fields
            .iter()
            .filter(|field| !field.optional && !fields.contains_key(&field.name))
            .map(|field| field.name)
            .collect()
    }
}
