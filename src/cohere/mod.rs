//! Credentials stored by the Cohere CLI in `~/.command/config`.

mod import;
mod model;
mod provision;

pub use import::*;
pub use model::*;
pub use provision::*;

use crate::sdk::{CredentialField, CredentialType, FieldName, FixedPath, TempFile, TryAll};

pub const CONFIG_PATH: FixedPath = FixedPath::new("~/.command/config");

pub fn credentials() -> CredentialType {
    CredentialType {
        name: "Credentials",
        docs_url: "https://docs.cohere.com/reference/config",
        management_url: "https://dashboard.cohere.ai/",
        fields: vec![
            CredentialField {
                name: FieldName::Jwt,
                markdown_description: "JWT used to authenticate to Cohere stored in disk.",
                secret: true,
                optional: false,
            },
            CredentialField {
                name: FieldName::Email,
                markdown_description: "Email used to authenticate to Cohere.",
                secret: false,
                optional: true,
            },
            CredentialField {
                name: FieldName::Url,
                markdown_description: "URL of the operator server",
                secret: false,
                optional: true,
            },
        ],
        default_provisioner: TempFile::new(cohere_json, CONFIG_PATH),
        importer: TryAll::new([try_cohere_config_file()]),
    }
}
