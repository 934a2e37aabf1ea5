use super::{ApiSettings, Config};
use crate::sdk::{FieldName, PluginResult, ProvisionInput};
use tracing::debug;

/// Renders item fields as the Cohere CLI config file.
///
/// Returns `Ok(None)` when no JWT is present. A missing URL or email is
/// written as an empty string.
pub fn cohere_json(input: &ProvisionInput) -> PluginResult<Option<Vec<u8>>> {
    let fields = &input.item_fields;

    let Some(jwt) = fields.get(&FieldName::Jwt) else {
        debug!("no JWT supplied, skipping cohere config");
        return Ok(None);
    };

    let url = fields.get(&FieldName::Url).cloned().unwrap_or_default();
    let email = fields.get(&FieldName::Email).cloned().unwrap_or_default();

    let config = Config::single(
        url,
        ApiSettings {
            jwt: jwt.clone(),
            email,
        },
    );

    Ok(Some(serde_json::to_vec(&config)?))
}
