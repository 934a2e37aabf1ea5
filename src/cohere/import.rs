use super::{CONFIG_PATH, Config};
use crate::sdk::{
    FieldName, FileContents, ImportAttempt, ImportCandidate, ImportInput, ItemFields, TryFile,
};
use tracing::debug;

pub fn try_cohere_config_file() -> TryFile {
    TryFile::new(CONFIG_PATH, parse_config)
}

/// Reads the active context out of a Cohere CLI config file. Contexts other
/// than the one named by `CurrentURL` are ignored.
fn parse_config(contents: &FileContents, _input: &ImportInput, out: &mut ImportAttempt) {
    let config: Config = match contents.to_json() {
        Ok(config) => config,
        Err(err) => {
            out.add_error(err);
            return;
        }
    };

    let Some(settings) = config.current().filter(|settings| !settings.jwt.is_empty()) else {
        debug!("cohere config has no JWT for the current context");
        return;
    };

    if config.contexts.len() > 1 {
        debug!(
            ignored = config.contexts.len() - 1,
            "ignoring inactive cohere contexts"
        );
    }

    out.add_candidate(ImportCandidate {
        fields: ItemFields::from([
            (FieldName::Url, config.current_url.clone()),
            (FieldName::Jwt, settings.jwt.clone()),
            (FieldName::Email, settings.email.clone()),
        ]),
    });
}
