use crate::sdk::{CredentialField, CredentialType, ItemFields};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};

/// Asks for every declared field that has no value yet. Empty answers are
/// left out.
pub fn fill_missing(credential: &CredentialType, fields: &mut ItemFields) -> Result<(), InquireError> {
    for field in &credential.fields {
        if fields.contains_key(&field.name) {
            continue;
        }

        let answer = ask(field)?;
        if !answer.is_empty() {
            fields.insert(field.name, answer);
        }
    }

    Ok(())
}

fn ask(field: &CredentialField) -> Result<String, InquireError> {
    let label = match field.optional {
        true => format!("{} (optional)", field.name),
        false => field.name.to_string(),
    };

    if field.secret {
        return Password::new(&label)
            .with_help_message(field.markdown_description)
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt();
    }

    Text::new(&label)
        .with_help_message(field.markdown_description)
        .prompt()
}
