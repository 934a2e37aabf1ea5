use super::CmdResult;
use crate::{cohere, sdk::CredentialType};
use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    name: &'static str,
    #[tabled(rename = "Secret")]
    secret: &'static str,
    #[tabled(rename = "Required")]
    required: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
}

pub fn handle() -> CmdResult<()> {
    println!("{}", render(&cohere::credentials()));
    Ok(())
}

fn render(credential: &CredentialType) -> String {
    let rows = credential.fields.iter().map(|field| FieldRow {
        name: field.name.as_str(),
        secret: if field.secret { "yes" } else { "" },
        required: if field.optional { "" } else { "yes" },
        description: field.markdown_description,
    });

    let table = Table::new(rows).with(Style::rounded()).to_string();
    let sources: Vec<String> = credential
        .importer
        .importers()
        .iter()
        .map(|importer| importer.path().to_string())
        .collect();

    format!(
        "{}\n{} {}\n{} {}\n{} {}\n{} {}\n\n{table}",
        credential.name.bold(),
        "Docs:".dimmed(),
        credential.docs_url,
        "Manage:".dimmed(),
        credential.management_url,
        "Path:".dimmed(),
        credential.default_provisioner.path(),
        "Imports:".dimmed(),
        sources.join(", "),
    )
}
