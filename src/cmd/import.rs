use super::{CmdResult, OutputFormat};
use crate::{
    cohere,
    sdk::{CredentialType, FieldName, ImportAttempt, ImportCandidate, ImportInput, Importer},
};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
struct AttemptReport<'a> {
    source: Option<&'a Path>,
    candidates: &'a [ImportCandidate],
    errors: Vec<String>,
}

impl<'a> From<&'a ImportAttempt> for AttemptReport<'a> {
    fn from(attempt: &'a ImportAttempt) -> Self {
        Self {
            source: attempt.source.as_deref(),
            candidates: attempt.candidates(),
            errors: attempt.errors().iter().map(ToString::to_string).collect(),
        }
    }
}

pub fn handle(home_dir: PathBuf, format: OutputFormat) -> CmdResult<()> {
    let credential = cohere::credentials();
    let attempts = credential.importer.import(&ImportInput { home_dir });
    let reports: Vec<AttemptReport> = attempts.iter().map(AttemptReport::from).collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&reports)?),
        OutputFormat::Text => print_text(&credential, &attempts),
    }

    Ok(())
}

fn print_text(credential: &CredentialType, attempts: &[ImportAttempt]) {
    let mut found = 0;

    for attempt in attempts {
        let source = attempt
            .source
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_default();

        for err in attempt.errors() {
            eprintln!("{} {source}: {err}", "error:".red());
        }

        for candidate in attempt.candidates() {
            found += 1;
            println!("{} {source}", "Found".green());
            for (name, value) in &candidate.fields {
                println!("  {name}: {}", display_value(credential, *name, value));
            }
        }
    }

    if found == 0 {
        println!("No {} credentials found.", "cohere".bold());
    }
}

fn display_value(credential: &CredentialType, name: FieldName, value: &str) -> String {
    let secret = credential.field(name).is_some_and(|field| field.secret);

    match (secret, value.is_empty()) {
        (_, true) => "(empty)".to_string(),
        (true, false) => "*".repeat(value.chars().count().min(8)),
        (false, false) => value.to_string(),
    }
}
