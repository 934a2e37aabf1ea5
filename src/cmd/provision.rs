use super::{CmdResult, ProvisionArgs, collect_fields};
use crate::{
    cohere, prompt,
    sdk::{FieldName, ItemFields, ProvisionInput, Provisioner},
};
use owo_colors::OwoColorize;
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

pub fn handle(home_dir: PathBuf, args: ProvisionArgs) -> CmdResult<()> {
    let credential = cohere::credentials();

    let mut item_fields = match &args.env_file {
        Some(path) => read_env_file(path)?,
        None => ItemFields::new(),
    };
    item_fields.extend(collect_fields(&args.fields)?);

    if args.interactive {
        prompt::fill_missing(&credential, &mut item_fields)?;
    }

    for name in credential.missing_required(&item_fields) {
        warn!(field = %name, "required field missing");
    }

    let input = ProvisionInput {
        home_dir,
        item_fields,
    };

    if args.stdout {
        if let Some(contents) = credential.default_provisioner.contents(&input)? {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&contents)?;
            writeln!(stdout)?;
        }
        return Ok(());
    }

    match credential.default_provisioner.provision(&input)? {
        Some(path) => println!("{} {}", "Wrote".green(), path.display()),
        None => println!("Nothing to provision: no {} supplied.", FieldName::Jwt),
    }

    Ok(())
}

pub fn remove(home_dir: PathBuf) -> CmdResult<()> {
    let credential = cohere::credentials();
    let input = ProvisionInput {
        home_dir,
        ..Default::default()
    };

    credential.default_provisioner.deprovision(&input)?;
    println!(
        "{} {}",
        "Removed".green(),
        credential.default_provisioner.path()
    );

    Ok(())
}

/// Loads field values from a dotenv file. Keys match field names with or
/// without a `COHERE_` prefix; anything else is ignored.
fn read_env_file(path: &Path) -> CmdResult<ItemFields> {
    let mut fields = ItemFields::new();

    for entry in dotenvy::from_path_iter(path)? {
        let (key, value) = entry?;

        match env_key_to_field(&key) {
            Some(name) => {
                fields.insert(name, value);
            }
            None => debug!(key = %key, "ignoring unrelated env entry"),
        }
    }

    Ok(fields)
}

fn env_key_to_field(key: &str) -> Option<FieldName> {
    let upper = key.to_ascii_uppercase();
    let name = upper.strip_prefix("COHERE_").unwrap_or(&upper);
    name.parse().ok()
}
