use super::{FixedPath, ItemFields, PluginResult};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct ProvisionInput {
    pub home_dir: PathBuf,
    pub item_fields: ItemFields,
}

/// Produces the file body for a set of item fields. `Ok(None)` means there is
/// nothing to provision.
pub type GenerateFn = fn(&ProvisionInput) -> PluginResult<Option<Vec<u8>>>;

pub trait Provisioner {
    fn provision(&self, input: &ProvisionInput) -> PluginResult<Option<PathBuf>>;
    fn deprovision(&self, input: &ProvisionInput) -> PluginResult<()>;
}

/// Writes generated credentials to a file at a fixed location.
#[derive(Debug, Clone, Copy)]
pub struct TempFile {
    generate: GenerateFn,
    path: FixedPath,
}

impl TempFile {
    pub const fn new(generate: GenerateFn, path: FixedPath) -> Self {
        Self { generate, path }
    }

    pub const fn path(&self) -> FixedPath {
        self.path
    }

    pub fn contents(&self, input: &ProvisionInput) -> PluginResult<Option<Vec<u8>>> {
        (self.generate)(input)
    }
}

impl Provisioner for TempFile {
    fn provision(&self, input: &ProvisionInput) -> PluginResult<Option<PathBuf>> {
        let Some(contents) = self.contents(input)? else {
            debug!(path = %self.path, "nothing to provision");
            return Ok(None);
        };

        let path = self.path.resolve(&input.home_dir);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        write_private(&path, &contents)?;

        info!(path = %path.display(), "provisioned credential file");
        Ok(Some(path))
    }

    fn deprovision(&self, input: &ProvisionInput) -> PluginResult<()> {
        let path = self.path.resolve(&input.home_dir);

        match fs::remove_file(&path) {
            Ok(()) => {
                info!(path = %path.display(), "removed credential file");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "credential file already absent");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Writes `contents` to a file only the owner can read. Permissions are
/// fixed before any bytes land, including when the file already existed.
fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }

    file.write_all(contents)
}
