use super::{FixedPath, ItemFields, PluginError};
use serde::{Serialize, de::DeserializeOwned};
use std::{fs, io, path::PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct ImportInput {
    pub home_dir: PathBuf,
}

/// Raw contents of a file an importer found on disk.
#[derive(Debug, Clone)]
pub struct FileContents(String);

impl FileContents {
    pub fn new(contents: impl Into<String>) -> Self {
        Self(contents.into())
    }

    pub fn to_json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportCandidate {
    pub fields: ItemFields,
}

/// Outcome of scanning one source: the candidates it produced and any
/// diagnostics recorded along the way.
#[derive(Debug, Default)]
pub struct ImportAttempt {
    pub source: Option<PathBuf>,
    candidates: Vec<ImportCandidate>,
    errors: Vec<PluginError>,
}

impl ImportAttempt {
    pub fn new(source: Option<PathBuf>) -> Self {
        Self {
            source,
            ..Default::default()
        }
    }

    pub fn add_candidate(&mut self, candidate: ImportCandidate) {
        self.candidates.push(candidate);
    }

    pub fn add_error(&mut self, err: impl Into<PluginError>) {
        self.errors.push(err.into());
    }

    pub fn candidates(&self) -> &[ImportCandidate] {
        &self.candidates
    }

    pub fn errors(&self) -> &[PluginError] {
        &self.errors
    }
}

pub type ParseFn = fn(&FileContents, &ImportInput, &mut ImportAttempt);

pub trait Importer {
    fn import(&self, input: &ImportInput) -> Vec<ImportAttempt>;
}

/// Reads a single file at a fixed location and hands its contents to a
/// plugin-supplied parser.
#[derive(Debug, Clone, Copy)]
pub struct TryFile {
    path: FixedPath,
    parse: ParseFn,
}

impl TryFile {
    pub const fn new(path: FixedPath, parse: ParseFn) -> Self {
        Self { path, parse }
    }

    pub const fn path(&self) -> FixedPath {
        self.path
    }

    fn attempt(&self, input: &ImportInput) -> ImportAttempt {
        let path = self.path.resolve(&input.home_dir);
        let mut attempt = ImportAttempt::new(Some(path.clone()));

        match fs::read_to_string(&path) {
            Ok(contents) => (self.parse)(&FileContents::new(contents), input, &mut attempt),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no file to import from");
            }
            Err(err) => attempt.add_error(err),
        }

        for err in attempt.errors() {
            warn!(path = %path.display(), "import failed: {err}");
        }

        attempt
    }
}

impl Importer for TryFile {
    fn import(&self, input: &ImportInput) -> Vec<ImportAttempt> {
        vec![self.attempt(input)]
    }
}

/// Runs every importer in order and keeps all of their attempts.
#[derive(Debug, Clone, Default)]
pub struct TryAll(Vec<TryFile>);

impl TryAll {
    pub fn new(importers: impl IntoIterator<Item = TryFile>) -> Self {
        Self(importers.into_iter().collect())
    }

    pub fn importers(&self) -> &[TryFile] {
        &self.0
    }
}

impl Importer for TryAll {
    fn import(&self, input: &ImportInput) -> Vec<ImportAttempt> {
        self.0.iter().flat_map(|importer| importer.import(input)).collect()
    }
}
