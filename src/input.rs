//! Message input
//!
//! Reads the message to be hashed from a file. The path comes from an
//! [`InputConfig`], either given explicitly or taken from the
//! `SHA256_INPUT` environment variable.
//!
//! A missing or unreadable file is an [`InputError`]. It is never turned
//! into an empty message: the digest of an empty message is a valid
//! result and must not stand in for a failed read.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::hash::hash;

/// Environment variable naming the input file.
pub const INPUT_ENV_VAR: &str = "SHA256_INPUT";

/// Path used when `SHA256_INPUT` is not set.
pub const DEFAULT_INPUT_PATH: &str = "input.txt";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("input path is not a regular file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("failed to read input file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InputError {
    /// The path the failed read was attempted on.
    pub fn path(&self) -> &Path {
        match self {
            InputError::NotFound { path }
            | InputError::NotAFile { path }
            | InputError::Unreadable { path, .. } => path,
        }
    }
}

/// Where to read the message from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputConfig {
    pub path: PathBuf,
}

impl InputConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the path from `SHA256_INPUT`, falling back to
    /// [`DEFAULT_INPUT_PATH`] when it is unset or empty.
    pub fn from_env() -> Self {
        Self::from_var(std::env::var_os(INPUT_ENV_VAR))
    }

    /// Builds the config from the raw value of `SHA256_INPUT`.
    pub fn from_var(value: Option<OsString>) -> Self {
        match value {
            Some(path) if !path.is_empty() => Self::new(path),
            _ => Self::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH)
    }
}

/// Reads the whole file at `path` into memory.
pub fn read_message(path: impl AsRef<Path>) -> Result<Vec<u8>, InputError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading input");

    let result = std::fs::read(path).map_err(|source| classify(path, source));

    match &result {
        Ok(bytes) => debug!(path = %path.display(), len = bytes.len(), "input read"),
        Err(err) => warn!(path = %path.display(), error = %err, "input unavailable"),
    }

    result
}

/// Reads the configured input and returns its digest as lowercase hex.
pub fn hash_file(config: &InputConfig) -> Result<String, InputError> {
    let message = read_message(&config.path)?;

    Ok(hash(&message))
}

fn classify(path: &Path, source: io::Error) -> InputError {
    let path = path.to_path_buf();

    if source.kind() == io::ErrorKind::NotFound {
        return InputError::NotFound { path };
    }

    if path.is_dir() {
        return InputError::NotAFile { path };
    }

    InputError::Unreadable { path, source }
}
