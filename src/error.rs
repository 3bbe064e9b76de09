//! Error types for loading argument specs and writing the rendered image.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of a single rendering run.
#[derive(Error, Debug)]
pub enum ArgSpecError {
    /// The input document could not be read from disk.
    #[error("cannot read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input document is not valid YAML.
    #[error("cannot parse {path} as YAML")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A key on the fixed `argument_specs.main.options` path is absent.
    #[error("document has no `{path}` key")]
    MissingKey { path: String },

    /// A parameter (or its `options`) does not have the expected shape.
    #[error("invalid parameter at `{path}`: {message}")]
    Structure { path: String, message: String },

    /// No role directory name could be derived from the input path.
    #[error("cannot derive an output name from {path}: expected <role>/meta/<file>")]
    OutputName { path: PathBuf },

    /// The rendered image could not be written.
    #[error("cannot write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
