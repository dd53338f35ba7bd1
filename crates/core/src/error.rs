use filebundle_files::FilesError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read manifest {}: {source}", path.display())]
    ManifestRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Files(#[from] FilesError),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
