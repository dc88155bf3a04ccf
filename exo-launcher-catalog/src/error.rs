use std::path::PathBuf;

/// Errors that make a platform catalog unreadable as a whole.
///
/// Problems with individual `<Game>` entries never surface here; those
/// entries are dropped during resolution instead.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed catalog: {0}")]
    Malformed(String),
}

impl CatalogError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path)
        } else {
            Self::Io { path, source }
        }
    }
}
