use thiserror::Error;

/// Reasons an upload is rejected. A rejected upload never changes the loaded state.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("no file selected")]
    NoFileSelected,

    #[error("file type '{mime}' is not SVG")]
    NotSvgMimeType { mime: String },

    #[error("malformed SVG document: {0}")]
    Malformed(#[from] roxmltree::Error),

    #[error("document root is <{root}>, expected <svg>")]
    NotSvg { root: String },

    #[error("document is {len} bytes, limit is {max}")]
    TooLarge { len: usize, max: usize },

    #[error("document has more than {max} shapes")]
    TooManyShapes { max: usize },
}

impl IngestError {
    /// Stable machine-readable code, used by the JS bindings.
    pub fn code(&self) -> &'static str {
        match self {
            IngestError::NoFileSelected => "no_file",
            IngestError::NotSvgMimeType { .. } => "not_svg_mime",
            IngestError::Malformed(_) => "malformed",
            IngestError::NotSvg { .. } => "not_svg",
            IngestError::TooLarge { .. } => "too_large",
            IngestError::TooManyShapes { .. } => "too_many_shapes",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("default fill must not be empty")]
    EmptyDefaultFill,
}

impl ConfigError {
    pub fn code(&self) -> &'static str { "invalid_config" }
}
