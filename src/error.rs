use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Storage for the pixel buffer could not be obtained.
    #[error("out of memory: cannot allocate {bytes} bytes for a {width}x{height} canvas")]
    AllocationFailure { width: u32, height: u32, bytes: usize },

    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    /// A layout parameter is outside the range the layout arithmetic supports.
    #[error("invalid layout setting: {0}")]
    InvalidLayout(String),

    #[error("invalid color `{0}` (expected #RRGGBB or #RGB)")]
    InvalidColor(String),

    #[error("cannot read hierarchy at {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The image encoder reported a failure.
    #[error("failed to encode image: {0}")]
    EncodeFailure(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
