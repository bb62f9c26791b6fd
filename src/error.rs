use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Start of image marker not found")]
    StartOfImageMarkerNotFound,
    #[error("Need more data")]
    NeedMoreData,
    #[error("Reached end of file before an end of image marker was found")]
    EndOfImageMarkerNotFound,
    #[error("Unknown JPEG marker {code:#06x} at offset {offset}")]
    UnknownJpegMarkerFound { code: u16, offset: u64 },
    #[error("Duplicate start of image marker at offset {offset}")]
    DuplicateStartOfImageMarker { offset: u64 },

    // Logic errors
    #[error("Invalid operation")]
    InvalidOperation,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
