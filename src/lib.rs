pub mod bit_cursor;
pub mod error;
pub mod jpeg_marker_code;
pub mod marker_scanner;
pub mod report;

pub use bit_cursor::BitCursor;
pub use error::ScanError;
pub use jpeg_marker_code::{JpegMarkerCode, MarkerClass, marker_name};
pub use marker_scanner::{MarkerPayload, MarkerRecord, MarkerScanner, ScanState};
