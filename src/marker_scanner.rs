use std::io::{Read, Seek};

use crate::bit_cursor::BitCursor;
use crate::error::ScanError;
use crate::jpeg_marker_code::{JPEG_MARKER_START_BYTE, MarkerClass};

/// One structural marker located in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRecord {
    /// The two-byte code exactly as it appeared.
    pub code: u16,
    /// Handling class the code was dispatched on.
    pub class: MarkerClass,
    /// Byte offset of the first code byte.
    pub offset: u64,
    /// Class-specific fields.
    pub payload: MarkerPayload,
}

/// Class-specific fields of a marker record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerPayload {
    None,
    /// Declared segment length, counting the two length bytes themselves.
    SegmentLength(u16),
    /// Frame header fields, in the order they were read from the stream.
    Dimensions { precision: u8, width: u16, height: u16 },
}

/// Scanner lifecycle. `EndOfImage` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    BeforeStartOfImage,
    Scanning,
    EndOfImage,
    Failed,
}

/// Walks the marker stream of a JPEG file, reporting each structural
/// marker without decoding any entropy-coded data.
///
/// A scanner runs once: `scan` drives the stream from the start of image
/// marker to the end of image marker, handing every located record to the
/// caller's sink in stream order. Records delivered before a failure stay
/// valid; the error describes what stopped the scan.
pub struct MarkerScanner<R> {
    cursor: BitCursor<R>,
    state: ScanState,
}

impl<R: Read + Seek> MarkerScanner<R> {
    pub fn new(source: R) -> Self {
        Self {
            cursor: BitCursor::new(source),
            state: ScanState::BeforeStartOfImage,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    pub fn scan<F>(&mut self, mut sink: F) -> Result<(), ScanError>
    where
        F: FnMut(&MarkerRecord),
    {
        if self.state != ScanState::BeforeStartOfImage {
            return Err(ScanError::InvalidOperation);
        }
        match self.scan_markers(&mut sink) {
            Ok(()) => Ok(()),
            Err(ScanError::NeedMoreData) => {
                // The file ended while a marker or segment was still open.
                self.state = ScanState::Failed;
                Err(ScanError::EndOfImageMarkerNotFound)
            }
            Err(err) => {
                self.state = ScanState::Failed;
                Err(err)
            }
        }
    }

    fn scan_markers<F>(&mut self, sink: &mut F) -> Result<(), ScanError>
    where
        F: FnMut(&MarkerRecord),
    {
        self.read_start_of_image(sink)?;
        while self.state == ScanState::Scanning {
            self.read_next_marker(sink)?;
        }
        Ok(())
    }

    fn read_start_of_image<F>(&mut self, sink: &mut F) -> Result<(), ScanError>
    where
        F: FnMut(&MarkerRecord),
    {
        let offset = self.cursor.position();
        let code = self.cursor.read_uint(16)? as u16;
        if MarkerClass::from(code) != MarkerClass::StartOfImage {
            return Err(ScanError::StartOfImageMarkerNotFound);
        }
        sink(&MarkerRecord {
            code,
            class: MarkerClass::StartOfImage,
            offset,
            payload: MarkerPayload::None,
        });
        self.state = ScanState::Scanning;
        Ok(())
    }

    fn read_next_marker<F>(&mut self, sink: &mut F) -> Result<(), ScanError>
    where
        F: FnMut(&MarkerRecord),
    {
        let offset = self.cursor.position();
        let code = self.cursor.read_uint(16)? as u16;
        let class = MarkerClass::from(code);
        match class {
            MarkerClass::ApplicationData => self.read_application_data_segment(code, offset, sink),
            MarkerClass::FrameHeader => self.read_frame_header_segment(code, offset, sink),
            MarkerClass::TableDefinition
            | MarkerClass::StartOfScan
            | MarkerClass::RestartMarker => {
                sink(&MarkerRecord {
                    code,
                    class,
                    offset,
                    payload: MarkerPayload::None,
                });
                self.skip_to_next_marker()
            }
            MarkerClass::StuffedByte => self.skip_to_next_marker(),
            MarkerClass::EndOfImage => {
                sink(&MarkerRecord {
                    code,
                    class,
                    offset,
                    payload: MarkerPayload::None,
                });
                self.state = ScanState::EndOfImage;
                Ok(())
            }
            MarkerClass::StartOfImage => {
                sink(&MarkerRecord {
                    code,
                    class,
                    offset,
                    payload: MarkerPayload::None,
                });
                Err(ScanError::DuplicateStartOfImageMarker { offset })
            }
            MarkerClass::Unrecognized => {
                sink(&MarkerRecord {
                    code,
                    class,
                    offset,
                    payload: MarkerPayload::None,
                });
                Err(ScanError::UnknownJpegMarkerFound { code, offset })
            }
        }
    }

    /// Length-prefixed segment: report the declared length, then seek past
    /// the body without parsing it. The length counts its own two bytes.
    fn read_application_data_segment<F>(
        &mut self,
        code: u16,
        offset: u64,
        sink: &mut F,
    ) -> Result<(), ScanError>
    where
        F: FnMut(&MarkerRecord),
    {
        let length = self.cursor.read_uint(16)? as u16;
        sink(&MarkerRecord {
            code,
            class: MarkerClass::ApplicationData,
            offset,
            payload: MarkerPayload::SegmentLength(length),
        });
        self.cursor
            .seek_to(self.cursor.position() + u64::from(length) - 2)
    }

    /// Frame header: length, sample precision, then the two 16-bit
    /// dimension fields in stream order. The component descriptors that
    /// follow are crossed by scanning for the next marker.
    fn read_frame_header_segment<F>(
        &mut self,
        code: u16,
        offset: u64,
        sink: &mut F,
    ) -> Result<(), ScanError>
    where
        F: FnMut(&MarkerRecord),
    {
        let _length = self.cursor.read_uint(16)?;
        let precision = self.cursor.read_uint(8)? as u8;
        let width = self.cursor.read_uint(16)? as u16;
        let height = self.cursor.read_uint(16)? as u16;
        sink(&MarkerRecord {
            code,
            class: MarkerClass::FrameHeader,
            offset,
            payload: MarkerPayload::Dimensions {
                precision,
                width,
                height,
            },
        });
        self.skip_to_next_marker()
    }

    /// Reads bytes until a 0xFF, then rewinds one byte so the next 16-bit
    /// read picks it up as the high byte of a marker code. A stuffed 0xFF00
    /// pair inside entropy-coded data surfaces as a StuffedByte code and
    /// routes straight back here.
    fn skip_to_next_marker(&mut self) -> Result<(), ScanError> {
        while self.cursor.read_byte()? != JPEG_MARKER_START_BYTE {}
        self.cursor.seek_to(self.cursor.position() - 1)
    }
}
