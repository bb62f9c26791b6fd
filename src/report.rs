use crate::jpeg_marker_code::{MarkerClass, marker_name};
use crate::marker_scanner::{MarkerPayload, MarkerRecord};

/// Renders one report line: code, symbolic name, byte offset and the
/// action column. With `with_names` off the name column is omitted.
pub fn format_record(record: &MarkerRecord, with_names: bool) -> String {
    let action = describe_action(record);
    if with_names {
        let name = marker_name(record.code).unwrap_or("???");
        format!(
            "{:04x}  {:<5} {:>8}  {}",
            record.code, name, record.offset, action
        )
    } else {
        format!("{:04x}  {:>8}  {}", record.code, record.offset, action)
    }
}

fn describe_action(record: &MarkerRecord) -> String {
    match record.payload {
        MarkerPayload::SegmentLength(length) => format!("length {length}"),
        MarkerPayload::Dimensions {
            precision,
            width,
            height,
        } => format!("precision {precision}, width {width}, height {height}"),
        MarkerPayload::None => match record.class {
            MarkerClass::StartOfImage => "start of image".to_string(),
            MarkerClass::EndOfImage => "end of image".to_string(),
            MarkerClass::Unrecognized => "unrecognized marker".to_string(),
            _ => "skipping to next marker".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: u16, class: MarkerClass, offset: u64, payload: MarkerPayload) -> MarkerRecord {
        MarkerRecord {
            code,
            class,
            offset,
            payload,
        }
    }

    #[test]
    fn test_format_application_data_line() {
        let r = record(
            0xFFE0,
            MarkerClass::ApplicationData,
            12345678,
            MarkerPayload::SegmentLength(16),
        );
        assert_eq!(format_record(&r, true), "ffe0  APP0  12345678  length 16");
        assert_eq!(format_record(&r, false), "ffe0  12345678  length 16");
    }

    #[test]
    fn test_format_frame_header_line() {
        let r = record(
            0xFFC0,
            MarkerClass::FrameHeader,
            12345678,
            MarkerPayload::Dimensions {
                precision: 8,
                width: 64,
                height: 48,
            },
        );
        assert_eq!(
            format_record(&r, true),
            "ffc0  SOF0  12345678  precision 8, width 64, height 48"
        );
    }

    #[test]
    fn test_format_bracket_markers() {
        let soi = record(0xFFD8, MarkerClass::StartOfImage, 0, MarkerPayload::None);
        let eoi = record(
            0xFFD9,
            MarkerClass::EndOfImage,
            12345678,
            MarkerPayload::None,
        );
        assert_eq!(format_record(&soi, true), "ffd8  SOI          0  start of image");
        assert_eq!(format_record(&eoi, true), "ffd9  EOI   12345678  end of image");
    }

    #[test]
    fn test_format_skipped_marker_line() {
        let r = record(
            0xFFDB,
            MarkerClass::TableDefinition,
            12345678,
            MarkerPayload::None,
        );
        assert_eq!(
            format_record(&r, true),
            "ffdb  DQT   12345678  skipping to next marker"
        );
    }

    #[test]
    fn test_format_unrecognized_marker_line() {
        let r = record(0x1234, MarkerClass::Unrecognized, 12345678, MarkerPayload::None);
        assert_eq!(
            format_record(&r, true),
            "1234  ???   12345678  unrecognized marker"
        );
    }

    #[test]
    fn test_offsets_align_right() {
        let r = record(0xFFD9, MarkerClass::EndOfImage, 2, MarkerPayload::None);
        assert_eq!(format_record(&r, true), "ffd9  EOI          2  end of image");
    }
}
