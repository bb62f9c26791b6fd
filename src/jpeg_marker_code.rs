use num_enum::TryFromPrimitive;

pub const JPEG_MARKER_START_BYTE: u8 = 0xFF;

/// Low byte of every two-byte marker code this tool can name.
///
/// The set covers ISO/IEC 10918-1 (JPEG) plus the two ISO/IEC 14495-1
/// (JPEG-LS) markers, so that streams from either family still produce a
/// readable report line before the scanner decides how to proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum JpegMarkerCode {
    /// SOF0: Marks a baseline DCT frame.
    StartOfFrameBaseline = 0xC0,
    /// SOF1: Marks an extended sequential DCT frame.
    StartOfFrameExtendedSequential = 0xC1,
    /// SOF2: Marks a progressive DCT frame.
    StartOfFrameProgressive = 0xC2,
    /// SOF3: Marks a lossless sequential frame.
    StartOfFrameLossless = 0xC3,
    /// DHT: Defines one or more Huffman coding tables.
    DefineHuffmanTable = 0xC4,
    /// SOF5: Marks a differential sequential DCT frame.
    StartOfFrameDifferentialSequential = 0xC5,
    /// SOF6: Marks a differential progressive DCT frame.
    StartOfFrameDifferentialProgressive = 0xC6,
    /// SOF7: Marks a differential lossless frame.
    StartOfFrameDifferentialLossless = 0xC7,
    /// JPG: Reserved for JPEG extensions.
    JpegExtensions = 0xC8,
    /// SOF9: Marks an extended sequential DCT frame, arithmetic coded.
    StartOfFrameExtendedSequentialArithmetic = 0xC9,
    /// SOF10: Marks a progressive DCT frame, arithmetic coded.
    StartOfFrameProgressiveArithmetic = 0xCA,
    /// SOF11: Marks a lossless sequential frame, arithmetic coded.
    StartOfFrameLosslessArithmetic = 0xCB,
    /// DAC: Defines arithmetic coding conditioning.
    DefineArithmeticCoding = 0xCC,
    /// SOF13: Marks a differential sequential DCT frame, arithmetic coded.
    StartOfFrameDifferentialSequentialArithmetic = 0xCD,
    /// SOF14: Marks a differential progressive DCT frame, arithmetic coded.
    StartOfFrameDifferentialProgressiveArithmetic = 0xCE,
    /// SOF15: Marks a differential lossless frame, arithmetic coded.
    StartOfFrameDifferentialLosslessArithmetic = 0xCF,

    /// RST0 through RST7: restart interval markers inside entropy-coded data.
    Restart0 = 0xD0,
    Restart1 = 0xD1,
    Restart2 = 0xD2,
    Restart3 = 0xD3,
    Restart4 = 0xD4,
    Restart5 = 0xD5,
    Restart6 = 0xD6,
    Restart7 = 0xD7,

    /// SOI: Marks the start of an image.
    StartOfImage = 0xD8,

    /// EOI: Marks the end of an image.
    EndOfImage = 0xD9,

    /// SOS: Marks the start of scan.
    StartOfScan = 0xDA,

    /// DQT: Defines one or more quantization tables.
    DefineQuantizationTable = 0xDB,

    /// DNL: Defines the number of lines in a scan.
    DefineNumberOfLines = 0xDC,

    /// DRI: Defines the restart interval used in succeeding scans.
    DefineRestartInterval = 0xDD,

    /// DHP: Defines hierarchical progression.
    DefineHierarchicalProgression = 0xDE,

    /// APP0: Application data 0: used for JFIF header.
    ApplicationData0 = 0xE0,
    /// APP1: Application data 1: used for EXIF or XMP header.
    ApplicationData1 = 0xE1,
    /// APP2: Application data 2: used for ICC profile.
    ApplicationData2 = 0xE2,
    /// APP3: Application data 3: used for meta info
    ApplicationData3 = 0xE3,
    /// APP4: Application data 4.
    ApplicationData4 = 0xE4,
    /// APP5: Application data 5.
    ApplicationData5 = 0xE5,
    /// APP6: Application data 6.
    ApplicationData6 = 0xE6,
    /// APP7: Application data 7: used for HP color-space info.
    ApplicationData7 = 0xE7,
    /// APP8: Application data 8: used for HP color-transformation info or SPIFF header.
    ApplicationData8 = 0xE8,
    /// APP9: Application data 9.
    ApplicationData9 = 0xE9,
    /// APP10: Application data 10.
    ApplicationData10 = 0xEA,
    /// APP11: Application data 11.
    ApplicationData11 = 0xEB,
    /// APP12: Application data 12: used for Picture info.
    ApplicationData12 = 0xEC,
    /// APP13: Application data 13: used by PhotoShop IRB
    ApplicationData13 = 0xED,
    /// APP14: Application data 14: used by Adobe
    ApplicationData14 = 0xEE,
    /// APP15: Application data 15.
    ApplicationData15 = 0xEF,

    // The following markers are defined in ISO/IEC 14495-1 | ITU T.87. (JPEG-LS standard)
    /// SOF_55: Marks the start of a JPEG-LS encoded frame.
    StartOfFrameJpegls = 0xF7,

    /// LSE: Marks the start of a JPEG-LS preset parameters segment.
    JpeglsPresetParameters = 0xF8,

    /// COM: Comment block.
    Comment = 0xFE,
}

impl JpegMarkerCode {
    /// Short mnemonic used in report lines.
    pub fn name(self) -> &'static str {
        match self {
            Self::StartOfFrameBaseline => "SOF0",
            Self::StartOfFrameExtendedSequential => "SOF1",
            Self::StartOfFrameProgressive => "SOF2",
            Self::StartOfFrameLossless => "SOF3",
            Self::DefineHuffmanTable => "DHT",
            Self::StartOfFrameDifferentialSequential => "SOF5",
            Self::StartOfFrameDifferentialProgressive => "SOF6",
            Self::StartOfFrameDifferentialLossless => "SOF7",
            Self::JpegExtensions => "JPG",
            Self::StartOfFrameExtendedSequentialArithmetic => "SOF9",
            Self::StartOfFrameProgressiveArithmetic => "SOF10",
            Self::StartOfFrameLosslessArithmetic => "SOF11",
            Self::DefineArithmeticCoding => "DAC",
            Self::StartOfFrameDifferentialSequentialArithmetic => "SOF13",
            Self::StartOfFrameDifferentialProgressiveArithmetic => "SOF14",
            Self::StartOfFrameDifferentialLosslessArithmetic => "SOF15",
            Self::Restart0 => "RST0",
            Self::Restart1 => "RST1",
            Self::Restart2 => "RST2",
            Self::Restart3 => "RST3",
            Self::Restart4 => "RST4",
            Self::Restart5 => "RST5",
            Self::Restart6 => "RST6",
            Self::Restart7 => "RST7",
            Self::StartOfImage => "SOI",
            Self::EndOfImage => "EOI",
            Self::StartOfScan => "SOS",
            Self::DefineQuantizationTable => "DQT",
            Self::DefineNumberOfLines => "DNL",
            Self::DefineRestartInterval => "DRI",
            Self::DefineHierarchicalProgression => "DHP",
            Self::ApplicationData0 => "APP0",
            Self::ApplicationData1 => "APP1",
            Self::ApplicationData2 => "APP2",
            Self::ApplicationData3 => "APP3",
            Self::ApplicationData4 => "APP4",
            Self::ApplicationData5 => "APP5",
            Self::ApplicationData6 => "APP6",
            Self::ApplicationData7 => "APP7",
            Self::ApplicationData8 => "APP8",
            Self::ApplicationData9 => "APP9",
            Self::ApplicationData10 => "APP10",
            Self::ApplicationData11 => "APP11",
            Self::ApplicationData12 => "APP12",
            Self::ApplicationData13 => "APP13",
            Self::ApplicationData14 => "APP14",
            Self::ApplicationData15 => "APP15",
            Self::StartOfFrameJpegls => "SOF55",
            Self::JpeglsPresetParameters => "LSE",
            Self::Comment => "COM",
        }
    }
}

/// Looks up the mnemonic for a full 16-bit code, when it has one.
pub fn marker_name(code: u16) -> Option<&'static str> {
    if code >> 8 != u16::from(JPEG_MARKER_START_BYTE) {
        return None;
    }
    JpegMarkerCode::try_from(code as u8)
        .ok()
        .map(JpegMarkerCode::name)
}

/// Handling class of a 16-bit code read at a marker position. Every
/// possible code maps to exactly one class; dispatch is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerClass {
    /// SOI: legal only as the first code of the stream.
    StartOfImage,
    /// APP0 through APP15: opaque application data with a declared length.
    ApplicationData,
    /// The SOF family: frame headers carrying precision and dimensions.
    FrameHeader,
    /// Table and parameter segments crossed without parsing a length
    /// (DHT, JPG, DAC, DQT, DNL, DRI, DHP).
    TableDefinition,
    /// SOS: entropy-coded data of undeclared length follows.
    StartOfScan,
    /// RST0 through RST7 inside entropy-coded data.
    RestartMarker,
    /// EOI: ends the scan successfully.
    EndOfImage,
    /// 0xFF00: a stuffed data byte, not a marker.
    StuffedByte,
    /// Anything else; the scanner cannot continue past it.
    Unrecognized,
}

impl From<u16> for MarkerClass {
    fn from(code: u16) -> Self {
        match code {
            0xFF00 => Self::StuffedByte,
            0xFFD8 => Self::StartOfImage,
            0xFFD9 => Self::EndOfImage,
            0xFFDA => Self::StartOfScan,
            0xFFD0..=0xFFD7 => Self::RestartMarker,
            0xFFE0..=0xFFEF => Self::ApplicationData,
            0xFFC0..=0xFFC3 | 0xFFC5..=0xFFC7 | 0xFFC9..=0xFFCB | 0xFFCD..=0xFFCF => {
                Self::FrameHeader
            }
            0xFFC4 | 0xFFC8 | 0xFFCC | 0xFFDB..=0xFFDE => Self::TableDefinition,
            _ => Self::Unrecognized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_specials() {
        assert_eq!(MarkerClass::from(0xFF00), MarkerClass::StuffedByte);
        assert_eq!(MarkerClass::from(0xFFD8), MarkerClass::StartOfImage);
        assert_eq!(MarkerClass::from(0xFFD9), MarkerClass::EndOfImage);
        assert_eq!(MarkerClass::from(0xFFDA), MarkerClass::StartOfScan);
    }

    #[test]
    fn test_classify_application_data_range() {
        for code in 0xFFE0..=0xFFEF {
            assert_eq!(MarkerClass::from(code), MarkerClass::ApplicationData);
        }
        assert_eq!(MarkerClass::from(0xFFDF), MarkerClass::Unrecognized);
        assert_eq!(MarkerClass::from(0xFFF0), MarkerClass::Unrecognized);
    }

    #[test]
    fn test_classify_frame_header_family_skips_table_codes() {
        let frame_headers = [
            0xFFC0, 0xFFC1, 0xFFC2, 0xFFC3, 0xFFC5, 0xFFC6, 0xFFC7, 0xFFC9, 0xFFCA, 0xFFCB,
            0xFFCD, 0xFFCE, 0xFFCF,
        ];
        for code in frame_headers {
            assert_eq!(MarkerClass::from(code), MarkerClass::FrameHeader, "{code:#06x}");
        }
        // DHT, JPG and DAC sit inside the SOF numbering range but are tables.
        for code in [0xFFC4, 0xFFC8, 0xFFCC] {
            assert_eq!(MarkerClass::from(code), MarkerClass::TableDefinition, "{code:#06x}");
        }
    }

    #[test]
    fn test_classify_table_definition_range() {
        for code in 0xFFDB..=0xFFDE {
            assert_eq!(MarkerClass::from(code), MarkerClass::TableDefinition);
        }
    }

    #[test]
    fn test_classify_restart_markers() {
        for code in 0xFFD0..=0xFFD7 {
            assert_eq!(MarkerClass::from(code), MarkerClass::RestartMarker);
        }
    }

    #[test]
    fn test_classify_rejects_everything_else() {
        for code in [0x0000u16, 0x00D8, 0x1234, 0xFF01, 0xFFF7, 0xFFFE, 0xFFFF] {
            assert_eq!(MarkerClass::from(code), MarkerClass::Unrecognized, "{code:#06x}");
        }
    }

    #[test]
    fn test_try_from_low_byte() {
        assert_eq!(JpegMarkerCode::try_from(0xD8).ok(), Some(JpegMarkerCode::StartOfImage));
        assert_eq!(
            JpegMarkerCode::try_from(0xC2).ok(),
            Some(JpegMarkerCode::StartOfFrameProgressive)
        );
        assert!(JpegMarkerCode::try_from(0x00).is_err());
        assert!(JpegMarkerCode::try_from(0xF0).is_err());
    }

    #[test]
    fn test_marker_names() {
        assert_eq!(marker_name(0xFFD8), Some("SOI"));
        assert_eq!(marker_name(0xFFC2), Some("SOF2"));
        assert_eq!(marker_name(0xFFD3), Some("RST3"));
        assert_eq!(marker_name(0xFFEE), Some("APP14"));
        assert_eq!(marker_name(0xFFFE), Some("COM"));
        // Named for the report even though the scanner will not cross it.
        assert_eq!(marker_name(0xFFF7), Some("SOF55"));
        assert_eq!(marker_name(0xFFFF), None);
        assert_eq!(marker_name(0x00D8), None);
    }
}
