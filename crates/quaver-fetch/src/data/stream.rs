use serde::{Deserialize, Serialize};

/// Container format of an encoded stream, as advertised by the resolver.
///
/// Formats outside the known set are preserved verbatim in
/// [`MediaFormat::Other`] so catalogs round-trip losslessly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaFormat {
    Aac,
    M4a,
    Mp4,
    Mp3,
    Other(String),
}

impl MediaFormat {
    /// Parse a container format from a file extension, case-insensitively.
    /// A leading dot is tolerated.
    pub fn from_extension(ext: &str) -> Self {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "aac" => Self::Aac,
            "m4a" => Self::M4a,
            "mp4" => Self::Mp4,
            "mp3" => Self::Mp3,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The canonical file extension for this format, without a dot.
    pub fn extension(&self) -> &str {
        match self {
            Self::Aac => "aac",
            Self::M4a => "m4a",
            Self::Mp4 => "mp4",
            Self::Mp3 => "mp3",
            Self::Other(ext) => ext,
        }
    }

    /// Whether the audio extraction stage accepts this container.
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Aac | Self::M4a | Self::Mp4 | Self::Mp3)
    }
}

impl From<String> for MediaFormat {
    fn from(ext: String) -> Self {
        Self::from_extension(&ext)
    }
}

impl From<MediaFormat> for String {
    fn from(format: MediaFormat) -> Self {
        format.extension().to_owned()
    }
}

/// One encoded representation of the source media, addressable by URL.
///
/// Streams are supplied by the external resolver per invocation and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaStream {
    /// Byte-range-capable URL of the encoded stream.
    pub url: String,

    /// Container format of the stream.
    pub format: MediaFormat,

    /// `true` when the stream carries no video track.
    #[serde(default)]
    pub audio_only: bool,

    /// Audio bitrate in kbit/s, when the resolver knows it.
    #[serde(default)]
    pub audio_bitrate: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(MediaFormat::from_extension("m4a"), MediaFormat::M4a);
        assert_eq!(MediaFormat::from_extension(".MP4"), MediaFormat::Mp4);
        assert_eq!(
            MediaFormat::from_extension("webm"),
            MediaFormat::Other("webm".to_owned())
        );
    }

    #[test]
    fn test_supported_containers() {
        assert!(MediaFormat::Mp3.is_supported());
        assert!(MediaFormat::Aac.is_supported());
        assert!(!MediaFormat::Other("webm".to_owned()).is_supported());
    }

    #[test]
    fn test_catalog_deserializes() {
        let catalog = r#"[
            {"url": "https://cdn.example/v/1", "format": "webm", "audio_only": true, "audio_bitrate": 256},
            {"url": "https://cdn.example/v/2", "format": "m4a", "audio_only": true},
            {"url": "https://cdn.example/v/3", "format": "mp4"}
        ]"#;

        let streams: Vec<MediaStream> = serde_json::from_str(catalog).unwrap();
        assert_eq!(streams.len(), 3);
        assert_eq!(streams[0].format, MediaFormat::Other("webm".to_owned()));
        assert_eq!(streams[1].format, MediaFormat::M4a);
        assert_eq!(streams[1].audio_bitrate, None);
        assert!(!streams[2].audio_only);
    }
}
