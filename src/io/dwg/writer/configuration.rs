//! Options of one encode call.

use crate::types::DxfVersion;
use encoding_rs::Encoding;

/// Environment variable read by [`EncodeConfiguration::from_env`].
pub const TRACE_ENV_VAR: &str = "DWG_ENCODE_TRACE";

/// Configuration threaded through the container assembler, the object
/// writer and the schema walker.
#[derive(Debug, Clone)]
pub struct EncodeConfiguration {
    /// Format version to write.
    pub version: DxfVersion,

    /// Version the document was read from, when upgrading. Fields that did
    /// not exist in this version take their schema default.
    ///
    /// Default: `None` (fields missing from a payload always take their
    /// default).
    pub from_version: Option<DxfVersion>,

    /// Emit a `trace!` event for every field written.
    ///
    /// Default: `false`.
    pub trace_fields: bool,

    /// Code page for TV strings before R2007.
    ///
    /// Default: Windows-1252.
    pub codepage_encoding: &'static Encoding,
}

impl Default for EncodeConfiguration {
    fn default() -> Self {
        Self {
            version: DxfVersion::AC1015,
            from_version: None,
            trace_fields: false,
            codepage_encoding: encoding_rs::WINDOWS_1252,
        }
    }
}

impl EncodeConfiguration {
    /// Configuration writing `version` with default options.
    pub fn new(version: DxfVersion) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }

    pub fn with_from_version(mut self, from: DxfVersion) -> Self {
        self.from_version = Some(from);
        self
    }

    pub fn with_trace_fields(mut self, enabled: bool) -> Self {
        self.trace_fields = enabled;
        self
    }

    /// Default configuration for `version`, with field tracing enabled when
    /// `DWG_ENCODE_TRACE` holds a level of 2 or more.
    pub fn from_env(version: DxfVersion) -> Self {
        let level = std::env::var(TRACE_ENV_VAR).ok();
        Self::new(version).with_trace_fields(trace_level_enables_fields(level.as_deref()))
    }

    /// Whether a field introduced in `since` did not exist in the version
    /// being upgraded from.
    pub fn is_upgrade_of(&self, since: DxfVersion) -> bool {
        matches!(self.from_version, Some(from) if from < since)
    }
}

fn trace_level_enables_fields(level: Option<&str>) -> bool {
    level
        .and_then(|l| l.trim().parse::<u32>().ok())
        .is_some_and(|l| l >= 2)
}
