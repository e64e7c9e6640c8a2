use std::fmt;

/// Patch segment of a calendar version (the text after the first `-`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    /// No `-` in the version, or nothing after it
    Absent,
    /// Non-negative integer patch
    Number(u64),
    /// Segment present but not a non-negative integer; kept verbatim.
    ///
    /// Only ASCII digits count. Inputs a JavaScript `Number()` would accept,
    /// such as `+2`, ` 3` or `1.5`, land here too and bump to `NaN`.
    Invalid(String),
}

/// Calendar version of the form `<calver>[-<patch>]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalVersion {
    pub calver: String,
    pub patch: Patch,
}

/// Patch value of a bumped version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpedPatch {
    Number(u64),
    /// Previous patch segment was not numeric
    NotANumber,
}

impl fmt::Display for BumpedPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpedPatch::Number(n) => write!(f, "{}", n),
            BumpedPatch::NotANumber => write!(f, "NaN"),
        }
    }
}

impl CalVersion {
    /// Parse a version string.
    ///
    /// The patch is the segment between the first and the second `-`, so
    /// anything after a second hyphen is ignored (`2024.01-3-rc` has patch 3).
    /// Parsing never fails: an unusual patch segment is kept as [`Patch::Invalid`].
    pub fn parse(version: &str) -> Self {
        let mut parts = version.split('-');
        let calver = parts.next().unwrap_or_default().to_string();

        let patch = match parts.next() {
            None | Some("") => Patch::Absent,
            Some(segment) => match parse_patch(segment) {
                Some(n) => Patch::Number(n),
                None => Patch::Invalid(segment.to_string()),
            },
        };

        CalVersion { calver, patch }
    }

    /// Patch value for the next version: `patch + 1` when present, `0` otherwise
    pub fn bumped_patch(&self) -> BumpedPatch {
        match &self.patch {
            Patch::Absent => BumpedPatch::Number(0),
            Patch::Number(n) => n
                .checked_add(1)
                .map(BumpedPatch::Number)
                .unwrap_or(BumpedPatch::NotANumber),
            Patch::Invalid(_) => BumpedPatch::NotANumber,
        }
    }

    /// The bumped version string, always rendered with an explicit patch
    pub fn bump(&self) -> String {
        format!("{}-{}", self.calver, self.bumped_patch())
    }
}

fn parse_patch(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse::<u64>().ok()
}

/// Computes the next version for `current`.
///
/// ```ignore
/// assert_eq!(next_version("2024.06"), "2024.06-0");
/// assert_eq!(next_version("2024.06-4"), "2024.06-5");
/// ```
pub fn next_version(current: &str) -> String {
    CalVersion::parse(current).bump()
}
