use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::SheetError;

static RANGE_SHORTHAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<prefix>[^\[\]\s]*)\[(?P<start>\d+)\.\.(?P<end>\d+)\)$")
        .expect("range shorthand regex is valid")
});

/// A contiguous band of run accessions: `prefix` followed by every integer in
/// `[start, end)`.
///
/// Construction rejects empty and inverted bands, so every value of this type
/// holds at least one accession.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessionRange {
    prefix: String,
    start: u64,
    end: u64,
    len: usize,
}

impl AccessionRange {
    pub fn new(prefix: impl Into<String>, start: u64, end: u64) -> Result<Self, SheetError> {
        let prefix = prefix.into();
        let invalid = |reason: &str| SheetError::InvalidRange {
            range: format!("{prefix}[{start}..{end})"),
            reason: reason.to_string(),
        };
        if start >= end {
            return Err(invalid("start must be lower than end"));
        }
        let len = usize::try_from(end - start)
            .map_err(|_| invalid("range holds more accessions than this platform can index"))?;
        Ok(Self {
            prefix,
            start,
            end,
            len,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Accessions in ascending numeric order.
    pub fn ids(&self) -> impl Iterator<Item = String> + '_ {
        (self.start..self.end).map(move |n| format!("{}{n}", self.prefix))
    }
}

impl fmt::Display for AccessionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}..{})", self.prefix, self.start, self.end)
    }
}

impl FromStr for AccessionRange {
    type Err = SheetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let invalid = |reason: &str| SheetError::InvalidRange {
            range: value.to_string(),
            reason: reason.to_string(),
        };
        let caps = RANGE_SHORTHAND
            .captures(trimmed)
            .ok_or_else(|| invalid("expected PREFIX[START..END)"))?;
        let start = caps["start"]
            .parse::<u64>()
            .map_err(|_| invalid("start is out of range"))?;
        let end = caps["end"]
            .parse::<u64>()
            .map_err(|_| invalid("end is out of range"))?;
        Self::new(&caps["prefix"], start, end)
    }
}

/// Name of an experimental group, used as the prefix of standardized sample
/// names (`ad` gives `ad_1`, `ad_2`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupLabel(String);

impl GroupLabel {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GroupLabel {
    type Err = SheetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        let is_valid = !normalized.is_empty()
            && !normalized
                .chars()
                .any(|ch| ch.is_whitespace() || ch == ',' || ch == '"');
        if !is_valid {
            return Err(SheetError::InvalidGroupLabel(value.to_string()));
        }
        Ok(Self(normalized.to_string()))
    }
}

impl TryFrom<String> for GroupLabel {
    type Error = SheetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GroupLabel> for String {
    fn from(label: GroupLabel) -> Self {
        label.0
    }
}

/// One experimental group: the accessions it covers and the label its
/// samples are renamed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpec {
    pub label: GroupLabel,
    pub range: AccessionRange,
}
