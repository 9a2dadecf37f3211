//! Zone-aware timestamp handling for message fields
//!
//! Wire timestamps either carry an explicit UTC designator or numeric
//! offset, or no zone at all. A parsed value therefore has a definite
//! "kind": UTC, local (host zone, only possible programmatically) or
//! unspecified. Serialization accepts UTC only.

use chrono::{DateTime, Local, NaiveDateTime, Offset, Utc};

use crate::error::{Error, Result};

/// Zone awareness of a timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeKind {
    /// The value is in UTC
    Utc,
    /// The value is civil time of the host environment
    Local,
    /// The zone is unknown
    Unspecified,
}

/// A timestamp tagged with its zone awareness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XsdDateTime {
    naive: NaiveDateTime,
    kind: TimeKind,
}

impl XsdDateTime {
    /// Create a UTC-tagged timestamp
    pub fn utc(value: DateTime<Utc>) -> Self {
        Self {
            naive: value.naive_utc(),
            kind: TimeKind::Utc,
        }
    }

    /// Create a local-tagged timestamp from host civil time
    pub fn local(value: DateTime<Local>) -> Self {
        Self {
            naive: value.naive_local(),
            kind: TimeKind::Local,
        }
    }

    /// Create a timestamp of unknown zone
    pub fn unspecified(value: NaiveDateTime) -> Self {
        Self {
            naive: value,
            kind: TimeKind::Unspecified,
        }
    }

    /// Current time, UTC-tagged
    pub fn now_utc() -> Self {
        Self::utc(Utc::now())
    }

    /// Parses an `xsd:dateTime` wire value.
    ///
    /// A value with a `Z` designator or a numeric offset becomes UTC-tagged
    /// with the offset applied exactly; a zoneless value stays unspecified.
    pub fn from_wire(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self::utc(dt.with_timezone(&Utc)));
        }

        match NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
            Ok(naive) => Ok(Self::unspecified(naive)),
            Err(_) => Err(Error::parse("dateTime", s)),
        }
    }

    /// Converts the kind to UTC where the zone is known.
    ///
    /// UTC stays as is. Unspecified is not OK for serialization, but this
    /// cannot be helped, so it stays untouched. Local is shifted by the
    /// host's current UTC offset.
    pub fn to_utc_if_possible(self) -> Self {
        match self.kind {
            TimeKind::Utc | TimeKind::Unspecified => self,
            TimeKind::Local => {
                let offset = Local::now().offset().fix();
                Self {
                    naive: self.naive - offset,
                    kind: TimeKind::Utc,
                }
            }
        }
    }

    /// Checks that the kind is UTC.
    pub fn expect_utc(&self) -> Result<()> {
        if self.kind != TimeKind::Utc {
            return Err(Error::date_time("DateTime kind must be UTC"));
        }
        Ok(())
    }

    /// Formats for serialization. Fails unless the kind is UTC.
    pub(crate) fn to_wire(&self) -> Result<String> {
        self.expect_utc()?;
        Ok(format!("{}Z", self.naive.format("%Y-%m-%dT%H:%M:%S%.f")))
    }

    /// The zone awareness tag
    pub fn kind(&self) -> TimeKind {
        self.kind
    }

    /// The timestamp without zone information
    pub fn naive(&self) -> NaiveDateTime {
        self.naive
    }
}
