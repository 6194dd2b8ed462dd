use chrono::offset::Offset;
use chrono::{DateTime, FixedOffset, Local, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

/// Zone that creation times are rendered in. Local unless configured.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) enum Timezone {
    #[default]
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    /// Convert epoch milliseconds to a wall-clock time in this zone.
    pub(crate) fn localize_millis(self, timestamp_ms: i64) -> Result<DateTime<FixedOffset>, AppError> {
        let utc = DateTime::<Utc>::from_timestamp_millis(timestamp_ms).ok_or_else(|| {
            AppError::InvalidInput {
                input: timestamp_ms.to_string(),
            }
        })?;
        Ok(self.to_fixed_offset(utc))
    }

    fn to_fixed_offset(self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Local => {
                let local = utc.with_timezone(&Local);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
            Timezone::Named(tz) => {
                let zoned = utc.with_timezone(&tz);
                let offset = zoned.offset().fix();
                zoned.with_timezone(&offset)
            }
        }
    }
}
