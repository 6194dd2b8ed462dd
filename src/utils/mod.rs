pub(crate) mod date;
pub(crate) mod pattern;
pub(crate) mod timezone;

pub(crate) use date::parse_timestamp;
pub(crate) use pattern::format_creation_time;
pub(crate) use timezone::Timezone;
