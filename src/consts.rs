/// Pattern used by both actions until the user picks one: "202305061407"
pub(crate) const DEFAULT_TIME_FORMAT: &str = "YYYYMMDDHHmm";

/// Pattern used when a pattern string is empty, mirroring moment's default format
pub(crate) const EMPTY_PATTERN_FALLBACK: &str = "YYYY-MM-DDTHH:mm:ssZ";

/// Directory name under the platform config dir
pub(crate) const APP_DIR: &str = "copymeta";

/// Settings data file inside `APP_DIR`
pub(crate) const DATA_FILE: &str = "data.json";
