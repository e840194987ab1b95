pub const SCAFFOLD_MODE_VARIABLE: &str = "SCAFFOLD_MODE";

/// Scaffold mode replaces both external services, the database and the
/// upload directory with in-memory stand-ins, so the HTTP surface runs
/// without credentials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaffoldConfig {
    pub enabled: bool,
}

impl ScaffoldConfig {
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(SCAFFOLD_MODE_VARIABLE).ok().as_deref())
    }

    /// `true` (any case) and `1` enable scaffold mode.
    pub fn from_value(value: Option<&str>) -> Self {
        Self {
            enabled: value
                .map(str::trim)
                .is_some_and(|v| v.eq_ignore_ascii_case("true") || v == "1"),
        }
    }
}
