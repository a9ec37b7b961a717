use std::path::PathBuf;

pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_CHARTS_DIR: &str = "charts";
pub const DEFAULT_STATIC_DIR: &str = "client/dist";
pub const DEFAULT_CHART_CACHE_TTL_SECS: i64 = 30;
pub const MAX_CHART_ID_LEN: usize = 64;

pub fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_SERVER_PORT)
}

pub fn charts_dir() -> PathBuf {
    non_empty_env("CHARTS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CHARTS_DIR))
}

pub fn static_dir() -> PathBuf {
    non_empty_env("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR))
}

pub fn chart_cache_ttl_secs() -> i64 {
    std::env::var("CHART_CACHE_TTL_SECS")
        .ok()
        .and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_CHART_CACHE_TTL_SECS)
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        temp_env::with_vars_unset(
            ["PORT", "CHARTS_DIR", "STATIC_DIR", "CHART_CACHE_TTL_SECS"],
            || {
                assert_eq!(server_port(), DEFAULT_SERVER_PORT);
                assert_eq!(charts_dir(), PathBuf::from("charts"));
                assert_eq!(static_dir(), PathBuf::from("client/dist"));
                assert_eq!(chart_cache_ttl_secs(), DEFAULT_CHART_CACHE_TTL_SECS);
            },
        );
    }

    #[test]
    fn valid_overrides_are_used() {
        temp_env::with_vars(
            [
                ("PORT", Some("8080")),
                ("CHARTS_DIR", Some("/srv/charts")),
                ("STATIC_DIR", Some(" public ")),
                ("CHART_CACHE_TTL_SECS", Some("5")),
            ],
            || {
                assert_eq!(server_port(), 8080);
                assert_eq!(charts_dir(), PathBuf::from("/srv/charts"));
                assert_eq!(static_dir(), PathBuf::from("public"));
                assert_eq!(chart_cache_ttl_secs(), 5);
            },
        );
    }

    #[test]
    fn invalid_values_fall_back() {
        temp_env::with_vars(
            [
                ("PORT", Some("0")),
                ("CHARTS_DIR", Some("   ")),
                ("CHART_CACHE_TTL_SECS", Some("-3")),
            ],
            || {
                assert_eq!(server_port(), DEFAULT_SERVER_PORT);
                assert_eq!(charts_dir(), PathBuf::from(DEFAULT_CHARTS_DIR));
                assert_eq!(chart_cache_ttl_secs(), DEFAULT_CHART_CACHE_TTL_SECS);
            },
        );
        temp_env::with_var("PORT", Some("not-a-port"), || {
            assert_eq!(server_port(), DEFAULT_SERVER_PORT);
        });
    }
}
