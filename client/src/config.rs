use web_sys::Window;

use ballplot_shared::RUN_ENDPOINT;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub marker_src: String,
    pub image_extension: String,
    /// 0 leaves the request without a timeout.
    pub timeout_ms: u32,
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: RUN_ENDPOINT.to_string(),
            marker_src: "cursor.png".to_string(),
            image_extension: ".png".to_string(),
            timeout_ms: 0,
            debug: false,
        }
    }
}

impl ClientConfig {
    pub fn from_window(window: &Window) -> Self {
        let search = window.location().search().ok().unwrap_or_default();
        Self::from_search(&search)
    }

    /// Applies `?debug=1`, `?log=1` and `?timeout=<ms>` over the defaults.
    pub fn from_search(search: &str) -> Self {
        let mut config = Self::default();
        if let Some(value) = query_param(search, "debug").or_else(|| query_param(search, "log")) {
            config.debug = value == "1" || value == "true";
        }
        if let Some(timeout) = query_param(search, "timeout").and_then(|v| v.parse().ok()) {
            config.timeout_ms = timeout;
        }
        config
    }
}

fn query_param<'a>(search: &'a str, key: &str) -> Option<&'a str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (k == key).then_some(v)
        })
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_gives_defaults() {
        let config = ClientConfig::from_search("");
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.endpoint, "/run");
    }

    #[test]
    fn debug_and_log_flags() {
        assert!(ClientConfig::from_search("?debug=1").debug);
        assert!(ClientConfig::from_search("?x=2&log=true").debug);
        assert!(!ClientConfig::from_search("?debug=0").debug);
        assert!(!ClientConfig::from_search("?debugger=1").debug);
    }

    #[test]
    fn timeout_is_parsed_and_bad_values_ignored() {
        assert_eq!(ClientConfig::from_search("?timeout=5000").timeout_ms, 5000);
        assert_eq!(ClientConfig::from_search("?timeout=soon").timeout_ms, 0);
    }
}
