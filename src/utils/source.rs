//! Source-URL generation
//!
//! The "source" of a link is the externally visible URL that resolves to its
//! keyword, `<host>/<keyword>`. The host comes from the configured override
//! when one is set, otherwise from the incoming request's Host header, so
//! deployments behind varying ingress hostnames report usable links without
//! hardcoding one.

/// Pick the host to build source URLs with. The configured override always
/// wins over the per-request host.
pub fn resolve_host<'a>(configured: Option<&'a str>, request_host: &'a str) -> &'a str {
    match configured {
        Some(host) if !host.is_empty() => host,
        _ => request_host,
    }
}

/// Build the canonical source URL for a keyword. Pure function of its
/// inputs; no backend access.
pub fn source_url(host: &str, keyword: &str) -> String {
    format!("{}/{}", host.trim_end_matches('/'), keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_url_joins_host_and_keyword() {
        assert_eq!(source_url("go.example.com", "docs"), "go.example.com/docs");
    }

    #[test]
    fn test_source_url_trims_trailing_slash() {
        assert_eq!(source_url("go.example.com/", "docs"), "go.example.com/docs");
    }

    #[test]
    fn test_resolve_host_prefers_override() {
        assert_eq!(
            resolve_host(Some("go.example.com"), "internal.local"),
            "go.example.com"
        );
    }

    #[test]
    fn test_resolve_host_falls_back_to_request_host() {
        assert_eq!(resolve_host(None, "internal.local"), "internal.local");
        assert_eq!(resolve_host(Some(""), "internal.local"), "internal.local");
    }

    #[test]
    fn test_override_beats_request_host_end_to_end() {
        let host = resolve_host(Some("go.example.com"), "internal.local");
        assert_eq!(source_url(host, "docs"), "go.example.com/docs");
    }
}
