//! GitHub instance handling for different deployment types.
//!
//! Supports github.com and GitHub Enterprise Server hosts.

/// Known GitHub cloud hostname.
pub const GITHUB_COM: &str = "github.com";

/// GitHub localhost for development.
const LOCALHOST: &str = "github.localhost";

/// Normalize a GitHub hostname by removing protocol and trailing slashes.
pub fn normalize_hostname(host: &str) -> String {
    let host = host
        .strip_prefix("https://")
        .or_else(|| host.strip_prefix("http://"))
        .unwrap_or(host);

    host.trim_end_matches('/').to_lowercase()
}

/// Check if a hostname is a GitHub.com cloud instance.
pub fn is_github_com(host: &str) -> bool {
    let normalized = normalize_hostname(host);
    normalized == GITHUB_COM || normalized == LOCALHOST
}

/// Get the REST API base URL for a given hostname, with a trailing slash.
pub fn rest_url(host: &str) -> String {
    let normalized = normalize_hostname(host);
    if is_github_com(&normalized) {
        "https://api.github.com/".to_string()
    } else {
        format!("https://{normalized}/api/v3/")
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("GitHub.com", "github.com")]
    #[case("https://github.com/", "github.com")]
    #[case("http://github.com/", "github.com")]
    #[case("https://my-ghe.example.com", "my-ghe.example.com")]
    #[case("https://ghe.io///", "ghe.io")]
    #[case("github.com", "github.com")]
    fn test_should_normalize_hostname(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_hostname(input), expected);
    }

    #[rstest]
    #[case("github.com", true)]
    #[case("GITHUB.COM", true)]
    #[case("https://github.com", true)]
    #[case("github.localhost", true)]
    #[case("enterprise.example.com", false)]
    fn test_should_detect_github_com(#[case] host: &str, #[case] expected: bool) {
        assert_eq!(is_github_com(host), expected);
    }

    #[rstest]
    #[case("github.com", "https://api.github.com/")]
    #[case("https://GitHub.com/", "https://api.github.com/")]
    #[case("ghe.example.com", "https://ghe.example.com/api/v3/")]
    fn test_should_build_rest_url(#[case] host: &str, #[case] expected: &str) {
        assert_eq!(rest_url(host), expected);
    }
}
