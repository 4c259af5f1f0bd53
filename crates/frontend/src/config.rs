//! Build-time configuration.
//!
//! Values are baked in at compile time; the app has no runtime switches.

const DEFAULT_GRAPHQL_ENDPOINT: &str = "https://main-practice.codebootcamp.co.kr/graphql";

/// GraphQL endpoint used for login and user lookup.
///
/// Override with `DIARY_GRAPHQL_ENDPOINT=<url>` when building.
pub fn graphql_endpoint() -> &'static str {
    option_env!("DIARY_GRAPHQL_ENDPOINT").unwrap_or(DEFAULT_GRAPHQL_ENDPOINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_endpoint_is_absolute_url() {
        let url = graphql_endpoint();
        assert!(url.starts_with("http://") || url.starts_with("https://"));
    }
}
