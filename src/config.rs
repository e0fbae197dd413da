//! Form-relay endpoint configuration.

use web_sys::window;

/// Active Formspree endpoint for the contact form.
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/xzdavjao";

/// Literal left behind when a deployment has not set its own endpoint yet.
const ENDPOINT_PLACEHOLDER: &str = "REEMPLAZAR_ENDPOINT";

/// Picks the endpoint to POST to: a non-empty page override wins, otherwise
/// the built-in default. Returns `None` when the result is unusable (empty
/// or still carrying the placeholder), so submission can be refused before
/// any network traffic.
pub fn resolve_endpoint(page_override: Option<&str>) -> Option<String> {
    let endpoint = page_override
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_FORM_ENDPOINT);

    if endpoint.is_empty() || endpoint.contains(ENDPOINT_PLACEHOLDER) {
        None
    } else {
        Some(endpoint.to_string())
    }
}

/// Per-page override, read live from `<body data-form-endpoint="…">`.
pub fn page_endpoint_override() -> Option<String> {
    window()?.document()?.body()?.get_attribute("data-form-endpoint")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default() {
        assert_eq!(resolve_endpoint(None).as_deref(), Some(DEFAULT_FORM_ENDPOINT));
        assert_eq!(resolve_endpoint(Some("")).as_deref(), Some(DEFAULT_FORM_ENDPOINT));
        assert_eq!(resolve_endpoint(Some("   ")).as_deref(), Some(DEFAULT_FORM_ENDPOINT));
    }

    #[test]
    fn override_wins_when_present() {
        assert_eq!(
            resolve_endpoint(Some(" https://formspree.io/f/propio ")).as_deref(),
            Some("https://formspree.io/f/propio")
        );
    }

    #[test]
    fn placeholder_is_treated_as_unconfigured() {
        assert_eq!(resolve_endpoint(Some("https://formspree.io/f/REEMPLAZAR_ENDPOINT")), None);
        assert_eq!(resolve_endpoint(Some("REEMPLAZAR_ENDPOINT")), None);
    }
}
