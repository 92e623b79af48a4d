/// Lead-intake endpoint. Overridable at compile time with `LEAD_ENDPOINT_URL`
/// so staging builds can point at a test inbox.
#[cfg(debug_assertions)]
pub fn lead_endpoint() -> Option<&'static str> {
    // Debug builds submit nowhere unless explicitly configured.
    option_env!("LEAD_ENDPOINT_URL").filter(|url| !url.is_empty())
}

#[cfg(not(debug_assertions))]
pub fn lead_endpoint() -> Option<&'static str> {
    option_env!("LEAD_ENDPOINT_URL")
        .filter(|url| !url.is_empty())
        .or(Some("https://formspree.io/f/mbdrnkoj"))
}
