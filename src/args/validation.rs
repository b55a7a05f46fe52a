use reqwest::Url;

/// # Errors
///
/// Will return `Err` if the value is not an http(s) URL that can take path segments
pub fn check_base_url(value: &str) -> Result<Url, String> {
    let url = Url::parse(value).map_err(|e| format!("The api base url '{value}' is not a url: {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("The api base url '{value}' must use http or https."));
    }
    if url.cannot_be_a_base() {
        return Err(format!("The api base url '{value}' cannot be used as a base."));
    }
    Ok(url)
}
