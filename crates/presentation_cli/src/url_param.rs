//! Destination extraction from a launch URL
//!
//! Launchers open the tool with a URL such as
//! `https://host/retrieve.html?dest=NW1+6XE`. Only the query string matters.

use url::Url;

/// Query parameter carrying the destination
pub const DEFAULT_DEST_PARAM: &str = "dest";

/// Read the destination query parameter from an absolute or relative URL
///
/// Values are percent-decoded and `+` becomes a space. Empty values count
/// as missing.
///
/// # Errors
///
/// Returns a parse error if the text is not a URL.
pub fn destination_from_url(raw_url: &str, name: &str) -> Result<Option<String>, url::ParseError> {
    let base = Url::parse("http://localhost/")?;
    let url = Url::options().base_url(Some(&base)).parse(raw_url.trim())?;

    Ok(url
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plus_as_space() {
        let value = destination_from_url("https://example.com/retrieve.html?dest=SW1A+1AA", "dest")
            .unwrap();
        assert_eq!(value.as_deref(), Some("SW1A 1AA"));
    }

    #[test]
    fn decodes_percent_escapes() {
        let value = destination_from_url(
            "https://example.com/?mode=transit&dest=51.5155%2C-0.1419",
            DEFAULT_DEST_PARAM,
        )
        .unwrap();
        assert_eq!(value.as_deref(), Some("51.5155,-0.1419"));
    }

    #[test]
    fn accepts_bare_query_string() {
        let value = destination_from_url("?dest=Baker%20Street", "dest").unwrap();
        assert_eq!(value.as_deref(), Some("Baker Street"));
    }

    #[test]
    fn missing_parameter_is_none() {
        let value = destination_from_url("https://example.com/?other=1", "dest").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn empty_parameter_is_none() {
        let value = destination_from_url("https://example.com/?dest=", "dest").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn ignores_fragment() {
        let value = destination_from_url("https://example.com/?dest=NW1#top", "dest").unwrap();
        assert_eq!(value.as_deref(), Some("NW1"));
    }
}
