use thiserror::Error;
use url::Url;

// The endpoint has always been queried with `enity`, not `entity`. Keep it, the server's behavior depends on it.
const ENTITY_PARAM: &str = "enity";
const ENTITY: &str = "song";

#[derive(Error, Debug)]
pub enum UrlError {
    #[error("empty search term")]
    EmptyTerm,
    #[error("bad base URL {base:?}")]
    Parse {
        base: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported URL scheme {0:?}")]
    Scheme(String),
}

pub fn search_url(base: &str, term: &str) -> Result<Url, UrlError> {
    if term.trim().is_empty() {
        return Err(UrlError::EmptyTerm);
    }
    let endpoint = format!("{}/search", base.trim_end_matches('/'));
    let mut url = Url::parse(&endpoint).map_err(|source| UrlError::Parse {
        base: base.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlError::Scheme(other.to_string())),
    }
    // form encoding, so spaces become `+`
    url.query_pairs_mut()
        .append_pair("term", term)
        .append_pair(ENTITY_PARAM, ENTITY);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint() {
        let url = search_url("https://itunes.apple.com", "taylor swift").unwrap();
        assert_eq!(
            url.as_str(),
            "https://itunes.apple.com/search?term=taylor+swift&enity=song"
        );
    }

    #[test]
    fn trailing_slash_on_base() {
        let url = search_url("http://127.0.0.1:8080/", "x").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/search?term=x&enity=song");
    }

    #[test]
    fn term_is_encoded() {
        let url = search_url("https://itunes.apple.com", "AC/DC & friends?").unwrap();
        assert_eq!(
            url.query(),
            Some("term=AC%2FDC+%26+friends%3F&enity=song")
        );
    }

    #[test]
    fn empty_term() {
        assert!(matches!(
            search_url("https://itunes.apple.com", ""),
            Err(UrlError::EmptyTerm)
        ));
        assert!(matches!(
            search_url("https://itunes.apple.com", "  \t"),
            Err(UrlError::EmptyTerm)
        ));
    }

    #[test]
    fn bad_base() {
        assert!(matches!(
            search_url("", "taylor swift"),
            Err(UrlError::Parse { .. })
        ));
        assert!(matches!(
            search_url("ftp://itunes.apple.com", "taylor swift"),
            Err(UrlError::Scheme(scheme)) if scheme == "ftp"
        ));
    }
}
