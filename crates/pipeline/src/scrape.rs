//! Best-effort fetching of a client's website as plain text.
//!
//! The text feeds [`copyforge_core::insights::extract_insights`]; callers
//! treat every [`ScrapeError`] as "no insights" rather than a failure.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

/// Default timeout for a single page fetch.
pub const DEFAULT_SCRAPE_TIMEOUT: Duration = Duration::from_secs(15);

/// Longest text kept from a page, in characters.
pub const MAX_PAGE_TEXT: usize = 5000;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; CopyforgeBot/1.0)";

static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style|noscript)\b[^>]*>.*?</(script|style|noscript)\s*>")
        .expect("valid regex")
});

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// The HTTP request itself failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The site returned a non-2xx status code.
    #[error("Website returned HTTP {0}")]
    HttpStatus(u16),

    #[error("Website returned no readable text")]
    Empty,
}

// ---------------------------------------------------------------------------
// WebsiteScraper
// ---------------------------------------------------------------------------

pub struct WebsiteScraper {
    client: reqwest::Client,
}

impl WebsiteScraper {
    pub fn new(timeout: Duration) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// Fetch `url` and reduce it to at most [`MAX_PAGE_TEXT`] characters of text.
    pub async fn fetch_text(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus(status.as_u16()));
        }

        let html = response.text().await?;
        let text = html_to_text(&html);
        if text.is_empty() {
            return Err(ScrapeError::Empty);
        }
        tracing::debug!(url, chars = text.chars().count(), "Scraped website text");
        Ok(text)
    }
}

/// Strip markup from an HTML document, collapsing whitespace.
pub fn html_to_text(html: &str) -> String {
    let without_scripts = SCRIPT_RE.replace_all(html, " ");
    let without_comments = COMMENT_RE.replace_all(&without_scripts, " ");
    let without_tags = TAG_RE.replace_all(&without_comments, " ");
    let decoded = decode_entities(&without_tags);
    let collapsed = WHITESPACE_RE.replace_all(&decoded, " ");
    collapsed.trim().chars().take(MAX_PAGE_TEXT).collect()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scripts_styles_and_tags() {
        let html = r#"<html><head><style>body { color: red }</style>
            <script type="text/javascript">var x = "<b>";</script></head>
            <body><h1>Acme</h1><!-- nav --><p>Lifetime&nbsp;warranty &amp; free returns</p></body></html>"#;
        assert_eq!(html_to_text(html), "Acme Lifetime warranty & free returns");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(html_to_text("<p>a\n\n\t b</p>   <p>c</p>"), "a b c");
    }

    #[test]
    fn truncates_long_pages() {
        let html = format!("<p>{}</p>", "x".repeat(MAX_PAGE_TEXT * 2));
        assert_eq!(html_to_text(&html).chars().count(), MAX_PAGE_TEXT);
    }

    #[test]
    fn markup_only_page_is_empty() {
        assert!(html_to_text("<div><img src=\"a.png\"></div>").is_empty());
    }
}
