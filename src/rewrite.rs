//! Link rewriting.
//!
//! Three independent substitutions run over the whole text, in order:
//! x.com and twitter.com links move to the selected mirror, bsky.app links
//! move to a fixed mirror. Only the host (with an optional `www.`) changes;
//! scheme and path/query/fragment are copied through untouched.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Mirror, BSKY_HOST, BSKY_MIRROR_DOMAIN, TWITTER_HOST, X_HOST};

static X_LINK: LazyLock<Regex> = LazyLock::new(|| host_link_regex(X_HOST));
static TWITTER_LINK: LazyLock<Regex> = LazyLock::new(|| host_link_regex(TWITTER_HOST));
static BSKY_LINK: LazyLock<Regex> = LazyLock::new(|| host_link_regex(BSKY_HOST));

/// `http(s)://[www.]<host>` followed by a run of non-whitespace.
///
/// The word boundary keeps `x.com` from matching the start of `x.company`.
fn host_link_regex(host: &str) -> Regex {
    let pattern = format!(
        r"(?P<scheme>https?://)(?:www\.)?{}\b(?P<rest>\S*)",
        regex::escape(host)
    );
    Regex::new(&pattern).expect("host link pattern is valid")
}

/// Applies the link substitutions.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkRewriter;

impl LinkRewriter {
    pub fn new() -> Self {
        Self
    }

    /// Rewrites every recognised link in `text`.
    ///
    /// Returns `Cow::Borrowed` when nothing matched, so callers can skip the
    /// clipboard write without comparing strings.
    pub fn rewrite<'a>(&self, text: &'a str, mirror: Mirror) -> Cow<'a, str> {
        let text = substitute(&X_LINK, Cow::Borrowed(text), mirror.domain());
        let text = substitute(&TWITTER_LINK, text, mirror.domain());
        substitute(&BSKY_LINK, text, BSKY_MIRROR_DOMAIN)
    }
}

fn substitute<'a>(re: &Regex, text: Cow<'a, str>, domain: &str) -> Cow<'a, str> {
    let replacement = format!("${{scheme}}{domain}${{rest}}");
    let replaced = match re.replace_all(&text, replacement.as_str()) {
        Cow::Owned(s) => Some(s),
        Cow::Borrowed(_) => None,
    };
    match replaced {
        Some(s) => Cow::Owned(s),
        None => text,
    }
}
