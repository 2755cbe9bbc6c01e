//! Tests for link rewriting.

use std::borrow::Cow;

use twitter_url_fixer::{LinkRewriter, Mirror};

fn rewrite(text: &str, mirror: Mirror) -> String {
    LinkRewriter::new().rewrite(text, mirror).into_owned()
}

// === Host Substitution Tests ===

#[test]
fn x_link_moves_to_selected_mirror() {
    assert_eq!(
        rewrite(
            "check this out https://x.com/user/status/123?x=1",
            Mirror::VxTwitter
        ),
        "check this out https://vxtwitter.com/user/status/123?x=1"
    );
}

#[test]
fn twitter_link_moves_to_selected_mirror() {
    assert_eq!(
        rewrite("https://twitter.com/user/status/9", Mirror::FixupX),
        "https://fixupx.com/user/status/9"
    );
}

#[test]
fn www_variants_are_rewritten() {
    assert_eq!(
        rewrite(
            "https://www.twitter.com/a http://www.bsky.app/profile/b",
            Mirror::FxTwitter
        ),
        "https://fxtwitter.com/a http://fxbsky.app/profile/b"
    );
}

#[test]
fn bsky_ignores_selected_mirror() {
    for mirror in Mirror::ALL {
        assert_eq!(
            rewrite("https://bsky.app/profile/a/post/b", mirror),
            "https://fxbsky.app/profile/a/post/b"
        );
    }
}

#[test]
fn x_and_bsky_links_rewritten_in_one_pass() {
    let text = "https://x.com/a/status/1 and https://bsky.app/profile/c/post/d";
    assert_eq!(
        rewrite(text, Mirror::VxTwitter),
        "https://vxtwitter.com/a/status/1 and https://fxbsky.app/profile/c/post/d"
    );
}

#[test]
fn every_occurrence_is_rewritten() {
    let text = "https://x.com/1\nhttps://x.com/2\thttps://twitter.com/3";
    assert_eq!(
        rewrite(text, Mirror::FxTwitter),
        "https://fxtwitter.com/1\nhttps://fxtwitter.com/2\thttps://fxtwitter.com/3"
    );
}

// === Suffix Preservation Tests ===

#[test]
fn scheme_and_suffix_are_preserved() {
    assert_eq!(
        rewrite("http://x.com/u/status/1?s=20&t=abc#frag", Mirror::VxTwitter),
        "http://vxtwitter.com/u/status/1?s=20&t=abc#frag"
    );
}

#[test]
fn trailing_punctuation_stays_attached_to_link() {
    assert_eq!(
        rewrite("(see https://x.com/a).", Mirror::VxTwitter),
        "(see https://vxtwitter.com/a)."
    );
}

// === No-Match Tests ===

#[test]
fn text_without_links_is_borrowed_unchanged() {
    let text = "x.com without a scheme, https://example.com/x.com";
    let out = LinkRewriter::new().rewrite(text, Mirror::VxTwitter);
    assert!(matches!(out, Cow::Borrowed(_)));
    assert_eq!(out, text);
}

#[test]
fn matching_is_case_sensitive() {
    let text = "HTTPS://X.COM/a https://X.com/b";
    assert_eq!(rewrite(text, Mirror::VxTwitter), text);
}

#[test]
fn rewritten_output_is_stable() {
    let once = rewrite("https://x.com/a https://bsky.app/b", Mirror::FixupX);
    let twice = rewrite(&once, Mirror::FixupX);
    assert_eq!(once, twice);
}

// === Mirror Change Tests ===

#[test]
fn changing_mirror_changes_output() {
    let text = "https://x.com/user/status/42";
    assert_eq!(rewrite(text, Mirror::VxTwitter), "https://vxtwitter.com/user/status/42");
    assert_eq!(rewrite(text, Mirror::FxTwitter), "https://fxtwitter.com/user/status/42");
}
