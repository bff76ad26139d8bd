//! Allow-list HTML sanitizer for episode descriptions
//!
//! Feed descriptions arrive as arbitrary HTML written by the hosting
//! platform's editor. Before an episode leaves the repository its
//! description is re-serialized through an allow-list: a small set of
//! formatting elements survives, dangerous elements disappear together
//! with their content, and every other element is unwrapped so only its
//! children remain. Text is re-escaped on output, so running the
//! sanitizer over already sanitized markup changes nothing.

use scraper::{ElementRef, Html};
use url::Url;

/// Elements that survive sanitization with their tags intact
const ALLOWED_ELEMENTS: &[&str] = &[
    "p",
    "br",
    "strong",
    "em",
    "a",
    "ul",
    "ol",
    "li",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "blockquote",
    "code",
    "pre",
];

/// Attributes kept on allowed elements; everything else is dropped
const ALLOWED_ATTRIBUTES: &[&str] = &["href", "target", "rel", "class"];

/// Elements removed together with their entire content
const DROP_CONTENT_ELEMENTS: &[&str] = &[
    "script", "style", "iframe", "noscript", "object", "embed", "form", "template", "head",
    "title",
];

/// Allowed elements with no closing tag
const VOID_ELEMENTS: &[&str] = &["br"];

/// Schemes an `href` value may use; relative URLs are always allowed
const ALLOWED_HREF_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Sanitize untrusted HTML down to the allowed subset
///
/// The input is parsed as an HTML fragment and re-serialized node by
/// node, so malformed markup comes out balanced and entity-encoded.
pub fn sanitize_html(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut output = String::with_capacity(html.len());
    serialize_children(fragment.root_element(), &mut output);
    output
}

/// Serialize the children of an element, applying the allow-list to each
fn serialize_children(element: ElementRef, output: &mut String) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            serialize_element(child_element, output);
        } else if let Some(text) = child.value().as_text() {
            escape_text(text, output);
        }
        // Comments and other node kinds are dropped
    }
}

fn serialize_element(element: ElementRef, output: &mut String) {
    let name = element.value().name();

    if DROP_CONTENT_ELEMENTS.contains(&name) {
        return;
    }

    if !ALLOWED_ELEMENTS.contains(&name) {
        // Unknown wrapper: drop the tag but keep its children
        serialize_children(element, output);
        return;
    }

    output.push('<');
    output.push_str(name);
    for (attr_name, attr_value) in element.value().attrs() {
        if !ALLOWED_ATTRIBUTES.contains(&attr_name) {
            continue;
        }
        if attr_name == "href" && !is_safe_href(attr_value) {
            continue;
        }
        output.push(' ');
        output.push_str(attr_name);
        output.push_str("=\"");
        escape_attribute(attr_value, output);
        output.push('"');
    }
    output.push('>');

    if VOID_ELEMENTS.contains(&name) {
        return;
    }

    serialize_children(element, output);
    output.push_str("</");
    output.push_str(name);
    output.push('>');
}

/// Check whether an `href` value is safe to keep
fn is_safe_href(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => ALLOWED_HREF_SCHEMES.contains(&url.scheme()),
        // Relative URLs carry no scheme, so there is nothing to smuggle
        Err(url::ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}

fn escape_text(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

fn escape_attribute(value: &str, output: &mut String) {
    for c in value.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            _ => output.push(c),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
