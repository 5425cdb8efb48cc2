use qrstore_error::error::QrError;
use std::net::{Ipv4Addr, Ipv6Addr};
use unicode_normalization::UnicodeNormalization;

const KEY_SUFFIX: &str = ".png";

/// Schemes whose last path segment may carry `;params`
const USES_PARAMS: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtspu", "sip",
    "sips", "mms", "sftp", "tel",
];

/// Scheme, authority and path of a URL. Query, fragment and params are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub authority: String,
    pub path: String,
}

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

fn split_scheme(url: &str) -> (String, &str) {
    if let Some(i) = url.find(':') {
        let candidate = &url[..i];
        let starts_alpha = candidate
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic());

        if starts_alpha && candidate.chars().all(is_scheme_char) {
            return (candidate.to_lowercase(), &url[i + 1..]);
        }
    }
    (String::new(), url)
}

/// `v<hex>.<anything>` per RFC 3986
fn is_ip_future(host: &str) -> bool {
    let Some(rest) = host.strip_prefix('v') else {
        return false;
    };
    match rest.split_once('.') {
        Some((version, tail)) => {
            !version.is_empty()
                && version.chars().all(|c| c.is_ascii_hexdigit())
                && !tail.is_empty()
        }
        None => false,
    }
}

fn check_bracketed_host(host: &str) -> Result<(), QrError> {
    if host.starts_with('v') {
        if is_ip_future(host) {
            return Ok(());
        }
        return Err(QrError::InvalidUrl(format!(
            "IPvFuture address is invalid: {}",
            host
        )));
    }

    // a zone id may follow the address
    let address = match host.split_once('%') {
        Some((address, zone)) if !zone.is_empty() && !zone.contains('%') => address,
        _ => host,
    };

    if address.parse::<Ipv6Addr>().is_ok() {
        return Ok(());
    }

    if host.parse::<Ipv4Addr>().is_ok() {
        return Err(QrError::InvalidUrl(format!(
            "An IPv4 address cannot be in brackets: {}",
            host
        )));
    }

    Err(QrError::InvalidUrl(format!(
        "{} does not appear to be an IPv4 or IPv6 address",
        host
    )))
}

/// Reject authorities whose compatibility normalization introduces delimiters
fn check_normalized_authority(authority: &str) -> Result<(), QrError> {
    if authority.is_ascii() {
        return Ok(());
    }

    let stripped: String = authority
        .chars()
        .filter(|c| !matches!(c, '@' | ':' | '#' | '?'))
        .collect();
    let normalized: String = stripped.nfkc().collect();

    if stripped != normalized && normalized.contains(['/', '?', '#', '@', ':']) {
        return Err(QrError::InvalidUrl(format!(
            "Authority {} contains invalid characters under NFKC normalization",
            authority
        )));
    }

    Ok(())
}

fn split_authority(rest: &str) -> Result<(String, &str), QrError> {
    let Some(after) = rest.strip_prefix("//") else {
        return Ok((String::new(), rest));
    };

    let end = after.find(['/', '?', '#']).unwrap_or(after.len());
    let authority = &after[..end];

    if authority.contains('[') != authority.contains(']') {
        return Err(QrError::InvalidUrl(format!(
            "Invalid IPv6 authority: {}",
            authority
        )));
    }

    if let Some((_, bracketed)) = authority.split_once('[') {
        let host = bracketed.split_once(']').map_or(bracketed, |(host, _)| host);
        check_bracketed_host(host)?;
    }

    check_normalized_authority(authority)?;

    Ok((authority.to_string(), &after[end..]))
}

fn strip_params(path: &str) -> &str {
    let search_from = path.rfind('/').unwrap_or(0);
    match path[search_from..].find(';') {
        Some(i) => &path[..search_from + i],
        None => path,
    }
}

/// Split a URL into scheme, authority and path.
///
/// Leading control characters and spaces are ignored, as are tabs and line breaks
/// anywhere in the input.
pub fn split_url(url: &str) -> Result<UrlParts, QrError> {
    let cleaned: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let (scheme, rest) = split_scheme(&cleaned);
    let (authority, rest) = split_authority(rest)?;

    let path_end = rest.find(['?', '#']).unwrap_or(rest.len());
    let mut path = &rest[..path_end];

    if USES_PARAMS.contains(&scheme.as_str()) && path.contains(';') {
        path = strip_params(path);
    }

    Ok(UrlParts {
        scheme,
        authority,
        path: path.to_string(),
    })
}

/// Derive the object key for a URL.
///
/// The key is the authority followed by the path, with every `/` replaced by `_`,
/// plus a `.png` suffix. Scheme-less input is treated as `authority/path`, so
/// `https://example.com/page` and `example.com/page` produce the same key.
pub fn derive_key(url: &str) -> Result<String, QrError> {
    let UrlParts {
        mut authority,
        mut path,
        ..
    } = split_url(url)?;

    if authority.is_empty() {
        let mut segments = path.split('/');
        let head = segments.next().unwrap_or_default().to_string();
        let tail = segments.collect::<Vec<_>>().join("/");

        authority = head;
        path = format!("/{}", tail);
    }

    Ok(format!(
        "{}{}{}",
        authority.replace('/', "_"),
        path.replace('/', "_"),
        KEY_SUFFIX
    ))
}
