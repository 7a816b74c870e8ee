//! Scan target validation and sanitization.
//!
//! Ensures a user-supplied target is a fetchable HTTP(S) URL before the
//! service reaches out to it.

use std::net::{Ipv4Addr, Ipv6Addr};

use url::{Host, Url};

/// Errors that can occur while validating a scan target.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("Scanning loopback or private addresses is not allowed")]
    PrivateTarget,
}

/// Validates a user-supplied scan target and normalizes it for fetching.
///
/// # Rules
///
/// 1. **Protocol**: Only HTTP and HTTPS are allowed; `javascript:`, `data:`,
///    `file:` and friends are rejected
/// 2. **Fragments**: Removed (the server never sees them anyway)
/// 3. **Private targets**: Loopback, link-local, unspecified and private
///    address literals (and `localhost`) are rejected unless `allow_private`
///    is set
///
/// Hostname lowercasing and default-port removal are handled by URL parsing
/// itself.
///
/// Note: only address *literals* are inspected; hostnames are not resolved
/// here, so DNS-based indirection is out of scope for this guard.
///
/// # Errors
///
/// Returns [`TargetUrlError::InvalidFormat`] for malformed URLs,
/// [`TargetUrlError::UnsupportedProtocol`] for non-HTTP(S) schemes and
/// [`TargetUrlError::PrivateTarget`] for refused addresses.
pub fn normalize_target(input: &str, allow_private: bool) -> Result<Url, TargetUrlError> {
    let mut url = Url::parse(input).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(TargetUrlError::UnsupportedProtocol),
    }

    url.set_fragment(None);

    if !allow_private && is_private_host(&url) {
        return Err(TargetUrlError::PrivateTarget);
    }

    Ok(url)
}

fn is_private_host(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => is_private_ipv4(ip),
        Some(Host::Ipv6(ip)) => is_private_ipv6(ip),
        None => true,
    }
}

fn is_private_ipv4(ip: Ipv4Addr) -> bool {
    ip.is_loopback() || ip.is_private() || ip.is_link_local() || ip.is_unspecified()
}

fn is_private_ipv6(ip: Ipv6Addr) -> bool {
    let segments = ip.segments();
    ip.is_loopback()
        || ip.is_unspecified()
        // fc00::/7 unique local
        || (segments[0] & 0xfe00) == 0xfc00
        // fe80::/10 link local
        || (segments[0] & 0xffc0) == 0xfe80
}
