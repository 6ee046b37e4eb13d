//! Embed URL policy
//!
//! Games are embedded from creator-controlled hosting. URLs pointing at the
//! big game portals are rejected outright (stolen uploads), plain-HTTP hosts
//! are rejected, and portal-like URL shapes get a warning the submission UI
//! surfaces to the creator.

use url::Url;

/// Hostnames (and their subdomains) that may not be embedded
const BLOCKED_DOMAINS: &[&str] = &[
    // Major game portals
    "itch.io",
    "newgrounds.com",
    "kongregate.com",
    "armorgames.com",
    "miniclip.com",
    "poki.com",
    "crazygames.com",
    "y8.com",
    "addictinggames.com",
    "agame.com",
    "gameflare.com",
    "silvergames.com",
    "kizi.com",
    "friv.com",
    "coolmathgames.com",
    // Game hosting platforms
    "gamejolt.com",
    "games.construct.net",
    "playcanvas.com",
    // Generic hosting that often hosts stolen content
    "iogames.space",
];

/// URL fragments commonly seen on portal embed links
const SUSPICIOUS_FRAGMENTS: &[&str] = &["/embed/", "/play/", "?game=", "/game/", "/games/"];

/// Outcome of checking an embed URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedCheck {
    /// URL is acceptable
    Allowed,
    /// URL is acceptable but looks portal-like; `0` is the warning text
    AllowedWithWarning(String),
    /// URL is rejected; `0` is the reason
    Rejected(String),
}

impl EmbedCheck {
    /// Whether the URL may be saved
    #[inline]
    pub fn is_allowed(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }

    /// Warning text, when present
    pub fn warning(&self) -> Option<&str> {
        match self {
            Self::AllowedWithWarning(w) => Some(w),
            _ => None,
        }
    }
}

/// Validate a game embed URL against the hosting policy
pub fn check_embed_url(raw: &str) -> EmbedCheck {
    let parsed = match Url::parse(raw) {
        Ok(url) => url,
        Err(_) => return EmbedCheck::Rejected("Invalid URL format.".to_string()),
    };

    let host = match parsed.host_str() {
        Some(host) => host.to_ascii_lowercase(),
        None => return EmbedCheck::Rejected("URL has no host.".to_string()),
    };

    for domain in BLOCKED_DOMAINS {
        if host == *domain || host.ends_with(&format!(".{domain}")) {
            return EmbedCheck::Rejected(format!(
                "Games from {domain} cannot be embedded. Host your game on your own domain \
                 (GitHub Pages, Netlify, etc.)."
            ));
        }
    }

    if parsed.scheme() != "https" {
        return EmbedCheck::Rejected("Only HTTPS URLs are allowed.".to_string());
    }

    let lowered = raw.to_ascii_lowercase();
    for fragment in SUSPICIOUS_FRAGMENTS {
        if lowered.contains(fragment) {
            return EmbedCheck::AllowedWithWarning(
                "This URL pattern is commonly used by game portals. Make sure you own this game."
                    .to_string(),
            );
        }
    }

    EmbedCheck::Allowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_https_allowed() {
        assert_eq!(
            check_embed_url("https://mygame.example.dev/index.html"),
            EmbedCheck::Allowed
        );
    }

    #[test]
    fn test_blocked_portal_rejected() {
        assert!(!check_embed_url("https://itch.io/some-game").is_allowed());
    }

    #[test]
    fn test_blocked_subdomain_rejected() {
        assert!(!check_embed_url("https://html-classic.itch.io/some-game").is_allowed());
    }

    #[test]
    fn test_http_rejected() {
        assert!(!check_embed_url("http://mygame.example.dev/index.html").is_allowed());
    }

    #[test]
    fn test_portal_like_path_warns() {
        let check = check_embed_url("https://example.dev/embed/snake");
        assert!(check.is_allowed());
        assert!(check.warning().is_some());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(!check_embed_url("not a url").is_allowed());
    }
}
