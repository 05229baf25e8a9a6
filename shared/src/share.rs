//! Outbound share links.

use urlencoding::encode;

/// Title used when the article has none.
pub const FALLBACK_SHARE_TITLE: &str = "مقاله جالب";

/// Networks offered by the share bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    /// t.me share dialog.
    Telegram,
    /// Tweet intent.
    Twitter,
    /// wa.me message.
    WhatsApp,
    /// LinkedIn share-offsite.
    LinkedIn,
}

impl ShareTarget {
    /// Share bar order.
    pub const ALL: [ShareTarget; 4] =
        [ShareTarget::Telegram, ShareTarget::Twitter, ShareTarget::WhatsApp, ShareTarget::LinkedIn];

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            ShareTarget::Telegram => "Telegram",
            ShareTarget::Twitter => "Twitter",
            ShareTarget::WhatsApp => "WhatsApp",
            ShareTarget::LinkedIn => "LinkedIn",
        }
    }
}

/// LinkedIn only takes the URL; the others also carry the title.
pub fn share_url(target: ShareTarget, page_url: &str, title: Option<&str>) -> String {
    let url = encode(page_url);
    let text = encode(title.filter(|t| !t.trim().is_empty()).unwrap_or(FALLBACK_SHARE_TITLE));
    match target {
        ShareTarget::Telegram => format!("https://t.me/share/url?url={url}&text={text}"),
        ShareTarget::Twitter => format!("https://twitter.com/intent/tweet?url={url}&text={text}"),
        ShareTarget::WhatsApp => format!("https://wa.me/?text={text}%20{url}"),
        ShareTarget::LinkedIn => {
            format!("https://www.linkedin.com/sharing/share-offsite/?url={url}")
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://abzarestan.example/articles/1?x=1&y=2";

    #[test]
    fn encodes_url_and_title() {
        assert_eq!(
            share_url(ShareTarget::Telegram, PAGE, Some("a b")),
            "https://t.me/share/url?url=https%3A%2F%2Fabzarestan.example%2Farticles%2F1%3Fx%3D1%26y%3D2&text=a%20b"
        );
        assert!(share_url(ShareTarget::WhatsApp, PAGE, Some("t")).starts_with("https://wa.me/?text=t%20https%3A"));
        assert!(!share_url(ShareTarget::LinkedIn, PAGE, Some("t")).contains("text="));
    }

    #[test]
    fn missing_title_uses_fallback() {
        let link = share_url(ShareTarget::Twitter, PAGE, None);
        assert!(link.ends_with(&format!("&text={}", encode(FALLBACK_SHARE_TITLE))));
        assert_eq!(link, share_url(ShareTarget::Twitter, PAGE, Some("  ")));
    }
}
