//! Turns shared YouTube links into embeddable player URLs and thumbnail
//! candidates. Everything here is best-effort: an unrecognised link resolves
//! to `None`, it never panics on user-provided configuration.

use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoItem {
    pub url: &'static str,
    pub title: &'static str,
    pub tag: Option<&'static str>,
}

/// Training videos shown in the guide section, featured one first.
pub const TRAINING_VIDEOS: &[VideoItem] = &[
    VideoItem {
        url: "https://www.youtube.com/watch?v=R19shVbMHVs",
        title: "Iebraukšana stāvvietā perpendikulāri brauktuves malai",
        tag: Some("Manevri"),
    },
    VideoItem {
        url: "https://www.youtube.com/watch?v=eOzU-OloalI",
        title: "Visiem, kuri tuvākajā laikā kārtos CSDD eksāmenu",
        tag: Some("CSDD"),
    },
    VideoItem {
        url: "https://www.youtube.com/watch?v=ZjzqqW3Y9cg",
        title: "Kas notiek ar papildsekciju?",
        tag: Some("Noteikumi"),
    },
    VideoItem {
        url: "https://www.youtube.com/watch?v=UIvScNwMJqw",
        title: "2 rupjas kļūdas 2 minūtēs!",
        tag: Some("Kļūdas"),
    },
    VideoItem {
        url: "https://www.youtube.com/watch?v=IBncus5RebU&t=1s",
        title: "3 āķīgi virzieni",
        tag: Some("Krustošanās"),
    },
    VideoItem {
        url: "https://www.youtube.com/watch?v=jtqyWRJNfQA&t=1s",
        title: "CSDD speciālie manevri — parkošanās paralēli brauktuves malai",
        tag: Some("Manevri"),
    },
];

/// Extracts the video identifier from the share-URL shapes we accept:
/// `youtu.be/<id>`, `watch?v=<id>` and `/embed/<id>`.
pub fn youtube_id(share_url: &str) -> Option<String> {
    let parsed = Url::parse(share_url).ok()?;
    let host = parsed.host_str()?;

    if host.contains("youtu.be") {
        let id = parsed.path_segments()?.find(|segment| !segment.is_empty())?;
        return Some(id.to_string());
    }

    if let Some((_, v)) = parsed.query_pairs().find(|(key, _)| key == "v") {
        if !v.is_empty() {
            return Some(v.into_owned());
        }
    }

    if let Some(rest) = parsed.path().split("/embed/").nth(1) {
        let id = rest.split('/').next().unwrap_or("");
        if !id.is_empty() {
            return Some(id.to_string());
        }
    }

    None
}

/// Start offset in seconds from a `t` query parameter: either a bare number
/// or an `XhYmZs` duration. Absent or malformed markers mean 0.
pub fn start_seconds(share_url: &str) -> u32 {
    let parsed = match Url::parse(share_url) {
        Ok(url) => url,
        Err(_) => return 0,
    };
    let t = match parsed.query_pairs().find(|(key, _)| key == "t") {
        Some((_, value)) => value.into_owned(),
        None => return 0,
    };
    if let Ok(seconds) = t.parse::<u32>() {
        return seconds;
    }
    parse_duration(&t)
}

fn parse_duration(marker: &str) -> u32 {
    let mut total = 0u32;
    let mut digits = String::new();
    for ch in marker.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        let value: u32 = digits.parse().unwrap_or(0);
        digits.clear();
        total = total.saturating_add(match ch.to_ascii_lowercase() {
            'h' => value.saturating_mul(3600),
            'm' => value.saturating_mul(60),
            's' => value,
            _ => 0,
        });
    }
    total
}

/// Privacy-enhanced player URL for the lightbox iframe.
pub fn embed_url(share_url: &str) -> Option<String> {
    let id = youtube_id(share_url)?;
    let start = start_seconds(share_url);
    let mut embed = format!(
        "https://www.youtube-nocookie.com/embed/{}?autoplay=1&rel=0&modestbranding=1&playsinline=1",
        urlencoding::encode(&id)
    );
    if start > 0 {
        embed.push_str(&format!("&start={}", start));
    }
    Some(embed)
}

/// Thumbnail candidates in descending quality order. The card rendering the
/// image walks to the next candidate when one fails to load.
pub fn thumbnail_urls(share_url: &str) -> Option<[String; 4]> {
    let id = youtube_id(share_url)?;
    Some(
        ["maxresdefault", "sddefault", "hqdefault", "mqdefault"]
            .map(|quality| format!("https://i.ytimg.com/vi/{}/{}.jpg", id, quality)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_short_and_long_share_links() {
        let short = embed_url("https://youtu.be/abc123").unwrap();
        let long = embed_url("https://www.youtube.com/watch?v=abc123").unwrap();
        assert!(short.contains("/embed/abc123?"));
        assert!(long.contains("/embed/abc123?"));
    }

    #[test]
    fn resolves_embed_path_form() {
        assert_eq!(
            youtube_id("https://www.youtube.com/embed/abc123/extra"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn foreign_hosts_resolve_to_none() {
        assert_eq!(embed_url("https://example.com/not-a-video"), None);
        assert_eq!(youtube_id("not a url at all"), None);
        assert_eq!(thumbnail_urls("https://example.com/watch"), None);
    }

    #[test]
    fn start_marker_as_duration() {
        let embed = embed_url("https://www.youtube.com/watch?v=abc123&t=1h2m3s").unwrap();
        assert!(embed.ends_with("&start=3723"));
    }

    #[test]
    fn start_marker_as_bare_seconds() {
        assert_eq!(start_seconds("https://www.youtube.com/watch?v=x&t=90"), 90);
        assert_eq!(start_seconds("https://www.youtube.com/watch?v=x&t=1s"), 1);
    }

    #[test]
    fn malformed_start_marker_does_not_abort_resolution() {
        assert_eq!(start_seconds("https://www.youtube.com/watch?v=x&t=later"), 0);
        let embed = embed_url("https://www.youtube.com/watch?v=x&t=later").unwrap();
        assert!(!embed.contains("start="));
    }

    #[test]
    fn thumbnails_in_descending_quality_order() {
        let thumbs = thumbnail_urls("https://youtu.be/abc123").unwrap();
        assert_eq!(thumbs[0], "https://i.ytimg.com/vi/abc123/maxresdefault.jpg");
        assert_eq!(thumbs[3], "https://i.ytimg.com/vi/abc123/mqdefault.jpg");
    }
}
