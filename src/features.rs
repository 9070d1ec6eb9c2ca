use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Optional identifiers attached to a post. Carried through to the output,
/// never scored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub author_id: Option<String>,
    pub tweet_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFeatures {
    pub text: String,
    pub has_url: bool,
    pub has_media: bool,
    pub is_retweet: bool,
    pub is_reply: bool,
    pub length: usize,
    pub hashtag_count: usize,
    pub mention_count: usize,
    pub question_mark_count: usize,
    pub exclamation_count: usize,
    pub timestamp: i64,
    pub author_id: Option<String>,
    pub tweet_id: Option<String>,
}

macro_rules! lazy_regex {
    ($name:ident = $pattern:expr) => {
        static $name: Lazy<Regex> = Lazy::new(|| Regex::new($pattern).expect("invalid regex"));
    };
}

lazy_regex!(URL_RE = r"https?://\S+");
lazy_regex!(MEDIA_RE = r"(?i)\[media\]|\[photo\]|\[video\]");
lazy_regex!(HASHTAG_RE = r"#\w+");
lazy_regex!(MENTION_RE = r"@\w+");

/// `timestamp` is the capture time in milliseconds since the epoch.
pub fn extract_text_features(text: &str, metadata: &Metadata, timestamp: i64) -> TextFeatures {
    TextFeatures {
        text: text.to_string(),
        has_url: URL_RE.is_match(text),
        has_media: MEDIA_RE.is_match(text),
        is_retweet: text.starts_with("RT @") || text.contains("via @"),
        is_reply: text.starts_with('@'),
        length: text.chars().count(),
        hashtag_count: HASHTAG_RE.find_iter(text).count(),
        mention_count: MENTION_RE.find_iter(text).count(),
        question_mark_count: text.matches('?').count(),
        exclamation_count: text.matches('!').count(),
        timestamp,
        author_id: metadata.author_id.clone(),
        tweet_id: metadata.tweet_id.clone(),
    }
}
