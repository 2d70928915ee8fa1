//! Reddit listing source.
//!
//! Fetches the hot listing of each configured subreddit through the
//! public JSON endpoint. Posts become records as "title selftext";
//! blank posts are skipped. 403 (blocked) and 429 (rate limited) are
//! logged distinctly but both count as a per-subreddit failure.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::TextRecord;

use super::sample::sample_records;
use super::{SourceError, SourceStrategy};

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Reddit listing response shapes (only the fields we read)
#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Post>,
}

#[derive(Debug, Deserialize)]
struct Post {
    data: PostData,
}

#[derive(Debug, Deserialize)]
struct PostData {
    #[serde(default)]
    title: String,
    #[serde(default)]
    selftext: String,
    #[serde(default)]
    score: i64,
    #[serde(default)]
    num_comments: i64,
    #[serde(default)]
    created_utc: f64,
}

fn post_to_record(post: PostData, subreddit: &str) -> Option<TextRecord> {
    let text = format!("{} {}", post.title, post.selftext);
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let created_at = DateTime::<Utc>::from_timestamp(post.created_utc as i64, 0)
        .unwrap_or_else(Utc::now);

    Some(TextRecord {
        text: text.to_string(),
        source: format!("r/{subreddit}"),
        engagement_score: post.score,
        comment_count: post.num_comments,
        created_at,
    })
}

/// Public-JSON Reddit source
pub struct RedditSource {
    subreddits: Vec<String>,
    post_limit: usize,
    client: reqwest::Client,
    timeout: Duration,
}

impl RedditSource {
    pub fn new(subreddits: Vec<String>, post_limit: usize, timeout: Duration) -> Self {
        Self {
            subreddits,
            post_limit,
            client: reqwest::Client::new(),
            timeout,
        }
    }

    fn listing_url(&self, subreddit: &str) -> String {
        format!(
            "https://www.reddit.com/r/{}/hot.json?limit={}",
            subreddit, self.post_limit
        )
    }

    async fn gather_subreddit(&self, subreddit: &str) -> Result<Vec<TextRecord>, SourceError> {
        let response = self
            .client
            .get(self.listing_url(subreddit))
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        match status {
            200 => {}
            403 => {
                warn!(subreddit, "Reddit denied access (blocked)");
                return Err(SourceError::Http(403));
            }
            429 => {
                warn!(subreddit, "Reddit rate limit hit");
                return Err(SourceError::Http(429));
            }
            other => return Err(SourceError::Http(other)),
        }

        let listing: Listing = response
            .json()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))?;

        Ok(listing
            .data
            .children
            .into_iter()
            .filter_map(|post| post_to_record(post.data, subreddit))
            .collect())
    }
}

#[async_trait]
impl SourceStrategy for RedditSource {
    fn name(&self) -> &str {
        "reddit"
    }

    async fn gather(&self) -> Result<Vec<TextRecord>, SourceError> {
        let mut records = Vec::new();

        for subreddit in &self.subreddits {
            match self.gather_subreddit(subreddit).await {
                Ok(posts) => {
                    debug!(subreddit = %subreddit, posts = posts.len(), "Subreddit gathered");
                    records.extend(posts);
                }
                Err(err) => {
                    warn!(subreddit = %subreddit, error = %err, "Subreddit failed");
                }
            }
        }

        if records.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(records)
    }

    fn fallback(&self) -> Vec<TextRecord> {
        // Reuse the sample comments, relabeled per configured
        // subreddit so the synthetic origin stays visible.
        let subs = &self.subreddits;
        if subs.is_empty() {
            return Vec::new();
        }
        sample_records()
            .into_iter()
            .enumerate()
            .map(|(i, mut record)| {
                let sub = &subs[i % subs.len()];
                record.source = format!("r/{sub} (fallback)");
                record
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_JSON: &str = r#"{
        "data": {
            "children": [
                {"data": {"title": "Kesar pista whey when?", "selftext": "Would buy instantly",
                          "score": 120, "num_comments": 14, "created_utc": 1700000000.0}},
                {"data": {"title": "", "selftext": "", "score": 3, "num_comments": 0,
                          "created_utc": 1700000100.0}},
                {"data": {"title": "Masala chai protein", "selftext": "",
                          "score": 55, "num_comments": 9, "created_utc": 1700000200.0}}
            ]
        }
    }"#;

    #[test]
    fn test_listing_parse_skips_blank_posts() {
        let listing: Listing = serde_json::from_str(LISTING_JSON).unwrap();
        let records: Vec<TextRecord> = listing
            .data
            .children
            .into_iter()
            .filter_map(|p| post_to_record(p.data, "fitness"))
            .collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "Kesar pista whey when? Would buy instantly");
        assert_eq!(records[0].source, "r/fitness");
        assert_eq!(records[0].engagement_score, 120);
        assert_eq!(records[0].comment_count, 14);
        assert_eq!(records[1].text, "Masala chai protein");
    }

    #[test]
    fn test_listing_url() {
        let source = RedditSource::new(vec!["fitness".to_string()], 25, Duration::from_secs(5));
        assert_eq!(
            source.listing_url("fitness"),
            "https://www.reddit.com/r/fitness/hot.json?limit=25"
        );
    }

    #[test]
    fn test_fallback_labels_carry_subreddit() {
        let source = RedditSource::new(
            vec!["fitness".to_string(), "supplements".to_string()],
            10,
            Duration::from_secs(5),
        );

        let records = source.fallback();
        assert!(!records.is_empty());
        assert_eq!(records[0].source, "r/fitness (fallback)");
        assert_eq!(records[1].source, "r/supplements (fallback)");
    }
}
