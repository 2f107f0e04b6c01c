//! Type definitions for Contentful responses
//!
//! Every field the CMS allows editors to leave empty is optional.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sys {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ImageAsset {
    /// Alt text, preferring the asset description
    pub fn alt(&self) -> &str {
        self.description
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or("")
    }
}

/// A blog article as listed on the blog page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub sys: Sys,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub short_description: Option<String>,
    /// ISO 8601 timestamp as returned by the API
    pub published_date: Option<String>,
    pub author: Option<Author>,
    pub featured_image: Option<ImageAsset>,
}

impl BlogPost {
    pub fn published_on(&self) -> Option<NaiveDate> {
        let raw = self.published_date.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .ok()
            .or_else(|| raw.get(..10).and_then(|day| day.parse().ok()))
    }

    /// Publication date formatted for tiles, e.g. `May 10, 2023`
    pub fn published_label(&self) -> Option<String> {
        self.published_on()
            .map(|day| day.format("%B %-d, %Y").to_string())
    }

    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().and_then(|a| a.name.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Collection<T> {
    /// Entries the requesting token cannot resolve come back as `null`
    pub items: Vec<Option<T>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBlogPostCollectionResponse {
    pub page_blog_post_collection: Option<Collection<BlogPost>>,
}

impl PageBlogPostCollectionResponse {
    /// Resolved posts in API order
    pub fn into_posts(self) -> Vec<BlogPost> {
        self.page_blog_post_collection
            .map(|collection| collection.items.into_iter().flatten().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "pageBlogPostCollection": {
            "items": [
                {
                    "sys": { "id": "4Ua2" },
                    "slug": "payment-gateways-merchant-accounts",
                    "title": "Payment Gateways, Merchant Accounts, and More",
                    "shortDescription": "Is there an easier process?",
                    "publishedDate": "2023-05-10T00:00:00.000Z",
                    "author": { "name": "GiyaPay Team" },
                    "featuredImage": {
                        "url": "https://images.ctfassets.net/abc/gateway.png",
                        "title": "Gateway",
                        "description": null,
                        "width": 1200,
                        "height": 630
                    }
                },
                null,
                {
                    "sys": { "id": "9Zx1" },
                    "slug": null,
                    "title": "Draft",
                    "shortDescription": null,
                    "publishedDate": null,
                    "author": null,
                    "featuredImage": null
                }
            ]
        }
    }"#;

    #[test]
    fn test_decode_collection_skips_null_items() {
        let response: PageBlogPostCollectionResponse = serde_json::from_str(FIXTURE).unwrap();
        let posts = response.into_posts();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].sys.id, "4Ua2");
        assert_eq!(posts[0].author_name(), Some("GiyaPay Team"));
        assert_eq!(posts[0].featured_image.as_ref().unwrap().alt(), "Gateway");
        assert_eq!(posts[1].author_name(), None);
    }

    #[test]
    fn test_missing_collection_is_empty() {
        let response: PageBlogPostCollectionResponse =
            serde_json::from_str(r#"{"pageBlogPostCollection": null}"#).unwrap();
        assert!(response.into_posts().is_empty());
    }

    #[test]
    fn test_published_label() {
        let response: PageBlogPostCollectionResponse = serde_json::from_str(FIXTURE).unwrap();
        let posts = response.into_posts();

        assert_eq!(posts[0].published_label().as_deref(), Some("May 10, 2023"));
        assert_eq!(posts[1].published_label(), None);
    }

    #[test]
    fn test_published_on_accepts_short_timestamps() {
        let mut post: BlogPost = serde_json::from_value(serde_json::json!({
            "sys": { "id": "1" },
            "slug": null,
            "title": null,
            "shortDescription": null,
            "publishedDate": "2021-10-05T00:00+08:00",
            "author": null,
            "featuredImage": null
        }))
        .unwrap();
        assert_eq!(post.published_on(), NaiveDate::from_ymd_opt(2021, 10, 5));

        post.published_date = Some("not a date".to_string());
        assert_eq!(post.published_on(), None);
    }
}
