//! GraphQL query definitions for the Contentful Content API

/// Sort order for blog listings, newest first
pub const BLOG_POST_ORDER: &str = "publishedDate_DESC";

/// Number of posts shown on the blog page
pub const BLOG_POST_LIMIT: i32 = 20;

pub const PAGE_BLOG_POST_COLLECTION: &str = r#"
  query PageBlogPostCollection(
    $locale: String
    $preview: Boolean
    $limit: Int
    $order: [PageBlogPostOrder]
  ) {
    pageBlogPostCollection(limit: $limit, locale: $locale, preview: $preview, order: $order) {
      items {
        sys {
          id
        }
        slug
        title
        shortDescription
        publishedDate
        author {
          name
        }
        featuredImage {
          url
          title
          description
          width
          height
        }
      }
    }
  }
"#;
