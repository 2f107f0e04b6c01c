//! Blog listing page

use dioxus::prelude::*;

use super::NotFoundContent;
use crate::components::{ArticleTileGrid, Container, LoadingSpinner, RevealSystem};
use crate::locale::Locale;
use crate::types::BlogPost;

/// `/blog` - blog in the default locale
#[component]
pub fn BlogHome() -> Element {
    let locale = Locale::default();

    rsx! {
        BlogPage { key: "{locale}", locale }
    }
}

/// `/:locale/blog` - localized blog
#[component]
pub fn Blog(locale: String) -> Element {
    match Locale::from_segment(&locale) {
        Some(locale) => rsx! {
            BlogPage { key: "{locale}", locale }
        },
        None => rsx! {
            NotFoundContent {}
        },
    }
}

#[component]
fn BlogPage(locale: Locale) -> Element {
    rsx! {
        div {
            class: "min-h-screen",

            section {
                class: "blog-hero from-orange-400 to-pink-500 text-white bg-gradient-to-r pt-32 pb-16",
                Container {
                    Link {
                        to: locale.home_path(),
                        class: "text-white/80 hover:text-white mb-6 inline-block text-sm",
                        "\u{2190} Back to Home"
                    }
                    h1 { class: "h1 mb-4", "Blog" }
                    p {
                        class: "max-w-2xl text-xl",
                        "News, guides and stories about online payments from the GiyaPay team."
                    }
                }
            }

            section {
                class: "section-padding bg-gray-50",
                Container {
                    SuspenseBoundary {
                        fallback: |_| rsx! { LoadingSpinner {} },
                        BlogPosts { locale }
                    }
                }
            }
        }
    }
}

/// Article grid, rendered once posts have loaded
#[component]
fn BlogPosts(locale: Locale) -> Element {
    let posts = use_server_future(move || fetch_blog_posts(locale))?;

    rsx! {
        match &*posts.read_unchecked() {
            Some(Ok(posts)) if !posts.is_empty() => rsx! {
                ArticleTileGrid { posts: posts.clone(), class: "md:grid-cols-2 lg:grid-cols-3" }
            },
            Some(Ok(_)) => rsx! {
                p { class: "text-gray-500 py-16 text-center", "No blog posts available at the moment." }
            },
            Some(Err(_)) => rsx! {
                p { class: "text-gray-500 py-16 text-center", "Blog posts will appear here once Contentful is configured." }
            },
            None => rsx! {
                LoadingSpinner {}
            },
        }

        RevealSystem {}
    }
}

/// Fetch the newest blog posts for `locale` from Contentful
#[server]
async fn fetch_blog_posts(locale: Locale) -> Result<Vec<BlogPost>, ServerFnError> {
    use crate::config::ContentfulConfig;
    use crate::contentful::{ContentfulClient, BLOG_POST_LIMIT, BLOG_POST_ORDER, PAGE_BLOG_POST_COLLECTION};
    use crate::types::PageBlogPostCollectionResponse;

    let config = ContentfulConfig::from_env().map_err(|e| {
        tracing::warn!(error = %e, "Contentful is not configured");
        ServerFnError::new(e.to_string())
    })?;

    let client = ContentfulClient::new(config.endpoint()).with_token(config.active_token());

    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Variables {
        locale: Locale,
        preview: bool,
        limit: i32,
        order: Vec<&'static str>,
    }

    let variables = Variables {
        locale,
        preview: config.preview,
        limit: BLOG_POST_LIMIT,
        order: vec![BLOG_POST_ORDER],
    };

    let response: PageBlogPostCollectionResponse = client
        .query(PAGE_BLOG_POST_COLLECTION, Some(variables))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, %locale, "failed to fetch blog posts");
            ServerFnError::new(e.to_string())
        })?;

    let posts = response.into_posts();
    tracing::debug!(count = posts.len(), %locale, "fetched blog posts");

    Ok(posts)
}
