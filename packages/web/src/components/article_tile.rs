//! Blog article tiles

use dioxus::prelude::*;

use crate::types::BlogPost;

/// Grid of article tiles
#[component]
pub fn ArticleTileGrid(posts: Vec<BlogPost>, #[props(default)] class: String) -> Element {
    rsx! {
        div {
            class: "grid grid-cols-1 gap-8 {class}",
            for post in posts {
                ArticleTile { key: "{post.sys.id}", post: post.clone() }
            }
        }
    }
}

/// A single article tile with image, title, summary and byline
#[component]
pub fn ArticleTile(post: BlogPost) -> Element {
    let title = post.title.clone().unwrap_or_default();
    let published = post.published_label();
    let author = post.author_name().map(str::to_string);

    rsx! {
        article {
            class: "article-tile fade-in flex flex-col overflow-hidden rounded-2xl border border-gray-200 bg-white shadow-sm",

            if let Some(image) = post.featured_image.as_ref() {
                if let Some(url) = image.url.as_ref() {
                    img {
                        class: "article-tile-image h-48 w-full object-cover",
                        src: "{url}",
                        alt: "{image.alt()}",
                        loading: "lazy",
                    }
                }
            }

            div {
                class: "flex flex-1 flex-col p-6",
                h3 { class: "h4 mb-2 text-gray-900", "{title}" }
                if let Some(description) = post.short_description.as_ref() {
                    p { class: "text-gray-600 mb-4 flex-1", "{description}" }
                }
                div {
                    class: "text-gray-500 mt-auto flex items-center gap-2 text-sm",
                    if let Some(author) = author {
                        span { class: "article-tile-author", "{author}" }
                    }
                    if let Some(published) = published {
                        time { class: "article-tile-date", "{published}" }
                    }
                }
            }
        }
    }
}
