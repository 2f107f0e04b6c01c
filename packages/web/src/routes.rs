//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::SiteLayout;
use crate::locale::Locale;
use crate::pages::{Blog, BlogHome, Home, Landing, NotFound};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        // Default locale without a prefix
        #[route("/")]
        Home {},

        #[route("/blog")]
        BlogHome {},

        // Locale-prefixed pages
        #[route("/:locale")]
        Landing { locale: String },

        #[route("/:locale/blog")]
        Blog { locale: String },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Locale the route renders in. Unknown segments fall back to the
    /// default locale; the page itself renders the not-found state.
    pub fn locale(&self) -> Locale {
        match self {
            Route::Landing { locale } | Route::Blog { locale } => {
                Locale::from_segment(locale).unwrap_or_default()
            }
            Route::Home {} | Route::BlogHome {} | Route::NotFound { .. } => Locale::default(),
        }
    }

    /// The same page in another locale
    pub fn with_locale(&self, locale: Locale) -> Route {
        let locale = locale.to_string();
        match self {
            Route::Blog { .. } | Route::BlogHome {} => Route::Blog { locale },
            _ => Route::Landing { locale },
        }
    }
}
