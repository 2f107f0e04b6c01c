//! Site navigation entries and active-link matching

use crate::locale::Locale;

/// External booking page behind every "Get a Demo" button
pub const DEMO_BOOKING_URL: &str = "https://calendly.com/salesbimstech/60min-1?back=1&month=2021-10";

/// Where a navigation entry points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Blog,
    /// Anchor on the landing page
    Section(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
}

/// Header entries in display order
pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { label: "Home", target: NavTarget::Home },
    NavItem { label: "Features", target: NavTarget::Section("features") },
    NavItem { label: "Pricing", target: NavTarget::Section("pricing") },
    NavItem { label: "Blog", target: NavTarget::Blog },
    NavItem { label: "FAQ", target: NavTarget::Section("faq") },
    NavItem { label: "Contact", target: NavTarget::Section("contact") },
];

impl NavItem {
    pub fn href(&self, locale: Locale) -> String {
        match self.target {
            NavTarget::Home => locale.home_path(),
            NavTarget::Blog => locale.blog_path(),
            NavTarget::Section(anchor) => locale.anchor_path(anchor),
        }
    }

    /// Whether the entry is highlighted on `path`. Section anchors never are.
    pub fn is_active(&self, path: &str, locale: Locale) -> bool {
        match self.target {
            NavTarget::Home => is_active(path, locale, &locale.home_path()),
            NavTarget::Blog => is_active(path, locale, "/blog"),
            NavTarget::Section(_) => false,
        }
    }
}

/// Active-link rule: the locale home matches itself and `/`, anything else
/// matches any path containing it.
pub fn is_active(path: &str, locale: Locale, target: &str) -> bool {
    if target == locale.home_path() {
        return path == target || path == "/";
    }
    path.contains(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(label: &str) -> NavItem {
        NAV_ITEMS
            .into_iter()
            .find(|item| item.label == label)
            .unwrap()
    }

    #[test]
    fn test_home_active() {
        let home = item("Home");
        assert!(home.is_active("/en-US", Locale::EnUs));
        assert!(home.is_active("/", Locale::EnUs));
        assert!(!home.is_active("/en-US/blog", Locale::EnUs));
        assert!(!home.is_active("/en-US", Locale::DeDe));
    }

    #[test]
    fn test_blog_active() {
        let blog = item("Blog");
        assert!(blog.is_active("/de-DE/blog", Locale::DeDe));
        assert!(blog.is_active("/blog", Locale::EnUs));
        assert!(!blog.is_active("/de-DE", Locale::DeDe));
    }

    #[test]
    fn test_sections_never_active() {
        assert!(!item("FAQ").is_active("/en-US", Locale::EnUs));
    }

    #[test]
    fn test_hrefs() {
        let hrefs: Vec<String> = NAV_ITEMS.iter().map(|i| i.href(Locale::DeDe)).collect();
        assert_eq!(
            hrefs,
            vec![
                "/de-DE",
                "/de-DE#features",
                "/de-DE#pricing",
                "/de-DE/blog",
                "/de-DE#faq",
                "/de-DE#contact",
            ]
        );
    }
}
