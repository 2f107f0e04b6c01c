//! Landing page

use dioxus::prelude::*;

use super::NotFoundContent;
use crate::components::{Container, FixedBanner, RevealSystem};
use crate::locale::Locale;
use crate::nav::DEMO_BOOKING_URL;

/// A logo shown in a partner or client strip
struct Logo {
    src: &'static str,
    alt: &'static str,
}

const PAYMENT_PARTNERS: &[Logo] = &[
    Logo { src: "/images/visa.png", alt: "Visa" },
    Logo { src: "/images/mastercard.png", alt: "Mastercard" },
    Logo { src: "/images/shopee.png", alt: "Shopee Pay" },
    Logo { src: "/images/wechat.png", alt: "WeChat Pay" },
    Logo { src: "/images/gcash.png", alt: "GCash" },
    Logo { src: "/images/alipay.png", alt: "Alipay" },
    Logo { src: "/images/grab.png", alt: "Grab Pay" },
    Logo { src: "/images/instapay.png", alt: "InstaPay" },
    Logo { src: "/images/qr-ph.png", alt: "QR PH" },
    Logo { src: "/images/union-pay.png", alt: "UnionPay" },
];

const CLIENTS: &[&[Logo]] = &[
    &[
        Logo { src: "/images/IAU.png", alt: "IAU" },
        Logo { src: "/images/Papa-Diddi_s---Brand-Logo---on-White-1.png", alt: "Papa Diddi's" },
        Logo { src: "/images/CCTN.png", alt: "CCTN" },
        Logo { src: "/images/airworks-logo-png.png", alt: "Airworks" },
        Logo { src: "/images/mr-quickie.png", alt: "Mr. Quickie Corp" },
    ],
    &[
        Logo { src: "/images/blocxy.png", alt: "Blocxy" },
        Logo { src: "/images/mmda.png", alt: "MMDA" },
        Logo { src: "/images/icore-tech.png", alt: "iCore Technologies" },
    ],
];

struct Feature {
    kicker: &'static str,
    headline: &'static str,
    body: &'static str,
    image: Logo,
    /// Text on the left, image on the right
    text_first: bool,
}

const FEATURES: &[Feature] = &[
    Feature {
        kicker: "Flexible.",
        headline: "Choose how you want to accept online payments.",
        body: "Our basic and add-on features designed to address your specific requirements and needs.",
        image: Logo { src: "/images/flexible.png", alt: "Flexible Payment" },
        text_first: false,
    },
    Feature {
        kicker: "Simple.",
        headline: "Seamless User Journey",
        body: "Reduce abandoned carts and boost your sales with a streamlined check out. Let customers pay for your products and services without ever leaving your site.",
        image: Logo { src: "/images/steps.png", alt: "Simple Steps" },
        text_first: true,
    },
    Feature {
        kicker: "Dashboard.",
        headline: "Integrated Payment Dashboard.",
        body: "Keep track of all payment statuses from a single dashboard and easily download transaction reports when needed.",
        image: Logo { src: "/images/dashboard-alt.png", alt: "Dashboard" },
        text_first: false,
    },
];

const FAQS: &[(&str, &str)] = &[
    (
        "Is GiyaPay similar to e-wallets?",
        "GiyaPay is not similar to e-wallets. There is no need for the payor to create an account, download an application or register to its service unlike e-wallets. GiyaPay just needs to activate your Merchant Account, integrate our hosted payment button in your website, and you can easily start to accept payments from various payment channels!",
    ),
    (
        "How secure is GiyaPay?",
        "Giyapay uses an SSL encrypted website and is PCI-DSS Compliant. Each payment gateway has their respective security protocols, including possible 2MFA and OTP, which will be at the discretion and responsibility of the Payment Gateway.",
    ),
    (
        "Can I use GiyaPay if I do not have a website?",
        "Yes, through our Payment Link feature. As for the GiyaPay button, we would recommend having a hosted domain or a centralized payment page where we could attach the GiyaPay button for your payors to pay. We may provide this simple page for you, or we may coordinate with the team who built your website to provide this for you.",
    ),
];

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "https://www.facebook.com/GiyaPay"),
    ("Instagram", "https://www.instagram.com/giyapay/"),
    ("YouTube", "https://www.youtube.com/channel/UCV8M_KPE5i75L_ne1KuARSA"),
];

/// `/` - landing page in the default locale
#[component]
pub fn Home() -> Element {
    let locale = Locale::default();

    rsx! {
        LandingPage { key: "{locale}", locale }
    }
}

/// `/:locale` - localized landing page
#[component]
pub fn Landing(locale: String) -> Element {
    match Locale::from_segment(&locale) {
        Some(locale) => rsx! {
            LandingPage { key: "{locale}", locale }
        },
        None => rsx! {
            NotFoundContent {}
        },
    }
}

#[component]
fn LandingPage(locale: Locale) -> Element {
    rsx! {
        div {
            class: "min-h-screen",

            FixedBanner {}

            // Hero
            section {
                class: "hero-gradient-section",
                div {
                    class: "hero-title-container",
                    h1 {
                        class: "hero-title-large",
                        "Your complete"
                        br {}
                        "payment solution."
                    }
                }
            }

            // Devices, intro copy and calls to action
            section {
                class: "hero-gradient-wave-section",
                div {
                    class: "hero-devices-container",
                    div {
                        class: "hero-devices-wrapper",
                        img {
                            src: "/images/Group-42535.png",
                            alt: "GiyaPay payment solution devices",
                            width: "858",
                            height: "600",
                            class: "hero-devices-image",
                        }
                    }
                }
                div {
                    class: "hero-content-container",
                    div {
                        class: "hero-content-text",
                        p {
                            "Accept major debit/credit cards and other popular payment methods to offer a seamless check out experience. Manage your entire business, payments and payouts \u{2013} right from your dashboard."
                        }
                        p {
                            "GiyaPay is an easy-to-use online payment solution that provides easy-set-up and consolidated reports for your business."
                        }
                    }
                    div {
                        class: "hero-content-buttons",
                        a {
                            href: DEMO_BOOKING_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "btn-white-solid",
                            "Request a Demo"
                        }
                        a { href: "#features", class: "btn-white-outline", "See Features \u{2198}" }
                    }
                }
            }

            // Payment partners
            section {
                class: "payment-partners",
                Container {
                    div {
                        class: "text-center",
                        h2 { class: "h2 fade-in mb-6", "Our Payment Partners" }
                        p {
                            class: "text-gray-600 fade-in mx-auto mb-12 max-w-3xl text-xl",
                            "Select from a variety of payment gateways to conveniently accept payments through our secure and reliable online payment solution. It is as easy as one click of a button."
                        }
                        div {
                            class: "partners-grid fade-in",
                            for logo in PAYMENT_PARTNERS {
                                img {
                                    key: "{logo.alt}",
                                    src: logo.src,
                                    alt: logo.alt,
                                    width: "80",
                                    height: "50",
                                    class: "partner-logo",
                                }
                            }
                        }
                    }
                }
            }

            // What we can do
            section {
                class: "section-padding from-orange-400 to-pink-500 text-white bg-gradient-to-r",
                Container {
                    div {
                        class: "max-w-4xl",
                        h2 { class: "h2 fade-right mb-6", "What We Can Do For You" }
                        p {
                            class: "fade-right text-xl leading-relaxed",
                            "We enable you to accept online payments without the complexity of set-up requirements while providing a good customer service."
                        }
                    }
                }
            }

            // Features
            section {
                id: "features",
                class: "features-section",
                Container {
                    div {
                        class: "mb-16 text-center",
                        h4 { class: "text-gray-500 mb-4 text-sm font-semibold uppercase tracking-wider", "FEATURES" }
                        h2 { class: "h2", "How Are We Different?" }
                    }
                    for (index, feature) in FEATURES.iter().enumerate() {
                        FeatureRow { key: "{feature.kicker}", index }
                    }
                }
            }

            // Pricing
            section {
                id: "pricing",
                class: "section-padding bg-gray-50",
                Container {
                    div {
                        class: "grid grid-cols-1 items-center gap-12 lg:grid-cols-2",
                        div {
                            class: "fade-in",
                            h2 { class: "h2 mb-6", "Competitive Pricing" }
                            p {
                                class: "text-gray-600 mb-8 text-xl leading-relaxed",
                                "We offer flexible transaction and processing fees based on your business transactions."
                            }
                            a { href: "#contact", class: "btn-primary", "Get a Quote" }
                        }
                        div {
                            class: "fade-left",
                            img { src: "/images/processing-fees.png", alt: "Processing Fees", class: "h-auto w-full" }
                        }
                    }
                }
            }

            // Payment links
            section {
                class: "section-padding from-orange-400 to-pink-500 text-white bg-gradient-to-r",
                Container {
                    div {
                        class: "grid grid-cols-1 items-center gap-12 lg:grid-cols-2",
                        div {
                            class: "fade-right",
                            img { src: "/images/payment-links.png", alt: "Payment Links", class: "h-auto w-full" }
                        }
                        div {
                            class: "fade-left",
                            h4 { class: "text-pink-200 mb-4 text-lg font-semibold", "GIYAPAY PAYMENT LINKS" }
                            h2 {
                                class: "h2 mb-6",
                                "Don't have a website?"
                                br {}
                                "That's okay!"
                            }
                            p {
                                class: "mb-8 text-xl leading-relaxed",
                                "Get paid via Chat, SMS, and Email using GiyaPay's Payment links."
                            }
                            a {
                                href: "#contact",
                                class: "bg-black text-white hover:bg-gray-800 inline-block rounded-lg px-8 py-4 font-semibold transition-colors duration-200",
                                "Try Payment Link"
                            }
                        }
                    }
                }
            }

            // Social proof
            section {
                class: "social-proof",
                Container {
                    h2 { class: "h2 mb-12 text-center", "Businesses that Trust Us" }
                    for (row, group) in CLIENTS.iter().enumerate() {
                        div {
                            key: "{row}",
                            class: "logo-group",
                            for logo in group.iter() {
                                img { key: "{logo.alt}", src: logo.src, alt: logo.alt, class: "client-logo" }
                            }
                        }
                    }
                }
            }

            // Featured article
            section {
                class: "section-padding bg-gray-50",
                Container {
                    h2 { class: "h2 mb-12 text-center", "Featured Article" }
                    div {
                        class: "mx-auto grid max-w-6xl grid-cols-1 items-center gap-12 lg:grid-cols-2",
                        img {
                            src: "/images/giyapay_image3.jpg",
                            alt: "Featured Article",
                            class: "h-auto w-full rounded-lg",
                        }
                        div {
                            h3 {
                                class: "h3 mb-4",
                                "Payment Gateways, Merchant Accounts, and More: Is There An Easier Process?"
                            }
                            p {
                                class: "text-gray-600 mb-6 leading-relaxed",
                                "2020 \u{2013} a year filled with uncertainty, adversity, and surprises. All industries suffered massive losses, adjusted to ever-shifting consumer needs, and confronted both the ugly and inspiring sides of change. Despite these, humanity has proven one thing: when push comes to shove, we do what we must to adjust."
                            }
                            Link {
                                to: locale.blog_path(),
                                class: "text-pink-500 font-semibold hover:underline",
                                "Read more"
                            }
                        }
                    }
                }
            }

            // FAQ
            section {
                id: "faq",
                class: "faq-section",
                Container {
                    div {
                        class: "grid grid-cols-1 items-start gap-12 lg:grid-cols-2",
                        div {
                            h2 { class: "faq-title text-white", "Having trouble? We're here for you." }
                            div {
                                class: "space-y-4",
                                for (question, answer) in FAQS.iter().copied() {
                                    FaqItem { key: "{question}", question, answer }
                                }
                            }
                        }
                        div {
                            class: "fade-left",
                            img { src: "/images/support.png", alt: "Support", class: "h-auto w-full" }
                        }
                    }
                }
            }

            // Contact call to action
            section {
                id: "contact",
                class: "section-padding bg-white",
                Container {
                    div {
                        class: "relative text-center",
                        div {
                            class: "mb-8 flex items-center justify-center gap-8",
                            img { src: "/images/ipad.png", alt: "iPad", class: "fade-right" }
                            img { src: "/images/macbook.png", alt: "MacBook", class: "fade-left" }
                        }
                        div {
                            class: "fade-in",
                            h4 { class: "text-gray-500 mb-4 text-sm font-semibold uppercase tracking-wider", "ENOUGH TALK, LET'S WORK TOGETHER" }
                            h2 { class: "h2 mb-8", "Let's talk and see how we can help." }
                            a {
                                href: DEMO_BOOKING_URL,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "btn-primary",
                                "Get Started with GiyaPay"
                            }
                        }
                    }
                }
            }

            // Newsletter
            section {
                class: "section-padding bg-gray-900 text-white",
                Container {
                    div {
                        class: "mx-auto max-w-2xl text-center",
                        div {
                            class: "mb-6 flex items-center justify-center",
                            div { class: "bg-gray-600 h-px flex-1" }
                            span { class: "text-gray-400 px-4 text-sm font-semibold uppercase tracking-wider", "STAY TUNED" }
                            div { class: "bg-gray-600 h-px flex-1" }
                        }
                        h3 {
                            class: "h3 mb-8",
                            "Subscribe to our newsletter and never miss our latest news, offers and discounts."
                        }
                        form {
                            class: "mx-auto flex max-w-lg flex-col gap-4 sm:flex-row",
                            input { r#type: "text", name: "first_name", placeholder: "First Name", class: "newsletter-input" }
                            input { r#type: "text", name: "last_name", placeholder: "Last Name", class: "newsletter-input" }
                            input { r#type: "email", name: "email", placeholder: "email@email.com", class: "newsletter-input" }
                            button {
                                r#type: "submit",
                                class: "bg-white text-gray-900 hover:bg-gray-100 rounded px-6 py-3 font-semibold transition-colors duration-200",
                                "Subscribe"
                            }
                        }
                    }
                }
            }

            Footer { locale }

            RevealSystem {}
        }
    }
}

/// One alternating image/text feature row
#[component]
fn FeatureRow(index: usize) -> Element {
    let Some(feature) = FEATURES.get(index) else {
        return rsx! {};
    };
    let (text_class, image_class) = if feature.text_first {
        ("fade-right order-2 lg:order-1", "fade-left order-1 lg:order-2")
    } else {
        ("fade-left", "fade-right")
    };

    rsx! {
        div {
            class: "mb-20 grid grid-cols-1 items-center gap-12 lg:grid-cols-2",
            if !feature.text_first {
                div {
                    class: image_class,
                    img { src: feature.image.src, alt: feature.image.alt, class: "h-auto w-full" }
                }
            }
            div {
                class: text_class,
                h3 {
                    class: "mb-4 text-5xl font-bold",
                    span { class: "gradient-text", "{feature.kicker}" }
                }
                h3 { class: "mb-6 text-5xl font-bold", "{feature.headline}" }
                p { class: "text-gray-600 text-xl leading-relaxed", "{feature.body}" }
            }
            if feature.text_first {
                div {
                    class: image_class,
                    img { src: feature.image.src, alt: feature.image.alt, class: "h-auto w-full" }
                }
            }
        }
    }
}

/// Collapsible FAQ entry
#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> Element {
    let mut is_open = use_signal(|| false);

    rsx! {
        div {
            class: "accordion-item",
            button {
                class: "accordion-trigger",
                aria_expanded: "{is_open}",
                onclick: move |_| is_open.toggle(),
                "{question}"
                span { if is_open() { "\u{2212}" } else { "+" } }
            }
            if is_open() {
                div { class: "accordion-content", "{answer}" }
            }
        }
    }
}

#[component]
fn Footer(locale: Locale) -> Element {
    rsx! {
        footer {
            class: "footer",
            Container {
                div {
                    class: "mb-8 grid grid-cols-1 gap-8 md:grid-cols-4",
                    div {
                        img { src: "/images/giyapay-white.png", alt: "GiyaPay", class: "mb-4" }
                        p {
                            class: "text-gray-400 text-sm",
                            "17th Floor, KMC, Skyrise 4B, Geonzon Street,"
                            br {}
                            "Cebu IT Park, Cebu City, 6000"
                        }
                    }
                    div {
                        h4 { class: "footer-title", "Menu" }
                        div {
                            class: "space-y-2",
                            Link { to: locale.home_path(), class: "footer-link", "Home" }
                            a { href: locale.anchor_path("contact"), class: "footer-link", "Contact" }
                            Link { to: locale.blog_path(), class: "footer-link", "Blog" }
                            a { href: locale.anchor_path("faq"), class: "footer-link", "FAQ" }
                        }
                    }
                    div {
                        h4 { class: "footer-title", "Follow Us" }
                        div {
                            class: "flex gap-4",
                            for (name, url) in SOCIAL_LINKS.iter().copied() {
                                a {
                                    key: "{name}",
                                    href: url,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "footer-link",
                                    "{name}"
                                }
                            }
                        }
                    }
                    div {
                        h4 { class: "footer-title", "Contact" }
                        a { href: "mailto:info@bims.tech", class: "footer-link", "info@bims.tech" }
                    }
                }
                p {
                    class: "text-gray-400 text-center text-sm",
                    "Copyright \u{00A9} 2021 GiyaPay is a product of BIMS Technologies, Inc."
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reveal::RevealIntent;

    #[test]
    fn test_feature_rows_alternate() {
        let layout: Vec<bool> = FEATURES.iter().map(|f| f.text_first).collect();
        assert_eq!(layout, vec![false, true, false]);
    }

    #[test]
    fn test_section_anchors_match_nav() {
        use crate::nav::{NavTarget, NAV_ITEMS};

        let anchors: Vec<&str> = NAV_ITEMS
            .iter()
            .filter_map(|item| match item.target {
                NavTarget::Section(anchor) => Some(anchor),
                _ => None,
            })
            .collect();
        assert_eq!(anchors, vec!["features", "pricing", "faq", "contact"]);
    }

    #[test]
    fn test_reveal_classes_are_known_intents() {
        for class in ["fade-in", "fade-left", "fade-right"] {
            assert!(class.parse::<RevealIntent>().is_ok());
        }
    }
}
