//! Landing page: hero, stats, features, call to action and footer.

use dioxus::prelude::*;

use crate::routes::AppPath;

struct HomeStat {
    number: &'static str,
    label: &'static str,
    icon: &'static str,
}

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const STATS: [HomeStat; 4] = [
    HomeStat { number: "15,000+", label: "Total Donors", icon: "👥" },
    HomeStat { number: "45,000+", label: "Lives Saved", icon: "❤️" },
    HomeStat { number: "120+", label: "Blood Drives", icon: "🏥" },
    HomeStat { number: "98%", label: "Success Rate", icon: "📈" },
];

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🩸",
        title: "Easy Blood Donation",
        description: "Simple and quick blood donation process with professional medical staff.",
    },
    Feature {
        icon: "🔍",
        title: "Find Blood Quickly",
        description: "Locate blood donors and blood banks in your area instantly.",
    },
    Feature {
        icon: "📱",
        title: "Real-time Updates",
        description: "Get notifications about blood requests and donation schedules.",
    },
    Feature {
        icon: "🛡️",
        title: "Safe & Secure",
        description: "Your personal information is protected with industry-standard security.",
    },
];

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div {
            class: "home-page",
            section {
                class: "hero-section",
                div {
                    class: "container",
                    div {
                        class: "hero-content",
                        div {
                            class: "hero-text",
                            h1 {
                                class: "hero-title",
                                "Save Lives Through"
                                span { class: "hero-title-highlight", " Blood Donation" }
                            }
                            p {
                                class: "hero-description",
                                "Join thousands of donors who are making a difference every day. "
                                "Your blood donation can save up to 3 lives. Start your journey to become a lifesaver today."
                            }
                            div {
                                class: "hero-buttons",
                                Link { to: AppPath::Register.as_str(), class: "btn btn-primary btn-large", "Become a Donor" }
                                Link { to: AppPath::RequestBlood.as_str(), class: "btn btn-secondary btn-large", "Request Blood" }
                            }
                        }
                        div {
                            class: "hero-image",
                            div {
                                class: "hero-illustration",
                                div { class: "blood-drop", "🩸" }
                                div { class: "heart-beat", "❤️" }
                                div { class: "medical-cross", "🏥" }
                            }
                        }
                    }
                }
            }

            section {
                class: "stats-section",
                div {
                    class: "container",
                    div {
                        class: "stats-grid",
                        for stat in STATS.iter() {
                            div {
                                key: "{stat.label}",
                                class: "stat-card card",
                                div { class: "stat-icon", "{stat.icon}" }
                                div { class: "stat-number", "{stat.number}" }
                                div { class: "stat-label", "{stat.label}" }
                            }
                        }
                    }
                }
            }

            section {
                class: "features-section",
                div {
                    class: "container",
                    div {
                        class: "section-header",
                        h2 { class: "section-title", "Why Choose BloodDonate?" }
                        p { class: "section-description", "We make blood donation and requests simple, safe, and efficient" }
                    }
                    div {
                        class: "features-grid",
                        for feature in FEATURES.iter() {
                            div {
                                key: "{feature.title}",
                                class: "feature-card card",
                                div { class: "feature-icon", "{feature.icon}" }
                                h3 { class: "feature-title", "{feature.title}" }
                                p { class: "feature-description", "{feature.description}" }
                            }
                        }
                    }
                }
            }

            section {
                class: "cta-section",
                div {
                    class: "container",
                    div {
                        class: "cta-content",
                        h2 { class: "cta-title", "Ready to Make a Difference?" }
                        p { class: "cta-description", "Every drop counts. Join our community of donors and help save lives today." }
                        div {
                            class: "cta-buttons",
                            Link { to: "/access/donor", class: "btn btn-primary btn-large", "Start Donating" }
                            Link { to: "/access/recipient", class: "btn btn-secondary btn-large", "Need Blood?" }
                        }
                    }
                }
            }

            footer {
                class: "home-footer",
                div {
                    class: "container",
                    div {
                        class: "footer-content",
                        div {
                            class: "footer-brand",
                            div {
                                class: "brand-logo",
                                span { class: "heart-icon", "❤️" }
                                span { class: "brand-text", "BloodDonate" }
                            }
                            p { class: "footer-description", "Connecting donors with those in need, one drop at a time." }
                        }
                        div {
                            class: "footer-links",
                            div {
                                class: "footer-section",
                                h4 { "Quick Links" }
                                Link { to: AppPath::Home.as_str(), "Home" }
                                Link { to: AppPath::RequestBlood.as_str(), "Request Blood" }
                                Link { to: AppPath::Register.as_str(), "Become a Donor" }
                                Link { to: AppPath::Login.as_str(), "Login" }
                            }
                            div {
                                class: "footer-section",
                                h4 { "Support" }
                                a { href: "#help", "Help Center" }
                                a { href: "#contact", "Contact Us" }
                                a { href: "#privacy", "Privacy Policy" }
                                a { href: "#terms", "Terms of Service" }
                            }
                        }
                    }
                    div {
                        class: "footer-bottom",
                        p { "© 2024 BloodDonate. All rights reserved." }
                    }
                }
            }
        }
    }
}
