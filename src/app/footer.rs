use leptos::prelude::*;

use crate::content::{social_links, OWNER_EMAIL, SECTION_LINKS, SITE_OWNER};

// stamped by build.rs
const BUILD_TIME: &str = env!("BUILD_TIME");

fn build_year() -> &'static str {
    &BUILD_TIME[..4]
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white/80 dark:bg-gray-900/80 backdrop-blur-sm border-t border-white/20 dark:border-gray-700/20">
            <div class="container mx-auto px-6 py-12">
                <div class="grid md:grid-cols-3 gap-8 mb-8">
                    <div>
                        <h3 class="text-2xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent mb-4">
                            {SITE_OWNER}
                        </h3>
                        <p class="text-gray-600 dark:text-gray-300 leading-relaxed">
                            "MERN Stack Developer passionate about creating innovative web solutions that make a difference."
                        </p>
                    </div>

                    <div>
                        <h4 class="text-lg font-semibold text-gray-800 dark:text-white mb-4">
                            "Quick Links"
                        </h4>
                        <nav class="space-y-2">
                            {SECTION_LINKS
                                .iter()
                                .map(|(label, href)| {
                                    view! {
                                        <a
                                            href=*href
                                            class="block text-gray-600 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200"
                                        >
                                            {*label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </nav>
                    </div>

                    <div>
                        <h4 class="text-lg font-semibold text-gray-800 dark:text-white mb-4">
                            "Let's Connect"
                        </h4>
                        <div class="space-y-3">
                            <div class="flex items-center gap-2 text-gray-600 dark:text-gray-300">
                                <i class="extra-email"></i>
                                {OWNER_EMAIL}
                            </div>
                            <div class="flex gap-4 mt-4">
                                {social_links()
                                    .into_iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=link.label
                                                class="p-2 bg-gray-100 dark:bg-gray-800 rounded-lg text-gray-600 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400 hover:bg-blue-50 dark:hover:bg-blue-900/20 transition-all duration-200"
                                            >
                                                <i class=link.icon></i>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>

                <div class="flex flex-col md:flex-row items-center justify-between pt-8 border-t border-gray-200 dark:border-gray-700">
                    <div class="flex items-center gap-2 text-gray-600 dark:text-gray-300 mb-4 md:mb-0">
                        <span>"Made with"</span>
                        <span class="text-red-500 animate-pulse">"♥"</span>
                        <span>{format!("by {SITE_OWNER} © {}", build_year())}</span>
                    </div>

                    <button
                        on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
                        aria-label="Back to top"
                        class="p-3 bg-blue-600 text-white rounded-full shadow-lg hover:shadow-xl hover:-translate-y-0.5 transition-all duration-300"
                    >
                        "↑"
                    </button>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_year_is_four_digits() {
        let year = build_year();
        assert_eq!(year.len(), 4);
        assert!(year.chars().all(|c| c.is_ascii_digit()));
    }
}
