use leptos::prelude::*;

use crate::content::{social_links, HERO_TAGLINE, HERO_TITLES, RESUME_PATH, SITE_OWNER};

/// How long each hero role title stays on screen.
const TITLE_ROTATE_MS: u64 = 4000;
/// How long the typing treatment runs after a title change.
const TYPING_MS: f64 = 1500.0;

#[component]
pub fn HomeSection() -> impl IntoView {
    let (title_index, set_title_index) = signal(0usize);
    let (is_typing, set_is_typing) = signal(true);

    #[cfg(feature = "hydrate")]
    {
        use leptos_use::{use_interval_fn, use_timeout_fn, UseTimeoutFnReturn};

        let UseTimeoutFnReturn { start: settle, .. } =
            use_timeout_fn(move |_: ()| set_is_typing.set(false), TYPING_MS);
        // initial typing animation settles shortly after load
        settle(());

        let rotate_settle = settle.clone();
        let _ = use_interval_fn(
            move || {
                set_is_typing.set(true);
                set_title_index.update(|index| *index = (*index + 1) % HERO_TITLES.len());
                rotate_settle(());
            },
            TITLE_ROTATE_MS,
        );
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (set_title_index, set_is_typing);

    view! {
        <section
            id="home"
            class="relative min-h-screen flex items-center justify-center overflow-hidden py-10 pt-24 md:pt-16 px-4 sm:px-6"
        >
            // animated background blobs
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute -top-40 -right-40 w-80 h-80 bg-purple-300 rounded-full mix-blend-multiply filter blur-xl opacity-70 animate-blob"></div>
                <div class="absolute -bottom-40 -left-40 w-80 h-80 bg-yellow-300 rounded-full mix-blend-multiply filter blur-xl opacity-70 animate-blob animation-delay-2000"></div>
                <div class="absolute top-40 left-40 w-80 h-80 bg-pink-300 rounded-full mix-blend-multiply filter blur-xl opacity-70 animate-blob animation-delay-4000"></div>
            </div>

            <div class="relative z-10 text-center max-w-4xl mx-auto w-full animate-fade-up">
                <h1 class="text-4xl sm:text-5xl md:text-7xl font-bold mb-4 sm:mb-6">
                    <span class="block text-gray-800 dark:text-white">"Hi, I'm"</span>
                    <span class="block bg-gradient-to-r from-blue-600 via-purple-600 to-blue-800 bg-clip-text text-transparent">
                        {SITE_OWNER}
                    </span>
                </h1>

                <div class="h-10 flex justify-center mb-3 sm:mb-4">
                    <p class=move || {
                        format!(
                            "text-lg sm:text-xl md:text-2xl font-semibold hero-title {}",
                            if is_typing.get() { "hero-title-typing" } else { "" },
                        )
                    }>{move || HERO_TITLES[title_index.get()]}</p>
                </div>

                <p class="text-base sm:text-lg md:text-xl text-gray-500 dark:text-gray-400 mb-6 sm:mb-8 max-w-2xl mx-auto">
                    {HERO_TAGLINE}
                </p>

                <div class="flex flex-col sm:flex-row gap-3 sm:gap-4 justify-center items-center mb-8 sm:mb-12">
                    <a
                        href=RESUME_PATH
                        download="sakshi_jha.pdf"
                        class="flex items-center gap-2 bg-gradient-to-r from-blue-600 to-purple-600 text-white px-6 sm:px-8 py-2.5 sm:py-3 rounded-full shadow-lg hover:shadow-xl transition-all duration-300 w-full sm:w-auto justify-center text-sm sm:text-base"
                    >
                        <i class="extra-download"></i>
                        "Download Resume"
                    </a>
                    <a
                        href="#contact"
                        class="flex items-center gap-2 border-2 border-blue-600 text-blue-600 dark:text-blue-400 px-6 sm:px-8 py-2.5 sm:py-3 rounded-full hover:bg-blue-600 hover:text-white dark:hover:bg-blue-400 dark:hover:text-gray-900 transition-all duration-300 w-full sm:w-auto justify-center text-sm sm:text-base"
                    >
                        <i class="extra-email"></i>
                        "Contact Me"
                    </a>
                </div>

                <div class="flex justify-center gap-4 sm:gap-6 mb-8 sm:mb-12">
                    {social_links()
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.label
                                    class="p-3 bg-white/20 dark:bg-gray-800/20 backdrop-blur-sm rounded-full border border-white/30 dark:border-gray-700/30 hover:bg-white/30 dark:hover:bg-gray-700/30 transition-all duration-300 text-2xl text-gray-700 dark:text-gray-300"
                                >
                                    <i class=link.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                // scroll indicator, hidden on mobile
                <div class="absolute bottom-8 left-1/2 -translate-x-1/2 hidden sm:block animate-bounce text-gray-500 dark:text-gray-400">
                    "↓"
                </div>
            </div>
        </section>
    }
}
