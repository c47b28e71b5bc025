use leptos::prelude::*;

use crate::content::{SECTION_LINKS, SITE_OWNER};
use crate::theme::use_theme;

#[component]
pub fn Header() -> impl IntoView {
    let theme = use_theme();
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="fixed top-0 inset-x-0 z-50 bg-white/80 dark:bg-gray-900/80 backdrop-blur-sm border-b border-white/20 dark:border-gray-700/20">
            <div class="container mx-auto px-4 sm:px-6 py-4">
                <div class="flex items-center justify-between">
                    <a
                        href="#home"
                        class="text-xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent"
                    >
                        {SITE_OWNER}
                    </a>

                    <nav class="hidden md:flex items-center gap-6">
                        {SECTION_LINKS
                            .iter()
                            .map(|(label, href)| {
                                view! {
                                    <a
                                        href=*href
                                        class="text-gray-600 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200"
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="flex items-center gap-2">
                        <button
                            on:click=move |_| theme.toggle()
                            aria-label="Toggle color theme"
                            class="p-2 rounded-lg bg-gray-100 dark:bg-gray-800 hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors duration-200"
                        >
                            {move || if theme.is_dark() { "☀️" } else { "🌙" }}
                        </button>
                        <button
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            aria-label="Toggle navigation menu"
                            class="md:hidden p-2 rounded-lg bg-gray-100 dark:bg-gray-800 hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors duration-200"
                        >
                            "☰"
                        </button>
                    </div>
                </div>

                {move || {
                    menu_open
                        .get()
                        .then(|| {
                            view! {
                                <nav class="md:hidden flex flex-col gap-2 mt-4 pb-2">
                                    {SECTION_LINKS
                                        .iter()
                                        .map(|(label, href)| {
                                            view! {
                                                <a
                                                    href=*href
                                                    on:click=move |_| set_menu_open.set(false)
                                                    class="py-2 text-gray-600 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200"
                                                >
                                                    {*label}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </nav>
                            }
                        })
                }}
            </div>
        </header>
    }
}
