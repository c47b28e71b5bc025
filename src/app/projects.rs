use leptos::{html, prelude::*};

use super::cards::{CardList, SectionHeading, TechTag};
use crate::content::{projects, Project};
use crate::reveal::use_reveal;

fn overlay_link(href: &'static str, label: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            aria-label=label
            class="p-3 bg-white/90 dark:bg-gray-800/90 rounded-full text-gray-800 dark:text-white hover:bg-blue-600 hover:text-white transition-colors duration-200"
        >
            <i class=icon></i>
        </a>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    let render_func = move |project: Project| {
        view! {
            <div class="group relative bg-white/70 dark:bg-gray-800/70 backdrop-blur-sm rounded-xl overflow-hidden shadow-lg hover:shadow-2xl hover:-translate-y-2 transition-all duration-300 border border-white/20 dark:border-gray-700/20 h-full">
                <div class="relative overflow-hidden">
                    <img
                        src=project.image
                        alt=project.title
                        class="w-full h-48 object-cover transition-transform duration-300 group-hover:scale-110"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/50 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>

                    // hover overlay with quick links
                    <div class="absolute inset-0 flex items-center justify-center gap-4 opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                        {project.live_url.map(|url| overlay_link(url, "Live demo", "extra-link"))}
                        {project
                            .github_url
                            .map(|url| overlay_link(url, "Source code", "devicon-github-plain"))}
                    </div>
                </div>

                <div class="p-6">
                    <h3 class="text-xl font-bold text-gray-800 dark:text-white mb-3 group-hover:text-blue-600 dark:group-hover:text-blue-400 transition-colors duration-200">
                        {project.title}
                    </h3>
                    <p class="text-gray-600 dark:text-gray-300 mb-4 leading-relaxed">
                        {project.description}
                    </p>

                    <div class="flex flex-wrap gap-2 mb-4">
                        {project
                            .technologies
                            .iter()
                            .map(|tech| view! { <TechTag name=*tech /> })
                            .collect_view()}
                    </div>

                    <div class="flex gap-3">
                        {project
                            .live_url
                            .map(|url| {
                                view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center gap-1 text-blue-600 dark:text-blue-400 hover:text-blue-800 dark:hover:text-blue-300 transition-colors duration-200"
                                    >
                                        <i class="extra-link"></i>
                                        "Live Demo"
                                    </a>
                                }
                            })}
                        {project
                            .github_url
                            .map(|url| {
                                view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center gap-1 text-gray-600 dark:text-gray-400 hover:text-gray-800 dark:hover:text-gray-200 transition-colors duration-200"
                                    >
                                        <i class="devicon-github-plain"></i>
                                        "Code"
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <section node_ref=section_ref id="projects" class="py-20 px-6">
            <div class="container mx-auto max-w-7xl">
                <SectionHeading
                    revealed
                    title="Featured Projects"
                    blurb="A collection of projects that showcase my skills and passion for creating amazing web experiences"
                />

                <CardList
                    items=projects()
                    revealed
                    render_func
                    class="grid md:grid-cols-2 lg:grid-cols-3 gap-8"
                />
            </div>
        </section>
    }
}
