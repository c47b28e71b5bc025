use leptos::{html, prelude::*};

use super::cards::{CardList, SectionHeading, TechTag};
use crate::content::{jobs, Job};
use crate::reveal::use_reveal;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    let render_func = move |(index, job): (usize, Job)| {
        // cards alternate sides of the timeline on wide screens
        let (row, pad) = if index % 2 == 0 {
            ("md:flex-row", "md:pr-8")
        } else {
            ("md:flex-row-reverse", "md:pl-8")
        };
        view! {
            <div class=format!("relative flex items-center mb-12 {row}")>
                // timeline dot
                <div class="absolute left-2 sm:left-6 md:left-1/2 md:-translate-x-1/2 w-4 h-4 bg-blue-600 rounded-full border-4 border-white dark:border-gray-900 z-10"></div>

                <div class=format!("w-full md:w-5/12 ml-10 sm:ml-16 md:ml-0 {pad}")>
                    <div class="bg-white/70 dark:bg-gray-800/70 backdrop-blur-sm rounded-xl p-4 sm:p-6 shadow-lg hover:shadow-xl hover:-translate-y-1 transition-all duration-300 border border-white/20 dark:border-gray-700/20">
                        <h3 class="text-lg sm:text-xl font-bold text-gray-800 dark:text-white mb-2">
                            {job.title}
                        </h3>
                        <h4 class="text-base sm:text-lg font-semibold text-blue-600 dark:text-blue-400 mb-2">
                            {job.company}
                        </h4>

                        <div class="flex flex-wrap gap-2 sm:gap-4 mb-3 sm:mb-4 text-xs sm:text-sm text-gray-600 dark:text-gray-400">
                            <span>{job.period}</span>
                            <span>{job.location}</span>
                        </div>

                        <ul class="list-disc list-inside space-y-1.5 sm:space-y-2 text-sm sm:text-base text-gray-600 dark:text-gray-300 mb-3 sm:mb-4">
                            {job
                                .highlights
                                .iter()
                                .map(|point| view! { <li>{*point}</li> })
                                .collect_view()}
                        </ul>

                        <div class="flex flex-wrap gap-2">
                            {job
                                .technologies
                                .iter()
                                .map(|tech| view! { <TechTag name=*tech /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <section
            node_ref=section_ref
            id="experience"
            class="py-12 sm:py-16 md:py-20 px-4 sm:px-6 bg-gray-50 dark:bg-gray-900/50"
        >
            <div class="container mx-auto max-w-5xl">
                <SectionHeading revealed title="Work Experience" />

                <div class="relative">
                    // timeline line
                    <div class="absolute left-4 sm:left-8 md:left-1/2 md:-translate-x-1/2 h-full w-0.5 bg-gradient-to-b from-blue-600 to-purple-600"></div>

                    <CardList
                        items={jobs().into_iter().enumerate().collect::<Vec<_>>()}
                        revealed
                        render_func
                        class=""
                    />
                </div>
            </div>
        </section>
    }
}
