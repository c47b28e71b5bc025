use leptos::{html, prelude::*};

use super::cards::{reveal_class, stagger_delay_ms, CardList, SectionHeading};
use crate::content::{skills, Skill, EXTRA_EXPERTISE};
use crate::reveal::use_reveal;

#[component]
pub fn SkillsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    let render_func = move |(index, skill): (usize, Skill)| {
        let delay = stagger_delay_ms(index);
        view! {
            <div class="group bg-white/70 dark:bg-gray-800/70 backdrop-blur-sm rounded-xl p-6 border border-white/20 dark:border-gray-700/20 shadow-lg hover:shadow-xl transition-all duration-300 h-full">
                <div class="text-center">
                    <i
                        class=format!(
                            "{} text-6xl transition-transform duration-300 group-hover:scale-110 inline-block mb-4",
                            skill.icon,
                        )
                        style=format!("color: {}", skill.color)
                    ></i>
                    <h3 class="font-semibold text-gray-800 dark:text-white mb-3">{skill.name}</h3>

                    // proficiency bar fills from zero once the section reveals
                    <div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2">
                        <div
                            class="h-2 bg-gradient-to-r from-blue-500 to-purple-500 rounded-full transition-all duration-1000"
                            style=move || {
                                let width = if revealed.get() { skill.level } else { 0 };
                                format!("width: {width}%; transition-delay: {delay}ms")
                            }
                        ></div>
                    </div>
                    <span class="text-sm text-gray-500 dark:text-gray-400 mt-1">
                        {format!("{}%", skill.level)}
                    </span>
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <section
            node_ref=section_ref
            id="skills"
            class="py-20 px-6 bg-white/50 dark:bg-gray-800/50"
        >
            <div class="container mx-auto max-w-6xl">
                <SectionHeading
                    revealed
                    title="Technical Skills"
                    blurb="Here are the technologies and tools I use to bring ideas to life"
                />

                <CardList
                    items={skills().into_iter().enumerate().collect::<Vec<_>>()}
                    revealed
                    render_func
                    class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-8"
                />

                <div
                    class=move || format!("mt-16 text-center {}", reveal_class(revealed.get()))
                    style=format!("transition-delay: {}ms", stagger_delay_ms(skills().len()))
                >
                    <h3 class="text-2xl font-bold text-gray-800 dark:text-white mb-6">
                        "Additional Expertise"
                    </h3>
                    <div class="flex flex-wrap justify-center gap-3">
                        {EXTRA_EXPERTISE
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="px-4 py-2 bg-gradient-to-r from-blue-100 to-purple-100 dark:from-gray-700 dark:to-gray-600 text-gray-700 dark:text-gray-300 rounded-full text-sm font-medium border border-blue-200 dark:border-gray-600 hover:shadow-md transition-all duration-200">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
