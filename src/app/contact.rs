use leptos::{html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::cards::{reveal_class, CardList, SectionHeading};
use crate::contact::{ContactForm, FormError, SUBMIT_DELAY_MS};
use crate::content::{contact_methods, social_links, ContactMethod};
use crate::reveal::use_reveal;

#[component]
pub fn ContactSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    let render_func = move |method: ContactMethod| {
        let external = method.href.starts_with("http");
        view! {
            <a
                href=method.href
                target=if external { "_blank" } else { "_self" }
                rel=external.then_some("noopener noreferrer")
                class="flex items-center gap-4 p-4 bg-white/70 dark:bg-gray-800/70 backdrop-blur-sm rounded-lg border border-white/20 dark:border-gray-700/20 hover:shadow-lg transition-all duration-300 group"
            >
                <div class="p-3 bg-blue-100 dark:bg-blue-900/30 rounded-lg text-blue-600 group-hover:bg-blue-600 group-hover:text-white transition-all duration-300">
                    <i class=method.icon></i>
                </div>
                <div>
                    <h4 class="font-semibold text-gray-800 dark:text-white">{method.label}</h4>
                    <p class="text-gray-600 dark:text-gray-300">{method.value}</p>
                </div>
            </a>
        }
        .into_any()
    };

    view! {
        <section node_ref=section_ref id="contact" class="py-20 px-6">
            <div class="container mx-auto max-w-6xl">
                <SectionHeading
                    revealed
                    title="Let's Work Together"
                    blurb="Ready to bring your ideas to life? Let's discuss your next project!"
                />

                <div class="grid lg:grid-cols-2 gap-12">
                    <div class=move || format!("space-y-8 {}", reveal_class(revealed.get()))>
                        <h3 class="text-2xl font-bold text-gray-800 dark:text-white mb-6">
                            "Get in Touch"
                        </h3>

                        <CardList
                            items=contact_methods()
                            revealed
                            render_func
                            class="space-y-4"
                        />

                        <div>
                            <h4 class="text-lg font-semibold text-gray-800 dark:text-white mb-4">
                                "Follow Me"
                            </h4>
                            <div class="flex gap-4">
                                {social_links()
                                    .into_iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=link.label
                                                class="p-3 bg-white/70 dark:bg-gray-800/70 backdrop-blur-sm rounded-lg border border-white/20 dark:border-gray-700/20 text-gray-600 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400 transition-all duration-300 text-xl"
                                            >
                                                <i class=link.icon></i>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class=move || reveal_class(revealed.get()) style="transition-delay: 200ms">
                        <MessageForm />
                    </div>
                </div>
            </div>
        </section>
    }
}

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-white/70 dark:bg-gray-800/70 backdrop-blur-sm border border-white/20 dark:border-gray-700/20 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all duration-300 text-gray-800 dark:text-white placeholder-gray-500 dark:placeholder-gray-400";

/// The simulated contact form: a fixed delay stands in for the network
/// round-trip, then the fields clear and the browser alert acknowledges.
#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let UseTimeoutFnReturn { start: complete, .. } = use_timeout_fn(
        move |_: ()| {
            form.update(|form| form.finish_submit());
            let _ = window().alert_with_message("Message sent successfully!");
        },
        SUBMIT_DELAY_MS,
    );

    let is_submitting = move || form.with(|form| form.is_submitting());

    view! {
        <form
            class="space-y-6"
            on:submit=move |ev| {
                ev.prevent_default();
                let accepted = form
                    .try_update(|form| form.begin_submit())
                    .unwrap_or(Err(FormError::AlreadySubmitting));
                match accepted {
                    Ok(()) => {
                        log::debug!("contact form submitting");
                        complete(());
                    }
                    Err(err) => log::debug!("contact form rejected: {err}"),
                }
            }
        >
            <div>
                <label
                    for="name"
                    class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2"
                >
                    "Your Name"
                </label>
                <input
                    type="text"
                    id="name"
                    name="name"
                    required
                    placeholder="Enter your full name"
                    class=INPUT_CLASS
                    prop:value=move || form.with(|form| form.name.clone())
                    on:input=move |ev| form.update(|form| form.name = event_target_value(&ev))
                />
            </div>

            <div>
                <label
                    for="email"
                    class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2"
                >
                    "Email Address"
                </label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    required
                    placeholder="your.email@example.com"
                    class=INPUT_CLASS
                    prop:value=move || form.with(|form| form.email.clone())
                    on:input=move |ev| form.update(|form| form.email = event_target_value(&ev))
                />
            </div>

            <div>
                <label
                    for="message"
                    class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2"
                >
                    "Message"
                </label>
                <textarea
                    id="message"
                    name="message"
                    required
                    rows="6"
                    placeholder="Tell me about your project..."
                    class=format!("{INPUT_CLASS} resize-none")
                    prop:value=move || form.with(|form| form.message.clone())
                    on:input=move |ev| form.update(|form| form.message = event_target_value(&ev))
                ></textarea>
            </div>

            <button
                type="submit"
                disabled=is_submitting
                class="w-full flex items-center justify-center gap-2 bg-gradient-to-r from-blue-600 to-purple-600 text-white py-3 px-6 rounded-lg font-medium shadow-lg hover:shadow-xl transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed"
            >
                {move || {
                    if is_submitting() {
                        view! {
                            <div class="w-5 h-5 border-2 border-white border-t-transparent rounded-full animate-spin"></div>
                            <span>"Sending..."</span>
                        }
                            .into_any()
                    } else {
                        view! {
                            <i class="extra-send"></i>
                            <span>"Send Message"</span>
                        }
                            .into_any()
                    }
                }}
            </button>
        </form>
    }
}
