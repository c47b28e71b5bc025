use leptos::prelude::*;

/// Delay increment between successive cards in a revealed section.
const STAGGER_STEP_MS: u32 = 100;

pub fn stagger_delay_ms(index: usize) -> u32 {
    index as u32 * STAGGER_STEP_MS
}

/// Presentation classes for an element that participates in a section's
/// reveal cascade.
pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "reveal-item reveal-visible"
    } else {
        "reveal-item"
    }
}

/// Generic list→cards renderer shared by every section: lays `items` out in
/// the given container classes and wraps each rendered card in the reveal
/// presentation state, staggered by index.
#[component]
pub fn CardList<T, F>(
    items: Vec<T>,
    revealed: Signal<bool>,
    render_func: F,
    #[prop(into)] class: String,
) -> impl IntoView
where
    T: 'static,
    F: Fn(T) -> AnyView + 'static,
{
    view! {
        <div class=class>
            {items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    let delay = stagger_delay_ms(index);
                    view! {
                        <div
                            class=move || reveal_class(revealed.get())
                            style=format!("transition-delay: {delay}ms")
                        >
                            {render_func(item)}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Shared section heading: title, gradient rule, optional blurb.
#[component]
pub fn SectionHeading(
    revealed: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(optional, into)] blurb: String,
) -> impl IntoView {
    let blurb = (!blurb.is_empty()).then_some(blurb);
    view! {
        <div class=move || {
            format!("text-center mb-16 {}", reveal_class(revealed.get()))
        }>
            <h2 class="text-4xl md:text-5xl font-bold text-gray-800 dark:text-white mb-4">
                {title}
            </h2>
            <div class="w-24 h-1 bg-gradient-to-r from-blue-600 to-purple-600 mx-auto rounded-full"></div>
            {blurb
                .map(|blurb| {
                    view! {
                        <p class="text-lg text-gray-600 dark:text-gray-300 mt-6 max-w-2xl mx-auto">
                            {blurb}
                        </p>
                    }
                })}
        </div>
    }
}

/// Pill-shaped technology tag used on experience and project cards.
#[component]
pub fn TechTag(#[prop(into)] name: String) -> impl IntoView {
    view! {
        <span class="px-3 py-1 bg-blue-100 dark:bg-blue-900/30 text-blue-800 dark:text-blue-300 rounded-full text-xs font-medium">
            {name}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_is_a_fixed_per_index_increment() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), STAGGER_STEP_MS);
        assert_eq!(stagger_delay_ms(5), 5 * STAGGER_STEP_MS);
    }

    #[test]
    fn reveal_class_latches_visible_styling() {
        assert_eq!(reveal_class(false), "reveal-item");
        assert_eq!(reveal_class(true), "reveal-item reveal-visible");
    }
}
