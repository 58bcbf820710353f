//! Home Page

use leptos::prelude::*;

use studio_core::{GenerationSimulator, StudioConfig, StudioPage};

use crate::components::{DurationPicker, FeatureCard, PackageCard};
use crate::timer::BrowserPause;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="max-w-6xl mx-auto px-4 py-8 space-y-12">
            <Hero />
            <CreateVideo />
            <Pricing />
            <Features />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <header class="text-center space-y-6 py-12">
            <div class="inline-flex items-center px-6 py-3 bg-gradient-to-r from-purple-500/20 to-pink-500/20 rounded-full border border-purple-500/30">
                <div class="w-8 h-8 bg-gradient-to-r from-purple-600 to-pink-600 rounded-lg flex items-center justify-center mr-3">
                    <span class="text-white font-bold text-sm">"SKV"</span>
                </div>
                <span class="text-purple-300 font-semibold">"SKV Global AI Video Generator"</span>
            </div>

            <h1 class="text-5xl md:text-7xl font-bold bg-gradient-to-r from-white via-purple-200 to-pink-200 bg-clip-text text-transparent">
                "Create Stunning"
                <br />
                "AI Videos"
            </h1>

            <p class="text-xl md:text-2xl text-gray-300 max-w-3xl mx-auto leading-relaxed">
                "Professional AI-powered video generation platform. Transform your ideas into cinematic videos with our advanced credit-based system."
            </p>
        </header>
    }
}

const PROMPT_PLACEHOLDER: &str = "Describe your video in detail... For example: 'A cinematic shot of a sunrise over mountains, with golden light reflecting off a pristine lake. Camera slowly pans across the landscape as morning mist rolls over the water.'";

#[component]
fn CreateVideo() -> impl IntoView {
    let page = expect_context::<RwSignal<StudioPage>>();
    let delay = expect_context::<StudioConfig>().generation_delay();

    let generating = move || page.with(|p| p.form.is_generating());
    let credits = move || page.with(|p| p.form.credits_required());
    let ready = move || page.with(|p| p.form.meets_minimum());

    let generate = move |_| {
        let Some(ticket) = page.try_update(|p| p.submit().ok()).flatten() else {
            return;
        };

        leptos::task::spawn_local(async move {
            let simulator = GenerationSimulator::new(BrowserPause, delay);
            let outcome = simulator.run(&ticket).await;
            page.update(|p| p.complete(&ticket, &outcome));
        });
    };

    let durations = page.with_untracked(|p| p.catalog().durations.clone());

    view! {
        <section id="create" class="bg-gray-800 border border-gray-700 rounded-xl p-6 space-y-6">
            <div>
                <h2 class="text-2xl text-white font-semibold">"Create Your AI Video"</h2>
                <p class="text-gray-400">
                    "Generate professional videos using advanced AI models. Credits will be deducted based on video duration."
                </p>
            </div>

            <div class="space-y-2">
                <span id="duration-label" class="text-gray-300">"Video Duration"</span>
                <DurationPicker options=durations />
            </div>

            <div class="space-y-2">
                <label for="prompt" class="text-gray-300">"Video Description"</label>
                <textarea
                    id="prompt"
                    class="w-full min-h-[120px] rounded-md bg-gray-700 border border-gray-600 text-white placeholder:text-gray-500 resize-none p-3"
                    placeholder=PROMPT_PLACEHOLDER
                    prop:value=move || page.with(|p| p.form.prompt().to_string())
                    disabled=generating
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        page.update(|p| {
                            p.form.set_prompt(&text);
                        });
                    }
                />
                <div class="flex items-center justify-between text-sm">
                    <span class="text-gray-400">{move || page.with(|p| p.form.prompt_hint())}</span>
                    <span class=move || {
                        if page.with(|p| p.form.is_near_limit()) { "text-yellow-400" } else { "text-gray-400" }
                    }>
                        {move || page.with(|p| p.form.counter_label())}
                    </span>
                </div>
            </div>

            <div class="bg-purple-900/20 border border-purple-700/30 rounded-lg p-4 flex items-center justify-between">
                <div class="space-y-1">
                    <p class="text-purple-300 font-semibold">"Generation Cost"</p>
                    <p class="text-gray-400 text-sm">{move || page.with(|p| p.form.cost_summary())}</p>
                </div>
                <div class="text-right">
                    <div class="text-2xl font-bold text-purple-400">{credits}</div>
                    <div class="text-xs text-gray-400">"Credits"</div>
                </div>
            </div>

            <button
                class=move || {
                    if ready() {
                        "w-full rounded-lg font-semibold py-4 text-lg text-white bg-gradient-to-r from-purple-600 to-pink-600 hover:from-purple-700 hover:to-pink-700"
                    } else {
                        "w-full rounded-lg font-semibold py-4 text-lg text-white bg-gray-700 cursor-not-allowed"
                    }
                }
                disabled=move || !page.with(|p| p.form.can_submit())
                on:click=generate
            >
                <Show when=generating>
                    <span class="inline-block w-5 h-5 border-2 border-white border-t-transparent rounded-full animate-spin mr-2 align-middle"></span>
                </Show>
                {move || page.with(|p| p.form.submit_label())}
            </button>
        </section>
    }
}

#[component]
fn Pricing() -> impl IntoView {
    let page = expect_context::<RwSignal<StudioPage>>();
    let packages = page.with_untracked(|p| p.catalog().packages.clone());

    view! {
        <section id="pricing" class="space-y-8">
            <div class="text-center">
                <h2 class="text-3xl md:text-4xl font-bold text-white mb-4">"Choose Your Credit Package"</h2>
                <p class="text-gray-400 text-lg max-w-2xl mx-auto">
                    "Flexible pricing designed for creators, businesses, and enterprises. Start with any package and upgrade anytime."
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {packages
                    .into_iter()
                    .map(|package| view! { <PackageCard package=package /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    let page = expect_context::<RwSignal<StudioPage>>();
    let features = page.with_untracked(|p| p.catalog().features.clone());

    view! {
        <section class="grid grid-cols-1 md:grid-cols-3 gap-8">
            {features
                .into_iter()
                .map(|feature| view! { <FeatureCard feature=feature /> })
                .collect_view()}
        </section>
    }
}
