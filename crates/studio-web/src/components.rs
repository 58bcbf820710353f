//! UI Components

use leptos::prelude::*;

use studio_core::catalog::format_usd;
use studio_core::{CreditPackage, DurationOption, Feature, StudioPage};

/// Pricing card for one credit package
#[component]
pub fn PackageCard(package: CreditPackage) -> impl IntoView {
    let page = expect_context::<RwSignal<StudioPage>>();
    let tier = package.tier;
    let popular = package.popular;

    let card_class = if popular {
        "relative bg-gray-800 border border-purple-500 scale-105 rounded-xl p-6 transition-all duration-200"
    } else {
        "relative bg-gray-800 border border-gray-700 hover:border-purple-500/50 rounded-xl p-6 transition-all duration-200"
    };
    let button_class = if popular {
        "w-full py-2 rounded-lg bg-gradient-to-r from-purple-600 to-pink-600 hover:from-purple-700 hover:to-pink-700 text-white font-semibold"
    } else {
        "w-full py-2 rounded-lg bg-gray-700 hover:bg-gray-600 text-white font-semibold"
    };

    let on_select = move |_| {
        page.update(|p| {
            if let Err(e) = p.select_package(tier) {
                leptos::logging::warn!("Package selection failed: {e}");
            }
        });
    };

    view! {
        <div class=card_class>
            <Show when=move || popular>
                <div class="absolute -top-3 left-1/2 -translate-x-1/2">
                    <span class="bg-gradient-to-r from-purple-600 to-pink-600 text-white text-xs font-bold py-1 px-3 rounded-full">
                        "Most Popular"
                    </span>
                </div>
            </Show>

            <div class="text-center space-y-2 mb-4">
                <h3 class="text-white text-xl font-semibold">{package.name()}</h3>
                <div class="flex items-center justify-center gap-2">
                    <span class="text-3xl font-bold text-white">{format_usd(package.price)}</span>
                    {package.original_price.map(|original| view! {
                        <span class="text-lg text-gray-500 line-through">{format_usd(original)}</span>
                    })}
                </div>
                {package.discount_label().map(|label| view! {
                    <div class="text-green-400 text-sm font-semibold">{label}</div>
                })}
                <div class="text-purple-400 font-semibold">{format!("{} Credits", package.credits)}</div>
                <div class="text-gray-500 text-xs">{package.per_credit_label()}</div>
                {package.savings_label().map(|label| view! {
                    <div class="text-green-500/80 text-xs">{label}</div>
                })}
                <p class="text-gray-400 text-sm">{package.description.clone()}</p>
            </div>

            <ul class="space-y-2 mb-4">
                {package
                    .features
                    .iter()
                    .map(|feature| view! {
                        <li class="flex items-center text-sm text-gray-300">
                            <div class="w-2 h-2 bg-purple-500 rounded-full mr-3 flex-shrink-0"></div>
                            {feature.clone()}
                        </li>
                    })
                    .collect_view()}
            </ul>

            <button class=button_class on:click=on_select>
                "Get Started"
            </button>
        </div>
    }
}

/// Duration choices: label on the left, credit cost on the right
#[component]
pub fn DurationPicker(options: Vec<DurationOption>) -> impl IntoView {
    let page = expect_context::<RwSignal<StudioPage>>();
    let generating = move || page.with(|p| p.form.is_generating());

    view! {
        <div id="duration" role="radiogroup" aria-labelledby="duration-label" class="grid gap-2">
            {options
                .into_iter()
                .map(|option| {
                    let seconds = option.seconds;
                    let selected = move || page.with(|p| p.form.duration_secs() == seconds);
                    view! {
                        <button
                            type="button"
                            role="radio"
                            aria-checked=move || selected().to_string()
                            class=move || {
                                if selected() {
                                    "flex items-center justify-between w-full rounded-md border border-purple-500 bg-gray-700 text-white px-3 py-2 disabled:opacity-60"
                                } else {
                                    "flex items-center justify-between w-full rounded-md border border-gray-600 bg-gray-700 text-white px-3 py-2 hover:border-purple-500/50 disabled:opacity-60"
                                }
                            }
                            disabled=generating
                            on:click=move |_| {
                                page.update(|p| {
                                    if let Err(e) = p.form.select_duration(seconds) {
                                        leptos::logging::warn!("Duration not applied: {e}");
                                    }
                                });
                            }
                        >
                            <span>{option.label}</span>
                            <span class="ml-4 text-purple-400">{format!("{} credits", option.credits)}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Card in the features grid
#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    let tile_class = format!(
        "w-12 h-12 bg-gradient-to-r {} rounded-lg flex items-center justify-center mb-4",
        feature.gradient
    );

    view! {
        <div class="bg-gray-800 border border-gray-700 hover:border-purple-500/50 transition-colors rounded-xl p-6">
            <div class=tile_class>
                <div class="w-6 h-6 bg-white rounded"></div>
            </div>
            <h3 class="text-white text-lg font-semibold mb-2">{feature.title}</h3>
            <p class="text-gray-400">{feature.description}</p>
        </div>
    }
}
