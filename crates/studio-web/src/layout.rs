//! Layout Shell

use chrono::{Datelike, Utc};
use leptos::prelude::*;

use studio_core::{StudioPage, Toast, ToastKind};

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="bg-gray-800 border-b border-gray-700 py-4">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between">
                    <div class="flex items-center space-x-3">
                        <div class="relative">
                            <div class="w-10 h-10 bg-gradient-to-r from-purple-600 to-pink-600 rounded-lg flex items-center justify-center">
                                <span class="text-white font-bold text-lg">"SKV"</span>
                            </div>
                            <div class="absolute -top-1 -right-1 w-3 h-3 bg-green-500 rounded-full"></div>
                        </div>
                        <div>
                            <h1 class="text-xl font-bold text-white">"SKV Global"</h1>
                            <p class="text-xs text-gray-400">"AI Video Generator"</p>
                        </div>
                    </div>

                    <nav class="hidden md:flex space-x-6">
                        <a href="#create" class="text-gray-300 hover:text-white transition-colors">"Create Video"</a>
                        <a href="#gallery" class="text-gray-300 hover:text-white transition-colors">"My Videos"</a>
                        <a href="#pricing" class="text-gray-300 hover:text-white transition-colors">"Pricing"</a>
                    </nav>

                    <div class="hidden sm:flex items-center space-x-2 bg-gradient-to-r from-purple-600/20 to-pink-600/20 px-3 py-1 rounded-full border border-purple-500/30">
                        <div class="w-2 h-2 bg-yellow-400 rounded-full"></div>
                        <span class="text-sm font-semibold text-purple-300">"Credits Available"</span>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-6">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row items-center justify-between">
                    <p class="text-gray-400 text-sm mb-4 md:mb-0">
                        {format!("© {year} SKV Global AI Video Generator. Professional AI Video Creation Platform.")}
                    </p>
                    <div class="flex space-x-6 text-gray-400 text-sm">
                        <span>"Powered by Advanced AI"</span>
                        <span>"•"</span>
                        <span>"Secure Payment Processing"</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}

const fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "border-green-500/50 bg-gray-800 text-green-300",
        ToastKind::Error => "border-red-500/50 bg-gray-800 text-red-300",
    }
}

/// Notification surface; click a toast to dismiss it
#[component]
pub fn Toaster() -> impl IntoView {
    let page = expect_context::<RwSignal<StudioPage>>();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80">
            <For
                each=move || page.with(|p| p.toasts.to_vec())
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = format!(
                        "toast toast-{} cursor-pointer rounded-lg border px-4 py-3 text-sm shadow-lg {}",
                        toast.kind.as_str(),
                        toast_class(toast.kind),
                    );
                    view! {
                        <div
                            class=class
                            role="status"
                            on:click=move |_| page.update(|p| { p.toasts.dismiss(id); })
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
