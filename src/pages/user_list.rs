//! Landing Page
//!
//! First protected page: welcome panel, link to the dashboard, logout.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use task_client::Route;

use crate::components::Navigation;
use crate::context::{use_config, use_session};

#[component]
pub fn UserList() -> impl IntoView {
    let config = use_config();
    let session = use_session();
    let navigate = use_navigate();
    let (logging_out, set_logging_out) = signal(false);
    let (signed_out, set_signed_out) = signal(false);

    Effect::new(move |_| {
        if signed_out.get() || session.require().is_none() {
            navigate(Route::Login.path(), Default::default());
        }
    });

    let on_logout = move |_| {
        set_logging_out.set(true);
        let delay = config.logout_delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            session.clear();
            set_signed_out.set(true);
        });
    };

    let greeting = move || {
        session
            .user()
            .map(|u| format!("Bem-vindo, {}!", u.username))
            .unwrap_or_else(|| "Bem-vindo!".to_string())
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <Navigation/>
            <main class="max-w-3xl mx-auto py-12 px-4">
                <div class="bg-white rounded-2xl shadow-xl p-8 text-center">
                    <h1 class="text-3xl font-bold text-gray-800 mb-4">{greeting}</h1>
                    <p class="text-gray-600 mb-8">"Você está autenticado. Gerencie suas tarefas no painel."</p>
                    <div class="flex flex-col sm:flex-row justify-center gap-4">
                        <A
                            href=Route::Tasks.path()
                            attr:class="px-6 py-3 bg-blue-600 text-white rounded-lg font-semibold hover:bg-blue-700 transition-colors"
                        >
                            "Ir para Tarefas"
                        </A>
                        <button
                            class="px-6 py-3 bg-red-500 text-white rounded-lg font-semibold hover:bg-red-600 disabled:opacity-50 transition-colors flex items-center justify-center"
                            disabled=move || logging_out.get()
                            on:click=on_logout
                        >
                            <Show when=move || logging_out.get() fallback=|| "Sair">
                                <span class="inline-block animate-spin rounded-full h-4 w-4 border-b-2 border-white mr-2"></span>
                                "Saindo"
                            </Show>
                        </button>
                    </div>
                </div>
            </main>
        </div>
    }
}
