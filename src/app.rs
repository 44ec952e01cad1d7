//! Task Manager App
//!
//! Root component: shared context and the client-side router.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use task_client::ClientConfig;

use crate::context::SessionContext;
use crate::pages::{Login, Register, TaskDashboard, UserList};

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-50">
            <h1 class="text-6xl font-bold text-gray-300">"404"</h1>
            <p class="text-gray-600 mt-4">"Página não encontrada"</p>
            <a href="/login" class="mt-6 text-blue-600 hover:text-blue-800 font-semibold">"Voltar ao login"</a>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Base URL is fixed at build time: TASK_API_BASE_URL=... trunk build
    let config = ClientConfig::from_base_url(option_env!("TASK_API_BASE_URL"));
    log::info!("[APP] Using API at {}", config.api_base_url);

    provide_context(config);
    provide_context(SessionContext::new());

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=|| view! { <Redirect path="/login"/> }/>
                <Route path=path!("/register") view=Register/>
                <Route path=path!("/login") view=Login/>
                <Route path=path!("/users") view=UserList/>
                <Route path=path!("/tasks") view=TaskDashboard/>
            </Routes>
        </Router>
    }
}
