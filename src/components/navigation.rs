//! Navigation Component
//!
//! Top bar for the protected pages: brand, page links, user badge, logout.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};
use task_client::derive::user_initial;
use task_client::Route;

use crate::context::use_session;

const NAV_ITEMS: [(Route, &str); 2] = [(Route::Tasks, "Tarefas"), (Route::Users, "Usuários")];

#[component]
pub fn Navigation() -> impl IntoView {
    let session = use_session();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let (menu_open, set_menu_open) = signal(false);

    let is_active = move |route: Route| pathname.with(|p| p == route.path());
    let username = move || session.user().map(|u| u.username);

    let logout = {
        let navigate = navigate.clone();
        move |_: leptos::ev::MouseEvent| {
            log::info!("[NAV] Logging out");
            session.clear();
            navigate(Route::Login.path(), Default::default());
        }
    };
    let logout_mobile = logout.clone();
    let mobile_menu_class = move || {
        if menu_open.get() {
            "md:hidden border-t border-gray-200 px-2 pt-2 pb-3 space-y-1"
        } else {
            "hidden"
        }
    };

    let desktop_links = NAV_ITEMS
        .into_iter()
        .map(|(route, label)| {
            let class = move || {
                if is_active(route) {
                    "px-3 py-2 rounded-md text-sm font-medium bg-blue-100 text-blue-700"
                } else {
                    "px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                }
            };
            view! { <A href=route.path() attr:class=class>{label}</A> }
        })
        .collect_view();

    let mobile_links = NAV_ITEMS
        .into_iter()
        .map(|(route, label)| {
            let class = move || {
                if is_active(route) {
                    "block px-3 py-2 rounded-md text-base font-medium bg-blue-100 text-blue-700"
                } else {
                    "block px-3 py-2 rounded-md text-base font-medium text-gray-600 hover:bg-gray-100"
                }
            };
            view! {
                <A href=route.path() attr:class=class on:click=move |_| set_menu_open.set(false)>
                    {label}
                </A>
            }
        })
        .collect_view();

    view! {
        <nav class="bg-white shadow-lg border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <button
                            class="flex items-center space-x-2 text-xl font-bold text-gray-900 hover:text-blue-600 transition-colors"
                            on:click=move |_| navigate(Route::Tasks.path(), Default::default())
                        >
                            <span>"TaskManager"</span>
                        </button>
                        <div class="hidden md:ml-8 md:flex md:space-x-4">{desktop_links}</div>
                    </div>

                    <div class="hidden md:flex md:items-center md:space-x-4">
                        {move || username().map(|name| {
                            let initial = user_initial(&name).unwrap_or_default();
                            view! {
                                <div class="flex items-center space-x-3">
                                    <div class="w-8 h-8 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full flex items-center justify-center">
                                        <span class="text-white text-sm font-medium">{initial}</span>
                                    </div>
                                    <span class="text-sm font-medium text-gray-700">{format!("Olá, {}", name)}</span>
                                </div>
                            }
                        })}
                        <button
                            class="px-4 py-2 text-sm font-medium text-red-600 hover:text-red-800 hover:bg-red-50 rounded-md transition-colors"
                            on:click=logout
                        >
                            "Sair"
                        </button>
                    </div>

                    <div class="md:hidden flex items-center">
                        <button
                            class="p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"></path>
                            </svg>
                        </button>
                    </div>
                </div>
            </div>

            <div class=mobile_menu_class>
                {mobile_links}
                <button
                    class="block w-full text-left px-3 py-2 rounded-md text-base font-medium text-red-600 hover:bg-red-50"
                    on:click=logout_mobile
                >
                    "Sair"
                </button>
            </div>
        </nav>
    }
}
