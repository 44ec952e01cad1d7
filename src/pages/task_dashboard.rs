//! Task Dashboard Page
//!
//! Protected task list with statistics, filters and the create/edit modal.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use reactive_stores::Store;
use task_client::filter::ALL;
use task_client::{apply_filter, Priority, Route, Status};

use crate::components::{Navigation, TaskCard, TaskForm, TaskStats};
use crate::context::{use_config, use_session, DashboardContext};
use crate::store::{DashboardState, DashboardStateStoreFields};

const SELECT_CLASS: &str = "px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500";

#[component]
pub fn TaskDashboard() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let store = Store::new(DashboardState::new());
    let (expired, set_expired) = signal(false);

    let dashboard = DashboardContext::new(store, use_config(), set_expired);
    provide_context(dashboard);

    // Guard, then the initial load
    Effect::new(move |_| {
        if expired.get() {
            log::warn!("[DASHBOARD] Session expired");
            session.clear();
            navigate(Route::Login.path(), Default::default());
        } else if session.require().is_none() {
            navigate(Route::Login.path(), Default::default());
        } else {
            dashboard.reload();
        }
    });

    let visible = Memo::new(move |_| {
        let filter = store.filter().get();
        store.tasks().with(|tasks| apply_filter(tasks, &filter))
    });
    let has_tasks = move || store.tasks().with(|tasks| !tasks.is_empty());

    let status_options = Status::ALL
        .into_iter()
        .map(|s| {
            let value = s.as_str().to_string();
            let label = s.label().to_string();
            view! {
                <option value=value selected=move || store.filter().with(|f| f.status.as_ref() == Some(&s))>
                    {label}
                </option>
            }
        })
        .collect_view();
    let priority_options = Priority::ALL
        .into_iter()
        .map(|p| {
            let value = p.as_str().to_string();
            let label = p.label().to_string();
            view! {
                <option value=value selected=move || store.filter().with(|f| f.priority.as_ref() == Some(&p))>
                    {label}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen bg-gray-50">
            <Navigation/>
            <main class="max-w-7xl mx-auto py-8 px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row md:items-center md:justify-between mb-8 gap-4">
                    <div>
                        <h1 class="text-3xl font-bold text-gray-900">"Minhas Tarefas"</h1>
                        <p class="text-gray-600 mt-1">"Organize e acompanhe suas atividades"</p>
                    </div>
                    <button
                        class="px-6 py-3 bg-gradient-to-r from-blue-500 to-indigo-600 text-white rounded-lg font-semibold hover:from-blue-600 hover:to-indigo-700 shadow-lg transform hover:scale-105 transition duration-300"
                        on:click=move |_| dashboard.open_form(None)
                    >
                        "+ Nova Tarefa"
                    </button>
                </div>

                <TaskStats stats=Signal::derive(move || store.stats().get())/>

                <div class="bg-white rounded-lg shadow-md p-4 mb-6 flex flex-col sm:flex-row gap-4">
                    <div class="flex items-center space-x-2">
                        <label class="text-sm font-medium text-gray-700">"Status:"</label>
                        <select
                            class=SELECT_CLASS
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                store.filter().update(|f| f.set_status_value(&value));
                            }
                        >
                            <option value=ALL selected=move || store.filter().with(|f| f.status_value() == ALL)>"Todos"</option>
                            {status_options}
                        </select>
                    </div>
                    <div class="flex items-center space-x-2">
                        <label class="text-sm font-medium text-gray-700">"Prioridade:"</label>
                        <select
                            class=SELECT_CLASS
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                store.filter().update(|f| f.set_priority_value(&value));
                            }
                        >
                            <option value=ALL selected=move || store.filter().with(|f| f.priority_value() == ALL)>"Todas"</option>
                            {priority_options}
                        </select>
                    </div>
                </div>

                <Show
                    when=move || !store.loading().get()
                    fallback=|| view! {
                        <div class="flex justify-center py-12">
                            <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500"></div>
                        </div>
                    }
                >
                    <Show
                        when=move || visible.with(|v| !v.is_empty())
                        fallback=move || view! {
                            <div class="text-center py-12 bg-white rounded-lg shadow-md">
                                <h3 class="text-lg font-medium text-gray-900 mb-2">"Nenhuma tarefa encontrada"</h3>
                                <p class="text-gray-500">
                                    {move || if has_tasks() {
                                        "Tente ajustar os filtros ou criar uma nova tarefa."
                                    } else {
                                        "Crie sua primeira tarefa para começar!"
                                    }}
                                </p>
                            </div>
                        }
                    >
                        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                            <For
                                each=move || visible.get()
                                key=|task| task.clone()
                                children=|task| view! { <TaskCard task=task/> }
                            />
                        </div>
                    </Show>
                </Show>
            </main>

            {move || store.form().get().map(|editing| view! { <TaskForm editing=editing/> })}
        </div>
    }
}
