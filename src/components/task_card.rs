//! Task Card Component
//!
//! One task in the dashboard list: badges, due-date warnings, dates and actions.

use chrono::{Local, Utc};
use leptos::prelude::*;
use task_client::derive::{card_accent_class, format_timestamp, is_near_due, is_overdue, needs_expand_toggle};
use task_client::{Status, Task};

use super::DeleteConfirmButton;
use crate::context::use_dashboard;

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let dashboard = use_dashboard();
    let (expanded, set_expanded) = signal(false);

    let id = task.id;
    let overdue = is_overdue(&task);
    let near_due = is_near_due(&task, Utc::now());
    let completed = task.status == Status::Completed;

    let card_class = format!(
        "bg-white rounded-lg shadow-md hover:shadow-lg transition-all duration-300 border-l-4 {}{}",
        card_accent_class(&task),
        if overdue { " bg-red-50" } else { "" }
    );
    let title_class = if completed {
        "text-lg font-semibold text-gray-900 line-through text-gray-500"
    } else {
        "text-lg font-semibold text-gray-900"
    };

    let description = task.description.clone().filter(|d| !d.is_empty()).map(|desc| {
        let toggle = needs_expand_toggle(&desc);
        let text_class = move || {
            if expanded.get() || !toggle {
                "text-gray-600 text-sm"
            } else {
                "text-gray-600 text-sm line-clamp-2"
            }
        };
        view! {
            <div class="mb-4">
                <p class=text_class>{desc}</p>
                <Show when=move || toggle>
                    <button
                        class="text-blue-600 hover:text-blue-800 text-xs mt-1 font-medium"
                        on:click=move |_| set_expanded.update(|e| *e = !*e)
                    >
                        {move || if expanded.get() { "Ver menos" } else { "Ver mais" }}
                    </button>
                </Show>
            </div>
        }
    });

    let due_date = task.due_date.map(|due| {
        let due_class = if overdue { "font-medium text-red-600" } else { "font-medium" };
        view! {
            <div class="flex items-center space-x-1">
                <span>"Vencimento:"</span>
                <span class=due_class>{format_timestamp(&due, &Local)}</span>
            </div>
        }
    });
    let completed_at = task.completed_at.map(|at| {
        view! {
            <div class="flex items-center space-x-1 text-green-600">
                <span>"Concluída:"</span>
                <span>{format_timestamp(&at, &Local)}</span>
            </div>
        }
    });

    let edit_task = task.clone();
    let on_delete = Callback::new(move |_| dashboard.delete(id));

    view! {
        <div class=card_class>
            <div class="p-6">
                <div class="flex items-start justify-between mb-4">
                    <div class="flex-1 min-w-0">
                        <h3 class=title_class>{task.title.clone()}</h3>
                        <div class="flex items-center flex-wrap gap-2 mt-2">
                            <span class=format!("px-2 py-1 rounded-full text-xs font-medium {}", task.priority.color_class())>
                                {task.priority.label().to_string()}
                            </span>
                            <span class=format!("px-2 py-1 rounded-full text-xs font-medium {}", task.status.color_class())>
                                {task.status.label().to_string()}
                            </span>
                            <Show when=move || overdue>
                                <span class="px-2 py-1 rounded-full text-xs font-medium text-red-700 bg-red-200 animate-pulse">
                                    "⚠️ Atrasada"
                                </span>
                            </Show>
                            <Show when=move || near_due && !overdue>
                                <span class="px-2 py-1 rounded-full text-xs font-medium text-yellow-700 bg-yellow-200">
                                    "⏰ Vence em breve"
                                </span>
                            </Show>
                        </div>
                    </div>

                    <div class="flex items-center space-x-2 ml-4">
                        <Show when=move || !completed>
                            <button
                                class="p-2 text-green-600 hover:bg-green-100 rounded-full transition-colors"
                                title="Marcar como concluída"
                                on:click=move |_| dashboard.mark_completed(id)
                            >
                                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7"></path>
                                </svg>
                            </button>
                        </Show>
                        <button
                            class="p-2 text-blue-600 hover:bg-blue-100 rounded-full transition-colors"
                            title="Editar tarefa"
                            on:click=move |_| dashboard.open_form(Some(edit_task.clone()))
                        >
                            <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M11 5H6a2 2 0 00-2 2v11a2 2 0 002 2h11a2 2 0 002-2v-5m-1.414-9.414a2 2 0 112.828 2.828L11.828 15H9v-2.828l8.586-8.586z"></path>
                            </svg>
                        </button>
                        <DeleteConfirmButton
                            prompt="Excluir esta tarefa?"
                            title="Excluir tarefa"
                            on_confirm=on_delete
                        />
                    </div>
                </div>

                {description}

                <div class="flex items-center justify-between text-xs text-gray-500 border-t pt-4">
                    <div class="flex items-center space-x-4">
                        <div class="flex items-center space-x-1">
                            <span>"Criada:"</span>
                            <span>{format_timestamp(&task.created_at, &Local)}</span>
                        </div>
                        {due_date}
                    </div>
                    {completed_at}
                </div>

                <div class="mt-4">
                    <div class="w-full bg-gray-200 rounded-full h-1">
                        <div class=format!("h-1 rounded-full transition-all duration-300 {}", task.status.progress_bar_class())></div>
                    </div>
                </div>
            </div>
        </div>
    }
}
