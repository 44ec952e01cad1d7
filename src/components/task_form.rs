//! Task Form Component
//!
//! Create/edit modal. Validates locally, then hands the payload to the dashboard.

use chrono::{Local, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use task_client::validation::{validate_task_form, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};
use task_client::{Field, FormErrors, Priority, Status, Task, TaskFormFields};

use crate::context::use_dashboard;

const INPUT_CLASS: &str = "w-full px-3 py-2 border rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent";

fn input_class(errors: ReadSignal<FormErrors>, field: Field) -> impl Fn() -> String + Send + Sync + 'static {
    move || {
        let border = if errors.with(|e| e.has(field)) {
            "border-red-500"
        } else {
            "border-gray-300"
        };
        format!("{} {}", INPUT_CLASS, border)
    }
}

#[component]
fn FieldError(errors: ReadSignal<FormErrors>, field: Field) -> impl IntoView {
    move || {
        errors.with(|e| e.get(field).map(str::to_string)).map(|message| {
            view! { <p class="text-red-500 text-sm mt-1">{message}</p> }
        })
    }
}

/// `editing` is `None` when creating a new task
#[component]
pub fn TaskForm(editing: Option<Task>) -> impl IntoView {
    let dashboard = use_dashboard();
    let editing_id = editing.as_ref().map(|t| t.id);
    let is_editing = editing_id.is_some();

    let initial = editing
        .as_ref()
        .map(|t| TaskFormFields::from_task(t, &Local))
        .unwrap_or_default();
    let (fields, set_fields) = signal(initial);
    let (errors, set_errors) = signal(FormErrors::new());
    let (loading, set_loading) = signal(false);

    // Typing into a field clears its error
    let edit = move |field: Field, apply: Box<dyn FnOnce(&mut TaskFormFields)>| {
        set_fields.update(|f| apply(f));
        if errors.with(|e| e.has(field)) {
            set_errors.update(|e| e.clear(field));
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = fields.get();
        let found = validate_task_form(&current, Utc::now(), &Local);
        if !found.is_empty() {
            set_errors.set(found);
            return;
        }

        set_loading.set(true);
        let payload = current.to_payload(is_editing, &Local);
        spawn_local(async move {
            // On success the form closes and this component is gone
            if !dashboard.save(editing_id, payload).await {
                set_loading.set(false);
            }
        });
    };

    let priority_options = Priority::ALL
        .into_iter()
        .map(|p| {
            let value = p.as_str().to_string();
            let label = p.option_label();
            view! {
                <option value=value selected=move || fields.with(|f| f.priority == p)>{label}</option>
            }
        })
        .collect_view();

    view! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50 p-4">
            <div class="bg-white rounded-lg shadow-xl w-full max-w-md max-h-screen overflow-y-auto">
                <div class="p-6">
                    <div class="flex items-center justify-between mb-6">
                        <h2 class="text-xl font-bold text-gray-900">
                            {if is_editing { "Editar Tarefa" } else { "Nova Tarefa" }}
                        </h2>
                        <button
                            class="text-gray-400 hover:text-gray-600 transition-colors"
                            on:click=move |_| dashboard.close_form()
                        >
                            <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path>
                            </svg>
                        </button>
                    </div>

                    <form on:submit=on_submit class="space-y-4">
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">"Título *"</label>
                            <input
                                type="text"
                                placeholder="Digite o título da tarefa"
                                maxlength=TITLE_MAX_CHARS.to_string()
                                class=input_class(errors, Field::Title)
                                prop:value=move || fields.with(|f| f.title.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    edit(Field::Title, Box::new(move |f| f.title = value));
                                }
                            />
                            <FieldError errors=errors field=Field::Title/>
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">"Descrição"</label>
                            <textarea
                                rows="3"
                                placeholder="Descreva a tarefa (opcional)"
                                maxlength=DESCRIPTION_MAX_CHARS.to_string()
                                class=move || format!("{} resize-none", input_class(errors, Field::Description)())
                                prop:value=move || fields.with(|f| f.description.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    edit(Field::Description, Box::new(move |f| f.description = value));
                                }
                            ></textarea>
                            <FieldError errors=errors field=Field::Description/>
                            <p class="text-gray-500 text-xs mt-1">
                                {move || format!("{}/{} caracteres", fields.with(|f| f.description.chars().count()), DESCRIPTION_MAX_CHARS)}
                            </p>
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">"Prioridade"</label>
                            <select
                                class=format!("{} border-gray-300", INPUT_CLASS)
                                on:change=move |ev| {
                                    let value = Priority::parse(&event_target_value(&ev));
                                    set_fields.update(|f| f.priority = value);
                                }
                            >
                                {priority_options}
                            </select>
                        </div>

                        <Show when=move || is_editing>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">"Status"</label>
                                <select
                                    class=format!("{} border-gray-300", INPUT_CLASS)
                                    on:change=move |ev| {
                                        let value = Status::parse(&event_target_value(&ev));
                                        set_fields.update(|f| f.status = value);
                                    }
                                >
                                    {Status::ALL
                                        .into_iter()
                                        .map(|s| {
                                            let value = s.as_str().to_string();
                                            let label = s.option_label();
                                            view! {
                                                <option value=value selected=move || fields.with(|f| f.status == s)>{label}</option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                        </Show>

                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">"Data de Vencimento"</label>
                            <input
                                type="datetime-local"
                                class=input_class(errors, Field::DueDate)
                                prop:value=move || fields.with(|f| f.due_date.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    edit(Field::DueDate, Box::new(move |f| f.due_date = value));
                                }
                            />
                            <FieldError errors=errors field=Field::DueDate/>
                        </div>

                        <div class="flex space-x-3 pt-4">
                            <button
                                type="button"
                                class="flex-1 px-4 py-2 border border-gray-300 text-gray-700 rounded-lg hover:bg-gray-50 transition-colors"
                                on:click=move |_| dashboard.close_form()
                            >
                                "Cancelar"
                            </button>
                            <button
                                type="submit"
                                class="flex-1 px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                                disabled=move || loading.get()
                            >
                                {move || match (loading.get(), is_editing) {
                                    (true, _) => "Salvando...",
                                    (false, true) => "Atualizar",
                                    (false, false) => "Criar",
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
