//! Task Stats Component
//!
//! Summary cards, overall progress and the per-priority distribution.

use leptos::prelude::*;
use task_client::derive::{priority_share, progress_percentage};
use task_client::{Priority, Stats};

#[component]
fn StatCard(label: &'static str, value: u32, value_class: &'static str, icon_class: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-md p-6 transform hover:scale-105 transition duration-300">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm font-medium text-gray-600">{label}</p>
                    <p class=format!("text-3xl font-bold {}", value_class)>{value}</p>
                </div>
                <div class=format!("p-3 rounded-full {}", icon_class)></div>
            </div>
        </div>
    }
}

/// Renders nothing until stats have loaded
#[component]
pub fn TaskStats(#[prop(into)] stats: Signal<Option<Stats>>) -> impl IntoView {
    move || {
        stats.get().map(|stats| {
            let progress = progress_percentage(&stats);
            let distribution = Priority::ALL
                .iter()
                .map(|p| {
                    let count = stats.by_priority.get(p);
                    let width = format!("width: {:.1}%", priority_share(count, stats.total));
                    view! {
                        <div class="flex items-center justify-between">
                            <div class="flex items-center space-x-2">
                                <span class=format!("w-3 h-3 rounded-full {}", p.bar_class())></span>
                                <span class="text-sm text-gray-700">{p.label().to_string()}</span>
                            </div>
                            <div class="flex items-center space-x-2">
                                <div class="w-24 bg-gray-200 rounded-full h-2">
                                    <div class=format!("h-2 rounded-full {}", p.bar_class()) style=width></div>
                                </div>
                                <span class="text-sm font-medium text-gray-900 w-8 text-right">{count}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view();

            view! {
                <div class="space-y-6 mb-8">
                    <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4">
                        <StatCard label="Total" value=stats.total value_class="text-gray-900" icon_class="bg-blue-100"/>
                        <StatCard label="Concluídas" value=stats.completed value_class="text-green-600" icon_class="bg-green-100"/>
                        <StatCard label="Pendentes" value=stats.pending value_class="text-gray-600" icon_class="bg-gray-100"/>
                        <StatCard label="Em Progresso" value=stats.in_progress value_class="text-blue-600" icon_class="bg-blue-100"/>
                        <StatCard label="Canceladas" value=stats.cancelled value_class="text-red-600" icon_class="bg-red-100"/>
                        <StatCard label="Atrasadas" value=stats.overdue value_class="text-red-700" icon_class="bg-red-200"/>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <div class="bg-white rounded-lg shadow-md p-6">
                            <h3 class="text-lg font-semibold text-gray-900 mb-4">"Progresso Geral"</h3>
                            <div class="flex items-center justify-between mb-2">
                                <span class="text-sm text-gray-600">"Tarefas concluídas"</span>
                                <span class="text-sm font-medium text-gray-900">{format!("{}%", progress)}</span>
                            </div>
                            <div class="w-full bg-gray-200 rounded-full h-3">
                                <div
                                    class="bg-gradient-to-r from-green-400 to-green-600 h-3 rounded-full transition-all duration-500"
                                    style=format!("width: {}%", progress)
                                ></div>
                            </div>
                            <p class="text-xs text-gray-500 mt-2">
                                {format!("{} de {} tarefas concluídas", stats.completed, stats.total)}
                            </p>
                        </div>

                        <div class="bg-white rounded-lg shadow-md p-6">
                            <h3 class="text-lg font-semibold text-gray-900 mb-4">"Distribuição por Prioridade"</h3>
                            <div class="space-y-3">{distribution}</div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
