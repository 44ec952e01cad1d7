//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use task_client::flows::register;
use task_client::{Field, FormErrors, RegisterForm, RegisterOutcome, Route};

use crate::api::api_client;
use crate::components::{flash, AuthField, Popup, PopupMessage, LOCK_ICON, MAIL_ICON, USER_ICON};
use crate::context::use_config;

#[component]
pub fn Register() -> impl IntoView {
    let config = use_config();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(FormErrors::new());
    let (popup, set_popup) = signal(None::<PopupMessage>);
    let (redirect_to, set_redirect_to) = signal(None::<Route>);

    Effect::new(move |_| {
        if let Some(route) = redirect_to.get() {
            navigate(route.path(), Default::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = RegisterForm {
            username: username.get(),
            email: email.get(),
            password: password.get(),
        };
        let config = config.clone();
        spawn_local(async move {
            let outcome = register(&api_client(&config), &form).await;
            if let Some(message) = outcome.error_message() {
                if let RegisterOutcome::Invalid(found) = outcome {
                    set_errors.set(found);
                }
                flash(set_popup, PopupMessage::error(message), config.error_popup_ms).await;
            } else if let RegisterOutcome::Registered { redirect } = outcome {
                log::info!("[REGISTER] Account created");
                if let Err(e) = window().alert_with_message("Cadastro feito!") {
                    log::error!("[REGISTER] Failed to show confirmation: {:?}", e);
                }
                set_redirect_to.set(Some(redirect));
            }
        });
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-purple-50 to-indigo-100 flex items-center justify-center p-4">
            <Popup popup=popup/>
            <div class="bg-white rounded-2xl shadow-xl w-full max-w-md p-8">
                <div class="text-center mb-8">
                    <h2 class="text-3xl font-bold text-gray-800">"Criar Conta"</h2>
                    <p class="text-gray-500 mt-2">"Preencha os dados para se cadastrar"</p>
                </div>
                <form on:submit=on_submit class="space-y-6">
                    <AuthField
                        field=Field::Username
                        placeholder="Usuário"
                        icon=USER_ICON
                        accent="indigo"
                        value=username
                        set_value=set_username
                        errors=errors
                        set_errors=set_errors
                    />
                    <AuthField
                        field=Field::Email
                        placeholder="Email"
                        input_type="email"
                        icon=MAIL_ICON
                        accent="indigo"
                        value=email
                        set_value=set_email
                        errors=errors
                        set_errors=set_errors
                    />
                    <AuthField
                        field=Field::Password
                        placeholder="Senha"
                        input_type="password"
                        icon=LOCK_ICON
                        accent="indigo"
                        value=password
                        set_value=set_password
                        errors=errors
                        set_errors=set_errors
                    />
                    <button
                        type="submit"
                        class="w-full bg-gradient-to-r from-purple-500 to-indigo-600 text-white py-3 rounded-lg font-semibold hover:from-purple-600 hover:to-indigo-700 transform hover:scale-105 transition duration-300 shadow-lg"
                    >
                        "Cadastrar"
                    </button>
                </form>
                <p class="text-center text-gray-600 mt-6">
                    "Já tem uma conta? "
                    <A href=Route::Login.path() attr:class="text-indigo-600 hover:text-indigo-800 font-semibold">
                        "Entrar"
                    </A>
                </p>
            </div>
        </div>
    }
}
