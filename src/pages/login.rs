//! Login Page

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use task_client::flows::login;
use task_client::{Field, FormErrors, LoginForm, LoginOutcome, Route};

use crate::api::{api_client, session_store};
use crate::components::{flash, AuthField, Popup, PopupMessage, LOCK_ICON, USER_ICON};
use crate::context::{use_config, use_session};

#[component]
pub fn Login() -> impl IntoView {
    let config = use_config();
    let session = use_session();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(FormErrors::new());
    let (popup, set_popup) = signal(None::<PopupMessage>);
    // Set once the session is stored; the Effect below performs the redirect
    let (redirect_to, set_redirect_to) = signal(None::<Route>);

    Effect::new(move |_| {
        if let Some(route) = redirect_to.get() {
            navigate(route.path(), Default::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            username: username.get(),
            password: password.get(),
        };
        let config = config.clone();
        spawn_local(async move {
            let outcome = login(&api_client(&config), &session_store(), &form).await;
            if let Some(message) = outcome.error_message() {
                if let LoginOutcome::Invalid(found) = outcome {
                    set_errors.set(found);
                }
                flash(set_popup, PopupMessage::error(message), config.error_popup_ms).await;
            } else if let LoginOutcome::Authenticated { session: current, redirect } = outcome {
                session.init(current);
                set_popup.set(Some(PopupMessage::success(
                    "Login realizado com sucesso!",
                    "Redirecionando...",
                )));
                TimeoutFuture::new(config.login_redirect_delay_ms).await;
                set_redirect_to.set(Some(redirect));
            }
        });
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 flex items-center justify-center p-4">
            <Popup popup=popup/>
            <div class="bg-white rounded-2xl shadow-xl w-full max-w-md p-8">
                <div class="text-center mb-8">
                    <h2 class="text-3xl font-bold text-gray-800">"Bem-vindo de volta"</h2>
                    <p class="text-gray-500 mt-2">"Entre na sua conta"</p>
                </div>
                <form on:submit=on_submit class="space-y-6">
                    <AuthField
                        field=Field::Username
                        placeholder="Usuário"
                        icon=USER_ICON
                        value=username
                        set_value=set_username
                        errors=errors
                        set_errors=set_errors
                    />
                    <AuthField
                        field=Field::Password
                        placeholder="Senha"
                        input_type="password"
                        icon=LOCK_ICON
                        value=password
                        set_value=set_password
                        errors=errors
                        set_errors=set_errors
                    />
                    <button
                        type="submit"
                        class="w-full bg-gradient-to-r from-blue-500 to-indigo-600 text-white py-3 rounded-lg font-semibold hover:from-blue-600 hover:to-indigo-700 transform hover:scale-105 transition duration-300 shadow-lg"
                    >
                        "Entrar"
                    </button>
                </form>
                <p class="text-center text-gray-600 mt-6">
                    "Não tem uma conta? "
                    <A href=Route::Register.path() attr:class="text-blue-600 hover:text-blue-800 font-semibold">
                        "Cadastre-se"
                    </A>
                </p>
            </div>
        </div>
    }
}
