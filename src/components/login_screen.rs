use super::form_field::{field_error, FormField};
use crate::context::AppContext;
use crate::validation::login::{FIELD_EMAIL, FIELD_PASSWORD};
use crate::validation::{LoginForm, ValidationErrors};
use crate::viewmodels::{LoginViewModel, SubmitError};
use yew::prelude::*;

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let context = use_context::<AppContext>().expect("AppContext no disponible");
    let view_model = {
        let services = context.services.clone();
        use_memo((), move |_| {
            LoginViewModel::new(services.api.clone(), services.auth_state.clone())
        })
    };
    let form = use_state(LoginForm::default);
    let errors = use_state(ValidationErrors::default);
    let submitting = use_state(|| false);

    {
        let view_model = view_model.clone();
        use_effect_with((), move |_| move || view_model.guard().cancel());
    }

    let on_email = {
        let form = form.clone();
        Callback::from(move |email: String| {
            form.set(LoginForm {
                email,
                ..(*form).clone()
            })
        })
    };

    let on_password = {
        let form = form.clone();
        Callback::from(move |password: String| {
            form.set(LoginForm {
                password,
                ..(*form).clone()
            })
        })
    };

    let on_submit = {
        let view_model = view_model.clone();
        let form = form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let notify = context.notify.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let view_model = view_model.clone();
            let current = (*form).clone();
            let errors = errors.clone();
            let submitting = submitting.clone();
            let notify = notify.clone();

            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = view_model.submit(&current).await;
                submitting.set(false);

                match outcome {
                    Ok(logged_in) => {
                        log::info!("✅ Sesión iniciada: {}", logged_in.data.user.email);
                        errors.set(ValidationErrors::default());
                        notify.emit(logged_in.notification);
                    }
                    Err(SubmitError::Validation(field_errors)) => errors.set(field_errors),
                    Err(SubmitError::Cancelled) => {}
                    Err(error) => {
                        errors.set(ValidationErrors::default());
                        if let Some(notification) = LoginViewModel::error_notification(&error) {
                            notify.emit(notification);
                        }
                    }
                }
            });
        })
    };

    let welcome = context
        .services
        .auth_state
        .get_user()
        .map(|user| format!("Sesión activa: {} {}", user.given_names, user.surnames));

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🔐"}</div>
                    </div>
                    <h1>{"Iniciar Sesión"}</h1>
                    <p>{"Acceda con su cuenta de usuario"}</p>
                    if let Some(welcome) = welcome {
                        <p class="session-info">{ welcome }</p>
                    }
                </div>

                <form class="login-form" onsubmit={on_submit} novalidate=true>
                    <FormField
                        id="email"
                        label="Email"
                        input_type="email"
                        placeholder="usuario@empresa.com"
                        value={form.email.clone()}
                        error={field_error(&errors, FIELD_EMAIL)}
                        disabled={*submitting}
                        on_change={on_email}
                    />
                    <FormField
                        id="password"
                        label="Contraseña"
                        input_type="password"
                        placeholder="Ingresa tu contraseña"
                        value={form.password.clone()}
                        error={field_error(&errors, FIELD_PASSWORD)}
                        disabled={*submitting}
                        on_change={on_password}
                    />

                    <button type="submit" class="btn-login" disabled={*submitting}>
                        if *submitting {
                            <span class="spinner-small"></span>
                            <span class="btn-text">{"Ingresando..."}</span>
                        } else {
                            <span class="btn-text">{"Iniciar Sesión"}</span>
                        }
                    </button>
                </form>
            </div>
        </div>
    }
}
