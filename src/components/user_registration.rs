// ============================================================================
// PANTALLA: REGISTRO DE USUARIO (para la empresa activa)
// ============================================================================

use super::form_field::{field_error, FormField};
use crate::context::AppContext;
use crate::models::Role;
use crate::navigation::Route;
use crate::validation::user::{
    FIELD_ADDRESS, FIELD_COMPANY, FIELD_EMAIL, FIELD_GIVEN_NAMES, FIELD_NATIONAL_ID,
    FIELD_PASSWORD, FIELD_PHONE, FIELD_ROLE, FIELD_SURNAMES,
};
use crate::validation::{UserForm, ValidationErrors};
use crate::viewmodels::{SubmitError, UserRegistrationViewModel};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserRegistrationProps {
    pub company_id: AttrValue,
}

#[function_component(UserRegistrationScreen)]
pub fn user_registration_screen(props: &UserRegistrationProps) -> Html {
    let context = use_context::<AppContext>().expect("AppContext no disponible");
    let view_model = {
        let api = context.services.api.clone();
        use_memo((), move |_| UserRegistrationViewModel::new(api))
    };
    let form = {
        let company_id = props.company_id.to_string();
        use_state(move || UserForm::for_company(company_id))
    };
    let errors = use_state(ValidationErrors::default);
    let submitting = use_state(|| false);
    let roles = use_state(Vec::<Role>::new);
    let roles_loading = use_state(|| true);

    // Roles al montar + cancelación al desmontar
    {
        let view_model = view_model.clone();
        let roles = roles.clone();
        let roles_loading = roles_loading.clone();
        let notify = context.notify.clone();
        use_effect_with((), move |_| {
            let loader = view_model.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match loader.load_roles().await {
                    Ok(list) => {
                        log::info!("📋 {} roles disponibles", list.len());
                        roles.set(list);
                    }
                    Err(e) => notify.emit(UserRegistrationViewModel::roles_error_notification(&e)),
                }
                roles_loading.set(false);
            });
            move || view_model.guard().cancel()
        });
    }

    let field = |update: fn(&mut UserForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            update(&mut next, value);
            form.set(next);
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
            let form = form.clone();
            let errors = errors.clone();
            let submitting = submitting.clone();
            let notify = notify.clone();

            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = view_model.submit(&current).await;
                submitting.set(false);

                match outcome {
                    Ok(registered) => {
                        log::info!("✅ Usuario registrado: {}", registered.user.email);
                        errors.set(ValidationErrors::default());
                        form.set(registered.reset_form);
                        notify.emit(registered.notification);
                    }
                    Err(SubmitError::Validation(field_errors)) => errors.set(field_errors),
                    Err(SubmitError::Cancelled) => {}
                    Err(error) => {
                        errors.set(ValidationErrors::default());
                        if let Some(notification) =
                            UserRegistrationViewModel::error_notification(&error)
                        {
                            notify.emit(notification);
                        }
                    }
                }
            });
        })
    };

    let go_to_login = {
        let navigate = context.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Login))
    };

    let company_label = context
        .services
        .company_state
        .get_identity()
        .filter(|identity| identity.id == props.company_id.as_str())
        .map(|identity| identity.name)
        .unwrap_or_else(|| props.company_id.to_string());

    let role_options = roles
        .iter()
        .map(|role| {
            let selected = form.role == role.id;
            let onclick = {
                let form = form.clone();
                let role_id = role.id.clone();
                Callback::from(move |_: MouseEvent| {
                    form.set(UserRegistrationViewModel::select_role(&form, &role_id));
                })
            };
            html! {
                <button
                    type="button"
                    key={role.id.clone()}
                    class={classes!("role-option", selected.then_some("selected"))}
                    disabled={*submitting}
                    title={role.description.clone().unwrap_or_default()}
                    {onclick}
                >
                    { role.name.clone() }
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="registration-screen">
            <div class="registration-container">
                <div class="registration-header">
                    <div class="logo-icon">{"👤"}</div>
                    <h1>{"Registro de Usuario"}</h1>
                    <p>{"Empresa: "}<strong>{ company_label }</strong></p>
                </div>

                <form class="registration-form" onsubmit={on_submit} novalidate=true>
                    <FormField
                        id="identificacion"
                        label="Identificación"
                        placeholder="10 dígitos"
                        value={form.national_id.clone()}
                        error={field_error(&errors, FIELD_NATIONAL_ID)}
                        max_length={10}
                        disabled={*submitting}
                        on_change={field(|f, v| f.national_id = v)}
                    />
                    <FormField
                        id="nombres"
                        label="Nombres"
                        value={form.given_names.clone()}
                        error={field_error(&errors, FIELD_GIVEN_NAMES)}
                        max_length={50}
                        disabled={*submitting}
                        on_change={field(|f, v| f.given_names = v)}
                    />
                    <FormField
                        id="apellidos"
                        label="Apellidos"
                        value={form.surnames.clone()}
                        error={field_error(&errors, FIELD_SURNAMES)}
                        max_length={50}
                        disabled={*submitting}
                        on_change={field(|f, v| f.surnames = v)}
                    />
                    <FormField
                        id="email"
                        label="Email"
                        input_type="email"
                        placeholder="usuario@empresa.com"
                        value={form.email.clone()}
                        error={field_error(&errors, FIELD_EMAIL)}
                        disabled={*submitting}
                        on_change={field(|f, v| f.email = v)}
                    />
                    <FormField
                        id="password"
                        label="Contraseña"
                        input_type="password"
                        placeholder="Entre 6 y 20 caracteres"
                        value={form.password.clone()}
                        error={field_error(&errors, FIELD_PASSWORD)}
                        max_length={20}
                        disabled={*submitting}
                        on_change={field(|f, v| f.password = v)}
                    />
                    <FormField
                        id="telefono"
                        label="Teléfono"
                        input_type="tel"
                        value={form.phone.clone()}
                        error={field_error(&errors, FIELD_PHONE)}
                        max_length={10}
                        disabled={*submitting}
                        on_change={field(|f, v| f.phone = v)}
                    />
                    <FormField
                        id="direccion"
                        label="Dirección"
                        value={form.address.clone()}
                        error={field_error(&errors, FIELD_ADDRESS)}
                        max_length={200}
                        disabled={*submitting}
                        on_change={field(|f, v| f.address = v)}
                    />

                    <div class="form-group">
                        <label>{"Rol"}</label>
                        if *roles_loading {
                            <p class="roles-loading">{"Cargando roles..."}</p>
                        } else if roles.is_empty() {
                            <p class="roles-empty">{"No hay roles disponibles"}</p>
                        } else {
                            <div class="role-options">{ role_options }</div>
                        }
                        if let Some(error) = field_error(&errors, FIELD_ROLE) {
                            <p class="field-error">{ error }</p>
                        }
                        if let Some(error) = field_error(&errors, FIELD_COMPANY) {
                            <p class="field-error">{ error }</p>
                        }
                    </div>

                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        if *submitting {
                            <span class="spinner-small"></span>
                            <span class="btn-text">{"Registrando..."}</span>
                        } else {
                            <span class="btn-text">{"Registrar Usuario"}</span>
                        }
                    </button>
                </form>

                <div class="registration-footer">
                    <button type="button" class="btn-link" onclick={go_to_login}>
                        {"Ir a iniciar sesión"}
                    </button>
                </div>
            </div>
        </div>
    }
}
