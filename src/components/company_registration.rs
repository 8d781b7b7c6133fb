// ============================================================================
// PANTALLA: REGISTRO DE EMPRESA
// ============================================================================

use super::form_field::{field_error, FormField};
use crate::config::CONFIG;
use crate::context::AppContext;
use crate::navigation::Route;
use crate::validation::company::{
    FIELD_CONTACT_NAME, FIELD_LEGAL_NAME, FIELD_PHONE, FIELD_TAX_ID,
};
use crate::validation::{CompanyForm, ValidationErrors};
use crate::viewmodels::{CompanyRegistrationViewModel, SubmitError};
use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;

#[function_component(CompanyRegistrationScreen)]
pub fn company_registration_screen() -> Html {
    let context = use_context::<AppContext>().expect("AppContext no disponible");
    let view_model = {
        let services = context.services.clone();
        use_memo((), move |_| {
            CompanyRegistrationViewModel::new(services.api.clone(), services.company_state.clone())
        })
    };
    let form = use_state(CompanyForm::default);
    let errors = use_state(ValidationErrors::default);
    let submitting = use_state(|| false);
    let mounted = use_mut_ref(|| true);

    // Al desmontar: las respuestas pendientes ya no aplican
    {
        let view_model = view_model.clone();
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            move || {
                *mounted.borrow_mut() = false;
                view_model.guard().cancel();
            }
        });
    }

    let field = |update: fn(&mut CompanyForm, String)| {
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
        let context = context.clone();

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
            let context = context.clone();
            let mounted = mounted.clone();

            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = view_model.submit(&current).await;
                submitting.set(false);

                match outcome {
                    Ok(registered) => {
                        log::info!("✅ Empresa registrada: {}", registered.company.id);
                        errors.set(ValidationErrors::default());
                        form.set(CompanyForm::default());
                        context.notify.emit(registered.notification);

                        TimeoutFuture::new(CONFIG.navigation_delay_ms).await;
                        if *mounted.borrow() {
                            context.navigate.emit(registered.next);
                        }
                    }
                    Err(SubmitError::Validation(field_errors)) => errors.set(field_errors),
                    Err(SubmitError::Cancelled) => {}
                    Err(error) => {
                        errors.set(ValidationErrors::default());
                        if let Some(notification) =
                            CompanyRegistrationViewModel::error_notification(&error)
                        {
                            context.notify.emit(notification);
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

    html! {
        <div class="registration-screen">
            <div class="registration-container">
                <div class="registration-header">
                    <div class="logo-icon">{"🏢"}</div>
                    <h1>{"Registro de Empresa"}</h1>
                    <p>{"Ingrese los datos de su empresa para comenzar"}</p>
                </div>

                <form class="registration-form" onsubmit={on_submit} novalidate=true>
                    <FormField
                        id="razonsocial"
                        label="Razón social"
                        placeholder="Nombre legal de la empresa"
                        value={form.legal_name.clone()}
                        error={field_error(&errors, FIELD_LEGAL_NAME)}
                        max_length={100}
                        disabled={*submitting}
                        on_change={field(|f, v| f.legal_name = v)}
                    />
                    <FormField
                        id="ruc"
                        label="RUC"
                        placeholder="13 dígitos"
                        value={form.tax_id.clone()}
                        error={field_error(&errors, FIELD_TAX_ID)}
                        max_length={13}
                        disabled={*submitting}
                        on_change={field(|f, v| f.tax_id = v)}
                    />
                    <FormField
                        id="contacto"
                        label="Nombre de contacto"
                        placeholder="Persona de contacto"
                        value={form.contact_name.clone()}
                        error={field_error(&errors, FIELD_CONTACT_NAME)}
                        max_length={100}
                        disabled={*submitting}
                        on_change={field(|f, v| f.contact_name = v)}
                    />
                    <FormField
                        id="telefono"
                        label="Teléfono"
                        input_type="tel"
                        placeholder="0991234567"
                        value={form.phone.clone()}
                        error={field_error(&errors, FIELD_PHONE)}
                        max_length={10}
                        disabled={*submitting}
                        on_change={field(|f, v| f.phone = v)}
                    />

                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        if *submitting {
                            <span class="spinner-small"></span>
                            <span class="btn-text">{"Registrando..."}</span>
                        } else {
                            <span class="btn-text">{"Registrar Empresa"}</span>
                        }
                    </button>
                </form>

                <div class="registration-footer">
                    <p>{"¿Ya tiene una cuenta?"}</p>
                    <button type="button" class="btn-link" onclick={go_to_login}>
                        {"Iniciar sesión"}
                    </button>
                </div>
            </div>
        </div>
    }
}
