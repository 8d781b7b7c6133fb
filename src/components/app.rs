// ============================================================================
// APP - Raíz: stores, ruta actual y avisos
// ============================================================================

use super::{CompanyRegistrationScreen, LoginScreen, Toast, UserRegistrationScreen};
use crate::context::{AppContext, AppServices};
use crate::navigation::{initial_route, Route};
use crate::viewmodels::Notification;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

const NOTIFICATION_DURATION_MS: u32 = 4_000;

#[function_component(App)]
pub fn app() -> Html {
    let services = use_memo((), |_| AppServices::browser());
    // None = aún cargando los stores
    let route = use_state(|| None::<Route>);
    let notification = use_state(|| None::<Notification>);

    {
        let services = services.clone();
        let route = route.clone();
        use_effect_with((), move |_| {
            services.load();
            let start = initial_route(&services.company_state);
            log::info!("🧭 Ruta inicial: {:?}", start);
            route.set(Some(start));
            || ()
        });
    }

    // Cierre automático del aviso
    {
        let handle = notification.clone();
        use_effect_with((*notification).clone(), move |current| {
            let timeout = current.as_ref().map(|_| {
                Timeout::new(NOTIFICATION_DURATION_MS, move || handle.set(None))
            });
            move || drop(timeout)
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            log::info!("🧭 Navegando a {:?}", next);
            route.set(Some(next));
        })
    };

    let notify = {
        let notification = notification.clone();
        Callback::from(move |next: Notification| notification.set(Some(next)))
    };

    let on_close = {
        let notification = notification.clone();
        Callback::from(move |_: ()| notification.set(None))
    };

    let context = AppContext {
        services: services.clone(),
        navigate,
        notify,
    };

    let (title, body) = match (*route).clone() {
        None => (
            "Cargando...",
            html! {
                <div class="loading-screen">
                    <div class="spinner"></div>
                    <p>{"Cargando..."}</p>
                </div>
            },
        ),
        Some(current) => (current.title(), route_screen(&current)),
    };

    html! {
        <ContextProvider<AppContext> {context}>
            <div class="app">
                <header class="app-header">
                    <h1>{ title }</h1>
                </header>
                <Toast notification={(*notification).clone()} {on_close} />
                <main class="app-main">{ body }</main>
            </div>
        </ContextProvider<AppContext>>
    }
}

/// Pantalla de cada ruta. Cambiar de empresa remonta el registro de usuario.
pub(crate) fn route_screen(route: &Route) -> Html {
    match route {
        Route::CreateCompany => html! { <CompanyRegistrationScreen /> },
        Route::CreateUser { company_id } => {
            let company_id = AttrValue::from(company_id.clone());
            html! {
                <UserRegistrationScreen key={company_id.to_string()} company_id={company_id.clone()} />
            }
        }
        Route::Login => html! { <LoginScreen /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::testing::{client, ScriptedTransport};
    use crate::utils::MemoryStorage;
    use std::rc::Rc;
    use yew::ServerRenderer;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        context: AppContext,
        route: Route,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <ContextProvider<AppContext> context={props.context.clone()}>
                { route_screen(&props.route) }
            </ContextProvider<AppContext>>
        }
    }

    fn context() -> AppContext {
        let transport = Rc::new(ScriptedTransport::default());
        let services = AppServices::new(client(&transport), Rc::new(MemoryStorage::new()));
        AppContext {
            services: Rc::new(services),
            navigate: Callback::noop(),
            notify: Callback::noop(),
        }
    }

    async fn render(route: Route) -> String {
        ServerRenderer::<Harness>::with_props(move || HarnessProps {
            context: context(),
            route,
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn test_create_user_route_renders_user_form_for_company() {
        let html = render(Route::CreateUser {
            company_id: "emp-42".to_string(),
        })
        .await;
        assert!(html.contains("Registro de Usuario"));
        assert!(html.contains("emp-42"));
    }

    #[tokio::test]
    async fn test_company_and_login_routes_render_their_forms() {
        assert!(render(Route::CreateCompany).await.contains("Registrar Empresa"));
        assert!(render(Route::Login).await.contains("Acceda con su cuenta de usuario"));
    }
}
