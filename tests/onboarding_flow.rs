// Flujo completo: empresa -> reinicio -> usuario -> login

use async_trait::async_trait;
use registro_empresas::context::AppServices;
use registro_empresas::navigation::{initial_route, Route};
use registro_empresas::services::{
    ApiClient, ApiError, HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError,
};
use registro_empresas::utils::MemoryStorage;
use registro_empresas::validation::{CompanyForm, LoginForm, UserForm};
use registro_empresas::viewmodels::{
    CompanyRegistrationViewModel, LoginViewModel, NotificationKind, SubmitError,
    UserRegistrationViewModel,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Default)]
struct FakeBackend {
    responses: RefCell<VecDeque<HttpResponse>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl FakeBackend {
    fn respond(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(HttpResponse {
            status,
            body: body.to_string(),
        });
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| TransportError::NoResponse("backend apagado".to_string()))
    }
}

fn services(backend: &Rc<FakeBackend>, storage: &MemoryStorage) -> AppServices {
    let api = ApiClient::with_transport(backend.clone()).with_base_url("http://backend.test/api");
    let services = AppServices::new(api, Rc::new(storage.clone()));
    services.load();
    services
}

const COMPANY_CREATED: &str = r#"{"success":true,"message":"Empresa creada","data":{"idempresa":"emp-42","razonsocial":"Comercial Andina S.A.","ruc":"1790012345001","contacto":"Lucía Vera","telefono":"0991234567"}}"#;
const USER_CREATED: &str = r#"{"success":true,"data":{"idusuario":"usr-7","identificacion":"1712345678","nombres":"Lucía","apellidos":"Vera","email":"lucia@andina.ec","telefono":"0991234567","direccion":"Av. Amazonas 123","role":"rol-admin","empresa":"emp-42"}}"#;
const LOGGED_IN: &str = r#"{"success":true,"data":{"token":"jwt-abc","usuario":{"idusuario":"usr-7","email":"lucia@andina.ec","nombres":"Lucía","apellidos":"Vera","role":"rol-admin","empresa":"emp-42"}}}"#;

fn company_form() -> CompanyForm {
    CompanyForm {
        legal_name: "  Comercial Andina S.A. ".to_string(),
        tax_id: "1790012345001".to_string(),
        contact_name: "Lucía Vera".to_string(),
        phone: "0991234567".to_string(),
    }
}

fn user_form(company_id: &str) -> UserForm {
    UserForm {
        national_id: "1712345678".to_string(),
        given_names: "Lucía".to_string(),
        surnames: "Vera".to_string(),
        email: "Lucia@Andina.ec".to_string(),
        password: "secreto1".to_string(),
        phone: "0991234567".to_string(),
        address: "Av. Amazonas 123".to_string(),
        role: "rol-admin".to_string(),
        ..UserForm::for_company(company_id)
    }
}

#[tokio::test]
async fn test_company_survives_restart_and_user_is_registered_for_it() {
    let backend = Rc::new(FakeBackend::default());
    let storage = MemoryStorage::new();

    let first_run = services(&backend, &storage);
    assert_eq!(initial_route(&first_run.company_state), Route::CreateCompany);

    backend.respond(201, COMPANY_CREATED);
    let vm = CompanyRegistrationViewModel::new(
        first_run.api.clone(),
        first_run.company_state.clone(),
    );
    let registered = vm.submit(&company_form()).await.unwrap();
    assert_eq!(
        registered.next,
        Route::CreateUser {
            company_id: "emp-42".to_string()
        }
    );
    assert_eq!(registered.notification.kind, NotificationKind::Success);
    assert_eq!(backend.requests()[0].method, HttpMethod::Post);
    assert_eq!(backend.requests()[0].url, "http://backend.test/api/v1/empresa");

    // Reinicio: stores nuevos sobre el mismo almacenamiento
    let second_run = services(&backend, &storage);
    let company_id = match initial_route(&second_run.company_state) {
        Route::CreateUser { company_id } => company_id,
        other => panic!("se esperaba el registro de usuario, llegó {:?}", other),
    };
    assert_eq!(company_id, "emp-42");
    assert_eq!(
        second_run.company_state.get_identity().map(|c| c.name),
        Some("Comercial Andina S.A.".to_string())
    );

    backend.respond(201, USER_CREATED);
    let users = UserRegistrationViewModel::new(second_run.api.clone());
    let created = users.submit(&user_form(&company_id)).await.unwrap();
    assert_eq!(created.user.company, "emp-42");
    assert_eq!(created.reset_form, UserForm::for_company("emp-42"));

    let sent: serde_json::Value =
        serde_json::from_str(backend.requests()[1].body.as_deref().unwrap()).unwrap();
    assert_eq!(sent["email"], "lucia@andina.ec");
    assert_eq!(sent["empresa"], "emp-42");
}

#[tokio::test]
async fn test_invalid_company_form_never_reaches_backend() {
    let backend = Rc::new(FakeBackend::default());
    let storage = MemoryStorage::new();
    let app = services(&backend, &storage);

    let vm = CompanyRegistrationViewModel::new(app.api.clone(), app.company_state.clone());
    let form = CompanyForm {
        tax_id: "17900".to_string(),
        ..company_form()
    };

    let error = vm.submit(&form).await.unwrap_err();
    assert!(matches!(error, SubmitError::Validation(ref errors) if errors.contains("tax_id")));
    assert!(backend.requests().is_empty());
    assert!(storage.is_empty());
    assert_eq!(initial_route(&app.company_state), Route::CreateCompany);
}

#[tokio::test]
async fn test_login_persists_session_across_restart() {
    let backend = Rc::new(FakeBackend::default());
    let storage = MemoryStorage::new();
    let app = services(&backend, &storage);

    backend.respond(200, LOGGED_IN);
    let vm = LoginViewModel::new(app.api.clone(), app.auth_state.clone());
    let form = LoginForm {
        email: "lucia@andina.ec".to_string(),
        password: "secreto1".to_string(),
    };
    let logged_in = vm.submit(&form).await.unwrap();
    assert_eq!(logged_in.data.token, "jwt-abc");
    assert_eq!(logged_in.notification.kind, NotificationKind::Success);
    assert_eq!(backend.requests()[0].url, "http://backend.test/api/v1/auth");

    let restarted = services(&backend, &storage);
    assert!(restarted.auth_state.is_logged_in());
    assert_eq!(restarted.auth_state.get_token(), Some("jwt-abc".to_string()));
    assert_eq!(
        restarted.auth_state.get_user().map(|u| u.company),
        Some("emp-42".to_string())
    );
}

#[tokio::test]
async fn test_rejected_login_shows_server_message_and_keeps_session_empty() {
    let backend = Rc::new(FakeBackend::default());
    let storage = MemoryStorage::new();
    let app = services(&backend, &storage);

    backend.respond(401, r#"{"success":false,"message":"Credenciales inválidas"}"#);
    let vm = LoginViewModel::new(app.api.clone(), app.auth_state.clone());
    let form = LoginForm {
        email: "lucia@andina.ec".to_string(),
        password: "incorrecta".to_string(),
    };

    let error = vm.submit(&form).await.unwrap_err();
    assert_eq!(
        error,
        SubmitError::Api(ApiError::Server("Credenciales inválidas".to_string()))
    );

    let notification = LoginViewModel::error_notification(&error).unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.title, "Error");
    assert_eq!(notification.message, "Credenciales inválidas");

    assert!(!app.auth_state.is_logged_in());
    assert!(storage.is_empty());
    assert!(!vm.guard().is_submitting());
}

#[tokio::test]
async fn test_unreachable_backend_uses_network_message() {
    let backend = Rc::new(FakeBackend::default());
    let storage = MemoryStorage::new();
    let app = services(&backend, &storage);

    let vm = UserRegistrationViewModel::new(app.api.clone());
    let error = vm.load_roles().await.unwrap_err();
    assert!(matches!(error, ApiError::Transport(TransportError::NoResponse(_))));

    let notification = UserRegistrationViewModel::roles_error_notification(&error);
    assert_eq!(notification.title, "Error al cargar roles");
    assert_eq!(backend.requests()[0].method, HttpMethod::Get);
}
