// ============================================================================
// APP CONTEXT - Dependencias compartidas por las pantallas
// ============================================================================
// Los stores se crean una vez y se pasan por contexto (nada de globales).
// ============================================================================

use crate::navigation::Route;
use crate::services::ApiClient;
use crate::state::{AuthState, CompanyState};
use crate::utils::{BrowserStorage, KeyValueStorage};
use crate::viewmodels::Notification;
use std::rc::Rc;
use yew::prelude::*;

/// Gateway + stores persistidos
pub struct AppServices {
    pub api: ApiClient,
    pub company_state: CompanyState,
    pub auth_state: AuthState,
}

impl AppServices {
    pub fn new(api: ApiClient, storage: Rc<dyn KeyValueStorage>) -> Self {
        Self {
            api,
            company_state: CompanyState::new(storage.clone()),
            auth_state: AuthState::new(storage),
        }
    }

    /// Servicios reales del navegador (fetch + localStorage)
    pub fn browser() -> Self {
        Self::new(ApiClient::new(), Rc::new(BrowserStorage))
    }

    /// Carga de arranque de ambos stores
    pub fn load(&self) {
        self.company_state.load();
        self.auth_state.load();
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub services: Rc<AppServices>,
    pub navigate: Callback<Route>,
    pub notify: Callback<Notification>,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.services, &other.services)
            && self.navigate == other.navigate
            && self.notify == other.notify
    }
}
