use classstruct_core::{Navigate, NavigationRequest, ScreenId};
use dioxus::prelude::*;

use crate::pages::{Login, PreLogin, Register};
use crate::theme::GLOBAL_STYLES;

/// Application routes, one per entry of the route table.
///
/// - `/` - Onboarding screen, mounted on start
/// - `/login` - Reserved, no screen yet
/// - `/register` - Reserved, no screen yet
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    PreLogin {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
}

impl From<ScreenId> for Route {
    fn from(screen: ScreenId) -> Self {
        match screen {
            ScreenId::PreLogin => Route::PreLogin {},
            ScreenId::Login => Route::Login {},
            ScreenId::Register => Route::Register {},
        }
    }
}

impl Route {
    pub fn screen(&self) -> ScreenId {
        match self {
            Route::PreLogin {} => ScreenId::PreLogin,
            Route::Login {} => ScreenId::Login,
            Route::Register {} => ScreenId::Register,
        }
    }
}

/// Resolves screen navigation requests by pushing onto the router stack.
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    navigator: Navigator,
}

impl RouterNavigator {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

impl Navigate for RouterNavigator {
    fn request_navigation(&self, request: NavigationRequest) {
        if !request.target.is_implemented() {
            tracing::warn!("'{}' has no screen yet, showing placeholder", request.target);
        }
        self.navigator.push(Route::from(request.target));
    }
}

/// Root application component.
///
/// Provides global styles, shell settings, the safe-area boundary and
/// routing. No screen gets header chrome.
#[component]
pub fn App() -> Element {
    use_context_provider(crate::get_shell_context);

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "safe-area",
            Router::<Route> {}
        }
    }
}
