use dioxus::prelude::*;

use ui::{AppPath, SessionProvider};
use views::{
    Access, Admin, Dashboard, Home, Login, NotFound, RecipientDashboard, Register, RequestBlood,
    Shell,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login?:role")]
        Login { role: String },
        #[route("/register?:role")]
        Register { role: String },
        #[route("/dashboard")]
        Dashboard {},
        #[route("/recipient-dashboard")]
        RecipientDashboard {},
        #[route("/request-blood")]
        RequestBlood {},
        #[route("/admin")]
        Admin {},
        #[route("/access/:role")]
        Access { role: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// The gated/navigable page this route shows, if any.
    fn app_path(&self) -> Option<AppPath> {
        match self {
            Route::Home {} => Some(AppPath::Home),
            Route::Login { .. } => Some(AppPath::Login),
            Route::Register { .. } => Some(AppPath::Register),
            Route::Dashboard {} => Some(AppPath::Dashboard),
            Route::RecipientDashboard {} => Some(AppPath::RecipientDashboard),
            Route::RequestBlood {} => Some(AppPath::RequestBlood),
            Route::Admin {} => Some(AppPath::Admin),
            Route::Access { .. } | Route::NotFound { .. } => None,
        }
    }
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(tracing::Level::INFO).ok();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_match_policy_paths() {
        let routes = [
            Route::Home {},
            Route::Dashboard {},
            Route::RecipientDashboard {},
            Route::RequestBlood {},
            Route::Admin {},
        ];
        for route in routes {
            let path = route.app_path().unwrap();
            assert_eq!(route.to_string(), path.as_str());
        }
    }

    #[test]
    fn test_login_route_carries_role_query() {
        let route: Route = "/login?role=recipient".parse().unwrap();
        assert_eq!(
            route,
            Route::Login {
                role: "recipient".to_string()
            }
        );
        assert_eq!(route.app_path(), Some(AppPath::Login));
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route: Route = "/no/such/page".parse().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
        assert_eq!(route.app_path(), None);
    }
}
