use dioxus::prelude::*;

use remate_common::route::{self, AppRoute, Resolution};

use super::business_dashboard::BusinessDashboardView;
use super::chat_view::ChatView;
use super::consumer_dashboard::ConsumerDashboardView;
use super::impact_view::ImpactView;
use super::login_view::{LoginView, SignupView};
use super::marketplace_view::MarketplaceView;
use super::my_listings::MyListings;
use super::session_state::{restore_session, use_session};
use super::shared_state::{load_config, use_shared_state, SharedState};
use super::toast::{ToastHost, ToastState};
use super::upload_form::UploadForm;
use super::wishlist_view::WishlistView;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[layout(AppLayout)]
    #[route("/consumer/dashboard")]
    ConsumerDashboard {},
    #[route("/consumer/upload")]
    ConsumerUpload {},
    #[route("/consumer/listings")]
    ConsumerListings {},
    #[route("/consumer/impact")]
    ConsumerImpact {},
    #[route("/business/dashboard")]
    BusinessDashboard {},
    #[route("/business/marketplace")]
    BusinessMarketplace {},
    #[route("/business/wishlist")]
    BusinessWishlist {},
    #[route("/business/impact")]
    BusinessImpact {},
    #[route("/chat")]
    Chat {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// The router-independent route this page corresponds to.
    pub fn app_route(&self) -> AppRoute {
        match self {
            Route::Root {} => AppRoute::Root,
            Route::Login {} => AppRoute::Login,
            Route::Signup {} => AppRoute::Signup,
            Route::ConsumerDashboard {} => AppRoute::ConsumerDashboard,
            Route::ConsumerUpload {} => AppRoute::ConsumerUpload,
            Route::ConsumerListings {} => AppRoute::ConsumerListings,
            Route::ConsumerImpact {} => AppRoute::ConsumerImpact,
            Route::BusinessDashboard {} => AppRoute::BusinessDashboard,
            Route::BusinessMarketplace {} => AppRoute::BusinessMarketplace,
            Route::BusinessWishlist {} => AppRoute::BusinessWishlist,
            Route::BusinessImpact {} => AppRoute::BusinessImpact,
            Route::Chat {} => AppRoute::Chat,
            Route::NotFound { segments } => AppRoute::NotFound(format!("/{}", segments.join("/"))),
        }
    }
}

impl From<&AppRoute> for Route {
    fn from(route: &AppRoute) -> Self {
        match route {
            AppRoute::Root => Route::Root {},
            AppRoute::Login => Route::Login {},
            AppRoute::Signup => Route::Signup {},
            AppRoute::ConsumerDashboard => Route::ConsumerDashboard {},
            AppRoute::ConsumerUpload => Route::ConsumerUpload {},
            AppRoute::ConsumerListings => Route::ConsumerListings {},
            AppRoute::ConsumerImpact => Route::ConsumerImpact {},
            AppRoute::BusinessDashboard => Route::BusinessDashboard {},
            AppRoute::BusinessMarketplace => Route::BusinessMarketplace {},
            AppRoute::BusinessWishlist => Route::BusinessWishlist {},
            AppRoute::BusinessImpact => Route::BusinessImpact {},
            AppRoute::Chat => Route::Chat {},
            AppRoute::NotFound(path) => Route::NotFound {
                segments: path
                    .split('/')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            },
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);
    let session_key = config.session_key.clone();
    use_context_provider(|| Signal::new(restore_session(&session_key)));
    use_context_provider(|| Signal::new(SharedState::new(config)));
    use_context_provider(|| Signal::new(ToastState::default()));

    rsx! {
        Router::<Route> {}
        ToastHost {}
    }
}

/// Shell for every page that needs a logged-in user: gate, nav bar, outlet.
#[component]
fn AppLayout() -> Element {
    let mut session = use_session();
    let shared_state = use_shared_state();
    let nav = use_navigator();
    let current_route = use_route::<Route>();

    let resolution = route::resolve(current_route.app_route(), session.read().current());
    if let Resolution::Redirect(target) = resolution {
        tracing::debug!(from = %current_route, to = target.path(), "redirecting");
        nav.replace(Route::from(&target));
        return rsx! {};
    }

    let Some(user) = session.read().current().cloned() else {
        return rsx! {};
    };
    let brand = shared_state.read().config.brand.clone();
    let home = Route::from(&route::home(user.role));
    let items = route::nav_items(user.role);
    let verified_mark = if user.is_verified() { " ✓" } else { "" };

    rsx! {
        div { class: "remate-app",
            header { class: "app-header",
                button {
                    class: "brand",
                    onclick: move |_| { nav.push(home.clone()); },
                    "{brand}"
                }
                nav {
                    for item in items {
                        {
                            let target = Route::from(&item.route);
                            let class = if target == current_route { "nav-item active" } else { "nav-item" };
                            rsx! {
                                button {
                                    key: "{item.label}",
                                    class: "{class}",
                                    onclick: move |_| { nav.push(target.clone()); },
                                    "{item.label}"
                                }
                            }
                        }
                    }
                }
                div { class: "user-info",
                    button {
                        onclick: move |_| { nav.push(Route::Chat {}); },
                        "Messages"
                    }
                    span { class: "user-name", "{user.name}" }
                    span { class: "user-role", " [{user.role}{verified_mark}]" }
                    button {
                        onclick: move |_| {
                            session.write().logout();
                            nav.push(Route::Login {});
                        },
                        "Log out"
                    }
                }
            }
            main {
                Outlet::<Route> {}
            }
        }
    }
}

/// Route component: redirects `/` to the login page.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    if let Resolution::Redirect(target) = route::resolve(AppRoute::Root, None) {
        nav.replace(Route::from(&target));
    }
    rsx! {}
}

/// Route component: renders the login form.
#[component]
fn Login() -> Element {
    rsx! { LoginView {} }
}

/// Route component: renders the signup form.
#[component]
fn Signup() -> Element {
    rsx! { SignupView {} }
}

/// Route component: renders the consumer dashboard.
#[component]
fn ConsumerDashboard() -> Element {
    rsx! { ConsumerDashboardView {} }
}

/// Route component: renders the listing upload form.
#[component]
fn ConsumerUpload() -> Element {
    rsx! { UploadForm {} }
}

/// Route component: renders the consumer's own listings.
#[component]
fn ConsumerListings() -> Element {
    rsx! { MyListings {} }
}

/// Route component: renders the impact page for a consumer.
#[component]
fn ConsumerImpact() -> Element {
    rsx! { ImpactView {} }
}

/// Route component: renders the business dashboard.
#[component]
fn BusinessDashboard() -> Element {
    rsx! { BusinessDashboardView {} }
}

/// Route component: renders the marketplace browser.
#[component]
fn BusinessMarketplace() -> Element {
    rsx! { MarketplaceView {} }
}

/// Route component: renders the wishlist editor.
#[component]
fn BusinessWishlist() -> Element {
    rsx! { WishlistView {} }
}

/// Route component: renders the impact page for a business.
#[component]
fn BusinessImpact() -> Element {
    rsx! { ImpactView {} }
}

/// Route component: renders conversations and the open thread.
#[component]
fn Chat() -> Element {
    rsx! { ChatView {} }
}

/// Route component: renders a 404 for any unmatched path.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let path = format!("/{}", segments.join("/"));
    rsx! {
        div { class: "not-found",
            h1 { "404" }
            p { "No page at {path}" }
            button {
                onclick: move |_| { nav.push(Route::Root {}); },
                "Return to Home"
            }
        }
    }
}
