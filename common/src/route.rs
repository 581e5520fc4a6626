use crate::identity::{Identity, Role};

/// Every page the shell can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Root,
    Login,
    Signup,
    ConsumerDashboard,
    ConsumerUpload,
    ConsumerListings,
    ConsumerImpact,
    BusinessDashboard,
    BusinessMarketplace,
    BusinessWishlist,
    BusinessImpact,
    Chat,
    NotFound(String),
}

impl AppRoute {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => AppRoute::Root,
            "/login" => AppRoute::Login,
            "/signup" => AppRoute::Signup,
            "/consumer/dashboard" => AppRoute::ConsumerDashboard,
            "/consumer/upload" => AppRoute::ConsumerUpload,
            "/consumer/listings" => AppRoute::ConsumerListings,
            "/consumer/impact" => AppRoute::ConsumerImpact,
            "/business/dashboard" => AppRoute::BusinessDashboard,
            "/business/marketplace" => AppRoute::BusinessMarketplace,
            "/business/wishlist" => AppRoute::BusinessWishlist,
            "/business/impact" => AppRoute::BusinessImpact,
            "/chat" => AppRoute::Chat,
            _ => AppRoute::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            AppRoute::Root => "/",
            AppRoute::Login => "/login",
            AppRoute::Signup => "/signup",
            AppRoute::ConsumerDashboard => "/consumer/dashboard",
            AppRoute::ConsumerUpload => "/consumer/upload",
            AppRoute::ConsumerListings => "/consumer/listings",
            AppRoute::ConsumerImpact => "/consumer/impact",
            AppRoute::BusinessDashboard => "/business/dashboard",
            AppRoute::BusinessMarketplace => "/business/marketplace",
            AppRoute::BusinessWishlist => "/business/wishlist",
            AppRoute::BusinessImpact => "/business/impact",
            AppRoute::Chat => "/chat",
            AppRoute::NotFound(path) => path,
        }
    }

    /// Whether the page needs a logged-in user.
    pub fn requires_session(&self) -> bool {
        !matches!(
            self,
            AppRoute::Root | AppRoute::Login | AppRoute::Signup | AppRoute::NotFound(_)
        )
    }
}

/// What the shell should do for a requested route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(AppRoute),
    Redirect(AppRoute),
}

/// Gate a route on session presence. Roles are not enforced: a consumer may
/// open business pages by URL, as any logged-in user may.
pub fn resolve(route: AppRoute, session: Option<&Identity>) -> Resolution {
    match route {
        AppRoute::Root => Resolution::Redirect(AppRoute::Login),
        r if r.requires_session() && session.is_none() => Resolution::Redirect(AppRoute::Login),
        r => Resolution::Render(r),
    }
}

/// Landing page after login.
pub fn home(role: Role) -> AppRoute {
    match role {
        Role::Consumer => AppRoute::ConsumerDashboard,
        Role::Business => AppRoute::BusinessDashboard,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub route: AppRoute,
    pub label: &'static str,
}

/// Navigation bar entries for a role.
pub fn nav_items(role: Role) -> Vec<NavItem> {
    let item = |route, label| NavItem { route, label };
    match role {
        Role::Consumer => vec![
            item(AppRoute::ConsumerDashboard, "Dashboard"),
            item(AppRoute::ConsumerUpload, "Upload"),
            item(AppRoute::ConsumerListings, "My Listings"),
            item(AppRoute::ConsumerImpact, "Impact"),
        ],
        Role::Business => vec![
            item(AppRoute::BusinessDashboard, "Dashboard"),
            item(AppRoute::BusinessMarketplace, "Marketplace"),
            item(AppRoute::BusinessWishlist, "Wishlist"),
            item(AppRoute::BusinessImpact, "Impact"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use crate::identity::UserId;

    use super::*;

    fn consumer() -> Identity {
        Identity {
            id: UserId::new("c123"),
            name: "Aarav Mehta".into(),
            email: "aarav.mehta@gmail.com".into(),
            role: Role::Consumer,
            location: None,
            verified: None,
        }
    }

    #[test]
    fn paths_round_trip() {
        for role in Role::all() {
            for item in nav_items(*role) {
                assert_eq!(AppRoute::parse(item.route.path()), item.route);
            }
        }
        assert_eq!(AppRoute::parse("/chat/"), AppRoute::Chat);
        assert_eq!(AppRoute::parse("/"), AppRoute::Root);
    }

    #[test]
    fn unknown_path_is_not_found() {
        let route = AppRoute::parse("/consumer/matches");
        assert_eq!(route, AppRoute::NotFound("/consumer/matches".into()));
        assert_eq!(
            resolve(route.clone(), None),
            Resolution::Render(route)
        );
    }

    #[test]
    fn root_redirects_to_login() {
        let user = consumer();
        assert_eq!(resolve(AppRoute::Root, None), Resolution::Redirect(AppRoute::Login));
        assert_eq!(
            resolve(AppRoute::Root, Some(&user)),
            Resolution::Redirect(AppRoute::Login)
        );
    }

    #[test]
    fn gated_routes_need_a_session() {
        let user = consumer();
        assert_eq!(
            resolve(AppRoute::Chat, None),
            Resolution::Redirect(AppRoute::Login)
        );
        assert_eq!(
            resolve(AppRoute::BusinessWishlist, Some(&user)),
            Resolution::Render(AppRoute::BusinessWishlist)
        );
        assert_eq!(
            resolve(AppRoute::Login, None),
            Resolution::Render(AppRoute::Login)
        );
    }

    #[test]
    fn home_follows_role() {
        assert_eq!(home(Role::Business), AppRoute::BusinessDashboard);
        assert_eq!(home(Role::Consumer), AppRoute::ConsumerDashboard);
    }
}
