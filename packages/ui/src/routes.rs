//! Route policy: which role may see which page, where everyone else is sent,
//! and which links the navbar shows.
//!
//! Everything here is a pure function of the path and the signed-in role, so
//! the rules are tested without mounting a router.

use store::Role;

/// Pages of the app that take part in role gating or navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppPath {
    Home,
    Login,
    Register,
    Dashboard,
    RecipientDashboard,
    RequestBlood,
    Admin,
}

impl AppPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppPath::Home => "/",
            AppPath::Login => "/login",
            AppPath::Register => "/register",
            AppPath::Dashboard => "/dashboard",
            AppPath::RecipientDashboard => "/recipient-dashboard",
            AppPath::RequestBlood => "/request-blood",
            AppPath::Admin => "/admin",
        }
    }

    /// Path with a `?role=` preselection, for the sign-in and sign-up pages.
    pub fn with_role(&self, role: Role) -> String {
        format!("{}?role={}", self.as_str(), role.as_str())
    }
}

/// Outcome of visiting a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(AppPath),
}

/// Where a signed-in user lands after login or registration.
pub fn home_for(role: Role) -> AppPath {
    match role {
        Role::Admin => AppPath::Admin,
        Role::Donor | Role::Recipient => AppPath::Dashboard,
    }
}

/// The dashboard that belongs to a role.
pub fn dashboard_for(role: Role) -> AppPath {
    match role {
        Role::Donor => AppPath::Dashboard,
        Role::Recipient => AppPath::RecipientDashboard,
        Role::Admin => AppPath::Admin,
    }
}

/// Decide whether `role` (or an anonymous visitor) may see `path`.
pub fn resolve(path: AppPath, role: Option<Role>) -> Access {
    match (path, role) {
        (AppPath::Home | AppPath::RequestBlood, _) => Access::Allow,
        (AppPath::Login | AppPath::Register, None) => Access::Allow,
        (AppPath::Login | AppPath::Register, Some(role)) => Access::Redirect(home_for(role)),
        (AppPath::Dashboard | AppPath::RecipientDashboard | AppPath::Admin, None) => {
            Access::Redirect(AppPath::Login)
        }
        (AppPath::Dashboard, Some(Role::Donor))
        | (AppPath::RecipientDashboard, Some(Role::Recipient))
        | (AppPath::Admin, Some(Role::Admin)) => Access::Allow,
        (AppPath::Dashboard | AppPath::RecipientDashboard | AppPath::Admin, Some(role)) => {
            Access::Redirect(dashboard_for(role))
        }
    }
}

/// A navbar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: AppPath,
}

/// Links shown in the navbar for a role.
pub fn nav_links(role: Option<Role>) -> Vec<NavLink> {
    let mut links = vec![
        NavLink {
            label: "Home",
            path: AppPath::Home,
        },
        NavLink {
            label: "Request Blood",
            path: AppPath::RequestBlood,
        },
    ];
    match role {
        None => {}
        Some(Role::Donor) => links.push(NavLink {
            label: "Dashboard",
            path: AppPath::Dashboard,
        }),
        Some(Role::Recipient) => links.push(NavLink {
            label: "Dashboard",
            path: AppPath::RecipientDashboard,
        }),
        Some(Role::Admin) => links.push(NavLink {
            label: "Admin Panel",
            path: AppPath::Admin,
        }),
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_is_sent_to_login() {
        for path in [AppPath::Dashboard, AppPath::RecipientDashboard, AppPath::Admin] {
            assert_eq!(resolve(path, None), Access::Redirect(AppPath::Login));
        }
    }

    #[test]
    fn test_dashboard_by_role() {
        assert_eq!(resolve(AppPath::Dashboard, Some(Role::Donor)), Access::Allow);
        assert_eq!(
            resolve(AppPath::Dashboard, Some(Role::Recipient)),
            Access::Redirect(AppPath::RecipientDashboard)
        );
        assert_eq!(
            resolve(AppPath::Dashboard, Some(Role::Admin)),
            Access::Redirect(AppPath::Admin)
        );
    }

    #[test]
    fn test_role_pages_turn_away_other_roles() {
        assert_eq!(
            resolve(AppPath::RecipientDashboard, Some(Role::Recipient)),
            Access::Allow
        );
        assert_eq!(
            resolve(AppPath::RecipientDashboard, Some(Role::Donor)),
            Access::Redirect(AppPath::Dashboard)
        );
        assert_eq!(resolve(AppPath::Admin, Some(Role::Admin)), Access::Allow);
        assert_eq!(
            resolve(AppPath::Admin, Some(Role::Recipient)),
            Access::Redirect(AppPath::RecipientDashboard)
        );
    }

    #[test]
    fn test_signed_in_users_skip_login_and_register() {
        for path in [AppPath::Login, AppPath::Register] {
            assert_eq!(resolve(path, None), Access::Allow);
            assert_eq!(
                resolve(path, Some(Role::Admin)),
                Access::Redirect(AppPath::Admin)
            );
            assert_eq!(
                resolve(path, Some(Role::Donor)),
                Access::Redirect(AppPath::Dashboard)
            );
            assert_eq!(
                resolve(path, Some(Role::Recipient)),
                Access::Redirect(AppPath::Dashboard)
            );
        }
    }

    #[test]
    fn test_open_pages() {
        for role in [None, Some(Role::Donor), Some(Role::Recipient), Some(Role::Admin)] {
            assert_eq!(resolve(AppPath::Home, role), Access::Allow);
            assert_eq!(resolve(AppPath::RequestBlood, role), Access::Allow);
        }
    }

    #[test]
    fn test_nav_links_per_role() {
        let paths = |role| nav_links(role).into_iter().map(|l| l.path).collect::<Vec<_>>();
        assert_eq!(paths(None), vec![AppPath::Home, AppPath::RequestBlood]);
        assert_eq!(paths(Some(Role::Donor))[2], AppPath::Dashboard);
        assert_eq!(paths(Some(Role::Recipient))[2], AppPath::RecipientDashboard);
        assert_eq!(nav_links(Some(Role::Admin))[2].label, "Admin Panel");
    }

    #[test]
    fn test_with_role_query() {
        assert_eq!(AppPath::Login.with_role(Role::Recipient), "/login?role=recipient");
    }
}
