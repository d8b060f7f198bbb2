//! Navigation shell: route table, role-gated menu and auth guard.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::Resource;
use crate::models::{Animal, Cita, Factura, Propietario, Usuario, Vacuna, Veterinario};

/// Role allowed to manage system users.
pub const ADMIN_ROLE: &str = "admin";

/// A screen the shell can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Animales,
    Citas,
    Facturas,
    Propietarios,
    Usuarios,
    Vacunas,
    Veterinarios,
}

impl Route {
    /// Every entity screen, in menu order.
    pub const SCREENS: [Route; 7] = [
        Route::Animales,
        Route::Citas,
        Route::Facturas,
        Route::Propietarios,
        Route::Usuarios,
        Route::Vacunas,
        Route::Veterinarios,
    ];

    /// Resolve a path such as `/citas`. Empty and unknown paths go to login.
    pub fn resolve(path: &str) -> Route {
        path.parse().unwrap_or(Route::Login)
    }

    /// The route of an entity screen.
    pub fn for_resource<R: Resource>() -> Route {
        Route::resolve(R::PATH)
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/auth/login",
            Route::Register => "/auth/register",
            Route::Dashboard => "/dashboard",
            Route::Animales => "/animales",
            Route::Citas => "/citas",
            Route::Facturas => "/facturas",
            Route::Propietarios => "/propietarios",
            Route::Usuarios => "/usuarios",
            Route::Vacunas => "/vacunas",
            Route::Veterinarios => "/veterinarios",
        }
    }

    /// Whether the route needs an authenticated session.
    pub fn is_protected(self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }

    /// Roles allowed on this route; empty means any authenticated user.
    pub fn roles(self) -> &'static [&'static str] {
        match self {
            Route::Usuarios => &[ADMIN_ROLE],
            _ => &[],
        }
    }
}

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('/');
        let route = match trimmed {
            "auth/login" | "login" => Route::Login,
            "auth/register" | "register" => Route::Register,
            "dashboard" => Route::Dashboard,
            p if p == Animal::PATH => Route::Animales,
            p if p == Cita::PATH => Route::Citas,
            p if p == Factura::PATH => Route::Facturas,
            p if p == Propietario::PATH => Route::Propietarios,
            p if p == Usuario::PATH => Route::Usuarios,
            p if p == Vacuna::PATH => Route::Vacunas,
            p if p == Veterinario::PATH => Route::Veterinarios,
            _ => return Err(UnknownRoute(s.to_string())),
        };
        Ok(route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A path that matches no route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route '{0}'")]
pub struct UnknownRoute(pub String);

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub route: Route,
    pub title: &'static str,
    pub icon: &'static str,
}

impl MenuItem {
    /// Items without roles are visible to everyone; the rest need a match.
    pub fn is_visible_to(&self, role: Option<&str>) -> bool {
        let roles = self.route.roles();
        if roles.is_empty() {
            return true;
        }
        role.is_some_and(|r| roles.contains(&r))
    }
}

/// The full sidebar, in display order.
pub const MENU: [MenuItem; 7] = [
    MenuItem {
        route: Route::Animales,
        title: "Animales",
        icon: "pets",
    },
    MenuItem {
        route: Route::Citas,
        title: "Citas",
        icon: "event",
    },
    MenuItem {
        route: Route::Facturas,
        title: "Facturas",
        icon: "receipt_long",
    },
    MenuItem {
        route: Route::Propietarios,
        title: "Propietarios",
        icon: "person",
    },
    MenuItem {
        route: Route::Usuarios,
        title: "Usuarios",
        icon: "supervisor_account",
    },
    MenuItem {
        route: Route::Vacunas,
        title: "Vacunas",
        icon: "vaccines",
    },
    MenuItem {
        route: Route::Veterinarios,
        title: "Veterinarios",
        icon: "medical_services",
    },
];

/// Menu entries visible to a user with the given role.
pub fn menu_for(role: Option<&str>) -> Vec<MenuItem> {
    MENU.iter().copied().filter(|item| item.is_visible_to(role)).collect()
}

/// The authentication/session collaborator.
pub trait AuthService {
    fn is_authenticated(&self) -> bool;

    fn user_role(&self) -> Option<&str>;

    /// Forget the current session.
    fn logout(&mut self);
}

/// Where the guard sends a user instead of the requested route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub to: Route,
    pub reason: DenyReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    NotAuthenticated,
    MissingRole,
}

/// Decide whether a route may be entered.
///
/// Protected routes need a session; role-restricted routes also need a
/// matching role and otherwise fall back to the dashboard.
pub fn guard(route: Route, auth: &dyn AuthService) -> Result<Route, Redirect> {
    if !route.is_protected() {
        return Ok(route);
    }
    if !auth.is_authenticated() {
        debug!(%route, "guard: not authenticated");
        return Err(Redirect {
            to: Route::Login,
            reason: DenyReason::NotAuthenticated,
        });
    }
    let roles = route.roles();
    if !roles.is_empty() && !auth.user_role().is_some_and(|r| roles.contains(&r)) {
        debug!(%route, role = ?auth.user_role(), "guard: role not allowed");
        return Err(Redirect {
            to: Route::Dashboard,
            reason: DenyReason::MissingRole,
        });
    }
    Ok(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeAuth {
        role: Option<String>,
    }

    impl AuthService for FakeAuth {
        fn is_authenticated(&self) -> bool {
            self.role.is_some()
        }

        fn user_role(&self) -> Option<&str> {
            self.role.as_deref()
        }

        fn logout(&mut self) {
            self.role = None;
        }
    }

    #[test]
    fn unknown_and_empty_paths_go_to_login() {
        assert_eq!(Route::resolve(""), Route::Login);
        assert_eq!(Route::resolve("/nowhere"), Route::Login);
        assert_eq!(Route::resolve("/citas"), Route::Citas);
        assert_eq!(Route::resolve("/auth/register"), Route::Register);
        assert_eq!(Route::for_resource::<Veterinario>(), Route::Veterinarios);
    }

    #[test]
    fn users_menu_is_admin_only() {
        let titles = |role| menu_for(role).iter().map(|m| m.title).collect::<Vec<_>>();
        assert!(!titles(Some("cliente")).contains(&"Usuarios"));
        assert!(!titles(None).contains(&"Usuarios"));
        assert!(titles(Some("admin")).contains(&"Usuarios"));
        assert_eq!(titles(Some("admin")).len(), 7);
        assert_eq!(titles(None).len(), 6);
    }

    #[test]
    fn guard_redirects() {
        let mut auth = FakeAuth {
            role: Some("veterinario".into()),
        };
        assert_eq!(guard(Route::Citas, &auth), Ok(Route::Citas));
        assert_eq!(guard(Route::Usuarios, &auth).unwrap_err().to, Route::Dashboard);

        auth.logout();
        let redirect = guard(Route::Citas, &auth).unwrap_err();
        assert_eq!(redirect.to, Route::Login);
        assert_eq!(redirect.reason, DenyReason::NotAuthenticated);
        assert_eq!(guard(Route::Login, &auth), Ok(Route::Login));
        assert_eq!(guard(Route::Register, &auth), Ok(Route::Register));
    }
}
