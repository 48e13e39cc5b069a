//! Static route table for the console.
//!
//! DESIGN
//! ======
//! Routes are declared once at compile time; the guard derives all of its
//! authorization metadata from this table, so adding a protected view is
//! a table edit rather than guard surgery. Child paths are relative to
//! their parent, matching how the protected group nests under the main
//! layout.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const LINKS_PATH: &str = "/links";
pub const ADMIN_USERS_PATH: &str = "/admin/users";
pub const ADMIN_LINKS_PATH: &str = "/admin/links";

/// Paths reachable without a session.
pub const PUBLIC_PATHS: &[&str] = &[LOGIN_PATH, REGISTER_PATH];

/// Opaque reference to the component a route renders. The shell maps
/// these to actual widgets; the core never does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Register,
    /// Authenticated chrome wrapping the protected children.
    MainLayout,
    Dashboard,
    Links,
    AdminUsers,
    AdminLinks,
}

/// One entry in the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Absolute at the top level, relative to the parent for children.
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub view: Option<View>,
    /// Redirect target instead of a rendered view.
    pub redirect: Option<&'static str>,
    /// Only admin-role sessions may enter.
    pub requires_admin: bool,
    pub children: &'static [RouteDescriptor],
}

const fn page(path: &'static str, name: &'static str, view: View) -> RouteDescriptor {
    RouteDescriptor {
        path,
        name: Some(name),
        view: Some(view),
        redirect: None,
        requires_admin: false,
        children: &[],
    }
}

const fn admin_page(path: &'static str, name: &'static str, view: View) -> RouteDescriptor {
    RouteDescriptor {
        path,
        name: Some(name),
        view: Some(view),
        redirect: None,
        requires_admin: true,
        children: &[],
    }
}

const fn redirect(path: &'static str, target: &'static str) -> RouteDescriptor {
    RouteDescriptor {
        path,
        name: None,
        view: None,
        redirect: Some(target),
        requires_admin: false,
        children: &[],
    }
}

const fn layout(
    path: &'static str,
    view: View,
    children: &'static [RouteDescriptor],
) -> RouteDescriptor {
    RouteDescriptor {
        path,
        name: None,
        view: Some(view),
        redirect: None,
        requires_admin: false,
        children,
    }
}

/// The console route table: two public pages, a root redirect, and the
/// protected group nested under the main layout.
pub static ROUTES: &[RouteDescriptor] = &[
    page(LOGIN_PATH, "login", View::Login),
    page(REGISTER_PATH, "register", View::Register),
    redirect(ROOT_PATH, DASHBOARD_PATH),
    layout(
        ROOT_PATH,
        View::MainLayout,
        &[
            page("dashboard", "dashboard", View::Dashboard),
            page("links", "links", View::Links),
            admin_page("admin/users", "admin-users", View::AdminUsers),
            admin_page("admin/links", "admin-links", View::AdminLinks),
        ],
    ),
];

/// Find the renderable descriptor for an absolute `path`, descending
/// into nested children. Redirect and layout entries themselves do not
/// resolve; their targets and children do.
pub fn resolve(path: &str) -> Option<&'static RouteDescriptor> {
    resolve_in(ROUTES, "", path)
}

fn resolve_in(
    routes: &'static [RouteDescriptor],
    base: &str,
    target: &str,
) -> Option<&'static RouteDescriptor> {
    for route in routes {
        let full = join_paths(base, route.path);
        if route.redirect.is_none() && route.children.is_empty() && full == target {
            return Some(route);
        }
        if let Some(found) = resolve_in(route.children, &full, target) {
            return Some(found);
        }
    }
    None
}

fn join_paths(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else if base.ends_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Redirect target declared for `path`, if any.
pub fn redirect_target(path: &str) -> Option<&'static str> {
    ROUTES
        .iter()
        .find(|route| route.path == path)
        .and_then(|route| route.redirect)
}

/// Whether `path` is declared admin-only.
pub fn requires_admin(path: &str) -> bool {
    resolve(path).is_some_and(|route| route.requires_admin)
}

/// Whether `path` is reachable without authentication.
pub fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}
