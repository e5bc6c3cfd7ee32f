//! Declarative route table.
//!
//! The table is an ordered list of path patterns bound to views. It is
//! composed from the top-level routes, the route lists exported by the
//! feature pages and a trailing catch-all. The first matching entry wins.

pub mod guard;

pub use guard::{guard, guard_view, GuardView, Navigation, NavigationGuard};

use crate::pages::{chat, models};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const NOT_FOUND_PATH: &str = "/:pathMatch(.*)*";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Login,
    Chat,
    Conversation,
    Models,
    NotFound,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: RouteName,
}

impl RouteDef {
    pub const fn new(path: &'static str, name: RouteName) -> Self {
        Self { path, name }
    }

    pub const fn not_found() -> Self {
        Self::new(NOT_FOUND_PATH, RouteName::NotFound)
    }

    /// `:param` matches one non-empty segment; the catch-all matches anything.
    pub fn matches(&self, path: &str) -> bool {
        if self.path == NOT_FOUND_PATH {
            return true;
        }

        let mut patternSegments = segments(self.path);
        let mut pathSegments = segments(path);
        loop {
            match (patternSegments.next(), pathSegments.next()) {
                (None, None) => return true,
                (Some(pattern), Some(actual)) => {
                    if !pattern.starts_with(':') && pattern != actual {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

pub fn route_table() -> Vec<RouteDef> {
    let mut routes = vec![
        RouteDef::new(HOME_PATH, RouteName::Home),
        RouteDef::new(LOGIN_PATH, RouteName::Login),
    ];
    routes.extend(chat::routes());
    routes.extend(models::routes());
    routes.push(RouteDef::not_found());
    routes
}

pub fn resolve(path: &str) -> RouteDef {
    route_table()
        .into_iter()
        .find(|route| route.matches(path))
        .unwrap_or_else(RouteDef::not_found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_is_home_login_features_then_catch_all() {
        let names: Vec<RouteName> = route_table().into_iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                RouteName::Home,
                RouteName::Login,
                RouteName::Chat,
                RouteName::Conversation,
                RouteName::Models,
                RouteName::NotFound,
            ]
        );
    }

    #[test]
    fn resolves_static_and_param_routes() {
        assert_eq!(resolve("/").name, RouteName::Home);
        assert_eq!(resolve("/login").name, RouteName::Login);
        assert_eq!(resolve("/chat").name, RouteName::Chat);
        assert_eq!(resolve("/chat/42").name, RouteName::Conversation);
        assert_eq!(resolve("/models/").name, RouteName::Models);
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(resolve("/xyz").name, RouteName::NotFound);
        assert_eq!(resolve("/chat/42/extra").name, RouteName::NotFound);
        assert_eq!(resolve("/loginx").name, RouteName::NotFound);
    }
}
