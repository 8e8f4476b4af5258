//! Sidebar Menu
//!
//! Static navigation tree and active-route matching.

use std::collections::{BTreeMap, HashSet};

use url::Url;

/// One entry in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub icon: &'static str,
    /// `None` for entries that only open a submenu
    pub route: Option<&'static str>,
    pub children: &'static [MenuItem],
}

impl MenuItem {
    const fn link(label: &'static str, icon: &'static str, route: &'static str) -> Self {
        Self {
            label,
            icon,
            route: Some(route),
            children: &[],
        }
    }

    const fn group(label: &'static str, icon: &'static str, children: &'static [MenuItem]) -> Self {
        Self {
            label,
            icon,
            route: None,
            children,
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether this item or any descendant is active for `current`
    pub fn contains_active(&self, current: &str) -> bool {
        self.route.is_some_and(|route| is_active(route, current))
            || self.children.iter().any(|child| child.contains_active(current))
    }
}

pub const DASHBOARD_ROUTE: &str = "/dashboard";
pub const AFTERNOON_SHIFT_ROUTE: &str = "/afternoon-shift";
pub const ADD_USER_ROUTE: &str = "/users/new";
pub const SETTINGS_ROUTE: &str = "/settings";

const FLEET_MENU: &[MenuItem] = &[MenuItem::link("Afternoon Shift", "🌇", AFTERNOON_SHIFT_ROUTE)];

const USERS_MENU: &[MenuItem] = &[MenuItem::link("Add User", "➕", ADD_USER_ROUTE)];

/// Sidebar navigation tree
pub const MENU: &[MenuItem] = &[
    MenuItem::link("Dashboard", "📊", DASHBOARD_ROUTE),
    MenuItem::group("Fleet", "🚚", FLEET_MENU),
    MenuItem::group("Users", "👤", USERS_MENU),
    MenuItem::link("Settings", "⚙️", SETTINGS_ROUTE),
];

#[derive(Debug, PartialEq)]
struct RouteKey {
    segments: Vec<String>,
    query: BTreeMap<String, Vec<String>>,
}

fn route_key(route: &str) -> Option<RouteKey> {
    let base = Url::parse("http://localhost/").ok()?;
    let url = base.join(route).ok()?;

    // Matrix parameters ride on each segment after ';'
    let segments = url
        .path_segments()
        .map(|segments| {
            segments
                .map(|segment| segment.split(';').next().unwrap_or_default().to_string())
                .filter(|segment| !segment.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let mut query: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (key, value) in url.query_pairs() {
        query.entry(key.into_owned()).or_default().push(value.into_owned());
    }

    Some(RouteKey { segments, query })
}

/// Exact match on path and query parameters; fragment and matrix
/// parameters are ignored.
pub fn is_active(route: &str, current: &str) -> bool {
    match (route_key(route), route_key(current)) {
        (Some(route), Some(current)) => route == current,
        _ => false,
    }
}

/// Rebuild the current location from router parts.
///
/// The router hands out `search` without its leading `?`.
pub fn current_url(pathname: &str, search: &str) -> String {
    if search.is_empty() {
        pathname.to_string()
    } else {
        format!("{}?{}", pathname, search)
    }
}

/// Open/closed state of sidebar submenus, keyed by label
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenMenus(HashSet<&'static str>);

impl OpenMenus {
    pub fn toggle(&mut self, menu: &'static str) {
        if !self.0.remove(menu) {
            self.0.insert(menu);
        }
    }

    pub fn is_open(&self, menu: &str) -> bool {
        self.0.contains(menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_path() {
        assert!(is_active("/dashboard", "/dashboard"));
        assert!(!is_active("/dashboard", "/dashboard/details"));
        assert!(!is_active("/users", "/users/new"));
    }

    #[test]
    fn test_trailing_slash_ignored() {
        assert!(is_active("/dashboard", "/dashboard/"));
    }

    #[test]
    fn test_fragment_ignored() {
        assert!(is_active("/dashboard", "/dashboard#charts"));
    }

    #[test]
    fn test_matrix_params_ignored() {
        assert!(is_active("/dashboard", "/dashboard;view=grid"));
        assert!(is_active("/users/new", "/users;tab=2/new#top"));
    }

    #[test]
    fn test_query_params_exact() {
        assert!(!is_active("/dashboard", "/dashboard?tab=2"));
        assert!(is_active("/dashboard?tab=2", "/dashboard?tab=2"));
        assert!(!is_active("/dashboard?tab=2", "/dashboard?tab=3"));
    }

    #[test]
    fn test_query_order_irrelevant() {
        assert!(is_active("/afternoon-shift?a=1&b=2", "/afternoon-shift?b=2&a=1"));
    }

    #[test]
    fn test_group_contains_active_child() {
        let fleet = MENU.iter().find(|item| item.label == "Fleet").unwrap();
        assert!(fleet.has_children());
        assert!(fleet.contains_active("/afternoon-shift"));
        assert!(!fleet.contains_active("/dashboard"));
    }

    #[test]
    fn test_every_route_is_reachable() {
        fn routes(items: &[MenuItem], out: &mut Vec<&'static str>) {
            for item in items {
                out.extend(item.route);
                routes(item.children, out);
            }
        }
        let mut all = Vec::new();
        routes(MENU, &mut all);
        assert_eq!(
            all,
            [DASHBOARD_ROUTE, AFTERNOON_SHIFT_ROUTE, ADD_USER_ROUTE, SETTINGS_ROUTE]
        );
    }

    #[test]
    fn test_open_menus_toggle() {
        let mut open = OpenMenus::default();
        assert!(!open.is_open("Fleet"));
        open.toggle("Fleet");
        assert!(open.is_open("Fleet"));
        assert!(!open.is_open("Users"));
        open.toggle("Fleet");
        assert!(!open.is_open("Fleet"));
    }

    #[test]
    fn test_current_url_keeps_query_separate() {
        assert_eq!(current_url("/dashboard", ""), "/dashboard");
        assert_eq!(current_url("/dashboard", "tab=2"), "/dashboard?tab=2");

        assert!(is_active("/dashboard?tab=2", &current_url("/dashboard", "tab=2")));
        assert!(!is_active(ADD_USER_ROUTE, &current_url("/users/", "new")));
        assert!(!is_active(DASHBOARD_ROUTE, &current_url("/dashboard", "tab=2")));
    }
}
