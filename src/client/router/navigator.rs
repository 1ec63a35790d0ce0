use super::{NotFound, Route, RouteTable, UrlFragment};

/// Resolves the address-bar fragment to a route and carries the single
/// "active route" pointer. The root component owns one instance and hands it
/// to the rest of the tree through context; nothing else writes it.
pub struct Navigator<F> {
    table: RouteTable,
    fragment: F,
    active: Option<usize>,
}

impl<F: UrlFragment> Navigator<F> {
    pub fn new(table: RouteTable, fragment: F) -> Self {
        Navigator {
            table,
            fragment,
            active: None,
        }
    }

    pub fn routes(&self) -> &[Route] {
        self.table.routes()
    }

    /// Route currently on screen, `None` while the fragment matches nothing.
    pub fn active(&self) -> Option<&Route> {
        self.active.map(|index| &self.table.routes()[index])
    }

    /// Re-resolves whatever is in the address bar. Runs once on load and
    /// again on every `hashchange`.
    pub fn sync(&mut self) -> Result<&Route, NotFound> {
        let path = self.fragment.read();
        match self.table.position(|route| route.path == path) {
            Some(index) => {
                self.active = Some(index);
                Ok(&self.table.routes()[index])
            }
            None => {
                self.active = None;
                Err(NotFound { target: path })
            }
        }
    }

    /// Switches to another route and records its path in the address bar.
    /// A target starting with `/` addresses a route by path, anything else
    /// by name. An unknown target leaves the current route in place.
    pub fn navigate(&mut self, target: &str) -> Result<&Route, NotFound> {
        let position = if target.starts_with('/') {
            self.table.position(|route| route.path == target)
        } else {
            self.table.position(|route| route.name == target)
        };
        let index = position.ok_or_else(|| NotFound {
            target: target.to_string(),
        })?;
        self.active = Some(index);
        let route = &self.table.routes()[index];
        self.fragment.write(route.path);
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use dioxus::prelude::*;

    use super::*;

    #[derive(Clone)]
    struct FakeFragment(Rc<RefCell<String>>);

    impl FakeFragment {
        fn at(path: &str) -> Self {
            FakeFragment(Rc::new(RefCell::new(path.to_string())))
        }
    }

    impl UrlFragment for FakeFragment {
        fn read(&self) -> String {
            self.0.borrow().clone()
        }

        fn write(&self, path: &str) {
            *self.0.borrow_mut() = path.to_string();
        }
    }

    fn blank(cx: Scope) -> Element {
        cx.render(rsx!(div {}))
    }

    fn navigator(fragment: FakeFragment) -> Navigator<FakeFragment> {
        let table = RouteTable::register(vec![
            Route {
                path: "/",
                name: "home",
                view: blank,
            },
            Route {
                path: "/todos",
                name: "todos",
                view: blank,
            },
            Route {
                path: "/assignees",
                name: "assignees",
                view: blank,
            },
        ])
        .unwrap();
        Navigator::new(table, fragment)
    }

    #[test]
    fn sync_resolves_the_current_fragment() {
        let fragment = FakeFragment::at("/todos");
        let mut navigator = navigator(fragment);
        assert_eq!(navigator.sync().unwrap().name, "todos");
        assert_eq!(navigator.active().unwrap().path, "/todos");
    }

    #[test]
    fn navigate_by_name_and_by_path_agree() {
        let mut by_name = navigator(FakeFragment::at("/"));
        let mut by_path = navigator(FakeFragment::at("/"));
        let name_route = by_name.navigate("home").unwrap().path;
        let path_route = by_path.navigate("/").unwrap().path;
        assert_eq!(name_route, path_route);
    }

    #[test]
    fn navigate_records_the_fragment() {
        let fragment = FakeFragment::at("/");
        let mut navigator = navigator(fragment.clone());
        navigator.sync().unwrap();
        navigator.navigate("assignees").unwrap();
        assert_eq!(navigator.active().unwrap().name, "assignees");
        assert_eq!(fragment.read(), "/assignees");
    }

    #[test]
    fn unknown_target_keeps_the_current_route() {
        let fragment = FakeFragment::at("/todos");
        let mut navigator = navigator(fragment.clone());
        navigator.sync().unwrap();
        let err = navigator.navigate("archive").err().unwrap();
        assert_eq!(err.target, "archive");
        assert_eq!(navigator.active().unwrap().name, "todos");
        assert_eq!(fragment.read(), "/todos");
    }

    #[test]
    fn junk_fragment_clears_the_active_route() {
        let fragment = FakeFragment::at("/todos");
        let mut navigator = navigator(fragment.clone());
        navigator.sync().unwrap();
        fragment.write("/nonexistent");
        assert!(navigator.sync().is_err());
        assert!(navigator.active().is_none());
    }
}
