//! Explicit route registry.
//!
//! Routes are recorded as [`RouteBinding`]s while the axum [`Router`] is built,
//! so the table can be inspected (logging, tests) before it is served. Each
//! server builds its own table; there is no process-wide router.

use axum::{Router, handler::Handler, http::Method, routing::get};

/// A registered method + path and the capability it delegates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteBinding {
    pub method: Method,
    pub path: String,
    pub capability: &'static str,
}

#[derive(Default)]
pub struct RouteTable {
    bindings: Vec<RouteBinding>,
    router: Router,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a GET route.
    ///
    /// # Panics
    ///
    /// If `GET path` is already registered. Route tables are built once at
    /// startup, so this is a wiring bug.
    pub fn get<H, T>(&mut self, path: &str, capability: &'static str, handler: H)
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        assert!(
            !self.contains(&Method::GET, path),
            "route GET {path} is already registered"
        );

        let router = std::mem::take(&mut self.router);
        self.router = router.route(path, get(handler));
        self.bindings.push(RouteBinding {
            method: Method::GET,
            path: path.to_string(),
            capability,
        });
    }

    pub fn contains(&self, method: &Method, path: &str) -> bool {
        self.bindings
            .iter()
            .any(|b| &b.method == method && b.path == path)
    }

    pub fn bindings(&self) -> &[RouteBinding] {
        &self.bindings
    }

    /// Bindings whose path is `prefix` itself or sits below it.
    pub fn bindings_under<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a RouteBinding> + 'a {
        self.bindings.iter().filter(move |b| {
            b.path == prefix
                || b.path
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }

    pub fn into_router(self) -> Router {
        self.router
    }
}
