//! Segment trie mapping `(method, path)` to handlers.
//!
//! Patterns are written as `/posts/:id`. A `:name` segment captures any
//! single path segment; literal segments take priority over captures at the
//! same depth. Paths are normalized before matching, so `/posts/./1/` and
//! `/posts/1` resolve to the same leaf.

use std::collections::BTreeMap;

use actix_web::http::Method;
use quill_core::path::shift_path;

/// Why a lookup did not produce a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    NotFound,
    MethodNotAllowed { allowed: Vec<Method> },
}

/// A resolved route: the handler plus captured segments in path order.
#[derive(Debug)]
pub struct Match<'a, H> {
    pub handler: &'a H,
    pub params: Vec<String>,
}

struct Node<H> {
    literals: BTreeMap<&'static str, Node<H>>,
    param: Option<(&'static str, Box<Node<H>>)>,
    handlers: Vec<(Method, H)>,
}

impl<H> Node<H> {
    fn new() -> Self {
        Self {
            literals: BTreeMap::new(),
            param: None,
            handlers: Vec::new(),
        }
    }

    fn collect(&self, prefix: &str, out: &mut Vec<(Method, String)>) {
        let here = if prefix.is_empty() { "/" } else { prefix };
        for (method, _) in &self.handlers {
            out.push((method.clone(), here.to_string()));
        }
        for (segment, child) in &self.literals {
            child.collect(&format!("{prefix}/{segment}"), out);
        }
        if let Some((name, child)) = &self.param {
            child.collect(&format!("{prefix}/:{name}"), out);
        }
    }
}

/// Routing table for one URL tree.
pub struct RouteTree<H> {
    root: Node<H>,
}

impl<H> Default for RouteTree<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouteTree<H> {
    pub fn new() -> Self {
        Self { root: Node::new() }
    }

    /// Register `handler` for `method` on `pattern`.
    ///
    /// # Panics
    ///
    /// Registering the same method twice on one pattern, or two differently
    /// named captures at the same depth, is a programming error.
    pub fn route(mut self, method: Method, pattern: &'static str, handler: H) -> Self {
        let mut node = &mut self.root;

        for segment in pattern.split('/').filter(|s| !s.is_empty()) {
            node = match segment.strip_prefix(':') {
                Some(name) => {
                    let (existing, child) = node
                        .param
                        .get_or_insert_with(|| (name, Box::new(Node::new())));
                    assert_eq!(
                        *existing, name,
                        "conflicting captures `:{existing}` and `:{name}` in `{pattern}`"
                    );
                    child.as_mut()
                }
                None => node.literals.entry(segment).or_insert_with(Node::new),
            };
        }

        assert!(
            node.handlers.iter().all(|(m, _)| *m != method),
            "duplicate route {method} {pattern}"
        );
        node.handlers.push((method, handler));
        self
    }

    /// Resolve a request path.
    pub fn lookup(&self, method: &Method, path: &str) -> Result<Match<'_, H>, RouteError> {
        let mut node = &self.root;
        let mut params = Vec::new();
        let (mut head, mut tail) = shift_path(path);

        while !head.is_empty() {
            node = match node.literals.get(head.as_str()) {
                Some(child) => child,
                None => match &node.param {
                    Some((_, child)) => {
                        params.push(head);
                        child
                    }
                    None => return Err(RouteError::NotFound),
                },
            };
            (head, tail) = shift_path(&tail);
        }

        if node.handlers.is_empty() {
            return Err(RouteError::NotFound);
        }

        match node.handlers.iter().find(|(m, _)| m == method) {
            Some((_, handler)) => Ok(Match { handler, params }),
            None => Err(RouteError::MethodNotAllowed {
                allowed: node.handlers.iter().map(|(m, _)| m.clone()).collect(),
            }),
        }
    }

    /// Every registered `(method, pattern)` pair, literals before captures.
    pub fn routes(&self) -> Vec<(Method, String)> {
        let mut out = Vec::new();
        self.root.collect("", &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> RouteTree<&'static str> {
        RouteTree::new()
            .route(Method::GET, "/", "home")
            .route(Method::GET, "/posts", "list")
            .route(Method::POST, "/posts", "create")
            .route(Method::GET, "/posts/:id", "show")
            .route(Method::PUT, "/posts/:id", "update")
            .route(Method::GET, "/posts/latest", "latest")
    }

    #[test]
    fn test_root() {
        let tree = tree();
        let found = tree.lookup(&Method::GET, "/").unwrap();
        assert_eq!(*found.handler, "home");
        assert!(found.params.is_empty());

        assert_eq!(*tree.lookup(&Method::GET, "").unwrap().handler, "home");
    }

    #[test]
    fn test_capture() {
        let tree = tree();
        let found = tree.lookup(&Method::PUT, "/posts/500000123").unwrap();
        assert_eq!(*found.handler, "update");
        assert_eq!(found.params, vec!["500000123".to_string()]);
    }

    #[test]
    fn test_literal_wins_over_capture() {
        let tree = tree();
        let found = tree.lookup(&Method::GET, "/posts/latest").unwrap();
        assert_eq!(*found.handler, "latest");
        assert!(found.params.is_empty());
    }

    #[test]
    fn test_path_is_normalized() {
        let tree = tree();
        assert_eq!(*tree.lookup(&Method::GET, "//posts/./").unwrap().handler, "list");
        assert_eq!(
            tree.lookup(&Method::GET, "/posts/x/../7").unwrap().params,
            vec!["7".to_string()]
        );
    }

    #[test]
    fn test_extra_segments_not_found() {
        let tree = tree();
        assert_eq!(
            tree.lookup(&Method::GET, "/posts/1/comments").unwrap_err(),
            RouteError::NotFound
        );
        assert_eq!(
            tree.lookup(&Method::GET, "/nothing").unwrap_err(),
            RouteError::NotFound
        );
    }

    #[test]
    fn test_method_not_allowed_lists_methods() {
        let tree = tree();
        let err = tree.lookup(&Method::DELETE, "/posts").unwrap_err();
        assert_eq!(
            err,
            RouteError::MethodNotAllowed {
                allowed: vec![Method::GET, Method::POST]
            }
        );
    }

    #[test]
    fn test_routes_enumerated() {
        let routes = tree().routes();
        assert_eq!(
            routes,
            vec![
                (Method::GET, "/".to_string()),
                (Method::GET, "/posts".to_string()),
                (Method::POST, "/posts".to_string()),
                (Method::GET, "/posts/latest".to_string()),
                (Method::GET, "/posts/:id".to_string()),
                (Method::PUT, "/posts/:id".to_string()),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "duplicate route")]
    fn test_duplicate_route_panics() {
        let _ = RouteTree::new()
            .route(Method::GET, "/a", 1)
            .route(Method::GET, "/a", 2);
    }
}
