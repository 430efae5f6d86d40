//! URL path segmenting.
//!
//! Routing peels one segment at a time off the request path:
//!
//! ```
//! use quill_core::path::shift_path;
//!
//! assert_eq!(shift_path("/api/posts/42/"), ("api".to_string(), "/posts/42".to_string()));
//! assert_eq!(shift_path("/posts"), ("posts".to_string(), "/".to_string()));
//! assert_eq!(shift_path(""), (String::new(), "/".to_string()));
//! ```

/// Lexically normalizes a URL path.
///
/// The result always starts with `/`, has no empty, `.` or `..` segments and
/// no trailing slash (except for the root itself). `..` at the root stays at
/// the root.
pub fn normalize(path: &str) -> String {
    let mut stack: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other),
        }
    }

    if stack.is_empty() {
        return "/".to_string();
    }

    let mut normalized = String::with_capacity(path.len() + 1);
    for segment in stack {
        normalized.push('/');
        normalized.push_str(segment);
    }
    normalized
}

/// Splits a path into its first segment and the remaining tail.
///
/// `head` never contains a slash; `tail` begins with `/` and is exactly `"/"`
/// once nothing remains.
pub fn shift_path(path: &str) -> (String, String) {
    let normalized = normalize(path);

    match normalized[1..].find('/') {
        None => (normalized[1..].to_string(), "/".to_string()),
        Some(i) => {
            let split = i + 1;
            (
                normalized[1..split].to_string(),
                normalized[split..].to_string(),
            )
        }
    }
}

/// Peels every segment off `path` in order.
pub fn segments(path: &str) -> Vec<String> {
    let mut out = Vec::new();
    let (mut head, mut tail) = shift_path(path);

    while !head.is_empty() {
        out.push(head);
        (head, tail) = shift_path(&tail);
    }

    out
}
