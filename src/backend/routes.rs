//! Named backend routes
//!
//! Callers refer to endpoints by route name; this table turns a name plus
//! its parameters into an HTTP verb and a path.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Patch,
    Delete,
}

impl Verb {
    pub fn as_method(&self) -> reqwest::Method {
        match self {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Patch => reqwest::Method::PATCH,
            Verb::Delete => reqwest::Method::DELETE,
        }
    }

    /// Whether requests with this verb carry a JSON body
    pub fn has_body(&self) -> bool {
        matches!(self, Verb::Post | Verb::Patch)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("unknown route '{0}'")]
    Unknown(String),
    #[error("route '{route}' is missing parameter '{param}'")]
    MissingParam { route: String, param: String },
}

const ROUTES: &[(&str, Verb, &str)] = &[
    ("admin.users.index", Verb::Get, "/admin/users"),
    ("admin.users.store", Verb::Post, "/admin/users"),
    ("admin.users.update", Verb::Patch, "/admin/users/{id}"),
    ("admin.users.destroy", Verb::Delete, "/admin/users/{id}"),
    ("admin.orders.index", Verb::Get, "/admin/orders"),
    ("admin.orders.status", Verb::Patch, "/admin/orders/{id}/status"),
    ("admin.orders.cancel", Verb::Patch, "/admin/orders/{id}/cancel"),
    ("admin.legal.index", Verb::Get, "/admin/legal"),
    ("admin.legal.update", Verb::Patch, "/admin/legal/{slug}"),
    ("admin.catalog.index", Verb::Get, "/admin/catalog"),
    ("admin.uploads.image", Verb::Post, "/admin/uploads/image"),
];

/// A route name with its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    name: &'static str,
    params: Vec<(&'static str, String)>,
}

impl Route {
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            params: Vec::new(),
        }
    }

    /// Bind a `{key}` placeholder
    pub fn with(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Resolve to a verb and a path relative to the backend base URL
    pub fn resolve(&self) -> Result<(Verb, String), RouteError> {
        let (_, verb, template) = ROUTES
            .iter()
            .find(|(name, _, _)| *name == self.name)
            .ok_or_else(|| RouteError::Unknown(self.name.to_string()))?;

        let mut path = String::with_capacity(template.len());
        for segment in template.split('/').skip(1) {
            path.push('/');
            match segment
                .strip_prefix('{')
                .and_then(|s| s.strip_suffix('}'))
            {
                Some(param) => {
                    let value = self
                        .params
                        .iter()
                        .find(|(key, _)| *key == param)
                        .map(|(_, value)| value)
                        .ok_or_else(|| RouteError::MissingParam {
                            route: self.name.to_string(),
                            param: param.to_string(),
                        })?;
                    path.push_str(&encode_segment(value));
                }
                None => path.push_str(segment),
            }
        }
        Ok((*verb, path))
    }
}

/// Percent-encode one path segment. `/`, `?` and `#` cannot split the path.
fn encode_segment(value: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(value.as_bytes()).collect();
    // A literal '+' is already %2B, so any '+' left stands for a space
    encoded.replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_static_route() {
        let route = Route::named("admin.users.store");
        assert_eq!(route.resolve(), Ok((Verb::Post, "/admin/users".to_string())));
    }

    #[test]
    fn test_resolve_with_params() {
        let route = Route::named("admin.orders.status").with("id", 42);
        assert_eq!(
            route.resolve(),
            Ok((Verb::Patch, "/admin/orders/42/status".to_string()))
        );
        let route = Route::named("admin.legal.update").with("slug", "privacy");
        assert_eq!(route.resolve(), Ok((Verb::Patch, "/admin/legal/privacy".to_string())));
    }

    #[test]
    fn test_params_are_percent_encoded() {
        let route = Route::named("admin.legal.update").with("slug", "terms/v2?draft#top");
        assert_eq!(
            route.resolve(),
            Ok((
                Verb::Patch,
                "/admin/legal/terms%2Fv2%3Fdraft%23top".to_string()
            ))
        );
        let route = Route::named("admin.legal.update").with("slug", "a b+c");
        assert_eq!(
            route.resolve(),
            Ok((Verb::Patch, "/admin/legal/a%20b%2Bc".to_string()))
        );
    }

    #[test]
    fn test_resolve_unknown_route() {
        let route = Route::named("admin.nope");
        assert_eq!(route.resolve(), Err(RouteError::Unknown("admin.nope".to_string())));
    }

    #[test]
    fn test_resolve_missing_param() {
        let route = Route::named("admin.users.destroy");
        assert_eq!(
            route.resolve(),
            Err(RouteError::MissingParam {
                route: "admin.users.destroy".to_string(),
                param: "id".to_string(),
            })
        );
    }

    #[test]
    fn test_delete_has_no_body() {
        assert!(!Verb::Delete.has_body());
        assert!(Verb::Patch.has_body());
    }
}
