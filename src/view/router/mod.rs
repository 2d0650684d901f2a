//! Route table types and path matching for the entity views.

pub mod entities;

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Authority {
    Admin,
    User,
}

impl Authority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Authority::Admin => "ROLE_ADMIN",
            Authority::User => "ROLE_USER",
        }
    }
}

/// View a route activates. The host builds the controller only when the route is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    PointList,
    PointUpdate,
    PointDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub component: ViewKind,
    pub authorities: &'static [Authority],
}

/// Decides whether the signed-in account may enter a route.
pub trait AuthorityChecker: Send + Sync {
    fn has_any_authority(&self, authorities: &[Authority]) -> bool;
}

/// Checker over a fixed set of granted authorities.
#[derive(Debug, Clone, Default)]
pub struct GrantedAuthorities(pub Vec<Authority>);

impl AuthorityChecker for GrantedAuthorities {
    fn has_any_authority(&self, authorities: &[Authority]) -> bool {
        authorities.is_empty() || authorities.iter().any(|a| self.0.contains(a))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("No route matches {0}")]
    NotFound(String),

    #[error("Route {0} requires one of {1:?}")]
    Forbidden(&'static str, Vec<&'static str>),

    #[error("Route parameter {name} is not a valid id: {value}")]
    InvalidParam { name: String, value: String },
}

/// Values captured from `:name` segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(HashMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.0.insert(name.to_string(), value.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Numeric id parameter; `Ok(None)` when absent.
    pub fn id(&self, name: &str) -> Result<Option<i64>, RouteError> {
        match self.get(name) {
            None => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|_| RouteError::InvalidParam {
                name: name.to_string(),
                value: raw.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: RouteDescriptor,
    pub params: RouteParams,
}

/// First route in table order whose pattern matches `path`.
pub fn resolve(routes: &[RouteDescriptor], path: &str) -> Option<RouteMatch> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    routes.iter().find_map(|route| {
        let pattern: Vec<&str> = route.path.split('/').filter(|s| !s.is_empty()).collect();
        if pattern.len() != segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (p, s) in pattern.iter().zip(&segments) {
            match p.strip_prefix(':') {
                Some(name) => params = params.with(name, s),
                None if p == s => {}
                None => return None,
            }
        }

        Some(RouteMatch {
            route: *route,
            params,
        })
    })
}

pub fn authorize(matched: &RouteMatch, checker: &dyn AuthorityChecker) -> Result<(), RouteError> {
    if checker.has_any_authority(matched.route.authorities) {
        Ok(())
    } else {
        Err(RouteError::Forbidden(
            matched.route.name,
            matched.route.authorities.iter().map(Authority::as_str).collect(),
        ))
    }
}
