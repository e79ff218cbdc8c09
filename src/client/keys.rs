//! Cache-key registry. Reads and mutations address cached lists through the
//! same typed key, so a mutation can never miss the list it patched because
//! of a string typo.

use std::fmt;

/// Closed set of API resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Properties,
    Landlords,
    Tours,
    Payments,
    Notifications,
    AuditLogs,
    Users,
}

impl Resource {
    /// URL path segment of the resource under `/api/v1`.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Properties => "properties",
            Resource::Landlords => "landlords",
            Resource::Tours => "tours",
            Resource::Payments => "payments",
            Resource::Notifications => "notifications",
            Resource::AuditLogs => "audit-logs",
            Resource::Users => "users",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Identifies one cached list: a resource plus the canonical query string
/// that produced it. An empty query addresses the unfiltered list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub resource: Resource,
    pub query: String,
}

impl QueryKey {
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            query: String::new(),
        }
    }

    pub fn with_query(resource: Resource, query: impl Into<String>) -> Self {
        Self {
            resource,
            query: query.into(),
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            write!(f, "{}", self.resource)
        } else {
            write!(f, "{}?{}", self.resource, self.query)
        }
    }
}
