//! HTTP verbs a RAML resource can declare.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// An HTTP method declared on a resource.
///
/// The declaration order doubles as the iteration order everywhere a resource's
/// methods are visited: GET, POST, PUT, PATCH, HEAD, DELETE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Head,
    Delete,
}

impl Verb {
    /// Every verb in iteration order.
    pub const ALL: [Verb; 6] = [
        Verb::Get,
        Verb::Post,
        Verb::Put,
        Verb::Patch,
        Verb::Head,
        Verb::Delete,
    ];

    /// The upper-case HTTP method name (e.g. `"GET"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Head => "HEAD",
            Verb::Delete => "DELETE",
        }
    }

    /// The lower-case key used for the method in a RAML document (e.g. `"get"`).
    pub fn key(&self) -> &'static str {
        match self {
            Verb::Get => "get",
            Verb::Post => "post",
            Verb::Put => "put",
            Verb::Patch => "patch",
            Verb::Head => "head",
            Verb::Delete => "delete",
        }
    }

    /// Look up a verb by its RAML key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|verb| verb.key() == key)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Verb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(&s.to_lowercase()).ok_or_else(|| {
            format!(
                "unknown HTTP method '{}', expected one of GET, POST, PUT, PATCH, HEAD, DELETE",
                s
            )
        })
    }
}
