use serde::{Deserialize, Serialize};

/// A keyword to target-URL mapping. The keyword is the primary key in every
/// backend; the externally visible source URL is derived per request and
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub keyword: String,
    pub target: String,
}

impl Link {
    pub fn new<K: Into<String>, T: Into<String>>(keyword: K, target: T) -> Self {
        Link {
            keyword: keyword.into(),
            target: target.into(),
        }
    }
}
