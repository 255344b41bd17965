//! Deep-link fragments
//!
//! `#search:<percent-encoded query>`, `#lu:<id>`, `#frame:<id>` and
//! `#construction:<id>`. Anything else routes home.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::EntityKind;

const SEARCH_PREFIX: &str = "search:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Route {
    Home,
    Search(String),
    Frame(String),
    LexicalUnit(String),
    Construction(String),
}

impl Route {
    /// Parse a location fragment, with or without the leading `#`
    pub fn parse(fragment: &str) -> Self {
        let h = fragment.strip_prefix('#').unwrap_or(fragment).trim();
        if h.is_empty() {
            return Route::Home;
        }

        if let Some(payload) = h.strip_prefix(SEARCH_PREFIX) {
            let query = urlencoding::decode(payload)
                .map(|q| q.into_owned())
                .unwrap_or_else(|_| payload.to_string());
            return Route::Search(query);
        }

        let Some((prefix, id)) = h.split_once(':') else {
            return Route::Home;
        };
        if id.is_empty() {
            return Route::Home;
        }
        match prefix {
            "lu" => Route::LexicalUnit(id.to_string()),
            "frame" => Route::Frame(id.to_string()),
            "construction" => Route::Construction(id.to_string()),
            _ => Route::Home,
        }
    }

    /// Route for an entry key such as `frame:Motion`
    pub fn for_entry(kind: EntityKind, id: &str) -> Self {
        match kind {
            EntityKind::Frame => Route::Frame(id.to_string()),
            EntityKind::LexicalUnit => Route::LexicalUnit(id.to_string()),
            EntityKind::Construction => Route::Construction(id.to_string()),
        }
    }

    /// Entry kind and id for entry routes
    pub fn entry(&self) -> Option<(EntityKind, &str)> {
        match self {
            Route::Frame(id) => Some((EntityKind::Frame, id.as_str())),
            Route::LexicalUnit(id) => Some((EntityKind::LexicalUnit, id.as_str())),
            Route::Construction(id) => Some((EntityKind::Construction, id.as_str())),
            Route::Home | Route::Search(_) => None,
        }
    }

    /// Fragment with a leading `#`; home is the empty string
    pub fn to_fragment(&self) -> String {
        match self {
            Route::Home => String::new(),
            Route::Search(q) => format!("#{}{}", SEARCH_PREFIX, urlencoding::encode(q)),
            other => match other.entry() {
                Some((kind, id)) => format!("#{}", kind.key(id)),
                None => String::new(),
            },
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fragment())
    }
}
