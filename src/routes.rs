//! Hash Routes
//!
//! The three views, addressed by `location.hash`.

/// Which page is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    List,
    AddContact,
    EditContact(u32),
}

impl Route {
    /// Parse `#/contact/edit/5` style hashes; anything unknown is the list
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["contact", "add"] => Route::AddContact,
            ["contact", "edit", id] => id.parse().map(Route::EditContact).unwrap_or_default(),
            _ => Route::List,
        }
    }

    pub fn to_hash(self) -> String {
        match self {
            Route::List => "#/".to_string(),
            Route::AddContact => "#/contact/add".to_string(),
            Route::EditContact(id) => format!("#/contact/edit/{}", id),
        }
    }

    /// Route for the current browser location
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|hash| Self::from_hash(&hash))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Route::from_hash(""), Route::List);
        assert_eq!(Route::from_hash("#/"), Route::List);
        assert_eq!(Route::from_hash("#/contact/add"), Route::AddContact);
        assert_eq!(Route::from_hash("#/contact/edit/42"), Route::EditContact(42));
        assert_eq!(Route::from_hash("#contact/edit/7/"), Route::EditContact(7));
    }

    #[test]
    fn test_unknown_falls_back_to_list() {
        assert_eq!(Route::from_hash("#/contact/edit/abc"), Route::List);
        assert_eq!(Route::from_hash("#/contact/edit/-1"), Route::List);
        assert_eq!(Route::from_hash("#/settings"), Route::List);
    }

    #[test]
    fn test_hash_round_trip() {
        for route in [Route::List, Route::AddContact, Route::EditContact(13)] {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
    }
}
