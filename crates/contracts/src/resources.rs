//! REST resource paths.
//!
//! The backend routes depend on the trailing slash; keep the paths verbatim.

pub const JOURNALS: &str = "/compta/journals/";
pub const JOURNAL_TYPES: &str = "/compta/journal-types/";
pub const MODULES: &str = "/modules/";
pub const PARTNERS: &str = "/partenaires/";
pub const PERMISSIONS: &str = "/permissions/";
pub const COUNTRIES: &str = "/pays/";
pub const SUBDIVISIONS: &str = "/subdivisions/";
pub const USERS: &str = "/users/";

/// Path of a single item: `/modules/` + `12` -> `/modules/12/`
pub fn item_path(collection: &str, id: &str) -> String {
    let base = collection.trim_end_matches('/');
    format!("{}/{}/", base, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_path_keeps_trailing_slash() {
        assert_eq!(item_path(JOURNALS, "3"), "/compta/journals/3/");
        assert_eq!(item_path("/pays", "FR"), "/pays/FR/");
    }
}
