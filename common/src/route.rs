//! Path-to-view table of the library micro-frontend.

pub const LIBRARIES_PATH: &str = "/cql-libraries";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Create,
    Edit { id: String },
    NotFound,
}

impl Route {
    /// Maps a location path to a view. Anything nested below
    /// `/cql-libraries/:id/edit` still opens the editor for `id`.
    pub fn recognize(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["cql-libraries"] => Route::Landing,
            ["cql-libraries", "create"] => Route::Create,
            ["cql-libraries", id, "edit", ..] => Route::Edit { id: id.to_string() },
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing | Route::NotFound => LIBRARIES_PATH.to_string(),
            Route::Create => format!("{LIBRARIES_PATH}/create"),
            Route::Edit { id } => format!("{LIBRARIES_PATH}/{id}/edit"),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Landing => "MADiE Libraries",
            Route::Create => "MADiE Create Library",
            Route::Edit { .. } => "MADiE Edit Library",
            Route::NotFound => "MADiE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_library_routes() {
        assert_eq!(Route::recognize("/cql-libraries"), Route::Landing);
        assert_eq!(Route::recognize("/cql-libraries/"), Route::Landing);
        assert_eq!(Route::recognize("/cql-libraries/create"), Route::Create);
        assert_eq!(
            Route::recognize("/cql-libraries/cql-lib-1234/edit"),
            Route::Edit { id: "cql-lib-1234".to_string() }
        );
        assert_eq!(
            Route::recognize("/cql-libraries/cql-lib-1234/edit/details"),
            Route::Edit { id: "cql-lib-1234".to_string() }
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::recognize("/"), Route::NotFound);
        assert_eq!(Route::recognize("/measures"), Route::NotFound);
        assert_eq!(Route::recognize("/cql-libraries/abc"), Route::NotFound);
    }

    #[test]
    fn paths_round_trip() {
        for route in [Route::Landing, Route::Create, Route::Edit { id: "x1".to_string() }] {
            assert_eq!(Route::recognize(&route.path()), route);
        }
    }
}
