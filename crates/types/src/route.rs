use std::fmt;

/// Application routes the navigation shell knows how to link to.
///
/// Paths the shell does not recognise are carried as [`Route::Other`] so the
/// router can still report them as the current location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Landing,
    About,
    FindHome,
    FindProject,
    Contact,
    List,
    YourProperties,
    Other(String),
}

impl Route {
    /// Links shown in the desktop bar and the collapsed mobile panel, in order.
    pub const PRIMARY_LINKS: [Route; 5] = [Route::About, Route::FindHome, Route::FindProject, Route::Contact, Route::List];

    /// Resolves a path into a route, ignoring surrounding whitespace and
    /// trailing slashes. An empty path is the landing route.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Route::Landing;
        }
        let normalized = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        match normalized.as_str() {
            "/about" => Route::About,
            "/find-home" => Route::FindHome,
            "/find-project" => Route::FindProject,
            "/contact" => Route::Contact,
            "/list" => Route::List,
            "/your-properties" => Route::YourProperties,
            _ => Route::Other(normalized),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Landing => "/",
            Route::About => "/about",
            Route::FindHome => "/find-home",
            Route::FindProject => "/find-project",
            Route::Contact => "/contact",
            Route::List => "/list",
            Route::YourProperties => "/your-properties",
            Route::Other(path) => path,
        }
    }

    /// Label used for the desktop link bar.
    pub fn label(&self) -> &str {
        match self {
            Route::Landing => "Home",
            Route::About => "About Us",
            Route::FindHome => "Find Property",
            Route::FindProject => "Project",
            Route::Contact => "Contact",
            Route::List => "List Properties",
            Route::YourProperties => "Your Properties",
            Route::Other(path) => path,
        }
    }

    /// Label used inside the mobile panel, which is terser for a couple of links.
    pub fn mobile_label(&self) -> &str {
        match self {
            Route::About => "About",
            other => other.label(),
        }
    }

    pub fn is_landing(&self) -> bool {
        matches!(self, Route::Landing)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
