use serde::{Deserialize, Serialize};
use std::fmt;

/// Named views of the shell.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    #[default]
    Home,
    Issues,
    Legislation,
    Representatives,
    Initiatives,
    Impact,
    Polls,
    Login,
    NotFound,
}

impl Route {
    /// Entries in the header, in display order.
    pub const NAVIGATION: [Route; 7] = [
        Route::Home,
        Route::Issues,
        Route::Legislation,
        Route::Representatives,
        Route::Initiatives,
        Route::Impact,
        Route::Polls,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Issues => "/issues",
            Route::Legislation => "/legislation",
            Route::Representatives => "/representatives",
            Route::Initiatives => "/initiatives",
            Route::Impact => "/impact",
            Route::Polls => "/polls",
            Route::Login => "/login",
            Route::NotFound => "/404",
        }
    }

    /// Anything that is not a known path lands on `NotFound`.
    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim();
        let trimmed = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        match trimmed {
            "" | "/" => Route::Home,
            "/issues" => Route::Issues,
            "/legislation" => Route::Legislation,
            "/representatives" => Route::Representatives,
            "/initiatives" => Route::Initiatives,
            "/impact" => Route::Impact,
            "/polls" => Route::Polls,
            "/login" => Route::Login,
            _ => Route::NotFound,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Issues => "Issues",
            Route::Legislation => "Legislation",
            Route::Representatives => "Representatives",
            Route::Initiatives => "Initiatives",
            Route::Impact => "Impact",
            Route::Polls => "Polls",
            Route::Login => "Log in",
            Route::NotFound => "Not found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_round_trips_through_its_path() {
        for route in Route::NAVIGATION.iter().chain(&[Route::Login, Route::NotFound]) {
            assert_eq!(Route::from_path(route.path()), *route);
        }
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::from_path("/council"), Route::NotFound);
        assert_eq!(Route::from_path("/Issues"), Route::NotFound);
        assert_eq!(Route::from_path("issues"), Route::NotFound);
    }

    #[test]
    fn trailing_slash_and_blank_are_tolerated() {
        assert_eq!(Route::from_path("/polls/"), Route::Polls);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path(" / "), Route::Home);
    }

    #[test]
    fn login_and_not_found_stay_out_of_the_header() {
        assert!(!Route::NAVIGATION.contains(&Route::Login));
        assert!(!Route::NAVIGATION.contains(&Route::NotFound));
    }
}
