//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the ordered route table
//! - Look up the first route matching a request
//! - Return matched route or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan in table order; later routes may overlap earlier ones
//! - Explicit NoMatch rather than silent default

use axum::http::Method;

use crate::routing::matcher::{split_path, AndMatcher, Matcher, MethodMatcher, PathPattern};

/// The catalog operation a route performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ListArtists,
    GetArtist,
    CreateArtist,
    UpdateArtist,
    DeleteArtist,
    ListArtistAlbums,
    GetAlbum,
    CreateAlbum,
    UpdateAlbum,
    DeleteAlbum,
    ListArtistSongs,
    ListAlbumSongs,
    ListTrackNumberSongs,
    GetSong,
    CreateSong,
    UpdateSong,
    DeleteSong,
}

/// A single entry of the route table.
#[derive(Debug)]
pub struct Route {
    /// Route identifier for logging/metrics.
    pub name: &'static str,
    pub action: Action,
    pattern: PathPattern,
    matcher: AndMatcher,
}

impl Route {
    pub fn new(name: &'static str, methods: &[Method], pattern: &str, action: Action) -> Self {
        let path = PathPattern::new(pattern);
        let matcher = AndMatcher::new(vec![
            Box::new(MethodMatcher::new(methods.iter().cloned())),
            Box::new(path.clone()),
        ]);
        Self {
            name,
            action,
            pattern: path,
            matcher,
        }
    }
}

/// Result of a successful lookup.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    /// Value of the route's `:id` segment, if it has one.
    pub id: Option<u64>,
}

/// Ordered route table.
#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The catalog API's route table, in evaluation order.
    pub fn catalog() -> Self {
        use Action::*;

        let get = [Method::GET];
        let post = [Method::POST];
        let put = [Method::PUT, Method::PATCH];
        let delete = [Method::DELETE];

        Self::new(vec![
            Route::new("list_artists", &get, "/artists", ListArtists),
            Route::new("get_artist", &get, "/artists/:id", GetArtist),
            Route::new("create_artist", &post, "/artists", CreateArtist),
            Route::new("update_artist", &put, "/artists/:id", UpdateArtist),
            Route::new("delete_artist", &delete, "/artists/:id", DeleteArtist),
            Route::new("list_artist_albums", &get, "/artists/:id/albums", ListArtistAlbums),
            Route::new("get_album", &get, "/albums/:id", GetAlbum),
            Route::new("create_album", &post, "/artists/:id/albums", CreateAlbum),
            Route::new("update_album", &put, "/albums/:id", UpdateAlbum),
            Route::new("delete_album", &delete, "/albums/:id", DeleteAlbum),
            Route::new("list_artist_songs", &get, "/artists/:id/songs", ListArtistSongs),
            Route::new("list_album_songs", &get, "/albums/:id/songs", ListAlbumSongs),
            Route::new("list_track_number_songs", &get, "/trackNumbers/:n/songs", ListTrackNumberSongs),
            Route::new("get_song", &get, "/songs/:id", GetSong),
            Route::new("create_song", &post, "/albums/:id/songs", CreateSong),
            Route::new("update_song", &put, "/songs/:id", UpdateSong),
            Route::new("delete_song", &delete, "/songs/:id", DeleteSong),
        ])
    }

    /// Find the first route matching the method and path.
    pub fn match_request(&self, method: &Method, path: &str) -> Option<RouteMatch<'_>> {
        let segments = split_path(path);
        self.routes
            .iter()
            .find(|route| route.matcher.matches(method, &segments))
            .map(|route| RouteMatch {
                route,
                id: route.pattern.capture(&segments),
            })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::catalog()
    }
}
