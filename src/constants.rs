pub const ANILIST_API: &str = "https://graphql.anilist.co";

pub const USER_AGENT: &str = concat!("aniremap/", env!("CARGO_PKG_VERSION"));

pub mod metrics {

    pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";

    pub const HTTP_REQUEST_DURATION: &str = "http_request_duration_seconds";

    pub const MEDIA_FETCH_TOTAL: &str = "media_fetch_total";
}
