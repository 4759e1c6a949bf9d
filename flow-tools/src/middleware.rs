use tracing::info;

// Pipeline engines call from arbitrary hosts; only JSON tool calls come in.
pub fn cors() -> warp::cors::Builder {
    warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["Content-Type", "Accept", "Authorization", "Origin"])
        .allow_methods(vec!["POST", "GET", "OPTIONS"])
}

pub fn request_log() -> warp::log::Log<impl Fn(warp::log::Info<'_>) + Copy> {
    warp::log::custom(|request| {
        info!(
            method = %request.method(),
            path = request.path(),
            status = request.status().as_u16(),
            elapsed_ms = request.elapsed().as_millis() as u64,
            "tool request"
        );
    })
}
