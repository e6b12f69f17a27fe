//! Define our own macros to simplify the code
//!

/// Call the HTTP client with the proper arguments
///
/// - plain unauthenticated GET
///
#[macro_export]
macro_rules! http_get {
    ($self:ident, $url:ident) => {
        $self
            .client
            .clone()
            .get($url)
            .header(
                "user-agent",
                format!("{}/{}", crate_name!(), crate_version!()),
            )
            .send()
    };
}

/// Call the HTTP client with the proper arguments
///
/// - GET with an API key as bearer token
///
#[macro_export]
macro_rules! http_get_auth {
    ($self:ident, $url:ident, $token:ident) => {
        $self
            .client
            .clone()
            .get($url)
            .header(
                "user-agent",
                format!("{}/{}", crate_name!(), crate_version!()),
            )
            .bearer_auth($token)
            .send()
    };
}

/// Call the HTTP client with the proper arguments for BASIC authentication
///
/// - auth call submitting a JSON payload
///
#[macro_export]
macro_rules! http_post_basic {
    ($self:ident, $url:ident, $user:expr, $pwd:expr, $data:expr) => {
        $self
            .client
            .clone()
            .post($url)
            .basic_auth($user, Some($pwd))
            .header(
                "user-agent",
                format!("{}/{}", crate_name!(), crate_version!()),
            )
            .header("content-type", "application/json")
            .json($data)
            .send()
    };
}
