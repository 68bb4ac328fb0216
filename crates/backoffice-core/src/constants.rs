/// Location the session falls back to when authorization cannot be recovered.
pub const LOGIN_PATH: &str = "/login";

pub const TOKEN_PATH: &str = "/token";
pub const REFRESH_PATH: &str = "/refresh";
pub const LOGOUT_PATH: &str = "/logout";
pub const CURRENT_USER_PATH: &str = "/users/me";

pub const GRANT_TYPE_PASSWORD: &str = "password";
