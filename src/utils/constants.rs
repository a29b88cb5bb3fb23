/// localStorage key holding the session record `{name, username, token, id}`.
pub const STORAGE_KEY_LOGGED_USER: &str = "loggedBlogappUser";

pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u32 = 5000;

// API paths
pub const LOGIN_PATH: &str = "/api/login";
pub const USERS_PATH: &str = "/api/users";
pub const BLOGS_PATH: &str = "/api/blogs";
pub const TESTING_RESET_PATH: &str = "/api/testing/reset";
