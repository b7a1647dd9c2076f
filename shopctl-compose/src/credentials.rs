//! Database credentials taken from the environment

/// Environment variable holding the admin username
pub const USERNAME_VAR: &str = "MONGO_ROOT_USERNAME";
/// Environment variable holding the admin password
pub const PASSWORD_VAR: &str = "MONGO_ROOT_PASSWORD";
/// Environment variable holding the application database name
pub const DATABASE_VAR: &str = "MONGO_DATABASE";

/// Administrative credentials for the database container
///
/// Missing variables become empty strings and are forwarded as such; the
/// database tool reports the problem.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DatabaseCredentials {
    /// Admin username
    pub username: String,
    /// Admin password
    pub password: String,
    /// Database to dump or drop
    pub database: String,
}

impl DatabaseCredentials {
    /// Read the credentials from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the credentials through an arbitrary lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            username: lookup(USERNAME_VAR).unwrap_or_default(),
            password: lookup(PASSWORD_VAR).unwrap_or_default(),
            database: lookup(DATABASE_VAR).unwrap_or_default(),
        }
    }
}

impl std::fmt::Debug for DatabaseCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}
