pub const DEFAULT_APP_NAME: &str = "Widget CRUD API";
pub const DEFAULT_APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DEBUG: bool = false;
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:8080";
pub const DEFAULT_RUST_LOG: &str = "info,tower_http=info";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://widgets.db?mode=rwc";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_DB_MIN_IDLE: u32 = 1;
