use std::net::Ipv4Addr;

/// Process configuration, read once at startup. The admin secret and the
/// settings-store URI have no sane defaults, so the process refuses to start
/// without them; everything else falls back to development values.
pub struct Config {
    pub host: Ipv4Addr,
    pub port: u16,
    pub admin_password: String,
    pub aws_region: String,
    pub players_table: String,
    pub images_bucket: String,
    pub mongodb_uri: String,
}

impl Config {
    pub fn from_env() -> Self {
        let host: Ipv4Addr = std::env::var("HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string())
            .parse()
            .expect("HOST is not in the correct format");

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .expect("PORT is not in the correct format");

        Self {
            host,
            port,
            admin_password: std::env::var("ADMIN_PASSWORD")
                .expect("ADMIN_PASSWORD must be set; refusing to start without it"),
            aws_region: std::env::var("AWS_REGION")
                .unwrap_or_else(|_| "us-east-1".to_string()),
            players_table: std::env::var("PLAYERS_TABLE")
                .unwrap_or_else(|_| "roster_players".to_string()),
            images_bucket: std::env::var("IMAGES_BUCKET")
                .unwrap_or_else(|_| "roster-player-images".to_string()),
            mongodb_uri: std::env::var("MONGODB_URI")
                .expect("MONGODB_URI must be set in .env"),
        }
    }
}
