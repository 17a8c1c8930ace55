use std::time::Duration;

/// Role names that confer district-leadership status. Members holding one of
/// these roles are auto-included in event rosters when the event asks for it.
#[derive(Debug, Clone)]
pub struct LeadershipRoles(pub Vec<String>);

impl Default for LeadershipRoles {
    fn default() -> Self {
        LeadershipRoles(vec![
            "İlçe Başkanı".to_string(),
            "Yürütme Kurulu".to_string(),
            "Yönetim Kurulu".to_string(),
        ])
    }
}

impl LeadershipRoles {
    pub fn names(&self) -> &[String] {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub leadership_roles: LeadershipRoles,
    pub roster_cache_ttl: Duration,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            log::info!("No DATABASE_URL set — using data/app.db");
            "data/app.db".to_string()
        });

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        let leadership_roles = match std::env::var("LEADERSHIP_ROLES") {
            Ok(val) if !val.trim().is_empty() => {
                let names: Vec<String> = val
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                log::info!("Using LEADERSHIP_ROLES from environment: {names:?}");
                LeadershipRoles(names)
            }
            _ => LeadershipRoles::default(),
        };

        let roster_cache_ttl = std::env::var("ROSTER_CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(120));

        AppConfig {
            database_url,
            bind_addr,
            leadership_roles,
            roster_cache_ttl,
        }
    }
}
