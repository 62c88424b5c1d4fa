use std::collections::{HashMap, HashSet};
use std::env;
use std::path::PathBuf;

/// Daily debt rates in cents, with per-team overrides.
#[derive(Debug, Clone)]
pub struct DebtRates {
    pub default_cents: i64,
    pub overrides: HashMap<String, i64>,
}

impl DebtRates {
    pub fn rate_for(&self, team: &str) -> i64 {
        self.overrides
            .get(team)
            .copied()
            .unwrap_or(self.default_cents)
    }
}

impl Default for DebtRates {
    fn default() -> Self {
        Self {
            default_cents: 700,
            overrides: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_path: PathBuf,
    pub debts_path: PathBuf,
    pub static_path: PathBuf,
    pub message_base_url: String,
    /// Teams whose payment history may be downloaded as CSV.
    /// `None` means every team is downloadable.
    pub download_teams: Option<HashSet<String>>,
    pub debt_rates: DebtRates,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let download_teams = env::var("PAYCHART_DOWNLOAD_TEAMS")
            .ok()
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<HashSet<_>>()
            })
            .filter(|set| !set.is_empty());

        let debt_rates = DebtRates {
            default_cents: env::var("PAYCHART_DEBT_DAILY_RATE_CENTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(700),
            overrides: env::var("PAYCHART_DEBT_RATE_OVERRIDES")
                .map(|v| parse_rate_overrides(&v))
                .unwrap_or_default(),
        };

        Self {
            host: env::var("PAYCHART_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PAYCHART_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            data_path: env::var("PAYCHART_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data.json")),
            debts_path: env::var("PAYCHART_DEBTS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("debts")),
            static_path: env::var("PAYCHART_STATIC_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static")),
            message_base_url: env::var("PAYCHART_MESSAGE_URL")
                .unwrap_or_else(|_| "https://wa.me/04162069479".into()),
            download_teams,
            debt_rates,
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_downloadable(&self, team: &str) -> bool {
        match &self.download_teams {
            Some(allowed) => allowed.contains(team),
            None => true,
        }
    }
}

/// Parse `"Name=500,Other=600"` into per-team rate overrides.
/// Malformed entries are skipped with a warning.
fn parse_rate_overrides(value: &str) -> HashMap<String, i64> {
    let mut overrides = HashMap::new();
    for entry in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match entry.split_once('=') {
            Some((name, rate)) => match rate.trim().parse::<i64>() {
                Ok(cents) => {
                    overrides.insert(name.trim().to_string(), cents);
                }
                Err(_) => {
                    tracing::warn!("Ignoring debt rate override with bad amount: {}", entry);
                }
            },
            None => {
                tracing::warn!("Ignoring malformed debt rate override: {}", entry);
            }
        }
    }
    overrides
}
