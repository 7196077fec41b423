use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
///
/// Every section has defaults, so an empty environment yields a config that
/// watches the Studentenwerk Dortmund offers page.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub snapshot: SnapshotConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
}

/// The page being watched
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TargetConfig {
    #[serde(default = "default_target_url")]
    pub url: String,
    /// Base for resolving relative links (default: origin of `url`)
    #[serde(default)]
    pub base_url: Option<String>,
    /// Request timeout in seconds (default: 20)
    #[serde(default = "default_fetch_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            url: default_target_url(),
            base_url: None,
            timeout_secs: default_fetch_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_target_url() -> String {
    "https://www.stwdo.de/wohnen/aktuelle-wohnangebote".to_string()
}

fn default_fetch_timeout() -> u64 {
    20
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36".to_string()
}

/// CSS selectors used to pull listings out of the page
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParserConfig {
    /// Matches one element per listing entry
    #[serde(default = "default_item_selector")]
    pub item_selector: String,
    /// Anchor inside the entry; when unset the entry itself is the anchor
    #[serde(default)]
    pub link_selector: Option<String>,
    /// Title element inside the entry; when unset the anchor text is used
    #[serde(default)]
    pub title_selector: Option<String>,
    /// Fail the run when the page yields no listings at all
    #[serde(default)]
    pub require_listings: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            item_selector: default_item_selector(),
            link_selector: None,
            title_selector: None,
            require_listings: false,
        }
    }
}

fn default_item_selector() -> String {
    "a[href*='/wohnen/']".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnapshotConfig {
    #[serde(default = "default_snapshot_path")]
    pub path: PathBuf,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: default_snapshot_path(),
        }
    }
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("snapshots/stwdo.json")
}

/// Outbound mail server. Credentials are not part of this section, see
/// [`EmailCredentials`](super::EmailCredentials).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    /// Server port; when unset, the conventional port for `security`
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub security: SmtpSecurity,
    /// Timeout for each SMTP network operation in seconds (default: 60)
    #[serde(default = "default_smtp_timeout")]
    pub timeout_secs: u64,
}

impl SmtpConfig {
    /// Port actually connected to.
    pub fn effective_port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.security.default_port())
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: None,
            security: SmtpSecurity::default(),
            timeout_secs: default_smtp_timeout(),
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_timeout() -> u64 {
    60
}

/// How the SMTP connection is secured
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SmtpSecurity {
    /// Plain connection upgraded with STARTTLS (submission port)
    #[default]
    Starttls,
    /// TLS from the first byte (SMTPS port)
    Tls,
    /// No encryption, for local relays only
    Plain,
}

impl SmtpSecurity {
    pub fn default_port(self) -> u16 {
        match self {
            SmtpSecurity::Starttls => 587,
            SmtpSecurity::Tls => 465,
            SmtpSecurity::Plain => 25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(
            config.target.url,
            "https://www.stwdo.de/wohnen/aktuelle-wohnangebote"
        );
        assert!(config.target.base_url.is_none());
        assert_eq!(config.target.timeout_secs, 20);
        assert!(config.target.user_agent.starts_with("Mozilla/5.0"));
        assert_eq!(config.parser.item_selector, "a[href*='/wohnen/']");
        assert!(!config.parser.require_listings);
        assert_eq!(
            config.snapshot.path.to_str().unwrap(),
            "snapshots/stwdo.json"
        );
        assert_eq!(config.smtp.host, "smtp.gmail.com");
        assert_eq!(config.smtp.port, None);
        assert_eq!(config.smtp.effective_port(), 587);
        assert_eq!(config.smtp.security, SmtpSecurity::Starttls);
        assert_eq!(config.smtp.timeout_secs, 60);
    }

    #[test]
    fn test_deserialize_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.smtp.effective_port(), 587);
        assert_eq!(config.target.timeout_secs, 20);
    }

    #[test]
    fn test_deserialize_partial_sections() {
        let json = r#"{
            "target": { "url": "http://localhost:8000/wohnen/" },
            "smtp": { "security": "tls", "port": 465 }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.target.url, "http://localhost:8000/wohnen/");
        assert_eq!(config.target.timeout_secs, 20); // default
        assert_eq!(config.smtp.security, SmtpSecurity::Tls);
        assert_eq!(config.smtp.port, Some(465));
        assert_eq!(config.smtp.host, "smtp.gmail.com"); // default
    }

    #[test]
    fn test_smtp_port_follows_security_when_unset() {
        let json = r#"{ "smtp": { "security": "tls" } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.smtp.effective_port(), 465);

        let json = r#"{ "smtp": { "security": "plain" } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.smtp.effective_port(), 25);

        let json = r#"{ "smtp": { "security": "tls", "port": 2465 } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.smtp.effective_port(), 2465);
    }

    #[test]
    fn test_smtp_security_serialization() {
        assert_eq!(
            serde_json::to_string(&SmtpSecurity::Starttls).unwrap(),
            "\"starttls\""
        );
        assert_eq!(serde_json::to_string(&SmtpSecurity::Tls).unwrap(), "\"tls\"");
        assert_eq!(
            serde_json::to_string(&SmtpSecurity::Plain).unwrap(),
            "\"plain\""
        );
    }

    #[test]
    fn test_unknown_security_fails() {
        let json = r#"{ "smtp": { "security": "ssl3" } }"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
