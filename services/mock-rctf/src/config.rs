pub const DEFAULT_BEARER_TOKEN: &str = "defavalidtokenasdflkasdlfjdsalkjflkdsajfldkafkldjkls";
pub const DEFAULT_TEAM_ID: &str = "b11fc3d2-ed33-4955-8ccf-01c84620b883";
pub const DEFAULT_TEAM_NAME: &str = "g33chpwn";

#[derive(Debug, Clone)]
pub struct MockRctfConfig {
    pub bind_host: String,
    pub port: u16,
    pub identity: RctfIdentity,
}

/// The single team the mock knows about, plus the token issued to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RctfIdentity {
    pub bearer_token: String,
    pub team_id: String,
    pub team_name: String,
}

impl Default for MockRctfConfig {
    fn default() -> Self {
        Self {
            bind_host: "localhost".to_string(),
            port: 6666,
            identity: RctfIdentity::default(),
        }
    }
}

impl Default for RctfIdentity {
    fn default() -> Self {
        Self {
            bearer_token: DEFAULT_BEARER_TOKEN.to_string(),
            team_id: DEFAULT_TEAM_ID.to_string(),
            team_name: DEFAULT_TEAM_NAME.to_string(),
        }
    }
}

impl MockRctfConfig {
    /// Host and port suitable for `TcpListener::bind`.
    pub fn listen_target(&self) -> (&str, u16) {
        (self.bind_host.as_str(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_rctf_fixture() {
        let config = MockRctfConfig::default();
        assert_eq!(config.listen_target(), ("localhost", 6666));
        assert_eq!(
            config.identity.bearer_token,
            "defavalidtokenasdflkasdlfjdsalkjflkdsajfldkafkldjkls"
        );
        assert_eq!(
            config.identity.team_id,
            "b11fc3d2-ed33-4955-8ccf-01c84620b883"
        );
        assert_eq!(config.identity.team_name, "g33chpwn");
    }
}
