use clap::Parser;

/// Runtime configuration collected from the command line and the environment.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "square-mission", about = "Flies a square waypoint mission and lands")]
pub struct MissionConfig {
    /// Mission altitude relative to home in meters
    altitude: f64,
    /// Side length of the square in meters
    side_length: f64,
    /// FlytOS web server
    #[arg(long, env = "FLYT_BASE_URL", default_value = "http://localhost:80")]
    base_url: String,
    /// Vehicle namespace, discovered from the server if not given
    #[arg(long, env = "FLYT_NAMESPACE")]
    namespace: Option<String>,
}

impl MissionConfig {
    pub fn altitude(&self) -> f64 { self.altitude }
    pub fn side_length(&self) -> f64 { self.side_length }
    pub fn base_url(&self) -> &str { self.base_url.as_str() }
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|ns| !ns.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::MissionConfig;
    use clap::Parser;
    use clap::error::ErrorKind;

    #[test]
    fn test_positional_args() {
        let conf = MissionConfig::try_parse_from([
            "square-mission",
            "10",
            "7.5",
            "--base-url",
            "http://localhost:80",
        ])
        .unwrap();
        assert!((conf.altitude() - 10.0).abs() < f64::EPSILON);
        assert!((conf.side_length() - 7.5).abs() < f64::EPSILON);
        assert_eq!(conf.base_url(), "http://localhost:80");
    }

    #[test]
    fn test_flag_overrides() {
        let conf = MissionConfig::try_parse_from([
            "square-mission",
            "5",
            "6.5",
            "--base-url",
            "http://192.168.1.20",
            "--namespace",
            "flytpod",
        ])
        .unwrap();
        assert_eq!(conf.base_url(), "http://192.168.1.20");
        assert_eq!(conf.namespace(), Some("flytpod"));

        let conf =
            MissionConfig::try_parse_from(["square-mission", "5", "6.5", "--namespace", ""])
                .unwrap();
        assert_eq!(conf.namespace(), None);
    }

    #[test]
    fn test_bad_args() {
        let err = MissionConfig::try_parse_from(["square-mission", "5"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = MissionConfig::try_parse_from(["square-mission", "high", "6.5"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
