use std::fs;
use std::path::Path;
use serde::Deserialize;

/// Entry-form configuration: the itemized payment-method columns the
/// monthly form carries in addition to the lunch/dinner totals.
#[derive(Deserialize, Debug)]
pub(crate) struct Config {
    #[serde(default = "default_methods")]
    pub(crate) methods: Vec<String>,
}

fn default_methods() -> Vec<String> {
    vec!["card".to_string(), "paypay".to_string(), "stella".to_string()]
}

impl Config {
    pub(crate) fn default_config() -> Config {
        Config { methods: default_methods() }
    }

    pub(crate) fn load_from_file(file_path: &str) -> Config {
        let path = Path::new(file_path);
        if path.exists() && path.is_file() {
            let config: Config = toml::from_str(fs::read_to_string(path).unwrap().as_str()).unwrap();
            config
        } else {
            Config::default_config()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load_from_file("does-not-exist.toml");
        assert_eq!(config.methods, vec!["card", "paypay", "stella"]);
    }

    #[test]
    fn test_parse() {
        let config: Config = toml::from_str(r#"methods = ["card", "voucher"]"#).unwrap();
        assert_eq!(config.methods, vec!["card", "voucher"]);
    }
}
