use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Port of the REST server on the host serving the console
    pub port: u16,
    /// Path prefix put in front of every resource path
    #[serde(default)]
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 8000
prefix = "/api"

[list]
page_size = 10
page_size_options = [10, 25, 50, 100]
"#;

/// Parse a configuration document
pub fn parse_config(contents: &str) -> Result<ConsoleConfig, toml::de::Error> {
    let mut config: ConsoleConfig = toml::from_str(contents)?;
    config.list.page_size = config.list.page_size.max(1);
    config.list.page_size_options.retain(|size| *size > 0);
    if !config.list.page_size_options.contains(&config.list.page_size) {
        config.list.page_size_options.push(config.list.page_size);
        config.list.page_size_options.sort_unstable();
    }
    Ok(config)
}

/// Load the console configuration.
///
/// The bundle has no file system; an override can be inlined by the host
/// page as `<script type="application/toml" id="console-config">`.
pub fn load_config() -> ConsoleConfig {
    if let Some(contents) = inline_config() {
        match parse_config(&contents) {
            Ok(config) => {
                log::info!("Using inline console configuration");
                return config;
            }
            Err(e) => log::warn!("Invalid inline console configuration: {}", e),
        }
    }
    default_config()
}

pub fn default_config() -> ConsoleConfig {
    // The embedded document is covered by a test
    parse_config(DEFAULT_CONFIG).unwrap_or_else(|_| ConsoleConfig {
        api: ApiConfig { port: 8000, prefix: "/api".to_string() },
        list: ListConfig { page_size: 10, page_size_options: vec![10, 25, 50, 100] },
    })
}

fn inline_config() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id("console-config")?;
    element.text_content().filter(|text| !text.trim().is_empty())
}
