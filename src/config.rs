use crate::form::{SimulatedSubmitter, SUCCESS_BANNER_DURATION};
use crate::viewport::DESKTOP_MIN_WIDTH_PX;
use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Id of the optional `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostalAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Default for PostalAddress {
    fn default() -> Self {
        Self {
            street: "4071 Emery St".to_string(),
            city: "Emeryville".to_string(),
            state: "CA".to_string(),
            zip: "94608".to_string(),
        }
    }
}

impl PostalAddress {
    /// "Emeryville, CA 94608"
    pub fn locality(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.zip)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: PostalAddress,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "contact@jacobirobiotics.com".to_string(),
            phone: "+1-222-555-2222".to_string(),
            address: PostalAddress::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroCopy {
    pub title: String,
    pub subtitle: String,
}

impl Default for HeroCopy {
    fn default() -> Self {
        Self {
            title: "Have a project in mind! Book a demo.".to_string(),
            subtitle: "Got a project? Drop me a line if you want to work together on something \
                       exciting. Or do you need our help? Feel free to contact us."
                .to_string(),
        }
    }
}

/// Site-wide settings. Every key is optional in the JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub company_name: String,
    pub logo_src: String,
    pub contact: ContactInfo,
    pub hero: HeroCopy,
    pub mobile_breakpoint_px: f64,
    pub submit_delay_ms: u32,
    pub success_banner_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            company_name: "Jacobi Robotics".to_string(),
            logo_src: "/logo.png".to_string(),
            contact: ContactInfo::default(),
            hero: HeroCopy::default(),
            mobile_breakpoint_px: DESKTOP_MIN_WIDTH_PX,
            submit_delay_ms: SimulatedSubmitter::DEFAULT_DELAY_MS,
            success_banner_ms: SUCCESS_BANNER_DURATION.as_millis() as u32,
        }
    }
}

pub fn parse_site_config(json: &str) -> Result<SiteConfig, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

/// Read the JSON text of the config element, if the page has one.
fn config_element_text() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

/// Load the site configuration from the page.
///
/// # Fallback Behavior
///
/// Returns the built-in defaults if:
/// - the page has no config element (the normal case, no warning)
/// - the element's JSON does not parse (warns in the console)
pub fn load_site_config() -> SiteConfig {
    match config_element_text() {
        Some(json) if !json.trim().is_empty() => parse_site_config(&json).unwrap_or_else(|e| {
            logging::warn!("Jacobi: {} (using defaults)", e);
            SiteConfig::default()
        }),
        _ => SiteConfig::default(),
    }
}
