//! src/configuration.rs

use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::MessageLimits;

#[derive(serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub contact: ContactSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    // Converts from str to u16 in case we set it through an environment variable
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

/// Bounds applied to the `message` field of a contact submission.
///
/// The minimum has flip-flopped between 10 and 1 before, so the bound lives
/// in configuration rather than in code: `base.yaml` carries the canonical
/// values and either variant is a config change away.
#[derive(serde::Deserialize, Clone)]
pub struct ContactSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub message_min_length: usize,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub message_max_length: usize,
}

impl ContactSettings {
    pub fn message_limits(&self) -> MessageLimits {
        MessageLimits {
            min: self.message_min_length,
            max: self.message_max_length,
        }
    }
}

/// The possible runtime environment for our application
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    // We cant use the Enum directly, so this helps us get the Enum as a str
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

/// `APP_ENVIRONMENT` comes out of `std::env::var` as a raw `String`, which
/// could hold anything at all. `TryFrom` is the checkpoint where that raw
/// string becomes one of the environments we actually ship configuration for,
/// and it lets the caller use `try_into()`.
impl TryFrom<String> for Environment {
    type Error = String; // <--- The trait *demands* you define this
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. \
Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");
    // Detect the running environment, defaults to `local` if unspecified
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT");
    let environment_filename = format!("{}.yaml", environment.as_str());

    // Init the config reader
    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // Add in settings from environment variables (with a prefix of APP and
        // '__' as separator)
        // E.g. `APP_APPLICATION__PORT=5001 would set `Settings.application.port`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    // Try to convert the configuration values it read into our Settings type
    settings.try_deserialize::<Settings>()
}
