use crate::core::error::ConfigError;
use crate::core::field::FieldId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FORM_ID: &str = "loginForm";
pub const DEFAULT_INVALID_CLASS: &str = "is-invalid";
pub const IDENTIFIER_REQUIRED: &str = "Vui lòng nhập tên người dùng";
pub const SECRET_REQUIRED: &str = "Vui lòng nhập mật khẩu";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldConfig {
    pub input_id: String,
    pub error_id: String,
    pub required_message: String,
}

impl FieldConfig {
    pub fn identifier() -> Self {
        Self {
            input_id: "user-name".to_string(),
            error_id: "user-name-error".to_string(),
            required_message: IDENTIFIER_REQUIRED.to_string(),
        }
    }

    pub fn secret() -> Self {
        Self {
            input_id: "password".to_string(),
            error_id: "password-error".to_string(),
            required_message: SECRET_REQUIRED.to_string(),
        }
    }

    fn validate(&self, field: FieldId) -> Result<(), ConfigError> {
        let name = field.as_str();
        if self.input_id.is_empty() || self.error_id.is_empty() {
            return Err(ConfigError::EmptyElementId(name));
        }
        if self.required_message.is_empty() {
            return Err(ConfigError::EmptyMessage(name));
        }
        Ok(())
    }
}

// Field defaults differ per slot, so documents are read into all-optional
// raw structs and merged over the slot's own defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFieldConfig {
    input_id: Option<String>,
    error_id: Option<String>,
    required_message: Option<String>,
}

impl RawFieldConfig {
    fn merge_into(self, mut base: FieldConfig) -> FieldConfig {
        if let Some(input_id) = self.input_id {
            base.input_id = input_id;
        }
        if let Some(error_id) = self.error_id {
            base.error_id = error_id;
        }
        if let Some(message) = self.required_message {
            base.required_message = message;
        }
        base
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGuardConfig {
    form_id: Option<String>,
    invalid_class: Option<String>,
    identifier: Option<RawFieldConfig>,
    secret: Option<RawFieldConfig>,
}

impl From<RawGuardConfig> for GuardConfig {
    fn from(raw: RawGuardConfig) -> Self {
        let defaults = GuardConfig::default();
        Self {
            form_id: raw.form_id.unwrap_or(defaults.form_id),
            invalid_class: raw.invalid_class.unwrap_or(defaults.invalid_class),
            identifier: raw
                .identifier
                .unwrap_or_default()
                .merge_into(defaults.identifier),
            secret: raw.secret.unwrap_or_default().merge_into(defaults.secret),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawGuardConfig")]
pub struct GuardConfig {
    pub form_id: String,
    pub invalid_class: String,
    pub identifier: FieldConfig,
    pub secret: FieldConfig,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            form_id: DEFAULT_FORM_ID.to_string(),
            invalid_class: DEFAULT_INVALID_CLASS.to_string(),
            identifier: FieldConfig::identifier(),
            secret: FieldConfig::secret(),
        }
    }
}

impl GuardConfig {
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: GuardConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: GuardConfig = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn field(&self, field: FieldId) -> &FieldConfig {
        match field {
            FieldId::Identifier => &self.identifier,
            FieldId::Secret => &self.secret,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.form_id.is_empty() {
            return Err(ConfigError::EmptyElementId("form"));
        }
        if self.invalid_class.is_empty() {
            return Err(ConfigError::EmptyInvalidClass);
        }
        for field in FieldId::ALL {
            self.field(field).validate(field)?;
        }
        Ok(())
    }
}
