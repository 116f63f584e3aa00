use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents invalid calculator configuration.
pub enum ConfigError {
    /// The angle unit is neither `radian` nor `degree`.
    #[error("Invalid angle unit '{0}': expected 'radian' or 'degree'")]
    InvalidAngleUnit(String),
}
