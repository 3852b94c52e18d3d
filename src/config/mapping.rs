//! Mapping configuration

use serde::Deserialize;

use crate::domain::mapping::ElementsPolicy;

/// Mapping configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MappingConfig {
    /// Five-element rescaling policy (`enhanced` or `linear`)
    #[serde(default)]
    pub elements_policy: ElementsPolicy,
}
