use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::errors::TsKvError;

/// Category of the object a telemetry key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Tenant,
    Customer,
    User,
    Dashboard,
    Asset,
    Device,
    Alarm,
    RuleChain,
    RuleNode,
    EntityView,
}

impl EntityType {
    pub const ALL: [EntityType; 10] = [
        EntityType::Tenant,
        EntityType::Customer,
        EntityType::User,
        EntityType::Dashboard,
        EntityType::Asset,
        EntityType::Device,
        EntityType::Alarm,
        EntityType::RuleChain,
        EntityType::RuleNode,
        EntityType::EntityView,
    ];

    /// Name as stored in the entity type column.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Tenant => "TENANT",
            EntityType::Customer => "CUSTOMER",
            EntityType::User => "USER",
            EntityType::Dashboard => "DASHBOARD",
            EntityType::Asset => "ASSET",
            EntityType::Device => "DEVICE",
            EntityType::Alarm => "ALARM",
            EntityType::RuleChain => "RULE_CHAIN",
            EntityType::RuleNode => "RULE_NODE",
            EntityType::EntityView => "ENTITY_VIEW",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = TsKvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityType::ALL
            .iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| TsKvError::UnknownEntityType(s.to_string()))
    }
}
