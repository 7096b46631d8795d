use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TechnicalDelegate {
    pub codex: String,
    pub name: String,
    pub nation: String,
    pub td_id: String,
}
