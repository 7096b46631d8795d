use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Broadcaster {
    pub name: String,
    pub countries: Vec<String>,
    pub url: Option<String>,
    pub logo_url: Option<String>,
}
