use serde::{Deserialize, Serialize};

use crate::core::ViewModel;
use crate::error::{VisualError, VisualResult};

pub const VIEW_MODEL_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModelJsonContractV1 {
    pub schema_version: u32,
    pub view_model: ViewModel,
}

impl ViewModel {
    pub fn to_json_contract_v1_pretty(&self) -> VisualResult<String> {
        let payload = ViewModelJsonContractV1 {
            schema_version: VIEW_MODEL_JSON_SCHEMA_V1,
            view_model: self.clone(),
        };
        serde_json::to_string_pretty(&payload)
            .map_err(|e| VisualError::Json(format!("failed to serialize view model v1: {e}")))
    }

    /// Accepts either a bare view model or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> VisualResult<Self> {
        if let Ok(view_model) = serde_json::from_str::<ViewModel>(input) {
            return Ok(view_model);
        }
        let payload: ViewModelJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            VisualError::Json(format!("failed to parse view model json payload: {e}"))
        })?;
        if payload.schema_version != VIEW_MODEL_JSON_SCHEMA_V1 {
            return Err(VisualError::Json(format!(
                "unsupported view model schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.view_model)
    }
}
