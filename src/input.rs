//! Workflow input encoding
//!
//! SWF carries workflow input as an opaque string. The race workers run on the
//! Flow framework, whose default data converter writes the `@Execute` method's
//! arguments as a type-tagged JSON array. [`InputEncoding::Json`] is available
//! for workers that read a plain JSON object instead.

use crate::race::LaunchParameters;
use serde::{Deserialize, Serialize};
use serde_json::json;

const FLOW_ARGUMENTS_TYPE: &str = "[Ljava.lang.Object;";
const FLOW_LIST_TYPE: &str = "java.util.ArrayList";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputEncoding {
    /// Type-tagged argument array understood by Flow framework workers
    #[default]
    Flow,
    /// Plain `{"participants": [...], "laps": n}` object
    Json,
}

impl InputEncoding {
    /// Encode race parameters as a workflow input string
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn encode(self, params: &LaunchParameters) -> serde_json::Result<String> {
        match self {
            InputEncoding::Flow => serde_json::to_string(&json!([
                FLOW_ARGUMENTS_TYPE,
                [[FLOW_LIST_TYPE, params.participants()], params.laps()]
            ])),
            InputEncoding::Json => serde_json::to_string(params),
        }
    }
}

impl std::fmt::Display for InputEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputEncoding::Flow => write!(f, "flow"),
            InputEncoding::Json => write!(f, "json"),
        }
    }
}
