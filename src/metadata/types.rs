use serde::{Deserialize, Serialize};

/// Page metadata pulled from an HTML head.
///
/// `None` means the governing tag is not on the page (or carries no `content` attribute).
/// It is never conflated with an empty value: `Some("")` and `Some(vec![])` are real answers.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub url: Option<String>,
    pub site_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub author: Option<String>,
}
