use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The remote insurance application resource.
///
/// # Resource Framework
/// This type implements the [`Resource`](crate::framework::Resource) trait,
/// allowing it to be managed by a [`ResourceClient`](crate::framework::ResourceClient).
/// It has no values; application bodies are passed through as raw JSON.
///
/// See [`impl Resource for Application`](#impl-Resource-for-Application) for details on:
/// - Creation parameters ([`ApplicationCreate`])
/// - Update parameters ([`ApplicationUpdate`])
#[derive(Debug)]
pub enum Application {}

/// Query for listing applications, sent verbatim.
pub type ApplicationQuery = Map<String, Value>;

/// Optional fields shared by create and update.
///
/// Unset fields are omitted from the request body, never sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_options: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<u32>,
}

/// Payload for creating a new application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationCreate {
    pub product_id: String,
    #[serde(flatten)]
    pub fields: ApplicationFields,
}

impl ApplicationCreate {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            fields: ApplicationFields::default(),
        }
    }

    pub fn with_fields(mut self, fields: ApplicationFields) -> Self {
        self.fields = fields;
        self
    }
}

/// Payload for updating an existing application.
///
/// `application_id`, when set, becomes the current id before the call is made.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(flatten)]
    pub fields: ApplicationFields,
}

impl ApplicationUpdate {
    pub fn new(fields: ApplicationFields) -> Self {
        Self {
            application_id: None,
            fields,
        }
    }

    pub fn for_application(mut self, id: impl Into<String>) -> Self {
        self.application_id = Some(id.into());
        self
    }
}
