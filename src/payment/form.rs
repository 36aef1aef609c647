//! Signed payment payloads and the forms built from them.

use crate::payment::error::PaymentError;
use crate::payment::sink::FormSink;
use serde_json::Value;
use std::fmt;

/// Reserved payload key holding the destination URL.
pub const PAYMENT_URL_KEY: &str = "payment_url";

/// Field name to value mapping issued by the service, in the order received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentHashPayload {
    entries: Vec<(String, String)>,
}

impl PaymentHashPayload {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PaymentHashPayload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl TryFrom<Value> for PaymentHashPayload {
    type Error = PaymentError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(map) = value else {
            return Err(PaymentError::InvalidPayload(
                "expected a JSON object".to_string(),
            ));
        };
        map.into_iter()
            .map(|(key, value)| match value {
                Value::String(s) => Ok((key, s)),
                _ => Err(PaymentError::InvalidPayload(format!(
                    "field {key} is not a string"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|entries| Self { entries })
    }
}

/// HTTP method of a submittable form. Payment forms always POST.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMethod {
    #[default]
    Post,
}

impl fmt::Display for FormMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormMethod::Post => f.write_str("POST"),
        }
    }
}

/// A browser-submittable form: target, method and hidden fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittableForm {
    pub action: String,
    pub method: FormMethod,
    pub fields: Vec<(String, String)>,
}

impl SubmittableForm {
    /// Drives this form into `sink` and submits it.
    pub fn submit_to<S: FormSink + ?Sized>(&self, sink: &mut S) -> Result<(), PaymentError> {
        sink.create_form(&self.action, self.method)?;
        for (name, value) in &self.fields {
            sink.add_hidden_field(name, value)?;
        }
        sink.submit()
    }
}

impl TryFrom<PaymentHashPayload> for SubmittableForm {
    type Error = PaymentError;

    /// Takes the target from the reserved URL key; every other key becomes a
    /// hidden field, keeping the payload's order.
    fn try_from(payload: PaymentHashPayload) -> Result<Self, Self::Error> {
        let mut action = None;
        let mut fields = Vec::with_capacity(payload.len());
        for (key, value) in payload.entries {
            if key == PAYMENT_URL_KEY {
                action = Some(value);
            } else {
                fields.push((key, value));
            }
        }
        Ok(Self {
            action: action.ok_or(PaymentError::MissingPaymentUrl(PAYMENT_URL_KEY))?,
            method: FormMethod::Post,
            fields,
        })
    }
}
