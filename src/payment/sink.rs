//! # Form Sinks
//!
//! Rendering and submitting a form is a capability of the host, not of the
//! SDK. [`FormSink`] is that capability. The payment handoff builds a
//! [`SubmittableForm`](crate::payment::SubmittableForm) and drives it into
//! whatever sink the host provides:
//!
//! - [`HtmlFormSink`] renders an auto-submitting HTML document for hosts that
//!   serve a page to a browser.
//! - [`HeadlessSink`] refuses immediately, for hosts with nothing to render to.

use crate::payment::error::PaymentError;
use crate::payment::form::FormMethod;

/// A presentation environment able to render and submit a form.
pub trait FormSink {
    /// Checked before any remote call is made. Hosts that can never render
    /// return [`PaymentError::NoRenderingEnvironment`].
    fn ensure_available(&self) -> Result<(), PaymentError> {
        Ok(())
    }

    fn create_form(&mut self, action: &str, method: FormMethod) -> Result<(), PaymentError>;

    fn add_hidden_field(&mut self, name: &str, value: &str) -> Result<(), PaymentError>;

    fn submit(&mut self) -> Result<(), PaymentError>;
}

/// Sink for hosts without a rendering environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessSink;

impl FormSink for HeadlessSink {
    fn ensure_available(&self) -> Result<(), PaymentError> {
        Err(PaymentError::NoRenderingEnvironment)
    }

    fn create_form(&mut self, _action: &str, _method: FormMethod) -> Result<(), PaymentError> {
        Err(PaymentError::NoRenderingEnvironment)
    }

    fn add_hidden_field(&mut self, _name: &str, _value: &str) -> Result<(), PaymentError> {
        Err(PaymentError::NoRenderingEnvironment)
    }

    fn submit(&mut self) -> Result<(), PaymentError> {
        Err(PaymentError::NoRenderingEnvironment)
    }
}

#[derive(Debug, Default)]
enum HtmlState {
    #[default]
    Empty,
    Open(String),
    Submitted(String),
}

/// Renders the form as a self-submitting HTML document.
///
/// The document is available from [`HtmlFormSink::html`] once the form has
/// been submitted.
#[derive(Debug, Default)]
pub struct HtmlFormSink {
    state: HtmlState,
}

impl HtmlFormSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The finished document, if the form was submitted.
    pub fn html(&self) -> Option<&str> {
        match &self.state {
            HtmlState::Submitted(html) => Some(html),
            _ => None,
        }
    }

    pub fn into_html(self) -> Option<String> {
        match self.state {
            HtmlState::Submitted(html) => Some(html),
            _ => None,
        }
    }
}

impl FormSink for HtmlFormSink {
    fn create_form(&mut self, action: &str, method: FormMethod) -> Result<(), PaymentError> {
        if !matches!(self.state, HtmlState::Empty) {
            return Err(PaymentError::Sink("form already created".to_string()));
        }
        self.state = HtmlState::Open(format!(
            "<!DOCTYPE html>\n<html>\n<body>\n<form id=\"payment-form\" action=\"{}\" method=\"{}\">\n",
            escape_attr(action),
            method
        ));
        Ok(())
    }

    fn add_hidden_field(&mut self, name: &str, value: &str) -> Result<(), PaymentError> {
        let HtmlState::Open(html) = &mut self.state else {
            return Err(PaymentError::Sink("no open form".to_string()));
        };
        html.push_str(&format!(
            "<input type=\"hidden\" name=\"{}\" value=\"{}\">\n",
            escape_attr(name),
            escape_attr(value)
        ));
        Ok(())
    }

    fn submit(&mut self) -> Result<(), PaymentError> {
        match std::mem::take(&mut self.state) {
            HtmlState::Open(mut html) => {
                html.push_str("</form>\n<script>document.getElementById(\"payment-form\").submit();</script>\n</body>\n</html>\n");
                self.state = HtmlState::Submitted(html);
                Ok(())
            }
            other => {
                self.state = other;
                Err(PaymentError::Sink("no open form".to_string()))
            }
        }
    }
}

fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
