//! # Endpoints
//!
//! The closed set of logical paths the remote service exposes. Callers never
//! build paths themselves; every remote call names one of these variants.

use std::fmt;

/// A fixed logical endpoint of the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    GetApplication,
    ListApplications,
    CreateApplication,
    UpdateApplication,
    GetPackages,
    GetPackage,
    SelectPackage,
    SubmitApplication,
    ConfirmApplication,
    PaymentHash,
}

impl Endpoint {
    /// The path appended to the base URL.
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::GetApplication => "/applications/get",
            Endpoint::ListApplications => "/applications/list",
            Endpoint::CreateApplication => "/applications/create",
            Endpoint::UpdateApplication => "/applications/update",
            Endpoint::GetPackages => "/applications/get-packages",
            Endpoint::GetPackage => "/applications/get-package",
            Endpoint::SelectPackage => "/applications/select-package",
            Endpoint::SubmitApplication => "/applications/submit",
            Endpoint::ConfirmApplication => "/applications/confirm",
            Endpoint::PaymentHash => "/payments/2c2p/get-hash",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
