//! Resource trait implementation for the Application domain type.
//!
//! This module contains the [`Resource`] trait implementation that enables
//! [`Application`] to be managed by the generic [`crate::framework::ResourceClient`].

use crate::framework::{Endpoint, Resource};
use crate::model::{Application, ApplicationCreate, ApplicationQuery, ApplicationUpdate};

impl Resource for Application {
    const NAME: &'static str = "application";
    const ID_FIELD: &'static str = "application_id";

    const GET: Endpoint = Endpoint::GetApplication;
    const LIST: Endpoint = Endpoint::ListApplications;
    const CREATE: Endpoint = Endpoint::CreateApplication;
    const UPDATE: Endpoint = Endpoint::UpdateApplication;

    type Create = ApplicationCreate;
    type Update = ApplicationUpdate;
    type Query = ApplicationQuery;

    fn explicit_id(update: &ApplicationUpdate) -> Option<&str> {
        update.application_id.as_deref()
    }
}
