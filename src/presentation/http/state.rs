// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Cookie consulted for the access token when no bearer header is sent.
    pub session_cookie: Arc<str>,
}
