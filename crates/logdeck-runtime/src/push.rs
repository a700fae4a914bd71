use serde::Serialize;
use std::path::Path;

use crate::config::Config;
use crate::{Error, Result};
use logdeck_engine::get_session;
use logdeck_types::{SessionDetail, Tag, merge_tags};

/// A push/share request from the caller: which session, and the tags
/// supplied explicitly for this push.
#[derive(Debug, Clone)]
pub struct PushRequest {
    pub session_id: String,
    pub tool: Option<String>,
    pub tags: Vec<Tag>,
}

/// Body posted to the remote store.
#[derive(Debug, Clone, Serialize)]
pub struct PushPayload {
    pub session: SessionDetail,
    pub tags: Vec<Tag>,
}

/// Everything the transport layer needs to perform the upload. The
/// upload itself (and its retry policy) lives outside this crate; on
/// success the remote returns an identifier/URL, on failure a message.
#[derive(Debug, Clone)]
pub struct PreparedPush {
    pub endpoint: String,
    pub api_key: String,
    pub payload: PushPayload,
}

/// Validate the remote configuration, reconstruct the session, and
/// merge configured default tags with the request's explicit ones.
pub fn prepare_push(config: &Config, root: &Path, request: &PushRequest) -> Result<PreparedPush> {
    if config.remote.server_url.is_empty() {
        return Err(Error::Config("server_url not configured".to_string()));
    }
    if config.remote.api_key.is_empty() {
        return Err(Error::Config("api_key not configured".to_string()));
    }

    let session = get_session(root, &request.session_id, request.tool.as_deref())
        .ok_or_else(|| Error::SessionNotFound(request.session_id.clone()))?;

    let endpoint = format!(
        "{}/api/sessions",
        config.remote.server_url.trim_end_matches('/')
    );

    Ok(PreparedPush {
        endpoint,
        api_key: config.remote.api_key.clone(),
        payload: PushPayload {
            session,
            tags: merge_tags(&config.remote.default_tags, &request.tags),
        },
    })
}
