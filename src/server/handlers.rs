//! MCP tool handlers for the contact desk.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::error::StoreError;
use crate::models::RawContactFields;
use crate::services::SubmissionService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server exposing contact-form intake and the submission inbox.
#[derive(Clone)]
pub struct ContactDeskServer {
    submission_service: Arc<dyn SubmissionService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for ContactDeskServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contact-desk".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Contact form intake - validates and stores visitor submissions, emails the operator and the submitter, and manages the submission inbox.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ListSubmissionsParams {
    /// Only return submissions with this status (new, read or replied)
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SubmissionIdParams {
    submission_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct UpdateStatusParams {
    submission_id: String,
    /// One of: new, read, replied
    status: String,
}

#[derive(Debug, Serialize)]
struct DeleteResponse<'a> {
    deleted: bool,
    submission_id: &'a str,
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

// Caller mistakes map to INVALID_PARAMS, store faults to INTERNAL_ERROR
fn store_error(e: StoreError) -> McpError {
    match e {
        StoreError::NotFound(_) | StoreError::InvalidRequest(_) => McpError {
            code: ErrorCode::INVALID_PARAMS,
            message: Cow::from(e.to_string()),
            data: None,
        },
        other => {
            tracing::error!("Submission store error: {}", other);
            to_mcp_error(other)
        }
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_response = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(json_response)]))
}

#[tool_router]
impl ContactDeskServer {
    /// Create a new server on top of a submission service.
    pub fn new(submission_service: Arc<dyn SubmissionService>) -> Self {
        Self {
            submission_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Validate and store a contact form submission.
    #[tool(
        description = "Submit a contact form (name, email, phone, service, message). Validates the fields, rejects likely email typos and duplicate email/phone pairs, stores the submission and emails the operator and the submitter. Returns {outcome: accepted, id, notified} or {outcome: rejected, kind, reason}."
    )]
    async fn submit_contact(
        &self,
        params: Parameters<RawContactFields>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!("MCP Handler: submit_contact called");

        let outcome = self
            .submission_service
            .submit(params.0)
            .await
            .map_err(store_error)?;

        json_result(&outcome)
    }

    /// List stored submissions, newest first.
    #[tool(
        description = "List stored contact submissions, newest first, optionally filtered by status (new, read, replied). Includes the unread count."
    )]
    async fn list_submissions(
        &self,
        params: Parameters<ListSubmissionsParams>,
    ) -> Result<CallToolResult, McpError> {
        let listing = self
            .submission_service
            .list_submissions(params.0.status.as_deref())
            .await
            .map_err(store_error)?;

        json_result(&listing)
    }

    /// Retrieve a stored submission by ID.
    #[tool(description = "Retrieve a stored contact submission by ID")]
    async fn get_submission(
        &self,
        params: Parameters<SubmissionIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let submission = self
            .submission_service
            .get_submission(&params.0.submission_id)
            .await
            .map_err(store_error)?;

        json_result(&submission)
    }

    /// Mark a submission as new, read or replied.
    #[tool(description = "Set the status of a stored submission to new, read or replied")]
    async fn update_submission_status(
        &self,
        params: Parameters<UpdateStatusParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let submission = self
            .submission_service
            .update_status(&params.submission_id, &params.status)
            .await
            .map_err(store_error)?;

        json_result(&submission)
    }

    /// Delete a stored submission.
    #[tool(
        description = "Delete a stored submission. The same email/phone pair may submit again afterwards."
    )]
    async fn delete_submission(
        &self,
        params: Parameters<SubmissionIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        self.submission_service
            .delete_submission(&params.submission_id)
            .await
            .map_err(store_error)?;

        json_result(&DeleteResponse {
            deleted: true,
            submission_id: &params.submission_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_codes() {
        let err = store_error(StoreError::NotFound("abc".to_string()));
        assert_eq!(err.code.0, ErrorCode::INVALID_PARAMS.0);
        assert!(err.message.contains("abc"));

        let err = store_error(StoreError::Unavailable("disk full".to_string()));
        assert_eq!(err.code.0, ErrorCode::INTERNAL_ERROR.0);
    }
}
