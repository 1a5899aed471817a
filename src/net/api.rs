//! REST API helpers for communicating with the survey server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade to fallback data or a toast without crashing hydration. The one
//! endpoint with a structured error is participation-token lookup, which
//! separates HTTP 404 (token expired), other bad statuses (definitive
//! failure), and transport errors (backend unreachable).
//!
//! Authenticated calls take the session token as an explicit argument; the
//! net layer never reads browser storage itself.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    DashboardSummary, LoginPayload, LoginSession, ParticipationSurvey, ProfilePayload, Question,
    QuestionPayload, ResponsePayload, Survey, SurveyPayload, SurveyResponse, SurveyStats, User,
};
#[cfg(feature = "hydrate")]
use super::types::{ListResponse, TokenResolution};

/// Failure modes for participation-token resolution.
///
/// The server answering with a bad status is a definitive failure and gets
/// an error screen; a request that never completed is indistinguishable
/// from a backend outage and degrades like the admin screens do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenLookupError {
    /// HTTP 404: unknown or expired token.
    NotFound,
    /// Any other non-success HTTP status.
    BadStatus(u16),
    /// The request never completed (network down, CORS, malformed body).
    Transport(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn token_lookup_error_for_status(status: u16) -> TokenLookupError {
    if status == 404 {
        TokenLookupError::NotFound
    } else {
        TokenLookupError::BadStatus(status)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_header(token: &str) -> String {
    format!("Token {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn survey_endpoint(id: i64) -> String {
    format!("/api/surveys/{id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn questions_endpoint(survey_id: i64) -> String {
    format!("/api/survey-questions/?survey={survey_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn question_endpoint(id: i64) -> String {
    format!("/api/survey-questions/{id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn responses_endpoint(survey_id: i64) -> String {
    format!("/api/survey-responses/?survey={survey_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn stats_endpoint(survey_id: i64) -> String {
    format!("/api/survey-question-stats/?survey={survey_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn export_endpoint(survey_id: i64, csv: bool) -> String {
    if csv {
        format!("/api/export-responses/?survey={survey_id}&format=csv")
    } else {
        format!("/api/export-responses/?survey={survey_id}")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn customer_token_endpoint(token: &str) -> String {
    format!("/api/customer-tokens/{token}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Log in with username + password via `POST /api/auth/login/`.
///
/// # Errors
///
/// Returns an error string if the request fails or credentials are rejected.
pub async fn login(username: &str, password: &str) -> Result<LoginSession, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = LoginPayload {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post("/api/auth/login/")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_failed_message("login", resp.status()));
        }
        resp.json::<LoginSession>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the authenticated user from `GET /api/auth/me/`.
/// Returns `None` if the token is invalid or on the server.
pub async fn fetch_current_user(token: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me/")
            .header("Authorization", &auth_header(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// List all surveys via `GET /api/surveys/`.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
pub async fn fetch_surveys(token: &str) -> Result<Vec<Survey>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/surveys/")
            .header("Authorization", &auth_header(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_failed_message("survey list", resp.status()));
        }
        let list: ListResponse<Survey> = resp.json().await.map_err(|e| e.to_string())?;
        Ok(list.into_items())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Create a survey via `POST /api/surveys/`.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
pub async fn create_survey(token: &str, payload: &SurveyPayload) -> Result<Survey, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/surveys/")
            .header("Authorization", &auth_header(token))
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_failed_message("survey create", resp.status()));
        }
        resp.json::<Survey>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, payload);
        Err("not available on server".to_owned())
    }
}

/// Fetch one survey via `GET /api/surveys/{id}/`.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
pub async fn fetch_survey(token: &str, id: i64) -> Result<Survey, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&survey_endpoint(id))
            .header("Authorization", &auth_header(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_failed_message("survey fetch", resp.status()));
        }
        resp.json::<Survey>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err("not available on server".to_owned())
    }
}

/// Update a survey via `PUT /api/surveys/{id}/`.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
pub async fn update_survey(token: &str, id: i64, payload: &SurveyPayload) -> Result<Survey, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&survey_endpoint(id))
            .header("Authorization", &auth_header(token))
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_failed_message("survey update", resp.status()));
        }
        resp.json::<Survey>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, payload);
        Err("not available on server".to_owned())
    }
}

/// List a survey's questions via `GET /api/survey-questions/?survey={id}`.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
pub async fn fetch_questions(token: &str, survey_id: i64) -> Result<Vec<Question>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&questions_endpoint(survey_id))
            .header("Authorization", &auth_header(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_failed_message("question list", resp.status()));
        }
        let list: ListResponse<Question> = resp.json().await.map_err(|e| e.to_string())?;
        Ok(list.into_items())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, survey_id);
        Err("not available on server".to_owned())
    }
}

/// Create or update a question; POST when `id` is `None`, PUT otherwise.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
pub async fn save_question(
    token: &str,
    id: Option<i64>,
    payload: &QuestionPayload,
) -> Result<Question, String> {
    #[cfg(feature = "hydrate")]
    {
        let builder = match id {
            None => gloo_net::http::Request::post("/api/survey-questions/"),
            Some(id) => gloo_net::http::Request::put(&question_endpoint(id)),
        };
        let resp = builder
            .header("Authorization", &auth_header(token))
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_failed_message("question save", resp.status()));
        }
        resp.json::<Question>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, payload);
        Err("not available on server".to_owned())
    }
}

/// Delete a question via `DELETE /api/survey-questions/{id}/`.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
pub async fn delete_question(token: &str, id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&question_endpoint(id))
            .header("Authorization", &auth_header(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_failed_message("question delete", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err("not available on server".to_owned())
    }
}

/// List a survey's responses via `GET /api/survey-responses/?survey={id}`.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
pub async fn fetch_responses(token: &str, survey_id: i64) -> Result<Vec<SurveyResponse>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&responses_endpoint(survey_id))
            .header("Authorization", &auth_header(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_failed_message("response list", resp.status()));
        }
        let list: ListResponse<SurveyResponse> = resp.json().await.map_err(|e| e.to_string())?;
        Ok(list.into_items())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, survey_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch per-question tallies via `GET /api/survey-question-stats/?survey={id}`.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
pub async fn fetch_survey_stats(token: &str, survey_id: i64) -> Result<SurveyStats, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&stats_endpoint(survey_id))
            .header("Authorization", &auth_header(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_failed_message("stats fetch", resp.status()));
        }
        resp.json::<SurveyStats>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, survey_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch dashboard aggregates via `GET /api/survey-summary/`.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
pub async fn fetch_dashboard_summary(token: &str) -> Result<DashboardSummary, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/survey-summary/")
            .header("Authorization", &auth_header(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_failed_message("summary fetch", resp.status()));
        }
        resp.json::<DashboardSummary>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Download the CSV export blob via `GET /api/export-responses/`.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
pub async fn export_responses(token: &str, survey_id: i64, csv: bool) -> Result<Vec<u8>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&export_endpoint(survey_id, csv))
            .header("Authorization", &auth_header(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_failed_message("export", resp.status()));
        }
        resp.binary().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, survey_id, csv);
        Err("not available on server".to_owned())
    }
}

/// Resolve a participation token via `GET /api/customer-tokens/{token}/`.
///
/// Unauthenticated; HTTP 404 maps to [`TokenLookupError::NotFound`] so the
/// participation page can show a token-expired message.
///
/// # Errors
///
/// Returns [`TokenLookupError`] on any failure.
pub async fn resolve_participation_token(
    token: &str,
) -> Result<ParticipationSurvey, TokenLookupError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&customer_token_endpoint(token))
            .send()
            .await
            .map_err(|e| TokenLookupError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(token_lookup_error_for_status(resp.status()));
        }
        let body: TokenResolution = resp
            .json()
            .await
            .map_err(|e| TokenLookupError::Transport(e.to_string()))?;
        Ok(body.survey)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(TokenLookupError::Transport("not available on server".to_owned()))
    }
}

/// Submit the full answer set via `POST /api/survey-response/`.
///
/// Unauthenticated; the participation token travels in the body.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
pub async fn submit_response(payload: &ResponsePayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/survey-response/")
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_failed_message("response submit", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}

/// Upload one question's file via `POST /api/survey-file-upload/` (multipart).
///
/// Unauthenticated; the participation token travels in the form body. Issued
/// once per attached file, independently of the answer submission.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
#[cfg(feature = "hydrate")]
pub async fn upload_answer_file(
    customer_token: &str,
    question_id: i64,
    file: &web_sys::File,
) -> Result<(), String> {
    let form = web_sys::FormData::new().map_err(|_| "form construction failed".to_owned())?;
    form.append_with_blob("file", file)
        .map_err(|_| "form append failed".to_owned())?;
    form.append_with_str("question", &question_id.to_string())
        .map_err(|_| "form append failed".to_owned())?;
    form.append_with_str("customer_token", customer_token)
        .map_err(|_| "form append failed".to_owned())?;

    let resp = gloo_net::http::Request::post("/api/survey-file-upload/")
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(status_failed_message("file upload", resp.status()));
    }
    Ok(())
}

/// Update the current user's profile via `PUT /api/profile/`.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
pub async fn update_profile(token: &str, payload: &ProfilePayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put("/api/profile/")
            .header("Authorization", &auth_header(token))
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_failed_message("profile update", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, payload);
        Err("not available on server".to_owned())
    }
}
