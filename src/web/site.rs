// SPDX-License-Identifier: MIT

//! Site routes: pages, the coffee-logging form and roaster autocomplete.

use crate::error::{AppError, Result};
use crate::models::{CaffeineUnit, DrinkAmount, PhotoUpload, PostActivityRequest, Roaster, UserView};
use crate::web::{pages, session, WebState};
use axum::{
    extract::{multipart::Field, DefaultBodyLimit, Multipart, Path, Query, State},
    response::{Html, Redirect},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::{Deserialize, Serialize};

/// Upload size cap for the coffee form, photo included.
const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Longest accepted autocomplete query.
const MAX_AUTOCOMPLETE_QUERY: usize = 100;

pub fn routes() -> Router<WebState> {
    Router::new()
        .route("/", get(home))
        .route(
            "/coffee",
            post(log_coffee).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/a/{id}", get(activity_page))
        .route("/u/{id}", get(user_profile))
        .route("/autocomplete/roaster", get(autocomplete_roaster))
}

fn parse_id(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("cannot parse id {:?}", raw)))
}

/// Resolve the session cookie to an account.
///
/// No cookie means anonymous; a decodable cookie whose account no longer
/// resolves is a 401.
async fn current_user(state: &WebState, jar: &PrivateCookieJar) -> Result<Option<UserView>> {
    let Some(id) = session::account_id(jar) else {
        return Ok(None);
    };

    match state.users.get_account(id).await? {
        Some(user) => Ok(Some(user)),
        None => Err(AppError::Unauthorized),
    }
}

/// Home page with the logging form and login state.
async fn home(State(state): State<WebState>, jar: PrivateCookieJar) -> Result<Html<String>> {
    let me = current_user(&state, &jar).await?;
    tracing::debug!(logged_in = me.is_some(), "serving home page");
    Ok(Html(pages::home(me.as_ref())))
}

/// Parsed coffee form fields.
#[derive(Default)]
struct CoffeeForm {
    drink: String,
    method: String,
    amount: String,
    amount_unit: String,
    roaster: String,
    origin: String,
    homebrew: bool,
    notes: String,
    picture: Option<PhotoUpload>,
}

fn is_image(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

async fn text_field(field: Field<'_>) -> Result<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("failed to parse request: {}", e)))
}

async fn parse_coffee_form(mut multipart: Multipart) -> Result<CoffeeForm> {
    let mut form = CoffeeForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("failed to parse request: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "picture" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("failed to read uploaded file: {}", e))
                })?;

                // A file input left empty still submits a zero-length part.
                if data.is_empty() {
                    tracing::debug!("no file was uploaded");
                    continue;
                }

                if !is_image(&content_type) {
                    return Err(AppError::BadRequest(
                        "uploaded file is not a photo".to_string(),
                    ));
                }

                tracing::debug!(
                    content_type = %content_type,
                    name = %filename,
                    size = data.len(),
                    "upload received"
                );
                form.picture = Some(PhotoUpload {
                    filename,
                    content_type,
                    data: data.to_vec(),
                });
            }
            "drink" => form.drink = text_field(field).await?,
            "brew-method" => form.method = text_field(field).await?,
            "amount" => form.amount = text_field(field).await?,
            "amount_unit" => form.amount_unit = text_field(field).await?,
            "roaster" => form.roaster = text_field(field).await?,
            "origin" => form.origin = text_field(field).await?,
            "homebrew" => form.homebrew = text_field(field).await? == "on",
            "notes" => form.notes = text_field(field).await?,
            _ => {}
        }
    }

    Ok(form)
}

/// Log a coffee activity. Requires a signed-in session.
async fn log_coffee(
    State(state): State<WebState>,
    jar: PrivateCookieJar,
    multipart: Multipart,
) -> Result<Redirect> {
    let me = current_user(&state, &jar)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let form = parse_coffee_form(multipart).await?;

    if form.drink.is_empty() {
        return Err(AppError::BadRequest("drink is required".to_string()));
    }
    if form.roaster.is_empty() {
        return Err(AppError::BadRequest("roaster is required".to_string()));
    }

    let amount = form.amount.parse::<i32>().unwrap_or(0);

    tracing::info!(
        user = me.id,
        drink = %form.drink,
        homebrew = form.homebrew,
        roaster = %form.roaster,
        origin = %form.origin,
        method = %form.method,
        picture_bytes = form.picture.as_ref().map(|p| p.data.len()).unwrap_or(0),
        "received form"
    );

    let request = PostActivityRequest {
        user_id: me.id,
        date: chrono::Utc::now().to_rfc3339(),
        drink: form.drink,
        method: form.method,
        homebrew: form.homebrew,
        origin: form.origin,
        roaster_name: form.roaster,
        amount: DrinkAmount {
            n: amount,
            unit: CaffeineUnit::from_form(&form.amount_unit),
        },
        notes: form.notes,
        picture: form.picture,
    };

    let posted = state.coffee.post_activity(&request).await?;
    tracing::info!(id = posted.id, "activity posted");

    // 303 so the browser follows up with a GET.
    Ok(Redirect::to(&format!("/u/{}", me.id)))
}

/// Single activity page.
async fn activity_page(
    State(state): State<WebState>,
    jar: PrivateCookieJar,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let me = current_user(&state, &jar).await?;
    let id = parse_id(&id)?;

    let activity = state
        .coffee
        .get_activity(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("activity {} not found", id)))?;

    tracing::debug!(id, user = activity.user.id, "retrieved activity");
    Ok(Html(pages::activity(me.as_ref(), &activity)))
}

/// User profile page with their activity log.
async fn user_profile(
    State(state): State<WebState>,
    jar: PrivateCookieJar,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let me = current_user(&state, &jar).await?;
    let id = parse_id(&id)?;

    let user = state
        .users
        .get_account(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {} not found", id)))?;

    let activities = state.coffee.user_activities(id).await?.unwrap_or_default();

    Ok(Html(pages::profile(me.as_ref(), &user, &activities)))
}

#[derive(Deserialize)]
struct AutocompleteQuery {
    #[serde(default)]
    data: String,
}

#[derive(Serialize)]
struct AutocompleteEntry {
    value: String,
}

/// Case-insensitive substring filter over the roaster catalog.
fn filter_roasters(roasters: &[Roaster], query: &str) -> Vec<AutocompleteEntry> {
    let query = query.to_lowercase();
    roasters
        .iter()
        .filter(|roaster| roaster.name.to_lowercase().contains(&query))
        .map(|roaster| AutocompleteEntry {
            value: roaster.name.clone(),
        })
        .collect()
}

/// Roaster name autocomplete for the logging form.
async fn autocomplete_roaster(
    State(state): State<WebState>,
    Query(query): Query<AutocompleteQuery>,
) -> Result<Json<Vec<AutocompleteEntry>>> {
    if query.data.len() > MAX_AUTOCOMPLETE_QUERY {
        return Err(AppError::BadRequest("request too long".to_string()));
    }

    let roasters = state.coffee.list_roasters().await?;
    let matches = filter_roasters(&roasters, &query.data);

    tracing::debug!(q = %query.data, matches = matches.len(), "autocomplete response");
    Ok(Json(matches))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roaster(name: &str) -> Roaster {
        Roaster {
            id: 1,
            name: name.to_string(),
            picture: None,
            created_by: None,
        }
    }

    #[test]
    fn test_filter_roasters_case_insensitive_substring() {
        let catalog = vec![roaster("Chemex Roasters"), roaster("Blue Bottle")];

        let matches = filter_roasters(&catalog, "chem");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, "Chemex Roasters");
    }

    #[test]
    fn test_filter_roasters_empty_query_matches_all() {
        let catalog = vec![roaster("Chemex Roasters"), roaster("Blue Bottle")];
        assert_eq!(filter_roasters(&catalog, "").len(), 2);
    }

    #[test]
    fn test_is_image() {
        assert!(is_image("image/jpeg"));
        assert!(is_image("image/png"));
        assert!(!is_image("text/html"));
        assert!(!is_image(""));
    }
}
