use crate::model::request::{AddPolicy, AskQuestion, PolicyQuery, SearchPolicies};
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, web};

/// Add a policy document to the knowledge base
#[utoipa::path(
    post,
    path = "/api/v1/policies",
    request_body = AddPolicy,
    responses(
        (status = 200, description = "Policy stored", body = crate::model::policy::PolicySummary),
        (status = 400, description = "Empty policy id")
    ),
    tag = "Policy"
)]
pub async fn add_policy(
    state: web::Data<AppState>,
    payload: web::Json<AddPolicy>,
) -> actix_web::Result<impl Responder> {
    let mut store = state.lock()?;
    let summary = store.add_policy(
        &payload.policy_id,
        &payload.title,
        &payload.content,
        &payload.category,
    )?;

    Ok(HttpResponse::Ok().json(summary))
}

#[utoipa::path(
    get,
    path = "/api/v1/policies",
    params(PolicyQuery),
    responses(
        (
            status = 200,
            description = "Policy documents without body",
            body = Vec<crate::model::policy::PolicySummary>
        )
    ),
    tag = "Policy"
)]
pub async fn list_policies(
    state: web::Data<AppState>,
    query: web::Query<PolicyQuery>,
) -> actix_web::Result<impl Responder> {
    let store = state.lock()?;

    Ok(HttpResponse::Ok().json(store.policies.list(query.category.as_deref())))
}

#[utoipa::path(
    get,
    path = "/api/v1/policies/{policy_id}",
    params(
        ("policy_id" = String, Path, description = "Policy ID")
    ),
    responses(
        (
            status = 200,
            description = "Policy document",
            body = crate::model::policy::PolicyDocument
        ),
        (status = 404, description = "Policy not found")
    ),
    tag = "Policy"
)]
pub async fn get_policy(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let policy_id = path.into_inner();
    let store = state.lock()?;

    Ok(HttpResponse::Ok().json(store.policies.get(&policy_id)?))
}

/// Keyword search over policy titles and content
#[utoipa::path(
    get,
    path = "/api/v1/policies/search",
    params(SearchPolicies),
    responses(
        (
            status = 200,
            description = "Matches ordered by relevance",
            body = Vec<crate::model::policy::PolicyMatch>
        )
    ),
    tag = "Policy"
)]
pub async fn search_policies(
    state: web::Data<AppState>,
    query: web::Query<SearchPolicies>,
) -> actix_web::Result<impl Responder> {
    let store = state.lock()?;
    let matches = store
        .policies
        .search(&query.query, query.category.as_deref(), query.max_results);

    Ok(HttpResponse::Ok().json(matches))
}

/// Answer a question from the most relevant policy documents
#[utoipa::path(
    post,
    path = "/api/v1/policies/ask",
    request_body = AskQuestion,
    responses(
        (
            status = 200,
            description = "Answer with sources",
            body = crate::model::policy::PolicyAnswer
        )
    ),
    tag = "Policy"
)]
pub async fn ask_policy_question(
    state: web::Data<AppState>,
    payload: web::Json<AskQuestion>,
) -> actix_web::Result<impl Responder> {
    let store = state.lock()?;

    Ok(HttpResponse::Ok().json(store.policies.ask(&payload.question, payload.category.as_deref())))
}
