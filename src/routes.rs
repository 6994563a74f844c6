use crate::{
    api::{admin, employee, leave_request, policy, tools},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::Condition, web};
use anyhow::anyhow;
use std::sync::Arc;

pub type ApiLimiter = Governor<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-peer limiter allowing `requests_per_min` calls with an equal burst.
pub fn build_limiter(requests_per_min: u32) -> anyhow::Result<ApiLimiter> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / requests_per_min as u64).max(1);
    let cfg = GovernorConfigBuilder::default()
        .milliseconds_per_request(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow!("invalid rate limit of {requests_per_min} requests per minute"))?;
    Ok(Governor::new(&cfg))
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limiter: Arc<ApiLimiter>) {
    cfg.service(admin::system_info).service(admin::quick_start);

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(Condition::new(config.rate_api_per_min > 0, limiter)) // rate limiting
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::post().to(employee::register_employee))
                            .route(web::get().to(employee::list_employees)),
                    )
                    // /employees/{id}
                    .service(
                        web::resource("/{id}").route(web::get().to(employee::view_employee)),
                    )
                    // /employees/{id}/balance
                    .service(
                        web::resource("/{id}/balance")
                            .route(web::get().to(employee::check_balance))
                            .route(web::post().to(employee::add_leave_balance)),
                    )
                    // /employees/{id}/leave
                    .service(
                        web::resource("/{id}/leave")
                            .route(web::get().to(employee::view_my_requests)),
                    ),
            )
            .service(
                web::scope("/leave")
                    // /leave
                    .service(
                        web::resource("")
                            .route(web::get().to(leave_request::leave_list))
                            .route(web::post().to(leave_request::create_leave)),
                    )
                    // /leave/{id}
                    .service(web::resource("/{id}").route(web::get().to(leave_request::get_leave)))
                    // /leave/{id}/approve
                    .service(
                        web::resource("/{id}/approve")
                            .route(web::put().to(leave_request::approve_leave)),
                    )
                    // /leave/{id}/reject
                    .service(
                        web::resource("/{id}/reject")
                            .route(web::put().to(leave_request::reject_leave)),
                    ),
            )
            .service(
                web::resource("/departments/{department}/summary")
                    .route(web::get().to(admin::department_summary)),
            )
            .service(web::resource("/stats").route(web::get().to(admin::system_stats)))
            .service(
                web::scope("/policies")
                    // /policies
                    .service(
                        web::resource("")
                            .route(web::get().to(policy::list_policies))
                            .route(web::post().to(policy::add_policy)),
                    )
                    .service(
                        web::resource("/search").route(web::get().to(policy::search_policies)),
                    )
                    .service(
                        web::resource("/ask").route(web::post().to(policy::ask_policy_question)),
                    )
                    // /policies/{id}
                    .service(web::resource("/{id}").route(web::get().to(policy::get_policy))),
            )
            .service(
                web::scope("/tools")
                    .service(web::resource("").route(web::get().to(tools::list_tools)))
                    .service(web::resource("/{name}").route(web::post().to(tools::call_tool))),
            ),
    );
}
