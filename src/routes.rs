// src/routes.rs

use axum::{
    Router,
    http::Method,
    middleware,
    routing::{get, patch, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    auth,
    handlers::{analyses, answers, logs, ml, qoptions, questions, quizzes, schools, topics, users},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all per-resource sub-routers.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (pool, config, token verifier).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:5173".parse().unwrap(),
        "http://127.0.0.1:5173".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    // Everything except registration requires a provider-verified token;
    // the known-user and role checks happen inside the handlers.
    let user_routes = Router::new()
        .route("/", post(users::create_user))
        .merge(
            Router::new()
                .route("/all", get(users::list_users))
                .route("/user/email", get(users::get_self))
                .route(
                    "/{id}",
                    get(users::get_user)
                        .put(users::update_user)
                        .delete(users::delete_user),
                )
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth::auth_middleware,
                )),
        );

    let question_routes = Router::new()
        .route(
            "/",
            post(questions::create_question).get(questions::list_questions),
        )
        .route("/quiz/{id}", get(questions::list_questions_by_quiz))
        .route(
            "/{id}",
            get(questions::get_question).put(questions::update_question),
        );

    let quiz_routes = Router::new()
        .route("/", post(quizzes::create_quiz).get(quizzes::list_quizzes))
        .route("/{id}", get(quizzes::get_quiz).put(quizzes::update_quiz));

    let answer_routes = Router::new()
        .route("/", post(answers::create_answer))
        .route("/all", get(answers::list_answers))
        .route("/user/{id}", get(answers::list_answers_by_user))
        .route(
            "/user/{user_id}/quiz/{quiz_id}",
            get(answers::list_answers_by_user_and_quiz),
        )
        .route("/quiz/{id}", get(answers::list_answers_by_quiz))
        .route("/allocate/{id}/{marks}", patch(answers::allocate_marks))
        .route("/{id}", get(answers::get_answer));

    let analysis_routes = Router::new()
        .route("/", post(analyses::create_analysis))
        .route("/user/{id}", get(analyses::list_analyses_by_user))
        .route("/{id}", get(analyses::get_analysis));

    let log_routes = Router::new()
        .route("/", post(logs::create_log))
        .route("/all", get(logs::list_logs))
        .route("/user/{id}", get(logs::list_logs_by_user))
        .route("/{id}", get(logs::get_log));

    let qoption_routes = Router::new()
        .route("/", post(qoptions::create_qoption))
        .route("/all/{question_id}", get(qoptions::list_qoptions_by_question))
        .route(
            "/{id}",
            get(qoptions::get_qoption).put(qoptions::update_qoption),
        );

    let school_routes = Router::new()
        .route("/", post(schools::create_school))
        .route("/all", get(schools::list_schools))
        .route("/{id}", get(schools::get_school).put(schools::update_school));

    let topic_routes = Router::new()
        .route("/", post(topics::create_topic))
        .route("/all", get(topics::list_topics))
        .route("/{id}", get(topics::get_topic).put(topics::update_topic));

    let ml_routes = Router::new().route("/df/{quiz_id}", get(ml::get_df));

    Router::new()
        .nest("/users", user_routes)
        .nest("/questions", question_routes)
        .nest("/quizzes", quiz_routes)
        .nest("/answers", answer_routes)
        .nest("/analyses", analysis_routes)
        .nest("/logs", log_routes)
        .nest("/qoptions", qoption_routes)
        .nest("/schools", school_routes)
        .nest("/topics", topic_routes)
        .nest("/ml", ml_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
