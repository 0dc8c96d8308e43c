pub mod browse;
pub mod episode;
pub mod health;
pub mod history;
pub mod star;
pub mod toon;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                                    create
/// /users/{user_id}                          get, update, delete
/// /users/{user_id}/stars                    stars of a user (?weekday=)
/// /users/{user_id}/toons/{toon_id}/stars    stars of a user on one toon
/// /users/{user_id}/history                  view history of a user
/// /users/{user_id}/unseen                   unseen episodes of starred toons
///
/// /toons                                    list (?platform=), create
/// /toons/{id}                               get, update, delete
/// /toons/{id}/episodes                      episodes by sequence
/// /toons/{id}/thumbnail                     thumbnail proxy
///
/// /episodes                                 create
/// /episodes/{id}                            get, update, delete
/// /episodes/{id}/history                    view history of an episode
/// /episodes/{id}/thumbnail                  thumbnail proxy
///
/// /stars                                    create
/// /stars/{id}                               get, update, delete
///
/// /history                                  create
/// /history/{id}                             get, update, delete
///
/// /browse/{platform}                        toons with latest episode (?weekday=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user::router())
        .nest("/toons", toon::router())
        .nest("/episodes", episode::router())
        .nest("/stars", star::router())
        .nest("/history", history::router())
        .nest("/browse", browse::router())
}
