/*
 * Responsibility
 * - Public interface of the middleware (apply functions per concern)
 * - Each module exposes `apply(router, ..) -> Router` so app.rs only stacks them
 */
pub mod faults;
pub mod http;
pub mod security_headers;
