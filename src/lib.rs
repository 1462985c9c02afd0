/*
 * Responsibility
 * - Library root so the server binary, the smoke binary and tests/ share the same code
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
