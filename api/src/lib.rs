//! HTTP layer for the blog backend: routes, DTOs, middleware and the
//! application factory.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
