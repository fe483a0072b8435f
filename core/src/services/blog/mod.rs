//! Blog article service module

mod service;

#[cfg(test)]
mod tests;

pub use service::{AddArticle, BlogService, UpdateArticle};
