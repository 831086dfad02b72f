//! Content module - the CMS models, queries and the client that fetches them

mod client;
mod graphql;
mod models;
pub mod queries;
mod source;

#[cfg(test)]
pub(crate) mod testing;

pub use client::ContentClient;
pub use graphql::GraphQLClient;
pub use models::{
    AdjacentPosts, Author, Category, Comment, CommentSubmission, Connection, Edge, Image, Post,
    PostSummary, RichText,
};
pub use source::ContentSource;
