//! Types shared between the diary frontend and the remote GraphQL API.

pub mod domain;
pub mod system;
