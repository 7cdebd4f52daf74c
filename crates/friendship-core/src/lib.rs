//! Friendship Core Library
//!
//! An undirected social graph of people and friendship links with
//! breadth-first shortest-distance queries.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod person;

pub use graph::{Distance, Edge, FriendshipGraph};
pub use person::Person;
