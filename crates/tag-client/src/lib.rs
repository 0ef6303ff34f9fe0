//! tag-client library
//!
//! HTTP transport to the tag service, plus the `TagService` seam the
//! creation flow is written against.

pub(crate) mod client;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError, TagService};
