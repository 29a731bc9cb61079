//! Supabase-style backend: PostgREST for reads, GoTrue for auth.

mod auth;
mod client;
mod dto;
mod rest;

pub use client::SupabaseClient;
pub use rest::{parse_content_range, query_params};
