use crate::service::AtlasService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the row source is behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Atlas loader (live row store with static fallback).
    pub atlas: AtlasService,
}
