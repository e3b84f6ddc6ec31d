//! REST interface to the Manasik booking backend.
//!
//! The backend is a conventional JSON-over-HTTP service; this crate holds the
//! data-transfer types plus a thin typed client and nothing else, so the UI
//! crates never touch raw endpoints or untyped payloads.

pub mod client;
pub mod models;

pub use client::{ApiClient, ApiError, DEFAULT_BASE_URL};
pub use models::{
    ApiResponse, AuthResponse, ChatReply, ChatRequest, GroundTransport, Hotel, HotelSearchParams,
    LoginRequest, Package, RegisterRequest, RegisterResponse, Room, TransportOption, User,
    UserRole,
};
