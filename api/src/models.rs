//! Wire types for the booking backend.
//!
//! Field names follow the backend's camelCase JSON; every struct renames
//! accordingly so call sites stay snake_case Rust.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub city: String,
    pub country: String,
    pub rating: f32,
    pub image_url: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    pub price_per_night: f64,
    #[serde(default)]
    pub distance_from_haram: Option<f64>,
    #[serde(default)]
    pub distance_from_nabawi: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub hotel_id: String,
    pub name: String,
    pub description: String,
    pub max_occupancy: u32,
    pub price_per_night: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub available: bool,
}

/// Hotel list filters. Everything is optional; only set fields become query
/// parameters, and `amenities` repeats its key once per value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearchParams {
    pub city: Option<String>,
    pub country: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<u32>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub rating: Option<f32>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub distance_from_haram: Option<f64>,
    pub distance_from_nabawi: Option<f64>,
}

impl HotelSearchParams {
    /// Flattens the filters into `(key, value)` query pairs.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        let push_opt =
            |query: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<String>| {
                if let Some(value) = value {
                    query.push((key, value));
                }
            };
        push_opt(&mut query, "city", self.city.clone());
        push_opt(&mut query, "country", self.country.clone());
        push_opt(&mut query, "checkIn", self.check_in.clone());
        push_opt(&mut query, "checkOut", self.check_out.clone());
        push_opt(&mut query, "guests", self.guests.map(|n| n.to_string()));
        push_opt(&mut query, "minPrice", self.min_price.map(|n| n.to_string()));
        push_opt(&mut query, "maxPrice", self.max_price.map(|n| n.to_string()));
        push_opt(&mut query, "rating", self.rating.map(|n| n.to_string()));
        for amenity in &self.amenities {
            query.push(("amenities", amenity.clone()));
        }
        push_opt(
            &mut query,
            "distanceFromHaram",
            self.distance_from_haram.map(|n| n.to_string()),
        );
        push_opt(
            &mut query,
            "distanceFromNabawi",
            self.distance_from_nabawi.map(|n| n.to_string()),
        );
        query
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportOption {
    pub id: String,
    pub airline: String,
    #[serde(default)]
    pub flight_number: Option<String>,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_date: String,
    #[serde(default)]
    pub return_date: Option<String>,
    pub price: f64,
    pub seats_available: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundTransport {
    pub id: String,
    pub transport_type: String,
    pub name: String,
    pub route: String,
    pub price: f64,
    pub capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration: u32,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub transport_options: Vec<TransportOption>,
    pub total_price: f64,
    #[serde(default)]
    pub discount: Option<f64>,
    pub image_url: String,
    #[serde(default)]
    pub inclusions: Vec<String>,
    #[serde(default)]
    pub exclusions: Vec<String>,
    pub available: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Agent,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: UserRole,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub roles: Option<UserRole>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Envelope the transport endpoints wrap their payloads in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub conversation_id: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub conversation_id: String,
    pub reply: String,
}
