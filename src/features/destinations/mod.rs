//! Destinations feature: the places travelers visit, each anchored to a
//! province, a destination type and a point location.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/destinations` | List all destinations |
//! | GET | `/api/destinations/{id}` | Get destination by ID |
//! | POST | `/api/destinations` | Create destination |
//! | PUT | `/api/destinations` | Update destination |
//! | DELETE | `/api/destinations/{id}` | Deactivate destination |

pub mod dtos;
pub mod handlers;
pub mod mapping;
pub mod models;
pub mod repositories;
pub mod routes;
