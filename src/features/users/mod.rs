//! Users feature: account registration, profile updates and deactivation.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/users` | List all users |
//! | GET | `/api/users/{id}` | Get user by ID |
//! | POST | `/api/users` | Register user |
//! | PUT | `/api/users` | Update user account |
//! | DELETE | `/api/users/{id}` | Deactivate user |

pub mod dtos;
pub mod handlers;
pub mod mapping;
pub mod models;
pub mod repositories;
pub mod routes;
