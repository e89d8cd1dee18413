//! Destination types feature: the classification lookup for destinations
//! (beach, mountain, historical site and so on).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/destination-types` | List all destination types |
//! | GET | `/api/destination-types/{id}` | Get destination type by ID |
//! | POST | `/api/destination-types` | Create destination type |
//! | PUT | `/api/destination-types` | Update destination type |
//! | DELETE | `/api/destination-types/{id}` | Deactivate destination type |

pub mod dtos;
pub mod handlers;
pub mod mapping;
pub mod models;
pub mod repositories;
pub mod routes;
