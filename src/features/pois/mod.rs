//! POIs feature: individual points of interest inside a destination, each
//! classified by a POI type.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/pois` | List all POIs |
//! | GET | `/api/pois/{id}` | Get POI by ID |
//! | POST | `/api/pois` | Create POI |
//! | PUT | `/api/pois` | Update POI |
//! | DELETE | `/api/pois/{id}` | Deactivate POI |

pub mod dtos;
pub mod handlers;
pub mod mapping;
pub mod models;
pub mod repositories;
pub mod routes;
