//! POI types feature: the classification lookup for points of interest
//! (restaurant, viewpoint, market and so on).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/poi-types` | List all POI types |
//! | GET | `/api/poi-types/{id}` | Get POI type by ID |
//! | POST | `/api/poi-types` | Create POI type |
//! | PUT | `/api/poi-types` | Update POI type |
//! | DELETE | `/api/poi-types/{id}` | Deactivate POI type |

pub mod dtos;
pub mod handlers;
pub mod mapping;
pub mod models;
pub mod repositories;
pub mod routes;
