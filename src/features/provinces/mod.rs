//! Provinces feature: the administrative regions destinations belong to.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/provinces` | List all provinces |
//! | GET | `/api/provinces/{id}` | Get province by ID |
//! | POST | `/api/provinces` | Create province |
//! | PUT | `/api/provinces` | Update province |
//! | DELETE | `/api/provinces/{id}` | Deactivate province |

pub mod dtos;
pub mod handlers;
pub mod mapping;
pub mod models;
pub mod repositories;
pub mod routes;
