//! Diet tracking service: users register, log in with a cookie session and record
//! meals as in-diet or out-diet. `GET /meals/summary` aggregates them.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod meals;
pub mod state;
pub mod storage;
