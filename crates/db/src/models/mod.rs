//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the rows the API returns
//! - Plain insert/update DTOs built by handlers after validation

pub mod activity;
pub mod appointment;
pub mod article;
pub mod challenge;
pub mod doctor;
pub mod faq;
pub mod glucose;
pub mod meal;
pub mod medication;
pub mod message;
pub mod notification;
pub mod patient;
pub mod reminder;
pub mod user;
