//! Client library for the veterinary-clinic REST API.
//!
//! # Overview
//! All network traffic flows through one [`gateway::Gateway`]
//! implementation, injected into per-resource services
//! ([`services::OwnerService`], [`services::PetService`], ...). Every
//! operation maps to exactly one REST endpoint and returns the normalized
//! [`http::Envelope`] untouched; failures are logged once at the gateway and
//! re-raised unchanged.
//!
//! # Design
//! - Services hold a gateway by value (composition over inheritance), so
//!   tests substitute a recording stub without touching the network.
//! - The transport is configured once at startup from [`config::Config`];
//!   nothing mutates process-wide state afterwards.
//! - Request payloads are explicit serde types; response `data` stays
//!   untyped JSON with [`http::Envelope::data_as`] for opt-in typing.
//! - No retries, caching, deduplication, or auth — terminal error handling
//!   belongs to the caller.

pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod reference;
pub mod services;
pub mod stores;
pub mod types;

pub use config::Config;
pub use error::ApiError;
pub use gateway::{Gateway, HttpGateway};
pub use http::{Envelope, HttpMethod};
pub use services::{
    IndexService, ListQuery, OwnerService, PetService, ServiceInstanceService, StatisticService,
    VetService,
};
