//! Domain DTOs for the clinic API.
//!
//! # Design
//! Shapes mirror the backend's wire format but are defined independently;
//! integration tests against the mock server catch drift. Add-shapes are the
//! full entity minus its identifier; Update-shapes are the Add-shape with
//! every field optional and omitted from the JSON when absent. Identifiers
//! and dates travel as strings — the client never parses them.

pub mod owner;
pub mod pet;
pub mod service_instance;
pub mod statistic;
pub mod vet;

pub use owner::{AddOwner, Owner, OwnerWithPets, UpdateOwner};
pub use pet::{AddPet, Pet, UpdatePet};
pub use service_instance::{
    AddGrooming, AddPreventiveCare, AddServiceInstance, AddSurgery, Grooming, PreventiveCare,
    ServiceHistory, ServiceInstance, Surgery, UpdateServiceInstance, UpdateSurgery,
};
pub use statistic::{PetVisitSummary, ServiceTypeCount};
pub use vet::{AddVet, UpdateVet, Vet, VetSnapshot};
