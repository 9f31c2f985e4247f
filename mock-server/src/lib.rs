//! In-memory clinic backend used by the client's integration tests.
//!
//! Implements the REST surface the client consumes — owners, pets, vets,
//! service instances, and statistics — against `HashMap` state behind one
//! `RwLock`. Response bodies mirror the production backend's
//! `{"status":"success","message":...,<resource>:...}` shape, ids are v4
//! UUID strings, and nested grooming/preventive-care/surgery records get
//! sequential integer ids.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

// --- stored records ---

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Owner {
    pub owner_id: String,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_phone_number: String,
    pub owner_address: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pet {
    pub pet_id: String,
    pub pet_name: String,
    pub pet_birth_date: String,
    pub pet_type: String,
    pub pet_breed: String,
    pub pet_weight: f64,
    pub pet_color: String,
    pub owner_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vet {
    pub vet_id: String,
    pub vet_name: String,
    pub vet_email: String,
    pub vet_phone_number: String,
    pub vet_license_number: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VetSnapshot {
    pub vet_name: String,
    pub vet_email: String,
    pub vet_phone_number: String,
    pub vet_license_number: String,
}

impl From<&Vet> for VetSnapshot {
    fn from(vet: &Vet) -> Self {
        Self {
            vet_name: vet.vet_name.clone(),
            vet_email: vet.vet_email.clone(),
            vet_phone_number: vet.vet_phone_number.clone(),
            vet_license_number: vet.vet_license_number.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grooming {
    pub grooming_id: i32,
    pub grooming_type: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PreventiveCare {
    pub preventive_care_id: i32,
    pub treatment: String,
    pub vet: VetSnapshot,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Surgery {
    pub surgery_id: i32,
    pub surgery_name: String,
    pub veterinarian_diagnosis: Option<String>,
    pub anesthesia_used: Option<String>,
    pub complications: Option<String>,
    pub outcome: Option<String>,
    pub vet: VetSnapshot,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceInstance {
    pub service_instance_id: String,
    pub pet_id: String,
    pub service_date: String,
    pub service_type: Vec<String>,
    pub service_reason: String,
    pub general_diagnosis: String,
    pub requires_followup: bool,
    pub followup_date: Option<String>,
    pub grooming: Option<Vec<Grooming>>,
    pub preventive_care: Option<Vec<PreventiveCare>>,
    pub surgery: Option<Vec<Surgery>>,
}

// --- request payloads ---

#[derive(Deserialize)]
pub struct AddOwner {
    pub owner_name: String,
    pub owner_email: String,
    pub owner_phone_number: String,
    pub owner_address: String,
}

#[derive(Deserialize)]
pub struct UpdateOwner {
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
    pub owner_phone_number: Option<String>,
    pub owner_address: Option<String>,
}

#[derive(Deserialize)]
pub struct AddPet {
    pub pet_name: String,
    pub pet_birth_date: String,
    pub pet_type: String,
    pub pet_breed: String,
    pub pet_weight: f64,
    pub pet_color: String,
    pub owner_id: String,
}

#[derive(Deserialize)]
pub struct UpdatePet {
    pub pet_name: Option<String>,
    pub pet_birth_date: Option<String>,
    pub pet_type: Option<String>,
    pub pet_breed: Option<String>,
    pub pet_weight: Option<f64>,
    pub pet_color: Option<String>,
    pub owner_id: Option<String>,
}

#[derive(Deserialize)]
pub struct AddVet {
    pub vet_name: String,
    pub vet_email: String,
    pub vet_phone_number: String,
    pub vet_license_number: String,
}

#[derive(Deserialize)]
pub struct UpdateVet {
    pub vet_name: Option<String>,
    pub vet_email: Option<String>,
    pub vet_phone_number: Option<String>,
    pub vet_license_number: Option<String>,
}

#[derive(Deserialize)]
pub struct AddSurgery {
    pub surgery_name: String,
    pub veterinarian_diagnosis: Option<String>,
    pub anesthesia_used: Option<String>,
    pub complications: Option<String>,
    pub outcome: Option<String>,
    pub vet_id: String,
}

#[derive(Deserialize)]
pub struct AddServiceInstance {
    pub pet_id: String,
    pub service_date: String,
    pub service_type: Vec<String>,
    pub service_reason: String,
    pub general_diagnosis: String,
    pub requires_followup: bool,
    pub followup_date: Option<String>,
    pub grooming_type: Option<Vec<String>>,
    pub treatment: Option<Vec<String>>,
    pub surgery: Option<AddSurgery>,
}

#[derive(Deserialize)]
pub struct UpdateServiceInstance {
    pub service_date: Option<String>,
    pub service_type: Option<Vec<String>>,
    pub service_reason: Option<String>,
    pub general_diagnosis: Option<String>,
    pub requires_followup: Option<bool>,
    pub followup_date: Option<String>,
}

#[derive(Deserialize)]
pub struct AddGrooming {
    pub grooming_type: Vec<String>,
}

#[derive(Deserialize)]
pub struct AddPreventiveCare {
    pub treatment: Vec<String>,
    pub vet_id: String,
}

#[derive(Deserialize)]
pub struct UpdateSurgery {
    pub surgery_name: Option<String>,
    pub veterinarian_diagnosis: Option<String>,
    pub anesthesia_used: Option<String>,
    pub complications: Option<String>,
    pub outcome: Option<String>,
    pub vet_id: Option<String>,
}

/// List filtering and pagination, shared by every list endpoint.
#[derive(Deserialize, Default)]
pub struct FilterOptions {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub search: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

// --- state ---

#[derive(Default)]
pub struct Clinic {
    pub owners: HashMap<String, Owner>,
    pub pets: HashMap<String, Pet>,
    pub vets: HashMap<String, Vet>,
    pub instances: HashMap<String, ServiceInstance>,
    next_record_id: i32,
}

impl Clinic {
    fn next_record_id(&mut self) -> i32 {
        self.next_record_id += 1;
        self.next_record_id
    }
}

pub type Db = Arc<RwLock<Clinic>>;

type Reply = (StatusCode, Json<Value>);

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Clinic::default()));

    let owner_routes = Router::new()
        .route("/get_owners", get(get_owners))
        .route("/get_owner_and_pets/{owner_id}", get(get_owner_and_pets))
        .route("/add_owner", post(add_owner))
        .route("/update_owner/{owner_id}", patch(update_owner))
        .route("/delete_owner/{owner_id}", delete(delete_owner));

    let pet_routes = Router::new()
        .route("/get_pets", get(get_pets))
        .route("/get_pet/{pet_id}", get(get_pet))
        .route("/add_pet", post(add_pet))
        .route("/update_pet/{pet_id}", patch(update_pet))
        .route("/delete_pet/{pet_id}", delete(delete_pet));

    let vet_routes = Router::new()
        .route("/get_vets", get(get_vets))
        .route("/get_vet_lists", get(get_vet_lists))
        .route("/add_vet", post(add_vet))
        .route("/update_vet/{vet_id}", patch(update_vet))
        .route("/delete_vet/{vet_id}", delete(delete_vet));

    let service_instance_routes = Router::new()
        .route("/add_service_instance", post(add_service_instance))
        .route("/get_pet_histories/{pet_id}", get(get_pet_histories))
        .route(
            "/get_specific_service_instance/{service_instance_id}",
            get(get_specific_service_instance),
        )
        .route(
            "/update_service_instance/{service_instance_id}",
            patch(update_service_instance),
        )
        .route("/delete_service/{service_instance_id}", delete(delete_service))
        .route(
            "/add_grooming_to_instance/{service_instance_id}",
            post(add_grooming_to_instance),
        )
        .route(
            "/delete_grooming_from_instance/{grooming_id}",
            delete(delete_grooming_from_instance),
        )
        .route(
            "/add_preventive_care_to_instance/{service_instance_id}",
            post(add_preventive_care_to_instance),
        )
        .route(
            "/delete_preventive_care_from_instance/{preventive_care_id}",
            delete(delete_preventive_care_from_instance),
        )
        .route(
            "/update_surgery_from_instance/{surgery_id}",
            patch(update_surgery_from_instance),
        )
        .route(
            "/delete_surgery_from_instance/{surgery_id}",
            delete(delete_surgery_from_instance),
        );

    let statistic_routes = Router::new()
        .route("/counter_services", get(counter_services))
        .route("/get_pet_type_visit_summary", get(get_pet_type_visit_summary));

    Router::new()
        .route("/api", get(index))
        .route("/api/health_check", get(health_check))
        .nest("/api/owner", owner_routes)
        .nest("/api/pet", pet_routes)
        .nest("/api/vet", vet_routes)
        .nest("/api/service_instance", service_instance_routes)
        .nest("/api/statistics", statistic_routes)
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn not_found(what: &str) -> Reply {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"status": "error", "message": format!("{what} not found")})),
    )
}

/// Page a sorted collection, returning the requested slice and the total
/// page count under the backend's defaults (page 1, limit 10).
fn paginate<T: Clone>(items: &[T], opts: &FilterOptions) -> (Vec<T>, usize) {
    let limit = opts.limit.unwrap_or(10).max(1);
    let page = opts.page.unwrap_or(1).max(1);
    let total_pages = items.len().div_ceil(limit);
    let paged = items
        .iter()
        .skip((page - 1) * limit)
        .take(limit)
        .cloned()
        .collect();
    (paged, total_pages)
}

fn matches_search(name: &str, opts: &FilterOptions) -> bool {
    match opts.search.as_deref() {
        None | Some("") => true,
        Some(search) => name.to_lowercase().contains(&search.to_lowercase()),
    }
}

// --- index ---

async fn index() -> Reply {
    (
        StatusCode::OK,
        Json(json!({"status": "success", "message": "Pet Clinic API"})),
    )
}

async fn health_check() -> Reply {
    (
        StatusCode::OK,
        Json(json!({"status": "success", "message": "API is healthy"})),
    )
}

// --- owners ---

async fn get_owners(State(db): State<Db>, Query(opts): Query<FilterOptions>) -> Reply {
    let clinic = db.read().await;

    let mut owners: Vec<Owner> = clinic
        .owners
        .values()
        .filter(|o| matches_search(&o.owner_name, &opts))
        .cloned()
        .collect();
    owners.sort_by(|a, b| a.owner_name.cmp(&b.owner_name));
    let (owners, total_pages) = paginate(&owners, &opts);

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Owners fetched successfully",
            "owners": owners,
            "total_pages": total_pages,
        })),
    )
}

async fn get_owner_and_pets(State(db): State<Db>, Path(owner_id): Path<String>) -> Reply {
    let clinic = db.read().await;
    let Some(owner) = clinic.owners.get(&owner_id) else {
        return not_found("Owner");
    };
    let mut pets: Vec<Pet> = clinic
        .pets
        .values()
        .filter(|p| p.owner_id == owner_id)
        .cloned()
        .collect();
    pets.sort_by(|a, b| a.pet_name.cmp(&b.pet_name));

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Owner and pets fetched successfully",
            "owner": owner,
            "pets": pets,
        })),
    )
}

async fn add_owner(State(db): State<Db>, Json(body): Json<AddOwner>) -> Reply {
    let owner = Owner {
        owner_id: Uuid::new_v4().to_string(),
        owner_name: body.owner_name,
        owner_email: body.owner_email,
        owner_phone_number: body.owner_phone_number,
        owner_address: body.owner_address,
    };
    db.write()
        .await
        .owners
        .insert(owner.owner_id.clone(), owner.clone());

    (
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "message": "Owner added successfully",
            "owner": owner,
        })),
    )
}

async fn update_owner(
    State(db): State<Db>,
    Path(owner_id): Path<String>,
    Json(body): Json<UpdateOwner>,
) -> Reply {
    let mut clinic = db.write().await;
    let Some(owner) = clinic.owners.get_mut(&owner_id) else {
        return not_found("Owner");
    };
    if let Some(name) = body.owner_name {
        owner.owner_name = name;
    }
    if let Some(email) = body.owner_email {
        owner.owner_email = email;
    }
    if let Some(phone) = body.owner_phone_number {
        owner.owner_phone_number = phone;
    }
    if let Some(address) = body.owner_address {
        owner.owner_address = address;
    }

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Owner updated successfully",
            "owner": owner.clone(),
        })),
    )
}

async fn delete_owner(State(db): State<Db>, Path(owner_id): Path<String>) -> Reply {
    let mut clinic = db.write().await;
    if clinic.owners.remove(&owner_id).is_none() {
        return not_found("Owner");
    }
    clinic.pets.retain(|_, pet| pet.owner_id != owner_id);

    (
        StatusCode::OK,
        Json(json!({"status": "success", "message": "Owner deleted successfully"})),
    )
}

// --- pets ---

async fn get_pets(State(db): State<Db>, Query(opts): Query<FilterOptions>) -> Reply {
    let clinic = db.read().await;

    let mut pets: Vec<Pet> = clinic
        .pets
        .values()
        .filter(|p| matches_search(&p.pet_name, &opts))
        .cloned()
        .collect();
    pets.sort_by(|a, b| a.pet_name.cmp(&b.pet_name));
    let (pets, total_pages) = paginate(&pets, &opts);

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Pets fetched successfully",
            "pets": pets,
            "total_pages": total_pages,
        })),
    )
}

async fn get_pet(State(db): State<Db>, Path(pet_id): Path<String>) -> Reply {
    let clinic = db.read().await;
    let Some(pet) = clinic.pets.get(&pet_id) else {
        return not_found("Pet");
    };

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Pet fetched successfully",
            "pet": pet,
        })),
    )
}

async fn add_pet(State(db): State<Db>, Json(body): Json<AddPet>) -> Reply {
    let mut clinic = db.write().await;
    if !clinic.owners.contains_key(&body.owner_id) {
        return not_found("Owner");
    }
    let pet = Pet {
        pet_id: Uuid::new_v4().to_string(),
        pet_name: body.pet_name,
        pet_birth_date: body.pet_birth_date,
        pet_type: body.pet_type,
        pet_breed: body.pet_breed,
        pet_weight: body.pet_weight,
        pet_color: body.pet_color,
        owner_id: body.owner_id,
    };
    clinic.pets.insert(pet.pet_id.clone(), pet.clone());

    (
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "message": "Pet added successfully",
            "pet": pet,
        })),
    )
}

async fn update_pet(
    State(db): State<Db>,
    Path(pet_id): Path<String>,
    Json(body): Json<UpdatePet>,
) -> Reply {
    let mut clinic = db.write().await;
    let Some(pet) = clinic.pets.get_mut(&pet_id) else {
        return not_found("Pet");
    };
    if let Some(name) = body.pet_name {
        pet.pet_name = name;
    }
    if let Some(birth_date) = body.pet_birth_date {
        pet.pet_birth_date = birth_date;
    }
    if let Some(pet_type) = body.pet_type {
        pet.pet_type = pet_type;
    }
    if let Some(breed) = body.pet_breed {
        pet.pet_breed = breed;
    }
    if let Some(weight) = body.pet_weight {
        pet.pet_weight = weight;
    }
    if let Some(color) = body.pet_color {
        pet.pet_color = color;
    }
    if let Some(owner_id) = body.owner_id {
        pet.owner_id = owner_id;
    }

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Pet updated successfully",
            "pet": pet.clone(),
        })),
    )
}

async fn delete_pet(State(db): State<Db>, Path(pet_id): Path<String>) -> Reply {
    let mut clinic = db.write().await;
    if clinic.pets.remove(&pet_id).is_none() {
        return not_found("Pet");
    }

    (
        StatusCode::OK,
        Json(json!({"status": "success", "message": "Pet deleted successfully"})),
    )
}

// --- vets ---

async fn get_vets(State(db): State<Db>, Query(opts): Query<FilterOptions>) -> Reply {
    let clinic = db.read().await;

    let mut vets: Vec<Vet> = clinic.vets.values().cloned().collect();
    vets.sort_by(|a, b| a.vet_name.cmp(&b.vet_name));
    let (vets, total_pages) = paginate(&vets, &opts);

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Vets fetched successfully",
            "vets": vets,
            "total_pages": total_pages,
        })),
    )
}

async fn get_vet_lists(State(db): State<Db>) -> Reply {
    let clinic = db.read().await;
    let mut vets: Vec<Value> = clinic
        .vets
        .values()
        .map(|v| json!({"vet_id": v.vet_id, "vet_name": v.vet_name}))
        .collect();
    vets.sort_by_key(|v| v["vet_name"].as_str().unwrap_or_default().to_string());

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Vet list fetched successfully",
            "vets": vets,
        })),
    )
}

async fn add_vet(State(db): State<Db>, Json(body): Json<AddVet>) -> Reply {
    let vet = Vet {
        vet_id: Uuid::new_v4().to_string(),
        vet_name: body.vet_name,
        vet_email: body.vet_email,
        vet_phone_number: body.vet_phone_number,
        vet_license_number: body.vet_license_number,
    };
    db.write().await.vets.insert(vet.vet_id.clone(), vet.clone());

    (
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "message": "Vet added successfully",
            "vet": vet,
        })),
    )
}

async fn update_vet(
    State(db): State<Db>,
    Path(vet_id): Path<String>,
    Json(body): Json<UpdateVet>,
) -> Reply {
    let mut clinic = db.write().await;
    let Some(vet) = clinic.vets.get_mut(&vet_id) else {
        return not_found("Vet");
    };
    if let Some(name) = body.vet_name {
        vet.vet_name = name;
    }
    if let Some(email) = body.vet_email {
        vet.vet_email = email;
    }
    if let Some(phone) = body.vet_phone_number {
        vet.vet_phone_number = phone;
    }
    if let Some(license) = body.vet_license_number {
        vet.vet_license_number = license;
    }

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Vet updated successfully",
            "vet": vet.clone(),
        })),
    )
}

async fn delete_vet(State(db): State<Db>, Path(vet_id): Path<String>) -> Reply {
    let mut clinic = db.write().await;
    if clinic.vets.remove(&vet_id).is_none() {
        return not_found("Vet");
    }

    (
        StatusCode::OK,
        Json(json!({"status": "success", "message": "Vet deleted successfully"})),
    )
}

// --- service instances ---

async fn add_service_instance(
    State(db): State<Db>,
    Json(body): Json<AddServiceInstance>,
) -> Reply {
    let mut clinic = db.write().await;
    if !clinic.pets.contains_key(&body.pet_id) {
        return not_found("Pet");
    }

    let surgery_vet = body
        .surgery
        .as_ref()
        .map(|s| clinic.vets.get(&s.vet_id).map(VetSnapshot::from));
    if let Some(None) = surgery_vet {
        return not_found("Vet");
    }

    let grooming = body.grooming_type.unwrap_or_default();
    let grooming = grooming
        .into_iter()
        .map(|grooming_type| Grooming {
            grooming_id: clinic.next_record_id(),
            grooming_type,
        })
        .collect::<Vec<_>>();

    // Treatments recorded at intake get the surgery vet's snapshot when one
    // exists, otherwise an empty snapshot.
    let treatment_vet = surgery_vet.clone().flatten().unwrap_or_default();
    let preventive_care = body.treatment.unwrap_or_default();
    let preventive_care = preventive_care
        .into_iter()
        .map(|treatment| PreventiveCare {
            preventive_care_id: clinic.next_record_id(),
            treatment,
            vet: treatment_vet.clone(),
        })
        .collect::<Vec<_>>();

    let surgery = match body.surgery {
        Some(s) => {
            let surgery_id = clinic.next_record_id();
            vec![Surgery {
                surgery_id,
                surgery_name: s.surgery_name,
                veterinarian_diagnosis: s.veterinarian_diagnosis,
                anesthesia_used: s.anesthesia_used,
                complications: s.complications,
                outcome: s.outcome,
                vet: surgery_vet.clone().flatten().unwrap_or_default(),
            }]
        }
        None => Vec::new(),
    };

    let instance = ServiceInstance {
        service_instance_id: Uuid::new_v4().to_string(),
        pet_id: body.pet_id,
        service_date: body.service_date,
        service_type: body.service_type,
        service_reason: body.service_reason,
        general_diagnosis: body.general_diagnosis,
        requires_followup: body.requires_followup,
        followup_date: body.followup_date,
        grooming: Some(grooming),
        preventive_care: Some(preventive_care),
        surgery: Some(surgery),
    };
    clinic
        .instances
        .insert(instance.service_instance_id.clone(), instance.clone());

    (
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "message": "Service instance added successfully",
            "service_instance": instance,
        })),
    )
}

async fn get_pet_histories(
    State(db): State<Db>,
    Path(pet_id): Path<String>,
    Query(opts): Query<FilterOptions>,
) -> Reply {
    let clinic = db.read().await;
    if !clinic.pets.contains_key(&pet_id) {
        return not_found("Pet");
    }

    let in_range = |date: &str| {
        let after_start = match opts.start_date.as_deref() {
            None | Some("") => true,
            Some(start) => date >= start,
        };
        let before_end = match opts.end_date.as_deref() {
            None | Some("") => true,
            Some(end) => date <= end,
        };
        after_start && before_end
    };

    let mut services: Vec<Value> = clinic
        .instances
        .values()
        .filter(|i| i.pet_id == pet_id && in_range(&i.service_date))
        .map(|i| {
            json!({
                "service_instance_id": i.service_instance_id,
                "service_date": i.service_date,
                "service_type": i.service_type,
                "service_reason": i.service_reason,
                "general_diagnosis": i.general_diagnosis,
                "requires_followup": i.requires_followup,
                "followup_date": i.followup_date,
            })
        })
        .collect();
    services.sort_by_key(|s| s["service_date"].as_str().unwrap_or_default().to_string());

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Pet histories fetched successfully",
            "services": services,
        })),
    )
}

async fn get_specific_service_instance(
    State(db): State<Db>,
    Path(service_instance_id): Path<String>,
) -> Reply {
    let clinic = db.read().await;
    let Some(instance) = clinic.instances.get(&service_instance_id) else {
        return not_found("Service instance");
    };

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Service instance fetched successfully",
            "service_instance": instance,
        })),
    )
}

async fn update_service_instance(
    State(db): State<Db>,
    Path(service_instance_id): Path<String>,
    Json(body): Json<UpdateServiceInstance>,
) -> Reply {
    let mut clinic = db.write().await;
    let Some(instance) = clinic.instances.get_mut(&service_instance_id) else {
        return not_found("Service instance");
    };
    if let Some(date) = body.service_date {
        instance.service_date = date;
    }
    if let Some(service_type) = body.service_type {
        instance.service_type = service_type;
    }
    if let Some(reason) = body.service_reason {
        instance.service_reason = reason;
    }
    if let Some(diagnosis) = body.general_diagnosis {
        instance.general_diagnosis = diagnosis;
    }
    if let Some(requires_followup) = body.requires_followup {
        instance.requires_followup = requires_followup;
    }
    if let Some(followup_date) = body.followup_date {
        instance.followup_date = Some(followup_date);
    }

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Service instance updated successfully",
            "service_instance": instance.clone(),
        })),
    )
}

async fn delete_service(
    State(db): State<Db>,
    Path(service_instance_id): Path<String>,
) -> Reply {
    let mut clinic = db.write().await;
    if clinic.instances.remove(&service_instance_id).is_none() {
        return not_found("Service instance");
    }

    (
        StatusCode::OK,
        Json(json!({"status": "success", "message": "Service instance deleted successfully"})),
    )
}

async fn add_grooming_to_instance(
    State(db): State<Db>,
    Path(service_instance_id): Path<String>,
    Json(body): Json<AddGrooming>,
) -> Reply {
    let mut clinic = db.write().await;
    if !clinic.instances.contains_key(&service_instance_id) {
        return not_found("Service instance");
    }
    let entries: Vec<Grooming> = body
        .grooming_type
        .into_iter()
        .map(|grooming_type| Grooming {
            grooming_id: clinic.next_record_id(),
            grooming_type,
        })
        .collect();
    let Some(instance) = clinic.instances.get_mut(&service_instance_id) else {
        return not_found("Service instance");
    };
    instance.grooming.get_or_insert_with(Vec::new).extend(entries);

    (
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "message": "Grooming added successfully",
            "service_instance": instance.clone(),
        })),
    )
}

async fn delete_grooming_from_instance(
    State(db): State<Db>,
    Path(grooming_id): Path<i32>,
) -> Reply {
    let mut clinic = db.write().await;
    for instance in clinic.instances.values_mut() {
        if let Some(grooming) = instance.grooming.as_mut() {
            let before = grooming.len();
            grooming.retain(|g| g.grooming_id != grooming_id);
            if grooming.len() < before {
                return (
                    StatusCode::OK,
                    Json(json!({"status": "success", "message": "Grooming deleted successfully"})),
                );
            }
        }
    }
    not_found("Grooming")
}

async fn add_preventive_care_to_instance(
    State(db): State<Db>,
    Path(service_instance_id): Path<String>,
    Json(body): Json<AddPreventiveCare>,
) -> Reply {
    let mut clinic = db.write().await;
    if !clinic.instances.contains_key(&service_instance_id) {
        return not_found("Service instance");
    }
    let Some(vet) = clinic.vets.get(&body.vet_id).map(VetSnapshot::from) else {
        return not_found("Vet");
    };
    let entries: Vec<PreventiveCare> = body
        .treatment
        .into_iter()
        .map(|treatment| PreventiveCare {
            preventive_care_id: clinic.next_record_id(),
            treatment,
            vet: vet.clone(),
        })
        .collect();
    let Some(instance) = clinic.instances.get_mut(&service_instance_id) else {
        return not_found("Service instance");
    };
    instance
        .preventive_care
        .get_or_insert_with(Vec::new)
        .extend(entries);

    (
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "message": "Preventive care added successfully",
            "service_instance": instance.clone(),
        })),
    )
}

async fn delete_preventive_care_from_instance(
    State(db): State<Db>,
    Path(preventive_care_id): Path<i32>,
) -> Reply {
    let mut clinic = db.write().await;
    for instance in clinic.instances.values_mut() {
        if let Some(care) = instance.preventive_care.as_mut() {
            let before = care.len();
            care.retain(|c| c.preventive_care_id != preventive_care_id);
            if care.len() < before {
                return (
                    StatusCode::OK,
                    Json(json!({
                        "status": "success",
                        "message": "Preventive care deleted successfully"
                    })),
                );
            }
        }
    }
    not_found("Preventive care")
}

async fn update_surgery_from_instance(
    State(db): State<Db>,
    Path(surgery_id): Path<i32>,
    Json(body): Json<UpdateSurgery>,
) -> Reply {
    let mut clinic = db.write().await;

    let vet = match body.vet_id.as_deref() {
        Some(vet_id) => match clinic.vets.get(vet_id).map(VetSnapshot::from) {
            Some(vet) => Some(vet),
            None => return not_found("Vet"),
        },
        None => None,
    };

    let surgery = clinic
        .instances
        .values_mut()
        .filter_map(|i| i.surgery.as_mut())
        .flat_map(|s| s.iter_mut())
        .find(|s| s.surgery_id == surgery_id);
    let Some(surgery) = surgery else {
        return not_found("Surgery");
    };
    if let Some(name) = body.surgery_name {
        surgery.surgery_name = name;
    }
    if let Some(diagnosis) = body.veterinarian_diagnosis {
        surgery.veterinarian_diagnosis = Some(diagnosis);
    }
    if let Some(anesthesia) = body.anesthesia_used {
        surgery.anesthesia_used = Some(anesthesia);
    }
    if let Some(complications) = body.complications {
        surgery.complications = Some(complications);
    }
    if let Some(outcome) = body.outcome {
        surgery.outcome = Some(outcome);
    }
    if let Some(vet) = vet {
        surgery.vet = vet;
    }

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Surgery updated successfully",
            "surgery": surgery.clone(),
        })),
    )
}

async fn delete_surgery_from_instance(
    State(db): State<Db>,
    Path(surgery_id): Path<i32>,
) -> Reply {
    let mut clinic = db.write().await;
    for instance in clinic.instances.values_mut() {
        if let Some(surgeries) = instance.surgery.as_mut() {
            let before = surgeries.len();
            surgeries.retain(|s| s.surgery_id != surgery_id);
            if surgeries.len() < before {
                return (
                    StatusCode::OK,
                    Json(json!({"status": "success", "message": "Surgery deleted successfully"})),
                );
            }
        }
    }
    not_found("Surgery")
}

// --- statistics ---

async fn counter_services(State(db): State<Db>) -> Reply {
    let clinic = db.read().await;
    let mut totals: HashMap<&str, i64> = HashMap::new();
    for instance in clinic.instances.values() {
        for service_type in &instance.service_type {
            *totals.entry(service_type.as_str()).or_default() += 1;
        }
    }
    let mut services: Vec<Value> = totals
        .into_iter()
        .map(|(service_type_name, total)| {
            json!({"service_type_name": service_type_name, "total": total})
        })
        .collect();
    services.sort_by_key(|s| {
        s["service_type_name"]
            .as_str()
            .unwrap_or_default()
            .to_string()
    });

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Services fetched successfully",
            "services": services,
        })),
    )
}

async fn get_pet_type_visit_summary(State(db): State<Db>) -> Reply {
    let clinic = db.read().await;
    let mut totals: HashMap<String, i64> = HashMap::new();
    for instance in clinic.instances.values() {
        if let Some(pet) = clinic.pets.get(&instance.pet_id) {
            *totals.entry(pet.pet_type.clone()).or_default() += 1;
        }
    }
    let mut pet_type_visit_summary: Vec<Value> = totals
        .into_iter()
        .map(|(pet_type, total_visits)| json!({"pet_type": pet_type, "total_visits": total_visits}))
        .collect();
    pet_type_visit_summary
        .sort_by_key(|s| s["pet_type"].as_str().unwrap_or_default().to_string());

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Pet type visit summary fetched successfully",
            "pet_type_visit_summary": pet_type_visit_summary,
        })),
    )
}
