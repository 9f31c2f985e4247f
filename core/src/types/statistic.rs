use serde::{Deserialize, Serialize};

/// How many times each service type has been performed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceTypeCount {
    pub service_type_name: String,
    pub total: i64,
}

/// Visit totals grouped by pet type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PetVisitSummary {
    pub pet_type: String,
    pub total_visits: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_type_count_deserializes() {
        let row: ServiceTypeCount =
            serde_json::from_str(r#"{"service_type_name":"Grooming","total":12}"#).unwrap();
        assert_eq!(row.service_type_name, "Grooming");
        assert_eq!(row.total, 12);
    }
}
