//! Static option lists rendered as checkboxes by the service-intake forms.
//!
//! Every entry uses its label as its id; the lists are ordered the way the
//! forms display them.

/// One selectable option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxItem {
    pub id: &'static str,
    pub label: &'static str,
}

const fn item(id: &'static str) -> CheckboxItem {
    CheckboxItem { id, label: id }
}

pub const SERVICE_TYPES: [CheckboxItem; 4] = [
    item("General Check-up"),
    item("Grooming"),
    item("Surgery"),
    item("Preventive Care"),
];

pub const GROOMING_TYPES: [CheckboxItem; 7] = [
    item("Bathing"),
    item("Dental Care"),
    item("Claw and Paw Care"),
    item("Eye and Ear Cleaning"),
    item("Haircut"),
    item("Fur Brushing"),
    item("Nail Trimming"),
];

pub const PREVENTIVE_CARE_TYPES_DOG: [CheckboxItem; 10] = [
    item("Rabies (1-year  / 3-years)"),
    item("Adenovirus (T1-CAV 1)"),
    item("Bordotella Bronchiseptica"),
    item("Deworming"),
    item("Adenovirus (T2-CAV 2)"),
    item("Parainfluenza"),
    item("Distemper"),
    item("Canine Influenza"),
    item("Leptospirosis"),
    item("Parvovirus"),
];

pub const PREVENTIVE_CARE_TYPES_CAT: [CheckboxItem; 7] = [
    item("Rabies"),
    item("Feline Leukemia Virus"),
    item("Deworming"),
    item("Feline Distemper"),
    item("Calicivirus"),
    item("Feline Herpesvirus"),
    item("Boardetella"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_uses_label_as_id() {
        for list in [
            SERVICE_TYPES.as_slice(),
            GROOMING_TYPES.as_slice(),
            PREVENTIVE_CARE_TYPES_DOG.as_slice(),
            PREVENTIVE_CARE_TYPES_CAT.as_slice(),
        ] {
            for entry in list {
                assert_eq!(entry.id, entry.label);
            }
        }
    }

    #[test]
    fn list_sizes_match_the_forms() {
        assert_eq!(SERVICE_TYPES.len(), 4);
        assert_eq!(GROOMING_TYPES.len(), 7);
        assert_eq!(PREVENTIVE_CARE_TYPES_DOG.len(), 10);
        assert_eq!(PREVENTIVE_CARE_TYPES_CAT.len(), 7);
    }

    #[test]
    fn grooming_options_cover_the_grooming_service() {
        assert!(GROOMING_TYPES.iter().any(|t| t.id == "Nail Trimming"));
        assert!(SERVICE_TYPES.iter().any(|t| t.id == "Grooming"));
    }
}
