//! Static Caldwell catalogue mapping, C-number → NGC/IC designation.
//!
//! The Caldwell catalogue is not a column of the NGC/IC/Messier dataset; it is
//! a fixed 109-entry selection of NGC and IC objects. Selecting "Caldwell"
//! therefore filters dataset rows whose NGC or IC designation appears in this
//! table. Three entries (C9, C41, C99) carry non-NGC/IC designations and can
//! never match a dataset row.

/// C-number → designation for all 109 Caldwell objects.
pub const CALDWELL: [(u8, &str); 109] = [
    (1, "NGC 188"),
    (2, "NGC 40"),
    (3, "NGC 4236"),
    (4, "NGC 7023"),
    (5, "IC 342"),
    (6, "NGC 6543"),
    (7, "NGC 2403"),
    (8, "NGC 559"),
    (9, "Sh2-155"),
    (10, "NGC 663"),
    (11, "NGC 7635"),
    (12, "NGC 6946"),
    (13, "NGC 457"),
    (14, "NGC 869"),
    (15, "NGC 6826"),
    (16, "NGC 7243"),
    (17, "NGC 147"),
    (18, "NGC 185"),
    (19, "IC 5146"),
    (20, "NGC 7000"),
    (21, "NGC 4449"),
    (22, "NGC 7662"),
    (23, "NGC 891"),
    (24, "NGC 1275"),
    (25, "NGC 2419"),
    (26, "NGC 4244"),
    (27, "NGC 6888"),
    (28, "NGC 752"),
    (29, "NGC 5005"),
    (30, "NGC 7331"),
    (31, "IC 405"),
    (32, "NGC 4631"),
    (33, "NGC 6992"),
    (34, "NGC 6960"),
    (35, "NGC 4889"),
    (36, "NGC 4559"),
    (37, "NGC 6885"),
    (38, "NGC 4565"),
    (39, "NGC 2392"),
    (40, "NGC 3626"),
    (41, "Mel 25"),
    (42, "NGC 7006"),
    (43, "NGC 7814"),
    (44, "NGC 7479"),
    (45, "NGC 5248"),
    (46, "NGC 2261"),
    (47, "NGC 6934"),
    (48, "NGC 2775"),
    (49, "NGC 2237"),
    (50, "NGC 2244"),
    (51, "IC 1613"),
    (52, "NGC 4697"),
    (53, "NGC 3115"),
    (54, "NGC 2506"),
    (55, "NGC 7009"),
    (56, "NGC 246"),
    (57, "NGC 6822"),
    (58, "NGC 2360"),
    (59, "NGC 3242"),
    (60, "NGC 4038"),
    (61, "NGC 4039"),
    (62, "NGC 247"),
    (63, "NGC 7293"),
    (64, "NGC 2362"),
    (65, "NGC 253"),
    (66, "NGC 5694"),
    (67, "NGC 1097"),
    (68, "NGC 6729"),
    (69, "NGC 6302"),
    (70, "NGC 300"),
    (71, "NGC 2477"),
    (72, "NGC 55"),
    (73, "NGC 1851"),
    (74, "NGC 3132"),
    (75, "NGC 6124"),
    (76, "NGC 6231"),
    (77, "NGC 5128"),
    (78, "NGC 6541"),
    (79, "NGC 3201"),
    (80, "NGC 5139"),
    (81, "NGC 6352"),
    (82, "NGC 6193"),
    (83, "NGC 4945"),
    (84, "NGC 5286"),
    (85, "IC 2391"),
    (86, "NGC 6397"),
    (87, "NGC 1261"),
    (88, "NGC 5823"),
    (89, "NGC 6087"),
    (90, "NGC 2867"),
    (91, "NGC 3532"),
    (92, "NGC 3372"),
    (93, "NGC 6752"),
    (94, "NGC 4755"),
    (95, "NGC 6025"),
    (96, "NGC 2516"),
    (97, "NGC 3766"),
    (98, "NGC 4609"),
    (99, "Coalsack"),
    (100, "IC 2944"),
    (101, "NGC 6744"),
    (102, "IC 2602"),
    (103, "NGC 2070"),
    (104, "NGC 362"),
    (105, "NGC 4833"),
    (106, "NGC 104"),
    (107, "NGC 6101"),
    (108, "NGC 4372"),
    (109, "NGC 3195"),
];

/// Designation of a Caldwell object by its C-number.
pub fn designation(number: u8) -> Option<&'static str> {
    CALDWELL
        .iter()
        .find(|(n, _)| *n == number)
        .map(|(_, designation)| *designation)
}

/// Whether a designation belongs to the Caldwell catalogue.
pub(crate) fn contains(designation: &str) -> bool {
    CALDWELL.iter().any(|(_, d)| *d == designation)
}

#[cfg(test)]
mod caldwell_test {
    use super::*;

    #[test]
    fn test_table_is_complete_and_ordered() {
        assert_eq!(CALDWELL.len(), 109);
        for (i, (number, designation)) in CALDWELL.iter().enumerate() {
            assert_eq!(*number as usize, i + 1);
            assert!(!designation.is_empty());
        }
    }

    #[test]
    fn test_designation_lookup() {
        assert_eq!(designation(1), Some("NGC 188"));
        assert_eq!(designation(5), Some("IC 342"));
        assert_eq!(designation(80), Some("NGC 5139"));
        assert_eq!(designation(109), Some("NGC 3195"));
        assert_eq!(designation(0), None);
        assert_eq!(designation(110), None);
    }

    #[test]
    fn test_contains() {
        assert!(contains("NGC 7023"));
        assert!(contains("IC 2602"));
        assert!(!contains("NGC 1976"));
        assert!(!contains(""));
    }
}
