//! Property tests for person records and their age heaps

use proptest::prelude::*;
use rust_min_heap::Heap;
use rust_min_heap::config::HarnessProfile;
use rust_min_heap::model::check_heap_order;
use rust_min_heap::people::{AGE_OF_MAJORITY, People};
use rust_min_heap::strategies::{MAX_AGE, any_family, kid, people, person};

proptest! {
    #![proptest_config(HarnessProfile::from_env_or_local().proptest_config())]

    #[test]
    fn test_nobody_lives_past_max_age(someone in person()) {
        prop_assert!(someone.age <= MAX_AGE);
    }

    #[test]
    fn test_full_name_contains_first_and_last_name(someone in person()) {
        let full_name = someone.full_name();
        prop_assert!(full_name.starts_with(&someone.first_name));
        prop_assert!(full_name.ends_with(&someone.last_name));
    }

    #[test]
    fn test_grown_up_is_of_age(someone in person().prop_filter("adult", |p| p.age > AGE_OF_MAJORITY)) {
        prop_assert!(someone.is_of_age());
    }

    #[test]
    fn test_new_year_adds_one_year_per_person(crowd in people()) {
        let before = crowd.total_age();
        let after = crowd.new_year().total_age();
        prop_assert_eq!(after - before, crowd.len() as u64);
    }

    #[test]
    fn test_no_kid_is_a_grown_up(kids in prop::collection::vec(kid(), 0..16)) {
        let kids = People::from(kids);
        prop_assert_eq!(kids.grown_ups(), People::new());
        prop_assert_eq!(kids.kids(), kids);
    }

    #[test]
    fn test_family_shares_last_name(family in any_family()) {
        prop_assert!(family.len() >= 2 && family.len() <= 7);
        let last_name = family.get(0).map(|p| p.last_name.clone()).unwrap_or_default();
        prop_assert!(family.iter().all(|p| p.last_name == last_name));
        prop_assert!(family.iter().skip(2).all(|p| p.is_kid()));
    }

    #[test]
    fn test_family_has_two_adults_and_may_have_no_kids(family in any_family()) {
        prop_assert_eq!(family.grown_ups().len(), 2);
        prop_assert_eq!(family.kids().len(), family.len() - 2);
    }

    #[test]
    fn test_ages_heap_yields_youngest(crowd in people()) {
        let ages = crowd.ages_heap();
        prop_assert!(check_heap_order(ages.elements()).is_ok());
        prop_assert_eq!(ages.len(), crowd.len());
        prop_assert_eq!(crowd.youngest_age(), crowd.iter().map(|p| p.age).min());
    }
}
