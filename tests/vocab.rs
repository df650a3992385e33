use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use marine_fixtures::errors::GenerationError;
use marine_fixtures::vocab::{
    CATEGORIES, HEALTH_MAX, HEALTH_MIN, category, chapter_name, float_in_range, health,
    int_in_range, loyalty, marine_name,
};

#[test]
fn int_in_range_rejects_inverted_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let result = int_in_range(&mut rng, 10, 1);
    assert!(matches!(result, Err(GenerationError::InvalidRange(_))));
}

#[test]
fn float_in_range_rejects_inverted_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let result = float_in_range(&mut rng, 1.0, -1.0, 2);
    assert!(matches!(result, Err(GenerationError::InvalidRange(_))));
}

#[test]
fn float_in_range_rounds_to_scale_within_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..1000 {
        let value = float_in_range(&mut rng, -343.0, 343.0, 2).expect("valid range");
        assert!((-343.0..=343.0).contains(&value));
        assert_eq!((value * 100.0).round() / 100.0, value);
    }
}

#[test]
fn health_stays_in_declared_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..1000 {
        let value = health(&mut rng).expect("valid range");
        assert!((HEALTH_MIN..=HEALTH_MAX).contains(&value));
    }
}

#[test]
fn loyalty_covers_all_three_outcomes() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut saw_true = false;
    let mut saw_false = false;
    let mut saw_absent = false;
    for _ in 0..300 {
        match loyalty(&mut rng) {
            Some(true) => saw_true = true,
            Some(false) => saw_false = true,
            None => saw_absent = true,
        }
    }
    assert!(saw_true && saw_false && saw_absent);
}

#[test]
fn category_draw_includes_absent_sentinel_and_members() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut saw_absent = false;
    let mut saw_member = false;
    for _ in 0..600 {
        match category(&mut rng) {
            Some(value) => {
                assert!(CATEGORIES.contains(&value));
                saw_member = true;
            }
            None => saw_absent = true,
        }
    }
    assert!(saw_member && saw_absent);
}

#[test]
fn marine_name_pads_index_to_three_digits() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let name = marine_name(&mut rng, 7);
    assert!(name.starts_with("Brother_"));
    assert!(name.ends_with("007"));
    let tag = &name["Brother_".len()..name.len() - 3];
    assert_eq!(tag.len(), 4);
    assert!(tag.chars().all(|c| c.is_ascii_uppercase()));
}

#[test]
fn marine_name_widens_past_three_digits() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let name = marine_name(&mut rng, 1234);
    assert!(name.ends_with("1234"));
    assert_eq!(name.len(), "Brother_".len() + 4 + 4);
}

#[test]
fn chapter_name_buckets_by_index_modulo_four() {
    assert_eq!(chapter_name("Ultramarines", 6), "Ultramarines_2");
    assert_eq!(chapter_name("Blood Angels", 4), "Blood Angels_0");
    assert_eq!(chapter_name("Salamanders", 1), "Salamanders_1");
}
