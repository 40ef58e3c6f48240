//! Property tests for the warmup + cosine schedule

use super::*;
use proptest::prelude::*;

/// Valid `(base_lr, total_steps, warmup_steps)` triples
fn valid_config() -> impl Strategy<Value = ScheduleConfig> {
    (1e-6f64..10.0, 1usize..2_000)
        .prop_flat_map(|(lr, total)| (Just(lr), Just(total), 0..total))
        .prop_map(|(lr, total, warmup)| ScheduleConfig::new(lr, total, warmup).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_lr_bounded(config in valid_config(), frac in 0.0f64..=1.0) {
        let step = (frac * config.total_steps() as f64) as usize;
        let lr = config.lr_at(step);
        prop_assert!(lr >= 0.0, "lr {} below zero at step {}", lr, step);
        prop_assert!(lr <= config.base_lr(), "lr {} above base {} at step {}", lr, config.base_lr(), step);
        prop_assert!(lr.is_finite());
    }

    #[test]
    fn prop_warmup_monotonic(config in valid_config()) {
        let mut prev = config.lr_at(0);
        for step in 1..=config.warmup_steps() {
            let lr = config.lr_at(step);
            prop_assert!(lr >= prev, "warmup decreased at step {}: {} -> {}", step, prev, lr);
            prev = lr;
        }
    }

    #[test]
    fn prop_decay_monotonic(config in valid_config()) {
        let mut prev = config.lr_at(config.warmup_steps());
        for step in config.warmup_steps() + 1..=config.total_steps() {
            let lr = config.lr_at(step);
            prop_assert!(lr <= prev, "decay increased at step {}: {} -> {}", step, prev, lr);
            prev = lr;
        }
    }

    #[test]
    fn prop_peak_at_end_of_warmup(config in valid_config()) {
        prop_assume!(config.warmup_steps() > 0);
        let lr = config.lr_at(config.warmup_steps());
        prop_assert!((lr - config.base_lr()).abs() <= 1e-12 * config.base_lr());
    }

    #[test]
    fn prop_zero_at_and_past_end(config in valid_config(), extra in 0usize..10_000) {
        prop_assert!(config.lr_at(config.total_steps()).abs() <= 1e-15);
        prop_assert_eq!(config.lr_at(config.total_steps() + 1 + extra), 0.0);
    }

    #[test]
    fn prop_no_warmup_starts_at_base(lr in 1e-6f64..10.0, total in 1usize..2_000) {
        let config = ScheduleConfig::new(lr, total, 0).unwrap();
        prop_assert_eq!(config.lr_at(0), lr);
    }

    #[test]
    fn prop_invalid_warmup_rejected(lr in 1e-6f64..10.0, total in 1usize..2_000, over in 0usize..100) {
        prop_assert!(ScheduleConfig::new(lr, total, total + over).is_err());
    }

    #[test]
    fn prop_stepper_matches_pure_function(config in valid_config(), steps in 0usize..300) {
        let mut scheduler = WarmupCosineDecayLR::new(config);
        for _ in 0..steps {
            scheduler.step();
        }
        prop_assert_eq!(scheduler.get_lr(), config.lr_at(steps));
    }
}
