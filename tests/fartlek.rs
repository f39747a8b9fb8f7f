#[cfg(test)]
mod tests {
    use fartlek::libs::fartlek::{run_fartlek, FartlekSession, FartlekState};
    use fartlek::libs::intensity::DurationRange;
    use fartlek::libs::interval::{IntensityLabel, IntervalKind, IntervalSpec};
    use fartlek::libs::sampler::{RandSampler, ScriptedSampler};

    fn base_range() -> DurationRange {
        DurationRange::new(2, 5).unwrap()
    }

    fn minutes(intervals: &[IntervalSpec]) -> u32 {
        intervals.iter().map(|i| i.seconds / 60).sum()
    }

    #[test]
    fn test_minimum_draws_golden_sequence() {
        let intervals = run_fartlek(12, &base_range(), 1, ScriptedSampler::minimum());
        assert_eq!(
            intervals,
            vec![
                IntervalSpec::heart_rate(120, 85),
                IntervalSpec::recovery(120),
                IntervalSpec::heart_rate(240, 70),
                IntervalSpec::recovery(240),
            ]
        );
    }

    #[test]
    fn test_zero_minute_closing_effort_keeps_pair() {
        // 11 - (2 + 2 * 3) leaves 3, and 3 / (3 + 1) rounds down to 0
        let intervals = run_fartlek(11, &base_range(), 3, ScriptedSampler::minimum());
        assert_eq!(
            intervals,
            vec![
                IntervalSpec::heart_rate(120, 85),
                IntervalSpec::recovery(360),
                IntervalSpec::heart_rate(0, 85),
                IntervalSpec::recovery(180),
            ]
        );
    }

    #[test]
    fn test_budget_after_first_pair() {
        let mut session = FartlekSession::new(12, base_range(), 1, ScriptedSampler::minimum());
        assert_eq!(session.state(), FartlekState::Sampling);
        session.next();
        session.next();
        assert_eq!(session.remaining(), 8);
        assert_eq!(session.state(), FartlekState::ShortRemainder);
    }

    #[test]
    fn test_recovery_modifier_multiplies_recovery() {
        // active 3, recovery draw 4 doubled to 8, leaving 9 for the closing pair
        let intervals = run_fartlek(20, &base_range(), 2, ScriptedSampler::new(vec![3, 4]));
        assert_eq!(
            intervals,
            vec![
                IntervalSpec::heart_rate(180, 85),
                IntervalSpec::recovery(480),
                IntervalSpec::heart_rate(180, 85),
                IntervalSpec::recovery(360),
            ]
        );
    }

    #[test]
    fn test_short_remainder_uses_whole_budget() {
        for budget in 2..=10 {
            for modifier in 1..=3 {
                let intervals = run_fartlek(budget, &base_range(), modifier, ScriptedSampler::minimum());
                assert_eq!(minutes(&intervals), budget);
                assert_eq!(intervals.last().map(|i| i.kind), Some(IntervalKind::Recovery));
            }
        }
    }

    #[test]
    fn test_exhausted_budget_emits_nothing() {
        assert!(run_fartlek(0, &base_range(), 1, ScriptedSampler::minimum()).is_empty());
        assert!(run_fartlek(1, &base_range(), 1, ScriptedSampler::minimum()).is_empty());
    }

    #[test]
    fn test_labels_follow_classification() {
        let intervals = run_fartlek(60, &base_range(), 1, RandSampler::seeded(11));
        for interval in intervals.iter().filter(|i| i.is_active()) {
            match interval.intensity {
                Some(IntensityLabel::MaxHeartRate(85)) => assert_eq!(interval.kind, IntervalKind::ActiveHighIntensity),
                Some(IntensityLabel::MaxHeartRate(70)) => {
                    assert_eq!(interval.kind, IntervalKind::ActiveModerateIntensity)
                }
                other => panic!("unexpected intensity {:?}", other),
            }
        }
    }

    #[test]
    fn test_terminates_within_budget_steps() {
        for seed in 0..50 {
            for modifier in 1..=3 {
                for difficulty in -1..=2 {
                    let range = DurationRange::with_difficulty(difficulty).unwrap();
                    let budget = 10 + (seed as u32 % 50);
                    let intervals = run_fartlek(budget, &range, modifier, RandSampler::seeded(seed));

                    let pairs = intervals.iter().filter(|i| i.kind == IntervalKind::Recovery).count();
                    assert!(pairs as u32 <= budget);
                    // stops only once at most one minute is left
                    assert!(minutes(&intervals) + 1 >= budget);
                }
            }
        }
    }

    #[test]
    fn test_sampled_pairs_respect_range() {
        let range = DurationRange::new(3, 6).unwrap();
        let mut session = FartlekSession::new(90, range, 2, RandSampler::seeded(5));
        while session.state() == FartlekState::Sampling {
            let active = session.next().unwrap();
            let recovery = session.next().unwrap();
            let active_min = active.seconds / 60;
            let recovery_min = recovery.seconds / 60;
            assert!(range.contains(active_min));
            assert!(recovery_min >= active_min * 2 && recovery_min <= range.max() * 2);
        }
    }

    #[test]
    fn test_seeded_sessions_are_reproducible() {
        let first = run_fartlek(45, &base_range(), 2, RandSampler::seeded(99));
        let second = run_fartlek(45, &base_range(), 2, RandSampler::seeded(99));
        assert_eq!(first, second);
    }
}
