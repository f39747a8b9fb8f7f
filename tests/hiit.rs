#[cfg(test)]
mod tests {
    use fartlek::libs::hiit::{run_hiit, HiitSession, HiitState, CHECKPOINT_SECONDS, MAX_CONSECUTIVE_HIGH};
    use fartlek::libs::interval::{IntensityLabel, IntervalKind, IntervalSpec};
    use fartlek::libs::sampler::{RandSampler, ScriptedSampler};

    fn high_block() -> Vec<IntervalSpec> {
        vec![IntervalSpec::high(50), IntervalSpec::recovery(10)]
    }

    fn moderate_block() -> Vec<IntervalSpec> {
        vec![IntervalSpec::moderate(90), IntervalSpec::recovery(30)]
    }

    /// Walks a generated session and checks the streak, checkpoint and tail rules.
    fn check_session(intervals: &[IntervalSpec]) -> usize {
        let mut effective = 0;
        let mut streak = 0;
        let mut checkpoints = 0;
        let mut i = 0;
        let last = intervals.len() - 1;

        while i < intervals.len() {
            let interval = intervals[i];
            if effective >= CHECKPOINT_SECONDS {
                assert_eq!(interval.kind, IntervalKind::RestCheckpoint);
                effective = 0;
                checkpoints += 1;
                i += 1;
                continue;
            }
            assert_ne!(interval.kind, IntervalKind::RestCheckpoint);
            if i == last {
                break;
            }
            match interval.kind {
                IntervalKind::Recovery => {
                    // standalone recovery is the forced one
                    assert_eq!(streak, MAX_CONSECUTIVE_HIGH);
                    assert_eq!(interval.seconds, 30);
                    streak = 0;
                    i += 1;
                }
                kind => {
                    let recovery = intervals[i + 1];
                    assert_eq!(recovery.kind, IntervalKind::Recovery);
                    if kind == IntervalKind::ActiveHighIntensity {
                        streak += 1;
                        assert!(streak <= MAX_CONSECUTIVE_HIGH);
                        assert_eq!(interval.seconds + recovery.seconds, 60);
                    } else {
                        streak = 0;
                        assert_eq!(interval.seconds + recovery.seconds, 120);
                    }
                    effective += interval.seconds + recovery.seconds;
                    i += 2;
                }
            }
        }
        checkpoints
    }

    #[test]
    fn test_all_high_golden_sequence() {
        let intervals = run_hiit(10, ScriptedSampler::maximum());

        let mut expected = Vec::new();
        for _ in 0..4 {
            expected.extend(high_block());
        }
        expected.push(IntervalSpec::recovery(30));
        for _ in 0..4 {
            expected.extend(high_block());
        }
        expected.push(IntervalSpec::moderate(90));

        assert_eq!(intervals, expected);
    }

    #[test]
    fn test_all_moderate_golden_sequence() {
        let intervals = run_hiit(30, ScriptedSampler::minimum());

        let mut expected = Vec::new();
        for _ in 0..8 {
            expected.extend(moderate_block());
        }
        expected.push(IntervalSpec::checkpoint());
        for _ in 0..6 {
            expected.extend(moderate_block());
        }
        expected.push(IntervalSpec::moderate(120));

        assert_eq!(intervals, expected);
        assert_eq!(check_session(&intervals), 1);
    }

    #[test]
    fn test_activity_share_bounds() {
        // lowest and highest activity percentages for each block class
        let intervals = run_hiit(10, ScriptedSampler::new(vec![0, 75, 0, 91, 1, 67, 1, 84]));
        assert_eq!(&intervals[..8], &[
            IntervalSpec::moderate(90),
            IntervalSpec::recovery(30),
            IntervalSpec::moderate(109),
            IntervalSpec::recovery(11),
            IntervalSpec::high(40),
            IntervalSpec::recovery(20),
            IntervalSpec::high(50),
            IntervalSpec::recovery(10),
        ]);
    }

    #[test]
    fn test_short_budget_is_tail_only() {
        assert_eq!(run_hiit(1, ScriptedSampler::minimum()), vec![IntervalSpec::moderate(60)]);
        assert_eq!(run_hiit(2, ScriptedSampler::minimum()), vec![IntervalSpec::moderate(120)]);
    }

    #[test]
    fn test_tail_covers_remaining_budget() {
        for seed in 0..200 {
            let minutes = 10 + (seed as u32 % 80);
            let intervals = run_hiit(minutes, RandSampler::seeded(seed));

            let total: u32 = intervals.iter().map(|i| i.seconds).sum();
            assert_eq!(total, minutes * 60);

            let tail = intervals.last().unwrap();
            assert_eq!(tail.kind, IntervalKind::ActiveModerateIntensity);
            assert_eq!(tail.intensity, Some(IntensityLabel::Moderate));
            assert!(tail.seconds > 0 && tail.seconds <= 120);
        }
    }

    #[test]
    fn test_random_sessions_follow_rules() {
        for seed in 0..200 {
            let intervals = run_hiit(60, RandSampler::seeded(seed));
            let checkpoints = check_session(&intervals);
            let markers = intervals.iter().filter(|i| i.kind == IntervalKind::RestCheckpoint).count();
            assert_eq!(checkpoints, markers);
        }
    }

    #[test]
    fn test_forced_recovery_state() {
        let mut session = HiitSession::new(15, ScriptedSampler::maximum());
        for _ in 0..4 {
            assert_eq!(session.state(), HiitState::Running);
            session.next();
            session.next();
        }
        assert_eq!(session.state(), HiitState::ForcedRecovery);
    }

    #[test]
    fn test_seeded_sessions_are_reproducible() {
        assert_eq!(run_hiit(40, RandSampler::seeded(8)), run_hiit(40, RandSampler::seeded(8)));
    }
}
