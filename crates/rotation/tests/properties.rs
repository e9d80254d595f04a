use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rota_rotation::{Crew, RotationConfig, RotationEngine, Status};

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn engine(cycle_length: u32, starting_blue: bool) -> RotationEngine {
    let starting_crew = if starting_blue { Crew::Blue } else { Crew::Red };
    let config = RotationConfig::new(anchor(), starting_crew, cycle_length).unwrap();
    RotationEngine::new(config)
}

proptest! {
    #[test]
    fn prop_exactly_one_crew_working(
        offset in -2000i64..2000,
        cycle_length in 1u32..60,
        starting_blue: bool,
    ) {
        let engine = engine(cycle_length, starting_blue);
        let day = engine.crew_status(anchor() + Duration::days(offset));
        prop_assert_eq!(day.working_crew().other(), day.off_duty_crew());
        let statuses: Vec<_> = day.iter().collect();
        prop_assert_eq!(statuses.len(), 2);
        let working = statuses
            .iter()
            .filter(|(_, s)| *s == Status::Working)
            .count();
        prop_assert_eq!(working, 1);
    }

    #[test]
    fn prop_assignment_period_is_two_cycles(
        offset in -2000i64..2000,
        k in -5i64..5,
        cycle_length in 1u32..60,
        starting_blue: bool,
    ) {
        // Crews swap every cycle, so the full assignment repeats after two.
        let engine = engine(cycle_length, starting_blue);
        let d = anchor() + Duration::days(offset);
        let shifted = d + Duration::days(2 * k * i64::from(cycle_length));
        prop_assert_eq!(
            engine.crew_status(d).working_crew(),
            engine.crew_status(shifted).working_crew()
        );
        prop_assert_eq!(
            engine.crew_status(d).working_crew().other(),
            engine.crew_status(d + Duration::days(i64::from(cycle_length))).working_crew()
        );
    }

    #[test]
    fn prop_next_change_is_the_first_boundary(
        offset in -2000i64..2000,
        cycle_length in 1u32..60,
        starting_blue: bool,
    ) {
        let engine = engine(cycle_length, starting_blue);
        let d = anchor() + Duration::days(offset);
        let next = engine.next_crew_change(d);

        // Strictly after, at most one full cycle later.
        prop_assert!(next > d);
        prop_assert!((next - d).num_days() <= i64::from(cycle_length));

        // The working crew is constant from d up to the change, then flips.
        let before = engine.crew_status(d).working_crew();
        let mut current = d;
        while current < next {
            prop_assert_eq!(engine.crew_status(current).working_crew(), before);
            current = current.succ_opt().unwrap();
        }
        prop_assert_eq!(engine.crew_status(next).working_crew(), before.other());
    }

    #[test]
    fn prop_status_flips_once_per_cycle(
        offset in -2000i64..2000,
        cycle_length in 1u32..30,
        starting_blue: bool,
    ) {
        // Over a window of exactly two cycles, the working crew changes on
        // exactly two days.
        let engine = engine(cycle_length, starting_blue);
        let start = anchor() + Duration::days(offset);
        let window = 2 * i64::from(cycle_length);
        let mut flips = 0;
        for i in 0..window {
            let today = start + Duration::days(i);
            let tomorrow = today.succ_opt().unwrap();
            if engine.crew_status(today).working_crew()
                != engine.crew_status(tomorrow).working_crew()
            {
                flips += 1;
            }
        }
        prop_assert_eq!(flips, 2);
    }

    #[test]
    fn prop_range_size_and_order(
        offset in -400i64..400,
        len in 0i64..40,
        cycle_length in 1u32..60,
    ) {
        let engine = engine(cycle_length, true);
        let start = anchor() + Duration::days(offset);
        let end = start + Duration::days(len);
        let schedule = engine.schedule_range(start, end);
        prop_assert_eq!(schedule.len() as i64, 2 * (len + 1));
        for pair in schedule.chunks_exact(2) {
            prop_assert_eq!(pair[0].crew(), Crew::Red);
            prop_assert_eq!(pair[1].crew(), Crew::Blue);
            prop_assert_eq!(pair[0].date(), pair[1].date());
        }
    }
}
