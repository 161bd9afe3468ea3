use std::fmt::Debug;

use proptest::{prelude::*, test_runner::TestCaseResult};

use crate::prelude::*;

/// The ways a collector can be driven over an iterator.
#[derive(Debug, Clone, Copy)]
enum Drive {
    OneByOne,
    Many,
    ThenFinish,
}

/// What driving a collector left behind.
struct Run<O> {
    /// Whether the collector closed. Unknown for [`Drive::ThenFinish`].
    closed: Option<bool>,
    output: O,
    left_over: usize,
}

impl Drive {
    const ALL: [Self; 3] = [Self::OneByOne, Self::Many, Self::ThenFinish];

    fn run<I, C>(self, mut iter: I, mut collector: C) -> Run<C::Output>
    where
        I: Iterator,
        C: Collector<Item = I::Item>,
    {
        let (closed, output) = match self {
            Self::OneByOne => {
                let flow = iter.try_for_each(|item| collector.collect(item));
                (Some(flow.is_break()), collector.finish())
            }
            Self::Many => {
                let flow = collector.collect_many(&mut iter);
                (Some(flow.is_break()), collector.finish())
            }
            Self::ThenFinish => (None, collector.collect_then_finish(&mut iter)),
        };

        Run {
            closed,
            output,
            left_over: iter.count(),
        }
    }
}

/// Drives fresh collectors over fresh iterators in every [`Drive`] and checks that
/// each one produces what `iter_way` computes, closes exactly when `should_break_pred`
/// says so, and leaves as many items in the iterator as the others.
pub fn proptest_collector<I, C>(
    mut iter_factory: impl FnMut() -> I,
    mut collector_factory: impl FnMut() -> C,
    should_break_pred: impl FnOnce(I) -> bool,
    iter_way: impl FnOnce(I) -> C::Output,
) -> TestCaseResult
where
    I: Iterator,
    C: Collector<Item = I::Item, Output: PartialEq + Debug>,
{
    let should_break = should_break_pred(iter_factory());
    let expected = iter_way(iter_factory());
    let mut left_overs = Vec::with_capacity(Drive::ALL.len());

    for drive in Drive::ALL {
        let run = drive.run(iter_factory(), collector_factory());

        if let Some(closed) = run.closed {
            prop_assert_eq!(
                closed,
                should_break,
                "{:?} closed at the wrong time",
                drive
            );
        }
        prop_assert_eq!(
            &run.output,
            &expected,
            "{:?} produced a different output",
            drive
        );
        left_overs.push((drive, run.left_over));
    }

    prop_assert!(
        left_overs.windows(2).all(|pair| pair[0].1 == pair[1].1),
        "drives consumed the iterator differently: {:?}",
        left_overs,
    );

    Ok(())
}
