use super::error::PlannerError;
use super::route::Coord;

/// Splits an ordered run of coordinates into overlapping batches of at most
/// `size` points, advancing by `size - 1` so each batch starts on the last
/// coordinate of the previous one. Driving every batch in order therefore
/// covers the whole run with no gap and no skipped leg.
///
/// The final batch may be shorter than `size` but never shorter than 2; a
/// single leftover point is folded into the preceding batch by the stride
/// rather than emitted on its own.
pub fn split_into_batches(coords: &[Coord], size: usize) -> Result<Vec<&[Coord]>, PlannerError> {
    if size < 2 {
        return Err(PlannerError::InvalidBatchSize(size));
    }
    let mut batches = Vec::new();
    let mut from = 0;
    while from + 1 < coords.len() {
        let to = (from + size).min(coords.len());
        batches.push(&coords[from..to]);
        from = to - 1;
    }
    Ok(batches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(n: usize) -> Vec<Coord> {
        (0..n).map(|i| Coord::new(i as f64, -(i as f64))).collect()
    }

    #[test]
    fn five_points_in_threes_share_the_middle_point() {
        let run = coords(5);
        let batches = split_into_batches(&run, 3).unwrap();
        assert_eq!(batches, vec![&run[0..3], &run[2..5]]);
    }

    #[test]
    fn a_run_shorter_than_the_batch_size_is_one_batch() {
        let run = coords(5);
        let batches = split_into_batches(&run, 10).unwrap();
        assert_eq!(batches, vec![&run[..]]);
    }

    #[test]
    fn two_points_make_exactly_one_batch() {
        let run = coords(2);
        let batches = split_into_batches(&run, 8).unwrap();
        assert_eq!(batches, vec![&run[..]]);
    }

    #[test]
    fn the_final_batch_may_be_short_but_never_a_single_point() {
        // 6 points at size 3: the last batch carries only the leftover leg.
        let run = coords(6);
        let batches = split_into_batches(&run, 3).unwrap();
        assert_eq!(batches, vec![&run[0..3], &run[2..5], &run[4..6]]);
    }

    #[test]
    fn size_two_degenerates_to_one_batch_per_leg() {
        let run = coords(3);
        let batches = split_into_batches(&run, 2).unwrap();
        assert_eq!(batches, vec![&run[0..2], &run[1..3]]);
    }

    #[test]
    fn sizes_below_two_are_rejected() {
        let run = coords(4);
        assert!(matches!(
            split_into_batches(&run, 1),
            Err(PlannerError::InvalidBatchSize(1))
        ));
        assert!(matches!(
            split_into_batches(&run, 0),
            Err(PlannerError::InvalidBatchSize(0))
        ));
    }

    #[test]
    fn empty_and_single_point_runs_produce_no_batches() {
        assert!(split_into_batches(&coords(0), 3).unwrap().is_empty());
        assert!(split_into_batches(&coords(1), 3).unwrap().is_empty());
    }

    #[test]
    fn batches_cover_the_run_for_a_sweep_of_sizes() {
        for n in 2..=12 {
            let run = coords(n);
            for size in 2..=11 {
                let batches = split_into_batches(&run, size).unwrap();

                assert_eq!(batches[0][0], run[0]);
                let last = batches.last().unwrap();
                assert_eq!(*last.last().unwrap(), run[n - 1]);

                for batch in &batches {
                    assert!(batch.len() >= 2, "n={n} size={size}");
                    assert!(batch.len() <= size, "n={n} size={size}");
                }
                for pair in batches.windows(2) {
                    assert_eq!(pair[0].last(), pair[1].first(), "n={n} size={size}");
                }

                // Dropping each batch's leading overlap rebuilds the run.
                let mut rebuilt = batches[0].to_vec();
                for batch in &batches[1..] {
                    rebuilt.extend_from_slice(&batch[1..]);
                }
                assert_eq!(rebuilt, run, "n={n} size={size}");
            }
        }
    }
}
