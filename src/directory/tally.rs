//! Gender aggregation

use super::types::{Gender, GenderTally, TeacherRecord};

/// Count records per gender.
///
/// Records whose `sex` is neither `M` nor `F` are skipped. The result does
/// not depend on input order.
pub fn tally<'a, I>(records: I) -> GenderTally
where
    I: IntoIterator<Item = &'a TeacherRecord>,
{
    records
        .into_iter()
        .fold(GenderTally::default(), |mut counts, record| {
            match record.gender() {
                Some(Gender::Male) => counts.male += 1,
                Some(Gender::Female) => counts.female += 1,
                None => {}
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, sex: &str) -> TeacherRecord {
        TeacherRecord::new(id, format!("Docente {}", id), sex, "000")
    }

    #[test]
    fn test_tally_ignores_unknown_codes() {
        let records = vec![
            record("1", "M"),
            record("2", "F"),
            record("3", "M"),
            record("4", "X"),
        ];

        let counts = tally(&records);

        assert_eq!(counts, GenderTally { male: 2, female: 1 });
        assert!(counts.total() < records.len() as u64);
    }

    #[test]
    fn test_tally_total_matches_when_all_known() {
        let records = vec![record("1", "F"), record("2", "F"), record("3", "M")];

        let counts = tally(&records);

        assert_eq!(counts.total(), records.len() as u64);
    }

    #[test]
    fn test_tally_empty() {
        let records: Vec<TeacherRecord> = Vec::new();
        assert_eq!(tally(&records), GenderTally::default());
    }

    #[test]
    fn test_tally_order_independent() {
        let records = vec![
            record("1", "M"),
            record("2", "F"),
            record("3", ""),
            record("4", "F"),
            record("5", "m"),
        ];
        let expected = tally(&records);

        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(tally(&reversed), expected);

        // Every rotation gives the same counts
        for shift in 0..records.len() {
            let mut rotated = records.clone();
            rotated.rotate_left(shift);
            assert_eq!(tally(&rotated), expected);
        }
    }
}
