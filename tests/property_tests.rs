use demographic_analyzer::analyzer::round1;
use demographic_analyzer::{AnalysisError, Dataset, DemographicAnalyzer, Record};
use proptest::prelude::*;
use proptest::sample::select;

const SEXES: &[&str] = &["Male", "Female"];
const RACES: &[&str] = &["White", "Black", "Asian-Pac-Islander", "Amer-Indian-Eskimo", "Other"];
const EDUCATIONS: &[&str] = &["Bachelors", "Masters", "Doctorate", "HS-grad", "Some-college", "11th"];
const OCCUPATIONS: &[&str] = &["Prof-specialty", "Exec-managerial", "Sales", "Craft-repair"];
const COUNTRIES: &[&str] = &["United-States", "India", "Iran", "Cuba", "?"];
const SALARIES: &[&str] = &["<=50K", ">50K"];

fn record() -> impl Strategy<Value = Record> {
    (
        17u32..91,
        select(SEXES),
        select(RACES),
        select(EDUCATIONS),
        select(OCCUPATIONS),
        select(COUNTRIES),
        1u32..100,
        select(SALARIES),
    )
        .prop_map(
            |(age, sex, race, education, occupation, country, hours, salary)| Record {
                age,
                sex: sex.to_string(),
                race: race.to_string(),
                education: education.to_string(),
                occupation: occupation.to_string(),
                native_country: country.to_string(),
                hours_per_week: hours,
                salary: salary.to_string(),
            },
        )
}

fn dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(record(), 1..150).prop_map(|records| Dataset::new(records).unwrap())
}

fn in_percent_range(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}

proptest! {
    #[test]
    fn race_counts_sum_to_record_count(ds in dataset()) {
        let counts = DemographicAnalyzer::new(&ds).race_count();
        let total: u64 = counts.iter().map(|(_, n)| n).sum();
        prop_assert_eq!(total, ds.len() as u64);
        prop_assert!(counts.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn education_subsets_partition_dataset(ds in dataset()) {
        let higher = ds.records().iter().filter(|r| r.has_higher_education()).count();
        let lower = ds.records().iter().filter(|r| !r.has_higher_education()).count();
        prop_assert_eq!(higher + lower, ds.len());

        let analyzer = DemographicAnalyzer::new(&ds);
        match analyzer.higher_education_rich() {
            Ok(pct) => prop_assert!(higher > 0 && in_percent_range(pct)),
            Err(AnalysisError::EmptySubset { .. }) => prop_assert_eq!(higher, 0),
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
        match analyzer.lower_education_rich() {
            Ok(pct) => prop_assert!(lower > 0 && in_percent_range(pct)),
            Err(AnalysisError::EmptySubset { .. }) => prop_assert_eq!(lower, 0),
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    #[test]
    fn min_hours_bounds_every_record(ds in dataset()) {
        let analyzer = DemographicAnalyzer::new(&ds);
        let min = analyzer.min_work_hours().unwrap();
        prop_assert!(ds.records().iter().all(|r| min <= r.hours_per_week));
        prop_assert!(ds.records().iter().any(|r| r.hours_per_week == min));
        prop_assert!(in_percent_range(analyzer.rich_percentage().unwrap()));
    }

    #[test]
    fn no_country_beats_the_highest_earner(ds in dataset()) {
        let analyzer = DemographicAnalyzer::new(&ds);
        let any_rich = ds.records().iter().any(|r| r.is_rich());
        match analyzer.highest_earning_country() {
            Ok((country, pct)) => {
                prop_assert!(any_rich);
                prop_assert!(in_percent_range(pct));
                let shares = analyzer.country_shares();
                prop_assert!(shares.iter().any(|(c, _)| *c == country));
                for (_, share) in shares {
                    prop_assert!(round1(share) <= pct);
                }
            }
            Err(_) => prop_assert!(!any_rich),
        }
    }

    #[test]
    fn percentages_stay_in_range(ds in dataset()) {
        let analyzer = DemographicAnalyzer::new(&ds);
        prop_assert!(in_percent_range(analyzer.percentage_bachelors().unwrap()));
        if let Ok(age) = analyzer.average_age_men() {
            prop_assert!((17.0..=90.0).contains(&age));
        }
    }

    #[test]
    fn analysis_is_deterministic(ds in dataset()) {
        let first = DemographicAnalyzer::new(&ds).analyze();
        let second = DemographicAnalyzer::new(&ds).analyze();
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
            _ => prop_assert!(false, "runs disagree"),
        }
    }
}
