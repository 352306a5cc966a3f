use std::fmt;

use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Statistics of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSet {
    #[serde(serialize_with = "serialize_counts")]
    pub race_count: Vec<(String, u64)>,
    pub average_age_men: f64,
    pub percentage_bachelors: f64,
    pub higher_education_rich: f64,
    pub lower_education_rich: f64,
    pub min_work_hours: u32,
    pub rich_percentage: f64,
    pub highest_earning_country: String,
    pub highest_earning_country_percentage: f64,
    #[serde(rename = "top_IN_occupation")]
    pub top_in_occupation: String,
}

/// A single value of a [`ResultSet`] entry.
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Counts(Vec<(String, u64)>),
    Integer(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StatValue::Counts(counts) => {
                let parts = counts
                    .iter()
                    .map(|(k, v)| format!("{k}: {v}"))
                    .collect::<Vec<_>>();
                write!(f, "{{{}}}", parts.join(", "))
            }
            StatValue::Integer(v) => write!(f, "{v}"),
            StatValue::Float(v) => write!(f, "{v:.1}"),
            StatValue::Text(v) => write!(f, "{v}"),
        }
    }
}

impl ResultSet {
    pub fn entries(&self) -> Vec<(&'static str, StatValue)> {
        vec![
            ("race_count", StatValue::Counts(self.race_count.clone())),
            ("average_age_men", StatValue::Float(self.average_age_men)),
            ("percentage_bachelors", StatValue::Float(self.percentage_bachelors)),
            ("higher_education_rich", StatValue::Float(self.higher_education_rich)),
            ("lower_education_rich", StatValue::Float(self.lower_education_rich)),
            ("min_work_hours", StatValue::Integer(u64::from(self.min_work_hours))),
            ("rich_percentage", StatValue::Float(self.rich_percentage)),
            (
                "highest_earning_country",
                StatValue::Text(self.highest_earning_country.clone()),
            ),
            (
                "highest_earning_country_percentage",
                StatValue::Float(self.highest_earning_country_percentage),
            ),
            ("top_IN_occupation", StatValue::Text(self.top_in_occupation.clone())),
        ]
    }

    pub fn get(&self, key: &str) -> Option<StatValue> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    pub fn race_total(&self) -> u64 {
        self.race_count.iter().map(|(_, n)| n).sum()
    }
}

/// Human-readable report, one statistic per line.
impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Number of each race:")?;
        for (race, count) in &self.race_count {
            writeln!(f, "  {race:<20} {count}")?;
        }
        writeln!(f, "Average age of men: {:.1}", self.average_age_men)?;
        writeln!(f, "Percentage with Bachelors degrees: {:.1}%", self.percentage_bachelors)?;
        writeln!(
            f,
            "Percentage with higher education that earn >50K: {:.1}%",
            self.higher_education_rich
        )?;
        writeln!(
            f,
            "Percentage without higher education that earn >50K: {:.1}%",
            self.lower_education_rich
        )?;
        writeln!(f, "Min work time: {} hours/week", self.min_work_hours)?;
        writeln!(
            f,
            "Percentage of rich among those who work fewest hours: {:.1}%",
            self.rich_percentage
        )?;
        writeln!(
            f,
            "Country with highest percentage of rich: {} ({:.1}%)",
            self.highest_earning_country, self.highest_earning_country_percentage
        )?;
        write!(f, "Top occupations in India: {}", self.top_in_occupation)
    }
}

fn serialize_counts<S: Serializer>(counts: &[(String, u64)], serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(counts.len()))?;
    for (key, count) in counts {
        map.serialize_entry(key, count)?;
    }
    map.end()
}

/// JSON envelope written by `analyze --json`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub records: usize,
    pub results: &'a ResultSet,
}

impl<'a> Report<'a> {
    pub fn new(source: String, records: usize, results: &'a ResultSet) -> Self {
        Report {
            generated_at: Utc::now(),
            source,
            records,
            results,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
