use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info};

use crate::csv_reader::Record;
use crate::dataset::Dataset;
use crate::error::{AnalysisError, Result};
use crate::result_set::ResultSet;

const MALE: &str = "Male";
const BACHELORS: &str = "Bachelors";
const INDIA: &str = "India";

/// Rounds to one decimal place, ties to even.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

fn percentage(
    hits: usize,
    total: usize,
    statistic: &'static str,
    subset: &'static str,
) -> Result<f64> {
    if total == 0 {
        return Err(AnalysisError::EmptySubset { statistic, subset });
    }
    Ok(hits as f64 / total as f64 * 100.0)
}

fn rich_share<'r, I>(records: I, statistic: &'static str, subset: &'static str) -> Result<f64>
where
    I: Iterator<Item = &'r Record>,
{
    let (rich, total) = records.fold((0, 0), |(rich, total), r| {
        (rich + usize::from(r.is_rich()), total + 1)
    });
    percentage(rich, total, statistic, subset)
}

pub struct DemographicAnalyzer<'a> {
    dataset: &'a Dataset,
}

impl<'a> DemographicAnalyzer<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        DemographicAnalyzer { dataset }
    }

    fn records(&self) -> &'a [Record] {
        self.dataset.records()
    }

    /// Records per race, most frequent first. Equal counts keep the order in
    /// which the races first appear.
    pub fn race_count(&self) -> Vec<(String, u64)> {
        let mut position = HashMap::<&str, usize>::new();
        let mut counts = Vec::<(String, u64)>::new();
        for record in self.records() {
            match position.get(record.race.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    position.insert(record.race.as_str(), counts.len());
                    counts.push((record.race.clone(), 1));
                }
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    pub fn average_age_men(&self) -> Result<f64> {
        let (sum, count) = self
            .records()
            .iter()
            .filter(|r| r.sex == MALE)
            .fold((0u64, 0u64), |(sum, count), r| (sum + u64::from(r.age), count + 1));
        if count == 0 {
            return Err(AnalysisError::EmptySubset {
                statistic: "average_age_men",
                subset: "sex is Male",
            });
        }
        Ok(round1(sum as f64 / count as f64))
    }

    pub fn percentage_bachelors(&self) -> Result<f64> {
        let bachelors = self
            .records()
            .iter()
            .filter(|r| r.education == BACHELORS)
            .count();
        percentage(bachelors, self.records().len(), "percentage_bachelors", "any row").map(round1)
    }

    pub fn higher_education_rich(&self) -> Result<f64> {
        rich_share(
            self.records().iter().filter(|r| r.has_higher_education()),
            "higher_education_rich",
            "education is Bachelors, Masters or Doctorate",
        )
        .map(round1)
    }

    pub fn lower_education_rich(&self) -> Result<f64> {
        rich_share(
            self.records().iter().filter(|r| !r.has_higher_education()),
            "lower_education_rich",
            "education is not Bachelors, Masters or Doctorate",
        )
        .map(round1)
    }

    pub fn min_work_hours(&self) -> Result<u32> {
        self.records()
            .iter()
            .map(|r| r.hours_per_week)
            .min()
            .ok_or(AnalysisError::EmptyDataset)
    }

    pub fn rich_percentage(&self) -> Result<f64> {
        let min_hours = self.min_work_hours()?;
        rich_share(
            self.records().iter().filter(|r| r.hours_per_week == min_hours),
            "rich_percentage",
            "hours-per-week is the minimum",
        )
        .map(round1)
    }

    /// Unrounded share of `>50K` earners per country, in ascending country
    /// order. Only countries with at least one `>50K` earner are listed.
    pub fn country_shares(&self) -> Vec<(String, f64)> {
        let mut groups = BTreeMap::<&str, (usize, usize)>::new();
        for record in self.records() {
            let (rich, total) = groups.entry(record.native_country.as_str()).or_default();
            *rich += usize::from(record.is_rich());
            *total += 1;
        }
        groups
            .into_iter()
            .filter(|(_, (rich, _))| *rich > 0)
            .map(|(country, (rich, total))| (country.to_string(), rich as f64 / total as f64 * 100.0))
            .collect()
    }

    /// Country with the highest share of `>50K` earners and that share,
    /// rounded. The alphabetically first country wins a tie.
    pub fn highest_earning_country(&self) -> Result<(String, f64)> {
        let mut best: Option<(String, f64)> = None;
        for (country, share) in self.country_shares() {
            if best.as_ref().map_or(true, |(_, top)| share > *top) {
                best = Some((country, share));
            }
        }
        best.map(|(country, share)| (country, round1(share)))
            .ok_or(AnalysisError::EmptySubset {
                statistic: "highest_earning_country",
                subset: "salary is >50K",
            })
    }

    /// Most common occupation of `>50K` earners from India. The
    /// alphabetically first occupation wins a tie.
    pub fn top_in_occupation(&self) -> Result<String> {
        let mut counts = BTreeMap::<&str, u64>::new();
        for record in self
            .records()
            .iter()
            .filter(|r| r.native_country == INDIA && r.is_rich())
        {
            *counts.entry(record.occupation.as_str()).or_default() += 1;
        }

        let mut top: Option<(&str, u64)> = None;
        for (occupation, count) in counts {
            if top.map_or(true, |(_, n)| count > n) {
                top = Some((occupation, count));
            }
        }
        top.map(|(occupation, _)| occupation.to_string())
            .ok_or(AnalysisError::EmptySubset {
                statistic: "top_IN_occupation",
                subset: "native-country is India and salary is >50K",
            })
    }

    pub fn analyze(&self) -> Result<ResultSet> {
        let race_count = self.race_count();
        debug!(races = race_count.len(), "race_count");
        let average_age_men = self.average_age_men()?;
        debug!(value = average_age_men, "average_age_men");
        let percentage_bachelors = self.percentage_bachelors()?;
        debug!(value = percentage_bachelors, "percentage_bachelors");
        let higher_education_rich = self.higher_education_rich()?;
        let lower_education_rich = self.lower_education_rich()?;
        debug!(
            higher = higher_education_rich,
            lower = lower_education_rich,
            "education_rich"
        );
        let min_work_hours = self.min_work_hours()?;
        let rich_percentage = self.rich_percentage()?;
        debug!(hours = min_work_hours, rich = rich_percentage, "min_work_hours");
        let (highest_earning_country, highest_earning_country_percentage) =
            self.highest_earning_country()?;
        debug!(
            country = %highest_earning_country,
            share = highest_earning_country_percentage,
            "highest_earning_country"
        );
        let top_in_occupation = self.top_in_occupation()?;
        debug!(occupation = %top_in_occupation, "top_IN_occupation");

        info!(records = self.dataset.len(), "analysis complete");
        Ok(ResultSet {
            race_count,
            average_age_men,
            percentage_bachelors,
            higher_education_rich,
            lower_education_rich,
            min_work_hours,
            rich_percentage,
            highest_earning_country,
            highest_earning_country_percentage,
            top_in_occupation,
        })
    }
}
