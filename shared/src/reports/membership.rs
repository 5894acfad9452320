//! Membership counts and age histogram

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{Gender, Member, MemberType};

/// Age bucket used by the membership report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "<18")]
    Under18,
    #[serde(rename = "18-29")]
    From18To29,
    #[serde(rename = "30-44")]
    From30To44,
    #[serde(rename = "45-59")]
    From45To59,
    #[serde(rename = "60+")]
    Over60,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 5] = [
        AgeBracket::Under18,
        AgeBracket::From18To29,
        AgeBracket::From30To44,
        AgeBracket::From45To59,
        AgeBracket::Over60,
    ];

    pub fn for_age(age: i32) -> Self {
        match age {
            ..18 => Self::Under18,
            18..30 => Self::From18To29,
            30..45 => Self::From30To44,
            45..60 => Self::From45To59,
            _ => Self::Over60,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Under18 => "<18",
            Self::From18To29 => "18-29",
            Self::From30To44 => "30-44",
            Self::From45To59 => "45-59",
            Self::Over60 => "60+",
        }
    }
}

/// Age as current year minus birth year
pub fn age_in_year(birth_date: NaiveDate, current_year: i32) -> i32 {
    current_year - birth_date.year()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeGroup {
    pub range: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipStats {
    pub total: usize,
    pub workers: usize,
    pub consultants: usize,
    pub males: usize,
    pub females: usize,
    /// All five buckets, youngest first, including empty ones
    pub age_groups: Vec<AgeGroup>,
}

impl MembershipStats {
    pub fn age_count(&self, bracket: AgeBracket) -> usize {
        self.age_groups
            .iter()
            .find(|g| g.range == bracket.label())
            .map(|g| g.count)
            .unwrap_or(0)
    }
}

pub fn membership_stats(members: &[Member], current_year: i32) -> MembershipStats {
    let count_type = |t: MemberType| members.iter().filter(|m| m.member_type == t).count();
    let count_gender = |g: Gender| members.iter().filter(|m| m.gender == g).count();

    let age_groups = AgeBracket::ALL
        .iter()
        .map(|bracket| AgeGroup {
            range: bracket.label().to_string(),
            count: members
                .iter()
                .filter(|m| AgeBracket::for_age(age_in_year(m.birth_date, current_year)) == *bracket)
                .count(),
        })
        .collect();

    MembershipStats {
        total: members.len(),
        workers: count_type(MemberType::Trabalhador),
        consultants: count_type(MemberType::Consulente),
        males: count_gender(Gender::Male),
        females: count_gender(Gender::Female),
        age_groups,
    }
}
