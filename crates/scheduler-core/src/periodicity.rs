//! Periodicity: how often a subject recurs.
//!
//! A closed, tagged union. The `type` tag selects the payload shape:
//!
//! | `type`     | payload                       |
//! |------------|-------------------------------|
//! | `daily`    | none                          |
//! | `weekly`   | `days`                        |
//! | `biweekly` | `days`, `parity`              |
//! | `monthly`  | `dayOfMonth`                  |

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::{Error, Result};

// ─── Day of week ─────────────────────────────────────────────────────────────

/// A day of the week, encoded on the wire as its ISO-8601 number
/// (1 = Monday … 7 = Sunday).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum DayOfWeek {
  Monday = 1,
  Tuesday,
  Wednesday,
  Thursday,
  Friday,
  Saturday,
  Sunday,
}

impl DayOfWeek {
  pub fn number(self) -> u8 { self as u8 }
}

impl TryFrom<u8> for DayOfWeek {
  type Error = Error;

  fn try_from(n: u8) -> Result<Self> {
    Ok(match n {
      1 => Self::Monday,
      2 => Self::Tuesday,
      3 => Self::Wednesday,
      4 => Self::Thursday,
      5 => Self::Friday,
      6 => Self::Saturday,
      7 => Self::Sunday,
      other => return Err(Error::InvalidDayOfWeek(other)),
    })
  }
}

impl From<DayOfWeek> for u8 {
  fn from(d: DayOfWeek) -> Self { d.number() }
}

impl From<Weekday> for DayOfWeek {
  fn from(w: Weekday) -> Self {
    match w {
      Weekday::Mon => Self::Monday,
      Weekday::Tue => Self::Tuesday,
      Weekday::Wed => Self::Wednesday,
      Weekday::Thu => Self::Thursday,
      Weekday::Fri => Self::Friday,
      Weekday::Sat => Self::Saturday,
      Weekday::Sun => Self::Sunday,
    }
  }
}

// ─── Week parity ─────────────────────────────────────────────────────────────

/// Which alternate weeks a bi-weekly subject falls on.
///
/// Weeks run Monday to Sunday and are counted without gaps from week 1,
/// which starts on Monday 1969-12-29. Odd weeks are 1, 3, 5, and so on, so
/// the alternation never breaks at a year boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekParity {
  Even,
  Odd,
}

impl WeekParity {
  /// `num_days_from_ce` of Monday 1969-12-29.
  const WEEK_ONE_MONDAY: i32 = 719_160;

  pub fn of(date: NaiveDate) -> Self {
    let weeks_since = (date.num_days_from_ce() - Self::WEEK_ONE_MONDAY).div_euclid(7);
    if weeks_since.rem_euclid(2) == 0 { Self::Odd } else { Self::Even }
  }
}

// ─── Periodicity ─────────────────────────────────────────────────────────────

/// The discriminant of a [`Periodicity`]; the string form is the `type` tag.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  EnumString,
  IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum PeriodicityKind {
  Daily,
  Weekly,
  BiWeekly,
  Monthly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Periodicity {
  Daily,
  Weekly {
    days: BTreeSet<DayOfWeek>,
  },
  BiWeekly {
    days:   BTreeSet<DayOfWeek>,
    parity: WeekParity,
  },
  Monthly {
    #[serde(rename = "dayOfMonth")]
    day_of_month: u8,
  },
}

impl Periodicity {
  pub const MIN_DAY_OF_MONTH: u8 = 1;
  pub const MAX_DAY_OF_MONTH: u8 = 31;

  pub fn weekly(days: impl IntoIterator<Item = DayOfWeek>) -> Result<Self> {
    let days: BTreeSet<_> = days.into_iter().collect();
    if days.is_empty() {
      return Err(Error::EmptyDaySet("weekly"));
    }
    Ok(Self::Weekly { days })
  }

  pub fn biweekly(
    days: impl IntoIterator<Item = DayOfWeek>,
    parity: WeekParity,
  ) -> Result<Self> {
    let days: BTreeSet<_> = days.into_iter().collect();
    if days.is_empty() {
      return Err(Error::EmptyDaySet("biweekly"));
    }
    Ok(Self::BiWeekly { days, parity })
  }

  pub fn monthly(day_of_month: u8) -> Result<Self> {
    if !(Self::MIN_DAY_OF_MONTH..=Self::MAX_DAY_OF_MONTH).contains(&day_of_month) {
      return Err(Error::InvalidDayOfMonth(day_of_month));
    }
    Ok(Self::Monthly { day_of_month })
  }

  pub fn kind(&self) -> PeriodicityKind {
    match self {
      Self::Daily => PeriodicityKind::Daily,
      Self::Weekly { .. } => PeriodicityKind::Weekly,
      Self::BiWeekly { .. } => PeriodicityKind::BiWeekly,
      Self::Monthly { .. } => PeriodicityKind::Monthly,
    }
  }

  /// The discriminant string stored in the `periodicity_type` column.
  /// Must match the `rename_all = "lowercase"` serde tags above.
  pub fn discriminant(&self) -> &'static str { self.kind().into() }

  /// Re-check the invariants that the constructors enforce. Values built by
  /// deserialisation bypass the constructors, so readers call this.
  pub fn check(&self) -> Result<()> {
    match self {
      Self::Daily => Ok(()),
      Self::Weekly { days } if days.is_empty() => Err(Error::EmptyDaySet("weekly")),
      Self::Weekly { .. } => Ok(()),
      Self::BiWeekly { days, .. } if days.is_empty() => {
        Err(Error::EmptyDaySet("biweekly"))
      }
      Self::BiWeekly { .. } => Ok(()),
      Self::Monthly { day_of_month } => Self::monthly(*day_of_month).map(|_| ()),
    }
  }

  /// Whether an occurrence falls on `date`.
  ///
  /// A monthly subject on day 31 has no occurrence in shorter months.
  pub fn occurs_on(&self, date: NaiveDate) -> bool {
    let weekday = DayOfWeek::from(date.weekday());
    match self {
      Self::Daily => true,
      Self::Weekly { days } => days.contains(&weekday),
      Self::BiWeekly { days, parity } => {
        days.contains(&weekday) && WeekParity::of(date) == *parity
      }
      Self::Monthly { day_of_month } => date.day() == u32::from(*day_of_month),
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn day_numbers_follow_iso() {
    for n in 1..=7u8 {
      assert_eq!(DayOfWeek::try_from(n).unwrap().number(), n);
    }
    assert_eq!(DayOfWeek::from(Weekday::Mon), DayOfWeek::Monday);
    assert_eq!(DayOfWeek::from(Weekday::Sun).number(), 7);
    assert!(DayOfWeek::try_from(0).is_err());
    assert!(DayOfWeek::try_from(8).is_err());
  }

  #[test]
  fn weekly_dedupes_and_orders_days() {
    let p = Periodicity::weekly([
      DayOfWeek::Friday,
      DayOfWeek::Monday,
      DayOfWeek::Friday,
    ])
    .unwrap();
    assert_eq!(
      serde_json::to_value(&p).unwrap(),
      json!({ "type": "weekly", "days": [1, 5] })
    );
  }

  #[test]
  fn empty_day_sets_are_rejected() {
    assert!(matches!(
      Periodicity::weekly(Vec::<DayOfWeek>::new()),
      Err(Error::EmptyDaySet("weekly"))
    ));
    assert!(matches!(
      Periodicity::biweekly(Vec::<DayOfWeek>::new(), WeekParity::Odd),
      Err(Error::EmptyDaySet("biweekly"))
    ));
  }

  #[test]
  fn monthly_day_range() {
    assert!(Periodicity::monthly(1).is_ok());
    assert!(Periodicity::monthly(31).is_ok());
    assert!(matches!(Periodicity::monthly(0), Err(Error::InvalidDayOfMonth(0))));
    assert!(matches!(Periodicity::monthly(32), Err(Error::InvalidDayOfMonth(32))));
  }

  #[test]
  fn wire_shapes() {
    let daily: Periodicity = serde_json::from_value(json!({ "type": "daily" })).unwrap();
    assert_eq!(daily, Periodicity::Daily);

    let bi: Periodicity = serde_json::from_value(
      json!({ "type": "biweekly", "days": [2, 4], "parity": "even" }),
    )
    .unwrap();
    assert_eq!(bi.discriminant(), "biweekly");

    let monthly = Periodicity::monthly(15).unwrap();
    assert_eq!(
      serde_json::to_value(&monthly).unwrap(),
      json!({ "type": "monthly", "dayOfMonth": 15 })
    );
  }

  #[test]
  fn kind_parses_from_tag() {
    assert_eq!("biweekly".parse::<PeriodicityKind>().unwrap(), PeriodicityKind::BiWeekly);
    assert!("yearly".parse::<PeriodicityKind>().is_err());
  }

  #[test]
  fn occurrences() {
    // 2024-01-01 is a Monday in an odd week.
    let monday = date(2024, 1, 1);
    let next_monday = date(2024, 1, 8);

    assert!(Periodicity::Daily.occurs_on(monday));

    let weekly = Periodicity::weekly([DayOfWeek::Monday]).unwrap();
    assert!(weekly.occurs_on(monday));
    assert!(!weekly.occurs_on(date(2024, 1, 2)));

    let odd = Periodicity::biweekly([DayOfWeek::Monday], WeekParity::Odd).unwrap();
    assert!(odd.occurs_on(monday));
    assert!(!odd.occurs_on(next_monday));

    let monthly = Periodicity::monthly(31).unwrap();
    assert!(monthly.occurs_on(date(2024, 1, 31)));
    assert!(!monthly.occurs_on(date(2024, 2, 29)));
  }

  #[test]
  fn parity_alternates_across_a_53_week_year() {
    // 2020 has an ISO week 53; the alternation must carry straight into 2021.
    let mondays = [date(2020, 12, 21), date(2020, 12, 28), date(2021, 1, 4), date(2021, 1, 11)];
    let parities: Vec<WeekParity> = mondays.iter().map(|d| WeekParity::of(*d)).collect();
    assert_eq!(
      parities,
      [WeekParity::Odd, WeekParity::Even, WeekParity::Odd, WeekParity::Even]
    );

    let odd = Periodicity::biweekly([DayOfWeek::Monday], WeekParity::Odd).unwrap();
    let hits: Vec<bool> = mondays.iter().map(|d| odd.occurs_on(*d)).collect();
    assert_eq!(hits, [true, false, true, false]);
  }

  #[test]
  fn parity_is_shared_by_the_whole_week() {
    let monday = date(2021, 1, 4);
    for offset in 0..7 {
      let day = monday + chrono::Days::new(offset);
      assert_eq!(WeekParity::of(day), WeekParity::Odd, "{day}");
    }
    assert_eq!(WeekParity::of(date(2021, 1, 3)), WeekParity::Even);
    assert_eq!(WeekParity::of(date(1969, 12, 29)), WeekParity::Odd);
    assert_eq!(WeekParity::of(date(1969, 12, 28)), WeekParity::Even);
  }
}
