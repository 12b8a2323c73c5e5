//! Random, human-plausible names for directories and files.
//!
//! Base names come from static word lists per name family, joined with a
//! random separator, a version tag, and on every third file name an embedded
//! date. The date cadence is driven by a counter owned by the synthesizer,
//! and all randomness flows through a caller-provided source, so tests can
//! seed it and get reproducible output.

use chrono::{Duration, NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::NameFamily;

mod wordlists;

use wordlists::{
    DIRECTORY_NAMES, DIRECTORY_SUFFIXES, DOCUMENT_NAMES, IMAGE_NAMES, SLIDE_NAMES, SOUND_NAMES,
    SPREADSHEET_NAMES,
};

const SEPARATORS: &[char] = &['.', '_', '-', ' ', '+', '='];

/// Every n-th file name gets a date suffix.
const DATE_CADENCE: u64 = 3;

/// Earliest date embedded in a file name.
fn earliest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1974, 4, 25).unwrap_or_default()
}

/// Produces directory and file names. Stateless apart from the counter that
/// controls the date-suffix cadence.
#[derive(Debug, Default)]
pub struct NameSynthesizer {
    name_count: u64,
}

impl NameSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A directory name: zero-padded number, separator, base name,
    /// separator, suffix (e.g. `042_project-atlas.archived`).
    pub fn directory_name<R: Rng>(&mut self, rng: &mut R) -> String {
        let number = rng.gen_range(0..1000);
        let sep1 = separator(rng);
        let sep2 = separator(rng);
        let base = pick(DIRECTORY_NAMES, rng);
        let suffix = pick(DIRECTORY_SUFFIXES, rng);

        format!("{number:03}{sep1}{base}{sep2}{suffix}")
    }

    /// A file base name (no extension) for the given family: base name,
    /// separator, version tag, and every third call a date suffix.
    pub fn file_name<R: Rng>(&mut self, rng: &mut R, family: NameFamily) -> String {
        let list = match family {
            NameFamily::Document => DOCUMENT_NAMES,
            NameFamily::Spreadsheet => SPREADSHEET_NAMES,
            NameFamily::Image => IMAGE_NAMES,
            NameFamily::Sound => SOUND_NAMES,
            NameFamily::Slides => SLIDE_NAMES,
        };

        let base = pick(list, rng);
        let sep1 = separator(rng);
        let version = rng.gen_range(1..=25);

        self.name_count += 1;
        if self.name_count % DATE_CADENCE == 0 {
            let sep2 = separator(rng);
            let picked = random_date(rng);
            let date = wrap_date(rng, picked);
            format!("{base}{sep1}v{version}{sep2}{date}")
        } else {
            format!("{base}{sep1}v{version}")
        }
    }
}

fn pick<R: Rng>(list: &'static [&'static str], rng: &mut R) -> &'static str {
    // the word lists are compile-time constants, so an empty slice cannot
    // occur outside of a programming error
    list.choose(rng).copied().unwrap_or("untitled")
}

fn separator<R: Rng>(rng: &mut R) -> char {
    SEPARATORS.choose(rng).copied().unwrap_or('_')
}

/// A date between `earliest_date` and today, inclusive.
fn random_date<R: Rng>(rng: &mut R) -> NaiveDate {
    let start = earliest_date();
    let span = (Utc::now().date_naive() - start).num_days();
    if span <= 0 {
        return start;
    }
    start + Duration::days(rng.gen_range(0..=span))
}

fn wrap_date<R: Rng>(rng: &mut R, date: NaiveDate) -> String {
    let formatted = date.format("%Y-%m-%d").to_string();
    match rng.gen_range(0..4) {
        1 => format!("({formatted})"),
        2 => format!("{{{formatted}}}"),
        3 => format!("[{formatted}]"),
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use regex_lite::Regex;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_directory_name_shape() {
        let mut rng = rng();
        let mut names = NameSynthesizer::new();

        let pattern = Regex::new(r"^\d{3}[._\- +=].+[._\- +=].+$").unwrap();
        for _ in 0..100 {
            let name = names.directory_name(&mut rng);
            assert!(pattern.is_match(&name), "unexpected shape: {name:?}");
        }
    }

    #[test]
    fn test_file_name_version_always_present() {
        let mut rng = rng();
        let mut names = NameSynthesizer::new();

        let versioned = Regex::new(r"[._\- +=]v([1-9]|1[0-9]|2[0-5])").unwrap();
        for _ in 0..100 {
            let name = names.file_name(&mut rng, NameFamily::Document);
            assert!(versioned.is_match(&name), "missing version tag: {name:?}");
        }
    }

    #[test]
    fn test_every_third_file_name_has_date() {
        let with_date =
            Regex::new(r"[._\- +=][\(\{\[]?(\d{4}-\d{2}-\d{2})[\)\}\]]?$").unwrap();
        let families = [
            NameFamily::Document,
            NameFamily::Spreadsheet,
            NameFamily::Image,
            NameFamily::Sound,
            NameFamily::Slides,
        ];

        for family in families {
            let mut rng = rng();
            let mut names = NameSynthesizer::new();

            let first = names.file_name(&mut rng, family);
            let second = names.file_name(&mut rng, family);
            let third = names.file_name(&mut rng, family);

            assert!(!with_date.is_match(&first), "unexpected date: {first:?}");
            assert!(!with_date.is_match(&second), "unexpected date: {second:?}");

            let captures = with_date
                .captures(&third)
                .unwrap_or_else(|| panic!("missing date: {third:?}"));
            let date =
                NaiveDate::parse_from_str(&captures[1], "%Y-%m-%d").expect("parseable date");
            assert!(date >= earliest_date());
            assert!(date <= Utc::now().date_naive());
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = NameSynthesizer::new();
        let mut b = NameSynthesizer::new();
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);

        for _ in 0..20 {
            assert_eq!(a.directory_name(&mut rng_a), b.directory_name(&mut rng_b));
            assert_eq!(
                a.file_name(&mut rng_a, NameFamily::Image),
                b.file_name(&mut rng_b, NameFamily::Image)
            );
        }
    }
}
