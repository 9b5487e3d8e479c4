//! Walkthroughs that exercise the bag the way a person filling jars would.
//!
//! Both walkthroughs drive the jars through `&mut dyn Bag` so they work
//! against the contract rather than the concrete jar.

use crate::jar::{Bag, Cookie, CookieFlavor, CookieJar};
use anyhow::{Context, Result};
use std::fmt;

/// What jar A starts with in the transfer walkthrough.
pub const DEFAULT_FILL: [CookieFlavor; 4] = [
    CookieFlavor::ChocolateChip,
    CookieFlavor::Stroopwafel,
    CookieFlavor::ChocolateChip,
    CookieFlavor::Fortune,
];

/// Result of filling jar A and emptying it into jar B.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReport {
    pub jar_a_before: String,
    pub jar_a_after: String,
    pub jar_b_after: String,
    pub jar_b_count: usize,
    /// Running total kept by the walkthrough itself; 0 once every cookie moved.
    pub cookies_left: usize,
}

impl fmt::Display for TransferReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cookieJarA Contents: {}", self.jar_a_before)?;
        writeln!(f)?;
        writeln!(f, "Let's move a cookie from cookieJarA to cookieJarB")?;
        writeln!(f, "cookieJarA Contents: {}", self.jar_a_after)?;
        writeln!(f, "cookieJarB Contents: {}", self.jar_b_after)?;
        write!(f, "{}", self.cookies_left)
    }
}

/// Result of moving a single cookie between two jars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertRemoveReport {
    pub jar_a_count_before: usize,
    pub jar_a_before: String,
    pub moved: CookieFlavor,
    pub jar_b_after: String,
    pub jar_a_count_after: usize,
    pub jar_a_after: String,
}

impl fmt::Display for InsertRemoveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cookieJarA has {} cookies!", self.jar_a_count_before)?;
        writeln!(f, "{}", self.jar_a_before)?;
        writeln!(f)?;
        writeln!(f, "cookieJarB received a cookie from cookieJarA")?;
        writeln!(f, "{}", self.jar_b_after)?;
        writeln!(f, "cookieJarA now has {} cookies!", self.jar_a_count_after)?;
        write!(f, "{}", self.jar_a_after)
    }
}

fn fill(jar: &mut dyn Bag<CookieFlavor>, flavors: &[CookieFlavor]) -> usize {
    for &flavor in flavors {
        jar.insert(Cookie::new(flavor));
    }
    flavors.len()
}

/// Fills jar A with one cookie per entry of `fill`, then moves them into
/// jar B one by one while the walkthrough's own tally says cookies are left.
pub fn transfer_demo(fill_with: &[CookieFlavor]) -> Result<TransferReport> {
    let mut jar_a = CookieJar::new();
    let mut jar_b = CookieJar::new();
    let a: &mut dyn Bag<CookieFlavor> = &mut jar_a;
    let b: &mut dyn Bag<CookieFlavor> = &mut jar_b;

    let mut cookies_left = fill(a, fill_with);
    let jar_a_before = a.describe();

    while cookies_left > 0 {
        let cookie = a.remove().with_context(|| {
            format!("cookieJarA ran out with {} cookie(s) unaccounted for", cookies_left)
        })?;
        b.insert(cookie);
        cookies_left -= 1;
    }

    Ok(TransferReport {
        jar_a_before,
        jar_a_after: a.describe(),
        jar_b_after: b.describe(),
        jar_b_count: b.count(),
        cookies_left,
    })
}

/// Fills jar A and hands exactly one of its cookies to jar B.
pub fn insert_remove_demo() -> Result<InsertRemoveReport> {
    use CookieFlavor::*;

    let mut jar_a = CookieJar::new();
    let mut jar_b = CookieJar::new();
    let a: &mut dyn Bag<CookieFlavor> = &mut jar_a;
    let b: &mut dyn Bag<CookieFlavor> = &mut jar_b;

    fill(a, &[ChocolateChip, ChocolateChip, Fortune, Stroopwafel]);
    let jar_a_count_before = a.count();
    let jar_a_before = a.describe();

    let cookie = a.remove().context("cookieJarA is empty")?;
    let moved = cookie.category();
    b.insert(cookie);

    Ok(InsertRemoveReport {
        jar_a_count_before,
        jar_a_before,
        moved,
        jar_b_after: b.describe(),
        jar_a_count_after: a.count(),
        jar_a_after: a.describe(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(glyphs: &str) -> Vec<char> {
        let mut chars: Vec<char> = glyphs.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn test_transfer_demo_empties_jar_a() {
        let report = transfer_demo(&DEFAULT_FILL).unwrap();

        assert_eq!(report.cookies_left, 0);
        assert_eq!(report.jar_a_after, "");
        assert_eq!(report.jar_b_count, 4);
        assert_eq!(sorted(&report.jar_b_after), sorted("🍪🧇🍪🥠"));
        assert_eq!(sorted(&report.jar_a_before), sorted("🍪🍪🧇🥠"));
    }

    #[test]
    fn test_transfer_report_output() {
        let output = transfer_demo(&DEFAULT_FILL).unwrap().to_string();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Let's move a cookie from cookieJarA to cookieJarB");
        assert_eq!(lines[3], "cookieJarA Contents: ");
        assert!(lines[4].starts_with("cookieJarB Contents: "));
        assert_eq!(lines[5], "0");
    }

    #[test]
    fn test_transfer_demo_with_custom_fill() {
        let report = transfer_demo(&[CookieFlavor::Fortune, CookieFlavor::Fortune]).unwrap();
        assert_eq!(report.jar_b_after, "🥠🥠");
        assert_eq!(report.jar_b_count, 2);

        let report = transfer_demo(&[]).unwrap();
        assert_eq!(report.jar_a_before, "");
        assert_eq!(report.jar_b_count, 0);
    }

    #[test]
    fn test_insert_remove_demo_moves_one_cookie() {
        let report = insert_remove_demo().unwrap();

        assert_eq!(report.jar_a_count_before, 4);
        assert_eq!(report.jar_a_count_after, 3);
        assert_eq!(report.jar_b_after.chars().count(), 1);

        let mut rejoined = report.jar_a_after.clone();
        rejoined.push_str(&report.jar_b_after);
        assert_eq!(sorted(&rejoined), sorted(&report.jar_a_before));
        assert!(report.to_string().contains("cookieJarA now has 3 cookies!"));
    }
}
