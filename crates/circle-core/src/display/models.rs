//! Display implementations for domain models.
//!
//! Value types display as the exact text they were parsed from, which is what
//! the record adapters write back to disk. Entities display as markdown
//! sections.

use std::fmt;

use crate::models::{Email, Name, Person, Phone, Plan, PlanDateTime, PlanName};

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PlanName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PlanDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_datetime().strftime(Self::FORMAT))
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- Phone: {}", self.phone)?;
        writeln!(f, "- Email: {}", self.email)?;
        writeln!(f)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- When: {}", self.date_time)?;
        writeln!(f, "- With: {}", self.friend.name)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Person, Plan, PlanDateTime};

    fn alice() -> Person {
        Person::new(
            "Alice".parse().unwrap(),
            "98765432".parse().unwrap(),
            "alice@example.com".parse().unwrap(),
        )
    }

    #[test]
    fn test_plan_date_time_display_matches_input() {
        let at: PlanDateTime = "2024-01-05 07:30".parse().unwrap();
        assert_eq!(at.to_string(), "2024-01-05 07:30");
    }

    #[test]
    fn test_person_display() {
        let output = format!("{}", alice());
        assert!(output.starts_with("## Alice\n"));
        assert!(output.contains("- Phone: 98765432"));
        assert!(output.contains("- Email: alice@example.com"));
    }

    #[test]
    fn test_plan_display() {
        let plan = Plan::new(
            "Dinner".parse().unwrap(),
            "2024-12-25 18:00".parse().unwrap(),
            alice(),
        );
        let output = format!("{}", plan);
        assert!(output.starts_with("## Dinner\n"));
        assert!(output.contains("- When: 2024-12-25 18:00"));
        assert!(output.contains("- With: Alice"));
    }
}
