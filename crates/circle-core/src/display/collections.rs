//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{Person, Plan};

/// Newtype wrapper for displaying a list of persons.
///
/// Handles empty lists gracefully.
pub struct Persons<'a>(pub &'a [Person]);

impl Persons<'_> {
    /// Markdown heading with the number of persons listed.
    pub fn heading(&self) -> String {
        format!("# Persons ({})", self.0.len())
    }
}

impl fmt::Display for Persons<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No persons found.")
        } else {
            for person in self.0 {
                write!(f, "{}", person)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a list of plans in chronological order.
///
/// # Examples
///
/// ```rust
/// use circle_core::{display::Plans, models::{Person, Plan}};
///
/// # fn example() -> Result<(), circle_core::ValidationError> {
/// let bob = Person::new("Bob".parse()?, "555".parse()?, "bob@example.com".parse()?);
/// let plans = vec![
///     Plan::new("Dinner".parse()?, "2024-12-25 18:00".parse()?, bob.clone()),
///     Plan::new("Breakfast".parse()?, "2024-12-25 08:00".parse()?, bob),
/// ];
/// let output = format!("{}", Plans(&plans));
/// assert!(output.find("Breakfast") < output.find("Dinner"));
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct Plans<'a>(pub &'a [Plan]);

impl Plans<'_> {
    pub fn heading(&self) -> String {
        format!("# Plans ({})", self.0.len())
    }
}

impl fmt::Display for Plans<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }
        let mut ordered: Vec<&Plan> = self.0.iter().collect();
        ordered.sort_by_key(|plan| plan.date_time);
        for plan in ordered {
            write!(f, "{}", plan)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collections() {
        assert_eq!(format!("{}", Persons(&[])), "No persons found.\n");
        assert_eq!(format!("{}", Plans(&[])), "No plans found.\n");
        assert_eq!(Plans(&[]).heading(), "# Plans (0)");
    }

    #[test]
    fn test_persons_lists_every_person() {
        let persons: Vec<Person> = ["Alice", "Bob"]
            .iter()
            .map(|name| {
                Person::new(
                    name.parse().unwrap(),
                    "12345".parse().unwrap(),
                    "x@example.com".parse().unwrap(),
                )
            })
            .collect();
        let wrapper = Persons(&persons);
        let output = format!("{}", wrapper);

        assert_eq!(wrapper.heading(), "# Persons (2)");
        assert!(output.contains("## Alice"));
        assert!(output.contains("## Bob"));
    }
}
