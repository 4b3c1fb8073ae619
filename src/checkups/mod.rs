//! Built-in checkups.
//!
//! Each checkup is an independent implementation of the
//! [`Checkup`](crate::doctoring::Checkup) contract; the registry here is the
//! single place that wires them up with their shipped version policies.

pub mod visual_studio;

pub use visual_studio::VisualStudioCheckup;

use crate::doctoring::Checkup;
use crate::error::Result;

/// Minimum Visual Studio version with .NET 6 workload support.
const VISUAL_STUDIO_MINIMUM: &str = "16.9.0";

/// The checkups medic ships with, in examination order.
///
/// Construction fails only on an invalid shipped version policy, which is
/// a programming error surfaced before any checkup runs.
pub fn built_in_checkups() -> Result<Vec<Box<dyn Checkup>>> {
    Ok(vec![Box::new(VisualStudioCheckup::new(
        VISUAL_STUDIO_MINIMUM,
        None,
    )?)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_checkups_construct() {
        let checkups = built_in_checkups().unwrap();
        assert!(!checkups.is_empty());
    }

    #[test]
    fn built_in_ids_are_unique() {
        let checkups = built_in_checkups().unwrap();
        let mut ids: Vec<_> = checkups.iter().map(|c| c.id().to_string()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), checkups.len());
    }
}
