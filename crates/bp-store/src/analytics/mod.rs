//! Read-only reports computed on demand from the index.
//!
//! Each report is a free function over [`crate::index::Index`] plus a thin
//! `impl Store` wrapper. Whole-store reports never fail.

pub mod coverage;
pub mod gaps;
pub mod orphans;
pub mod test_coverage;

use bp_core::enums::EntityKind;
use bp_core::responses::{CoverageReport, GapReport, OrphanReport, TestCoverageReport};

use crate::service::Store;

impl Store {
    /// Entities of target kinds that nothing references. `None` checks every
    /// target kind.
    #[must_use]
    pub fn find_orphans(&self, kind: Option<EntityKind>) -> OrphanReport {
        orphans::find_orphans(self.index(), kind)
    }

    #[must_use]
    pub fn find_gaps(&self) -> GapReport {
        gaps::find_gaps(self.index(), self.low_coverage_threshold())
    }

    #[must_use]
    pub fn coverage_report(&self) -> CoverageReport {
        coverage::coverage_report(self.index())
    }

    #[must_use]
    pub fn test_coverage(&self) -> TestCoverageReport {
        test_coverage::test_coverage(self.index())
    }
}
