use std::cmp::Ordering;

use crate::models::{Region, ScoreInterval};

///
/// Anything that sits on a chromosome at a start coordinate.
///
/// The coordinate system of `start` is up to the implementor; ordering only ever
/// compares records of the same type.
///
pub trait GenomicPosition {
    fn chr(&self) -> &str;
    fn start(&self) -> u32;
}

impl GenomicPosition for Region {
    fn chr(&self) -> &str {
        &self.chr
    }

    fn start(&self) -> u32 {
        self.start
    }
}

impl GenomicPosition for ScoreInterval {
    fn chr(&self) -> &str {
        &self.chr
    }

    fn start(&self) -> u32 {
        self.start
    }
}

#[inline]
fn cmp_position<T: GenomicPosition>(a: &T, b: &T) -> Ordering {
    a.chr().cmp(b.chr()).then_with(|| a.start().cmp(&b.start()))
}

///
/// Stable sort by `(chromosome, start)` ascending. Records with equal keys keep
/// their input order.
///
pub fn sort_by_position<T: GenomicPosition>(records: &mut [T]) {
    records.sort_by(cmp_position);
}
