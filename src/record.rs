pub mod energy;
pub mod fields;
pub mod reservation;

pub use self::{
    energy::{NetReading, PhaseReading},
    reservation::Reservation,
};
use crate::error::RecordError;

/// One delimited line's fields, converted into a typed record.
///
/// The input field order is a parser-internal detail; downstream code only
/// ever sees named fields.
pub trait ParseRecord: Sized {
    /// Exact number of delimited fields one record occupies.
    const FIELD_COUNT: usize;

    /// Convert split fields into a record.
    ///
    /// The loader guarantees the slice holds exactly [`Self::FIELD_COUNT`]
    /// items.
    fn parse_record(fields: &[&str]) -> Result<Self, RecordError>;
}
