//! Series source port trait.

use crate::domain::error::CarbondashError;
use crate::domain::instrument::Instrument;
use crate::domain::series::Series;

pub trait SeriesPort {
    /// Full history of one instrument, in source order.
    fn fetch_series(&self, instrument: Instrument) -> Result<Series, CarbondashError>;

    fn list_instruments(&self) -> Result<Vec<Instrument>, CarbondashError>;

    /// Earliest and latest well-formed date plus the number of entries.
    fn get_data_range(
        &self,
        instrument: Instrument,
    ) -> Result<Option<(String, String, usize)>, CarbondashError>;
}
