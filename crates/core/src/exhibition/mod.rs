mod dates;
mod error;
mod mock_data;
mod operations;
mod program;
mod requests;
mod state;
mod types;

pub use dates::{
    format_date_range, format_localized_date, parse_clock_time, parse_localized_date,
    parse_localized_date_in, parse_timeframe, Language,
};
pub use error::{DateError, ExhibitionError};
pub use mock_data::{format_seed_summary, generate_seed_exhibitions};
pub use operations::{
    count_by_state, current_exhibitions, featured_exhibition, filter_by_state,
    past_exhibitions, search_exhibitions, upcoming_exhibitions, validate_exhibition, StateCounts,
};
pub use program::{
    compare_by_start_time, flatten_program, group_program_by_date, sort_entries_by_start_time,
    UndatedPolicy, UNKNOWN_DAY_LABEL,
};
pub use requests::{CreateExhibitionRequest, UpdateExhibitionRequest};
pub use state::{classify, classify_at, ExhibitionState};
pub use types::{Contributor, Exhibition, ProgramByDate, ProgramEntry};
