mod broadcaster;
mod competition;
mod competition_detail;
mod discipline;
mod gender;
mod race;
mod race_result;
mod technical_delegate;

pub use broadcaster::Broadcaster;
pub use competition::{Competition, StatusFlags};
pub use competition_detail::CompetitionDetail;
pub use discipline::Discipline;
pub use gender::Gender;
pub use race::{Race, RaceDate, Run};
pub use race_result::RaceResult;
pub use technical_delegate::TechnicalDelegate;
